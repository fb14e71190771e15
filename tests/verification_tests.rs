//! End-to-end verification tests
//!
//! Exercises the full path from declared manifest records through the
//! content-addressed store to the missing-or-invalid set, using real files in
//! temporary directories.

mod common;

use common::{absent_artifact, fixtures, TestStore};
use launchpad_core::{ArtifactKind, ArtifactRecord, ContentHash, EMPTY_SHA1};
use launchpad_verify::{
    check_artifact, missing_or_invalid, scan, verify_artifact, VerificationOutcome, VerifyError,
};

#[test]
fn intact_release_has_no_missing_artifacts() {
    let store = TestStore::new();
    let manifest = fixtures::intact_release(&store, "1.20.4");

    let report = scan(&manifest, &store.store).expect("scan succeeds");
    assert_eq!(report.total, 3);
    assert_eq!(report.valid, 3);
    assert!(report.is_complete());

    let missing = missing_or_invalid(&manifest, &store.store).expect("scan succeeds");
    assert!(missing.is_empty());
}

#[test]
fn corrupted_and_absent_artifacts_are_reported_exactly() {
    let store = TestStore::new();

    let intact =
        store.intact_artifact(ArtifactKind::Asset, "textures/dirt.png", b"dirt texture");
    let truncated =
        store.intact_artifact(ArtifactKind::Asset, "textures/sand.png", b"sand texture bytes");
    let flipped =
        store.intact_artifact(ArtifactKind::Library, "com.example:flip:1.0", b"library payload");
    let never_fetched = absent_artifact(ArtifactKind::Asset, "textures/new.png", b"not yet here");

    // Truncate one object, flip a byte in another
    store.corrupt_object(&truncated, b"sand");
    store.corrupt_object(&flipped, b"librarY payload");

    let manifest = fixtures::manifest_with(
        "1.20.4",
        vec![
            intact.clone(),
            truncated.clone(),
            flipped.clone(),
            never_fetched.clone(),
        ],
    );

    let missing = missing_or_invalid(&manifest, &store.store).expect("scan succeeds");
    assert_eq!(
        missing,
        vec![truncated.clone(), flipped.clone(), never_fetched.clone()]
    );

    let report = scan(&manifest, &store.store).expect("scan succeeds");
    assert_eq!(report.valid, 1);
    assert_eq!(report.failures[0].outcome, VerificationOutcome::SizeMismatch);
    assert_eq!(report.failures[1].outcome, VerificationOutcome::HashMismatch);
    assert_eq!(report.failures[2].outcome, VerificationOutcome::Missing);
}

#[test]
fn redownload_recheck_cycle() {
    let store = TestStore::new();
    let record = store.intact_artifact(ArtifactKind::Asset, "sounds/step.ogg", b"step sound");

    assert!(verify_artifact(&store.store, &record));

    // Simulate corruption on disk, as the launcher would find before a repair
    store.corrupt_object(&record, b"step s0und");
    assert_eq!(
        check_artifact(&store.store, &record),
        VerificationOutcome::HashMismatch
    );

    // Simulate the download layer restoring the object, then a targeted re-check
    store.corrupt_object(&record, b"step sound");
    assert!(verify_artifact(&store.store, &record));
}

#[test]
fn zero_byte_artifact_with_empty_input_hash_is_valid() {
    let store = TestStore::new();
    let hash = ContentHash::new(EMPTY_SHA1).expect("well-known hash is valid");
    let record = ArtifactRecord::asset("empty.dat", hash, 0).expect("record is valid");

    store.put_object(b"");
    assert_eq!(
        check_artifact(&store.store, &record),
        VerificationOutcome::Valid
    );
}

#[test]
fn removed_object_becomes_missing() {
    let store = TestStore::new();
    let record = store.intact_artifact(ArtifactKind::Asset, "a.png", b"alpha");
    assert!(verify_artifact(&store.store, &record));

    store.remove_object(&record);
    assert_eq!(
        check_artifact(&store.store, &record),
        VerificationOutcome::Missing
    );
}

#[cfg(unix)]
#[test]
fn unreadable_object_is_absorbed_without_aborting_the_scan() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let store = TestStore::new();
    let readable = store.intact_artifact(ArtifactKind::Asset, "ok.png", b"readable");
    let unreadable = store.intact_artifact(ArtifactKind::Asset, "locked.png", b"locked away");
    let trailing = store.intact_artifact(ArtifactKind::Asset, "after.png", b"still checked");

    let path = store.store.object_path(&unreadable.hash);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).expect("chmod succeeds");

    // Privileged users bypass file modes; nothing to observe then
    if fs::File::open(&path).is_ok() {
        return;
    }

    let manifest = fixtures::manifest_with(
        "1.20.4",
        vec![readable, unreadable.clone(), trailing],
    );

    let report = scan(&manifest, &store.store).expect("scan succeeds");
    assert_eq!(report.valid, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].record, unreadable);
    assert_eq!(report.failures[0].outcome, VerificationOutcome::IoError);
}

#[test]
fn scan_fails_hard_only_for_unavailable_root() {
    let store = TestStore::new();
    let manifest = fixtures::intact_release(&store, "1.20.4");

    let bad_store = launchpad_verify::ObjectStore::new(store.store.root().join("nonexistent"));
    assert!(matches!(
        scan(&manifest, &bad_store),
        Err(VerifyError::StorageUnavailable(_))
    ));
}

#[test]
fn manifest_from_parsed_json_scans_cleanly() {
    let store = TestStore::new();
    let present = store.intact_artifact(ArtifactKind::Asset, "textures/grass.png", b"grass");
    let absent = absent_artifact(ArtifactKind::Library, "com.example:gone:2.1", b"gone");

    // The manifest-parsing collaborator hands over records as JSON
    let json = serde_json::json!({
        "id": "1.20.4",
        "release_type": "release",
        "artifacts": [
            {
                "kind": "asset",
                "identifier": present.identifier.as_str(),
                "hash": present.hash.as_str(),
                "size": present.size,
            },
            {
                "kind": "library",
                "identifier": absent.identifier.as_str(),
                "hash": absent.hash.as_str(),
                "size": absent.size,
            },
        ],
    });

    let manifest: launchpad_core::ReleaseManifest =
        serde_json::from_value(json).expect("manifest JSON is well-formed");
    assert_eq!(manifest.id(), "1.20.4");

    let missing = missing_or_invalid(&manifest, &store.store).expect("scan succeeds");
    assert_eq!(missing, vec![absent]);
}

#[test]
fn libraries_and_assets_share_one_object_namespace() {
    let store = TestStore::new();

    // The same bytes declared as both an asset and a library verify against
    // the same stored object.
    let asset = store.intact_artifact(ArtifactKind::Asset, "data/shared.bin", b"shared bytes");
    let library = ArtifactRecord::library(
        "com.example:shared:1.0",
        asset.hash.clone(),
        asset.size as i64,
    )
    .expect("record is valid");

    let manifest = fixtures::manifest_with("1.20.4", vec![asset, library]);
    let missing = missing_or_invalid(&manifest, &store.store).expect("scan succeeds");
    assert!(missing.is_empty());
}
