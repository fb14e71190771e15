//! Test fixtures
//!
//! Manifest fixtures built on top of a `TestStore`.

use launchpad_core::{ArtifactKind, ArtifactRecord, ReleaseManifest};

use super::TestStore;

/// Build a release manifest from pre-built records
pub fn manifest_with(id: &str, records: Vec<ArtifactRecord>) -> ReleaseManifest {
    ReleaseManifest::builder(id)
        .release_type("release")
        .assets_index("12")
        .artifacts(records)
        .build()
        .expect("Fixture manifest is valid")
}

/// Populate the store with a fully intact release of assets and libraries
pub fn intact_release(store: &TestStore, id: &str) -> ReleaseManifest {
    manifest_with(
        id,
        vec![
            store.intact_artifact(ArtifactKind::Asset, "sounds/click.ogg", b"click sound data"),
            store.intact_artifact(ArtifactKind::Asset, "textures/stone.png", b"stone texture data"),
            store.intact_artifact(
                ArtifactKind::Library,
                "org.lwjgl:lwjgl:3.3.3",
                b"lwjgl jar bytes",
            ),
        ],
    )
}
