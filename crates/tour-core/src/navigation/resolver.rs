//! Initial-state resolution
//!
//! Runs exactly once per session, from the manifest loader's success path,
//! so it always observes a fully populated manifest.

use tracing::{debug, warn};

use super::DeepLink;
use crate::location::Location;
use crate::state::TourStore;

/// Compute and write the initial (block, image) selection.
///
/// A deep link in the location's query parameters wins and is adopted
/// verbatim, without checking it against the manifest; a link that does not
/// resolve only earns a warning. Otherwise the first block (and its first
/// image, if any) is selected. A manifest with zero blocks, or a first block
/// with zero images, leaves the corresponding field(s) unset — a valid
/// terminal state, not an error.
pub fn resolve_initial(store: &TourStore, location: &dyn Location) {
    let url = location.current();

    if let Some(link) = DeepLink::from_url(&url) {
        if let Some(manifest) = store.snapshot().manifest {
            let resolves = manifest
                .block(&link.block_id)
                .map_or(false, |block| block.image(&link.image_id).is_some());
            if !resolves {
                warn!(
                    "Deep link block='{}' view='{}' does not resolve in the loaded manifest",
                    link.block_id, link.image_id
                );
            }
        }
        debug!(
            "Restoring selection from deep link: block='{}' view='{}'",
            link.block_id, link.image_id
        );
        store.set_selection(link.block_id, link.image_id);
        return;
    }

    let snapshot = store.snapshot();
    let Some(manifest) = snapshot.manifest else {
        return;
    };
    let Some(first) = manifest.first_block() else {
        debug!("Manifest has no blocks; selection stays unset");
        return;
    };

    store.set_block(first.id.clone());
    if let Some(image) = first.images.first() {
        store.set_image(image.id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;
    use crate::manifest::Manifest;

    fn manifest(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_default_resolution() {
        let store = TourStore::new();
        store.set_manifest(manifest(
            r#"{"blocks": [
                {"id": "lobby", "labs": [{"id": "north"}, {"id": "south"}]},
                {"id": "garden", "labs": [{"id": "east"}]}
            ]}"#,
        ));

        resolve_initial(&store, &MemoryLocation::default());

        let snapshot = store.snapshot();
        assert_eq!(snapshot.current_block_id.as_deref(), Some("lobby"));
        assert_eq!(snapshot.current_image_id.as_deref(), Some("north"));
    }

    #[test]
    fn test_deep_link_restore_is_verbatim() {
        let store = TourStore::new();
        store.set_manifest(manifest(r#"{"blocks": [{"id": "lobby"}]}"#));

        let location = MemoryLocation::parse("http://localhost/?block=B2&view=I5").unwrap();
        resolve_initial(&store, &location);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.current_block_id.as_deref(), Some("B2"));
        assert_eq!(snapshot.current_image_id.as_deref(), Some("I5"));
    }

    #[test]
    fn test_partial_deep_link_falls_back_to_defaults() {
        let store = TourStore::new();
        store.set_manifest(manifest(
            r#"{"blocks": [{"id": "lobby", "labs": [{"id": "north"}]}]}"#,
        ));

        let location = MemoryLocation::parse("http://localhost/?block=garden").unwrap();
        resolve_initial(&store, &location);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.current_block_id.as_deref(), Some("lobby"));
        assert_eq!(snapshot.current_image_id.as_deref(), Some("north"));
    }

    #[test]
    fn test_empty_manifest_leaves_selection_unset() {
        let store = TourStore::new();
        store.set_manifest(manifest(r#"{"blocks": []}"#));

        resolve_initial(&store, &MemoryLocation::default());

        let snapshot = store.snapshot();
        assert!(snapshot.current_block_id.is_none());
        assert!(snapshot.current_image_id.is_none());
    }

    #[test]
    fn test_empty_first_block_sets_block_only() {
        let store = TourStore::new();
        store.set_manifest(manifest(
            r#"{"blocks": [{"id": "lobby"}, {"id": "garden", "labs": [{"id": "east"}]}]}"#,
        ));

        resolve_initial(&store, &MemoryLocation::default());

        let snapshot = store.snapshot();
        assert_eq!(snapshot.current_block_id.as_deref(), Some("lobby"));
        assert!(snapshot.current_image_id.is_none());
    }
}
