//! Session wiring
//!
//! One tour session: load the manifest, resolve the initial selection,
//! mirror it into the location, and watch for idleness. Collaborators get
//! the store by `Arc`; there is no ambient global.

use std::sync::Arc;

use tour_core::idle::{ActivitySignal, IdleConfig, IdleDetector, IdleHandle};
use tour_core::location::Location;
use tour_core::navigation::{resolve_initial, Navigator};
use tour_core::state::TourStore;
use tour_core::url_sync::UrlSync;
use tour_data::sources::ManifestSource;

pub struct TourSession {
    store: Arc<TourStore>,
    // The store only holds subscribers weakly; the session keeps the URL
    // synchronizer alive.
    _url_sync: Arc<UrlSync>,
    idle: IdleHandle,
}

impl TourSession {
    /// Start a session. If the manifest never loads, the session stays in
    /// the unresolved initial state; there is no retry or watchdog.
    pub async fn start(
        source: &dyn ManifestSource,
        location: Arc<dyn Location>,
        idle_config: IdleConfig,
    ) -> Self {
        let store = Arc::new(TourStore::new());
        let url_sync = UrlSync::attach(&store, location.clone());

        if tour_data::load_into(source, &store).await {
            resolve_initial(&store, location.as_ref());
        }

        let idle = IdleDetector::spawn(store.clone(), idle_config);

        Self {
            store,
            _url_sync: url_sync,
            idle,
        }
    }

    pub fn store(&self) -> &Arc<TourStore> {
        &self.store
    }

    /// Navigation interface for arrow controls and other chrome.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.store.clone())
    }

    /// Forward a user input event to the idle detector.
    pub fn activity(&self, signal: ActivitySignal) {
        self.idle.activity(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tour_core::location::MemoryLocation;
    use tour_data::sources::FileSource;

    fn manifest_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_session_resolves_defaults_and_reflects_url() {
        let file = manifest_file(
            r#"{"blocks": [{"id": "lobby", "labs": [{"id": "north"}, {"id": "south"}]}]}"#,
        );
        let source = FileSource::new(file.path().to_path_buf());
        let location = Arc::new(MemoryLocation::default());

        let session =
            TourSession::start(&source, location.clone(), IdleConfig::default()).await;

        let snapshot = session.store().snapshot();
        assert_eq!(snapshot.current_block_id.as_deref(), Some("lobby"));
        assert_eq!(snapshot.current_image_id.as_deref(), Some("north"));
        assert_eq!(location.current().query(), Some("block=lobby&view=north"));
    }

    #[tokio::test]
    async fn test_session_restores_deep_link() {
        let file = manifest_file(
            r#"{"blocks": [{"id": "lobby", "labs": [{"id": "north"}]}]}"#,
        );
        let source = FileSource::new(file.path().to_path_buf());
        let location =
            Arc::new(MemoryLocation::parse("http://localhost/?block=B2&view=I5").unwrap());

        let session = TourSession::start(&source, location, IdleConfig::default()).await;

        let snapshot = session.store().snapshot();
        assert_eq!(snapshot.current_block_id.as_deref(), Some("B2"));
        assert_eq!(snapshot.current_image_id.as_deref(), Some("I5"));
    }

    #[tokio::test]
    async fn test_failed_load_leaves_session_unresolved() {
        let source = FileSource::new("/nonexistent/manifest.json".into());
        let location = Arc::new(MemoryLocation::default());

        let session =
            TourSession::start(&source, location.clone(), IdleConfig::default()).await;

        let snapshot = session.store().snapshot();
        assert!(snapshot.manifest.is_none());
        assert!(snapshot.current_block_id.is_none());
        assert!(snapshot.current_image_id.is_none());
        assert_eq!(location.current().query(), None);
    }

    #[tokio::test]
    async fn test_navigation_keeps_url_in_step() {
        let file = manifest_file(
            r#"{"blocks": [{"id": "lobby", "labs": [{"id": "north"}, {"id": "south"}]}]}"#,
        );
        let source = FileSource::new(file.path().to_path_buf());
        let location = Arc::new(MemoryLocation::default());

        let session =
            TourSession::start(&source, location.clone(), IdleConfig::default()).await;
        session.navigator().next_image().unwrap();

        assert_eq!(location.current().query(), Some("block=lobby&view=south"));
    }
}
