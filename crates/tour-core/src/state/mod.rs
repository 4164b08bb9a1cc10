//! Tour state store
//!
//! Single authoritative holder of the session's navigation state. The store
//! is explicitly constructed and passed by `Arc` into every collaborator; it
//! performs no validation of its own — callers (the resolver and navigation
//! controls) are responsible for invariant-preserving writes.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::manifest::Manifest;

/// Internal mutable state.
#[derive(Debug, Clone, Default)]
struct TourState {
    manifest: Option<Arc<Manifest>>,
    current_block_id: Option<String>,
    current_image_id: Option<String>,
    idle: bool,
}

/// Snapshot of the tour state handed to readers and subscribers.
#[derive(Debug, Clone, Default)]
pub struct TourSnapshot {
    pub manifest: Option<Arc<Manifest>>,
    pub current_block_id: Option<String>,
    pub current_image_id: Option<String>,
    pub idle: bool,
}

impl TourSnapshot {
    /// Both selection fields are set.
    pub fn has_selection(&self) -> bool {
        self.current_block_id.is_some() && self.current_image_id.is_some()
    }
}

/// Observer of state changes (URL synchronizer, renderer, chrome).
pub trait TourSubscriber: Send + Sync {
    fn on_tour_change(&self, snapshot: &TourSnapshot);
}

/// The session-scoped state store.
pub struct TourStore {
    state: RwLock<TourState>,
    subscribers: RwLock<Vec<Weak<dyn TourSubscriber>>>,
}

impl TourStore {
    /// Create a store with all fields unset and `idle` false.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TourState::default()),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Install the loaded manifest. Written once per session by the loader's
    /// success path; a reload replaces it wholesale.
    pub fn set_manifest(&self, manifest: Manifest) {
        let mut state = self.state.write();
        state.manifest = Some(Arc::new(manifest));
        drop(state);
        self.notify_subscribers();
    }

    pub fn set_block(&self, id: String) {
        let mut state = self.state.write();
        state.current_block_id = Some(id);
        drop(state);
        self.notify_subscribers();
    }

    pub fn set_image(&self, id: String) {
        let mut state = self.state.write();
        state.current_image_id = Some(id);
        drop(state);
        self.notify_subscribers();
    }

    /// Paired selection write; subscribers see one change with both fields
    /// already updated.
    pub fn set_selection(&self, block_id: String, image_id: String) {
        let mut state = self.state.write();
        state.current_block_id = Some(block_id);
        state.current_image_id = Some(image_id);
        drop(state);
        self.notify_subscribers();
    }

    /// Idempotent; the idle detector writes `false` on every activity signal.
    pub fn set_idle(&self, idle: bool) {
        let mut state = self.state.write();
        state.idle = idle;
        drop(state);
        self.notify_subscribers();
    }

    /// Get the current snapshot of all four fields.
    pub fn snapshot(&self) -> TourSnapshot {
        let state = self.state.read();
        TourSnapshot {
            manifest: state.manifest.clone(),
            current_block_id: state.current_block_id.clone(),
            current_image_id: state.current_image_id.clone(),
            idle: state.idle,
        }
    }

    /// Add a subscriber. Held weakly; dropped subscribers are pruned on the
    /// next notification.
    pub fn subscribe(&self, subscriber: Arc<dyn TourSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    fn notify_subscribers(&self) {
        let snapshot = self.snapshot();
        let mut subscribers = self.subscribers.write();

        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_tour_change(&snapshot);
            }
        }
    }
}

impl Default for TourStore {
    fn default() -> Self {
        Self::new()
    }
}
