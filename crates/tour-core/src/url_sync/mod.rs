//! State → URL reflection
//!
//! One-way mirror of the current selection into the location's query string,
//! so the visible URL is always a shareable deep link. The URL itself is only
//! ever read back at startup, by the resolver.

use std::sync::Arc;

use tracing::trace;

use crate::location::{Location, BLOCK_PARAM, IMAGE_PARAM};
use crate::state::{TourSnapshot, TourStore, TourSubscriber};

pub struct UrlSync {
    location: Arc<dyn Location>,
}

impl UrlSync {
    pub fn new(location: Arc<dyn Location>) -> Self {
        Self { location }
    }

    /// Subscribe a new synchronizer to the store. The returned `Arc` must be
    /// kept alive; the store only holds it weakly.
    pub fn attach(store: &TourStore, location: Arc<dyn Location>) -> Arc<Self> {
        let sync = Arc::new(Self::new(location));
        store.subscribe(sync.clone());
        sync
    }
}

impl TourSubscriber for UrlSync {
    fn on_tour_change(&self, snapshot: &TourSnapshot) {
        let (Some(block_id), Some(image_id)) =
            (&snapshot.current_block_id, &snapshot.current_image_id)
        else {
            return;
        };

        let mut url = self.location.current();

        // Rewrite only our two parameters, preserving everything else.
        let others: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != BLOCK_PARAM && key != IMAGE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &others {
                pairs.append_pair(key, value);
            }
            pairs.append_pair(BLOCK_PARAM, block_id);
            pairs.append_pair(IMAGE_PARAM, image_id);
        }

        trace!("Reflecting selection into URL: {}", url);
        self.location.replace(url);
    }
}
