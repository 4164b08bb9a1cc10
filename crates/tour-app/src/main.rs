//! Headless entry point
//!
//! Loads a manifest from a path or URL, resolves the initial selection, and
//! prints the share link. The renderer and chrome attach to the same store
//! in the full viewer; here they are absent.

use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::info;
use url::Url;

use tour_core::idle::IdleConfig;
use tour_core::location::{Location, MemoryLocation};
use tour_data::sources::{FileSource, HttpSource, ManifestSource};

mod session;

use session::TourSession;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let Some(target) = std::env::args().nth(1) else {
        bail!("usage: tour360 <manifest path or http(s) url>");
    };

    let source: Box<dyn ManifestSource> =
        if target.starts_with("http://") || target.starts_with("https://") {
            Box::new(HttpSource::new(Url::parse(&target)?))
        } else {
            Box::new(FileSource::new(target.into()))
        };

    let location = Arc::new(MemoryLocation::default());
    let session =
        TourSession::start(source.as_ref(), location.clone(), IdleConfig::default()).await;

    let snapshot = session.store().snapshot();
    match (&snapshot.current_block_id, &snapshot.current_image_id) {
        (Some(block), Some(image)) => {
            info!("Resolved initial view: block='{}' image='{}'", block, image);
            info!("Share link: {}", location.current());
        }
        _ => info!("No resolvable initial view"),
    }

    Ok(())
}
