//! Manifest loading
//!
//! Fetch, parse, validate, and hand the result to the tour state store. A
//! failure is logged and swallowed at this boundary: the store stays
//! untouched, nothing is retried, and no default manifest is substituted.

use tracing::{error, info};

use tour_core::manifest::Manifest;
use tour_core::state::TourStore;

use crate::sources::ManifestSource;
use crate::ManifestError;

/// Fetch and parse a manifest. An empty block sequence is accepted; it just
/// yields no resolvable initial selection later.
pub async fn load(source: &dyn ManifestSource) -> Result<Manifest, ManifestError> {
    let body = source.fetch().await?;
    let manifest: Manifest = serde_json::from_str(&body)?;
    manifest.validate().map_err(ManifestError::Invalid)?;

    info!(
        "Loaded manifest from {} ({} blocks)",
        source.source_name(),
        manifest.blocks.len()
    );
    Ok(manifest)
}

/// Load a manifest into the store. Returns whether the store now holds it;
/// the caller runs initial resolution only on success.
pub async fn load_into(source: &dyn ManifestSource, store: &TourStore) -> bool {
    match load(source).await {
        Ok(manifest) => {
            store.set_manifest(manifest);
            true
        }
        Err(err) => {
            error!("Failed to load manifest from {}: {}", source.source_name(), err);
            false
        }
    }
}
