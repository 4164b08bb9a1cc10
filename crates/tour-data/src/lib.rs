//! Manifest fetching and parsing for the panoramic tour viewer

pub mod loader;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use loader::{load, load_into};
pub use sources::{FileSource, HttpSource, ManifestSource};

/// Why a manifest is unavailable. Every variant leaves the tour state
/// unresolved; none of them is retried automatically.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid manifest: {0}")]
    Invalid(String),
}
