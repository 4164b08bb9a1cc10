//! Manifest sources
//!
//! The manifest is a static, pre-existing resource fetched read-only from a
//! fixed location; a source only knows how to produce its raw text.

use async_trait::async_trait;

use crate::ManifestError;

mod file_source;
mod http_source;

pub use file_source::FileSource;
pub use http_source::HttpSource;

/// Trait for manifest sources
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch the raw manifest document.
    async fn fetch(&self) -> Result<String, ManifestError>;

    /// Get the source name/path for log messages.
    fn source_name(&self) -> &str;
}
