//! Navigation: initial-state resolution and user-driven movement

use thiserror::Error;
use url::Url;

use crate::location::{BLOCK_PARAM, IMAGE_PARAM};

mod navigator;
mod resolver;

pub use navigator::Navigator;
pub use resolver::resolve_initial;

/// Errors from user-driven navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no manifest loaded")]
    NoManifest,
    #[error("no current selection")]
    NoSelection,
    #[error("block '{0}' not found")]
    UnknownBlock(String),
    #[error("image '{0}' not found in block '{1}'")]
    UnknownImage(String, String),
    #[error("already at the last image")]
    AtEnd,
    #[error("already at the first image")]
    AtStart,
}

/// A shareable link whose query parameters fully specify a selection.
///
/// Both parameters must be present and non-empty; anything less falls back to
/// manifest defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub block_id: String,
    pub image_id: String,
}

impl DeepLink {
    /// Extract a deep link from a URL, taking the first occurrence of each
    /// parameter.
    pub fn from_url(url: &Url) -> Option<Self> {
        let mut block_id = None;
        let mut image_id = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                BLOCK_PARAM if block_id.is_none() && !value.is_empty() => {
                    block_id = Some(value.into_owned());
                }
                IMAGE_PARAM if image_id.is_none() && !value.is_empty() => {
                    image_id = Some(value.into_owned());
                }
                _ => {}
            }
        }

        match (block_id, image_id) {
            (Some(block_id), Some(image_id)) => Some(Self { block_id, image_id }),
            _ => None,
        }
    }
}
