//! Typed model of the tour manifest
//!
//! The manifest is an ordered sequence of blocks (locations), each holding an
//! ordered sequence of panoramic images. It is loaded once per session and
//! replaced wholesale on reload, never mutated in place.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The full tour structure as described by the manifest document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A navigable location in the tour.
///
/// The wire format names the image sequence `labs`; it is optional and
/// defaults to empty. A block with zero images is a valid manifest entry but
/// can never be the target of a resolved image selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(default, rename = "labs")]
    pub images: Vec<Image>,
}

/// A single panoramic view belonging to exactly one block.
///
/// Renderer-consumed attributes (asset identifiers, orientation hints, ...)
/// are none of the navigation core's business and round-trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Manifest {
    /// Look up a block by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// First block in manifest order, the default selection target.
    pub fn first_block(&self) -> Option<&Block> {
        self.blocks.first()
    }

    /// Check structural rules: non-empty ids, block ids unique within the
    /// manifest, image ids unique within their block.
    pub fn validate(&self) -> Result<(), String> {
        let mut block_ids = AHashSet::with_capacity(self.blocks.len());
        for block in &self.blocks {
            if block.id.is_empty() {
                return Err("block with empty id".to_string());
            }
            if !block_ids.insert(block.id.as_str()) {
                return Err(format!("duplicate block id '{}'", block.id));
            }
            let mut image_ids = AHashSet::with_capacity(block.images.len());
            for image in &block.images {
                if image.id.is_empty() {
                    return Err(format!("image with empty id in block '{}'", block.id));
                }
                if !image_ids.insert(image.id.as_str()) {
                    return Err(format!(
                        "duplicate image id '{}' in block '{}'",
                        image.id, block.id
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Block {
    /// Look up an image by id within this block.
    pub fn image(&self, id: &str) -> Option<&Image> {
        self.images.iter().find(|img| img.id == id)
    }
}
