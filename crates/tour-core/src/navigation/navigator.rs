//! User-driven navigation over the loaded manifest
//!
//! Arrow controls and other chrome advance the selection through this
//! interface; every movement is a validated, invariant-preserving store
//! write, so the URL synchronizer observes it like any other change.

use std::sync::Arc;

use super::NavigationError;
use crate::state::TourStore;

pub struct Navigator {
    store: Arc<TourStore>,
}

impl Navigator {
    pub fn new(store: Arc<TourStore>) -> Self {
        Self { store }
    }

    /// Advance to the next image, crossing into the next non-empty block at
    /// a block boundary.
    pub fn next_image(&self) -> Result<(), NavigationError> {
        let (manifest, block_idx, image_idx) = self.current_position()?;
        let block = &manifest.blocks[block_idx];

        if image_idx + 1 < block.images.len() {
            self.store
                .set_selection(block.id.clone(), block.images[image_idx + 1].id.clone());
            return Ok(());
        }

        for next in &manifest.blocks[block_idx + 1..] {
            if let Some(first) = next.images.first() {
                self.store.set_selection(next.id.clone(), first.id.clone());
                return Ok(());
            }
        }

        Err(NavigationError::AtEnd)
    }

    /// Step back to the previous image, crossing into the previous non-empty
    /// block at a block boundary.
    pub fn previous_image(&self) -> Result<(), NavigationError> {
        let (manifest, block_idx, image_idx) = self.current_position()?;
        let block = &manifest.blocks[block_idx];

        if image_idx > 0 {
            self.store
                .set_selection(block.id.clone(), block.images[image_idx - 1].id.clone());
            return Ok(());
        }

        for previous in manifest.blocks[..block_idx].iter().rev() {
            if let Some(last) = previous.images.last() {
                self.store
                    .set_selection(previous.id.clone(), last.id.clone());
                return Ok(());
            }
        }

        Err(NavigationError::AtStart)
    }

    /// Jump to a specific (block, image) pair; both ids must exist in the
    /// manifest.
    pub fn go_to(&self, block_id: &str, image_id: &str) -> Result<(), NavigationError> {
        let snapshot = self.store.snapshot();
        let manifest = snapshot.manifest.ok_or(NavigationError::NoManifest)?;

        let block = manifest
            .block(block_id)
            .ok_or_else(|| NavigationError::UnknownBlock(block_id.to_string()))?;
        block.image(image_id).ok_or_else(|| {
            NavigationError::UnknownImage(image_id.to_string(), block_id.to_string())
        })?;

        self.store
            .set_selection(block_id.to_string(), image_id.to_string());
        Ok(())
    }

    /// Locate the current selection in the manifest as (manifest, block
    /// index, image index).
    fn current_position(
        &self,
    ) -> Result<(Arc<crate::manifest::Manifest>, usize, usize), NavigationError> {
        let snapshot = self.store.snapshot();
        let manifest = snapshot.manifest.ok_or(NavigationError::NoManifest)?;
        let block_id = snapshot
            .current_block_id
            .ok_or(NavigationError::NoSelection)?;
        let image_id = snapshot
            .current_image_id
            .ok_or(NavigationError::NoSelection)?;

        let block_idx = manifest
            .blocks
            .iter()
            .position(|b| b.id == block_id)
            .ok_or_else(|| NavigationError::UnknownBlock(block_id.clone()))?;
        let image_idx = manifest.blocks[block_idx]
            .images
            .iter()
            .position(|img| img.id == image_id)
            .ok_or_else(|| NavigationError::UnknownImage(image_id, block_id))?;

        Ok((manifest, block_idx, image_idx))
    }
}
