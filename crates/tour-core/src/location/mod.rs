//! Environment adapter for the address bar
//!
//! The core never talks to a browser directly; it reads and replaces the
//! session URL through this trait. `replace` must not create a history
//! entry — back/forward navigation is unaffected by reflection writes.

use parking_lot::RwLock;
use url::Url;

/// Query parameter naming the current block.
pub const BLOCK_PARAM: &str = "block";
/// Query parameter naming the current image.
pub const IMAGE_PARAM: &str = "view";

pub trait Location: Send + Sync {
    /// The currently visible URL.
    fn current(&self) -> Url;

    /// Replace the visible URL without pushing a history entry.
    fn replace(&self, url: Url);
}

/// In-process location, used by the headless session driver and tests.
pub struct MemoryLocation {
    url: RwLock<Url>,
}

impl MemoryLocation {
    pub fn new(url: Url) -> Self {
        Self {
            url: RwLock::new(url),
        }
    }

    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(input)?))
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new(Url::parse("http://localhost/").expect("literal url"))
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> Url {
        self.url.read().clone()
    }

    fn replace(&self, url: Url) {
        *self.url.write() = url;
    }
}
