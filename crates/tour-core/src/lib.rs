//! Core navigation and state management for the panoramic tour viewer
//!
//! This crate resolves which panoramic image a session is looking at, keeps
//! that selection mirrored into a shareable URL, and tracks user activity.
//! Rendering, camera controls, and visual chrome live elsewhere and only
//! read the resolved state through [`TourStore`].

pub mod idle;
pub mod location;
pub mod manifest;
pub mod navigation;
pub mod state;
pub mod url_sync;

// Re-export commonly used types
pub use idle::{ActivitySignal, IdleConfig, IdleDetector, IdleHandle};
pub use location::{Location, MemoryLocation, BLOCK_PARAM, IMAGE_PARAM};
pub use manifest::{Block, Image, Manifest};
pub use navigation::{resolve_initial, DeepLink, NavigationError, Navigator};
pub use state::{TourSnapshot, TourStore, TourSubscriber};
pub use url_sync::UrlSync;
