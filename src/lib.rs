//! Hearth - listing geometry and image-variant tooling
//!
//! This library crate exposes configuration, listing hydration and radius
//! search so they can be driven from the CLI and from integration tests.

pub mod config;
pub mod listing;
pub mod search;

pub use listing::{Hydrator, ListingRecord, ListingView};
