//! Hearth-Common: Small string and path helpers shared by the hearth crates.
//!
//! This crate provides functionality used across the hearth crates:
//!
//! - **Slugs**: URL-safe slugs for listing names and image paths
//! - **Path Utilities**: Image extension detection
//!
//! # Examples
//!
//! ```
//! use hearth_common::paths::is_image_extension;
//! use hearth_common::slug::slugify;
//!
//! assert_eq!(slugify("Sunny Villa, Sector 9"), "sunny-villa-sector-9");
//! assert!(is_image_extension("WEBP"));
//! ```

pub mod paths;
pub mod slug;
