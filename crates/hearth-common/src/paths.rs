//! Image file extension detection.
//!
//! Stored listing images and their derived variants only ever use these
//! extensions, so anything else is treated as not-an-image.

/// Extensions an original upload or a derived variant may carry.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Check if a bare extension (without the dot) is an image extension.
///
/// # Examples
///
/// ```
/// use hearth_common::paths::is_image_extension;
///
/// assert!(is_image_extension("jpg"));
/// assert!(is_image_extension("WebP"));
/// assert!(!is_image_extension("gif"));
/// ```
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}
