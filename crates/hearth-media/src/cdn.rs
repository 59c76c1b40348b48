//! CDN URL derivation for image variants.
//!
//! Variant objects live next to their base path as
//! `{base_path}-{variant}.{ext}`; the public URL prefixes that with the CDN
//! root. [`base_of`] reverses the naming so any variant path (or URL) maps
//! back to the stored base path.

use std::fmt;

use hearth_common::paths::is_image_extension;
use serde::{Deserialize, Serialize};

use crate::{Error, ImageVariant, Result};

/// Normalized CDN root, always carrying an `http://` or `https://` scheme
/// and no trailing slash.
///
/// Normalization happens once here; URL derivation never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CdnRoot(String);

impl CdnRoot {
    /// Normalize a configured CDN host or URL.
    ///
    /// A bare host such as `cdn.example.com` becomes
    /// `https://cdn.example.com`. An explicit `http://` or `https://` scheme
    /// is kept as given.
    pub fn new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (scheme, host) = match scheme_len(raw) {
            Some(len) => raw.split_at(len),
            None => ("https://", raw),
        };

        let host = host.trim_end_matches('/');
        if host.is_empty() {
            return Err(Error::EmptyCdnRoot);
        }

        Ok(Self(format!("{scheme}{host}")))
    }

    /// The normalized root, e.g. `https://cdn.example.com`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public URL of one variant of a stored image.
    ///
    /// An empty base path yields an empty string, so optional image columns
    /// can be passed straight through.
    pub fn url_for(&self, base_path: &str, variant: ImageVariant) -> String {
        if base_path.is_empty() {
            return String::new();
        }
        format!(
            "{}/{}-{}.{}",
            self.0,
            base_path,
            variant.as_str(),
            variant.extension()
        )
    }

    /// URLs of every variant of a stored image, or `None` for an empty path.
    pub fn urls_for(&self, base_path: &str) -> Option<ImageUrls> {
        if base_path.is_empty() {
            return None;
        }
        Some(ImageUrls {
            original: self.url_for(base_path, ImageVariant::Original),
            thumbnail: self.url_for(base_path, ImageVariant::Thumbnail),
            card: self.url_for(base_path, ImageVariant::Card),
            hero: self.url_for(base_path, ImageVariant::Hero),
        })
    }

    /// Object path of a URL served from this root, without the leading `/`.
    pub fn strip_root<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(self.0.as_str())?.strip_prefix('/')
    }

    /// Base path of a variant URL from this root, or of a bare object path.
    pub fn base_of_url<'a>(&self, url: &'a str) -> &'a str {
        base_of(self.strip_root(url).unwrap_or(url))
    }
}

impl fmt::Display for CdnRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CdnRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CdnRoot {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<CdnRoot> for String {
    fn from(root: CdnRoot) -> Self {
        root.0
    }
}

/// Public URLs for every variant of one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub original: String,
    pub thumbnail: String,
    pub card: String,
    pub hero: String,
}

impl ImageUrls {
    /// URL of a single variant.
    pub fn get(&self, variant: ImageVariant) -> &str {
        match variant {
            ImageVariant::Original => &self.original,
            ImageVariant::Thumbnail => &self.thumbnail,
            ImageVariant::Card => &self.card,
            ImageVariant::Hero => &self.hero,
        }
    }
}

/// Strip a trailing `-{variant}.{ext}` from a stored path.
///
/// Variant names and extensions (`jpg`, `jpeg`, `png`, `webp`) match
/// ignoring ASCII case. Paths without such a suffix are returned unchanged.
/// Stripping repeats until no suffix remains, so applying `base_of` twice
/// gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use hearth_media::base_of;
///
/// assert_eq!(base_of("properties/x/img-1-hero.webp"), "properties/x/img-1");
/// assert_eq!(base_of("properties/x/img-1-CARD.PNG"), "properties/x/img-1");
/// assert_eq!(base_of("properties/x/img-1"), "properties/x/img-1");
/// ```
pub fn base_of(path: &str) -> &str {
    let mut current = path;
    while let Some(stripped) = strip_variant_suffix(current) {
        current = stripped;
    }
    current
}

fn strip_variant_suffix(path: &str) -> Option<&str> {
    let (stem, ext) = path.rsplit_once('.')?;
    if !is_image_extension(ext) {
        return None;
    }
    let (base, variant) = stem.rsplit_once('-')?;
    ImageVariant::from_name(variant)?;
    Some(base)
}

/// Length of a leading `http://` or `https://`, ignoring ASCII case.
fn scheme_len(url: &str) -> Option<usize> {
    ["https://", "http://"].into_iter().find_map(|scheme| {
        url.get(..scheme.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .map(|_| scheme.len())
    })
}
