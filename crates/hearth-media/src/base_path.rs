//! Canonical storage paths for uploaded listing images.
//!
//! A base path is minted once per upload and never reused: re-uploading a
//! photo mints a new path instead of overwriting variants in place, so CDN
//! caches never serve stale bytes.

use std::fmt;

use hearth_common::slug::slugify;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

const TOKEN_PREFIX: &str = "img-";

/// Hex characters of the random token.
const TOKEN_LEN: usize = 12;

/// Stored identifier of one logical image: `<collection>/<slug>/img-<token>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageBasePath(String);

impl ImageBasePath {
    /// Mint a fresh base path for an upload belonging to `entity_name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearth_media::ImageBasePath;
    ///
    /// let path = ImageBasePath::mint("properties", "Sunny Villa").unwrap();
    /// assert_eq!(path.collection(), "properties");
    /// assert_eq!(path.slug(), "sunny-villa");
    /// assert_eq!(path.token().len(), 12);
    /// ```
    pub fn mint(collection: &str, entity_name: &str) -> Result<Self> {
        let collection_slug = slugify(collection);
        if collection_slug.is_empty() {
            return Err(Error::EmptySlug(collection.to_string()));
        }
        let slug = slugify(entity_name);
        if slug.is_empty() {
            return Err(Error::EmptySlug(entity_name.to_string()));
        }

        let token = Uuid::new_v4().simple().to_string();
        Ok(Self(format!(
            "{collection_slug}/{slug}/{TOKEN_PREFIX}{}",
            &token[..TOKEN_LEN]
        )))
    }

    /// Validate an existing stored path.
    pub fn parse(path: &str) -> Result<Self> {
        let mut segments = path.split('/');
        let (Some(collection), Some(slug), Some(file), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(Error::invalid_base_path(
                path,
                "expected <collection>/<slug>/img-<token>",
            ));
        };

        if collection.is_empty() || slug.is_empty() {
            return Err(Error::invalid_base_path(path, "empty path segment"));
        }

        let token = file
            .strip_prefix(TOKEN_PREFIX)
            .ok_or_else(|| Error::invalid_base_path(path, "file name must start with 'img-'"))?;
        if token.is_empty() {
            return Err(Error::invalid_base_path(path, "empty token"));
        }
        // No '.', so a variant suffix or extension can never sneak in
        if !token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::invalid_base_path(
                path,
                "token may only contain letters, digits, '-' and '_'",
            ));
        }

        Ok(Self(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn collection(&self) -> &str {
        self.segment(0)
    }

    pub fn slug(&self) -> &str {
        self.segment(1)
    }

    /// Random token, without the `img-` prefix.
    pub fn token(&self) -> &str {
        let file = self.segment(2);
        file.strip_prefix(TOKEN_PREFIX).unwrap_or(file)
    }

    fn segment(&self, index: usize) -> &str {
        self.0.split('/').nth(index).unwrap_or_default()
    }
}

impl fmt::Display for ImageBasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImageBasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageBasePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ImageBasePath> for String {
    fn from(path: ImageBasePath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{base_of, CdnRoot, ImageVariant};

    #[test]
    fn test_mint_shape() {
        let path = ImageBasePath::mint("Properties", "3 BHK Flat, Sector 17").unwrap();
        assert_eq!(path.collection(), "properties");
        assert_eq!(path.slug(), "3-bhk-flat-sector-17");
        assert_eq!(path.token().len(), TOKEN_LEN);
        assert!(path.token().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(path
            .as_str()
            .starts_with("properties/3-bhk-flat-sector-17/img-"));
    }

    #[test]
    fn test_mint_is_unique() {
        let a = ImageBasePath::mint("properties", "villa").unwrap();
        let b = ImageBasePath::mint("properties", "villa").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_mint_rejects_empty_slugs() {
        assert_eq!(
            ImageBasePath::mint("properties", "!!!"),
            Err(Error::EmptySlug("!!!".to_string()))
        );
        assert!(matches!(
            ImageBasePath::mint("", "villa"),
            Err(Error::EmptySlug(_))
        ));
    }

    #[test]
    fn test_minted_paths_parse() {
        let minted = ImageBasePath::mint("projects", "Green Acres").unwrap();
        assert_eq!(ImageBasePath::parse(minted.as_str()).unwrap(), minted);
    }

    #[test]
    fn test_parse_valid() {
        let path = ImageBasePath::parse("properties/x/img-1").unwrap();
        assert_eq!(path.collection(), "properties");
        assert_eq!(path.slug(), "x");
        assert_eq!(path.token(), "1");
    }

    #[test]
    fn test_parse_invalid() {
        for bad in [
            "",
            "properties/x",
            "properties/x/img-1/extra",
            "/x/img-1",
            "properties//img-1",
            "properties/x/photo-1",
            "properties/x/img-",
            "properties/x/img-1-card.webp",
            "properties/x/img-1.jpg",
        ] {
            assert!(
                matches!(
                    ImageBasePath::parse(bad),
                    Err(Error::InvalidBasePath { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_minted_path_round_trips_through_cdn() {
        let path = ImageBasePath::mint("properties", "Lake View").unwrap();
        let cdn = CdnRoot::new("cdn.example.com").unwrap();
        for v in ImageVariant::ALL {
            let url = cdn.url_for(path.as_str(), v);
            assert_eq!(base_of(cdn.strip_root(&url).unwrap()), path.as_str());
        }
    }

    #[test]
    fn test_serde_validates() {
        let path: ImageBasePath = serde_json::from_str("\"properties/x/img-1\"").unwrap();
        assert_eq!(path.token(), "1");
        assert!(serde_json::from_str::<ImageBasePath>("\"nope\"").is_err());
    }
}
