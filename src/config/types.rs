use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cdn: CdnConfig,

    #[serde(default)]
    pub geo: GeoConfig,

    #[serde(default)]
    pub images: ImagesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CdnConfig {
    /// CDN host or URL; `https://` is added when no scheme is given
    #[serde(default = "default_cdn_root")]
    pub root: String,
}

fn default_cdn_root() -> String {
    "cdn.example.com".to_string()
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            root: default_cdn_root(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeoConfig {
    /// Reject geometries whose header is not a little-endian WGS84 point.
    /// Applies to `decode` and `hydrate`; `decode --strict` forces it on.
    #[serde(default)]
    pub strict_header: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagesConfig {
    /// Collection segment used when minting new base paths
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String {
    "properties".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
        }
    }
}
