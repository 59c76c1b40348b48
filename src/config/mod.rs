mod types;

pub use types::*;

use anyhow::{Context, Result};
use hearth_common::slug::slugify;
use hearth_geo::HeaderValidation;
use hearth_media::CdnRoot;
use std::path::Path;

/// Environment variable that overrides `[cdn] root`.
pub const CDN_ROOT_ENV: &str = "HEARTH_CDN_ROOT";

impl Config {
    /// Normalized CDN root built from `[cdn] root`.
    pub fn cdn_root(&self) -> Result<CdnRoot> {
        CdnRoot::new(&self.cdn.root)
            .with_context(|| format!("Invalid CDN root: {:?}", self.cdn.root))
    }

    /// Header validation mode for geography decoding.
    pub fn header_validation(&self) -> HeaderValidation {
        if self.geo.strict_header {
            HeaderValidation::Strict
        } else {
            HeaderValidation::Permissive
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./hearth.toml",
        "~/.config/hearth/config.toml",
        "/etc/hearth/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(root) = std::env::var(CDN_ROOT_ENV) {
        if !root.trim().is_empty() {
            tracing::debug!("CDN root overridden by {}: {}", CDN_ROOT_ENV, root);
            config.cdn.root = root;
        }
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    config.cdn_root()?;

    if slugify(&config.images.collection).is_empty() {
        anyhow::bail!(
            "Image collection {:?} does not produce a usable path segment",
            config.images.collection
        );
    }

    Ok(())
}
