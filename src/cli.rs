use clap::{Parser, Subcommand};
use hearth_geo::GeoPoint;
use hearth_media::ImageVariant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(author, version, about = "Listing geometry and image URL tooling")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a hex EWKB geography value into latitude/longitude
    Decode {
        /// Hex string from the geography column
        hex: String,

        /// Reject values that are not a little-endian WGS84 point
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the header fields of a hex EWKB value
    Inspect {
        /// Hex string from the geography column
        hex: String,
    },

    /// Encode latitude/longitude as hex EWKB
    Encode {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Spatial reference system identifier
        #[arg(long, default_value = "4326")]
        srid: u32,
    },

    /// Print the CDN URL of an image variant (all variants if omitted)
    Url {
        /// Stored image base path
        base_path: String,

        /// Variant: original, thumbnail, card or hero
        #[arg(long)]
        variant: Option<ImageVariant>,
    },

    /// Recover the base path from a variant path or CDN URL
    Base {
        /// Variant path or URL
        path: String,
    },

    /// Mint a new image base path for a listing
    Mint {
        /// Listing name to slugify
        name: String,

        /// Collection segment (defaults to the configured collection)
        #[arg(long)]
        collection: Option<String>,
    },

    /// Hydrate a JSON array of listing rows
    Hydrate {
        /// JSON file with listing rows
        #[arg(required = true)]
        input: PathBuf,

        /// Only keep listings near this point ("lat,lon")
        #[arg(long, allow_hyphen_values = true, requires = "radius_km")]
        near: Option<GeoPoint>,

        /// Search radius in kilometres
        #[arg(long, requires = "near")]
        radius_km: Option<f64>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
