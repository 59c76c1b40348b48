mod cli;

use hearth::{config, search, Hydrator, ListingRecord};
use hearth_geo::{wkb, HeaderValidation};
use hearth_media::{ImageBasePath, ImageVariant};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "hearth=trace,hearth_geo=trace,hearth_media=debug".to_string()
        } else {
            "hearth=info,hearth_geo=warn,hearth_media=warn".to_string()
        }
    });

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Decode { hex, strict, json } => decode(config_path, &hex, strict, json),
        Commands::Inspect { hex } => inspect(&hex),
        Commands::Encode { lat, lon, srid } => {
            println!("{}", wkb::encode(hearth_geo::GeoPoint::new(lat, lon), srid));
            Ok(())
        }
        Commands::Url { base_path, variant } => url(config_path, &base_path, variant),
        Commands::Base { path } => base(config_path, &path),
        Commands::Mint { name, collection } => mint(config_path, &name, collection),
        Commands::Hydrate {
            input,
            near,
            radius_km,
        } => hydrate(config_path, &input, near.zip(radius_km)),
        Commands::Validate {
            config: validate_path,
        } => validate_config(validate_path.as_deref().or(config_path)),
        Commands::Version => {
            println!("hearth {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn decode(config_path: Option<&Path>, hex: &str, strict: bool, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let validation = if strict {
        HeaderValidation::Strict
    } else {
        config.header_validation()
    };

    // An absent location is a normal result, not a failure
    let point = wkb::decode_with(Some(hex), validation);

    if json {
        println!("{}", serde_json::to_string(&point)?);
    } else {
        match point {
            Some(p) => println!("{}", p),
            None => println!("null"),
        }
    }
    Ok(())
}

fn inspect(hex: &str) -> Result<()> {
    let bytes = wkb::decode_hex(hex)?;
    let header = wkb::WkbHeader::parse(&bytes)?;

    println!("Bytes: {}", bytes.len());
    println!(
        "Byte order: {:#04x} ({})",
        header.byte_order,
        match header.byte_order {
            wkb::LITTLE_ENDIAN => "little-endian",
            wkb::BIG_ENDIAN => "big-endian",
            _ => "invalid",
        }
    );
    println!("Geometry type: {:#010x}", header.geometry_type);
    println!("SRID: {}", header.srid);
    println!("WGS84 point: {}", header.is_point_wgs84());

    match wkb::try_decode(hex, HeaderValidation::Strict) {
        Ok(p) => println!("Point: {}", p),
        Err(e) => println!("Strict decode: {}", e),
    }
    Ok(())
}

fn url(config_path: Option<&Path>, base_path: &str, variant: Option<ImageVariant>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let cdn = config.cdn_root()?;

    match variant {
        Some(v) => println!("{}", cdn.url_for(base_path, v)),
        None => {
            if base_path.is_empty() {
                return Ok(());
            }
            for v in ImageVariant::ALL {
                println!("{}\t{}", v, cdn.url_for(base_path, v));
            }
        }
    }
    Ok(())
}

fn base(config_path: Option<&Path>, path: &str) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let cdn = config.cdn_root()?;

    println!("{}", cdn.base_of_url(path));
    Ok(())
}

fn mint(config_path: Option<&Path>, name: &str, collection: Option<String>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let collection = collection.unwrap_or(config.images.collection);

    let path = ImageBasePath::mint(&collection, name)
        .with_context(|| format!("Failed to mint base path for {:?}", name))?;
    tracing::debug!("Minted {}", path);
    println!("{}", path);
    Ok(())
}

fn hydrate(
    config_path: Option<&Path>,
    input: &Path,
    near: Option<(hearth_geo::GeoPoint, f64)>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let hydrator = Hydrator::from_config(&config)?;

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read listings file: {:?}", input))?;
    let records: Vec<ListingRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse listings file: {:?}", input))?;

    tracing::info!("Hydrating {} listings from {:?}", records.len(), input);
    let views = hydrator.hydrate_all(&records);

    let output = match near {
        Some((center, radius_km)) => {
            if !(radius_km.is_finite() && radius_km >= 0.0) {
                anyhow::bail!("Radius must be a non-negative number, got {}", radius_km);
            }
            let hits = search::within_radius(&views, center, radius_km);
            tracing::info!("{} listings within {} km of {}", hits.len(), radius_km, center);
            serde_json::to_string_pretty(&hits)?
        }
        None => serde_json::to_string_pretty(&views)?,
    };

    println!("{}", output);
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;

    println!("Configuration is valid!");
    println!("  CDN root: {}", config.cdn_root()?);
    println!(
        "  Geometry header validation: {}",
        if config.geo.strict_header {
            "strict"
        } else {
            "permissive"
        }
    );
    println!("  Image collection: {}", config.images.collection);

    Ok(())
}
