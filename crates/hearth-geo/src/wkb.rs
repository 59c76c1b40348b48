//! EWKB point decoding for geography columns.
//!
//! PostGIS returns `geography(Point, 4326)` values as hex-encoded extended
//! WKB. A point with an embedded SRID is always 25 bytes:
//!
//! | Offset | Len | Field |
//! |--------|-----|-------|
//! | 0 | 1 | byte order (`0x01` = little-endian) |
//! | 1 | 4 | geometry type with SRID flag (`0x20000001`) |
//! | 5 | 4 | SRID (`4326`) |
//! | 9 | 8 | X = longitude (f64) |
//! | 17 | 8 | Y = latitude (f64) |
//!
//! Coordinates are reinterpreted from their raw bytes, never round-tripped
//! through decimal text, so the decoded values are bit-exact.
//!
//! A missing or corrupt location is an expected state for a listing, so the
//! public [`decode`] entry points return `Option` and log instead of failing.
//! [`try_decode`] exposes the underlying reason for callers that want it.

use crate::{Error, GeoPoint, Result};

/// Byte-order flag for little-endian (NDR) encoding.
pub const LITTLE_ENDIAN: u8 = 0x01;

/// Byte-order flag for big-endian (XDR) encoding. Recognized, never decoded.
pub const BIG_ENDIAN: u8 = 0x00;

/// Geometry type word for a point carrying an SRID (`wkbPoint | 0x20000000`).
pub const POINT_WITH_SRID: u32 = 0x2000_0001;

/// SRID for WGS84 longitude/latitude.
pub const WGS84_SRID: u32 = 4326;

/// Size of an EWKB point with SRID, in bytes.
pub const POINT_WKB_LEN: usize = 25;

/// Byte order + geometry type + SRID.
const HEADER_LEN: usize = 9;

/// Characters of a rejected value included in the warning.
const LOGGED_PREFIX_CHARS: usize = 64;

const X_OFFSET: usize = HEADER_LEN;
const Y_OFFSET: usize = HEADER_LEN + 8;

/// How much of the EWKB header the decoder checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderValidation {
    /// Skip the header and assume a little-endian WGS84 point.
    /// Trailing bytes after the point are ignored.
    #[default]
    Permissive,
    /// Require byte order, geometry type and SRID to match a WGS84 point,
    /// reject trailing bytes, and reject coordinates outside WGS84 range.
    Strict,
}

/// The fixed 9-byte header preceding the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WkbHeader {
    pub byte_order: u8,
    pub geometry_type: u32,
    pub srid: u32,
}

impl WkbHeader {
    /// Parse the header from the start of a decoded EWKB buffer.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::Truncated {
                need: HEADER_LEN,
                have: bytes.len(),
            });
        }

        Ok(Self {
            byte_order: bytes[0],
            geometry_type: read_u32_le(bytes, 1),
            srid: read_u32_le(bytes, 5),
        })
    }

    /// Whether this header describes a little-endian WGS84 point.
    pub fn is_point_wgs84(&self) -> bool {
        self.byte_order == LITTLE_ENDIAN
            && self.geometry_type == POINT_WITH_SRID
            && self.srid == WGS84_SRID
    }

    fn validate(&self) -> Result<()> {
        if self.byte_order != LITTLE_ENDIAN {
            return Err(Error::UnsupportedByteOrder(self.byte_order));
        }
        if self.geometry_type != POINT_WITH_SRID {
            return Err(Error::UnexpectedGeometryType(self.geometry_type));
        }
        if self.srid != WGS84_SRID {
            return Err(Error::UnexpectedSrid(self.srid));
        }
        Ok(())
    }
}

/// Decode a geography value into a point, permissively.
///
/// `None`, empty and whitespace-only input mean "no location" and return
/// `None` silently. Malformed input also returns `None`, with a warning.
pub fn decode(wkb: Option<&str>) -> Option<GeoPoint> {
    decode_with(wkb, HeaderValidation::Permissive)
}

/// Decode a geography value with the given header validation.
pub fn decode_with(wkb: Option<&str>, validation: HeaderValidation) -> Option<GeoPoint> {
    let hex = wkb.map(str::trim).filter(|s| !s.is_empty())?;

    match try_decode(hex, validation) {
        Ok(point) => Some(point),
        Err(e) => {
            tracing::warn!(
                error = %e,
                wkb_len = hex.len(),
                wkb = log_prefix(hex),
                "Discarding unparseable location geometry"
            );
            None
        }
    }
}

/// Decode a hex EWKB point, reporting why it failed.
pub fn try_decode(hex: &str, validation: HeaderValidation) -> Result<GeoPoint> {
    let bytes = decode_hex(hex)?;

    if bytes.len() < POINT_WKB_LEN {
        return Err(Error::Truncated {
            need: POINT_WKB_LEN,
            have: bytes.len(),
        });
    }

    let header = WkbHeader::parse(&bytes)?;
    match validation {
        HeaderValidation::Strict => {
            header.validate()?;
            if bytes.len() > POINT_WKB_LEN {
                return Err(Error::TrailingBytes(bytes.len() - POINT_WKB_LEN));
            }
        }
        HeaderValidation::Permissive => {
            if !header.is_point_wgs84() {
                tracing::debug!(
                    byte_order = header.byte_order,
                    geometry_type = header.geometry_type,
                    srid = header.srid,
                    "Header is not a WGS84 point, decoding anyway"
                );
            }
        }
    }

    let longitude = read_f64_le(&bytes, X_OFFSET);
    let latitude = read_f64_le(&bytes, Y_OFFSET);

    if longitude.is_nan() || latitude.is_nan() {
        return Err(Error::NotANumber);
    }

    let point = GeoPoint::new(latitude, longitude);
    if validation == HeaderValidation::Strict && !point.is_in_range() {
        return Err(Error::OutOfRange {
            latitude,
            longitude,
        });
    }

    Ok(point)
}

/// Decode the hex text into raw bytes.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    hex::decode(hex.trim()).map_err(|e| Error::InvalidHex(e.to_string()))
}

/// Encode a point as uppercase hex EWKB, the way PostGIS prints it.
pub fn encode(point: GeoPoint, srid: u32) -> String {
    let mut bytes = Vec::with_capacity(POINT_WKB_LEN);
    bytes.push(LITTLE_ENDIAN);
    bytes.extend_from_slice(&POINT_WITH_SRID.to_le_bytes());
    bytes.extend_from_slice(&srid.to_le_bytes());
    bytes.extend_from_slice(&point.longitude.to_le_bytes());
    bytes.extend_from_slice(&point.latitude.to_le_bytes());
    hex::encode_upper(bytes)
}

/// Leading part of a rejected value, bounded so corrupt columns can't flood
/// the logs.
fn log_prefix(value: &str) -> &str {
    match value.char_indices().nth(LOGGED_PREFIX_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

// Callers check lengths before reading.
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_f64_le(bytes: &[u8], offset: usize) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[offset..offset + 8]);
    f64::from_le_bytes(raw)
}
