//! Error types for hearth-geo.

use thiserror::Error;

/// Result type for hearth-geo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hearth-geo operations.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Input is not a sequence of hex digit pairs.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Input ended before the point payload was complete.
    #[error("Truncated WKB: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    /// Strict mode found bytes after the point payload.
    #[error("Unexpected {0} trailing bytes after point")]
    TrailingBytes(usize),

    /// Byte-order flag other than little-endian.
    #[error("Unsupported byte order: {0:#04x}")]
    UnsupportedByteOrder(u8),

    /// Geometry type is not a point with an embedded SRID.
    #[error("Unexpected geometry type: {0:#010x}")]
    UnexpectedGeometryType(u32),

    /// SRID is not WGS84.
    #[error("Unexpected SRID: {0}")]
    UnexpectedSrid(u32),

    /// A coordinate decoded to NaN.
    #[error("Coordinate is not a number")]
    NotANumber,

    /// A coordinate lies outside the WGS84 range.
    #[error("Coordinate out of range: {latitude},{longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },

    /// A textual coordinate could not be parsed.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl Error {
    /// Create an invalid coordinate error.
    pub fn invalid_coordinate(msg: impl Into<String>) -> Self {
        Self::InvalidCoordinate(msg.into())
    }
}
