//! Custom error types for marker map processing

use std::fmt;
use std::io;

/// Marker-map specific error types
#[derive(Debug)]
pub enum MapError {
    /// I/O error
    IoError(io::Error),
    /// Interchange document was not valid JSON
    MalformedJson(serde_json::Error),
    /// Point carries no usable coordinates
    MissingCoordinates,
    /// Unknown coordinate kind name or code
    UnknownCoordKind(String),
    /// Form field value failed validation
    InvalidFieldValue(String),
    /// No marker at the requested index
    MarkerNotFound(usize),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::IoError(e) => write!(f, "I/O error: {}", e),
            MapError::MalformedJson(e) => write!(f, "Malformed interchange JSON: {}", e),
            MapError::MissingCoordinates => write!(f, "Point carries no usable coordinates"),
            MapError::UnknownCoordKind(kind) => write!(f, "Unknown coordinate kind: {}", kind),
            MapError::InvalidFieldValue(msg) => write!(f, "Invalid field value: {}", msg),
            MapError::MarkerNotFound(index) => write!(f, "No marker at index {}", index),
            MapError::GenericError(msg) => write!(f, "Map error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

impl From<io::Error> for MapError {
    fn from(error: io::Error) -> Self {
        MapError::IoError(error)
    }
}

impl From<serde_json::Error> for MapError {
    fn from(error: serde_json::Error) -> Self {
        MapError::MalformedJson(error)
    }
}

/// Result type for marker map operations
pub type MapResult<T> = Result<T, MapError>;

impl From<String> for MapError {
    fn from(msg: String) -> Self {
        MapError::GenericError(msg)
    }
}
