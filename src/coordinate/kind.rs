//! Coordinate kind handling

use crate::map::errors::{MapError, MapResult};

/// Identifier for the representations a marker coordinate can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordKind {
    /// Render-surface coordinates, consumed by the render library as-is
    Xy,
    /// x,y in [0,1] relative to the virtual canvas
    Normalised,
    /// Alias of Normalised kept for backward-compatible input data
    PseudoNormalised,
    /// Signed integer coordinates in the world bounding rectangle,
    /// the canonical storage and interchange form
    Worldspace,
}

impl CoordKind {
    /// Get the legacy numeric code for this kind
    pub fn code(&self) -> f64 {
        match self {
            CoordKind::Xy => 0.0,
            CoordKind::Normalised => 1.0,
            CoordKind::PseudoNormalised => 1.5,
            CoordKind::Worldspace => 2.0,
        }
    }

    /// Collapse legacy aliases to their canonical kind
    ///
    /// PseudoNormalised carries the same numeric values as Normalised and
    /// only exists so old exported data keeps importing; it collapses here
    /// before any conversion dispatch.
    pub fn canonical(&self) -> CoordKind {
        match self {
            CoordKind::PseudoNormalised => CoordKind::Normalised,
            other => *other,
        }
    }

    /// Get a description of this kind
    pub fn description(&self) -> String {
        match self {
            CoordKind::Xy => "render-surface XY".to_string(),
            CoordKind::Normalised => "normalised [0,1]".to_string(),
            CoordKind::PseudoNormalised => "pseudo-normalised (legacy)".to_string(),
            CoordKind::Worldspace => "worldspace".to_string(),
        }
    }
}

/// Factory for creating coordinate kinds
pub struct CoordKindFactory;

impl CoordKindFactory {
    /// Create a coordinate kind from its legacy numeric code
    pub fn from_code(code: f64) -> MapResult<CoordKind> {
        if code == 0.0 {
            Ok(CoordKind::Xy)
        } else if code == 1.0 {
            Ok(CoordKind::Normalised)
        } else if code == 1.5 {
            Ok(CoordKind::PseudoNormalised)
        } else if code == 2.0 {
            Ok(CoordKind::Worldspace)
        } else {
            Err(MapError::UnknownCoordKind(code.to_string()))
        }
    }

    /// Parse a coordinate kind from a string (e.g. "worldspace" or "2")
    pub fn from_string(kind_str: &str) -> MapResult<CoordKind> {
        let kind_str = kind_str.trim().to_lowercase();

        match kind_str.as_str() {
            "xy" => Ok(CoordKind::Xy),
            "normalised" | "normalized" => Ok(CoordKind::Normalised),
            "pseudo-normalised" | "pseudo-normalized" | "pseudo" => {
                Ok(CoordKind::PseudoNormalised)
            }
            "worldspace" | "world" => Ok(CoordKind::Worldspace),
            _ => {
                if let Ok(code) = kind_str.parse::<f64>() {
                    Self::from_code(code)
                } else {
                    Err(MapError::UnknownCoordKind(kind_str))
                }
            }
        }
    }
}
