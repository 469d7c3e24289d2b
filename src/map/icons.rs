//! Marker icon definitions and utilities
//!
//! This module provides the icon metadata handed to the render library and
//! a display-name registry for well-known icon ids.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::map::errors::{MapError, MapResult};

/// Icon id assigned to locations that do not specify one
pub const DEFAULT_ICON_ID: u32 = 96;

/// Icon raster size in pixels
pub const ICON_SIZE: [u32; 2] = [24, 24];

/// Anchor point inside the icon raster
pub const ICON_ANCHOR: [u32; 2] = [12, 12];

// Directory the icon sprites are served from
const ICON_ASSET_DIR: &str = "./assets";

lazy_static! {
    // Parse the embedded name table at startup
    static ref ICON_DEFINITIONS: IconDefinitions = {
        let content = include_str!("../../icon_names.toml");
        IconDefinitions::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse icon name definitions: {}", e);
                IconDefinitions::default()
            })
    };
}

/// Container for icon display-name definitions
#[derive(Debug, Default)]
pub struct IconDefinitions {
    // Maps icon ids to display names
    pub names: HashMap<u32, String>,
}

impl IconDefinitions {
    /// Parse icon definitions from a TOML string
    pub fn from_str(content: &str) -> MapResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => {
                return Err(MapError::GenericError(format!("Failed to parse TOML: {}", e)))
            }
        };

        let mut defs = IconDefinitions::default();

        if let Some(table) = toml_value.get("icon_names").and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(id), Some(name)) = (k.parse::<u32>(), v.as_str()) {
                    defs.names.insert(id, name.to_string());
                }
            }
        }

        Ok(defs)
    }
}

/// Get the display name for an icon id
pub fn icon_name(id: u32) -> String {
    match ICON_DEFINITIONS.names.get(&id) {
        Some(name) => name.clone(),
        None => format!("Icon {}", id),
    }
}

/// Build the sprite URL for an icon id
pub fn icon_url(id: u32) -> String {
    format!("{}/{}.png", ICON_ASSET_DIR, id)
}

/// A marker icon as handed to the render library
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    /// Sprite URL
    pub url: String,
    /// Raster size in pixels
    pub size: [u32; 2],
    /// Anchor point inside the raster
    pub anchor: [u32; 2],
}

impl MarkerIcon {
    /// Create the standard icon for an icon id
    pub fn for_id(id: u32) -> Self {
        MarkerIcon {
            url: icon_url(id),
            size: ICON_SIZE,
            anchor: ICON_ANCHOR,
        }
    }
}
