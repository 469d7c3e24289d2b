//! Marker map data model and surface
//!
//! This module provides the location/marker data model and the headless
//! marker surface that owns the session's markers.

pub mod errors;
mod events;
mod icons;
mod location;
mod marker;
mod surface;

#[cfg(test)]
mod tests;

pub use self::errors::{MapError, MapResult};
pub use self::events::ClickEvent;
pub use self::icons::{icon_name, icon_url, IconDefinitions, MarkerIcon};
pub use self::icons::{DEFAULT_ICON_ID, ICON_ANCHOR, ICON_SIZE};
pub use self::location::{Location, DEFAULT_LOCATION_NAME};
pub use self::marker::{Marker, Tooltip};
pub use self::surface::MarkerMap;
