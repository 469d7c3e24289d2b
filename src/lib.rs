pub mod coordinate;
pub mod map;
pub mod interchange;
pub mod view;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::MarkerKit;

pub use coordinate::{CoordKind, CoordinateTransformer, MapSettings, Point, RenderPoint};
pub use map::{ClickEvent, Location, MapError, MapResult, Marker, MarkerMap};
pub use view::{EditForm, Popup, PopupContent};
