//! Click events arriving from the render surface

use crate::coordinate::RenderPoint;

/// A click on the map surface with its modifier-key flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// Click position in render-surface coordinates
    pub point: RenderPoint,
    /// Ctrl key held during the click
    pub ctrl: bool,
    /// Shift key held during the click
    pub shift: bool,
}

impl ClickEvent {
    /// Create a new click event
    pub fn new(point: RenderPoint, ctrl: bool, shift: bool) -> Self {
        ClickEvent { point, ctrl, shift }
    }
}
