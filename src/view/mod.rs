//! Headless view layer for marker popups and edit forms
//!
//! Depends only on the data model; no rendering-surface or DOM types leak
//! in here.

mod form;
mod popup;

pub use self::form::{EditForm, FieldType, FormField};
pub use self::popup::{Popup, PopupContent};
