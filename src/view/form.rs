//! Marker edit form
//!
//! A headless model of the popup edit form: three labelled fields carrying
//! string values, applied back to the owning location on save.

use crate::map::{Location, MapError, MapResult};

/// Input widget type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
}

/// A single labelled form field
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Widget type the frontend should render
    pub field_type: FieldType,
    /// Element name, also used as its id
    pub name: String,
    /// Label text shown next to the input
    pub label: String,
    /// Current value as entered
    pub value: String,
}

impl FormField {
    fn new(field_type: FieldType, name: &str, label: &str, value: String) -> Self {
        FormField {
            field_type,
            name: name.to_string(),
            label: label.to_string(),
            value,
        }
    }
}

/// Edit form for a marker's location
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    /// Location name field
    pub title: FormField,
    /// Icon id field, integers of 1 and above
    pub icon: FormField,
    /// Description field
    pub description: FormField,
}

impl EditForm {
    /// Build the edit form prefilled from a location
    pub fn for_location(location: &Location) -> Self {
        EditForm {
            title: FormField::new(FieldType::Text, "mname", "Title:", location.name.clone()),
            icon: FormField::new(
                FieldType::Number,
                "micon",
                "Icon ID:",
                location.icon_id.to_string(),
            ),
            description: FormField::new(
                FieldType::Text,
                "mdesc",
                "Description:",
                location.description.clone().unwrap_or_default(),
            ),
        }
    }

    /// Apply the submitted values to a location
    ///
    /// The icon field must parse as an integer of at least 1. An empty
    /// description clears the stored one.
    pub fn apply_to(&self, location: &mut Location) -> MapResult<()> {
        let icon_id = self.icon.value.trim().parse::<u32>().map_err(|_| {
            MapError::InvalidFieldValue(format!(
                "Icon ID must be a positive integer, got '{}'",
                self.icon.value
            ))
        })?;

        if icon_id < 1 {
            return Err(MapError::InvalidFieldValue(
                "Icon ID must be at least 1".to_string(),
            ));
        }

        location.name = self.title.value.clone();
        location.icon_id = icon_id;
        location.description = if self.description.value.is_empty() {
            None
        } else {
            Some(self.description.value.clone())
        };

        Ok(())
    }
}
