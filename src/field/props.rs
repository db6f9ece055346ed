//! Owner-facing configuration and render output of a date field.

use std::collections::BTreeMap;
use std::fmt;

use jiff::civil::{Date, DateTime};

use crate::mask::MaskCell;

/// Format used when the owner does not pick one.
pub const DEFAULT_FORMAT: &str = "dd-LL-yyyy";

/// Pass-through attributes for the underlying text input.
pub type Attributes = BTreeMap<String, String>;

/// Everything the owner passes when rendering the field.
#[derive(Debug, Clone, PartialEq)]
pub struct DateInputProps {
    /// Format string, fixed for the lifetime of the field
    pub format: String,
    /// Committed value shown when the user is not typing
    pub value: Option<DateTime>,
    /// Forwarded verbatim to the text input
    pub attributes: Attributes,
    /// Date used by time-only formats; today when absent
    pub reference_date: Option<Date>,
}

impl Default for DateInputProps {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            value: None,
            attributes: Attributes::new(),
            reference_date: None,
        }
    }
}

impl DateInputProps {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<Option<DateTime>>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }
}

/// Event delivered when the field loses focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlurEvent {
    /// Identifier of the element receiving focus, if the host knows it
    pub related_target: Option<String>,
}

/// Which text the field is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Showing the committed value, formatted
    Display,
    /// Showing what the user typed
    Typing,
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldState::Display => f.write_str("display"),
            FieldState::Typing => f.write_str("typing"),
        }
    }
}

/// What the host's text input should show.
#[derive(Debug, Clone, PartialEq)]
pub struct InputView<'a> {
    pub value: String,
    /// Caret offset in characters
    pub caret: usize,
    /// Character mask to enforce, `None` for a plain text input
    pub mask: Option<&'static [MaskCell]>,
    /// Re-masking keeps characters in their cells instead of shifting them
    pub keep_char_positions: bool,
    pub attributes: &'a Attributes,
}

/// Errors returned to the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The format of a mounted field cannot change
    FormatChanged { from: String, to: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::FormatChanged { from, to } => write!(
                f,
                "format cannot change from '{}' to '{}' after construction; create a new field",
                from, to
            ),
        }
    }
}

impl std::error::Error for FieldError {}
