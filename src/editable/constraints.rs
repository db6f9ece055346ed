//! Edit constraints for the text-input primitive.
//!
//! Constraints define what the primitive itself accepts before any
//! correction pipe sees the edit. Length is left to the pipe, which
//! truncates overflow at the end and overwrites cells in the middle.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what the primitive accepts.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::single_line()
    }
}

impl EditConstraints {
    /// Plain single-line text: any printable character
    pub fn single_line() -> Self {
        Self {
            char_filter: Some(|c| !c.is_control()),
        }
    }

    /// Date/time field text: digits and the separators used by the masks.
    ///
    /// Anything the mask cannot hold is refused here, before the correction
    /// pipe runs.
    pub fn date_field() -> Self {
        Self {
            char_filter: Some(|c| c.is_ascii_digit() || c == '-' || c == ':'),
        }
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }
}
