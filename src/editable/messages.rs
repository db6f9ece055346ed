//! Message types for the text-input primitive.

/// Target for caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move to start of the field
    LineStart,
    /// Move to end of the field
    LineEnd,
}

/// Edit messages the field accepts from its host.
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Movement ===
    /// Move caret without affecting selection
    Move(MoveTarget),
    /// Move caret and extend selection
    MoveWithSelection(MoveTarget),

    // === Insertion ===
    /// Insert a single character
    InsertChar(char),
    /// Insert a string (e.g., from completion)
    InsertText(String),
    /// Paste text from the clipboard
    Paste(String),

    // === Deletion ===
    /// Delete character before caret (Backspace)
    DeleteBackward,
    /// Delete character after caret (Delete)
    DeleteForward,

    // === Selection ===
    /// Select all text
    SelectAll,
    /// Collapse selection to caret position
    CollapseSelection,
}

impl TextEditMsg {
    /// Check if this message modifies the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_)
                | TextEditMsg::InsertText(_)
                | TextEditMsg::Paste(_)
                | TextEditMsg::DeleteBackward
                | TextEditMsg::DeleteForward
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_editing() {
        assert!(TextEditMsg::InsertChar('1').is_editing());
        assert!(TextEditMsg::Paste("2021".into()).is_editing());
        assert!(TextEditMsg::DeleteBackward.is_editing());
        assert!(!TextEditMsg::Move(MoveTarget::Left).is_editing());
        assert!(!TextEditMsg::SelectAll.is_editing());
    }
}
