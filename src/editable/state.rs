//! EditableState - single-line editable text with a caret and a selection.

use super::buffer::{TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::messages::{MoveTarget, TextEditMsg};
use super::selection::Selection;

/// Single-line editable text with caret and selection.
///
/// The caret is the selection head. Generic over the buffer type B.
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    /// The text buffer
    pub buffer: B,
    /// Selection; the head is the caret
    pub selection: Selection,
    /// Constraints for this editing context
    pub constraints: EditConstraints,
}

impl<B: TextBuffer> EditableState<B> {
    /// Create a new EditableState with the caret at the end of the buffer
    pub fn new(buffer: B, constraints: EditConstraints) -> Self {
        let end = buffer.len_chars();
        Self {
            buffer,
            selection: Selection::collapsed(end),
            constraints,
        }
    }

    /// Caret offset in characters
    pub fn caret(&self) -> usize {
        self.selection.head
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer.slice(self.selection.range())
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Collapse selection to caret position
    pub fn collapse_selection(&mut self) {
        self.selection.collapse();
    }

    fn place_caret(&mut self, offset: usize, extend_selection: bool) {
        let offset = offset.min(self.buffer.len_chars());
        if extend_selection {
            self.selection.extend_to(offset);
        } else {
            self.selection = Selection::collapsed(offset);
        }
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl<B: TextBuffer> EditableState<B> {
    /// Move caret left by one character
    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let start = self.selection.start();
            self.selection = Selection::collapsed(start);
            return;
        }
        let target = self.caret().saturating_sub(1);
        self.place_caret(target, extend_selection);
    }

    /// Move caret right by one character
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            let end = self.selection.end();
            self.selection = Selection::collapsed(end);
            return;
        }
        let target = self.caret() + 1;
        self.place_caret(target, extend_selection);
    }

    /// Move caret to start of the field
    pub fn move_line_start(&mut self, extend_selection: bool) {
        self.place_caret(0, extend_selection);
    }

    /// Move caret to end of the field
    pub fn move_line_end(&mut self, extend_selection: bool) {
        let end = self.buffer.len_chars();
        self.place_caret(end, extend_selection);
    }

    /// Select all text
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.buffer.len_chars());
    }

    fn move_to(&mut self, target: MoveTarget, extend_selection: bool) {
        match target {
            MoveTarget::Left => self.move_left(extend_selection),
            MoveTarget::Right => self.move_right(extend_selection),
            MoveTarget::LineStart => self.move_line_start(extend_selection),
            MoveTarget::LineEnd => self.move_line_end(extend_selection),
        }
    }
}

// =============================================================================
// Editing Operations (require TextBufferMut)
// =============================================================================

impl<B: TextBuffer + TextBufferMut> EditableState<B> {
    /// Insert a character at the caret, replacing any selection.
    /// Returns true if the character was inserted, false if rejected by constraints
    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut tmp = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut tmp))
    }

    /// Insert text at the caret, replacing any selection.
    /// Returns true if the text was inserted
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        if !text.chars().all(|ch| self.constraints.is_char_allowed(ch)) {
            return false;
        }

        let insert_len = text.chars().count();
        let offset = self.delete_selection_range();
        self.buffer.insert(offset, text);
        self.selection = Selection::collapsed(offset + insert_len);
        true
    }

    /// Delete character before caret (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            self.delete_selection_range();
            return true;
        }

        let offset = self.caret();
        if offset == 0 {
            return false;
        }

        self.buffer.remove(offset - 1..offset);
        self.selection = Selection::collapsed(offset - 1);
        true
    }

    /// Delete character after caret (Delete key)
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            self.delete_selection_range();
            return true;
        }

        let offset = self.caret();
        if offset >= self.buffer.len_chars() {
            return false;
        }

        // Caret stays put
        self.buffer.remove(offset..offset + 1);
        true
    }

    /// Remove the selected range (if any) and return where the caret lands
    fn delete_selection_range(&mut self) -> usize {
        let range = self.selection.range();
        if !range.is_empty() {
            self.buffer.remove(range.clone());
        }
        self.selection = Selection::collapsed(range.start);
        range.start
    }

    /// Set the content, replacing everything, with the caret at the end
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.selection = Selection::collapsed(self.buffer.len_chars());
    }

    /// Set the content and place the caret, clamped to the new length
    pub fn set_content_with_caret(&mut self, text: &str, caret: usize) {
        self.buffer.set_content(text);
        self.selection = Selection::collapsed(caret.min(self.buffer.len_chars()));
    }

    /// Restore an earlier content/selection pair (used to revert a refused edit)
    pub fn restore(&mut self, text: &str, selection: Selection) {
        self.buffer.set_content(text);
        self.selection = selection;
        self.selection.clamp(self.buffer.len_chars());
    }

    /// Apply a message. Returns true if the buffer content changed.
    pub fn apply(&mut self, msg: &TextEditMsg) -> bool {
        match msg {
            TextEditMsg::Move(target) => {
                self.move_to(*target, false);
                false
            }
            TextEditMsg::MoveWithSelection(target) => {
                self.move_to(*target, true);
                false
            }
            TextEditMsg::InsertChar(ch) => self.insert_char(*ch),
            TextEditMsg::InsertText(text) | TextEditMsg::Paste(text) => self.insert_text(text),
            TextEditMsg::DeleteBackward => self.delete_backward(),
            TextEditMsg::DeleteForward => self.delete_forward(),
            TextEditMsg::SelectAll => {
                self.select_all();
                false
            }
            TextEditMsg::CollapseSelection => {
                self.collapse_selection();
                false
            }
        }
    }
}
