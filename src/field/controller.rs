//! The date field state machine.
//!
//! The field is either showing the committed value (Display) or the text the
//! user is typing (Typing). Every accepted keystroke moves it to Typing and
//! commits immediately if the text parses; blur always returns to Display.

use std::fmt;

use jiff::civil::{Date, DateTime};

use super::props::{Attributes, BlurEvent, DateInputProps, FieldError, FieldState, InputView};
use crate::codec::DateCodec;
use crate::editable::{EditConstraints, EditableState, StringBuffer, TextEditMsg};
use crate::mask::{Conformed, CorrectionPipe, MaskCell};
use crate::registry::mask_notation_for;

pub type ChangeHandler = Box<dyn FnMut(DateTime)>;
pub type BlurHandler = Box<dyn FnMut(&BlurEvent)>;

/// A masked date/time entry field.
pub struct DateInput {
    // Fixed at construction
    format: String,
    codec: DateCodec,
    pipe: Option<CorrectionPipe>,

    // Owner props
    value: Option<DateTime>,
    attributes: Attributes,
    reference_date: Option<Date>,

    /// Text typed since focus began; `None` while displaying the committed value
    typed: Option<String>,
    editor: EditableState<StringBuffer>,

    on_change: ChangeHandler,
    on_blur: Option<BlurHandler>,
}

impl fmt::Debug for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateInput")
            .field("format", &self.format)
            .field("masked", &self.pipe.is_some())
            .field("value", &self.value)
            .field("typed", &self.typed)
            .field("caret", &self.editor.caret())
            .finish_non_exhaustive()
    }
}

impl DateInput {
    /// Mount a field. `on_change` receives every value the user completes.
    pub fn new(props: DateInputProps, on_change: impl FnMut(DateTime) + 'static) -> Self {
        let pipe = mask_notation_for(&props.format).map(CorrectionPipe::new);
        let constraints = if pipe.is_some() {
            EditConstraints::date_field()
        } else {
            tracing::debug!(format = %props.format, "format has no mask; using a plain text input");
            EditConstraints::single_line()
        };

        let mut field = Self {
            codec: DateCodec::new(&props.format),
            format: props.format,
            pipe,
            value: props.value,
            attributes: props.attributes,
            reference_date: props.reference_date,
            typed: None,
            editor: EditableState::new(StringBuffer::new(), constraints),
            on_change: Box::new(on_change),
            on_blur: None,
        };
        let text = field.display_text();
        field.editor.set_content(&text);
        field
    }

    /// Attach a handler that receives blur events after the field resets.
    pub fn with_on_blur(mut self, on_blur: impl FnMut(&BlurEvent) + 'static) -> Self {
        self.on_blur = Some(Box::new(on_blur));
        self
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn codec(&self) -> &DateCodec {
        &self.codec
    }

    pub fn is_masked(&self) -> bool {
        self.pipe.is_some()
    }

    pub fn mask(&self) -> Option<&'static [MaskCell]> {
        self.pipe.as_ref().map(CorrectionPipe::cells)
    }

    /// The committed value as last passed in by the owner
    pub fn value(&self) -> Option<DateTime> {
        self.value
    }

    pub fn typed_text(&self) -> Option<&str> {
        self.typed.as_deref()
    }

    pub fn state(&self) -> FieldState {
        if self.typed.is_some() {
            FieldState::Typing
        } else {
            FieldState::Display
        }
    }

    /// Text currently shown: typed text, else the formatted committed value, else empty.
    pub fn display_text(&self) -> String {
        match (&self.typed, &self.value) {
            (Some(typed), _) => typed.clone(),
            (None, Some(value)) => self.codec.format(value),
            (None, None) => String::new(),
        }
    }

    pub fn caret(&self) -> usize {
        self.editor.caret()
    }

    /// Owner re-render. The format is fixed; everything else is taken as given.
    pub fn set_props(&mut self, props: DateInputProps) -> Result<(), FieldError> {
        if props.format != self.format {
            return Err(FieldError::FormatChanged {
                from: self.format.clone(),
                to: props.format,
            });
        }
        self.value = props.value;
        self.attributes = props.attributes;
        self.reference_date = props.reference_date;
        self.sync_editor();
        Ok(())
    }

    /// Update only the committed value (shorthand for a re-render with a new `value`).
    pub fn set_value(&mut self, value: Option<DateTime>) {
        self.value = value;
        self.sync_editor();
    }

    /// The text input changed to `text` (already mask-corrected).
    ///
    /// Enters Typing, and hands the parsed value to the owner if `text` is a
    /// complete, valid value. Nothing is reported otherwise.
    pub fn input(&mut self, text: &str) {
        self.typed = Some(text.to_string());
        if self.editor.text() != text {
            self.editor.set_content(text);
        }

        let reference = self.reference_date();
        match self.codec.parse(text, reference) {
            Ok(value) => {
                tracing::debug!(%value, text, "committing typed value");
                (self.on_change)(value);
            }
            Err(err) => tracing::trace!(%err, text, "typed text is not a value yet"),
        }
    }

    /// Run a host keystroke through the text input and the correction pipe.
    ///
    /// Returns true if the field text changed. Refused edits restore the
    /// previous text and caret and leave the state alone. An edit whose
    /// corrected text equals the current text is a no-op: the caret moves but
    /// the field does not enter Typing and nothing is parsed.
    pub fn apply(&mut self, msg: TextEditMsg) -> bool {
        self.sync_editor();

        if !msg.is_editing() {
            self.editor.apply(&msg);
            return false;
        }

        let previous = self.editor.text();
        let previous_selection = self.editor.selection;
        if !self.editor.apply(&msg) {
            tracing::trace!(?msg, "edit refused by the text input");
            return false;
        }

        let raw = self.editor.text();
        let caret = self.editor.caret();
        let conformed = match &self.pipe {
            Some(pipe) => match pipe.conform(&raw, &previous, caret) {
                Some(conformed) => conformed,
                None => {
                    tracing::trace!(%raw, %previous, "edit refused by the mask");
                    self.editor.restore(&previous, previous_selection);
                    return false;
                }
            },
            None => Conformed { text: raw, caret },
        };

        self.editor
            .set_content_with_caret(&conformed.text, conformed.caret);
        if conformed.text == previous {
            return false;
        }
        self.input(&conformed.text);
        true
    }

    /// The text input lost focus. Drops typed text and forwards the event.
    pub fn blur(&mut self, event: BlurEvent) {
        if let Some(typed) = self.typed.take() {
            tracing::debug!(%typed, "edit session ended");
        }
        let text = self.display_text();
        self.editor.set_content(&text);

        if let Some(on_blur) = self.on_blur.as_mut() {
            on_blur(&event);
        }
    }

    /// Describe what the host's text input should show.
    pub fn render(&self) -> InputView<'_> {
        let value = self.display_text();
        let caret = if self.editor.buffer.as_str() == value {
            self.editor.caret()
        } else {
            value.chars().count()
        };
        InputView {
            value,
            caret,
            mask: self.mask(),
            keep_char_positions: true,
            attributes: &self.attributes,
        }
    }

    fn reference_date(&self) -> Date {
        self.reference_date
            .unwrap_or_else(|| jiff::Zoned::now().date())
    }

    /// Keep the text input's buffer equal to the shown text.
    fn sync_editor(&mut self) {
        let text = self.display_text();
        if self.editor.buffer.as_str() != text {
            self.editor.set_content(&text);
        }
    }
}
