//! Single-line text-input primitive used underneath the date field.
//!
//! The field never edits text directly. Host keystrokes arrive as
//! [`TextEditMsg`]s, the primitive applies them to its buffer, and the
//! resulting raw text and caret are handed to the correction pipe.
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over buffer implementations
//! - [`StringBuffer`]: Buffer backed by `String`
//! - [`EditableState`]: Caret, selection and constraints around a buffer
//! - [`EditConstraints`]: Which characters the primitive accepts at all
//! - [`TextEditMsg`]: Edit and caret messages
//!
//! # Example
//!
//! ```
//! use datefield::editable::{EditableState, StringBuffer, EditConstraints, TextEditMsg};
//!
//! let mut state = EditableState::new(StringBuffer::new(), EditConstraints::date_field());
//! state.apply(&TextEditMsg::InsertChar('1'));
//! state.apply(&TextEditMsg::InsertChar('x'));
//!
//! assert_eq!(state.text(), "1");
//! ```

mod buffer;
mod constraints;
mod messages;
mod selection;
mod state;

pub use buffer::{StringBuffer, TextBuffer, TextBufferMut};
pub use constraints::{CharFilter, EditConstraints};
pub use messages::{MoveTarget, TextEditMsg};
pub use selection::Selection;
pub use state::EditableState;
