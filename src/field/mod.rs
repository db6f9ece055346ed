//! The date entry field: props in, text and committed values out.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use datefield::editable::TextEditMsg;
//! use datefield::field::{DateInput, DateInputProps};
//!
//! let committed = Rc::new(RefCell::new(None));
//! let sink = Rc::clone(&committed);
//! let mut field = DateInput::new(DateInputProps::default(), move |value| {
//!     *sink.borrow_mut() = Some(value);
//! });
//!
//! for ch in "03052021".chars() {
//!     field.apply(TextEditMsg::InsertChar(ch));
//! }
//!
//! assert_eq!(field.display_text(), "03-05-2021");
//! assert_eq!(*committed.borrow(), Some(jiff::civil::date(2021, 5, 3).at(0, 0, 0, 0)));
//! ```

mod controller;
mod props;

pub use controller::{BlurHandler, ChangeHandler, DateInput};
pub use props::{
    Attributes, BlurEvent, DateInputProps, FieldError, FieldState, InputView, DEFAULT_FORMAT,
};
