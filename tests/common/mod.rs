//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use datefield::editable::{MoveTarget, TextEditMsg};
use datefield::field::{BlurEvent, DateInput, DateInputProps};
use jiff::civil::{date, Date, DateTime};

/// A field plus everything it reported to its owner
pub struct Harness {
    pub field: DateInput,
    pub commits: Rc<RefCell<Vec<DateTime>>>,
    pub blurs: Rc<RefCell<Vec<BlurEvent>>>,
}

impl Harness {
    pub fn new(props: DateInputProps) -> Self {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let blurs = Rc::new(RefCell::new(Vec::new()));

        let commit_sink = Rc::clone(&commits);
        let blur_sink = Rc::clone(&blurs);
        let field = DateInput::new(props, move |value| commit_sink.borrow_mut().push(value))
            .with_on_blur(move |event| blur_sink.borrow_mut().push(event.clone()));

        Self {
            field,
            commits,
            blurs,
        }
    }

    /// Field with the default day-first format and no value
    pub fn day_first() -> Self {
        Self::new(DateInputProps::default())
    }

    /// Type `keys` one character at a time, returning the text after each key
    pub fn type_text(&mut self, keys: &str) -> Vec<String> {
        keys.chars()
            .map(|ch| {
                self.field.apply(TextEditMsg::InsertChar(ch));
                self.text()
            })
            .collect()
    }

    pub fn backspace(&mut self) -> bool {
        self.field.apply(TextEditMsg::DeleteBackward)
    }

    pub fn delete_forward(&mut self) -> bool {
        self.field.apply(TextEditMsg::DeleteForward)
    }

    /// Put the caret at `offset` without editing
    pub fn move_caret_to(&mut self, offset: usize) {
        self.field.apply(TextEditMsg::Move(MoveTarget::LineStart));
        for _ in 0..offset {
            self.field.apply(TextEditMsg::Move(MoveTarget::Right));
        }
    }

    pub fn select_all(&mut self) {
        self.field.apply(TextEditMsg::SelectAll);
    }

    pub fn paste(&mut self, text: &str) -> bool {
        self.field.apply(TextEditMsg::Paste(text.to_string()))
    }

    pub fn blur(&mut self) {
        self.field.blur(BlurEvent::default());
    }

    /// Act like an owner: feed the latest reported value back in
    pub fn accept_latest(&mut self) {
        let latest = self.commits.borrow().last().copied();
        if latest.is_some() {
            self.field.set_value(latest);
        }
    }

    pub fn text(&self) -> String {
        self.field.render().value
    }

    pub fn caret(&self) -> usize {
        self.field.render().caret
    }

    pub fn commit_count(&self) -> usize {
        self.commits.borrow().len()
    }
}

/// Midnight on the given day
pub fn midnight(year: i16, month: i8, day: i8) -> DateTime {
    date(year, month, day).at(0, 0, 0, 0)
}

/// Fixed "today" for time-only formats
pub fn reference_day() -> Date {
    date(2021, 5, 3)
}
