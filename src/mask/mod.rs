//! Character masks and the correction pipe that enforces them.
//!
//! A mask is a fixed sequence of [`MaskCell`]s. Digit cells accept one ASCII
//! digit, literal cells hold a separator the user never has to type.

mod pipe;

pub use pipe::{Conformed, CorrectionPipe};

/// Shown in a digit cell whose digit was deleted from the middle of the text.
pub const BLANK: char = '_';

/// One position of a character mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskCell {
    /// Accepts a single ASCII digit
    Digit,
    /// Fixed separator character
    Literal(char),
}

impl MaskCell {
    pub const fn is_digit(self) -> bool {
        matches!(self, MaskCell::Digit)
    }
}

/// Render a mask using `_` for digit cells, e.g. `__-__-____`.
pub fn mask_shape(cells: &[MaskCell]) -> String {
    cells
        .iter()
        .map(|cell| match cell {
            MaskCell::Digit => '_',
            MaskCell::Literal(ch) => *ch,
        })
        .collect()
}

/// Number of digit cells in a mask.
pub fn digit_capacity(cells: &[MaskCell]) -> usize {
    cells.iter().filter(|cell| cell.is_digit()).count()
}

/// Check whether `text` fits the mask cell-for-cell (a prefix is allowed).
/// Digit cells may hold [`BLANK`].
pub fn fits_mask(cells: &[MaskCell], text: &str) -> bool {
    let len = text.chars().count();
    if len > cells.len() {
        return false;
    }
    text.chars().zip(cells).all(|(ch, cell)| match cell {
        MaskCell::Digit => ch.is_ascii_digit() || ch == BLANK,
        MaskCell::Literal(lit) => ch == *lit,
    })
}
