//! Auto-correcting date pipe.
//!
//! The pipe receives the raw text produced by an edit and either returns the
//! mask-conformant replacement (with a caret position) or refuses the edit.
//! It never looks at the structured date value.
//!
//! Edits at the end of the text flow into the next free cells, with zero
//! padding and separators added as the user types. Edits before the end keep
//! every other character in its cell: deleted digits leave a [`BLANK`] and
//! typed digits overwrite the cells at the caret.

use std::ops::Range;

use super::{digit_capacity, fits_mask, MaskCell, BLANK};
use crate::registry::MaskNotation;

/// Upper bound for the day sub-field, indexed by month (0 = month unknown).
const MAX_DAY_BY_MONTH: [u32; 13] = [31, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubField {
    Day,
    Month,
    ShortYear,
    Year,
    Hour,
    Minute,
    Second,
}

impl SubField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "dd" => Some(SubField::Day),
            "mm" => Some(SubField::Month),
            "yy" => Some(SubField::ShortYear),
            "yyyy" => Some(SubField::Year),
            "HH" => Some(SubField::Hour),
            "MM" => Some(SubField::Minute),
            "SS" => Some(SubField::Second),
            _ => None,
        }
    }

    const fn max(self) -> u32 {
        match self {
            SubField::Day => 31,
            SubField::Month => 12,
            SubField::ShortYear => 99,
            SubField::Year => 9999,
            SubField::Hour => 23,
            SubField::Minute | SubField::Second => 59,
        }
    }

    const fn min(self) -> u32 {
        match self {
            SubField::Day | SubField::Month | SubField::Year => 1,
            _ => 0,
        }
    }

    /// Leading digit of the maximum; a larger first digit gets a `0` in front.
    const fn max_first_digit(self) -> u32 {
        let mut max = self.max();
        while max >= 10 {
            max /= 10;
        }
        max
    }

    /// Month must be known before the day can be range-checked.
    const fn check_order(self) -> u8 {
        match self {
            SubField::Year => 0,
            SubField::ShortYear => 1,
            SubField::Month => 2,
            SubField::Day => 3,
            SubField::Hour => 4,
            SubField::Minute => 5,
            SubField::Second => 6,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    kind: SubField,
    /// Positions of the slot's digit cells in the mask
    cells: Vec<usize>,
}

/// Result of a successful correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conformed {
    pub text: String,
    /// Caret offset in characters
    pub caret: usize,
}

/// What an edit changed, in character offsets.
#[derive(Debug)]
struct Edit {
    /// First offset where the texts differ
    start: usize,
    /// Offsets of the previous text that were removed
    removed: Range<usize>,
    /// Characters put in their place
    inserted: Vec<char>,
    /// Only separators and blanks follow the edit
    at_end: bool,
}

impl Edit {
    /// Locate the edit using the caret: everything after it is untouched.
    fn between(previous: &[char], raw: &[char], caret: usize) -> Self {
        let caret = caret.min(raw.len());
        let mut tail = raw.len() - caret;
        if tail > previous.len() || raw[caret..] != previous[previous.len() - tail..] {
            tail = previous
                .iter()
                .rev()
                .zip(raw.iter().rev())
                .take_while(|(a, b)| a == b)
                .count();
        }

        let old = &previous[..previous.len() - tail];
        let new = &raw[..raw.len() - tail];
        let start = old.iter().zip(new).take_while(|(a, b)| a == b).count();
        Self {
            start,
            removed: start..old.len(),
            inserted: new[start..].to_vec(),
            at_end: previous[old.len()..].iter().all(|ch| !ch.is_ascii_digit()),
        }
    }

    fn replace_all(raw: &[char]) -> Self {
        Self {
            start: 0,
            removed: 0..0,
            inserted: raw.to_vec(),
            at_end: true,
        }
    }
}

/// Correction pipe for one mask notation. Built once per field.
#[derive(Debug, Clone)]
pub struct CorrectionPipe {
    notation: MaskNotation,
    cells: &'static [MaskCell],
    slots: Vec<Slot>,
    /// For each mask cell: (slot index, offset inside the slot) of a digit cell
    cell_slots: Vec<Option<(usize, usize)>>,
}

impl CorrectionPipe {
    pub fn new(notation: MaskNotation) -> Self {
        let cells = notation.cells();
        let digit_cells: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_digit())
            .map(|(pos, _)| pos)
            .collect();

        let mut slots = Vec::new();
        let mut next = 0;
        for name in notation
            .as_str()
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|name| !name.is_empty())
        {
            let Some(kind) = SubField::from_name(name) else {
                debug_assert!(false, "unknown sub-field {name:?} in {notation}");
                continue;
            };
            let end = (next + name.len()).min(digit_cells.len());
            slots.push(Slot {
                kind,
                cells: digit_cells[next..end].to_vec(),
            });
            next = end;
        }
        debug_assert_eq!(next, digit_cells.len());

        let mut cell_slots = vec![None; cells.len()];
        for (index, slot) in slots.iter().enumerate() {
            for (offset, &pos) in slot.cells.iter().enumerate() {
                cell_slots[pos] = Some((index, offset));
            }
        }

        Self {
            notation,
            cells,
            slots,
            cell_slots,
        }
    }

    pub fn notation(&self) -> MaskNotation {
        self.notation
    }

    pub fn cells(&self) -> &'static [MaskCell] {
        self.cells
    }

    /// Number of digits the mask holds
    pub fn capacity(&self) -> usize {
        digit_capacity(self.cells)
    }

    fn is_literal(&self, ch: char) -> bool {
        self.cells
            .iter()
            .any(|cell| matches!(cell, MaskCell::Literal(lit) if *lit == ch))
    }

    /// Reshape `raw` (the text after an edit) into mask-conformant text.
    ///
    /// `previous` is the text before the edit and `caret` the caret offset
    /// in `raw`. Returns `None` when the edit must be refused.
    pub fn conform(&self, raw: &str, previous: &str, caret: usize) -> Option<Conformed> {
        let raw: Vec<char> = raw.chars().collect();
        let previous_chars: Vec<char> = previous.chars().collect();
        let deleting = raw.len() < previous_chars.len();

        let (previous, edit) = if fits_mask(self.cells, previous) {
            let edit = Edit::between(&previous_chars, &raw, caret);
            (previous_chars, edit)
        } else {
            // Text that never went through the mask is rebuilt from scratch
            (Vec::new(), Edit::replace_all(&raw))
        };

        if !edit
            .inserted
            .iter()
            .all(|&ch| ch.is_ascii_digit() || self.is_literal(ch))
        {
            return None;
        }
        // Separators are re-derived from the mask, so typed ones are dropped.
        let digits: Vec<char> = edit
            .inserted
            .iter()
            .copied()
            .filter(char::is_ascii_digit)
            .collect();

        let (text, mut caret) = if edit.at_end {
            self.append(&previous[..edit.start], &digits, deleting)
        } else {
            self.overwrite(&previous, &edit, &digits)
        };

        if !self.in_range(&text) {
            return None;
        }

        if !deleting {
            while caret < text.len() && !self.cells[caret].is_digit() {
                caret += 1;
            }
        }

        Some(Conformed {
            text: text.into_iter().collect(),
            caret,
        })
    }

    /// Flow `digits` into the cells after `prefix`, padding and truncating.
    fn append(&self, prefix: &[char], digits: &[char], deleting: bool) -> (Vec<char>, usize) {
        let mut text = prefix.to_vec();
        for &digit in digits {
            self.push_literals(&mut text);
            let Some((slot, offset)) = self.cell_slots.get(text.len()).copied().flatten() else {
                break;
            };
            let slot = &self.slots[slot];
            if offset == 0 && slot.cells.len() > 1 && digit_value(digit) > slot.kind.max_first_digit()
            {
                text.push('0');
            }
            text.push(digit);
        }

        if deleting {
            // A separator or blank left at the end would be orphaned
            while text.last().is_some_and(|ch| !ch.is_ascii_digit()) {
                text.pop();
            }
            let caret = text.len();
            (text, caret)
        } else {
            let caret = text.len();
            if !text.is_empty() {
                self.push_literals(&mut text);
            }
            (text, caret)
        }
    }

    /// Blank the removed digit cells and write `digits` over the cells from
    /// the edit start. Nothing moves.
    fn overwrite(&self, previous: &[char], edit: &Edit, digits: &[char]) -> (Vec<char>, usize) {
        let mut text = previous.to_vec();
        for pos in edit.removed.clone() {
            if self.cells.get(pos).is_some_and(|cell| cell.is_digit()) {
                text[pos] = BLANK;
            }
        }

        let mut pos = edit.start;
        let mut caret = edit.start;
        for &digit in digits {
            while matches!(self.cells.get(pos), Some(MaskCell::Literal(_))) {
                pos += 1;
            }
            if pos >= self.cells.len() {
                break;
            }
            if pos < text.len() {
                text[pos] = digit;
            } else {
                self.push_literals(&mut text);
                text.push(digit);
            }
            pos += 1;
            caret = pos;
        }
        (text, caret)
    }

    /// Append the literal cells that follow the end of `text`.
    fn push_literals(&self, text: &mut Vec<char>) {
        while let Some(MaskCell::Literal(lit)) = self.cells.get(text.len()) {
            text.push(*lit);
        }
    }

    fn in_range(&self, text: &[char]) -> bool {
        let mut order: Vec<&Slot> = self.slots.iter().collect();
        order.sort_by_key(|slot| slot.kind.check_order());

        let mut month = 0;
        for slot in order {
            let part: Vec<char> = slot
                .cells
                .iter()
                .filter_map(|&pos| text.get(pos).copied())
                .collect();
            // Sub-fields with a blank are incomplete; an unknown month is 0
            if part.is_empty() || part.contains(&BLANK) {
                continue;
            }

            let value = part.iter().fold(0, |acc, ch| acc * 10 + digit_value(*ch));
            let complete = part.len() == slot.cells.len();
            if slot.kind == SubField::Month {
                month = value;
            }

            let max = match slot.kind {
                SubField::Day => MAX_DAY_BY_MONTH
                    .get(month as usize)
                    .copied()
                    .unwrap_or(SubField::Day.max()),
                kind => kind.max(),
            };
            if value > max || (complete && value < slot.kind.min()) {
                return false;
            }
        }
        true
    }
}

fn digit_value(ch: char) -> u32 {
    ch.to_digit(10).unwrap_or(0)
}
