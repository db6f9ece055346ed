//! The fixed set of formats that get a character mask.
//!
//! Format strings use Luxon-style tokens (`dd`, `LL`, `yyyy`, `HH`, `mm`),
//! mask notations use the sub-field names the correction pipe understands
//! (`dd`, `mm`, `yyyy`, `HH`, `MM`). Only four formats are masked; any other
//! format string still parses through the codec but gets no mask.

use crate::mask::MaskCell;

const D: MaskCell = MaskCell::Digit;
const DASH: MaskCell = MaskCell::Literal('-');
const COLON: MaskCell = MaskCell::Literal(':');

static DAY_FIRST_CELLS: [MaskCell; 10] = [D, D, DASH, D, D, DASH, D, D, D, D];
static YEAR_FIRST_CELLS: [MaskCell; 10] = [D, D, D, D, DASH, D, D, DASH, D, D];
static CLOCK_CELLS: [MaskCell; 5] = [D, D, COLON, D, D];

/// A format string that has a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatToken {
    /// `dd-LL-yyyy`
    DayMonthYear,
    /// `LL-dd-yyyy`
    MonthDayYear,
    /// `yyyy-LL-dd`
    YearMonthDay,
    /// `HH:mm`
    HourMinute,
}

impl FormatToken {
    pub const ALL: [FormatToken; 4] = [
        FormatToken::DayMonthYear,
        FormatToken::MonthDayYear,
        FormatToken::YearMonthDay,
        FormatToken::HourMinute,
    ];

    /// Look up a format string. Exact match only.
    pub fn from_format(format: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.as_str() == format)
    }

    /// The format string this token stands for
    pub const fn as_str(self) -> &'static str {
        match self {
            FormatToken::DayMonthYear => "dd-LL-yyyy",
            FormatToken::MonthDayYear => "LL-dd-yyyy",
            FormatToken::YearMonthDay => "yyyy-LL-dd",
            FormatToken::HourMinute => "HH:mm",
        }
    }

    pub const fn notation(self) -> MaskNotation {
        match self {
            FormatToken::DayMonthYear => MaskNotation::DayMonthYear,
            FormatToken::MonthDayYear => MaskNotation::MonthDayYear,
            FormatToken::YearMonthDay => MaskNotation::YearMonthDay,
            FormatToken::HourMinute => MaskNotation::HourMinute,
        }
    }
}

impl std::fmt::Display for FormatToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human mask notation selecting a character mask and the correction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskNotation {
    /// `dd-mm-yyyy`
    DayMonthYear,
    /// `mm-dd-yyyy`
    MonthDayYear,
    /// `yyyy-mm-dd`
    YearMonthDay,
    /// `HH:MM`
    HourMinute,
}

impl MaskNotation {
    pub const fn as_str(self) -> &'static str {
        match self {
            MaskNotation::DayMonthYear => "dd-mm-yyyy",
            MaskNotation::MonthDayYear => "mm-dd-yyyy",
            MaskNotation::YearMonthDay => "yyyy-mm-dd",
            MaskNotation::HourMinute => "HH:MM",
        }
    }

    /// The character mask for this notation
    pub fn cells(self) -> &'static [MaskCell] {
        match self {
            MaskNotation::DayMonthYear | MaskNotation::MonthDayYear => &DAY_FIRST_CELLS,
            MaskNotation::YearMonthDay => &YEAR_FIRST_CELLS,
            MaskNotation::HourMinute => &CLOCK_CELLS,
        }
    }
}

impl std::fmt::Display for MaskNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mask notation for a format string, or `None` if the format is not masked.
pub fn mask_notation_for(format: &str) -> Option<MaskNotation> {
    FormatToken::from_format(format).map(FormatToken::notation)
}

/// Character mask for a notation.
pub fn mask_pattern_for(notation: MaskNotation) -> &'static [MaskCell] {
    notation.cells()
}
