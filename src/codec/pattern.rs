//! Compiling Luxon-style format strings.
//!
//! A pattern is a sequence of numeric fields and literal runs. Letters are
//! field tokens and must be one of the supported ones; everything else is a
//! literal. Text inside single quotes is literal, and `''` is a quote.

use std::fmt;

/// A calendar or clock component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    pub const fn is_date(self) -> bool {
        matches!(self, Field::Year | Field::Month | Field::Day)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many digits a field takes and how it is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Between 1 and `max` digits when parsing, printed without padding
    Unpadded { max: u8 },
    /// Exactly `n` digits, printed zero-padded to `n`
    Padded(u8),
    /// Exactly two digits standing for a year near the present
    TwoDigitYear,
}

impl Width {
    pub const fn digit_range(self) -> (usize, usize) {
        match self {
            Width::Unpadded { max } => (1, max as usize),
            Width::Padded(n) => (n as usize, n as usize),
            Width::TwoDigitYear => (2, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Literal(String),
    Numeric { field: Field, width: Width },
}

/// Why a format string could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A run of letters that is not a supported token
    UnsupportedToken(String),
    /// The same component appears twice
    DuplicateField(Field),
    /// A `'` quote without its closing quote
    UnterminatedQuote,
    /// No numeric fields at all
    NoFields,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnsupportedToken(token) => {
                write!(f, "unsupported format token '{}'", token)
            }
            PatternError::DuplicateField(field) => {
                write!(f, "the {} appears more than once", field)
            }
            PatternError::UnterminatedQuote => write!(f, "unterminated quoted literal"),
            PatternError::NoFields => write!(f, "format has no date or time fields"),
        }
    }
}

impl std::error::Error for PatternError {}

/// A compiled format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern {
    items: Vec<Item>,
}

impl FormatPattern {
    pub fn compile(format: &str) -> Result<Self, PatternError> {
        let mut items: Vec<Item> = Vec::new();
        let mut literal = String::new();
        let mut seen: Vec<Field> = Vec::new();

        let chars: Vec<char> = format.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];

            if ch == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    literal.push('\'');
                    i += 2;
                    continue;
                }
                let close = chars[i + 1..]
                    .iter()
                    .position(|c| *c == '\'')
                    .ok_or(PatternError::UnterminatedQuote)?;
                literal.extend(&chars[i + 1..i + 1 + close]);
                i += close + 2;
                continue;
            }

            if !ch.is_ascii_alphabetic() {
                literal.push(ch);
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|c| **c == ch).count();
            let token: String = chars[i..i + run].iter().collect();
            let (field, width) =
                token_spec(ch, run).ok_or_else(|| PatternError::UnsupportedToken(token))?;
            if seen.contains(&field) {
                return Err(PatternError::DuplicateField(field));
            }
            seen.push(field);

            if !literal.is_empty() {
                items.push(Item::Literal(std::mem::take(&mut literal)));
            }
            items.push(Item::Numeric { field, width });
            i += run;
        }

        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }
        if seen.is_empty() {
            return Err(PatternError::NoFields);
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }

    /// True if the pattern names at least one of year, month or day
    pub fn has_date_fields(&self) -> bool {
        self.fields().any(Field::is_date)
    }

    fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Numeric { field, .. } => Some(*field),
            Item::Literal(_) => None,
        })
    }
}

fn token_spec(letter: char, run: usize) -> Option<(Field, Width)> {
    let field = match letter {
        'y' => Field::Year,
        'L' | 'M' => Field::Month,
        'd' => Field::Day,
        'H' => Field::Hour,
        'm' => Field::Minute,
        's' => Field::Second,
        _ => return None,
    };
    let width = match (field, run) {
        (Field::Year, 1) => Width::Unpadded { max: 4 },
        (Field::Year, 2) => Width::TwoDigitYear,
        (Field::Year, 4) => Width::Padded(4),
        (Field::Year, _) => return None,
        (_, 1) => Width::Unpadded { max: 2 },
        (_, 2) => Width::Padded(2),
        _ => return None,
    };
    Some((field, width))
}
