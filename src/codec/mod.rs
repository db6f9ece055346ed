//! Converting between field text and structured date values.
//!
//! Parsing is positional and strict: the whole input must match the pattern,
//! each field must have the digit count its token asks for, and the result
//! must be a real calendar date and clock time. Nothing is clamped.

mod pattern;

pub use pattern::{Field, FormatPattern, Item, PatternError, Width};

use std::fmt::{self, Write};

use jiff::civil::{Date, DateTime, Time};

/// Two-digit years up to this value land in the 2000s, above it in the 1900s.
const TWO_DIGIT_YEAR_CUTOFF: i32 = 60;

/// Why a piece of text is not a valid value for a format.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The format itself cannot be compiled
    Pattern(PatternError),
    /// Nothing was typed
    Empty,
    /// A separator or quoted literal is missing at `offset`
    ExpectedLiteral { expected: String, offset: usize },
    /// Not enough digits for `field` at `offset`
    ExpectedDigits { field: Field, offset: usize },
    /// Text continues past the end of the pattern
    TrailingInput { offset: usize },
    /// The fields do not form a real date or time
    Calendar(jiff::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Pattern(err) => write!(f, "invalid format: {}", err),
            ParseError::Empty => write!(f, "no input"),
            ParseError::ExpectedLiteral { expected, offset } => {
                write!(f, "expected '{}' at offset {}", expected, offset)
            }
            ParseError::ExpectedDigits { field, offset } => {
                write!(f, "expected {} digits at offset {}", field, offset)
            }
            ParseError::TrailingInput { offset } => {
                write!(f, "unexpected input at offset {}", offset)
            }
            ParseError::Calendar(err) => write!(f, "not a valid date or time: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Pattern(err) => Some(err),
            ParseError::Calendar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PatternError> for ParseError {
    fn from(err: PatternError) -> Self {
        ParseError::Pattern(err)
    }
}

/// Parser and printer for one format string, compiled once.
#[derive(Debug, Clone)]
pub struct DateCodec {
    format: String,
    pattern: Result<FormatPattern, PatternError>,
}

impl DateCodec {
    pub fn new(format: &str) -> Self {
        let pattern = FormatPattern::compile(format);
        if let Err(err) = &pattern {
            tracing::warn!(format, %err, "format cannot be compiled; values will neither parse nor print");
        }
        Self {
            format: format.to_string(),
            pattern,
        }
    }

    pub fn format_str(&self) -> &str {
        &self.format
    }

    pub fn pattern(&self) -> Result<&FormatPattern, &PatternError> {
        self.pattern.as_ref()
    }

    /// Parse `text`. `reference` supplies the date for time-only formats and
    /// the year when the format has date fields but no year.
    pub fn parse(&self, text: &str, reference: Date) -> Result<DateTime, ParseError> {
        let pattern = self.pattern.as_ref().map_err(|err| err.clone())?;
        parse_with(pattern, text, reference)
    }

    /// Print `value`. Empty when the format cannot be compiled.
    pub fn format(&self, value: &DateTime) -> String {
        match &self.pattern {
            Ok(pattern) => format_with(pattern, value),
            Err(_) => String::new(),
        }
    }
}

/// Parse `text` against a format string.
pub fn parse(text: &str, format: &str, reference: Date) -> Result<DateTime, ParseError> {
    let pattern = FormatPattern::compile(format)?;
    parse_with(&pattern, text, reference)
}

/// Print `value` with a format string. Empty when the format cannot be compiled.
pub fn format(value: &DateTime, format: &str) -> String {
    FormatPattern::compile(format)
        .map(|pattern| format_with(&pattern, value))
        .unwrap_or_default()
}

#[derive(Debug, Default)]
struct Parts {
    year: Option<i32>,
    month: Option<i32>,
    day: Option<i32>,
    hour: Option<i32>,
    minute: Option<i32>,
    second: Option<i32>,
}

impl Parts {
    fn set(&mut self, field: Field, value: i32) {
        let slot = match field {
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
            Field::Hour => &mut self.hour,
            Field::Minute => &mut self.minute,
            Field::Second => &mut self.second,
        };
        *slot = Some(value);
    }
}

fn parse_with(pattern: &FormatPattern, text: &str, reference: Date) -> Result<DateTime, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut parts = Parts::default();

    for item in pattern.items() {
        match item {
            Item::Literal(expected) => {
                if !text[pos..].starts_with(expected.as_str()) {
                    return Err(ParseError::ExpectedLiteral {
                        expected: expected.clone(),
                        offset: pos,
                    });
                }
                pos += expected.len();
            }
            Item::Numeric { field, width } => {
                let (min, max) = width.digit_range();
                let count = bytes[pos..]
                    .iter()
                    .take(max)
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if count < min {
                    return Err(ParseError::ExpectedDigits {
                        field: *field,
                        offset: pos,
                    });
                }

                let value = bytes[pos..pos + count]
                    .iter()
                    .fold(0i32, |acc, b| acc * 10 + i32::from(b - b'0'));
                let value = match width {
                    Width::TwoDigitYear if value > TWO_DIGIT_YEAR_CUTOFF => 1900 + value,
                    Width::TwoDigitYear => 2000 + value,
                    _ => value,
                };
                parts.set(*field, value);
                pos += count;
            }
        }
    }

    if pos < text.len() {
        return Err(ParseError::TrailingInput { offset: pos });
    }

    let date = if pattern.has_date_fields() {
        // Every numeric field has at most four digits, so the casts are lossless.
        let year = parts.year.unwrap_or(i32::from(reference.year()));
        Date::new(
            year as i16,
            parts.month.unwrap_or(1) as i8,
            parts.day.unwrap_or(1) as i8,
        )
        .map_err(ParseError::Calendar)?
    } else {
        reference
    };

    let time = Time::new(
        parts.hour.unwrap_or(0) as i8,
        parts.minute.unwrap_or(0) as i8,
        parts.second.unwrap_or(0) as i8,
        0,
    )
    .map_err(ParseError::Calendar)?;

    Ok(DateTime::from_parts(date, time))
}

fn format_with(pattern: &FormatPattern, value: &DateTime) -> String {
    let mut out = String::new();
    for item in pattern.items() {
        match item {
            Item::Literal(text) => out.push_str(text),
            Item::Numeric { field, width } => {
                let n = match field {
                    Field::Year => i32::from(value.year()),
                    Field::Month => i32::from(value.month()),
                    Field::Day => i32::from(value.day()),
                    Field::Hour => i32::from(value.hour()),
                    Field::Minute => i32::from(value.minute()),
                    Field::Second => i32::from(value.second()),
                };
                // Writing to a String cannot fail
                let _ = match width {
                    Width::Unpadded { .. } => write!(out, "{}", n),
                    Width::Padded(len) => write!(out, "{:0width$}", n, width = usize::from(*len)),
                    Width::TwoDigitYear => write!(out, "{:02}", n.rem_euclid(100)),
                };
            }
        }
    }
    out
}
