//! Command-line driver for a scripted field session
//!
//! Supports:
//! - Picking the format and the initial committed value
//! - A keystroke script (`<` = backspace, `|` = blur)
//! - Plain or JSON frame output

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use jiff::civil::Date;
use serde::Serialize;

use crate::codec::DateCodec;
use crate::config::FieldConfig;
use crate::editable::TextEditMsg;
use crate::field::{BlurEvent, DateInput, DateInputProps};
use crate::tracing::FieldSnapshot;

/// Drive a masked date field from the command line
#[derive(Parser, Debug)]
#[command(
    name = "datefield",
    version,
    about = "Type into a masked date field and watch it respond"
)]
pub struct CliArgs {
    /// Format string (overrides the config file)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Initial committed value, written in the field's format
    #[arg(short, long, value_name = "TEXT")]
    pub value: Option<String>,

    /// Keystrokes to type; `<` is backspace and `|` is blur
    #[arg(short, long, value_name = "KEYS", default_value = "")]
    pub keys: String,

    /// Print frames as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Read field defaults from this file instead of the default config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// One scripted host event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Char(char),
    Backspace,
    Blur,
}

impl Step {
    pub fn label(&self) -> String {
        match self {
            Step::Char(ch) => ch.to_string(),
            Step::Backspace => "<".to_string(),
            Step::Blur => "|".to_string(),
        }
    }
}

/// Split a keystroke script into steps
pub fn parse_keys(keys: &str) -> Vec<Step> {
    keys.chars()
        .map(|ch| match ch {
            '<' => Step::Backspace,
            '|' => Step::Blur,
            ch => Step::Char(ch),
        })
        .collect()
}

/// A scripted session derived from CLI arguments and config
#[derive(Debug, Clone)]
pub struct Session {
    pub props: DateInputProps,
    pub steps: Vec<Step>,
}

impl CliArgs {
    /// Merge the arguments over `config`. `--value` must parse under the format.
    pub fn into_session(self, config: &FieldConfig, today: Date) -> Result<Session, String> {
        let mut props = config.to_props();
        if let Some(format) = self.format {
            props.format = format;
        }
        props.reference_date = Some(today);

        if let Some(text) = self.value.as_deref() {
            let value = DateCodec::new(&props.format)
                .parse(text, today)
                .map_err(|e| {
                    format!(
                        "Invalid --value '{}' for format '{}': {}",
                        text, props.format, e
                    )
                })?;
            props.value = Some(value);
        }

        Ok(Session {
            props,
            steps: parse_keys(&self.keys),
        })
    }
}

/// What the field shows after one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// The step label, empty for the initial frame
    pub step: String,
    pub display: String,
    pub caret: usize,
    pub state: String,
    /// Committed value in ISO 8601
    pub committed: Option<String>,
}

impl Frame {
    fn capture(step: String, field: &DateInput) -> Self {
        let view = field.render();
        Self {
            step,
            display: view.value,
            caret: view.caret,
            state: field.state().to_string(),
            committed: field.value().map(|value| value.to_string()),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = if self.step.is_empty() {
            "·"
        } else {
            self.step.as_str()
        };
        write!(
            f,
            "{:<2} {:<12} caret={:<2} {:<7} committed={}",
            step,
            format!("{:?}", self.display),
            self.caret,
            self.state,
            self.committed.as_deref().unwrap_or("-")
        )
    }
}

/// Play `steps` against a new field, acting as its owner.
///
/// Values reported through `on_change` are passed back in as the committed
/// value after every step. Returns the initial frame plus one per step.
pub fn run_script(props: DateInputProps, steps: &[Step]) -> Vec<Frame> {
    let committed = Rc::new(RefCell::new(props.value));
    let sink = Rc::clone(&committed);
    let mut field = DateInput::new(props, move |value| {
        *sink.borrow_mut() = Some(value);
    });

    let mut frames = Vec::with_capacity(steps.len() + 1);
    frames.push(Frame::capture(String::new(), &field));

    for step in steps {
        let before = FieldSnapshot::from_field(&field);
        match step {
            Step::Char(ch) => {
                field.apply(TextEditMsg::InsertChar(*ch));
            }
            Step::Backspace => {
                field.apply(TextEditMsg::DeleteBackward);
            }
            Step::Blur => field.blur(BlurEvent::default()),
        }

        let latest = *committed.borrow();
        if latest != field.value() {
            field.set_value(latest);
        }

        if let Some(changes) = before.diff(&FieldSnapshot::from_field(&field)) {
            tracing::debug!(step = %step.label(), %changes, "step applied");
        }
        frames.push(Frame::capture(step.label(), &field));
    }

    frames
}
