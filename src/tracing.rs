//! Tracing setup for the datefield binary
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - commits, degradations and session ends
//! - `RUST_LOG=datefield::field=trace` - also refused keystrokes and parse failures
//!
//! Logs are also written to `~/.config/datefield/logs/datefield.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::field::{DateInput, FieldState};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer goes to stderr so stdout stays clean for frames
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "datefield.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a field's visible state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub state: FieldState,
    pub text: String,
    pub caret: usize,
}

impl FieldSnapshot {
    pub fn from_field(field: &DateInput) -> Self {
        let view = field.render();
        Self {
            state: field.state(),
            text: view.value,
            caret: view.caret,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.state != other.state {
            changes.push(format!("state: {} → {}", self.state, other.state));
        }
        if self.text != other.text {
            changes.push(format!("text: {:?} → {:?}", self.text, other.text));
        }
        if self.caret != other.caret {
            changes.push(format!("caret: {} → {}", self.caret, other.caret));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
