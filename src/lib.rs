//! datefield - a headless masked date/time entry field
//!
//! This crate provides the text/value synchronization behind a single-line
//! date input: a character mask with an auto-correcting pipe, a strict
//! format codec, and the state machine deciding whether the field shows what
//! the user typed or the committed value.

pub mod cli;
pub mod codec;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod field;
pub mod mask;
pub mod registry;
pub mod tracing;

// Re-export commonly used types
pub use config::FieldConfig;
pub use field::{DateInput, DateInputProps, FieldState};
pub use registry::FormatToken;
