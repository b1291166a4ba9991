use thiserror::Error;

use crate::types::Placeholder;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("Flag '{name}' is bound more than once")]
    DuplicateFlag { name: String },

    #[error("Invalid default '{value}' for flag '{name}': {reason}")]
    InvalidDefault {
        name: String,
        value: String,
        reason: String,
    },

    #[error(
        "Default for flag '{name}' uses {placeholder} but no directory was configured (call .{method}() on the options)",
        method = .placeholder.option_method()
    )]
    MissingDirectory {
        name: String,
        placeholder: Placeholder,
    },

    #[error("Invalid defaults mode '{value}': expected 'release' or 'dev'")]
    InvalidMode { value: String },

    #[error(transparent)]
    Parse(#[from] clap::Error),
}
