use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tint operations
#[derive(Error, Diagnostic, Debug)]
pub enum TintError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tint::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tint::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(tint::input))]
    InvalidInput { message: String },

    #[error("Unknown dialect: {name}")]
    #[diagnostic(code(tint::dialect), help("Available dialects: less, sass"))]
    UnknownDialect { name: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tint::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TintError>;
