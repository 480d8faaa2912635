use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dmgbg operations
#[derive(Error, Diagnostic, Debug)]
pub enum BgError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dmgbg::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dmgbg::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(dmgbg::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(dmgbg::render))]
    Render { message: String },

    #[error("Font error: {message}")]
    #[diagnostic(code(dmgbg::font))]
    Font {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BgError>;
