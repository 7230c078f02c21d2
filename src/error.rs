use miette::Diagnostic;
use thiserror::Error;

/// Main error type for xpak operations
#[derive(Error, Diagnostic, Debug)]
pub enum XpakError {
    #[error("IO error: {0}")]
    #[diagnostic(code(xpak::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(xpak::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(xpak::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Directory error with {path}: {message}")]
    #[diagnostic(code(xpak::dir))]
    Directory {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Write error with {path}: {message}")]
    #[diagnostic(code(xpak::write))]
    Write {
        path: std::path::PathBuf,
        message: String,
    },

    /// A single asset's source could not be decoded or read. This never
    /// aborts a build; the pipeline logs it and writes an empty payload.
    #[error("Failed to import {path}: {message}")]
    #[diagnostic(code(xpak::import))]
    Import {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, XpakError>;
