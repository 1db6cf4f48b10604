//! Error handling for the stencil application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stencil operations.
///
/// This enum represents all possible errors that can occur while creating a
/// project from a template. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The named template has no directory under the user root or the
    /// built-in root
    #[error("template '{name}' was not found in '{user_root}' or '{builtin_root}'")]
    TemplateNotFound { name: String, user_root: String, builtin_root: String },

    /// The selected license template file does not exist
    #[error("license file does not exist: '{path}'")]
    LicenseNotFound { path: String },

    /// The destination path already exists; stencil never merges into or
    /// overwrites an existing directory
    #[error("destination already exists: '{path}'")]
    DestinationExists { path: String },

    /// A replacement producer resolved to something other than a string
    #[error("replacement '{token}' resolved to a non-string value: {value}")]
    TypeMismatch { token: String, value: String },

    /// The requested project type has no registry entry
    #[error("unknown project type: '{name}'")]
    UnknownProjectType { name: String },

    /// Project-type registration was rejected during validation
    #[error("invalid project type registration: {0}")]
    Registration(String),

    /// Represents errors during configuration loading or parsing
    #[error("configuration error: {0}")]
    Config(String),

    /// Represents errors during user interaction
    #[error("prompt error: {0}")]
    Prompt(String),

    /// An external command exited with a non-zero status
    #[error("command '{command}' failed with {status}")]
    CommandFailed { command: String, status: String },

    /// Represents errors raised by libgit2 during repository initialization
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
