//! Error types for APK bundling operations.
//!
//! Every failure terminates the current command. Messages are written to be
//! actionable on their own since they are the only thing the user sees.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`], used by callers and tests that only care
/// about what kind of thing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid environment input
    Configuration,
    /// Manifest could not be read or parsed
    Parse,
    /// Manifest element or attribute absent
    MissingAttribute,
    /// Manifest content present but invalid
    Validation,
    /// Required file absent
    NotFound,
    /// Required executable absent
    ToolNotFound,
    /// Refusing to overwrite an existing file
    AlreadyExists,
    /// External process exited unsuccessfully or could not be spawned
    ExternalTool,
    /// Command is reserved but has no implementation
    NotImplemented,
    /// Local filesystem failure
    Io,
}

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum Error {
    /// Required environment variable is not set
    #[error("You need to supply a {var} environment variable.\n{help}")]
    MissingEnv {
        /// Variable name
        var: &'static str,
        /// Remediation text
        help: &'static str,
    },

    /// Environment variable points somewhere that is not a directory
    #[error("{var}: {path:?} is not a directory")]
    NotADirectory {
        /// Variable name
        var: &'static str,
        /// Offending value
        path: PathBuf,
    },

    /// Environment variable holds bytes that are not valid UTF-8
    #[error("The {var} environment variable must be valid UTF-8")]
    NotUnicode {
        /// Variable name
        var: &'static str,
    },

    /// Manifest missing or not well-formed XML
    #[error("Failed to parse {path:?}: {reason}")]
    ManifestParse {
        /// Manifest path
        path: PathBuf,
        /// Underlying reader or parser message
        reason: String,
    },

    /// Manifest lacks an element or attribute we depend on
    #[error("{path:?} has no `{attribute}` attribute on <{element}>")]
    MissingAttribute {
        /// Manifest path
        path: PathBuf,
        /// Element that was inspected
        element: &'static str,
        /// Attribute that was expected
        attribute: &'static str,
    },

    /// Package identifier has a segment that is empty or not purely alphabetic
    #[error(
        "Invalid package identifier {package:?}: every dot-separated segment must be alphabetic"
    )]
    InvalidPackage {
        /// The identifier as written in the manifest
        package: String,
    },

    /// A file required by the command does not exist
    #[error("No such file {path:?}")]
    NotFound {
        /// Missing path
        path: PathBuf,
    },

    /// A project file required by an external tool does not exist
    #[error("{message}")]
    MissingProjectFile {
        /// Missing path
        path: PathBuf,
        /// User-facing explanation
        message: &'static str,
    },

    /// Executable could not be located
    #[error("Couldn't find your `{tool}` executable. {hint}")]
    ToolNotFound {
        /// Tool name or path
        tool: String,
        /// Where the user should look
        hint: String,
    },

    /// Refusing to overwrite a file
    #[error("A {} file already exists in the current directory.", .path.display())]
    AlreadyExists {
        /// Existing path
        path: PathBuf,
    },

    /// External process exited unsuccessfully
    #[error("`{tool}` failed with {status}")]
    ToolFailed {
        /// Step name
        tool: String,
        /// Exit status reported by the OS
        status: ExitStatus,
    },

    /// External process could not be spawned
    #[error("Failed to execute `{command}`: {error}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Spawn error
        error: std::io::Error,
    },

    /// Command is reserved but not implemented yet
    #[error("{feature} is not implemented")]
    NotImplemented {
        /// What was requested
        feature: &'static str,
    },

    /// Filesystem error with operation context
    #[error("Error {context} {path:?}: {error}")]
    Fs {
        /// What we were doing
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        error: std::io::Error,
    },
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingEnv { .. } | Self::NotADirectory { .. } | Self::NotUnicode { .. } => {
                ErrorKind::Configuration
            }
            Self::ManifestParse { .. } => ErrorKind::Parse,
            Self::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            Self::InvalidPackage { .. } => ErrorKind::Validation,
            Self::NotFound { .. } | Self::MissingProjectFile { .. } => ErrorKind::NotFound,
            Self::ToolNotFound { .. } => ErrorKind::ToolNotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::ToolFailed { .. } | Self::CommandFailed { .. } => ErrorKind::ExternalTool,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::Fs { .. } => ErrorKind::Io,
        }
    }
}

/// Attach operation and path context to filesystem errors.
pub trait ErrorExt<T> {
    /// Wrap an `io::Error` with what was being done and to which path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
