//! Android APK bundler for Elm applications.
//!
//! Drives the stock Android SDK toolchain (aapt, javac, dx, zipalign,
//! apksigner, adb) plus the Elm compiler to turn a project directory into an
//! installed, signed application package.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod apk;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
