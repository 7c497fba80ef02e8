//! Android package assembly for Elm applications.
//!
//! The pieces, leaf first:
//!
//! - [`settings`] - environment configuration, toolchain resolution, manifest
//!   reading and the per-invocation [`BuildContext`]
//! - [`signing`] - debug keystore creation and signing identity resolution
//! - [`builder`] - the fixed build pipeline (Elm compile, aapt, javac, dx,
//!   zipalign, apksigner)
//! - [`deploy`] - installing and launching the package through `adb`
//!
//! Everything runs one external process at a time and stops at the first
//! failure.

pub mod builder;
pub mod deploy;
pub mod settings;
pub mod signing;
pub(crate) mod utils;

pub use builder::Bundler;
pub use settings::{BuildContext, EnvConfig, EnvVar, Manifest, Toolchain};
pub use signing::SigningIdentity;
