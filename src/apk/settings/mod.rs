//! Per-invocation configuration for the APK pipeline.
//!
//! Nothing here is cached between commands: every command re-reads the
//! environment and the manifest and builds a fresh [`BuildContext`].

mod context;
mod env;
mod manifest;
mod toolchain;

pub use context::{BuildContext, PackageId, artifact_base_name};
pub use env::{EnvConfig, EnvVar};
pub use manifest::{ANDROID_NS, MANIFEST_FILE, Manifest};
pub use toolchain::Toolchain;
