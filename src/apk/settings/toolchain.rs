//! SDK toolchain resolution.

use super::env::{EnvConfig, EnvVar};
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Locations of the SDK tools and platform library used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Build-tools directory
    pub build_tools_dir: PathBuf,
    /// Platform directory
    pub platform_dir: PathBuf,
}

impl Toolchain {
    /// Validate `BUILD_TOOLS_DIR` and `PLATFORM_DIR`.
    ///
    /// Both must be set and name existing directories. This runs before any
    /// other project work.
    pub fn resolve(env: &EnvConfig) -> Result<Self> {
        let build_tools_dir = require_dir(env, EnvVar::BuildToolsDir)?;
        let platform_dir = require_dir(env, EnvVar::PlatformDir)?;
        log::debug!(
            "Using build tools {} and platform {}",
            build_tools_dir.display(),
            platform_dir.display()
        );
        Ok(Self {
            build_tools_dir,
            platform_dir,
        })
    }

    /// Android Asset Packaging Tool
    pub fn aapt(&self) -> PathBuf {
        self.build_tools_dir.join("aapt")
    }

    /// Class-to-dex translator
    pub fn dx(&self) -> PathBuf {
        self.build_tools_dir.join("dx")
    }

    /// Archive alignment tool
    pub fn zipalign(&self) -> PathBuf {
        self.build_tools_dir.join("zipalign")
    }

    /// APK signer
    pub fn apksigner(&self) -> PathBuf {
        self.build_tools_dir.join("apksigner")
    }

    /// Platform reference library compiled against
    pub fn android_jar(&self) -> PathBuf {
        self.platform_dir.join("android.jar")
    }
}

fn require_dir(env: &EnvConfig, var: EnvVar) -> Result<PathBuf> {
    let path = env.require_path(var)?;
    if !path.is_dir() {
        return Err(Error::NotADirectory {
            var: var.name(),
            path,
        });
    }
    Ok(path)
}
