//! Main build orchestration.
//!
//! This module provides the [`Bundler`] that runs the three build phases in
//! order and stops at the first failing step.

use super::{elm, process, steps};
use crate::{
    apk::{settings::BuildContext, utils::fs},
    error::Result,
};
use std::path::PathBuf;

/// Main build orchestrator.
///
/// # Phases
///
/// 1. Create `build/gen`, `build/obj`, `build/apk`
/// 2. Compile the Elm front end into `assets/main.js`
/// 3. Assemble the APK: aapt, javac, dx, aapt, zipalign, apksigner
///
/// # Examples
///
/// ```no_run
/// use elm_apk_bundler::apk::{BuildContext, Bundler, EnvConfig};
/// use std::path::Path;
///
/// # async fn example() -> elm_apk_bundler::Result<()> {
/// let ctx = BuildContext::from_env(Path::new("."), &EnvConfig::from_env())?;
/// let apk = Bundler::new(ctx).build().await?;
/// println!("Created {}", apk.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    ctx: BuildContext,
}

impl Bundler {
    /// Creates a new bundler for a resolved project.
    pub fn new(ctx: BuildContext) -> Self {
        Self { ctx }
    }

    /// Runs every phase and returns the signed APK path, relative to the
    /// project root.
    pub async fn build(&self) -> Result<PathBuf> {
        log::info!(
            "Building {} ({})",
            self.ctx.label(),
            self.ctx.package()
        );

        self.prepare_dirs().await?;
        elm::compile(self.ctx.project_root()).await?;
        self.assemble().await?;

        let apk = self.ctx.signed_apk();
        log::info!("✓ Created {}", apk.display());
        Ok(apk)
    }

    /// Creates the working directories under `build/`.
    pub async fn prepare_dirs(&self) -> Result<()> {
        for dir in steps::build_dirs() {
            fs::create_dir_all(&self.ctx.project_root().join(dir)).await?;
        }
        Ok(())
    }

    /// Runs the six package-assembly steps.
    ///
    /// Command lines are all built before the first one runs.
    pub async fn assemble(&self) -> Result<()> {
        let steps = steps::package_steps(&self.ctx)?;
        process::run_all(&steps, self.ctx.project_root()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apk::{
        settings::{EnvConfig, Manifest, Toolchain},
        signing::SigningIdentity,
    };
    use crate::error::ErrorKind;

    fn bundler(root: &std::path::Path) -> Bundler {
        let ctx = BuildContext::new(
            root,
            Toolchain {
                build_tools_dir: root.join("bt"),
                platform_dir: root.join("platform"),
            },
            EnvConfig::default(),
            Manifest {
                package: "com.example.app".into(),
                label: "My App".into(),
            },
            SigningIdentity::debug("debug.keystore"),
        )
        .unwrap();
        Bundler::new(ctx)
    }

    #[tokio::test]
    async fn prepare_dirs_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let bundler = bundler(tmp.path());

        bundler.prepare_dirs().await.unwrap();
        bundler.prepare_dirs().await.unwrap();

        for dir in ["gen", "obj", "apk"] {
            assert!(tmp.path().join("build").join(dir).is_dir());
        }
    }

    #[tokio::test]
    async fn build_stops_before_assembly_without_elm_json() {
        let tmp = tempfile::tempdir().unwrap();
        let err = bundler(tmp.path()).build().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(tmp.path().join("build").join("gen").is_dir());
        assert!(!tmp.path().join("assets").exists());
    }
}
