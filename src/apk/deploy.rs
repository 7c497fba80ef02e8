//! Device deployment through `adb`.
//!
//! Both operations probe for the bridge first so a missing SDK
//! platform-tools directory is reported with PATH guidance before anything
//! touches the device.

use crate::{
    apk::{builder::Step, settings::BuildContext},
    error::{Error, Result},
};
use std::path::Path;

/// Android Debug Bridge executable name
pub const ADB: &str = "adb";

const ADB_HINT: &str =
    "You probably need to add the .../Sdk/platform-tools/ directory to your PATH.";

/// Check that `adb` is on PATH and runs.
pub async fn check_adb_on_path(project_root: &Path) -> Result<()> {
    match which::which(ADB) {
        Ok(path) => log::debug!("Found adb at: {}", path.display()),
        Err(e) => {
            log::debug!("adb not found in PATH: {}", e);
            return Err(adb_not_found());
        }
    }

    Step::new(ADB, ADB)
        .arg("--version")
        .run(project_root)
        .await
        .map_err(|e| match e {
            Error::ToolNotFound { .. } => adb_not_found(),
            other => other,
        })
}

fn adb_not_found() -> Error {
    Error::ToolNotFound {
        tool: ADB.to_string(),
        hint: ADB_HINT.to_string(),
    }
}

/// `adb install -r` of the signed APK.
pub fn install_step(ctx: &BuildContext) -> Step {
    Step::new("adb install", ADB)
        .args(["install", "-r"])
        .arg(ctx.signed_apk())
}

/// `adb shell am start` of the main activity.
pub fn run_step(ctx: &BuildContext) -> Step {
    Step::new("adb shell am start", ADB)
        .args(["shell", "am", "start", "-n"])
        .arg(ctx.main_activity())
}

/// Install the signed APK, replacing any existing installation.
pub async fn install(ctx: &BuildContext) -> Result<()> {
    check_adb_on_path(ctx.project_root()).await?;
    install_step(ctx).run(ctx.project_root()).await
}

/// Launch the installed application's main activity.
pub async fn run(ctx: &BuildContext) -> Result<()> {
    check_adb_on_path(ctx.project_root()).await?;
    run_step(ctx).run(ctx.project_root()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apk::{
        settings::{EnvConfig, Manifest, Toolchain},
        signing::SigningIdentity,
    };
    use std::path::PathBuf;

    fn ctx() -> BuildContext {
        BuildContext::new(
            Path::new("/project"),
            Toolchain {
                build_tools_dir: PathBuf::from("/bt"),
                platform_dir: PathBuf::from("/platform"),
            },
            EnvConfig::default(),
            Manifest {
                package: "com.example.app".into(),
                label: "My App".into(),
            },
            SigningIdentity::debug("debug.keystore"),
        )
        .unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn install_replaces_existing_package() {
        assert_eq!(
            install_step(&ctx()).command_line(),
            "adb install -r build/My-App.apk"
        );
    }

    #[test]
    fn run_starts_main_activity() {
        assert_eq!(
            run_step(&ctx()).command_line(),
            "adb shell am start -n com.example.app/.MainActivity"
        );
    }

    #[test]
    fn not_found_mentions_path() {
        assert!(adb_not_found().to_string().contains("PATH"));
    }
}
