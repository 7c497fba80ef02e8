//! Per-invocation build context.

use super::{EnvConfig, Manifest, Toolchain};
use crate::{
    apk::signing::SigningIdentity,
    error::{Error, Result},
};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").expect("valid regex"));

/// Validated application package identifier, e.g. `com.example.app`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageId(String);

impl PackageId {
    /// Validate `package`: every dot-separated segment must be non-empty and
    /// alphabetic.
    pub fn parse(package: &str) -> Result<Self> {
        let valid = package
            .split('.')
            .all(|segment| !segment.is_empty() && segment.chars().all(char::is_alphabetic));
        if !valid {
            return Err(Error::InvalidPackage {
                package: package.to_string(),
            });
        }
        Ok(Self(package.to_string()))
    }

    /// Source directory of the package, segments as path components.
    pub fn to_path(&self) -> PathBuf {
        self.0.split('.').collect()
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every non-word character in `label` with `-`.
pub fn artifact_base_name(label: &str) -> String {
    NON_WORD.replace_all(label, "-").into_owned()
}

/// Everything one command needs to know about the project.
///
/// Built fresh for each command and never mutated.
#[derive(Debug, Clone)]
pub struct BuildContext {
    project_root: PathBuf,
    toolchain: Toolchain,
    env: EnvConfig,
    package: PackageId,
    label: String,
    package_dir: PathBuf,
    apk_name: String,
    signing: SigningIdentity,
}

impl BuildContext {
    /// Resolve the full context for the project in `project_root`.
    ///
    /// Checks happen in this order: SDK directories, manifest, keystore,
    /// package identifier.
    pub fn from_env(project_root: &Path, env: &EnvConfig) -> Result<Self> {
        let toolchain = Toolchain::resolve(env)?;
        let manifest = Manifest::load(project_root)?;
        let signing = SigningIdentity::resolve_from_environment(project_root, env)?;
        Self::new(project_root, toolchain, env.clone(), manifest, signing)
    }

    /// Assemble a context from already-resolved parts.
    pub fn new(
        project_root: &Path,
        toolchain: Toolchain,
        env: EnvConfig,
        manifest: Manifest,
        signing: SigningIdentity,
    ) -> Result<Self> {
        let package = PackageId::parse(&manifest.package)?;
        let package_dir = package.to_path();
        let apk_name = artifact_base_name(&manifest.label);

        Ok(Self {
            project_root: project_root.to_path_buf(),
            toolchain,
            env,
            package,
            label: manifest.label,
            package_dir,
            apk_name,
            signing,
        })
    }

    /// Project directory all relative paths are resolved against
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// SDK tool locations
    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Environment snapshot the context was resolved from
    pub fn env(&self) -> &EnvConfig {
        &self.env
    }

    /// Application package identifier
    pub fn package(&self) -> &PackageId {
        &self.package
    }

    /// Human-readable label from the manifest
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Package identifier as a relative directory
    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    /// Filesystem-safe base name for the APK files
    pub fn apk_name(&self) -> &str {
        &self.apk_name
    }

    /// Identity apksigner signs with
    pub fn signing(&self) -> &SigningIdentity {
        &self.signing
    }

    /// Package produced by aapt before alignment
    pub fn unsigned_apk(&self) -> PathBuf {
        Path::new("build").join(format!("{}.unsigned.apk", self.apk_name))
    }

    /// Package produced by zipalign
    pub fn aligned_apk(&self) -> PathBuf {
        Path::new("build").join(format!("{}.aligned.apk", self.apk_name))
    }

    /// Final signed package
    pub fn signed_apk(&self) -> PathBuf {
        Path::new("build").join(format!("{}.apk", self.apk_name))
    }

    /// Component launched by `adb shell am start`
    pub fn main_activity(&self) -> String {
        format!("{}/.MainActivity", self.package)
    }
}
