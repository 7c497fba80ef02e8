//! Signing identity management.
//!
//! An APK is signed with a key from a Java keystore. Development builds use
//! the well-known debug identity (`androiddebugkey` / `android`); anything
//! else needs alias and passphrase from the environment.

use crate::{
    apk::builder::Step,
    apk::settings::{EnvConfig, EnvVar},
    error::{Error, Result},
};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the generated debug keystore
pub const DEBUG_KEYSTORE: &str = "debug.keystore";

/// Key alias used by every Android debug keystore
pub const DEBUG_ALIAS: &str = "androiddebugkey";

/// Keystore and key passphrase of every Android debug keystore
pub const DEBUG_PASSWORD: &str = "android";

/// Keystore, alias and passphrase handed to apksigner.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningIdentity {
    /// Keystore path as supplied by the user
    pub keystore: PathBuf,
    /// Key alias inside the keystore
    pub alias: String,
    /// Passphrase for both the keystore and the key
    pub password: String,
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("keystore", &self.keystore)
            .field("alias", &self.alias)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SigningIdentity {
    /// Debug identity bound to `keystore`.
    pub fn debug(keystore: impl Into<PathBuf>) -> Self {
        Self {
            keystore: keystore.into(),
            alias: DEBUG_ALIAS.to_string(),
            password: DEBUG_PASSWORD.to_string(),
        }
    }

    /// Resolve the identity named by `KEYSTORE_FILE`.
    ///
    /// A keystore whose path contains `debug` gets the debug alias and
    /// passphrase without consulting `KEYSTORE_ALIAS`/`KEYSTORE_PASS`; any
    /// other keystore requires both.
    pub fn resolve_from_environment(project_root: &Path, env: &EnvConfig) -> Result<Self> {
        let keystore = env.require_path(EnvVar::KeystoreFile)?;
        if !project_root.join(&keystore).is_file() {
            return Err(Error::NotFound { path: keystore });
        }

        if is_debug_keystore(&keystore) {
            log::debug!("Using debug identity for {}", keystore.display());
            return Ok(Self::debug(keystore));
        }

        Ok(Self {
            keystore,
            alias: env.require_string(EnvVar::KeystoreAlias)?,
            password: env.require_string(EnvVar::KeystorePass)?,
        })
    }
}

fn is_debug_keystore(keystore: &Path) -> bool {
    keystore.to_string_lossy().contains("debug")
}

/// Generate `debug.keystore` in `project_root` with keytool.
///
/// Never overwrites: an existing keystore is an error and nothing is run.
pub async fn create_debug_identity(project_root: &Path) -> Result<SigningIdentity> {
    let path = project_root.join(DEBUG_KEYSTORE);
    if path.exists() {
        return Err(Error::AlreadyExists {
            path: PathBuf::from(DEBUG_KEYSTORE),
        });
    }

    debug_keytool_step().run(project_root).await?;

    println!("The key was created in the file: {}", DEBUG_KEYSTORE);
    Ok(SigningIdentity::debug(DEBUG_KEYSTORE))
}

/// Create a release identity.
pub fn create_identity() -> Result<SigningIdentity> {
    Err(Error::NotImplemented {
        feature: "Creating a non-debug signing key",
    })
}

fn debug_keytool_step() -> Step {
    Step::new("keytool", "keytool").args([
        "-genkey",
        "-v",
        "-keystore",
        DEBUG_KEYSTORE,
        "-storepass",
        DEBUG_PASSWORD,
        "-alias",
        DEBUG_ALIAS,
        "-keypass",
        DEBUG_PASSWORD,
        "-keyalg",
        "RSA",
        "-keysize",
        "2048",
        "-validity",
        "10000",
        "-dname",
        "CN=Android Debug,O=Android,C=US",
    ])
}
