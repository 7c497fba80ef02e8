//! Environment-driven configuration.
//!
//! All variables are read once into [`EnvConfig`]; whether a given key is
//! required depends on the command, so absence is reported lazily through
//! [`EnvConfig::require_path`] and [`EnvConfig::require_string`].

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variables consumed by the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvVar {
    /// SDK build-tools directory holding aapt, dx, zipalign, apksigner
    BuildToolsDir,
    /// SDK platform directory holding android.jar
    PlatformDir,
    /// Keystore used by apksigner
    KeystoreFile,
    /// Key alias inside a non-debug keystore
    KeystoreAlias,
    /// Passphrase for a non-debug keystore and its key
    KeystorePass,
    /// JDK home; javac's boot classpath is taken from here
    JavaHome,
}

impl EnvVar {
    /// Every key, in the order they are documented.
    pub const ALL: [EnvVar; 6] = [
        EnvVar::BuildToolsDir,
        EnvVar::PlatformDir,
        EnvVar::KeystoreFile,
        EnvVar::KeystoreAlias,
        EnvVar::KeystorePass,
        EnvVar::JavaHome,
    ];

    /// Name of the variable in the process environment.
    pub fn name(self) -> &'static str {
        match self {
            EnvVar::BuildToolsDir => "BUILD_TOOLS_DIR",
            EnvVar::PlatformDir => "PLATFORM_DIR",
            EnvVar::KeystoreFile => "KEYSTORE_FILE",
            EnvVar::KeystoreAlias => "KEYSTORE_ALIAS",
            EnvVar::KeystorePass => "KEYSTORE_PASS",
            EnvVar::JavaHome => "JAVA_HOME",
        }
    }

    /// What to tell the user when the variable is missing.
    pub fn help(self) -> &'static str {
        match self {
            EnvVar::BuildToolsDir => {
                "Example: BUILD_TOOLS_DIR=/home/user/Android/Sdk/build-tools/29.0.0/"
            }
            EnvVar::PlatformDir => {
                "Example: PLATFORM_DIR=/home/user/Android/Sdk/platforms/android-29/"
            }
            EnvVar::KeystoreFile => concat!(
                "No keystore file was supplied through the KEYSTORE_FILE environment variable.\n",
                "For example, if you've generated a debug.keystore file using ",
                "`elm_apk_bundler create-debug-key` then use:\n",
                "KEYSTORE_FILE=debug.keystore elm_apk_bundler ...\n",
                "If you don't have a keystore file yet, you can generate one using:\n",
                "elm_apk_bundler create-debug-key (for a debug key)\n",
                "or\n",
                "elm_apk_bundler create-key (for a normal key)"
            ),
            EnvVar::KeystoreAlias => {
                "Non-debug keystores need the alias of the signing key, e.g. KEYSTORE_ALIAS=release"
            }
            EnvVar::KeystorePass => {
                "Non-debug keystores need the keystore and key passphrase in KEYSTORE_PASS"
            }
            EnvVar::JavaHome => "Example: JAVA_HOME=/usr/lib/jvm/java-8-openjdk/",
        }
    }
}

/// Snapshot of the environment for one command invocation.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    values: Vec<(EnvVar, OsString)>,
}

impl EnvConfig {
    /// Read every known variable from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Read every known variable through `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let values = EnvVar::ALL
            .iter()
            .filter_map(|&var| {
                lookup(var.name())
                    .filter(|value| !value.is_empty())
                    .map(|value| (var, value))
            })
            .collect();
        Self { values }
    }

    /// Raw value of `var`, if set.
    pub fn get(&self, var: EnvVar) -> Option<&OsString> {
        self.values
            .iter()
            .find(|(key, _)| *key == var)
            .map(|(_, value)| value)
    }

    /// Value of `var` as a path, or a configuration error with remediation.
    pub fn require_path(&self, var: EnvVar) -> Result<PathBuf> {
        self.get(var).map(PathBuf::from).ok_or(Error::MissingEnv {
            var: var.name(),
            help: var.help(),
        })
    }

    /// Value of `var` as UTF-8 text, or a configuration error with remediation.
    ///
    /// Values that are not valid UTF-8 are rejected rather than altered.
    pub fn require_string(&self, var: EnvVar) -> Result<String> {
        let value = self.get(var).ok_or(Error::MissingEnv {
            var: var.name(),
            help: var.help(),
        })?;
        value
            .to_str()
            .map(str::to_string)
            .ok_or(Error::NotUnicode { var: var.name() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> EnvConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| map.get(name).map(OsString::from))
    }

    #[test]
    fn reads_known_variables() {
        let cfg = config(&[("BUILD_TOOLS_DIR", "/sdk/bt"), ("UNRELATED", "x")]);
        assert_eq!(
            cfg.require_path(EnvVar::BuildToolsDir).unwrap(),
            PathBuf::from("/sdk/bt")
        );
        assert!(cfg.get(EnvVar::PlatformDir).is_none());
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let cfg = config(&[("KEYSTORE_ALIAS", "")]);
        let err = cfg.require_string(EnvVar::KeystoreAlias).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("KEYSTORE_ALIAS"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b's', 0xff, b'x']);
        let cfg = EnvConfig::from_lookup(|name| (name == "KEYSTORE_PASS").then(|| raw.clone()));

        let err = cfg.require_string(EnvVar::KeystorePass).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(matches!(err, Error::NotUnicode { var: "KEYSTORE_PASS" }));
    }

    #[test]
    fn keystore_help_mentions_key_commands() {
        let help = EnvVar::KeystoreFile.help();
        assert!(help.contains("create-debug-key"));
        assert!(help.contains("create-key"));
    }
}
