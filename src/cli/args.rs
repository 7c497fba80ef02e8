//! Command line argument parsing.
//!
//! The interface is a single positional command name and nothing else:
//! clap's help and version flags are disabled.

use clap::{Parser, ValueEnum};
use std::ffi::OsString;

/// Build, sign, install and launch an Elm Android application
#[derive(Parser, Debug)]
#[command(
    name = "elm_apk_bundler",
    about = "Build, sign, install and launch an Elm Android application",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// What to do
    #[arg(value_enum)]
    pub command: Command,
}

/// Commands accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate debug.keystore with the well-known debug identity
    CreateDebugKey,
    /// Generate a release keystore
    CreateKey,
    /// Compile Elm and Java sources and produce a signed APK
    Build,
    /// Install the signed APK on the connected device
    Install,
    /// Install the signed APK, then launch it
    #[value(name = "install+run")]
    InstallRun,
    /// Run the elm-live development server
    ElmLive,
}

impl Args {
    /// Parse the process arguments.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parse an explicit argument list; the first item is the binary name.
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

/// One-line usage text listing every command.
pub fn usage() -> String {
    let names: Vec<String> = Command::value_variants()
        .iter()
        .filter_map(|c| c.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect();
    format!("usage: elm_apk_bundler {}", names.join("|"))
}
