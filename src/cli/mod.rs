//! Command line interface.
//!
//! Parses the single command argument and dispatches it. Project commands
//! resolve a fresh [`BuildContext`] from the current directory and
//! environment each time they need one.

mod args;

pub use args::{Args, Command, usage};

use crate::{
    apk::{BuildContext, Bundler, EnvConfig, builder::elm, deploy, signing},
    error::{ErrorExt, Result},
};
use std::path::Path;

/// Main CLI entry point
///
/// Returns the process exit code. Argument errors print usage and yield 1.
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::debug!("argument error: {}", e);
            eprintln!("{}", usage());
            return Ok(1);
        }
    };

    let project_root =
        std::env::current_dir().fs_context("reading current directory", ".")?;
    execute(args.command, &project_root).await?;
    Ok(0)
}

/// Execute `command` for the project in `project_root`.
pub async fn execute(command: Command, project_root: &Path) -> Result<()> {
    match command {
        Command::CreateDebugKey => {
            signing::create_debug_identity(project_root).await?;
        }
        Command::CreateKey => {
            signing::create_identity()?;
        }
        Command::Build => {
            let apk = Bundler::new(load_context(project_root)?).build().await?;
            println!("Created {}", apk.display());
        }
        Command::Install => {
            deploy::install(&load_context(project_root)?).await?;
        }
        Command::InstallRun => {
            // Each half resolves the project on its own, as the separate
            // commands do.
            deploy::install(&load_context(project_root)?).await?;
            deploy::run(&load_context(project_root)?).await?;
        }
        Command::ElmLive => {
            elm::live(project_root).await?;
        }
    }
    Ok(())
}

fn load_context(project_root: &Path) -> Result<BuildContext> {
    BuildContext::from_env(project_root, &EnvConfig::from_env())
}
