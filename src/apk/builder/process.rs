//! External command descriptors and execution.
//!
//! A [`Step`] is an executable plus a fixed argument list. Steps are run one
//! at a time with the project root as working directory; the child inherits
//! stdout and stderr so the tool's own diagnostics reach the user untouched.

use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: &'static str,
    program: PathBuf,
    args: Vec<OsString>,
}

impl Step {
    /// New step running `program` with no arguments yet.
    pub fn new(name: &'static str, program: impl Into<PathBuf>) -> Self {
        Self {
            name,
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    /// Short name used in progress and error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Arguments passed to the executable.
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Shell-like rendering for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the step in `cwd` and wait for it to exit.
    ///
    /// A non-zero exit becomes [`Error::ToolFailed`]; an executable that
    /// does not exist becomes [`Error::ToolNotFound`].
    pub async fn run(&self, cwd: &Path) -> Result<()> {
        log::info!("Running {}...", self.name());
        log::debug!("{}", self.command_line());

        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .status()
            .await
            .map_err(|error| self.spawn_error(error))?;

        if !status.success() {
            return Err(Error::ToolFailed {
                tool: self.name().to_string(),
                status,
            });
        }

        Ok(())
    }

    fn spawn_error(&self, error: std::io::Error) -> Error {
        if error.kind() != ErrorKind::NotFound {
            return Error::CommandFailed {
                command: self.name().to_string(),
                error,
            };
        }

        let hint = if self.program.components().count() > 1 {
            format!(
                "{} does not exist; check that your SDK directories are correct.",
                self.program.display()
            )
        } else {
            format!(
                "Make sure `{}` is installed and its directory is on your PATH.",
                self.program.display()
            )
        };
        Error::ToolNotFound {
            tool: self.name().to_string(),
            hint,
        }
    }
}

/// Run `steps` in order, stopping at the first failure.
pub async fn run_all(steps: &[Step], cwd: &Path) -> Result<()> {
    for step in steps {
        step.run(cwd).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind as Kind;

    #[test]
    fn command_line_joins_program_and_args() {
        let step = Step::new("zipalign", "/bt/zipalign").args(["-f", "-p", "4"]);
        assert_eq!(step.name(), "zipalign");
        assert_eq!(step.command_line(), "/bt/zipalign -f -p 4");
        assert_eq!(step.arguments().len(), 3);
    }

    #[tokio::test]
    async fn missing_absolute_program_is_tool_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let step = Step::new("aapt", tmp.path().join("aapt"));
        let err = step.run(tmp.path()).await.unwrap_err();
        assert_eq!(err.kind(), Kind::ToolNotFound);
        assert!(err.to_string().contains("SDK directories"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_all_stops_at_first_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let marker = tmp.path().join("marker");
        let steps = [
            Step::new("ok", "/bin/sh").args(["-c", "exit 0"]),
            Step::new("fail", "/bin/sh").args(["-c", "exit 3"]),
            Step::new("touch", "/bin/sh").arg("-c").arg("touch marker"),
        ];

        let err = run_all(&steps, tmp.path()).await.unwrap_err();

        assert!(matches!(err, Error::ToolFailed { ref tool, .. } if tool == "fail"));
        assert!(!marker.exists());
    }
}
