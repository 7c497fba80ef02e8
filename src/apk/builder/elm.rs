//! Elm front-end compilation.

use super::steps::{self, ELM_PROJECT};
use crate::error::{Error, Result};
use std::path::Path;

/// Compile `src/Main.elm` into `assets/main.js`.
///
/// `elm.json` is checked first so a missing project gives a clear message
/// instead of elm's own.
pub async fn compile(project_root: &Path) -> Result<()> {
    let descriptor = project_root.join(ELM_PROJECT);
    if !descriptor.exists() {
        return Err(Error::MissingProjectFile {
            path: descriptor,
            message: "No elm.json file in the current directory. Please run `elm init`.",
        });
    }

    steps::elm_make().run(project_root).await
}

/// Run the `elm-live` development server until it exits.
pub async fn live(project_root: &Path) -> Result<()> {
    steps::elm_live().run(project_root).await
}
