//! Elm APK bundler - build, sign, install and launch Elm Android apps.
//!
//! Runs the Android SDK tools one at a time and exits non-zero at the first
//! failure.

use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match elm_apk_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
