//! The fixed command lists of the build.
//!
//! Paths are relative to the project root, which is every step's working
//! directory.

use super::process::Step;
use crate::{
    apk::settings::{BuildContext, EnvVar, MANIFEST_FILE},
    error::Result,
};
use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Working subdirectories, created before anything runs
pub const BUILD_DIRS: [&str; 3] = ["gen", "obj", "apk"];

/// Elm entry point
pub const ELM_MAIN: &str = "src/Main.elm";

/// Compiled Elm output loaded by the WebView
pub const ELM_OUTPUT: &str = "assets/main.js";

/// Project descriptor `elm make` refuses to run without
pub const ELM_PROJECT: &str = "elm.json";

fn build_path(parts: &[&str]) -> PathBuf {
    let mut path = PathBuf::from("build");
    path.extend(parts);
    path
}

fn with_trailing_separator(path: impl AsRef<Path>) -> OsString {
    let mut s = path.as_ref().as_os_str().to_owned();
    s.push(MAIN_SEPARATOR.to_string());
    s
}

fn prefixed(prefix: &str, path: impl AsRef<Path>) -> OsString {
    let mut s = OsString::from(prefix);
    s.push(path.as_ref().as_os_str());
    s
}

/// `elm make` producing the JavaScript bundle.
pub fn elm_make() -> Step {
    Step::new("elm make", "elm").args(["make", ELM_MAIN, "--output", ELM_OUTPUT])
}

/// `elm-live` development server recompiling into the assets directory.
pub fn elm_live() -> Step {
    Step::new("elm-live", "elm-live").args([
        ELM_MAIN,
        "-d",
        "assets",
        "--",
        "--output=assets/main.js",
    ])
}

/// The six package-assembly steps, in execution order.
///
/// Fails before returning anything if `JAVA_HOME` is not configured, so no
/// step runs with an incomplete command line.
pub fn package_steps(ctx: &BuildContext) -> Result<Vec<Step>> {
    let tools = ctx.toolchain();
    let android_jar = tools.android_jar();
    let java_home = ctx.env().require_path(EnvVar::JavaHome)?;
    let rt_jar = java_home.join("jre").join("lib").join("rt.jar");

    let unsigned = ctx.unsigned_apk();
    let aligned = ctx.aligned_apk();
    let signing = ctx.signing();
    let pass = format!("pass:{}", signing.password);

    let r_java = build_path(&["gen"]).join(ctx.package_dir()).join("R.java");
    let main_activity = Path::new("java")
        .join(ctx.package_dir())
        .join("MainActivity.java");

    Ok(vec![
        Step::new("aapt (generate R.java)", tools.aapt())
            .args(["package", "-f", "-m", "-J"])
            .arg(with_trailing_separator(build_path(&["gen"])))
            .args(["-A", "assets", "-S", "res", "-M", MANIFEST_FILE, "-I"])
            .arg(&android_jar),
        Step::new("javac", "javac")
            .args(["-source", "1.7", "-target", "1.7", "-bootclasspath"])
            .arg(&rt_jar)
            .arg("-classpath")
            .arg(&android_jar)
            .arg("-d")
            .arg(build_path(&["obj"]))
            .arg(&r_java)
            .arg(&main_activity),
        Step::new("dx", tools.dx())
            .arg("--dex")
            .arg(prefixed("--output=", build_path(&["apk", "classes.dex"])))
            .arg(build_path(&["obj"])),
        Step::new("aapt (package)", tools.aapt())
            .args(["package", "-f", "-M", MANIFEST_FILE, "-A", "assets", "-S"])
            .arg(with_trailing_separator("res"))
            .arg("-I")
            .arg(&android_jar)
            .arg("-F")
            .arg(&unsigned)
            .arg(build_path(&["apk"])),
        Step::new("zipalign", tools.zipalign())
            .args(["-f", "-p", "4"])
            .arg(&unsigned)
            .arg(&aligned),
        Step::new("apksigner", tools.apksigner())
            .args(["sign", "--ks"])
            .arg(&signing.keystore)
            .arg("--ks-key-alias")
            .arg(&signing.alias)
            .arg("--ks-pass")
            .arg(&pass)
            .arg("--key-pass")
            .arg(&pass)
            .arg("--out")
            .arg(ctx.signed_apk())
            .arg(&aligned),
    ])
}

/// Working directories under `build/`.
pub fn build_dirs() -> impl Iterator<Item = PathBuf> {
    BUILD_DIRS.into_iter().map(|d| build_path(&[d]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apk::{
        settings::{EnvConfig, Manifest, Toolchain},
        signing::SigningIdentity,
    };
    use crate::error::ErrorKind;

    fn ctx(java_home: Option<&str>) -> BuildContext {
        let java_home = java_home.map(OsString::from);
        let env = EnvConfig::from_lookup(move |name| match name {
            "JAVA_HOME" => java_home.clone(),
            _ => None,
        });
        BuildContext::new(
            Path::new("/project"),
            Toolchain {
                build_tools_dir: PathBuf::from("/bt"),
                platform_dir: PathBuf::from("/platform"),
            },
            env,
            Manifest {
                package: "com.example.app".into(),
                label: "My App".into(),
            },
            SigningIdentity {
                keystore: PathBuf::from("release.jks"),
                alias: "upload".into(),
                password: "pw".into(),
            },
        )
        .unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn package_steps_have_fixed_command_lines() {
        let steps = package_steps(&ctx(Some("/jdk"))).unwrap();
        let lines: Vec<String> = steps.iter().map(Step::command_line).collect();

        assert_eq!(
            lines,
            [
                "/bt/aapt package -f -m -J build/gen/ -A assets -S res -M AndroidManifest.xml \
                 -I /platform/android.jar",
                "javac -source 1.7 -target 1.7 -bootclasspath /jdk/jre/lib/rt.jar \
                 -classpath /platform/android.jar -d build/obj \
                 build/gen/com/example/app/R.java java/com/example/app/MainActivity.java",
                "/bt/dx --dex --output=build/apk/classes.dex build/obj",
                "/bt/aapt package -f -M AndroidManifest.xml -A assets -S res/ \
                 -I /platform/android.jar -F build/My-App.unsigned.apk build/apk",
                "/bt/zipalign -f -p 4 build/My-App.unsigned.apk build/My-App.aligned.apk",
                "/bt/apksigner sign --ks release.jks --ks-key-alias upload --ks-pass pass:pw \
                 --key-pass pass:pw --out build/My-App.apk build/My-App.aligned.apk",
            ]
        );
    }

    #[test]
    fn package_steps_need_java_home() {
        let err = package_steps(&ctx(None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("JAVA_HOME"));
    }

    #[test]
    fn elm_commands() {
        assert_eq!(
            elm_make().command_line(),
            "elm make src/Main.elm --output assets/main.js"
        );
        assert_eq!(
            elm_live().command_line(),
            "elm-live src/Main.elm -d assets -- --output=assets/main.js"
        );
    }
}
