//! AndroidManifest.xml reading.
//!
//! Only two values are taken from the manifest: the `package` attribute on
//! the root element and `android:label` on `<application>`.

use crate::error::{Error, Result};
use std::path::Path;

/// Manifest location relative to the project root
pub const MANIFEST_FILE: &str = "AndroidManifest.xml";

/// Namespace URI bound to the `android:` prefix
pub const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

/// Values extracted from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Application package identifier, e.g. `com.example.app`
    pub package: String,
    /// Human-readable application label
    pub label: String,
}

impl Manifest {
    /// Read the manifest from `project_root`.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE);
        let text = std::fs::read_to_string(&path).map_err(|e| Error::ManifestParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&text, &path)
    }

    /// Parse manifest text; `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let doc = roxmltree::Document::parse(text).map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let root = doc.root_element();

        let package = root
            .attribute("package")
            .ok_or_else(|| Error::MissingAttribute {
                path: path.to_path_buf(),
                element: "manifest",
                attribute: "package",
            })?;

        let label = root
            .children()
            .find(|node| node.has_tag_name("application"))
            .and_then(|application| application.attribute((ANDROID_NS, "label")))
            .ok_or_else(|| Error::MissingAttribute {
                path: path.to_path_buf(),
                element: "application",
                attribute: "android:label",
            })?;

        Ok(Self {
            package: package.to_string(),
            label: label.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.app">
    <uses-sdk android:minSdkVersion="19" />
    <application android:label="My App">
        <activity android:name=".MainActivity" />
    </application>
</manifest>
"#;

    fn parse(text: &str) -> Result<Manifest> {
        Manifest::parse(text, Path::new(MANIFEST_FILE))
    }

    #[test]
    fn extracts_package_and_label() {
        let manifest = parse(SAMPLE).unwrap();
        assert_eq!(manifest.package, "com.example.app");
        assert_eq!(manifest.label, "My App");
    }

    #[test]
    fn label_must_be_in_android_namespace() {
        let text = r#"<manifest package="a.b"><application label="x"/></manifest>"#;
        let err = parse(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
    }

    #[test]
    fn missing_package_is_reported() {
        let text = SAMPLE.replace(r#"package="com.example.app""#, "");
        let err = parse(&text).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingAttribute {
                attribute: "package",
                ..
            }
        ));
    }

    #[test]
    fn malformed_xml_is_parse_error() {
        let err = parse("<manifest package=").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn absent_file_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Manifest::load(tmp.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
