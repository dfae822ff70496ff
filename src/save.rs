// SPDX-License-Identifier: MIT

//! Saving rendered image bytes to a user-chosen path. Bytes are written
//! verbatim; the extension always mirrors the rendered encoding.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::graphviz::OutputFormat;

/// Default file name offered in the save dialog.
pub fn suggested_file_name(format: OutputFormat) -> String {
    format!("hasse.{}", format.extension())
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps an existing matching extension (case-insensitive); otherwise
/// replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

/// Write the encoded bytes byte-for-byte to `path`.
///
/// On failure the caller keeps the in-memory bytes, so the save can be
/// retried without regenerating the diagram.
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|err| Error::SaveFailure {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::{ensure_extension, suggested_file_name, write_image};
    use crate::error::Error;
    use crate::graphviz::OutputFormat;

    #[test]
    fn suggested_file_name_uses_lowercase_extension() {
        assert_eq!(suggested_file_name(OutputFormat::Png), "hasse.png");
        assert_eq!(suggested_file_name(OutputFormat::Jpg), "hasse.jpg");
        assert_eq!(suggested_file_name(OutputFormat::Svg), "hasse.svg");
    }

    // Should leave an existing matching extension untouched, ignoring case.
    #[test]
    fn ensure_extension_preserves_matching_extension_case_insensitive() {
        let path = PathBuf::from("/tmp/diagram.PNG");
        let result = ensure_extension(path.clone(), "png");

        assert_eq!(result, path);
    }

    // Should replace an unmatched extension with the requested one.
    #[test]
    fn ensure_extension_replaces_when_different() {
        let path = PathBuf::from("diagram.txt");
        let result = ensure_extension(path, "svg");

        assert_eq!(result.extension().and_then(|e| e.to_str()), Some("svg"));
    }

    #[test]
    fn ensure_extension_appends_when_missing() {
        let path = PathBuf::from("diagram");
        let result = ensure_extension(path, "jpg");

        assert_eq!(result, PathBuf::from("diagram.jpg"));
    }

    #[test]
    fn write_image_stores_bytes_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hasse.png");
        let bytes = [0x89u8, b'P', b'N', b'G', 0x00, 0xFF];

        write_image(&path, &bytes).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    // A write into a missing directory must surface as SaveFailure carrying
    // the attempted path.
    #[test]
    fn write_into_missing_directory_is_save_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("hasse.png");

        let result = write_image(&path, b"data");

        match result {
            Err(Error::SaveFailure { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected SaveFailure, got {other:?}"),
        }
    }
}
