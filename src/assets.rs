//! Bundled asset resolution
//!
//! The host platform analog here is a plain directory: an [`AssetDir`] maps
//! an asset name like `"model.tflite"` to a path under its root. Names are
//! relative, may use forward slashes for subdirectories, and must not escape
//! the root.

use std::path::{Component, Path, PathBuf};

use crate::error::{LoadError, Result};

/// Directory-rooted resolver for bundled, read-only assets.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Create a resolver rooted at `root`. The root is not checked for
    /// existence here; resolution of any name will fail if it is missing.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Root directory this resolver serves from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an asset name to a filesystem path.
    ///
    /// # Errors
    ///
    /// - [`LoadError::InvalidAssetName`] for empty, absolute, or
    ///   parent-traversing names
    /// - [`LoadError::AssetNotFound`] when the resolved path is not an
    ///   existing regular file
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let rel = Path::new(name);
        let valid = !name.is_empty()
            && rel.is_relative()
            && rel
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(LoadError::InvalidAssetName {
                name: name.to_string(),
            });
        }

        let path = self.root.join(rel);
        if !path.is_file() {
            return Err(LoadError::AssetNotFound {
                name: name.to_string(),
                root: self.root.clone(),
            });
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn asset_dir_with(name: &str, bytes: &[u8]) -> (tempfile::TempDir, AssetDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(&path, bytes).expect("write asset");
        let assets = AssetDir::new(dir.path());
        (dir, assets)
    }

    #[test]
    fn test_resolve_existing_asset() {
        let (_dir, assets) = asset_dir_with("model.tflite", b"bytes");
        let path = assets.resolve("model.tflite").expect("resolve");
        assert!(path.ends_with("model.tflite"));
        assert!(path.is_file());
    }

    #[test]
    fn test_resolve_nested_asset() {
        let (_dir, assets) = asset_dir_with("models/v2/model.tflite", b"bytes");
        let path = assets.resolve("models/v2/model.tflite").expect("resolve");
        assert!(path.is_file());
    }

    #[test]
    fn test_missing_asset_not_found() {
        let (_dir, assets) = asset_dir_with("other.bin", b"bytes");
        let err = assets.resolve("model.tflite").unwrap_err();
        assert!(matches!(err, LoadError::AssetNotFound { .. }));
    }

    #[test]
    fn test_empty_name_invalid() {
        let (_dir, assets) = asset_dir_with("model.tflite", b"bytes");
        let err = assets.resolve("").unwrap_err();
        assert!(matches!(err, LoadError::InvalidAssetName { .. }));
    }

    #[test]
    fn test_parent_traversal_invalid() {
        let (_dir, assets) = asset_dir_with("model.tflite", b"bytes");
        let err = assets.resolve("../model.tflite").unwrap_err();
        assert!(matches!(err, LoadError::InvalidAssetName { .. }));
    }

    #[test]
    fn test_absolute_name_invalid() {
        let (_dir, assets) = asset_dir_with("model.tflite", b"bytes");
        let err = assets.resolve("/etc/passwd").unwrap_err();
        assert!(matches!(err, LoadError::InvalidAssetName { .. }));
    }

    #[test]
    fn test_directory_is_not_an_asset() {
        let (_dir, assets) = asset_dir_with("models/model.tflite", b"bytes");
        let err = assets.resolve("models").unwrap_err();
        assert!(matches!(err, LoadError::AssetNotFound { .. }));
    }
}
