use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a vbgen.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct VbgenToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl VbgenToml {
    /// Open and parse a vbgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vbgen.toml");
        fs::write(&path, "[generator]\nmax_arity = 6\n").unwrap();

        let toml = VbgenToml::open(&path).unwrap();
        assert_eq!(toml.path(), path);
        assert!(toml.content().contains("max_arity = 6"));
        assert_eq!(toml.into_manifest().generator.max_arity, 6);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = VbgenToml::open(temp.path().join("vbgen.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_validates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[generator]\nmax_arity = 0\n").unwrap();

        let err = VbgenToml::open(&path).unwrap_err();
        assert_eq!(err.to_string(), "max_arity must be at least 2, got 0");
    }
}
