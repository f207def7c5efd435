use std::{
    fs, io,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the expected content
    Unchanged,
}

/// A generated file that has not been written yet
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read whatever is currently on disk, `None` if the file is missing.
    pub fn read_existing(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(existing) => Ok(Some(existing)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).wrap_err_with(|| format!("failed to read '{}'", self.path.display()))
            }
        }
    }

    /// Whether the file on disk matches the content exactly.
    pub fn is_up_to_date(&self) -> Result<bool> {
        Ok(self.read_existing()?.as_deref() == Some(self.content.as_str()))
    }

    /// Write the file, skipping the write when the content is identical.
    pub fn write(&self) -> Result<WriteResult> {
        if self.is_up_to_date()? {
            log::debug!("{} is unchanged", self.path.display());
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content)?;
        log::info!(
            "wrote {} ({} bytes)",
            self.path.display(),
            self.content.len()
        );
        Ok(WriteResult::Written)
    }
}
