//! Export configuration
//!
//! Where temporary references are staged and where saved cards land.

use std::path::{Path, PathBuf};

/// Directories used by [`crate::export::DownloadDirHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Destination for saved contact files
    pub download_dir: PathBuf,
    /// Scratch directory for temporary references
    pub staging_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            staging_dir: std::env::temp_dir().join("cardview"),
        }
    }
}

impl ExportConfig {
    pub fn with_download_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.download_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_staging_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.staging_dir = dir.as_ref().to_path_buf();
        self
    }
}

/// Platform download directory, falling back to home, then `.`
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
