//! Filesystem export host
//!
//! Temporary references are staged files; saving copies the staged file into
//! the download directory the way a browser download would.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use ulid::Ulid;

use super::ExportHost;
use crate::config::ExportConfig;
use crate::error::{CardError, CardResult};

/// Highest numbered suffix tried before giving up on a free file name
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// A payload staged on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub media_type: String,
}

/// Export host that saves into a download directory
#[derive(Debug)]
pub struct DownloadDirHost {
    config: ExportConfig,
    last_saved: Mutex<Option<PathBuf>>,
}

impl DownloadDirHost {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            last_saved: Mutex::new(None),
        }
    }

    /// Destination of the most recent successful save
    pub fn last_saved(&self) -> Option<PathBuf> {
        self.last_saved.lock().clone()
    }

    /// Create the first free destination for `file_name`, numbering on clashes.
    fn create_destination(&self, file_name: &str) -> io::Result<(PathBuf, File)> {
        for n in 0..=MAX_NAME_ATTEMPTS {
            let path = self.config.download_dir.join(numbered_file_name(file_name, n));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free name for {} in {}", file_name, self.config.download_dir.display()),
        ))
    }
}

impl ExportHost for DownloadDirHost {
    type Handle = StagedFile;

    fn create_reference(&self, payload: &[u8], media_type: &str) -> CardResult<StagedFile> {
        let staging_dir = &self.config.staging_dir;
        fs::create_dir_all(staging_dir)
            .map_err(|e| CardError::CreateReference(format!("{}: {}", staging_dir.display(), e)))?;

        let path = staging_dir.join(format!("{}.blob", Ulid::new()));
        fs::write(&path, payload)
            .map_err(|e| CardError::CreateReference(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), media_type, bytes = payload.len(), "Staged payload");
        Ok(StagedFile {
            path,
            media_type: media_type.to_string(),
        })
    }

    fn trigger_save(&self, handle: &StagedFile, file_name: &str) -> CardResult<()> {
        let save = || -> io::Result<PathBuf> {
            fs::create_dir_all(&self.config.download_dir)?;
            let data = fs::read(&handle.path)?;
            let (path, mut file) = self.create_destination(file_name)?;
            if let Err(e) = file.write_all(&data).and_then(|_| file.sync_all()) {
                drop(file);
                discard_partial(&path);
                return Err(e);
            }
            Ok(path)
        };

        let path = save().map_err(|e| CardError::TriggerSave(format!("{}: {}", file_name, e)))?;
        tracing::info!(path = %path.display(), media_type = %handle.media_type, "Saved contact");
        *self.last_saved.lock() = Some(path);
        Ok(())
    }

    fn release(&self, handle: StagedFile) -> CardResult<()> {
        fs::remove_file(&handle.path)
            .map_err(|e| CardError::ReleaseReference(format!("{}: {}", handle.path.display(), e)))?;
        tracing::debug!(path = %handle.path.display(), "Released staged payload");
        Ok(())
    }
}

/// Remove a partially written destination, logging when that fails too.
fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!("Failed to remove partial file {}: {}", path.display(), e);
    }
}

/// Browser-style numbered variant of a file name.
///
/// `0` yields the name unchanged; `n` inserts ` (n)` before the extension.
pub fn numbered_file_name(file_name: &str, n: u32) -> String {
    if n == 0 {
        return file_name.to_string();
    }
    let path = Path::new(file_name);
    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|e| e.to_str()),
    ) {
        (Some(stem), Some(ext)) => format!("{} ({}).{}", stem, n, ext),
        _ => format!("{} ({})", file_name, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_file_name() {
        assert_eq!(numbered_file_name("contact.vcf", 0), "contact.vcf");
        assert_eq!(numbered_file_name("contact.vcf", 1), "contact (1).vcf");
        assert_eq!(numbered_file_name("contact.vcf", 12), "contact (12).vcf");
        assert_eq!(numbered_file_name("README", 2), "README (2)");
    }

    #[test]
    fn test_discard_partial_removes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("contact.vcf");
        fs::write(&path, "BEGIN:VC").unwrap();

        discard_partial(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_discard_partial_missing_file_is_logged_not_fatal() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("never-written.vcf");

        discard_partial(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_last_saved_starts_empty() {
        let host = DownloadDirHost::new(ExportConfig::default());
        assert!(host.last_saved().is_none());
    }
}
