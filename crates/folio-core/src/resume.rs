//! Downloadable résumé.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AssetError;

/// File name suggested for the downloaded copy.
pub const RESUME_FILE_NAME: &str = "ROHINI_C_Resume.pdf";

/// A résumé file offered for download as a byte-identical copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    source: PathBuf,
}

impl ResumeAsset {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Asset for a configured path, or `Unavailable` when none is set.
    pub fn from_config(path: Option<&Path>) -> Result<Self, AssetError> {
        path.map(Self::new).ok_or(AssetError::Unavailable)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Copies the résumé into `dir` under [`RESUME_FILE_NAME`], replacing any
    /// previous download, and returns the destination path.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, AssetError> {
        tokio::fs::create_dir_all(dir).await?;
        let dest = dir.join(RESUME_FILE_NAME);
        let bytes = tokio::fs::copy(&self.source, &dest).await?;
        info!(dest = %dest.display(), bytes, "Résumé saved");
        Ok(dest)
    }

    /// The user's download directory, falling back to home, then the
    /// working directory.
    pub fn default_download_dir() -> PathBuf {
        dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
