//! One-shot storage for composed PDFs
//!
//! Artifacts are stored under generated `<uuid>.pdf` names and can be taken
//! exactly once: taking an artifact returns its bytes and deletes it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

const ARTIFACT_EXTENSION: &str = ".pdf";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid artifact name")]
    InvalidName,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Directory of artifacts awaiting download
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Open the store, creating its directory if needed
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `bytes` under a freshly generated name and return the name.
    ///
    /// The file only appears under its final name once fully written.
    pub async fn save(&self, bytes: Vec<u8>) -> Result<String> {
        let name = generate_name();
        self.write_artifact(&name, bytes).await?;
        Ok(name)
    }

    async fn write_artifact(&self, name: &str, bytes: Vec<u8>) -> Result<()> {
        let partial = self.dir.join(format!(".{}.partial", name));
        let written = match tokio::fs::write(&partial, bytes).await {
            Ok(()) => tokio::fs::rename(&partial, self.dir.join(name)).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::warn!("Failed to delete partial artifact {}: {}", name, cleanup);
                }
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Take an artifact: return its bytes and delete it.
    ///
    /// Returns `Ok(None)` when no artifact has this name, including when a
    /// concurrent caller already took it.
    pub async fn take(&self, name: &str) -> Result<Option<Vec<u8>>> {
        validate_name(name)?;

        let path = self.dir.join(name);
        let claimed = self
            .dir
            .join(format!(".{}.{}.claimed", name, Uuid::new_v4().simple()));

        // Rename is atomic, so at most one caller claims the file
        match tokio::fs::rename(&path, &claimed).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        let read = tokio::fs::read(&claimed).await;
        if let Err(e) = tokio::fs::remove_file(&claimed).await {
            tracing::warn!("Failed to delete taken artifact {}: {}", name, e);
        }
        Ok(Some(read?))
    }
}

/// Generate a collision-resistant artifact name
pub fn generate_name() -> String {
    format!("{}{}", Uuid::new_v4(), ARTIFACT_EXTENSION)
}

/// Accept only names of the shape produced by [`generate_name`].
pub fn validate_name(name: &str) -> Result<()> {
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(StoreError::InvalidName);
    }
    let stem = name
        .strip_suffix(ARTIFACT_EXTENSION)
        .ok_or(StoreError::InvalidName)?;
    Uuid::parse_str(stem).map_err(|_| StoreError::InvalidName)?;
    Ok(())
}
