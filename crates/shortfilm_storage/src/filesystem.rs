//! JSON checkpoint on the local filesystem.

use crate::{CheckpointStore, MediaLayout};
use shortfilm_core::RunState;
use shortfilm_error::{ShortFilmResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Checkpoint stored as `<output_root>/state.json`.
///
/// Writes go to a uniquely named temp file that is then renamed over the
/// document, so a crash mid-write leaves the previous checkpoint intact.
#[derive(Debug, Clone)]
pub struct FileCheckpointStore {
    root: PathBuf,
    path: PathBuf,
}

impl FileCheckpointStore {
    /// Create a store for the run rooted at `output_root`.
    ///
    /// Nothing is touched on disk until the first save.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        let root = output_root.into();
        let path = MediaLayout::new(&root).state();
        Self { root, path }
    }

    /// Whether a checkpoint document exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl CheckpointStore for FileCheckpointStore {
    #[tracing::instrument(skip(self, state), fields(path = %self.path.display(), clips = state.clips().len()))]
    fn save(&self, state: &RunState) -> ShortFilmResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.root.display(),
                e
            )))
        })?;

        let contents = serde_json::to_string_pretty(state).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "serialize run state: {}",
                e
            )))
        })?;

        let temp_path = self
            .root
            .join(format!("{}.{}.tmp", MediaLayout::STATE_FILE, Uuid::new_v4()));
        std::fs::write(&temp_path, contents).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!("Saved checkpoint");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ShortFilmResult<Option<RunState>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No checkpoint found");
                return Ok(None);
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let state: RunState = serde_json::from_str(&contents).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::info!(
            clips = state.clips().len(),
            completed = state.completed(),
            "Loaded checkpoint"
        );
        Ok(Some(state))
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> ShortFilmResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Cleared checkpoint");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRemove(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()),
        }
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
