use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::{anyhow, Context};
use jobboard_draft_contracts::DraftPersistence;
use jobboard_models::draft::DraftState;
use jobboard_utils::trace_instrument;

/// Keeps the draft in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftPersistence {
    slot: Arc<Mutex<Option<DraftState>>>,
}

impl MemoryDraftPersistence {
    fn slot(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Option<DraftState>>> {
        self.slot.lock().map_err(|_| anyhow!("Draft slot is poisoned"))
    }
}

impl DraftPersistence for MemoryDraftPersistence {
    fn read(&self) -> anyhow::Result<Option<DraftState>> {
        Ok(self.slot()?.clone())
    }

    fn write(&self, state: &DraftState) -> anyhow::Result<()> {
        *self.slot()? = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Keeps the draft as a JSON document on disk.
///
/// Writes go to a temporary file next to the target which is then renamed
/// over it, so readers never observe a partially written document.
#[derive(Debug, Clone)]
pub struct FileDraftPersistence {
    path: PathBuf,
}

impl FileDraftPersistence {
    pub const DEFAULT_FILE_NAME: &'static str = "job-form-store.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(Self::DEFAULT_FILE_NAME);
        self.path
            .with_file_name(format!(".{file_name}.tmp.{}", std::process::id()))
    }
}

impl DraftPersistence for FileDraftPersistence {
    #[trace_instrument(skip(self), fields(path = %self.path.display()))]
    fn read(&self) -> anyhow::Result<Option<DraftState>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read draft from {}", self.path.display())
                })
            }
        };

        serde_json::from_slice(&content)
            .map(Some)
            .with_context(|| format!("Failed to decode draft in {}", self.path.display()))
    }

    #[trace_instrument(skip(self, state), fields(path = %self.path.display()))]
    fn write(&self, state: &DraftState) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let tmp = self.tmp_path();
        let result = write_and_rename(&tmp, &self.path, state);
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    #[trace_instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err)
                .with_context(|| format!("Failed to remove {}", self.path.display())),
            _ => Ok(()),
        }
    }
}

fn write_and_rename(tmp: &Path, path: &Path, state: &DraftState) -> anyhow::Result<()> {
    {
        let mut file = fs::File::create(tmp)
            .with_context(|| format!("Failed to create {}", tmp.display()))?;
        serde_json::to_writer_pretty(&mut file, state).context("Failed to encode draft")?;
        file.write_all(b"\n")?;
        file.sync_all()?;
    }

    fs::rename(tmp, path).with_context(|| format!("Failed to move draft to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use jobboard_models::draft::DraftForm;
    use pretty_assertions::assert_eq;

    use super::*;

    fn state() -> DraftState {
        DraftState {
            form: DraftForm {
                job_title: "UX Designer".into(),
                contact_phone: "+1-5551234567".into(),
                ..Default::default()
            },
            dark_mode: true,
            ..Default::default()
        }
    }

    #[test]
    fn file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let sut = FileDraftPersistence::new(dir.path().join("draft.json"));

        assert_eq!(sut.read().unwrap(), None);
        sut.clear().unwrap();
    }

    #[test]
    fn file_write_read_clear() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let sut = FileDraftPersistence::new(dir.path().join("nested/draft.json"));

        // Act
        sut.write(&state()).unwrap();
        let stored = sut.read().unwrap();
        sut.clear().unwrap();

        // Assert
        assert_eq!(stored, Some(state()));
        assert_eq!(sut.read().unwrap(), None);
        assert_eq!(fs::read_dir(dir.path().join("nested")).unwrap().count(), 0);
    }

    #[test]
    fn file_uses_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileDraftPersistence::DEFAULT_FILE_NAME);
        let sut = FileDraftPersistence::new(path);

        sut.write(&state()).unwrap();

        let json: serde_json::Value =
            serde_json::from_slice(&fs::read(sut.path()).unwrap()).unwrap();
        assert_eq!(json["formData"]["jobTitle"], "UX Designer");
        assert_eq!(json["darkMode"], true);
        assert_eq!(json["submitSuccess"], false);
    }

    #[test]
    fn file_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileDraftPersistence::new(path).read();

        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with("Failed to decode draft"));
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.json");
        fs::create_dir(&path).unwrap();
        let sut = FileDraftPersistence::new(&path);

        // Act
        let result = sut.write(&state());

        // Assert
        assert!(result.is_err());
        let entries = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect::<Vec<_>>();
        assert_eq!(entries, ["draft.json"]);
    }

    #[test]
    fn memory_clones_share_state() {
        let sut = MemoryDraftPersistence::default();
        let other = sut.clone();

        sut.write(&state()).unwrap();

        assert_eq!(other.read().unwrap(), Some(state()));
        other.clear().unwrap();
        assert_eq!(sut.read().unwrap(), None);
    }
}
