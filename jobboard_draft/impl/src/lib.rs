use anyhow::Context;
use jobboard_draft_contracts::{DraftPersistence, DraftStore};
use jobboard_models::draft::{DraftForm, DraftFormPatch, DraftState};
use jobboard_utils::patch::Patch;
use tracing::{trace, warn};

pub use crate::persistence::{FileDraftPersistence, MemoryDraftPersistence};

mod persistence;

#[derive(Debug)]
pub struct DraftStoreImpl<P> {
    persistence: P,
    state: DraftState,
}

impl<P: DraftPersistence> DraftStoreImpl<P> {
    /// Restores the last saved state, falling back to the defaults when
    /// nothing was saved or the saved state cannot be read.
    pub fn load(persistence: P) -> Self {
        let state = persistence
            .read()
            .unwrap_or_else(|err| {
                warn!("Discarding unreadable draft: {err:#}");
                None
            })
            .unwrap_or_default();

        Self { persistence, state }
    }

    /// Applies `f` to a copy of the state and keeps the copy only once it
    /// has been saved.
    fn update(&mut self, f: impl FnOnce(&mut DraftState)) -> anyhow::Result<()> {
        let mut state = self.state.clone();
        f(&mut state);
        trace!(?state, "Save draft");
        self.persistence
            .write(&state)
            .context("Failed to save draft")?;
        self.state = state;
        Ok(())
    }
}

impl<P: DraftPersistence> DraftStore for DraftStoreImpl<P> {
    fn get(&self) -> &DraftState {
        &self.state
    }

    fn set(&mut self, patch: DraftFormPatch) -> anyhow::Result<()> {
        self.update(|state| state.form = std::mem::take(&mut state.form).update(patch))
    }

    fn reset(&mut self) -> anyhow::Result<()> {
        self.update(|state| {
            *state = DraftState {
                form: DraftForm::default(),
                dark_mode: state.dark_mode,
                is_submitting: false,
                submit_success: false,
            }
        })
    }

    fn toggle_dark_mode(&mut self) -> anyhow::Result<bool> {
        self.update(|state| state.dark_mode = !state.dark_mode)?;
        Ok(self.state.dark_mode)
    }

    fn set_is_submitting(&mut self, is_submitting: bool) -> anyhow::Result<()> {
        self.update(|state| state.is_submitting = is_submitting)
    }

    fn set_submit_success(&mut self, submit_success: bool) -> anyhow::Result<()> {
        self.update(|state| state.submit_success = submit_success)
    }

    fn forget(&mut self) -> anyhow::Result<()> {
        self.persistence
            .clear()
            .context("Failed to remove saved draft")?;
        self.state = DraftState::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jobboard_draft_contracts::MockDraftPersistence;
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> DraftFormPatch {
        DraftFormPatch::new()
            .update_job_title("Backend Engineer")
            .update_company_name("DataSystems")
            .update_location("New York")
    }

    #[test]
    fn defaults_when_nothing_saved() {
        // Arrange
        let persistence = MemoryDraftPersistence::default();

        // Act
        let sut = DraftStoreImpl::load(persistence);

        // Assert
        assert_eq!(*sut.get(), DraftState::default());
        assert_eq!(sut.get().form.job_type, "Full-Time");
        assert_eq!(sut.get().form.salary, "Under $50K");
    }

    #[test]
    fn set_merges_and_persists() {
        // Arrange
        let persistence = MemoryDraftPersistence::default();
        let mut sut = DraftStoreImpl::load(persistence.clone());

        // Act
        sut.set(filled()).unwrap();
        sut.set(DraftFormPatch::new().update_salary("Negotiable"))
            .unwrap();

        // Assert
        let form = &sut.get().form;
        assert_eq!(form.job_title, "Backend Engineer");
        assert_eq!(form.location, "New York");
        assert_eq!(form.salary, "Negotiable");
        assert_eq!(form.job_type, "Full-Time");
        assert_eq!(persistence.read().unwrap().as_ref(), Some(sut.get()));
    }

    #[test]
    fn survives_reconstruction() {
        // Arrange
        let persistence = MemoryDraftPersistence::default();
        let mut sut = DraftStoreImpl::load(persistence.clone());
        sut.set(filled()).unwrap();
        sut.toggle_dark_mode().unwrap();
        let expected = sut.get().clone();
        drop(sut);

        // Act
        let sut = DraftStoreImpl::load(persistence);

        // Assert
        assert_eq!(*sut.get(), expected);
        assert!(sut.get().dark_mode);
    }

    #[test]
    fn reset_keeps_dark_mode() {
        // Arrange
        let mut sut = DraftStoreImpl::load(MemoryDraftPersistence::default());
        sut.set(filled()).unwrap();
        sut.toggle_dark_mode().unwrap();
        sut.set_is_submitting(true).unwrap();
        sut.set_submit_success(true).unwrap();

        // Act
        sut.reset().unwrap();

        // Assert
        assert_eq!(
            *sut.get(),
            DraftState {
                dark_mode: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn toggle_dark_mode() {
        let mut sut = DraftStoreImpl::load(MemoryDraftPersistence::default());

        assert!(sut.toggle_dark_mode().unwrap());
        assert!(!sut.toggle_dark_mode().unwrap());
    }

    #[test]
    fn forget_clears_everything() {
        // Arrange
        let persistence = MemoryDraftPersistence::default();
        let mut sut = DraftStoreImpl::load(persistence.clone());
        sut.set(filled()).unwrap();
        sut.toggle_dark_mode().unwrap();

        // Act
        sut.forget().unwrap();

        // Assert
        assert_eq!(*sut.get(), DraftState::default());
        assert_eq!(persistence.read().unwrap(), None);
    }

    #[test]
    fn unreadable_state_falls_back_to_defaults() {
        // Arrange
        let persistence =
            MockDraftPersistence::new().with_read(Err(anyhow::anyhow!("invalid json")));

        // Act
        let sut = DraftStoreImpl::load(persistence);

        // Assert
        assert_eq!(*sut.get(), DraftState::default());
    }

    #[test]
    fn write_failure_is_reported() {
        // Arrange
        let expected = DraftState {
            submit_success: true,
            ..Default::default()
        };
        let persistence = MockDraftPersistence::new()
            .with_read(Ok(None))
            .with_write(expected, false);
        let mut sut = DraftStoreImpl::load(persistence);

        // Act
        let result = sut.set_submit_success(true);

        // Assert
        assert!(result.is_err());
        assert_eq!(*sut.get(), DraftState::default());
    }

    #[test]
    fn failed_set_keeps_previous_form() {
        // Arrange
        let persistence = MockDraftPersistence::new()
            .with_read(Ok(None))
            .with_write(
                DraftState {
                    form: DraftForm {
                        job_title: "Ghost".into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                false,
            );
        let mut sut = DraftStoreImpl::load(persistence);

        // Act
        let result = sut.set(DraftFormPatch::new().update_job_title("Ghost"));

        // Assert
        assert!(result.is_err());
        assert_eq!(sut.get().form.job_title, "");
    }

    #[test]
    fn failed_forget_keeps_state() {
        // Arrange
        let expected = DraftState {
            dark_mode: true,
            ..Default::default()
        };
        let persistence = MockDraftPersistence::new()
            .with_read(Ok(Some(expected.clone())))
            .with_clear(false);
        let mut sut = DraftStoreImpl::load(persistence);

        // Act
        let result = sut.forget();

        // Assert
        assert!(result.is_err());
        assert_eq!(*sut.get(), expected);
    }
}
