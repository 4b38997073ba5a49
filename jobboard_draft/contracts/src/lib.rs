use jobboard_models::draft::{DraftFormPatch, DraftState};

/// Where the draft of the "post a job" form is kept between sessions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DraftPersistence: Send + Sync + 'static {
    /// Return the stored state, if any.
    ///
    /// Fails if something is stored but cannot be decoded.
    fn read(&self) -> anyhow::Result<Option<DraftState>>;

    /// Replace the stored state.
    fn write(&self, state: &DraftState) -> anyhow::Result<()>;

    /// Remove the stored state.
    fn clear(&self) -> anyhow::Result<()>;
}

/// The persisted state of the "post a job" form.
///
/// Every mutation is written through to the persistence port before it
/// returns. The store never validates the form content.
pub trait DraftStore {
    fn get(&self) -> &DraftState;

    /// Merge the updated fields of `patch` into the form.
    fn set(&mut self, patch: DraftFormPatch) -> anyhow::Result<()>;

    /// Restore the default form and clear the submission flags. The dark
    /// mode preference is kept.
    fn reset(&mut self) -> anyhow::Result<()>;

    /// Flip the dark mode preference and return the new value.
    fn toggle_dark_mode(&mut self) -> anyhow::Result<bool>;

    fn set_is_submitting(&mut self, is_submitting: bool) -> anyhow::Result<()>;

    fn set_submit_success(&mut self, submit_success: bool) -> anyhow::Result<()>;

    /// Drop everything, including the persisted copy and the dark mode
    /// preference.
    fn forget(&mut self) -> anyhow::Result<()>;
}

#[cfg(feature = "mock")]
impl MockDraftPersistence {
    pub fn with_read(mut self, result: anyhow::Result<Option<DraftState>>) -> Self {
        self.expect_read().once().return_once(|| result);
        self
    }

    pub fn with_write(mut self, state: DraftState, ok: bool) -> Self {
        self.expect_write()
            .once()
            .with(mockall::predicate::eq(state))
            .return_once(move |_| {
                if ok {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("disk full"))
                }
            });
        self
    }

    pub fn with_clear(mut self, ok: bool) -> Self {
        self.expect_clear().once().return_once(move || {
            if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("permission denied"))
            }
        });
        self
    }
}
