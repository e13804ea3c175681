use super::drafts::{Draft, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    InFlight,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Edit session is closed")]
    Closed,

    #[error("A save is already in progress")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BeginSaveError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Exclusive edit buffer for one entity.
///
/// `Open → InFlight` on save; `InFlight → Closed` on success or back to
/// `Open` on failure so the operator can retry. `cancel` discards the draft.
#[derive(Debug, Clone)]
pub struct EditSession<D: Draft> {
    draft: D,
    state: SessionState,
    existing: bool,
}

impl<D: Draft> EditSession<D> {
    /// Starts a create from an empty or partly filled draft.
    pub fn open_new(draft: D) -> Self {
        Self {
            draft,
            state: SessionState::Open,
            existing: false,
        }
    }

    /// Starts an edit from a copy of a stored entity.
    pub fn open_existing(draft: D) -> Self {
        Self {
            draft,
            state: SessionState::Open,
            existing: true,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_existing(&self) -> bool {
        self.existing
    }

    /// Changes the buffer only. Refused while a save is pending.
    pub fn edit<F>(&mut self, change: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut D),
    {
        self.ensure_open()?;
        change(&mut self.draft);
        Ok(())
    }

    /// Validates and marks the session in flight. Nothing changes on error.
    pub fn begin_save(&mut self) -> Result<D::Record, BeginSaveError> {
        self.ensure_open()?;
        let record = self.draft.validate()?;
        self.state = SessionState::InFlight;
        Ok(record)
    }

    pub fn complete(&mut self) {
        self.state = SessionState::Closed;
    }

    /// A failed save returns the session to the operator.
    pub fn reopen(&mut self) {
        if self.state == SessionState::InFlight {
            self.state = SessionState::Open;
        }
    }

    pub fn cancel(&mut self) {
        self.state = SessionState::Closed;
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::InFlight => Err(SessionError::InFlight),
            SessionState::Closed => Err(SessionError::Closed),
        }
    }
}
