/// Inline rename of a record's display name
///
/// The controller owns at most one `EditSession`. Starting a new one while
/// another is open commits the open one first, the same way focus loss
/// commits a text field.

use tracing::debug;

use super::collection::Collection;
use super::data::RecordId;
use crate::error::RenameError;

/// An in-flight edit of one record's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Record being edited, bound by id so removals elsewhere can't redirect it
    pub id: RecordId,
    /// Text currently in the edit field
    pub draft: String,
}

/// What happened when a session was committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Name replaced with the trimmed draft
    Renamed(String),
    /// Draft was blank; the previous name is kept
    KeptPrevious,
    /// The record was removed while the session was open
    RecordGone,
    /// There was no session to commit
    NoSession,
}

#[derive(Debug, Default)]
pub struct RenameController {
    session: Option<EditSession>,
}

impl RenameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// True if `id` is the record currently being renamed
    pub fn is_editing(&self, id: RecordId) -> bool {
        self.session.as_ref().is_some_and(|s| s.id == id)
    }

    /// Open an edit session for the record at `index`.
    ///
    /// Any session already open is committed first.
    pub fn begin(
        &mut self,
        collection: &mut Collection,
        index: usize,
    ) -> Result<&EditSession, RenameError> {
        if index >= collection.len() {
            return Err(RenameError::IndexOutOfRange {
                index,
                len: collection.len(),
            });
        }

        // The draft must see the name the open session commits
        if self.session.is_some() {
            self.commit(collection);
        }

        let record = collection.get(index).ok_or(RenameError::IndexOutOfRange {
            index,
            len: collection.len(),
        })?;
        let session = EditSession {
            id: record.id,
            draft: record.name.clone(),
        };

        debug!(id = %session.id, index, "rename started");
        Ok(&*self.session.insert(session))
    }

    /// Replace the draft text of the open session
    pub fn update_draft(&mut self, text: String) {
        if let Some(session) = self.session.as_mut() {
            session.draft = text;
        }
    }

    /// Apply the draft to the collection and close the session
    pub fn commit(&mut self, collection: &mut Collection) -> RenameOutcome {
        let Some(session) = self.session.take() else {
            return RenameOutcome::NoSession;
        };

        let Some(index) = collection.index_of(session.id) else {
            debug!(id = %session.id, "rename target no longer exists");
            return RenameOutcome::RecordGone;
        };

        let trimmed = session.draft.trim();
        if trimmed.is_empty() {
            return RenameOutcome::KeptPrevious;
        }

        collection.rename(index, trimmed.to_string());
        RenameOutcome::Renamed(trimmed.to_string())
    }

    /// Close the session without touching the collection
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(id = %session.id, "rename cancelled");
        }
    }
}
