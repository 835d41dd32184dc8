//! # Edit Session
//!
//! At most one record is being edited (or created) at any time. The session is
//! an explicit state machine:
//!
//! ```text
//!            begin_edit(id)                      begin_add()
//!   Idle ───────────────────▶ EditingExisting     Idle ─────────▶ AddingNew
//!    ▲                             │  set_field          ▲             │ set_field
//!    │        save() / cancel()    │                     │ add_save()  │
//!    └─────────────────────────────┘                     └─ / cancel() ┘
//! ```
//!
//! The draft is a full copy of the artwork's fields, photo included. Nothing
//! reaches the store until `save`/`add_save`. Opening a second session while
//! one is active is refused rather than silently replacing the first draft.

use crate::error::{ArtlistError, Result};
use crate::model::{Artwork, Field, Photo, Record, RecordId};
use crate::store::DataStore;
use std::fmt;
use std::str::FromStr;

/// What a draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Existing(RecordId),
    New,
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTarget::Existing(id) => write!(f, "#{}", id),
            EditTarget::New => f.write_str("new artwork"),
        }
    }
}

impl FromStr for EditTarget {
    type Err = ArtlistError;

    /// `new` names the new-artwork draft; anything else must be a record id.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("new") {
            return Ok(EditTarget::New);
        }
        s.parse().map(EditTarget::Existing)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    EditingExisting {
        id: RecordId,
        draft: Artwork,
    },
    AddingNew {
        draft: Artwork,
    },
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    pub fn target(&self) -> Option<EditTarget> {
        match self {
            EditSession::Idle => None,
            EditSession::EditingExisting { id, .. } => Some(EditTarget::Existing(*id)),
            EditSession::AddingNew { .. } => Some(EditTarget::New),
        }
    }

    pub fn draft(&self) -> Option<&Artwork> {
        match self {
            EditSession::Idle => None,
            EditSession::EditingExisting { draft, .. } | EditSession::AddingNew { draft } => {
                Some(draft)
            }
        }
    }

    fn draft_mut(&mut self, action: &str) -> Result<&mut Artwork> {
        match self {
            EditSession::Idle => Err(ArtlistError::Precondition(format!(
                "cannot {} without an open edit; use edit or add first",
                action
            ))),
            EditSession::EditingExisting { draft, .. } | EditSession::AddingNew { draft } => {
                Ok(draft)
            }
        }
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.target() {
            None => Ok(()),
            Some(target) => Err(ArtlistError::Precondition(format!(
                "already editing {}; save or cancel it first",
                target
            ))),
        }
    }

    /// Opens an edit on an existing record. The draft starts as a copy of it.
    /// A missing id leaves the session idle.
    pub fn begin_edit<S: DataStore>(&mut self, store: &S, id: RecordId) -> Result<&Artwork> {
        self.ensure_idle()?;
        let record = store.get(id)?;
        *self = EditSession::EditingExisting {
            id,
            draft: record.artwork,
        };
        self.draft_mut("edit").map(|d| &*d)
    }

    /// Opens a draft for a new record: empty fields, `Available`, no photo.
    pub fn begin_add(&mut self) -> Result<&Artwork> {
        self.ensure_idle()?;
        *self = EditSession::AddingNew {
            draft: Artwork::default(),
        };
        self.draft_mut("add").map(|d| &*d)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.draft_mut("set a field")?.set(field, value)
    }

    pub fn set_photo(&mut self, photo: Option<Photo>) -> Result<()> {
        self.draft_mut("change the photo")?.photo = photo;
        Ok(())
    }

    /// Writes the draft over the record being edited and closes the session.
    /// On failure the session stays open so the draft is not lost.
    pub fn save<S: DataStore>(&mut self, store: &mut S) -> Result<Record> {
        let id = match self {
            EditSession::EditingExisting { id, .. } => *id,
            EditSession::AddingNew { .. } => {
                return Err(ArtlistError::Precondition(
                    "the open draft is a new artwork; use add-save".to_string(),
                ))
            }
            EditSession::Idle => {
                return Err(ArtlistError::Precondition(
                    "cannot save without an open edit".to_string(),
                ))
            }
        };
        let draft = self.draft().cloned().unwrap_or_default();
        let record = store.update_by_id(id, draft)?;
        *self = EditSession::Idle;
        Ok(record)
    }

    /// Appends the new-record draft to the store under a fresh id.
    pub fn add_save<S: DataStore>(&mut self, store: &mut S) -> Result<Record> {
        match std::mem::take(self) {
            EditSession::AddingNew { draft } => Ok(store.add(draft)),
            other => {
                let reason = match other {
                    EditSession::EditingExisting { id, .. } => {
                        format!("the open draft edits #{}; use save", id)
                    }
                    _ => "cannot add-save without an open new artwork".to_string(),
                };
                *self = other;
                Err(ArtlistError::Precondition(reason))
            }
        }
    }

    /// Discards the draft. Returns what was being edited, if anything.
    pub fn cancel(&mut self) -> Option<EditTarget> {
        let target = self.target();
        *self = EditSession::Idle;
        target
    }
}
