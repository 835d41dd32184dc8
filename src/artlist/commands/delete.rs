use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArtlistError, Result};
use crate::model::RecordId;
use crate::session::{EditSession, EditTarget};
use crate::store::DataStore;
use tracing::debug;

/// Removes a record. The record under an open edit cannot be removed until
/// that edit is saved or cancelled.
pub fn run<S: DataStore>(store: &mut S, session: &EditSession, id: RecordId) -> Result<CmdResult> {
    if session.target() == Some(EditTarget::Existing(id)) {
        return Err(ArtlistError::Precondition(format!(
            "#{} is being edited; save or cancel first",
            id
        )));
    }

    let record = store.remove_by_id(id)?;
    debug!(%id, "artwork removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Artwork deleted (#{}): {}",
        record.id, record.artwork.title
    )));
    Ok(result.with_affected_records(vec![record]))
}
