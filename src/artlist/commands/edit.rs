//! Commands driving the edit session: open, change, commit or discard a draft.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Field, RecordId};
use crate::session::{EditSession, EditTarget};
use crate::store::DataStore;
use tracing::debug;

fn with_current_draft(result: CmdResult, session: &EditSession) -> CmdResult {
    match (session.target(), session.draft()) {
        (Some(target), Some(draft)) => result.with_draft(target, draft.clone()),
        _ => result,
    }
}

pub fn begin_edit<S: DataStore>(
    store: &S,
    session: &mut EditSession,
    id: RecordId,
) -> Result<CmdResult> {
    session.begin_edit(store, id)?;
    debug!(%id, "edit session opened");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Editing #{}", id)));
    Ok(with_current_draft(result, session))
}

pub fn begin_add(session: &mut EditSession) -> Result<CmdResult> {
    session.begin_add()?;
    debug!("new artwork draft opened");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Editing a new artwork"));
    Ok(with_current_draft(result, session))
}

pub fn set_field(session: &mut EditSession, field: Field, value: &str) -> Result<CmdResult> {
    session.set_field(field, value)?;
    debug!(%field, "draft field set");
    Ok(with_current_draft(CmdResult::default(), session))
}

pub fn save<S: DataStore>(store: &mut S, session: &mut EditSession) -> Result<CmdResult> {
    let record = session.save(store)?;
    debug!(id = %record.id, "draft saved");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Artwork updated (#{}): {}",
        record.id, record.artwork.title
    )));
    Ok(result.with_affected_records(vec![record]))
}

pub fn add_save<S: DataStore>(store: &mut S, session: &mut EditSession) -> Result<CmdResult> {
    let record = session.add_save(store)?;
    debug!(id = %record.id, "new artwork saved");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Artwork added (#{}): {}",
        record.id, record.artwork.title
    )));
    Ok(result.with_affected_records(vec![record]))
}

/// Commits whatever draft is open: `save` for existing records, `add_save`
/// for a new one.
pub fn commit<S: DataStore>(store: &mut S, session: &mut EditSession) -> Result<CmdResult> {
    match session.target() {
        Some(EditTarget::New) => add_save(store, session),
        _ => save(store, session),
    }
}

pub fn cancel(session: &mut EditSession) -> CmdResult {
    let mut result = CmdResult::default();
    match session.cancel() {
        Some(target) => {
            debug!(%target, "draft discarded");
            result.add_message(CmdMessage::info(format!("Discarded changes to {}", target)));
        }
        None => result.add_message(CmdMessage::info("Nothing to cancel")),
    }
    result
}

pub fn current_draft(session: &EditSession) -> CmdResult {
    let mut result = with_current_draft(CmdResult::default(), session);
    if result.draft.is_none() {
        result.add_message(CmdMessage::info("No open draft"));
    }
    result
}
