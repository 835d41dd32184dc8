//! Photo attachment. A photo lands in the open draft when the draft belongs to
//! the target; otherwise it is written straight onto the stored record.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ArtlistError, Result};
use crate::model::Photo;
use crate::session::{EditSession, EditTarget};
use crate::store::DataStore;
use tracing::debug;

pub fn attach<S: DataStore>(
    store: &mut S,
    session: &mut EditSession,
    target: EditTarget,
    photo: Option<Photo>,
) -> Result<CmdResult> {
    let verb = if photo.is_some() { "attached to" } else { "removed from" };
    let mut result = CmdResult::default();

    if session.target() == Some(target) {
        session.set_photo(photo)?;
        debug!(%target, "draft photo replaced");
        if let Some(draft) = session.draft() {
            result = result.with_draft(target, draft.clone());
        }
        result.add_message(CmdMessage::info(format!("Photo {} draft of {}", verb, target)));
        return Ok(result);
    }

    match target {
        EditTarget::New => Err(ArtlistError::Precondition(
            "no new artwork is being added; use add first".to_string(),
        )),
        EditTarget::Existing(id) => {
            let mut artwork = store.get(id)?.artwork;
            artwork.photo = photo;
            let record = store.update_by_id(id, artwork)?;
            debug!(%id, "stored photo replaced");
            result.add_message(CmdMessage::success(format!("Photo {} #{}", verb, id)));
            Ok(result.with_affected_records(vec![record]))
        }
    }
}
