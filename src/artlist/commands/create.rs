use crate::commands::{CmdMessage, CmdResult};
use crate::model::Artwork;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, artwork: Artwork) -> CmdResult {
    let record = store.add(artwork);
    debug!(id = %record.id, "artwork added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Artwork added (#{}): {}",
        record.id, record.artwork.title
    )));
    result.with_affected_records(vec![record])
}
