use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::table::{self, artworks_from_table, TableFormat};
use tracing::{info, warn};

/// Parses a tabular document and appends one artwork per row.
///
/// Nothing is added unless the whole document parses.
pub fn run<S: DataStore>(store: &mut S, format: TableFormat, bytes: &[u8]) -> Result<CmdResult> {
    let table = table::read(format, bytes)?;
    let rows = artworks_from_table(&table);

    let mut result = CmdResult::default();
    let mut artworks = Vec::with_capacity(rows.len());
    for row in rows {
        for warning in row.warnings {
            warn!("{}", warning);
            result.add_message(CmdMessage::warning(warning));
        }
        artworks.push(row.artwork);
    }

    let added = store.bulk_append(artworks);
    info!(count = added.len(), %format, "imported artworks");
    result.add_message(CmdMessage::success(format!(
        "Imported {} artwork(s)",
        added.len()
    )));
    Ok(result.with_affected_records(added))
}
