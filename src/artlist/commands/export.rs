use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::table::{self, Table, TableFormat};
use std::io::Write;
use tracing::info;

/// Writes every record as a tabular document.
pub fn run<W: Write>(
    records: &[Record],
    format: TableFormat,
    sheet_name: &str,
    mut writer: W,
) -> Result<CmdResult> {
    let table = Table::from_records(records);
    let bytes = table::write(format, &table, sheet_name)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    info!(count = records.len(), %format, "exported artworks");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} artwork(s) as {}",
        records.len(),
        format
    )));
    Ok(result)
}
