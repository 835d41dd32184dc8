use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::printable::render_summary;
use chrono::NaiveDate;
use std::io::Write;

/// Writes the printable HTML summary of `records`.
pub fn run<'a, I, W>(records: I, title: &str, date: NaiveDate, mut writer: W) -> Result<CmdResult>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write,
{
    let records: Vec<&Record> = records.into_iter().collect();
    let html = render_summary(records.iter().copied(), title, date)?;
    writer.write_all(html.as_bytes())?;
    writer.flush()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Printable summary of {} artwork(s) written",
        records.len()
    )));
    Ok(result)
}
