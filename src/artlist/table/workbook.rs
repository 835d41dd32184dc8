//! Spreadsheet workbook codec. Reads any format calamine understands and
//! writes `.xlsx`.

use super::Table;
use crate::error::Result;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};
use std::io::Cursor;

/// Column widths in characters, in export column order.
const COLUMN_WIDTHS: [f64; 8] = [10.0, 15.0, 20.0, 40.0, 15.0, 15.0, 15.0, 10.0];

/// Reads the first worksheet. A workbook without sheets yields an empty table.
pub fn read(bytes: &[u8]) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Table::default());
    };
    let range = range?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();
    Ok(Table::new(headers, rows.collect()))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn write(table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name)?;
        for (col, width) in COLUMN_WIDTHS.iter().enumerate().take(table.headers.len()) {
            worksheet.set_column_width(col as u16, *width)?;
        }
        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }
        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(row_idx as u32 + 1, col as u16, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
