//! # Tabular Import/Export
//!
//! Spreadsheet documents are read into and written from a plain [`Table`]: one
//! header row followed by string rows. The codecs ([`delimited`], [`workbook`]) only move
//! cells; mapping columns to artwork fields happens here.
//!
//! ## Column mapping
//!
//! Export always writes the localized headers in a fixed order:
//!
//! ```text
//! 編號 | 藝術家 | 作品名稱 | 創作理念 | 媒材 | 尺寸 | 標價 | 狀態
//! ```
//!
//! Import accepts, for every field, the localized header or the internal key
//! (`number`, `artist`, ...). Synonyms are tried in order and the first
//! non-empty cell wins. Missing columns leave the field empty; a missing or
//! unrecognised status becomes `Available`. Photos never travel through tables.

use crate::error::{ArtlistError, Result};
use crate::model::{Artwork, Field, Record, Status};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub mod delimited;
pub mod workbook;

/// Header synonyms per field, in priority order.
const COLUMN_SYNONYMS: [(Field, [&str; 2]); 8] = [
    (Field::Number, ["編號", "number"]),
    (Field::Artist, ["藝術家", "artist"]),
    (Field::Title, ["作品名稱", "title"]),
    (Field::Concept, ["創作理念", "concept"]),
    (Field::Medium, ["媒材", "medium"]),
    (Field::Size, ["尺寸", "size"]),
    (Field::Price, ["標價", "price"]),
    (Field::Status, ["狀態", "status"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Csv,
    #[default]
    Xlsx,
}

impl TableFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Xlsx => "xlsx",
        }
    }

    /// Picks the format from a file extension, if it names one we handle.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "csv" => Some(TableFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(TableFormat::Xlsx),
            _ => None,
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for TableFormat {
    type Err = ArtlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "xlsx" => Ok(TableFormat::Xlsx),
            other => Err(ArtlistError::InvalidValue(format!(
                "unknown table format '{}' (expected csv or xlsx)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Lays records out in export column order. Photos are left out.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let headers = Field::ALL.iter().map(|f| f.label().to_string()).collect();
        let rows = records
            .into_iter()
            .map(|r| {
                Field::ALL
                    .iter()
                    .map(|f| r.artwork.get(*f).to_string())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    fn column_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| header_matches(h, name))
    }
}

fn header_matches(header: &str, name: &str) -> bool {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .eq_ignore_ascii_case(name)
}

/// An artwork built from one table row, plus notes about defaulted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedRow {
    pub artwork: Artwork,
    pub warnings: Vec<String>,
}

/// Maps every data row of `table` to an artwork draft. Rows with nothing
/// usable still become default artworks.
pub fn artworks_from_table(table: &Table) -> Vec<ImportedRow> {
    let columns: Vec<(Field, Vec<usize>)> = COLUMN_SYNONYMS
        .iter()
        .map(|(field, names)| {
            let idxs = names.iter().filter_map(|n| table.column_of(n)).collect();
            (*field, idxs)
        })
        .collect();

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut artwork = Artwork::default();
            let mut warnings = Vec::new();
            for (field, idxs) in &columns {
                let value = idxs
                    .iter()
                    .filter_map(|idx| row.get(*idx))
                    .find(|cell| !cell.is_empty());
                let Some(value) = value else {
                    continue;
                };
                if *field == Field::Status {
                    match value.parse::<Status>() {
                        Ok(status) => artwork.status = status,
                        Err(_) => warnings.push(format!(
                            "row {}: unknown status '{}', using {}",
                            i + 2,
                            value,
                            Status::Available
                        )),
                    }
                } else {
                    // Text fields accept anything, so this cannot fail.
                    let _ = artwork.set(*field, value.clone());
                }
            }
            ImportedRow { artwork, warnings }
        })
        .collect()
}

/// Parses a document in the given format.
pub fn read(format: TableFormat, bytes: &[u8]) -> Result<Table> {
    match format {
        TableFormat::Csv => delimited::read(bytes),
        TableFormat::Xlsx => workbook::read(bytes),
    }
}

/// Serializes a table in the given format.
pub fn write(format: TableFormat, table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    match format {
        TableFormat::Csv => delimited::write(table),
        TableFormat::Xlsx => workbook::write(table, sheet_name),
    }
}
