//! CSV codec.

use super::Table;
use crate::error::{ArtlistError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn read(bytes: &[u8]) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| ArtlistError::Import(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ArtlistError::Import(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Writes UTF-8 with a byte-order mark so spreadsheet apps detect the encoding.
pub fn write(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(UTF8_BOM.to_vec());

    writer
        .write_record(&table.headers)
        .map_err(|e| ArtlistError::Export(e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| ArtlistError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ArtlistError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_ragged_rows() {
        let doc = "編號,藝術家,作品名稱\nAW1,甲\nAW2,乙,二,extra\n";
        let table = read(doc.as_bytes()).unwrap();
        assert_eq!(table.headers, vec!["編號", "藝術家", "作品名稱"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["AW1", "甲"]);
    }

    #[test]
    fn empty_document_has_no_rows() {
        let table = read(b"").unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_import_error() {
        let err = read(b"title\n\xff\xfe\xfd\n").unwrap_err();
        assert!(matches!(err, ArtlistError::Import(_)));
    }

    #[test]
    fn written_csv_starts_with_bom_and_reads_back() {
        let table = Table::new(
            vec!["作品名稱".into(), "標價".into()],
            vec![vec!["晨曦, 二".into(), "NT$ 45,000".into()]],
        );
        let bytes = write(&table).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        assert_eq!(read(&bytes).unwrap(), table);
    }
}
