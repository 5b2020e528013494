//! Reading address rows from spreadsheets and CSV files.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::error::SourceError;
use crate::models::address::RawAddressRow;
use crate::models::config::InputConfig;

/// Read address rows from a workbook (xlsx, xlsm, xlsb, xls, ods) or CSV file.
///
/// The first `header_rows` rows are skipped. Rows whose address cell is
/// empty are kept with `text: None`; the pipeline drops them.
pub fn read_rows(path: &Path, config: &InputConfig) -> Result<Vec<RawAddressRow>, SourceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let rows = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook(path, config)?,
        "csv" => read_csv(path, config)?,
        _ => return Err(SourceError::UnsupportedFormat(extension)),
    };

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn read_workbook(path: &Path, config: &InputConfig) -> Result<Vec<RawAddressRow>, SourceError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(config.sheet_index)
        .ok_or(SourceError::MissingSheet(config.sheet_index))??;

    let Some((last_row, _)) = range.end() else {
        return Ok(Vec::new());
    };

    let column = config.address_column as u32;
    let rows = (config.header_rows as u32..=last_row)
        .map(|row| {
            let text = range.get_value((row, column)).and_then(cell_text);
            RawAddressRow::new(row as usize, text)
        })
        .collect();

    Ok(rows)
}

fn read_csv(path: &Path, config: &InputConfig) -> Result<Vec<RawAddressRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if index < config.header_rows {
            continue;
        }

        let text = record.get(config.address_column).and_then(non_blank);
        rows.push(RawAddressRow::new(index, text));
    }

    Ok(rows)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => non_blank(s),
        other => non_blank(&other.to_string()),
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use pretty_assertions::assert_eq;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_csv_skips_headers() {
        let file = csv_file(
            "Relatório,,\n\
             id,endereco,obs\n\
             1,\"Rua Augusta, 1500 - Consolação, São Paulo - SP, 01304-001, Brasil\",x\n\
             2,,y\n\
             3,\"Rua B, 2\"\n",
        );

        let rows = read_rows(file.path(), &InputConfig::default()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].index, 2);
        assert_eq!(
            rows[0].text.as_deref(),
            Some("Rua Augusta, 1500 - Consolação, São Paulo - SP, 01304-001, Brasil")
        );
        assert_eq!(rows[1].text, None);
        assert_eq!(rows[2].text.as_deref(), Some("Rua B, 2"));
    }

    #[test]
    fn test_short_rows_have_no_text() {
        let file = csv_file("h\nh\nonly-one-column\n");
        let rows = read_rows(file.path(), &InputConfig::default()).unwrap();

        assert_eq!(rows, vec![RawAddressRow::new(2, None)]);
    }

    #[test]
    fn test_unsupported_format() {
        let result = read_rows(Path::new("enderecos.txt"), &InputConfig::default());
        assert!(matches!(result, Err(SourceError::UnsupportedFormat(ext)) if ext == "txt"));
    }

    fn workbook_fixture() -> &'static Path {
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/enderecos.xlsx"))
    }

    #[test]
    fn test_read_workbook_skips_headers() {
        // Row 1 of the sheet is blank, so the used range starts at row index 1.
        let rows = read_rows(workbook_fixture(), &InputConfig::default()).unwrap();

        assert_eq!(
            rows,
            vec![
                RawAddressRow::new(
                    2,
                    Some("Rua Augusta, 1500 - Consolação, São Paulo - SP, 01304-001, Brasil".to_string())
                ),
                RawAddressRow::new(3, None),
                RawAddressRow::new(4, Some("1500".to_string())),
                RawAddressRow::new(5, None),
                RawAddressRow::new(6, Some("Rua Bahia, 12".to_string())),
            ]
        );
    }

    #[test]
    fn test_read_workbook_column_and_header_rows() {
        let config = InputConfig {
            header_rows: 4,
            address_column: 0,
            ..Default::default()
        };
        let rows = read_rows(workbook_fixture(), &config).unwrap();

        let texts: Vec<_> = rows.iter().map(|r| (r.index, r.text.as_deref())).collect();
        assert_eq!(texts, vec![(4, Some("3")), (5, Some("4")), (6, Some("5"))]);
    }

    #[test]
    fn test_read_workbook_missing_sheet() {
        let config = InputConfig {
            sheet_index: 3,
            ..Default::default()
        };
        let result = read_rows(workbook_fixture(), &config);
        assert!(matches!(result, Err(SourceError::MissingSheet(3))));
    }

    #[test]
    fn test_missing_workbook() {
        let result = read_rows(Path::new("does-not-exist.xlsx"), &InputConfig::default());
        assert!(matches!(result, Err(SourceError::Workbook(_))));
    }
}
