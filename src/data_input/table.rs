// src/data_input/table.rs

use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, SedimentError};

/// Extensions read as workbooks rather than CSV.
const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Raw spreadsheet contents: rows of text cells, addressed by position.
/// Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Reads CSV with no header row. Every record becomes a row, including
    /// title and header lines above the data. Completely blank lines are
    /// skipped by the reader, so exported sheets must keep empty rows as
    /// delimiter-only lines to preserve row positions.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { rows })
    }

    /// Converts a worksheet range into positional text cells. Positions are
    /// absolute from cell A1, so leading empty rows and columns are kept as
    /// empty strings. Empty cells become `""`; numbers use their plain display.
    pub fn from_range(range: &Range<Data>) -> Self {
        let (start_row, start_col) = match range.start() {
            Some((row, col)) => (row as usize, col as usize),
            None => return Self::default(),
        };

        let mut rows = vec![Vec::new(); start_row];
        for sheet_row in range.rows() {
            let mut row = vec![String::new(); start_col];
            row.extend(sheet_row.iter().map(|cell| cell.to_string().trim().to_string()));
            rows.push(row);
        }
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `None` when the row is missing or too short to reach `column`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }
}

/// Where the sedimentation table comes from.
pub trait TableSource {
    fn load_table(&self) -> Result<Table>;
}

/// A spreadsheet exported to CSV on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for CsvFileSource {
    fn load_table(&self) -> Result<Table> {
        let file = File::open(&self.path)?;
        let table = Table::from_csv_reader(BufReader::new(file))?;
        info!(
            path = %self.path.display(),
            rows = table.row_count(),
            "loaded spreadsheet"
        );
        Ok(table)
    }
}

/// The first worksheet of an Excel or OpenDocument workbook on disk.
#[derive(Debug, Clone)]
pub struct XlsxFileSource {
    path: PathBuf,
}

impl XlsxFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSource for XlsxFileSource {
    fn load_table(&self) -> Result<Table> {
        let mut workbook = open_workbook_auto(&self.path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SedimentError::EmptyWorkbook)??;
        let table = Table::from_range(&range);
        info!(
            path = %self.path.display(),
            rows = table.row_count(),
            "loaded workbook"
        );
        Ok(table)
    }
}

/// True when the extension names a workbook format (case-insensitive).
pub fn is_workbook_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Picks the workbook reader for workbook extensions and CSV for anything else.
pub fn source_for_path(path: &Path) -> Box<dyn TableSource> {
    if is_workbook_path(path) {
        Box::new(XlsxFileSource::new(path))
    } else {
        Box::new(CsvFileSource::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SedimentError;
    use std::io::Write;

    #[test]
    fn test_ragged_rows_are_kept() {
        let csv = "Title\n,,header\n1,2,3,4\n";
        let table = Table::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.cell(0, 0), Some("Title"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 2), Some("header"));
        assert_eq!(table.cell(2, 3), Some("4"));
        assert_eq!(table.cell(5, 0), None);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let table = Table::from_csv_reader(" 1.5 , abc \n".as_bytes()).unwrap();
        assert_eq!(table.cell(0, 0), Some("1.5"));
        assert_eq!(table.cell(0, 1), Some("abc"));
    }

    #[test]
    fn test_file_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a,b").unwrap();
        writeln!(file, "1,2").unwrap();
        let source = CsvFileSource::new(file.path());
        let table = source.load_table().unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 1), Some("2"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let source = CsvFileSource::new("/nonexistent/dir/sedimentation.csv");
        assert!(matches!(source.load_table(), Err(SedimentError::Io(_))));
    }

    #[test]
    fn test_range_keeps_absolute_positions() {
        // Used range starts at H5 (row 4, column 7), like the sedimentation sheet
        let mut range: Range<Data> = Range::new((4, 7), (5, 8));
        range.set_value((4, 7), Data::Float(0.0));
        range.set_value((4, 8), Data::Int(300));
        range.set_value((5, 7), Data::Float(2.5));
        range.set_value((5, 8), Data::String(" n/a ".to_string()));

        let table = Table::from_range(&range);
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.cell(0, 0), None);
        assert_eq!(table.cell(4, 0), Some(""));
        assert_eq!(table.cell(4, 7), Some("0"));
        assert_eq!(table.cell(4, 8), Some("300"));
        assert_eq!(table.cell(5, 7), Some("2.5"));
        assert_eq!(table.cell(5, 8), Some("n/a"));
    }

    #[test]
    fn test_empty_cells_become_empty_strings() {
        let mut range: Range<Data> = Range::new((0, 0), (0, 2));
        range.set_value((0, 0), Data::Float(1.0));
        range.set_value((0, 2), Data::Float(3.0));

        let table = Table::from_range(&range);
        assert_eq!(table.cell(0, 0), Some("1"));
        assert_eq!(table.cell(0, 1), Some(""));
        assert_eq!(table.cell(0, 2), Some("3"));
    }

    #[test]
    fn test_empty_range_gives_empty_table() {
        let range: Range<Data> = Range::empty();
        assert_eq!(Table::from_range(&range).row_count(), 0);
    }

    #[test]
    fn test_workbook_extension_detection() {
        assert!(is_workbook_path(Path::new("Data_tut_3.xlsx")));
        assert!(is_workbook_path(Path::new("data/Run.XLSX")));
        assert!(is_workbook_path(Path::new("sheet.ods")));
        assert!(!is_workbook_path(Path::new("Data_tut_3.csv")));
        assert!(!is_workbook_path(Path::new("no_extension")));
    }

    #[test]
    fn test_missing_workbook_is_error() {
        let source = source_for_path(Path::new("/nonexistent/dir/Data_tut_3.xlsx"));
        assert!(matches!(source.load_table(), Err(SedimentError::Workbook(_))));
    }

    #[test]
    fn test_non_workbook_file_is_error() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        writeln!(file, "not a zip archive").unwrap();
        let source = XlsxFileSource::new(file.path());
        assert!(matches!(source.load_table(), Err(SedimentError::Workbook(_))));
    }
}

// src/data_input/table.rs
