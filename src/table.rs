//! Projection of a directory listing into the rows of the details table.
//!
//! The table is a plain value: a header row followed by one formatted row per
//! directory entry, or a single indicator row when there is nothing to list.
//! Rendering is left to the UI layer.

use std::fmt::Display;
use std::path::Path;

use chrono::{Local, TimeZone};

use crate::format::{format_cell, format_cell_aligned, format_kind, format_modified, format_size, Align};
use crate::listing::{DirectoryEntry, FileSystem};

/// A column of the details table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
    pub align: Align,
}

/// Columns of the details table, in display order.
pub const COLUMNS: [Column; 4] = [
    Column {
        title: "Name",
        width: 30,
        align: Align::Left,
    },
    Column {
        title: "Date Modified",
        width: 25,
        align: Align::Left,
    },
    Column {
        title: "Size",
        width: 15,
        align: Align::Right,
    },
    Column {
        title: "Kind",
        width: 10,
        align: Align::Left,
    },
];

/// Message shown when a favorite label has no registered path.
pub const INVALID_FAVORITE: &str = "Invalid favorite selected";

/// What a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Column titles; never a selection target.
    Header,
    /// One directory entry.
    Data,
    /// A one-cell message in place of data (errors, invalid selections).
    Indicator,
}

/// One row of the details table.
///
/// Header and data rows hold one cell per column, each exactly as wide as the
/// column. Indicator rows hold a single unpadded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRow {
    pub cells: Vec<String>,
    pub kind: RowKind,
    /// Untruncated entry name for data rows.
    pub entry_name: Option<String>,
}

impl FormattedRow {
    fn header() -> Self {
        Self {
            cells: COLUMNS
                .iter()
                .map(|column| format_cell(column.title, column.width))
                .collect(),
            kind: RowKind::Header,
            entry_name: None,
        }
    }

    fn from_entry<Tz: TimeZone>(entry: &DirectoryEntry, tz: &Tz) -> Self
    where
        Tz::Offset: Display,
    {
        let values = [
            entry.name.clone(),
            format_modified(entry.modified, tz),
            format_size(entry.size),
            format_kind(entry.is_dir).to_string(),
        ];

        Self {
            cells: COLUMNS
                .iter()
                .zip(values.iter())
                .map(|(column, value)| format_cell_aligned(value, column.width, column.align))
                .collect(),
            kind: RowKind::Data,
            entry_name: Some(entry.name.clone()),
        }
    }

    fn indicator(message: impl Into<String>) -> Self {
        Self {
            cells: vec![message.into()],
            kind: RowKind::Indicator,
            entry_name: None,
        }
    }

    /// Whether the row can be highlighted and confirmed.
    pub fn is_selectable(&self) -> bool {
        self.kind == RowKind::Data
    }

    /// The first cell with its padding removed.
    pub fn first_cell_trimmed(&self) -> Option<&str> {
        self.cells.first().map(|cell| cell.trim())
    }
}

/// The full contents of the details table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableModel {
    rows: Vec<FormattedRow>,
}

impl TableModel {
    /// A table with no rows, shown before any favorite is highlighted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table holding nothing but one message row.
    pub fn indicator(message: impl Into<String>) -> Self {
        Self {
            rows: vec![FormattedRow::indicator(message)],
        }
    }

    pub fn rows(&self) -> &[FormattedRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&FormattedRow> {
        self.rows.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the table shows a message instead of (or after) the listing.
    pub fn has_indicator(&self) -> bool {
        self.rows.iter().any(|row| row.kind == RowKind::Indicator)
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        self.row(index).is_some_and(FormattedRow::is_selectable)
    }

    pub fn first_selectable(&self) -> Option<usize> {
        self.rows.iter().position(FormattedRow::is_selectable)
    }

    pub fn last_selectable(&self) -> Option<usize> {
        self.rows.iter().rposition(FormattedRow::is_selectable)
    }

    /// The next selectable row after `index`, if any.
    pub fn next_selectable(&self, index: usize) -> Option<usize> {
        (index + 1..self.rows.len()).find(|&i| self.is_selectable(i))
    }

    /// The closest selectable row before `index`, if any.
    pub fn prev_selectable(&self, index: usize) -> Option<usize> {
        (0..index.min(self.rows.len())).rev().find(|&i| self.is_selectable(i))
    }
}

/// Read `path` through `fs` and build the details table for it.
///
/// Row 0 is always the header. A failed read yields a single error row after
/// the header and nothing else. Dates are shown in local time.
pub fn project<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> TableModel {
    project_in(fs, path, &Local)
}

/// [`project`] with dates shown in `tz`.
pub fn project_in<F, Tz>(fs: &F, path: &Path, tz: &Tz) -> TableModel
where
    F: FileSystem + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut rows = vec![FormattedRow::header()];

    match fs.read_dir(path) {
        Ok(entries) => {
            log::debug!("listed {} entries in {}", entries.len(), path.display());
            rows.extend(entries.iter().map(|entry| FormattedRow::from_entry(entry, tz)));
        }
        Err(e) => {
            log::warn!("failed to list {}: {}", path.display(), e);
            rows.push(FormattedRow::indicator(format!("Error: {}", e)));
        }
    }

    TableModel { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListError, LocalFs};
    use chrono::Utc;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    struct DeniedFs;

    impl FileSystem for DeniedFs {
        fn read_dir(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ListError> {
            Err(ListError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
    }

    struct FixedFs(Vec<DirectoryEntry>);

    impl FileSystem for FixedFs {
        fn read_dir(&self, _path: &Path) -> Result<Vec<DirectoryEntry>, ListError> {
            Ok(self.0.clone())
        }
    }

    fn set_mtime(path: &Path, time: SystemTime) {
        std::fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    #[test]
    fn test_header_row() {
        let table = project(&FixedFs(Vec::new()), Path::new("/any"));
        assert_eq!(table.rows().len(), 1);

        let header = table.row(0).unwrap();
        assert_eq!(header.kind, RowKind::Header);
        assert!(!header.is_selectable());
        assert_eq!(header.cells[0], format!("Name{}", " ".repeat(26)));
        assert_eq!(header.cells[1], format!("Date Modified{}", " ".repeat(12)));
        assert_eq!(header.cells[2], format!("Size{}", " ".repeat(11)));
        assert_eq!(header.cells[3], "Kind      ");
    }

    #[test]
    fn test_directory_with_file_and_subdir() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.txt");
        std::fs::write(&file_path, "hello").unwrap();
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_709_642_096);
        set_mtime(&file_path, stamp);
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let table = project_in(&LocalFs, temp_dir.path(), &Utc);
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.row(0).unwrap().kind, RowKind::Header);

        for row in table.rows() {
            assert_eq!(row.cells.len(), COLUMNS.len());
            for (cell, column) in row.cells.iter().zip(COLUMNS.iter()) {
                assert_eq!(cell.chars().count(), column.width, "{:?}", cell);
            }
        }

        let file_row = table.row(1).unwrap();
        assert_eq!(file_row.kind, RowKind::Data);
        assert_eq!(file_row.cells[0], format!("a.txt{}", " ".repeat(25)));
        assert_eq!(file_row.cells[1], "Tue, 05 Mar 2024 12:34:56");
        assert_eq!(file_row.cells[2], format!("{}5 bytes", " ".repeat(8)));
        assert_eq!(file_row.cells[3], "File      ");

        let dir_row = table.row(2).unwrap();
        assert_eq!(dir_row.first_cell_trimmed(), Some("sub"));
        assert_eq!(dir_row.cells[2], format!("{}-", " ".repeat(14)));
        assert_eq!(dir_row.cells[3], "Directory ");
    }

    #[test]
    fn test_out_of_range_mtime_renders_dash() {
        let far_future = SystemTime::UNIX_EPOCH + Duration::from_secs(1 << 50);
        let entries = vec![DirectoryEntry::file("future.txt", 1, Some(far_future))];
        let table = project_in(&FixedFs(entries), Path::new("/any"), &Utc);

        let row = table.row(1).unwrap();
        assert_eq!(row.kind, RowKind::Data);
        assert_eq!(row.cells[1], format!("-{}", " ".repeat(24)));
    }

    #[test]
    fn test_cells_match_column_widths() {
        let entries = vec![
            DirectoryEntry::file("x".repeat(80), u64::MAX, None),
            DirectoryEntry::directory("d", Some(SystemTime::now())),
        ];
        let table = project(&FixedFs(entries), Path::new("/any"));

        for row in table.rows() {
            assert_eq!(row.cells.len(), COLUMNS.len());
            for (cell, column) in row.cells.iter().zip(COLUMNS.iter()) {
                assert_eq!(cell.chars().count(), column.width);
            }
        }
        let long_row = table.row(1).unwrap();
        assert!(long_row.cells[0].ends_with("..."));
        assert_eq!(long_row.entry_name.as_deref(), Some("x".repeat(80).as_str()));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("one.txt"), "1").unwrap();
        std::fs::write(temp_dir.path().join("two.txt"), "22").unwrap();
        std::fs::create_dir(temp_dir.path().join("three")).unwrap();

        let first = project(&LocalFs, temp_dir.path());
        let second = project(&LocalFs, temp_dir.path());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_directory_yields_error_row() {
        let missing = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let table = project(&LocalFs, &missing);

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.row(0).unwrap().kind, RowKind::Header);

        let error_row = table.row(1).unwrap();
        assert_eq!(error_row.kind, RowKind::Indicator);
        assert_eq!(error_row.cells.len(), 1);
        assert!(error_row.cells[0].starts_with("Error: "));
        assert!(error_row.cells[0].contains("path not found"));
        assert_eq!(table.first_selectable(), None);
        assert!(table.has_indicator());
    }

    #[test]
    fn test_permission_denied_yields_error_row() {
        let table = project(&DeniedFs, Path::new("/secret"));
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.row(1).unwrap().cells[0], "Error: permission denied: /secret");
    }

    #[test]
    fn test_indicator_table() {
        let table = TableModel::indicator(INVALID_FAVORITE);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.row(0).unwrap().kind, RowKind::Indicator);
        assert_eq!(table.row(0).unwrap().first_cell_trimmed(), Some(INVALID_FAVORITE));
        assert_eq!(table.first_selectable(), None);
    }

    #[test]
    fn test_selectable_navigation() {
        let entries = vec![
            DirectoryEntry::file("a", 1, None),
            DirectoryEntry::file("b", 2, None),
        ];
        let table = project(&FixedFs(entries), Path::new("/any"));

        assert!(!table.is_selectable(0));
        assert_eq!(table.first_selectable(), Some(1));
        assert_eq!(table.last_selectable(), Some(2));
        assert_eq!(table.next_selectable(1), Some(2));
        assert_eq!(table.next_selectable(2), None);
        assert_eq!(table.prev_selectable(2), Some(1));
        assert_eq!(table.prev_selectable(1), None);
        assert!(!table.is_selectable(99));
        assert!(!table.has_indicator());
    }
}
