//! Collection source loading.
//!
//! Reads a delimited export (BoardGameGeek collection CSV or a TSV with the
//! same header names) into [`SourceRow`]s. Only recognized columns are kept;
//! any recognized column missing from the header reads as null for every
//! row, so nothing downstream has to special-case absent columns.

use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;

/// Columns the pipeline understands. Header names are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    ObjectId,
    ObjectName,
    Rating,
    Average,
    NumPlays,
    MinPlayers,
    MaxPlayers,
    PlayingTime,
    MinPlaytime,
    MaxPlaytime,
    ItemType,
    YearPublished,
    RecommendedAge,
    LanguageDependence,
    Own,
    Comment,
}

impl Column {
    pub const COUNT: usize = 16;

    pub const ALL: [Column; Self::COUNT] = [
        Self::ObjectId,
        Self::ObjectName,
        Self::Rating,
        Self::Average,
        Self::NumPlays,
        Self::MinPlayers,
        Self::MaxPlayers,
        Self::PlayingTime,
        Self::MinPlaytime,
        Self::MaxPlaytime,
        Self::ItemType,
        Self::YearPublished,
        Self::RecommendedAge,
        Self::LanguageDependence,
        Self::Own,
        Self::Comment,
    ];

    /// Header name of this column in the source file.
    pub fn key(self) -> &'static str {
        match self {
            Self::ObjectId => "objectid",
            Self::ObjectName => "objectname",
            Self::Rating => "rating",
            Self::Average => "average",
            Self::NumPlays => "numplays",
            Self::MinPlayers => "minplayers",
            Self::MaxPlayers => "maxplayers",
            Self::PlayingTime => "playingtime",
            Self::MinPlaytime => "minplaytime",
            Self::MaxPlaytime => "maxplaytime",
            Self::ItemType => "itemtype",
            Self::YearPublished => "yearpublished",
            Self::RecommendedAge => "bggrecagerange",
            Self::LanguageDependence => "bgglanguagedependence",
            Self::Own => "own",
            Self::Comment => "comment",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One raw record. Every cell is optional; empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    cells: [Option<String>; Column::COUNT],
}

impl SourceRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for assembling rows in tests.
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        let value = value.into();
        self.cells[column.index()] = if value.is_empty() { None } else { Some(value) };
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells[column.index()].as_deref()
    }
}

/// A loaded source: its rows in file order, plus whether the ownership
/// column was present in the header.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub rows: Vec<SourceRow>,
    pub has_own_column: bool,
}

/// Field delimiter for a source path: tab for `.tsv`/`.tab`, comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

/// Load a source file from disk.
///
/// A missing file is reported as [`CatalogError::SourceUnavailable`].
pub fn read_source(path: &Path) -> Result<SourceTable, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::SourceUnavailable(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|e| CatalogError::io(path, e))?;
    parse_source(file, delimiter_for(path)).map_err(|e| CatalogError::csv(path, e))
}

/// Parse delimited text with a header row.
///
/// Malformed records are logged and skipped. Only an unreadable header is an
/// error.
pub fn parse_source<R: Read>(reader: R, delimiter: u8) -> Result<SourceTable, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let columns: Vec<Option<Column>> = reader
        .headers()?
        .iter()
        .map(|h| Column::from_key(h.trim_start_matches('\u{feff}').trim()))
        .collect();
    let has_own_column = columns.contains(&Some(Column::Own));

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed collection row: {e}");
                continue;
            }
        };

        let mut row = SourceRow::new();
        for (value, column) in record.iter().zip(&columns) {
            if let Some(column) = column {
                row.set(*column, value);
            }
        }
        rows.push(row);
    }

    log::debug!(
        "Parsed {} collection rows ({} recognized columns)",
        rows.len(),
        columns.iter().flatten().count()
    );

    Ok(SourceTable {
        rows,
        has_own_column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_read_as_null() {
        let csv = "objectid,objectname\n5,Catan\n";
        let table = parse_source(csv.as_bytes(), b',').unwrap();
        assert_eq!(table.rows.len(), 1);
        assert!(!table.has_own_column);

        let row = &table.rows[0];
        assert_eq!(row.get(Column::ObjectId), Some("5"));
        assert_eq!(row.get(Column::ObjectName), Some("Catan"));
        assert_eq!(row.get(Column::MinPlayers), None);
        assert_eq!(row.get(Column::Comment), None);
    }

    #[test]
    fn test_unknown_columns_are_ignored_and_empty_cells_are_null() {
        let csv = "objectname,wishlistpriority,rating\nAzul,,\n";
        let table = parse_source(csv.as_bytes(), b',').unwrap();
        let row = &table.rows[0];
        assert_eq!(row.get(Column::ObjectName), Some("Azul"));
        assert_eq!(row.get(Column::Rating), None);
    }

    #[test]
    fn test_short_records_are_padded() {
        let csv = "objectid,objectname,own\n1,Azul\n2,Patchwork,1\n";
        let table = parse_source(csv.as_bytes(), b',').unwrap();
        assert!(table.has_own_column);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get(Column::Own), None);
        assert_eq!(table.rows[1].get(Column::Own), Some("1"));
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let csv = "ObjectName,objectname\nWrong,Right\n";
        let table = parse_source(csv.as_bytes(), b',').unwrap();
        assert_eq!(table.rows[0].get(Column::ObjectName), Some("Right"));
    }

    #[test]
    fn test_tab_delimited() {
        let tsv = "objectid\tobjectname\n7\tHanabi\n";
        let table = parse_source(tsv.as_bytes(), b'\t').unwrap();
        assert_eq!(table.rows[0].get(Column::ObjectName), Some("Hanabi"));
    }

    #[test]
    fn test_delimiter_by_extension() {
        assert_eq!(delimiter_for(Path::new("collection.csv")), b',');
        assert_eq!(delimiter_for(Path::new("collection.TSV")), b'\t');
        assert_eq!(delimiter_for(Path::new("collection")), b',');
    }

    #[test]
    fn test_column_keys_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_key(column.key()), Some(column));
        }
    }
}
