use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, instrument};

use crate::error::{Result, ScreenError};

/// One input row: column name to optional text.
///
/// Columns are not fixed by a schema. An empty CSV cell is stored as `None`,
/// and reading a column the row does not have yields `None` as well.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: HashMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(column, value)` pairs, treating `""` as absent
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (column, value) in pairs {
            let value = value.into();
            record.set(column, (!value.is_empty()).then_some(value));
        }
        record
    }

    /// Value of `column`, `None` when the column is missing or the cell was empty
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).and_then(|v| v.as_deref())
    }

    /// Value of `column`, empty text when absent
    pub fn text(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn set(&mut self, column: impl Into<String>, value: Option<String>) {
        self.values.insert(column.into(), value);
    }
}

/// The working table: ordered header plus ordered records
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads the CSV file at `path`. Every value stays text.
#[instrument]
pub fn load_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(ScreenError::input(path, "file does not exist"));
    }

    let file = File::open(path).map_err(|e| ScreenError::input(path, format!("cannot open file: {}", e)))?;
    parse_csv(file, path)
}

/// Parses CSV content from any reader; `path` is only used in diagnostics.
pub fn parse_csv<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let raw_headers = rdr
        .headers()
        .map_err(|e| ScreenError::input(path, format!("unreadable header row: {}", e)))?
        .clone();

    if raw_headers.is_empty() {
        return Err(ScreenError::input(path, "missing header row"));
    }

    let headers = disambiguate_headers(raw_headers.iter());
    debug!(columns = headers.len(), "Parsed header row");

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        // Line 1 is the header
        let line = index + 2;
        let row = result.map_err(|e| ScreenError::input(path, format!("CSV parse error on line {}: {}", line, e)))?;

        if row.len() > headers.len() {
            return Err(ScreenError::input(
                path,
                format!(
                    "line {} has {} fields but the header has {}",
                    line,
                    row.len(),
                    headers.len()
                ),
            ));
        }

        let mut record = Record::new();
        for (i, column) in headers.iter().enumerate() {
            let value = row.get(i).filter(|v| !v.is_empty()).map(str::to_string);
            record.set(column.clone(), value);
        }
        records.push(record);
    }

    Ok(Table { headers, records })
}

/// Renames repeated header names to `Name.1`, `Name.2`, ... so no column is shadowed
fn disambiguate_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers: Vec<String> = Vec::new();

    for (i, name) in raw.enumerate() {
        let name = if i == 0 { name.trim_start_matches('\u{feff}') } else { name };
        let mut candidate = name.to_string();
        while headers.contains(&candidate) {
            let counter = seen.entry(name.to_string()).or_insert(0);
            *counter += 1;
            candidate = format!("{}.{}", name, counter);
        }
        headers.push(candidate);
    }

    headers
}
