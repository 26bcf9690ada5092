//! Column-typed source tables.
//!
//! An [`IndicatorTable`] is the loader-facing contract: named columns of
//! [`CellValue`]s with one row per (entity, stratum/category) combination
//! and one value column per year. Numeric coercion is tolerant in the way
//! yearly statistical exports require: text numbers may carry Romanian
//! decimal commas, thousands separators or placeholder markers, and
//! anything unparseable becomes a missing value rather than an error.

use crate::errors::{StatsError, StatsResult};

/// One table cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A numeric value
    Number(f64),
    /// A text value, possibly a formatted number
    Text(String),
    /// An explicitly empty cell
    Empty,
}

/// Placeholder strings exports use for values that were not collected
const MISSING_MARKERS: [&str; 4] = ["-", ":", "..", "..."];

impl CellValue {
    /// Numeric view of the cell.
    ///
    /// Numbers pass through when finite. Text is trimmed and parsed,
    /// accepting "1.234,5" style formatting; placeholder markers and
    /// unparseable text yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if v.is_finite() => Some(*v),
            CellValue::Number(_) | CellValue::Empty => None,
            CellValue::Text(s) => parse_numeric(s),
        }
    }

    /// Trimmed text view of the cell, `None` for numbers and empty cells
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.trim()),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// Parses a formatted number, returning `None` for anything unparseable
fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{a0}');
    if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
        return None;
    }
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .collect();
    let normalized = if compact.contains(',') {
        // "1.234,5": dots are thousands separators, the comma is the decimal mark
        compact.replace('.', "").replace(',', ".")
    } else {
        compact
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A year column of a table, identified by its 4-digit year token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearColumn<'a> {
    /// Full column name, e.g. "Anul 2021"
    pub name: &'a str,
    /// Parsed year
    pub year: i32,
}

/// A named source table with equally sized, named columns
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    name: String,
    columns: Vec<(String, Vec<CellValue>)>,
    n_rows: usize,
}

impl IndicatorTable {
    /// Builds a table from named columns.
    ///
    /// # Arguments
    /// * `name` - Table name, used in error messages
    /// * `columns` - Column name and cells, all columns equally long
    ///
    /// # Returns
    /// The table, or an error when no columns are given or lengths differ
    pub fn new(
        name: impl Into<String>,
        columns: Vec<(String, Vec<CellValue>)>,
    ) -> StatsResult<Self> {
        if columns.is_empty() {
            return Err(StatsError::EmptyInput { field: "columns" });
        }
        let n_rows = columns[0].1.len();
        for (_, cells) in &columns {
            if cells.len() != n_rows {
                return Err(StatsError::DimensionMismatch {
                    expected: n_rows,
                    got: cells.len(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            columns,
            n_rows,
        })
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Cells of the named column, if present
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, cells)| cells.as_slice())
    }

    /// Column names in table order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(col, _)| col.as_str())
    }

    /// Year columns in ascending year order.
    ///
    /// A column qualifies when its name starts with `prefix` and its last
    /// whitespace-separated token is a 4-digit year.
    pub fn year_columns(&self, prefix: &str) -> Vec<YearColumn<'_>> {
        let mut cols: Vec<YearColumn<'_>> = self
            .columns
            .iter()
            .filter_map(|(col, _)| {
                if !col.starts_with(prefix) {
                    return None;
                }
                let token = col.split_whitespace().last()?;
                let year: i32 = token.parse().ok()?;
                if (1000..=9999).contains(&year) {
                    Some(YearColumn { name: col, year })
                } else {
                    None
                }
            })
            .collect();
        cols.sort_by_key(|c| c.year);
        cols
    }

    /// Name of the year column whose year token equals `year`, if any
    pub fn find_year_column(&self, prefix: &str, year: &str) -> Option<&str> {
        self.year_columns(prefix)
            .into_iter()
            .find(|c| c.name.split_whitespace().last() == Some(year))
            .map(|c| c.name)
    }
}
