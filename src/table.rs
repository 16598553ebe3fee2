//! Tabular data structures for the loaded and repaired game log
//!
//! [`RawTable`] holds the file exactly as parsed: declared headers plus rows
//! of string fields, positionally significant. [`ReportTable`] is the typed,
//! column-oriented form consumed by analysis and charting, produced either by
//! validating a well-formed table or by repairing a shifted one.

use crate::error::{Error, Result};

/// Coerce a single cell to a numeric value.
///
/// Empty (or whitespace-only) cells are treated as missing rather than
/// malformed, matching how the producer writes absent fields.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// The game log as loaded: declared headers and rows of string fields.
///
/// Headers are whitespace-trimmed at construction because all downstream
/// lookups match columns by exact name. Rows may be ragged; a cell that is
/// absent from a short row reads as missing.
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from declared headers and rows, trimming header names.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers = headers.into_iter().map(|h| h.trim().to_string()).collect();
        Self { headers, rows }
    }

    /// Declared column names, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of positional columns: the widest of the header row and any
    /// data row. A source position at or beyond this width is absent from
    /// the file entirely.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(self.headers.len())
    }

    /// Zero-based index of a declared column name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// All cells of a column looked up by declared name. Cells missing from
    /// ragged rows read as empty strings.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map_or("", String::as_str))
                .collect(),
        )
    }

    /// A single cell by row and positional column index.
    pub fn cell(&self, row: usize, position: usize) -> Option<&str> {
        self.rows.get(row)?.get(position).map(String::as_str)
    }
}

/// The typed table all charts and statistics consume.
///
/// Score and epsilon cells that could not be parsed carry the explicit
/// missing marker `None`; they are never left as raw text. The three
/// trailing columns are optional as whole columns: a well-formed source file
/// simply may not have them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub game_number: Vec<f64>,
    pub q_learning_score: Vec<Option<f64>>,
    pub hga_score: Vec<Option<f64>>,
    pub q_learning_epsilon: Vec<Option<f64>>,
    pub winner: Option<Vec<Option<String>>>,
    pub ga_generation: Option<Vec<Option<f64>>>,
    pub ga_best_fitness: Option<Vec<Option<f64>>>,
}

impl ReportTable {
    /// Number of games in the table.
    pub fn len(&self) -> usize {
        self.game_number.len()
    }

    /// Whether the table has no games.
    pub fn is_empty(&self) -> bool {
        self.game_number.is_empty()
    }

    /// Build the typed table from a well-formed raw table, reading columns
    /// by their declared names.
    ///
    /// `GameNumber`, `QLearningScore`, `HGAScore` and `QLearningEpsilon` are
    /// required because the two unconditional charts assume them; `Winner`,
    /// `GAGeneration` and `GABestFitness` are optional. Numeric cells get
    /// per-cell missing coercion. An unparsable `GameNumber` cell falls back
    /// to its 1-based row index so the row stays plottable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if a required column is absent.
    pub fn from_declared(raw: &RawTable) -> Result<Self> {
        let game_number = required_column(raw, "GameNumber")?
            .iter()
            .enumerate()
            .map(|(row, cell)| parse_numeric(cell).unwrap_or((row + 1) as f64))
            .collect();

        let q_learning_score = numeric_cells(&required_column(raw, "QLearningScore")?);
        let hga_score = numeric_cells(&required_column(raw, "HGAScore")?);
        // The declared epsilon column is already in [0, 1]; only the shifted
        // producer writes the integer-scaled form.
        let q_learning_epsilon = numeric_cells(&required_column(raw, "QLearningEpsilon")?);

        let winner = raw.column("Winner").map(|cells| categorical_cells(&cells));
        let ga_generation = raw.column("GAGeneration").map(|cells| numeric_cells(&cells));
        let ga_best_fitness = raw
            .column("GABestFitness")
            .map(|cells| numeric_cells(&cells));

        Ok(Self {
            game_number,
            q_learning_score,
            hga_score,
            q_learning_epsilon,
            winner,
            ga_generation,
            ga_best_fitness,
        })
    }
}

fn required_column<'a>(raw: &'a RawTable, name: &str) -> Result<Vec<&'a str>> {
    raw.column(name).ok_or_else(|| Error::MissingColumn {
        name: name.to_string(),
    })
}

/// Coerce a column of cells to numeric options.
pub(crate) fn numeric_cells(cells: &[&str]) -> Vec<Option<f64>> {
    cells.iter().map(|cell| parse_numeric(cell)).collect()
}

/// Keep categorical cells as text; empty cells become missing.
pub(crate) fn categorical_cells(cells: &[&str]) -> Vec<Option<String>> {
    cells
        .iter()
        .map(|cell| {
            let trimmed = cell.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
