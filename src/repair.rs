//! Detection and repair of the producer's column-shift defect
//!
//! The simulation that writes `learning_results.csv` has a known bug: column
//! values land some positions away from their declared headers, so
//! declared-name lookups retrieve semantically wrong data. The defect has a
//! fixed, observed shape, captured here as a named, versioned
//! [`ShiftSignature`] of source-position → target-field pairs. This is not a
//! general CSV-repair facility; an input corrupted in any other shape is out
//! of contract.

use crate::{
    error::{Error, Result},
    table::{RawTable, ReportTable, parse_numeric},
};

/// Column inspected by the shift detector.
pub const DETECTOR_COLUMN: &str = "HGAScore";

/// Divisor converting the producer's integer-scaled epsilon to [0, 1].
const EPSILON_SCALE: f64 = 1000.0;

/// Semantic field a source position maps to during repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    QLearningScore,
    HgaScore,
    Winner,
    /// Exploration rate, written by the producer multiplied by 1000.
    EpsilonScaled,
    GaGeneration,
    GaBestFitness,
}

/// One source-position → target-field pair of a shift signature.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub source_position: usize,
    pub target: TargetField,
}

/// A named, versioned description of one observed shift defect.
///
/// New shift variants become new signatures; the repair logic itself never
/// changes for them.
#[derive(Debug, Clone, Copy)]
pub struct ShiftSignature {
    pub name: &'static str,
    pub version: u32,
    pub mappings: &'static [FieldMapping],
}

/// The one shift shape observed in the producer's output: every semantic
/// field lives at a fixed position, and the written `GameNumber` column is
/// unreliable.
pub const PRODUCER_SHIFT_V1: ShiftSignature = ShiftSignature {
    name: "producer-shift",
    version: 1,
    mappings: &[
        FieldMapping {
            source_position: 0,
            target: TargetField::QLearningScore,
        },
        FieldMapping {
            source_position: 1,
            target: TargetField::HgaScore,
        },
        FieldMapping {
            source_position: 2,
            target: TargetField::Winner,
        },
        FieldMapping {
            source_position: 4,
            target: TargetField::EpsilonScaled,
        },
        FieldMapping {
            source_position: 5,
            target: TargetField::GaGeneration,
        },
        FieldMapping {
            source_position: 6,
            target: TargetField::GaBestFitness,
        },
    ],
};

/// Decide whether the table's columns are offset from their declared headers.
///
/// The column declared as `HGAScore` must be numeric in a well-formed file.
/// One non-numeric, non-empty cell anywhere in it classifies the whole table
/// as shifted. Empty cells are missing values and never trigger detection.
///
/// # Errors
///
/// Returns [`Error::MissingColumn`] when the file has no `HGAScore` column
/// at all; the input contract requires it.
pub fn detect_shift(raw: &RawTable) -> Result<bool> {
    let cells = raw
        .column(DETECTOR_COLUMN)
        .ok_or_else(|| Error::MissingColumn {
            name: DETECTOR_COLUMN.to_string(),
        })?;

    Ok(cells.iter().any(|cell| {
        let trimmed = cell.trim();
        !trimmed.is_empty() && trimmed.parse::<f64>().is_err()
    }))
}

/// Rebuild the table by reading columns positionally per the signature,
/// ignoring declared headers.
///
/// Numeric cells that fail to parse become the explicit missing marker;
/// repair itself never fails. `GameNumber` is regenerated as the sequence
/// 1..=N in original row order. The output always carries all seven semantic
/// columns and exactly as many rows as the input.
pub fn repair(raw: &RawTable, signature: &ShiftSignature) -> ReportTable {
    let rows = raw.len();

    let mut q_learning_score = vec![None; rows];
    let mut hga_score = vec![None; rows];
    let mut winner = vec![None; rows];
    let mut q_learning_epsilon = vec![None; rows];
    let mut ga_generation = vec![None; rows];
    let mut ga_best_fitness = vec![None; rows];

    for mapping in signature.mappings {
        let position = mapping.source_position;
        match mapping.target {
            TargetField::QLearningScore => q_learning_score = numeric_positional(raw, position),
            TargetField::HgaScore => hga_score = numeric_positional(raw, position),
            TargetField::Winner => winner = categorical_positional(raw, position),
            TargetField::EpsilonScaled => q_learning_epsilon = epsilon_positional(raw, position),
            TargetField::GaGeneration => ga_generation = numeric_positional(raw, position),
            TargetField::GaBestFitness => ga_best_fitness = numeric_positional(raw, position),
        }
    }

    ReportTable {
        game_number: (1..=rows).map(|n| n as f64).collect(),
        q_learning_score,
        hga_score,
        q_learning_epsilon,
        winner: Some(winner),
        ga_generation: Some(ga_generation),
        ga_best_fitness: Some(ga_best_fitness),
    }
}

fn numeric_positional(raw: &RawTable, position: usize) -> Vec<Option<f64>> {
    (0..raw.len())
        .map(|row| raw.cell(row, position).and_then(parse_numeric))
        .collect()
}

fn categorical_positional(raw: &RawTable, position: usize) -> Vec<Option<String>> {
    (0..raw.len())
        .map(|row| {
            raw.cell(row, position).and_then(|cell| {
                let trimmed = cell.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        })
        .collect()
}

/// Epsilon gets a column-level fallback on top of per-cell coercion: when
/// the source position is absent from the file, or no cell in it parses,
/// the whole column becomes a constant 0.
fn epsilon_positional(raw: &RawTable, position: usize) -> Vec<Option<f64>> {
    if position >= raw.width() {
        return vec![Some(0.0); raw.len()];
    }

    let parsed: Vec<Option<f64>> = (0..raw.len())
        .map(|row| {
            raw.cell(row, position)
                .and_then(parse_numeric)
                .map(|value| value / EPSILON_SCALE)
        })
        .collect();

    if !parsed.is_empty() && parsed.iter().all(Option::is_none) {
        return vec![Some(0.0); raw.len()];
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIFTED_HEADERS: [&str; 7] = [
        "GameNumber",
        "QLearningScore",
        "HGAScore",
        "Winner",
        "QLearningEpsilon",
        "GAGeneration",
        "GABestFitness",
    ];

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn shifted_rows(rows: &[&[&str]]) -> RawTable {
        raw(&SHIFTED_HEADERS, rows)
    }

    #[test]
    fn fully_numeric_detector_column_is_well_formed() {
        let table = shifted_rows(&[
            &["1", "10", "20", "HGA", "900", "1", "50"],
            &["2", "11", "21", "Draw", "800", "1", "51"],
        ]);
        assert!(!detect_shift(&table).unwrap());
    }

    #[test]
    fn one_textual_cell_classifies_the_table_as_shifted() {
        let table = shifted_rows(&[
            &["10", "20", "Q-Learning", "x", "900", "1", "50"],
            &["11", "21", "33", "x", "800", "1", "51"],
        ]);
        assert!(detect_shift(&table).unwrap());
    }

    #[test]
    fn empty_cells_do_not_trigger_detection() {
        let table = shifted_rows(&[&["1", "10", "", "HGA", "900", "1", "50"]]);
        assert!(!detect_shift(&table).unwrap());
    }

    #[test]
    fn missing_detector_column_is_an_error() {
        let table = raw(&["A", "B"], &[&["1", "2"]]);
        let err = detect_shift(&table).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref name } if name == DETECTOR_COLUMN));
    }

    #[test]
    fn repair_preserves_row_count_and_regenerates_game_numbers() {
        let table = shifted_rows(&[
            &["10", "20", "Q-Learning", "x", "900", "1", "50"],
            &["11", "21", "HGA", "x", "800", "1", "51"],
            &["12", "22", "Draw", "x", "700", "2", "52"],
        ]);
        let report = repair(&table, &PRODUCER_SHIFT_V1);
        assert_eq!(report.len(), table.len());
        assert_eq!(report.game_number, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn repair_maps_the_worked_example_row() {
        // One row positioned as the producer writes it when shifted.
        let table = shifted_rows(&[&["101", "202", "Draw", "0", "199", "3", "55"]]);
        let report = repair(&table, &PRODUCER_SHIFT_V1);

        assert_eq!(report.q_learning_score, vec![Some(101.0)]);
        assert_eq!(report.hga_score, vec![Some(202.0)]);
        assert_eq!(report.winner, Some(vec![Some("Draw".to_string())]));
        assert_eq!(report.q_learning_epsilon, vec![Some(0.199)]);
        assert_eq!(report.ga_generation, Some(vec![Some(3.0)]));
        assert_eq!(report.ga_best_fitness, Some(vec![Some(55.0)]));
        assert_eq!(report.game_number, vec![1.0]);
    }

    #[test]
    fn repair_coerces_unparsable_numerics_to_missing() {
        let table = shifted_rows(&[&["junk", "20", "HGA", "x", "500", "bad", "50"]]);
        let report = repair(&table, &PRODUCER_SHIFT_V1);

        assert_eq!(report.q_learning_score, vec![None]);
        assert_eq!(report.hga_score, vec![Some(20.0)]);
        assert_eq!(report.ga_generation, Some(vec![None]));
    }

    #[test]
    fn epsilon_is_divided_by_one_thousand() {
        let table = shifted_rows(&[
            &["10", "20", "HGA", "x", "199", "1", "50"],
            &["11", "21", "HGA", "x", "1000", "1", "51"],
        ]);
        let report = repair(&table, &PRODUCER_SHIFT_V1);
        assert_eq!(report.q_learning_epsilon, vec![Some(0.199), Some(1.0)]);
    }

    #[test]
    fn absent_epsilon_position_falls_back_to_zero_for_all_rows() {
        // Only four positions wide: position 4 does not exist in the file.
        let table = raw(
            &["A", "B", "C", "D"],
            &[&["10", "20", "Q-Learning", "x"], &["11", "21", "HGA", "x"]],
        );
        let report = repair(&table, &PRODUCER_SHIFT_V1);
        assert_eq!(report.q_learning_epsilon, vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn wholly_unparsable_epsilon_column_falls_back_to_zero() {
        let table = shifted_rows(&[
            &["10", "20", "HGA", "x", "oops", "1", "50"],
            &["11", "21", "HGA", "x", "nope", "1", "51"],
        ]);
        let report = repair(&table, &PRODUCER_SHIFT_V1);
        assert_eq!(report.q_learning_epsilon, vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn partially_parsable_epsilon_column_stays_row_local() {
        let table = shifted_rows(&[
            &["10", "20", "HGA", "x", "250", "1", "50"],
            &["11", "21", "HGA", "x", "oops", "1", "51"],
        ]);
        let report = repair(&table, &PRODUCER_SHIFT_V1);
        assert_eq!(report.q_learning_epsilon, vec![Some(0.25), None]);
    }

    #[test]
    fn repair_of_empty_table_yields_empty_columns() {
        let table = shifted_rows(&[]);
        let report = repair(&table, &PRODUCER_SHIFT_V1);
        assert!(report.is_empty());
        assert_eq!(report.winner, Some(vec![]));
    }
}
