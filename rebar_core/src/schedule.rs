//! # Rebar Schedule
//!
//! Row data for bending schedules. Rendering the table is left to the
//! caller; this module only collects the values and formats cells.
//!
//! Every row carries the length of one piece and the total weight of all
//! pieces, so rows from different element kinds can be summed directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{RebarError, RebarResult};
use crate::reinforcement::{Bar, SpacedBars, Stirrup};

/// Placeholder for cells with no value
pub const EMPTY_CELL: &str = "-";

// ============================================================================
// Columns
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleColumn {
    Denomination,
    Length,
    Diameter,
    Weight,
    Quantity,
    Spacing,
    TotalLength,
}

impl ScheduleColumn {
    pub const ALL: [ScheduleColumn; 7] = [
        ScheduleColumn::Denomination,
        ScheduleColumn::Length,
        ScheduleColumn::Diameter,
        ScheduleColumn::Weight,
        ScheduleColumn::Quantity,
        ScheduleColumn::Spacing,
        ScheduleColumn::TotalLength,
    ];

    /// Columns extracted when none are requested
    pub const DEFAULT: [ScheduleColumn; 6] = [
        ScheduleColumn::Denomination,
        ScheduleColumn::Length,
        ScheduleColumn::Diameter,
        ScheduleColumn::Weight,
        ScheduleColumn::Quantity,
        ScheduleColumn::Spacing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ScheduleColumn::Denomination => "Denomination",
            ScheduleColumn::Length => "Length",
            ScheduleColumn::Diameter => "Diameter",
            ScheduleColumn::Weight => "Weight",
            ScheduleColumn::Quantity => "Quantity",
            ScheduleColumn::Spacing => "Spacing",
            ScheduleColumn::TotalLength => "Total length",
        }
    }

    /// Parse a column label, case-insensitive
    pub fn from_str_flexible(s: &str) -> RebarResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "denomination" | "position" => Ok(ScheduleColumn::Denomination),
            "length" => Ok(ScheduleColumn::Length),
            "diameter" => Ok(ScheduleColumn::Diameter),
            "weight" => Ok(ScheduleColumn::Weight),
            "quantity" => Ok(ScheduleColumn::Quantity),
            "spacing" => Ok(ScheduleColumn::Spacing),
            "total_length" => Ok(ScheduleColumn::TotalLength),
            _ => Err(RebarError::invalid_input(
                "column",
                s,
                "Expected one of: denomination, length, diameter, weight, quantity, spacing, total length",
            )),
        }
    }
}

impl fmt::Display for ScheduleColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub denomination: Option<String>,
    /// Developed length of one piece (m)
    pub length: f64,
    /// m
    pub diameter: f64,
    /// Weight of all pieces (kg)
    pub weight: f64,
    pub quantity: usize,
    /// Only set for spaced elements
    pub spacing: Option<f64>,
}

impl ScheduleRow {
    pub fn total_length(&self) -> f64 {
        self.length * self.quantity as f64
    }

    /// Formatted cell for one column.
    pub fn cell(&self, column: ScheduleColumn) -> String {
        match column {
            ScheduleColumn::Denomination => self
                .denomination
                .clone()
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ScheduleColumn::Length => format!("{:.2}", self.length),
            ScheduleColumn::Diameter => format!("{}", self.diameter),
            ScheduleColumn::Weight => format!("{:.2}", self.weight),
            ScheduleColumn::Quantity => self.quantity.to_string(),
            ScheduleColumn::Spacing => self
                .spacing
                .map(|s| s.to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            ScheduleColumn::TotalLength => format!("{:.2}", self.total_length()),
        }
    }

    /// Cells for the requested labels, `"-"` for labels that name no
    /// column.
    pub fn extract(&self, labels: &[&str]) -> Vec<String> {
        labels
            .iter()
            .map(|label| match ScheduleColumn::from_str_flexible(label) {
                Ok(column) => self.cell(column),
                Err(_) => EMPTY_CELL.to_string(),
            })
            .collect()
    }

    /// Cells for [`ScheduleColumn::DEFAULT`]
    pub fn extract_default(&self) -> Vec<String> {
        ScheduleColumn::DEFAULT.iter().map(|c| self.cell(*c)).collect()
    }
}

impl From<&Bar> for ScheduleRow {
    fn from(bar: &Bar) -> Self {
        ScheduleRow {
            denomination: bar.denomination().map(str::to_string),
            length: bar.length(),
            diameter: bar.diameter(),
            weight: bar.weight(),
            quantity: 1,
            spacing: None,
        }
    }
}

impl From<&Stirrup> for ScheduleRow {
    fn from(stirrup: &Stirrup) -> Self {
        ScheduleRow {
            denomination: stirrup.denomination().map(str::to_string),
            length: stirrup.length(),
            diameter: stirrup.diameter(),
            weight: stirrup.weight() * stirrup.quantity() as f64,
            quantity: stirrup.quantity(),
            spacing: Some(stirrup.spacing()),
        }
    }
}

impl From<&SpacedBars> for ScheduleRow {
    fn from(bars: &SpacedBars) -> Self {
        ScheduleRow {
            denomination: bars.denomination().map(str::to_string),
            length: bars.template().length(),
            diameter: bars.diameter(),
            weight: bars.weight(),
            quantity: bars.quantity(),
            spacing: Some(bars.spacing()),
        }
    }
}

/// Merge rows that share a denomination, keeping first-seen order.
///
/// Quantities and weights add up; length, diameter and spacing come from
/// the first row of each denomination. Rows without a denomination are
/// never merged.
pub fn merge_rows(rows: impl IntoIterator<Item = ScheduleRow>) -> Vec<ScheduleRow> {
    let mut merged: Vec<ScheduleRow> = Vec::new();
    for row in rows {
        let existing = row.denomination.as_ref().and_then(|name| {
            merged
                .iter()
                .position(|r| r.denomination.as_ref() == Some(name))
        });
        match existing {
            Some(i) => {
                merged[i].quantity += row.quantity;
                merged[i].weight += row.weight;
            }
            None => merged.push(row),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::approx_eq;
    use crate::reinforcement::{BarInput, SpacedBarsInput, StirrupInput};

    fn row() -> ScheduleRow {
        ScheduleRow {
            denomination: Some("#1".to_string()),
            length: 4.15,
            diameter: 0.012,
            weight: 3.684,
            quantity: 1,
            spacing: None,
        }
    }

    #[test]
    fn test_extract_default() {
        assert_eq!(
            row().extract_default(),
            vec!["#1", "4.15", "0.012", "3.68", "1", "-"]
        );
    }

    #[test]
    fn test_extract_unknown_label() {
        assert_eq!(
            row().extract(&["diameter", "color", "Total length"]),
            vec!["0.012", "-", "4.15"]
        );
    }

    #[test]
    fn test_column_names() {
        for column in ScheduleColumn::ALL {
            assert_eq!(ScheduleColumn::from_str_flexible(column.display_name()).unwrap(), column);
        }
        assert_eq!(
            ScheduleColumn::from_str_flexible("POSITION").unwrap(),
            ScheduleColumn::Denomination
        );
        assert!(ScheduleColumn::from_str_flexible("color").is_err());
    }

    #[test]
    fn test_from_bar() {
        let input = BarInput {
            denomination: Some("#3".to_string()),
            ..BarInput::new(4.0, 0.012)
        };
        let bar = Bar::new(input);
        let row = ScheduleRow::from(&bar);
        assert_eq!(row.quantity, 1);
        assert_eq!(row.denomination.as_deref(), Some("#3"));
        assert!(approx_eq(row.weight, bar.weight()));
        assert_eq!(row.cell(ScheduleColumn::Spacing), "-");
    }

    #[test]
    fn test_from_stirrup() {
        let stirrup = Stirrup::new(StirrupInput::new(0.2, 0.4, 0.008, 3.0, 0.15));
        let row = ScheduleRow::from(&stirrup);
        assert_eq!(row.quantity, 21);
        assert!(approx_eq(row.weight, stirrup.weight() * 21.0));
        assert_eq!(row.spacing, Some(0.15));
        assert_eq!(row.cell(ScheduleColumn::Denomination), "-");
    }

    #[test]
    fn test_from_spaced_bars() {
        let bars = SpacedBars::new(SpacedBarsInput::new(3.3, 2.0, 0.01, 0.1));
        let row = ScheduleRow::from(&bars);
        assert_eq!(row.quantity, bars.quantity());
        assert!(approx_eq(row.weight, bars.weight()));
        assert!(approx_eq(row.total_length(), bars.template().length() * bars.quantity() as f64));
    }

    #[test]
    fn test_merge_rows() {
        let mut other = row();
        other.quantity = 2;
        other.weight = 7.0;
        let unnamed = ScheduleRow {
            denomination: None,
            ..row()
        };
        let merged = merge_rows(vec![row(), unnamed.clone(), other, unnamed]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].quantity, 3);
        assert!(approx_eq(merged[0].weight, 10.684));
    }
}
