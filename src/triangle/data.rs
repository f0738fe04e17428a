//! Triangle value type and the cumulative transform

use std::fmt;

use serde::{Deserialize, Serialize};

/// A ragged loss-development triangle.
///
/// Row `r` holds the payment cells for origin year `base_year + r`; cell `c`
/// of that row covers development year `base_year + r + c`. Row lengths
/// decrease by exactly one per row, so row 0 spans the full width and the
/// last row has a single cell. Serializes as nested arrays.
///
/// A triangle is an immutable value once constructed: [`accumulate`] returns
/// a new triangle and leaves its input untouched.
///
/// [`accumulate`]: Triangle::accumulate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    rows: Vec<Vec<f64>>,
}

impl Triangle {
    /// Build a triangle directly from row data.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells in row-major order: left to right within a row, top row first.
    pub fn cells(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Replace every row by its left-to-right running sum, as a new triangle.
    ///
    /// This turns incremental payments per development period into the
    /// cumulative payments-to-date representation used for reserving
    /// analysis. Rows accumulate independently, and each output row gets
    /// freshly allocated storage, so the source triangle is unchanged.
    ///
    /// Not idempotent: accumulating an already-cumulative triangle
    /// double-integrates the rows. Callers accumulate exactly once per raw
    /// triangle.
    pub fn accumulate(&self) -> Triangle {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut total = 0.0;
                row.iter()
                    .map(|cell| {
                        total += cell;
                        total
                    })
                    .collect()
            })
            .collect();

        Triangle { rows }
    }
}

/// Flat `", "`-delimited cell list in row-major order, one line per triangle.
///
/// `f64`'s `Display` already renders the shortest decimal form with no
/// trailing fractional zeros and no scientific notation (`110` not `110.0`,
/// `170.5` not `170.50`), which is the report's cell format.
impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cell in self.cells() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Triangle {
        Triangle::from_rows(vec![vec![2.5, 4.0, 8.0], vec![1.0, 3.0], vec![9.0]])
    }

    #[test]
    fn test_accumulate_running_sums() {
        let accumulated = sample().accumulate();

        assert_eq!(
            accumulated.rows(),
            &[vec![2.5, 6.5, 14.5], vec![1.0, 4.0], vec![9.0]]
        );
    }

    #[test]
    fn test_accumulate_preserves_shape_and_row_totals() {
        let triangle = sample();
        let accumulated = triangle.accumulate();

        assert_eq!(accumulated.row_count(), triangle.row_count());
        for (raw, acc) in triangle.rows().iter().zip(accumulated.rows()) {
            assert_eq!(acc.len(), raw.len());
            // Last cumulative cell is the whole row's total
            assert_eq!(*acc.last().unwrap(), raw.iter().sum::<f64>());
        }
    }

    #[test]
    fn test_accumulate_leaves_source_unchanged() {
        let triangle = sample();
        let before = triangle.clone();

        let _ = triangle.accumulate();

        assert_eq!(triangle, before);
    }

    #[test]
    fn test_accumulate_is_not_idempotent() {
        let once = sample().accumulate();
        let twice = once.accumulate();

        assert_ne!(once, twice);
        // Double integration: 2.5, 4, 8 -> 2.5, 6.5, 14.5 -> 2.5, 9, 23.5
        assert_eq!(twice.rows()[0], vec![2.5, 9.0, 23.5]);
    }

    #[test]
    fn test_accumulate_empty_triangle() {
        let empty = Triangle::from_rows(Vec::new());
        assert!(empty.accumulate().is_empty());
    }

    #[test]
    fn test_display_flattens_row_major() {
        assert_eq!(sample().to_string(), "2.5, 4, 8, 1, 3, 9");
        assert_eq!(Triangle::from_rows(Vec::new()).to_string(), "");
    }

    #[test]
    fn test_display_strips_trailing_zeros() {
        let triangle = Triangle::from_rows(vec![vec![2.5, 4.0], vec![110.0]]);
        assert_eq!(triangle.to_string(), "2.5, 4, 110");
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "rows": [[2.5, 4.0, 8.0], [1.0, 3.0], [9.0]] })
        );
    }
}
