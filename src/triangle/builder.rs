//! Dense triangle materialization from a sparse payment store

use crate::claims::PaymentStore;
use crate::triangle::Triangle;

/// Materialize the ordinary (incremental) triangle for one product.
///
/// `base_year` and `span` come from the run-wide ingestion statistics, not
/// from this store's own data, so every product's triangle shares the same
/// dimensions and row alignment. Row `r` covers origin year `base_year + r`
/// and has `span - r` cells; cells with no recorded payment default to 0.0.
///
/// A store with no data in `[base_year, base_year + span)` yields an
/// all-zero triangle of the requested shape, and payments outside that
/// window are silently ignored. `span == 0` yields an empty triangle;
/// negative base years are legal.
pub fn build(store: &PaymentStore, base_year: i32, span: usize) -> Triangle {
    let rows = (0..span)
        .map(|r| {
            let origin = base_year + r as i32;
            (0..span - r)
                .map(|c| store.get(origin, origin + c as i32).unwrap_or(0.0))
                .collect()
        })
        .collect();

    Triangle::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp_store() -> PaymentStore {
        let mut store = PaymentStore::new();
        store.insert(1992, 1992, 110.0);
        store.insert(1992, 1993, 170.0);
        store.insert(1993, 1993, 200.0);
        store
    }

    #[test]
    fn test_rows_shrink_by_one() {
        let triangle = build(&PaymentStore::new(), 2000, 5);

        assert_eq!(triangle.row_count(), 5);
        for (r, row) in triangle.rows().iter().enumerate() {
            assert_eq!(row.len(), 5 - r);
        }
    }

    #[test]
    fn test_known_payments_land_in_their_cells() {
        let triangle = build(&comp_store(), 1990, 4);

        assert_eq!(
            triangle.rows(),
            &[
                vec![0.0, 0.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0],
                vec![110.0, 170.0],
                vec![200.0],
            ]
        );
    }

    #[test]
    fn test_empty_store_builds_all_zero_triangle() {
        let triangle = build(&PaymentStore::new(), 1990, 3);

        assert_eq!(triangle.row_count(), 3);
        assert!(triangle.cells().all(|cell| cell == 0.0));
    }

    #[test]
    fn test_data_outside_window_ignored() {
        // Store data lies entirely after the requested window
        let triangle = build(&comp_store(), 1980, 4);

        assert_eq!(triangle.row_count(), 4);
        assert!(triangle.cells().all(|cell| cell == 0.0));
    }

    #[test]
    fn test_zero_span_builds_empty_triangle() {
        let triangle = build(&comp_store(), 1990, 0);
        assert!(triangle.is_empty());
    }

    #[test]
    fn test_negative_base_year() {
        let mut store = PaymentStore::new();
        store.insert(-10, -9, 7.5);

        let triangle = build(&store, -10, 2);
        assert_eq!(triangle.rows(), &[vec![0.0, 7.5], vec![0.0]]);
    }

    #[test]
    fn test_end_to_end_accumulated_example() {
        let accumulated = build(&comp_store(), 1990, 4).accumulate();

        assert_eq!(
            accumulated.rows(),
            &[
                vec![0.0, 0.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0],
                vec![110.0, 280.0],
                vec![200.0],
            ]
        );
    }
}
