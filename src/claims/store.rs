//! Sparse per-product payment storage

use std::collections::HashMap;

/// Sparse mapping from (origin year, development year) to a payment amount
/// for a single product.
///
/// The store records payments exactly as ingested: a later insert for the
/// same year pair replaces the earlier value (last-write-wins), and lookups
/// distinguish "never recorded" from a reported zero payment. Defaulting
/// missing cells to zero is triangle-construction policy, not store policy.
#[derive(Debug, Clone, Default)]
pub struct PaymentStore {
    // origin year -> development year -> payment
    payments: HashMap<i32, HashMap<i32, f64>>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payment, replacing any prior value at the same year pair.
    ///
    /// No validation is applied: year ordering and payment sign are accepted
    /// as-is, and insertion always succeeds.
    pub fn insert(&mut self, origin_year: i32, development_year: i32, amount: f64) {
        self.payments
            .entry(origin_year)
            .or_default()
            .insert(development_year, amount);
    }

    /// Look up the payment for a year pair, if one was ever recorded.
    pub fn get(&self, origin_year: i32, development_year: i32) -> Option<f64> {
        self.payments
            .get(&origin_year)?
            .get(&development_year)
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}
