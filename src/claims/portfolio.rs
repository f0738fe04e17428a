//! Ordered per-product claims aggregation

use std::collections::HashMap;

use super::PaymentStore;
use crate::ingest::{PaymentRecord, RunStats};

/// All per-product payment stores for one run, plus the run-wide statistics
/// that fix the shared triangle dimensions.
///
/// Products iterate in first-seen order. That order is tracked in an
/// explicit key sequence next to the map rather than relying on any map
/// iteration order, so report output is deterministic.
#[derive(Debug, Default)]
pub struct ClaimsPortfolio {
    stores: HashMap<String, PaymentStore>,
    // First-seen product order
    order: Vec<String>,
    stats: RunStats,
}

impl ClaimsPortfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one validated record into the owning product's store and into
    /// the run statistics. The store is created lazily on a product's first
    /// record.
    pub fn add(&mut self, record: &PaymentRecord) {
        if !self.stores.contains_key(&record.product) {
            self.order.push(record.product.clone());
        }

        self.stores
            .entry(record.product.clone())
            .or_default()
            .insert(record.origin_year, record.development_year, record.payment);

        self.stats.observe(record.origin_year, record.development_year);
    }

    /// Product names in first-seen order.
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Products and their stores in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaymentStore)> {
        self.order
            .iter()
            .filter_map(|product| self.stores.get(product).map(|store| (product.as_str(), store)))
    }

    pub fn store(&self, product: &str) -> Option<&PaymentStore> {
        self.stores.get(product)
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn product_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
