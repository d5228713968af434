//! Per-file accumulation of decoded records and the derived statistics.

use crate::record::{LineItem, Record, Sale, TypeTag};
use std::collections::HashMap;

/// Accumulates one file's worth of records, grouped by type tag.
///
/// An aggregator is scoped to a single file cycle. The watcher builds a
/// fresh one per file and drops it with the cycle, so state cannot leak
/// into the next report; callers that do reuse one across cycles must
/// call [`reset`](Aggregator::reset) between files.
///
/// Statistic queries are pure reads and valid on an empty aggregator.
#[derive(Debug, Default)]
pub struct Aggregator {
    /// Ingested records in arrival order, keyed by tag.
    records: HashMap<TypeTag, Vec<Record>>,
}

impl Aggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Aggregator::default()
    }

    /// Appends a record under its tag.
    ///
    /// `Unknown` records are absorbed without affecting any statistic.
    pub fn ingest(&mut self, record: Record) {
        self.records.entry(record.tag()).or_default().push(record);
    }

    /// Number of customer records ingested this cycle.
    pub fn client_count(&self) -> usize {
        self.count(TypeTag::Customer)
    }

    /// Number of salesperson records ingested this cycle.
    pub fn salesperson_count(&self) -> usize {
        self.count(TypeTag::Salesperson)
    }

    /// The priciest line item across all sales, or `None` when no sale
    /// was ingested this cycle.
    ///
    /// Items are scanned in flattened ingestion order and a price tie
    /// keeps the first item encountered, so the answer is deterministic
    /// for a given input file.
    pub fn most_expensive_sale(&self) -> Option<&LineItem> {
        let mut best: Option<&LineItem> = None;
        for item in self.sales().flat_map(|sale| sale.items.iter()) {
            if best.map_or(true, |b| item.price > b.price) {
                best = Some(item);
            }
        }
        best
    }

    /// The salesperson with the fewest sales and that count, or `None`
    /// when no sale was ingested this cycle.
    ///
    /// "Worst" means fewest sales closed, not lowest revenue: revenue
    /// says little without the profit margins this data does not carry.
    /// A tie on the count keeps the name that entered the file first.
    pub fn worst_salesperson(&self) -> Option<(&str, usize)> {
        // Vec keyed by first encounter keeps the tie-break stable.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for sale in self.sales() {
            match counts.iter_mut().find(|(name, _)| *name == sale.salesperson) {
                Some(entry) => entry.1 += 1,
                None => counts.push((&sale.salesperson, 1)),
            }
        }
        counts.into_iter().min_by_key(|&(_, count)| count)
    }

    /// Drops everything accumulated this cycle.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    fn count(&self, tag: TypeTag) -> usize {
        self.records.get(&tag).map_or(0, Vec::len)
    }

    fn sales(&self) -> impl Iterator<Item = &Sale> {
        self.records
            .get(&TypeTag::Sale)
            .into_iter()
            .flatten()
            .filter_map(|record| match record {
                Record::Sale(sale) => Some(sale),
                _ => None,
            })
    }
}
