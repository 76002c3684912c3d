//! Operation identity, per-operation timings, and the paired report.

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// The six benchmarked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FindOne,
    FindMany,
    InsertMany,
    AggregateSum,
    UpdateMany,
    DeleteMany,
}

/// The fixed execution order.
///
/// Order matters: update-many and delete-many act on the scratch rows that
/// insert-many created, and insert-many consumes the records find-many
/// materialized.
pub const OPERATIONS: [Operation; 6] = [
    Operation::FindOne,
    Operation::FindMany,
    Operation::InsertMany,
    Operation::AggregateSum,
    Operation::UpdateMany,
    Operation::DeleteMany,
];

impl Operation {
    /// Console phrase used in the per-operation output line.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::FindOne => "find one record",
            Operation::FindMany => "find many records",
            Operation::InsertMany => "insert many records",
            Operation::AggregateSum => "sum aggregate",
            Operation::UpdateMany => "update many records",
            Operation::DeleteMany => "delete many records",
        }
    }

    /// Compact label used on chart axes.
    pub fn short(&self) -> &'static str {
        match self {
            Operation::FindOne => "FindOne",
            Operation::FindMany => "FindMany",
            Operation::InsertMany => "InsertMany",
            Operation::AggregateSum => "AggSum",
            Operation::UpdateMany => "UpdateMany",
            Operation::DeleteMany => "DeleteMany",
        }
    }

    /// File-name-safe identifier used for chart output.
    pub fn slug(&self) -> &'static str {
        match self {
            Operation::FindOne => "find_one",
            Operation::FindMany => "find_many",
            Operation::InsertMany => "insert_many",
            Operation::AggregateSum => "aggregate_sum",
            Operation::UpdateMany => "update_many",
            Operation::DeleteMany => "delete_many",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded measurement: an operation and its elapsed wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct OpTiming {
    pub operation: Operation,
    pub duration: Duration,
}

impl OpTiming {
    pub fn new(operation: Operation, duration: Duration) -> Self {
        Self {
            operation,
            duration,
        }
    }

    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

/// The ordered duration sequence from one store's pass.
#[derive(Debug, Clone)]
pub struct StoreTimings {
    store: String,
    timings: Vec<OpTiming>,
}

impl StoreTimings {
    pub fn new(store: impl Into<String>, timings: Vec<OpTiming>) -> Self {
        Self {
            store: store.into(),
            timings,
        }
    }

    /// The store label, e.g. `"MongoDB"`.
    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn timings(&self) -> &[OpTiming] {
        &self.timings
    }
}

/// Two position-aligned duration sequences, one per store.
///
/// Construction validates the pairing invariant: equal length and matching
/// operation identity at every index. Pairwise accessors are meaningless
/// without it, so an unvalidated report cannot exist.
#[derive(Debug, Clone)]
pub struct BenchReport {
    document: StoreTimings,
    relational: StoreTimings,
}

impl BenchReport {
    /// Pair the two passes, rejecting sequences that are not comparable.
    pub fn paired(document: StoreTimings, relational: StoreTimings) -> Result<Self> {
        if document.timings.len() != relational.timings.len() {
            return Err(Error::MismatchedReport(format!(
                "{} recorded {} operations, {} recorded {}",
                document.store,
                document.timings.len(),
                relational.store,
                relational.timings.len(),
            )));
        }
        for (a, b) in document.timings.iter().zip(&relational.timings) {
            if a.operation != b.operation {
                return Err(Error::MismatchedReport(format!(
                    "operation mismatch: {} vs {}",
                    a.operation, b.operation,
                )));
            }
        }
        Ok(Self {
            document,
            relational,
        })
    }

    pub fn document(&self) -> &StoreTimings {
        &self.document
    }

    pub fn relational(&self) -> &StoreTimings {
        &self.relational
    }

    /// Iterate the paired measurements in operation order.
    pub fn rows(&self) -> impl Iterator<Item = (Operation, f64, f64)> + '_ {
        self.document
            .timings
            .iter()
            .zip(&self.relational.timings)
            .map(|(a, b)| (a.operation, a.seconds(), b.seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timings(store: &str, ops: &[Operation]) -> StoreTimings {
        StoreTimings::new(
            store,
            ops.iter()
                .map(|op| OpTiming::new(*op, Duration::from_millis(1)))
                .collect(),
        )
    }

    #[test]
    fn pairs_matching_sequences() {
        let report = BenchReport::paired(
            timings("MongoDB", &OPERATIONS),
            timings("PostgreSQL", &OPERATIONS),
        )
        .unwrap();
        assert_eq!(report.rows().count(), 6);
        let ops: Vec<_> = report.rows().map(|(op, _, _)| op).collect();
        assert_eq!(ops, OPERATIONS);
    }

    #[test]
    fn rejects_unequal_lengths() {
        let err = BenchReport::paired(
            timings("MongoDB", &OPERATIONS),
            timings("PostgreSQL", &OPERATIONS[..5]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MismatchedReport(_)));
    }

    #[test]
    fn rejects_reordered_operations() {
        let mut reordered = OPERATIONS;
        reordered.swap(0, 1);
        let err = BenchReport::paired(
            timings("MongoDB", &OPERATIONS),
            timings("PostgreSQL", &reordered),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MismatchedReport(_)));
    }
}
