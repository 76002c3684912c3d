//! Store adapters for the two benchmarked backends.
//!
//! Each adapter implements the same six logical operations against its
//! backend's native call surface. The operations share one [`Workload`]
//! identity; the implementation strategies stay backend-native — the
//! document path bulk-inserts in one driver call while the relational
//! path iterates rows inside a transaction.
//!
//! [`Workload`]: crate::config::Workload

pub mod mongo;
pub mod postgres;

pub use mongo::MongoStore;
pub use postgres::PostgresStore;

use crate::error::Result;
use crate::record::SalesRecord;

/// The six benchmarked operations plus the seeding entry points.
///
/// Implementations run against a pre-populated primary dataset and a
/// throwaway scratch destination. Failures propagate untouched; the
/// harness never retries.
#[allow(async_fn_in_trait)]
pub trait StoreOps {
    /// Human-readable store label used in console lines and chart titles.
    fn label(&self) -> &'static str;

    /// Return the first primary record matching the workload filter.
    async fn find_one(&self) -> Result<Option<SalesRecord>>;

    /// Return all primary records matching the workload filter, fully
    /// materialized before the call returns.
    async fn find_many(&self) -> Result<Vec<SalesRecord>>;

    /// Clear the scratch destination, then insert the given records into
    /// it. The clear and the insert are not atomic as a pair.
    async fn insert_many(&self, records: &[SalesRecord]) -> Result<u64>;

    /// Sum the workload's numeric field across the primary dataset.
    async fn aggregate_sum(&self) -> Result<f64>;

    /// Bulk-update scratch records matching the workload filter, setting
    /// their order priority to high.
    async fn update_many(&self) -> Result<u64>;

    /// Clear the scratch destination, returning the number of records
    /// removed.
    async fn delete_many(&self) -> Result<u64>;

    /// Clear and repopulate the primary dataset. Not benchmarked.
    async fn seed(&self, records: &[SalesRecord]) -> Result<u64>;

    /// Number of records currently in the primary dataset. Not benchmarked.
    async fn count_primary(&self) -> Result<u64>;
}
