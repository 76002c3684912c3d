//! The sequential benchmark pass.

use std::time::Duration;

use tracing::{debug, info};

use crate::backends::StoreOps;
use crate::error::Result;
use crate::ops::{OpTiming, Operation, StoreTimings};
use crate::timer::time_future;

/// Run the six operations in their fixed order against one store,
/// printing the console line for each as it completes.
///
/// Strictly sequential: insert-many consumes the records find-many
/// materialized, and update-many and delete-many act on the scratch rows
/// insert-many created. Any operation failure aborts the pass.
pub async fn run_pass<S: StoreOps>(store: &S) -> Result<StoreTimings> {
    info!(store = store.label(), "starting benchmark pass");
    let mut timings = Vec::with_capacity(crate::ops::OPERATIONS.len());

    let (found, elapsed) = time_future(store.find_one()).await;
    found?;
    record(store.label(), Operation::FindOne, elapsed, &mut timings);

    let (matched, elapsed) = time_future(store.find_many()).await;
    let matched = matched?;
    record(store.label(), Operation::FindMany, elapsed, &mut timings);
    debug!(
        store = store.label(),
        records = matched.len(),
        "materialized result set"
    );

    let (inserted, elapsed) = time_future(store.insert_many(&matched)).await;
    let inserted = inserted?;
    record(store.label(), Operation::InsertMany, elapsed, &mut timings);
    debug!(store = store.label(), inserted, "scratch populated");

    let (total, elapsed) = time_future(store.aggregate_sum()).await;
    let total = total?;
    record(store.label(), Operation::AggregateSum, elapsed, &mut timings);
    debug!(store = store.label(), total, "aggregate computed");

    let (updated, elapsed) = time_future(store.update_many()).await;
    updated?;
    record(store.label(), Operation::UpdateMany, elapsed, &mut timings);

    let (deleted, elapsed) = time_future(store.delete_many()).await;
    deleted?;
    record(store.label(), Operation::DeleteMany, elapsed, &mut timings);

    Ok(StoreTimings::new(store.label(), timings))
}

fn record(store: &str, operation: Operation, elapsed: Duration, out: &mut Vec<OpTiming>) {
    println!(
        "Time for {} to {} is: {}",
        store,
        operation.label(),
        elapsed.as_secs_f64()
    );
    out.push(OpTiming::new(operation, elapsed));
}
