//! Wall-clock timing for single operation invocations.

use std::future::Future;
use std::time::{Duration, Instant};

/// Run a synchronous operation exactly once, returning its output and the
/// elapsed wall-clock time.
///
/// No retries and no timeout: a panicking or unbounded operation behaves
/// exactly as it would without the timer.
pub fn time<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = op();
    (value, start.elapsed())
}

/// Await a future exactly once, returning its output and the elapsed
/// wall-clock time.
///
/// Errors are part of the output, not swallowed: the caller decides what a
/// failed operation means for the run.
pub async fn time_future<F: Future>(fut: F) -> (F::Output, Duration) {
    let start = Instant::now();
    let value = fut.await;
    (value, start.elapsed())
}
