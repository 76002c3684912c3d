//! Harness tests with stub adapters; no live database required.

use std::time::Duration;

use storebench::{
    fixtures, report, run_pass, BenchReport, Error, OpTiming, Result, SalesRecord, StoreOps,
    StoreTimings, OPERATIONS,
};

/// Stub adapter with a fixed artificial delay per operation.
struct StubStore {
    label: &'static str,
    delay: Duration,
    fail_find_one: bool,
}

impl StubStore {
    fn new(label: &'static str, delay: Duration) -> Self {
        Self {
            label,
            delay,
            fail_find_one: false,
        }
    }

    fn failing(label: &'static str) -> Self {
        Self {
            label,
            delay: Duration::ZERO,
            fail_find_one: true,
        }
    }

    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }

    fn sample(&self) -> SalesRecord {
        fixtures::generate_records(1).remove(0)
    }
}

impl StoreOps for StubStore {
    fn label(&self) -> &'static str {
        self.label
    }

    async fn find_one(&self) -> Result<Option<SalesRecord>> {
        if self.fail_find_one {
            return Err(Error::Io(std::io::Error::other("stub failure")));
        }
        self.pause().await;
        Ok(Some(self.sample()))
    }

    async fn find_many(&self) -> Result<Vec<SalesRecord>> {
        self.pause().await;
        Ok(vec![self.sample(), self.sample()])
    }

    async fn insert_many(&self, records: &[SalesRecord]) -> Result<u64> {
        self.pause().await;
        Ok(records.len() as u64)
    }

    async fn aggregate_sum(&self) -> Result<f64> {
        self.pause().await;
        Ok(1234.5)
    }

    async fn update_many(&self) -> Result<u64> {
        self.pause().await;
        Ok(2)
    }

    async fn delete_many(&self) -> Result<u64> {
        self.pause().await;
        Ok(2)
    }

    async fn seed(&self, records: &[SalesRecord]) -> Result<u64> {
        Ok(records.len() as u64)
    }

    async fn count_primary(&self) -> Result<u64> {
        Ok(2)
    }
}

#[tokio::test]
async fn pass_records_six_operations_in_declared_order() {
    let store = StubStore::new("StubA", Duration::from_millis(5));
    let timings = run_pass(&store).await.unwrap();

    assert_eq!(timings.store(), "StubA");
    assert_eq!(timings.timings().len(), 6);
    let order: Vec<_> = timings.timings().iter().map(|t| t.operation).collect();
    assert_eq!(order, OPERATIONS);
    for timing in timings.timings() {
        assert!(
            timing.duration >= Duration::from_millis(5),
            "{} measured {:?}",
            timing.operation,
            timing.duration,
        );
    }
}

#[tokio::test]
async fn operation_failure_aborts_the_pass() {
    let store = StubStore::failing("StubFail");
    assert!(run_pass(&store).await.is_err());
}

#[tokio::test]
async fn paired_passes_render_the_full_chart_set() {
    let a = StubStore::new("StubA", Duration::from_millis(2));
    let b = StubStore::new("StubB", Duration::from_millis(3));

    let document = run_pass(&a).await.unwrap();
    let relational = run_pass(&b).await.unwrap();
    let report_data = BenchReport::paired(document, relational).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let files = report::render_charts(&report_data, dir.path()).unwrap();
    assert_eq!(files.len(), 9);
}

/// The end-to-end scenario with fixed duration sequences: six paired
/// comparisons plus the grouped and per-store charts render without error.
#[test]
fn fixed_duration_sequences_produce_nine_charts() {
    let doc_secs = [0.01, 0.02, 5.0, 0.5, 0.3, 0.4];
    let rel_secs = [0.005, 0.015, 6.0, 0.4, 0.35, 0.38];

    let build = |store: &str, secs: &[f64]| {
        StoreTimings::new(
            store,
            OPERATIONS
                .iter()
                .zip(secs)
                .map(|(op, s)| OpTiming::new(*op, Duration::from_secs_f64(*s)))
                .collect(),
        )
    };
    let report_data =
        BenchReport::paired(build("StoreA", &doc_secs), build("StoreB", &rel_secs)).unwrap();

    assert_eq!(report_data.rows().count(), 6);

    let dir = tempfile::tempdir().unwrap();
    let files = report::render_charts(&report_data, dir.path()).unwrap();
    assert_eq!(files.len(), 9);

    let paired = files
        .iter()
        .filter(|f| {
            let name = f.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            OPERATIONS
                .iter()
                .any(|op| name == format!("{}.svg", op.slug()))
        })
        .count();
    assert_eq!(paired, 6);
}
