//! Benchmark configuration.

use std::path::PathBuf;

/// Default MongoDB connection string.
pub const DEFAULT_MONGO_URI: &str = "mongodb://127.0.0.1:27017";

/// Default MongoDB database name.
pub const DEFAULT_MONGO_DB: &str = "storebench";

/// Default PostgreSQL connection string.
pub const DEFAULT_POSTGRES_URL: &str = "postgres://postgres@127.0.0.1:5432/storebench";

/// Default directory for rendered charts.
pub const DEFAULT_CHARTS_DIR: &str = "charts";

/// Default number of pooled relational connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// The shared benchmark identity.
///
/// Both adapters are constructed from one `Workload` value, which is what
/// makes the two duration sequences comparable: the same filter field and
/// value drive find-one, find-many, and update-many on each store, and the
/// same numeric field is summed by aggregate-sum.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Name of the pre-populated dataset (collection / table).
    pub primary: String,

    /// Name of the throwaway destination used by insert-many, update-many,
    /// and delete-many so the primary dataset is never mutated.
    pub scratch: String,

    /// Field the find and update operations filter on.
    pub filter_field: String,

    /// Value matched against the filter field.
    pub filter_value: String,

    /// Numeric field summed by aggregate-sum.
    pub sum_field: String,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            primary: "sales_records".to_string(),
            scratch: "inserted_sales_records".to_string(),
            filter_field: "region".to_string(),
            filter_value: "Asia".to_string(),
            sum_field: "total_profit".to_string(),
        }
    }
}

/// Benchmark configuration passed into each adapter constructor.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// MongoDB connection string.
    pub mongo_uri: String,

    /// MongoDB database holding the primary and scratch collections.
    pub mongo_db: String,

    /// PostgreSQL connection string.
    pub postgres_url: String,

    /// Number of pooled relational connections.
    pub pool_size: u32,

    /// Directory rendered charts are written into.
    pub charts_dir: PathBuf,

    /// The shared benchmark identity.
    pub workload: Workload,
}

impl BenchConfig {
    /// Create a configuration with local-instance defaults.
    pub fn new() -> Self {
        Self {
            mongo_uri: DEFAULT_MONGO_URI.to_string(),
            mongo_db: DEFAULT_MONGO_DB.to_string(),
            postgres_url: DEFAULT_POSTGRES_URL.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
            charts_dir: PathBuf::from(DEFAULT_CHARTS_DIR),
            workload: Workload::default(),
        }
    }

    /// Set the MongoDB connection string.
    pub fn with_mongo_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongo_uri = uri.into();
        self
    }

    /// Set the MongoDB database name.
    pub fn with_mongo_db(mut self, db: impl Into<String>) -> Self {
        self.mongo_db = db.into();
        self
    }

    /// Set the PostgreSQL connection string.
    pub fn with_postgres_url(mut self, url: impl Into<String>) -> Self {
        self.postgres_url = url.into();
        self
    }

    /// Set the chart output directory.
    pub fn with_charts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.charts_dir = dir.into();
        self
    }

    /// Set the region value the filtered operations match.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.workload.filter_value = region.into();
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_instances() {
        let config = BenchConfig::new();
        assert_eq!(config.mongo_uri, DEFAULT_MONGO_URI);
        assert_eq!(config.postgres_url, DEFAULT_POSTGRES_URL);
        assert_eq!(config.workload.filter_field, "region");
        assert_eq!(config.workload.sum_field, "total_profit");
    }

    #[test]
    fn builder_overrides() {
        let config = BenchConfig::new()
            .with_mongo_uri("mongodb://db0:27017")
            .with_postgres_url("postgres://db1/bench")
            .with_region("Europe")
            .with_charts_dir("/tmp/out");
        assert_eq!(config.mongo_uri, "mongodb://db0:27017");
        assert_eq!(config.postgres_url, "postgres://db1/bench");
        assert_eq!(config.workload.filter_value, "Europe");
        assert_eq!(config.charts_dir, PathBuf::from("/tmp/out"));
    }
}
