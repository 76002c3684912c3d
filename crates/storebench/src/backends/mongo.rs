//! Document store adapter on the MongoDB driver.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::config::{BenchConfig, Workload};
use crate::error::Result;
use crate::record::SalesRecord;

use super::StoreOps;

/// MongoDB adapter.
///
/// All six operations are single driver calls against the primary or
/// scratch collection; the driver's native error aborts the run.
pub struct MongoStore {
    primary: Collection<SalesRecord>,
    scratch: Collection<SalesRecord>,
    workload: Workload,
}

impl MongoStore {
    /// Connect to the configured MongoDB instance.
    pub async fn connect(config: &BenchConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let db = client.database(&config.mongo_db);
        let primary = db.collection(&config.workload.primary);
        let scratch = db.collection(&config.workload.scratch);
        info!(
            uri = %config.mongo_uri,
            db = %config.mongo_db,
            "connected to document store"
        );
        Ok(Self {
            primary,
            scratch,
            workload: config.workload.clone(),
        })
    }

    /// The workload filter as a driver query document.
    fn filter(&self) -> Document {
        let mut filter = Document::new();
        filter.insert(
            self.workload.filter_field.as_str(),
            self.workload.filter_value.as_str(),
        );
        filter
    }
}

impl StoreOps for MongoStore {
    fn label(&self) -> &'static str {
        "MongoDB"
    }

    async fn find_one(&self) -> Result<Option<SalesRecord>> {
        Ok(self.primary.find_one(self.filter()).await?)
    }

    async fn find_many(&self) -> Result<Vec<SalesRecord>> {
        let cursor = self.primary.find(self.filter()).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_many(&self, records: &[SalesRecord]) -> Result<u64> {
        self.scratch.delete_many(Document::new()).await?;
        if records.is_empty() {
            return Ok(0);
        }
        let outcome = self.scratch.insert_many(records).await?;
        Ok(outcome.inserted_ids.len() as u64)
    }

    async fn aggregate_sum(&self) -> Result<f64> {
        let pipeline = vec![doc! {
            "$group": {
                "_id": null,
                "total": { "$sum": format!("${}", self.workload.sum_field) },
            }
        }];
        let mut cursor = self.primary.aggregate(pipeline).await?;
        let total = cursor
            .try_next()
            .await?
            .and_then(|group| group.get_f64("total").ok())
            .unwrap_or(0.0);
        debug!(total, "document aggregate");
        Ok(total)
    }

    async fn update_many(&self) -> Result<u64> {
        let update = doc! { "$set": { "order_priority": "H" } };
        let outcome = self.scratch.update_many(self.filter(), update).await?;
        Ok(outcome.modified_count)
    }

    async fn delete_many(&self) -> Result<u64> {
        let outcome = self.scratch.delete_many(Document::new()).await?;
        Ok(outcome.deleted_count)
    }

    async fn seed(&self, records: &[SalesRecord]) -> Result<u64> {
        self.primary.delete_many(Document::new()).await?;
        if records.is_empty() {
            return Ok(0);
        }
        let outcome = self.primary.insert_many(records).await?;
        Ok(outcome.inserted_ids.len() as u64)
    }

    async fn count_primary(&self) -> Result<u64> {
        Ok(self.primary.count_documents(Document::new()).await?)
    }
}
