//! Relational store adapter on PostgreSQL via sqlx.

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, info};

use crate::config::{BenchConfig, Workload};
use crate::error::Result;
use crate::record::SalesRecord;

use super::StoreOps;

/// Column list shared by the primary and scratch tables, in record order.
const COLUMNS: &str = "region, country, item_type, sales_channel, order_priority, \
     order_date, order_id, ship_date, units_sold, unit_price, unit_cost, \
     total_revenue, total_cost, total_profit";

/// PostgreSQL adapter.
///
/// The insert path iterates rows inside one transaction rather than
/// issuing a single bulk statement; each adapter keeps its backend's
/// native insert strategy.
pub struct PostgresStore {
    pool: PgPool,
    workload: Workload,
}

impl PostgresStore {
    /// Connect a pool to the configured PostgreSQL instance.
    pub async fn connect(config: &BenchConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .connect(&config.postgres_url)
            .await?;
        info!(url = %config.postgres_url, "connected to relational store");
        Ok(Self {
            pool,
            workload: config.workload.clone(),
        })
    }

    /// Create the primary and scratch tables and the filter-field index if
    /// they do not exist. Called by seeding, never by a benchmark pass.
    pub async fn ensure_schema(&self) -> Result<()> {
        for table in [&self.workload.primary, &self.workload.scratch] {
            sqlx::query(&format!(
                "CREATE TABLE IF NOT EXISTS {table} (\
                     region TEXT NOT NULL, \
                     country TEXT NOT NULL, \
                     item_type TEXT NOT NULL, \
                     sales_channel TEXT NOT NULL, \
                     order_priority TEXT NOT NULL, \
                     order_date DATE NOT NULL, \
                     order_id BIGINT NOT NULL, \
                     ship_date DATE NOT NULL, \
                     units_sold BIGINT NOT NULL, \
                     unit_price DOUBLE PRECISION NOT NULL, \
                     unit_cost DOUBLE PRECISION NOT NULL, \
                     total_revenue DOUBLE PRECISION NOT NULL, \
                     total_cost DOUBLE PRECISION NOT NULL, \
                     total_profit DOUBLE PRECISION NOT NULL)"
            ))
            .execute(&self.pool)
            .await?;
        }
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{}_{} ON {} ({})",
            self.workload.primary,
            self.workload.filter_field,
            self.workload.primary,
            self.workload.filter_field,
        ))
        .execute(&self.pool)
        .await?;
        debug!(
            primary = %self.workload.primary,
            scratch = %self.workload.scratch,
            "schema ensured"
        );
        Ok(())
    }

    /// Row-iterated insert of `records` into `table`, one transaction.
    async fn insert_rows(&self, table: &str, records: &[SalesRecord]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }
        let sql = format!(
            "INSERT INTO {table} ({COLUMNS}) VALUES \
             ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"
        );
        let mut tx = self.pool.begin().await?;
        for r in records {
            sqlx::query(&sql)
                .bind(&r.region)
                .bind(&r.country)
                .bind(&r.item_type)
                .bind(&r.sales_channel)
                .bind(&r.order_priority)
                .bind(r.order_date)
                .bind(r.order_id)
                .bind(r.ship_date)
                .bind(r.units_sold)
                .bind(r.unit_price)
                .bind(r.unit_cost)
                .bind(r.total_revenue)
                .bind(r.total_cost)
                .bind(r.total_profit)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(records.len() as u64)
    }
}

impl StoreOps for PostgresStore {
    fn label(&self) -> &'static str {
        "PostgreSQL"
    }

    async fn find_one(&self) -> Result<Option<SalesRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} WHERE {} = $1 LIMIT 1",
            self.workload.primary, self.workload.filter_field,
        );
        let row = sqlx::query(&sql)
            .bind(&self.workload.filter_value)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| record_from_row(&r)).transpose()
    }

    async fn find_many(&self) -> Result<Vec<SalesRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} WHERE {} = $1",
            self.workload.primary, self.workload.filter_field,
        );
        let rows = sqlx::query(&sql)
            .bind(&self.workload.filter_value)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(record_from_row).collect()
    }

    async fn insert_many(&self, records: &[SalesRecord]) -> Result<u64> {
        sqlx::query(&format!("DELETE FROM {}", self.workload.scratch))
            .execute(&self.pool)
            .await?;
        self.insert_rows(&self.workload.scratch, records).await
    }

    async fn aggregate_sum(&self) -> Result<f64> {
        let sql = format!(
            "SELECT COALESCE(SUM({}), 0) AS total FROM {}",
            self.workload.sum_field, self.workload.primary,
        );
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;
        let total: f64 = row.try_get("total")?;
        debug!(total, "relational aggregate");
        Ok(total)
    }

    async fn update_many(&self) -> Result<u64> {
        let sql = format!(
            "UPDATE {} SET order_priority = 'H' WHERE {} = $1",
            self.workload.scratch, self.workload.filter_field,
        );
        let outcome = sqlx::query(&sql)
            .bind(&self.workload.filter_value)
            .execute(&self.pool)
            .await?;
        Ok(outcome.rows_affected())
    }

    async fn delete_many(&self) -> Result<u64> {
        let outcome = sqlx::query(&format!("DELETE FROM {}", self.workload.scratch))
            .execute(&self.pool)
            .await?;
        Ok(outcome.rows_affected())
    }

    async fn seed(&self, records: &[SalesRecord]) -> Result<u64> {
        sqlx::query(&format!("DELETE FROM {}", self.workload.primary))
            .execute(&self.pool)
            .await?;
        self.insert_rows(&self.workload.primary, records).await
    }

    async fn count_primary(&self) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) AS n FROM {}", self.workload.primary);
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;
        let n: i64 = row.try_get("n")?;
        Ok(n as u64)
    }
}

/// Map one row onto the shared record shape.
fn record_from_row(row: &PgRow) -> Result<SalesRecord> {
    Ok(SalesRecord {
        region: row.try_get("region")?,
        country: row.try_get("country")?,
        item_type: row.try_get("item_type")?,
        sales_channel: row.try_get("sales_channel")?,
        order_priority: row.try_get("order_priority")?,
        order_date: row.try_get("order_date")?,
        order_id: row.try_get("order_id")?,
        ship_date: row.try_get("ship_date")?,
        units_sold: row.try_get("units_sold")?,
        unit_price: row.try_get("unit_price")?,
        unit_cost: row.try_get("unit_cost")?,
        total_revenue: row.try_get("total_revenue")?,
        total_cost: row.try_get("total_cost")?,
        total_profit: row.try_get("total_profit")?,
    })
}
