//! The benchmarked record shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sales record, mirroring the column layout both stores hold.
///
/// The document adapter serializes this struct directly; the relational
/// adapter maps it column-by-column. Field names double as the document
/// keys and the table columns, so the workload's filter and sum fields
/// (`region`, `total_profit`) resolve identically on both stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub region: String,
    pub country: String,
    pub item_type: String,
    pub sales_channel: String,
    pub order_priority: String,
    pub order_date: NaiveDate,
    pub order_id: i64,
    pub ship_date: NaiveDate,
    pub units_sold: i64,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_profit: f64,
}
