//! Timed CRUD and aggregation benchmarks for a document store vs a
//! relational store.
//!
//! The harness runs six operations — find-one, find-many, insert-many,
//! aggregate-sum, update-many, delete-many — in a fixed order against a
//! MongoDB adapter and a PostgreSQL adapter, wraps each call in a
//! wall-clock timer, and renders bar charts comparing the two passes.
//!
//! # Components
//!
//! - [`timer`]: run an operation once and return its output with the
//!   elapsed duration
//! - [`backends`]: the [`StoreOps`] seam and the two store adapters
//! - [`runner`]: the sequential six-operation pass
//! - [`report`]: console summary and SVG chart rendering
//! - [`fixtures`]: deterministic sales-record generation for seeding

pub mod backends;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod ops;
pub mod record;
pub mod report;
pub mod runner;
pub mod timer;

pub use backends::{MongoStore, PostgresStore, StoreOps};
pub use config::{BenchConfig, Workload};
pub use error::{Error, Result};
pub use ops::{BenchReport, OpTiming, Operation, StoreTimings, OPERATIONS};
pub use record::SalesRecord;
pub use runner::run_pass;
