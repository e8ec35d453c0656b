//! Personal expense tracker.
//!
//! The core is split the same way the data flows: `storage` owns the
//! append-only CSV log, `domain` holds the pure query and aggregation
//! logic over the records it yields, and `ui` drives the interactive
//! session and renders tables and charts from the aggregated output.

pub mod domain;
pub mod error;
pub mod storage;
pub mod ui;
