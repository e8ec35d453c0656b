//! Domain layer: the expense record model plus the pure query and
//! aggregation services that operate on in-memory record sequences.

pub mod models;
pub mod query_service;
pub mod report_service;
