//! Plansight Analyzer - Cross-engine EXPLAIN plan normalization
//!
//! This crate provides functionality for:
//! - Parsing EXPLAIN output from PostgreSQL, MySQL, SQL Server and SQLite
//! - Normalizing every engine's plan into one node tree
//! - Summarizing a plan and flattening it for display

pub mod explain;

pub use explain::*;
