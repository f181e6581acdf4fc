//! Pure query and aggregation services over content datasets.
//!
//! # Responsibility
//! - Filter, sort and summarize entries without touching storage order.
//! - Keep presentation callers decoupled from catalog construction.
//!
//! # Invariants
//! - Every query returns a fresh view; the repository is never mutated.
//! - Sorted views use a stable sort, so ties keep authored order.

pub mod project_service;
pub mod selector;
pub mod timeline_service;
