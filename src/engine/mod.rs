//! # Engine Module
//!
//! Internal storage-engine implementation.
//!
//! Core building blocks, leaves first:
//! - Identifier types
//! - Error types
//! - Per-World type registry
//! - Dense component pools
//! - World / entity lifecycle
//! - Query execution
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod types;
pub mod error;
pub mod registry;
pub mod pool;
pub mod world;
pub mod query;
