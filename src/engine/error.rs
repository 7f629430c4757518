//! Error types for entity lifecycle and component storage.
//!
//! The error taxonomy is intentionally small and local. Every fallible
//! operation has exactly one failure mode, reported synchronously as a
//! dedicated error type:
//!
//! * [`InvalidEntityError`] — a component write targeted an entity that is
//!   out of range or already destroyed.
//! * [`MissingPoolError`] — a component removal named a type for which no
//!   pool was ever created in that `World`.
//!
//! Absence is *not* an error: a lookup on a valid entity that simply lacks
//! the component reports `None`, and a query skipping non-matching entities
//! is ordinary control flow. Resource exhaustion (failure to grow a pool or
//! the liveness table) is fatal and sits outside this taxonomy.
//!
//! All errors implement [`std::error::Error`] and [`fmt::Display`], and
//! convert into the aggregate [`EcsError`] via `From` so callers mixing
//! operations can use `?` against a single type.

use std::fmt;

use crate::engine::types::EntityID;

/// Returned when a component write targets an entity that is out of range
/// or has been destroyed.
///
/// Components cannot be attached to a nonexistent or dead entity; the
/// operation mutates nothing when this error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEntityError {
    /// Raw identifier of the offending entity.
    pub entity: EntityID,
}

impl fmt::Display for InvalidEntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity {} is dead or was never created", self.entity)
    }
}

impl std::error::Error for InvalidEntityError {}

/// Returned when a component removal names a type that was never stored in
/// the target `World`.
///
/// A pool is created the first time a component of its type is added; until
/// then there is nothing to remove from. Clearing a flag that is already
/// clear on an *existing* pool is a benign no-op, not this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPoolError {
    /// Rust type name of the component, for diagnostics.
    pub type_name: &'static str,
}

impl fmt::Display for MissingPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no component pool exists for type {}", self.type_name)
    }
}

impl std::error::Error for MissingPoolError {}

/// Aggregate error for storage operations.
///
/// Individual operations return their specific error type; `EcsError`
/// exists so callers composing several operations can bubble failures with
/// `?` into one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcsError {
    /// A component write targeted a dead or out-of-range entity.
    InvalidEntity(InvalidEntityError),

    /// A component removal named a type with no pool in this `World`.
    MissingPool(MissingPoolError),
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcsError::InvalidEntity(e) => write!(f, "{e}"),
            EcsError::MissingPool(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EcsError {}

impl From<InvalidEntityError> for EcsError {
    fn from(e: InvalidEntityError) -> Self {
        EcsError::InvalidEntity(e)
    }
}

impl From<MissingPoolError> for EcsError {
    fn from(e: MissingPoolError) -> Self {
        EcsError::MissingPool(e)
    }
}

/// Convenience result alias over [`EcsError`].
pub type EcsResult<T> = Result<T, EcsError>;
