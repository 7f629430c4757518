//! # dense-ecs
//!
//! Minimal entity-component storage engine: integer-identified entities,
//! one densely packed pool per component type, and mask-based queries over
//! any combination of component types.
//!
//! ## Design Goals
//! - One contiguous array per component type, indexed directly by entity ID
//! - Lazy, per-World type registration (no global registry, no reflection)
//! - Deterministic ascending-ID iteration
//! - Safe, explicit data access — checked downcasts at every type-erasure
//!   boundary
//!
//! ## Scope
//! This crate is the storage/query substrate only. System scheduling,
//! archetypes, serialization, and entity relationships belong to calling
//! code. A single [`World`] is single-threaded; distinct Worlds are fully
//! independent and may live on different threads.
//!
//! ## Example
//! ```
//! use dense_ecs::prelude::*;
//!
//! #[derive(Default)]
//! struct Position { x: f32, y: f32 }
//! #[derive(Default)]
//! struct Velocity { dx: f32, dy: f32 }
//!
//! let mut world = World::new();
//! let e = world.create_entity();
//! world.add_component(e, Position { x: 0.0, y: 0.0 }).unwrap();
//! world.add_component(e, Velocity { dx: 1.0, dy: 2.0 }).unwrap();
//!
//! world.for_each2::<Position, Velocity, _>(|_, pos, vel| {
//!     pos.x += vel.dx;
//!     pos.y += vel.dy;
//! });
//!
//! assert_eq!(world.get_component::<Position>(e).unwrap().y, 2.0);
//! ```

#![forbid(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![deny(dead_code)]

pub mod engine;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use engine::world::World;

pub use engine::types::{
    Entity,
    EntityID,
    SlotID,
};

pub use engine::registry::TypeRegistry;

pub use engine::pool::{
    Pool,
    TypeErasedPool,
};

pub use engine::error::{
    EcsError,
    EcsResult,
    InvalidEntityError,
    MissingPoolError,
};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used storage-engine types.
///
/// Import with:
/// ```rust
/// use dense_ecs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        EcsError,
        EcsResult,
        Entity,
        InvalidEntityError,
        MissingPoolError,
        World,
    };
}
