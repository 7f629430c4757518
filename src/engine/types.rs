//! Core identifier types shared across the storage engine.
//!
//! The engine deliberately uses small, copyable numeric identifiers
//! everywhere:
//!
//! - [`EntityID`] — a plain unsigned integer naming one entity within a
//!   `World`. IDs are issued sequentially from 0 and are never reused, so an
//!   `EntityID` doubles as the direct index into the liveness table and into
//!   every component pool.
//! - [`SlotID`] — the dense index assigned to a component type by a World's
//!   type registry. Slot assignment is per-`World`; the same component type
//!   may hold different slots in two different Worlds.
//!
//! There is no shard or generation packing here: destruction retires an ID
//! permanently instead of recycling it, so a bare counter is sufficient to
//! make every handle unambiguous for the lifetime of its World.

/// Raw unsigned identifier for an entity within one `World`.
pub type EntityID = u32;

/// Dense index assigned to a component type within one `World`.
///
/// Slots index directly into the World's pool table.
pub type SlotID = usize;

/// Handle to one entity within a `World`.
///
/// An `Entity` carries no data of its own; it is a key into the owning
/// World's liveness table and component pools. Handles remain valid (as
/// keys) forever: IDs are never reissued after destruction.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Entity(pub EntityID);

impl Entity {
    /// Returns the raw numeric identifier.
    #[inline]
    pub fn id(self) -> EntityID {
        self.0
    }

    /// Returns the identifier widened for direct table indexing.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity {}", self.0)
    }
}
