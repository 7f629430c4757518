//! Per-`World` component type registry.
//!
//! Maps a Rust component type to a dense [`SlotID`] the first time that type
//! is used against a particular `World`. The mapping is owned by the `World`
//! itself — deliberately *not* a process-wide table — so two Worlds assign
//! slots independently, in whatever order each first sees a type. That keeps
//! Worlds perfectly isolated from one another at the cost of one `HashMap`
//! lookup per type resolution.
//!
//! ## Invariants
//! - A slot, once assigned, is stable for the lifetime of the registry.
//! - Slots are issued from a monotonic counter and never reused, even for
//!   types that are registered but never actually stored.
//! - Registration always succeeds; there is no capacity ceiling.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use log::debug;

use crate::engine::types::SlotID;

/// Lazily assigns dense slot indices to component types.
#[derive(Default)]
pub struct TypeRegistry {
    slots: HashMap<TypeId, SlotID>,
    next_slot: SlotID,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry sized for roughly `type_cap` component
    /// types. Purely a performance hint.
    pub fn with_capacity(type_cap: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(type_cap),
            next_slot: 0,
        }
    }

    /// Returns the slot for component type `T`, assigning the next free
    /// slot if `T` has never been seen by this registry.
    pub fn slot_of<T: 'static>(&mut self) -> SlotID {
        let type_id = TypeId::of::<T>();
        if let Some(&slot) = self.slots.get(&type_id) {
            return slot;
        }

        let slot = self.next_slot;
        self.next_slot += 1;
        self.slots.insert(type_id, slot);
        debug!("assigned slot {} to component type {}", slot, type_name::<T>());
        slot
    }

    /// Returns the slot for `T` if one has already been assigned.
    pub fn get<T: 'static>(&self) -> Option<SlotID> {
        self.slots.get(&TypeId::of::<T>()).copied()
    }

    /// Number of slots assigned so far.
    pub fn len(&self) -> usize {
        self.next_slot
    }

    /// Returns `true` if no type has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.next_slot == 0
    }
}
