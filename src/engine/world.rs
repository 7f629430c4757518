//! The `World`: entity lifecycle and component attachment.
//!
//! A `World` owns everything: the entity liveness table, the monotonic ID
//! counter, the per-instance [`TypeRegistry`], and one lazily materialized
//! [`Pool`] per component type that has actually been stored. Two Worlds
//! share nothing — not entities, not slot numbering, not pool storage.
//!
//! ## Entity lifecycle
//!
//! An entity ID passes through exactly two states, Alive and Dead, with no
//! way back. Destruction clears the liveness flag and nothing else: the ID
//! is never reissued (issuance is driven purely by the counter) and pool
//! state for the dead entity is left exactly as it was, so previously
//! attached components remain fetchable until explicitly removed.
//!
//! ## Failure model
//!
//! Every mutating operation either fully completes or, on detecting an
//! invalid precondition, mutates nothing and reports its single failure
//! mode. Inability to grow storage aborts the process (a `Vec` growth
//! failure), which is treated as fatal rather than reported.
//!
//! ## Concurrency
//!
//! Single-threaded by contract: all operations take `&self`/`&mut self` and
//! run to completion. Distinct Worlds are independent and may live on
//! different threads; one World must not be shared without external
//! synchronization.

use log::debug;

use crate::engine::error::{InvalidEntityError, MissingPoolError};
use crate::engine::pool::{Pool, TypeErasedPool};
use crate::engine::registry::TypeRegistry;
use crate::engine::types::{Entity, EntityID, SlotID};

/// An isolated entity-component storage container.
pub struct World {
    /// Liveness flag per entity ID; length always equals `next_entity`.
    alive: Vec<bool>,

    /// Next entity ID to issue. Monotonic; never decremented.
    next_entity: EntityID,

    /// Per-instance component type registry.
    registry: TypeRegistry,

    /// One entry per assigned slot; `None` until the pool is materialized
    /// by the first insert (or query) touching that type.
    pools: Vec<Option<Box<dyn TypeErasedPool>>>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty World.
    pub fn new() -> Self {
        Self {
            alive: Vec::new(),
            next_entity: 0,
            registry: TypeRegistry::new(),
            pools: Vec::new(),
        }
    }

    /// Creates an empty World with capacity hints for the expected entity
    /// and component-type counts.
    ///
    /// The hints only pre-size internal allocations; correctness never
    /// depends on them.
    pub fn with_capacity(entity_cap: usize, type_cap: usize) -> Self {
        Self {
            alive: Vec::with_capacity(entity_cap),
            next_entity: 0,
            registry: TypeRegistry::with_capacity(type_cap),
            pools: Vec::with_capacity(type_cap),
        }
    }

    // ── Entity lifecycle ────────────────────────────────────────────────

    /// Creates a new entity and returns its handle.
    ///
    /// IDs are issued strictly sequentially starting at 0, with no gaps and
    /// no reuse. The liveness table and every materialized pool are grown
    /// to cover the new ID.
    pub fn create_entity(&mut self) -> Entity {
        let id = self.next_entity;
        self.next_entity += 1;

        let count = self.next_entity as usize;
        self.alive.resize(count, false);
        for pool in self.pools.iter_mut().flatten() {
            pool.ensure_size(count);
        }

        self.alive[id as usize] = true;
        Entity(id)
    }

    /// Marks `entity` as dead.
    ///
    /// Out-of-range handles are ignored: an ID this World never issued was
    /// never observed alive, so there is nothing to invalidate. Destruction
    /// does not touch pool state — see the module docs.
    pub fn destroy_entity(&mut self, entity: Entity) {
        if let Some(flag) = self.alive.get_mut(entity.index()) {
            *flag = false;
        }
    }

    /// Returns `true` if `entity` is currently alive in this World.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(entity.index()).copied().unwrap_or(false)
    }

    /// Number of entity IDs ever issued by this World (alive or dead).
    pub fn entity_count(&self) -> usize {
        self.next_entity as usize
    }

    // ── Components ──────────────────────────────────────────────────────

    /// Attaches `value` to `entity`, overwriting any prior value of the
    /// same type.
    ///
    /// Fails if `entity` is out of range or dead; on failure nothing is
    /// mutated — not even the type registry.
    pub fn add_component<T>(&mut self, entity: Entity, value: T) -> Result<(), InvalidEntityError>
    where
        T: Default + Send + Sync + 'static,
    {
        if !self.is_alive(entity) {
            return Err(InvalidEntityError { entity: entity.id() });
        }

        let slot = self.reserve_slot::<T>();
        let pool = self.materialize_pool::<T>(slot);
        pool.put(entity.index(), value);
        Ok(())
    }

    /// Returns a reference to `entity`'s component of type `T`, or `None`
    /// if the pool does not cover `entity` or the presence flag is clear.
    ///
    /// Liveness is deliberately not checked: a dead entity's components
    /// remain fetchable until explicitly removed.
    pub fn get_component<T>(&self, entity: Entity) -> Option<&T>
    where
        T: Default + Send + Sync + 'static,
    {
        self.pool::<T>()?.get(entity.index())
    }

    /// Mutable variant of [`get_component`](World::get_component).
    pub fn get_component_mut<T>(&mut self, entity: Entity) -> Option<&mut T>
    where
        T: Default + Send + Sync + 'static,
    {
        let slot = self.reserve_slot::<T>();
        self.pools
            .get_mut(slot)?
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut::<Pool<T>>()?
            .get_mut(entity.index())
    }

    /// Detaches `entity`'s component of type `T` by clearing its presence
    /// flag; the stored value is left intact.
    ///
    /// Fails only if no pool for `T` was ever created in this World.
    /// Clearing an already-absent flag, or naming an entity beyond the
    /// pool's size, is a benign no-op.
    pub fn remove_component<T>(&mut self, entity: Entity) -> Result<(), MissingPoolError>
    where
        T: Default + Send + Sync + 'static,
    {
        let slot = self.reserve_slot::<T>();
        match self.pools[slot].as_deref_mut() {
            Some(pool) => {
                pool.as_any_mut()
                    .downcast_mut::<Pool<T>>()
                    .expect("slot resolved to a pool of a different type")
                    .clear(entity.index());
                Ok(())
            }
            None => Err(MissingPoolError {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// Resolves the slot for `T`, assigning one and growing the pool table
    /// on first use. The pool itself is not created here.
    pub(crate) fn reserve_slot<T: 'static>(&mut self) -> SlotID {
        let slot = self.registry.slot_of::<T>();
        if slot >= self.pools.len() {
            self.pools.resize_with(slot + 1, || None);
        }
        slot
    }

    /// Returns the pool for `T`, materializing it (sized to the current
    /// entity count) if it does not exist yet.
    pub(crate) fn materialize_pool<T>(&mut self, slot: SlotID) -> &mut Pool<T>
    where
        T: Default + Send + Sync + 'static,
    {
        let count = self.entity_count();
        let entry = &mut self.pools[slot];
        let pool = entry.get_or_insert_with(|| {
            debug!(
                "materialized pool for component type {} in slot {}",
                std::any::type_name::<T>(),
                slot
            );
            Box::new(Pool::<T>::default())
        });
        pool.ensure_size(count);
        pool.as_any_mut()
            .downcast_mut::<Pool<T>>()
            .expect("slot resolved to a pool of a different type")
    }

    /// Returns the pool for `T` if one has been materialized.
    pub(crate) fn pool<T>(&self) -> Option<&Pool<T>>
    where
        T: Default + Send + Sync + 'static,
    {
        let slot = self.registry.get::<T>()?;
        self.pools
            .get(slot)?
            .as_deref()?
            .as_any()
            .downcast_ref::<Pool<T>>()
    }

    /// Splits the borrow into the liveness table and the pool table, for
    /// query iteration that needs both at once.
    pub(crate) fn split_for_query(
        &mut self,
    ) -> (&[bool], &mut [Option<Box<dyn TypeErasedPool>>]) {
        (&self.alive, &mut self.pools)
    }
}
