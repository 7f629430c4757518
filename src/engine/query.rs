//! Query execution: visit every live entity carrying a required set of
//! component types.
//!
//! Queries are expressed through fixed-arity typed adapters
//! ([`for_each1`](World::for_each1) through [`for_each4`](World::for_each4),
//! plus the zero-type [`for_each_alive`](World::for_each_alive)). Each
//! adapter:
//!
//! 1. Resolves every requested type's slot once, up front, materializing
//!    pools as needed — a type that was never stored simply matches no
//!    entity.
//! 2. Scans entity IDs in strictly ascending order from 0 to the highest ID
//!    ever issued.
//! 3. Skips dead entities, then ANDs the presence flags of all requested
//!    pools — an entity matches all-or-nothing.
//! 4. Invokes the visitor with the entity handle and mutable references
//!    into live pool storage.
//!
//! ## Ordering
//!
//! Visitor invocations occur in ascending entity-ID order. Callers may rely
//! on this for deterministic, reproducible iteration.
//!
//! ## Structural stability
//!
//! The adapters hold `&mut World` for the whole pass, so the borrow checker
//! rules out creating/destroying entities or adding/removing components
//! from inside the visitor. Mutating component *values* in place is the
//! intended use.
//!
//! ## Aliasing
//!
//! Each requested type must be distinct: mutable access to the pools is
//! obtained through `slice::get_disjoint_mut`, so listing the same
//! component type twice is detected and panics rather than aliasing.
//!
//! ## Performance
//!
//! Each pool is one contiguous array indexed directly by entity ID, so a
//! pass over one or a few component types walks one or a few contiguous
//! memory regions. The `benches/scan.rs` benchmark pins this against
//! random-order point lookups.

use crate::engine::pool::{Pool, TypeErasedPool};
use crate::engine::types::{Entity, EntityID};
use crate::engine::world::World;

/// Recovers the concrete pool behind a table entry during iteration.
///
/// The entry must have been materialized by the adapter prologue.
fn downcast_pool<T>(entry: &mut Option<Box<dyn TypeErasedPool>>) -> &mut Pool<T>
where
    T: Default + Send + Sync + 'static,
{
    entry
        .as_deref_mut()
        .expect("pool must be materialized before iteration")
        .as_any_mut()
        .downcast_mut::<Pool<T>>()
        .expect("slot resolved to a pool of a different type")
}

impl World {
    /// Visits every live entity, in ascending ID order.
    ///
    /// The zero-component degenerate query.
    pub fn for_each_alive<F>(&self, mut f: F)
    where
        F: FnMut(Entity),
    {
        for id in 0..self.entity_count() {
            let entity = Entity(id as EntityID);
            if self.is_alive(entity) {
                f(entity);
            }
        }
    }

    /// Visits every live entity carrying a component of type `A`, in
    /// ascending ID order, with mutable access to the component.
    pub fn for_each1<A, F>(&mut self, mut f: F)
    where
        A: Default + Send + Sync + 'static,
        F: FnMut(Entity, &mut A),
    {
        let slot_a = self.reserve_slot::<A>();
        self.materialize_pool::<A>(slot_a);

        let (alive, pools) = self.split_for_query();
        let pool_a = downcast_pool::<A>(&mut pools[slot_a]);

        for (id, &live) in alive.iter().enumerate() {
            if !live || !pool_a.has(id) {
                continue;
            }
            f(Entity(id as EntityID), pool_a.value_mut(id));
        }
    }

    /// Visits every live entity carrying components of both `A` and `B`, in
    /// ascending ID order.
    ///
    /// ## Matching
    /// The presence flags of all requested pools are ANDed per entity; an
    /// entity missing any one of them is skipped entirely.
    ///
    /// ## Panics
    /// Panics if `A` and `B` are the same type — the pools backing a query
    /// must be distinct to hand out disjoint mutable references.
    pub fn for_each2<A, B, F>(&mut self, mut f: F)
    where
        A: Default + Send + Sync + 'static,
        B: Default + Send + Sync + 'static,
        F: FnMut(Entity, &mut A, &mut B),
    {
        let slot_a = self.reserve_slot::<A>();
        let slot_b = self.reserve_slot::<B>();
        self.materialize_pool::<A>(slot_a);
        self.materialize_pool::<B>(slot_b);

        let (alive, pools) = self.split_for_query();
        let [entry_a, entry_b] = pools
            .get_disjoint_mut([slot_a, slot_b])
            .expect("a query must not list the same component type twice");
        let pool_a = downcast_pool::<A>(entry_a);
        let pool_b = downcast_pool::<B>(entry_b);

        for (id, &live) in alive.iter().enumerate() {
            if !live || !pool_a.has(id) || !pool_b.has(id) {
                continue;
            }
            f(
                Entity(id as EntityID),
                pool_a.value_mut(id),
                pool_b.value_mut(id),
            );
        }
    }

    /// Three-component variant of [`for_each2`](World::for_each2).
    ///
    /// ## Panics
    /// Panics if any two of `A`, `B`, `C` are the same type.
    pub fn for_each3<A, B, C, F>(&mut self, mut f: F)
    where
        A: Default + Send + Sync + 'static,
        B: Default + Send + Sync + 'static,
        C: Default + Send + Sync + 'static,
        F: FnMut(Entity, &mut A, &mut B, &mut C),
    {
        let slot_a = self.reserve_slot::<A>();
        let slot_b = self.reserve_slot::<B>();
        let slot_c = self.reserve_slot::<C>();
        self.materialize_pool::<A>(slot_a);
        self.materialize_pool::<B>(slot_b);
        self.materialize_pool::<C>(slot_c);

        let (alive, pools) = self.split_for_query();
        let [entry_a, entry_b, entry_c] = pools
            .get_disjoint_mut([slot_a, slot_b, slot_c])
            .expect("a query must not list the same component type twice");
        let pool_a = downcast_pool::<A>(entry_a);
        let pool_b = downcast_pool::<B>(entry_b);
        let pool_c = downcast_pool::<C>(entry_c);

        for (id, &live) in alive.iter().enumerate() {
            if !live || !pool_a.has(id) || !pool_b.has(id) || !pool_c.has(id) {
                continue;
            }
            f(
                Entity(id as EntityID),
                pool_a.value_mut(id),
                pool_b.value_mut(id),
                pool_c.value_mut(id),
            );
        }
    }

    /// Four-component variant of [`for_each2`](World::for_each2).
    ///
    /// ## Panics
    /// Panics if any two of `A`, `B`, `C`, `D` are the same type.
    pub fn for_each4<A, B, C, D, F>(&mut self, mut f: F)
    where
        A: Default + Send + Sync + 'static,
        B: Default + Send + Sync + 'static,
        C: Default + Send + Sync + 'static,
        D: Default + Send + Sync + 'static,
        F: FnMut(Entity, &mut A, &mut B, &mut C, &mut D),
    {
        let slot_a = self.reserve_slot::<A>();
        let slot_b = self.reserve_slot::<B>();
        let slot_c = self.reserve_slot::<C>();
        let slot_d = self.reserve_slot::<D>();
        self.materialize_pool::<A>(slot_a);
        self.materialize_pool::<B>(slot_b);
        self.materialize_pool::<C>(slot_c);
        self.materialize_pool::<D>(slot_d);

        let (alive, pools) = self.split_for_query();
        let [entry_a, entry_b, entry_c, entry_d] = pools
            .get_disjoint_mut([slot_a, slot_b, slot_c, slot_d])
            .expect("a query must not list the same component type twice");
        let pool_a = downcast_pool::<A>(entry_a);
        let pool_b = downcast_pool::<B>(entry_b);
        let pool_c = downcast_pool::<C>(entry_c);
        let pool_d = downcast_pool::<D>(entry_d);

        for (id, &live) in alive.iter().enumerate() {
            if !live
                || !pool_a.has(id)
                || !pool_b.has(id)
                || !pool_c.has(id)
                || !pool_d.has(id)
            {
                continue;
            }
            f(
                Entity(id as EntityID),
                pool_a.value_mut(id),
                pool_b.value_mut(id),
                pool_c.value_mut(id),
                pool_d.value_mut(id),
            );
        }
    }
}
