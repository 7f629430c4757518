//! Dense per-type component pools and their type-erased interface.
//!
//! A [`Pool<T>`] is a dual array: one `Vec<T>` of component values and one
//! parallel `Vec<bool>` of presence flags, both indexed *directly by entity
//! ID*. A `World` owns one pool per component type it has stored, created
//! lazily and kept behind the [`TypeErasedPool`] trait so pools of different
//! element types can live in one table.
//!
//! # Storage model
//!
//! Growing by entity count rather than by component count is the central
//! trade-off of the whole engine: every live entity costs one value slot and
//! one flag in every materialized pool, even when few entities carry that
//! component — in exchange, lookup is a single indexed load and a query over
//! one component type scans one contiguous region.
//!
//! Unused value slots hold `T::default()`; a cleared flag means the slot's
//! contents are stale, not zeroed. Removal is logical: only the flag is
//! cleared, the previous value stays in place until overwritten by a later
//! insert.
//!
//! # Invariants
//!
//! - `values.len() == mask.len()` at all times.
//! - Pools grow monotonically via [`ensure_size`](Pool::ensure_size) and
//!   never shrink.
//! - The surrounding `World` keeps every materialized pool sized to its
//!   entity count, so in-engine accesses index in range by construction.
//!
//! # Type erasure
//!
//! The concrete `Pool<T>` is recovered from a `dyn TypeErasedPool` through
//! the checked [`Any`] downcast — a slot mismatch yields `None`/a panic with
//! a message rather than undefined behavior.

use std::any::{type_name, Any, TypeId};

/// Type-erased capability interface over a [`Pool<T>`].
///
/// Exposes only what the `World` needs without knowing the element type:
/// growth, size, and the downcasting hooks.
pub trait TypeErasedPool: Any + Send + Sync {
    /// Guarantees the pool can address entity indices `[0, n)`.
    ///
    /// Grows (never shrinks) both arrays, filling new value slots with the
    /// element default and new flags with "absent". Idempotent when `n` is
    /// not larger than the current size.
    fn ensure_size(&mut self, n: usize);

    /// Current addressable size (equals the owning World's highest entity
    /// count at the last growth).
    fn len(&self) -> usize;

    /// Returns `true` if the pool addresses no entities yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `TypeId` of the stored element type.
    fn element_type_id(&self) -> TypeId;

    /// Human-readable element type name, for diagnostics.
    fn element_type_name(&self) -> &'static str;

    /// Immutable type-erased reference for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutable type-erased reference for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Dense storage for one component type: values and presence flags indexed
/// by entity ID.
pub struct Pool<T> {
    values: Vec<T>,
    mask: Vec<bool>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            mask: Vec::new(),
        }
    }
}

impl<T: Default> Pool<T> {
    /// Writes `value` at `index` and marks it present.
    ///
    /// Overwrites any prior value and flag for that index. The index must be
    /// within the pool's current size.
    #[inline]
    pub fn put(&mut self, index: usize, value: T) {
        self.values[index] = value;
        self.mask[index] = true;
    }

    /// Clears the presence flag at `index`, leaving the stored value intact.
    ///
    /// No-op when `index` is beyond the pool's current size or the flag is
    /// already clear.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        if let Some(flag) = self.mask.get_mut(index) {
            *flag = false;
        }
    }

    /// Returns `true` if `index` is in range and marked present.
    #[inline]
    pub fn has(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Returns the value at `index` if it is in range and marked present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.has(index) {
            Some(&self.values[index])
        } else {
            None
        }
    }

    /// Mutable variant of [`get`](Pool::get).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.has(index) {
            Some(&mut self.values[index])
        } else {
            None
        }
    }

    /// Direct mutable access to the value at `index`.
    ///
    /// The caller must have already observed the presence flag; `index` must
    /// be within the pool's current size.
    #[inline]
    pub(crate) fn value_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T: Default + Send + Sync + 'static> TypeErasedPool for Pool<T> {
    fn ensure_size(&mut self, n: usize) {
        if self.values.len() < n {
            self.values.resize_with(n, T::default);
            self.mask.resize(n, false);
        }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn element_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn element_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
