//! Reusable multivector storage
//!
//! Hosts that keep many rotors alive across frames (one interpolation per
//! animated object) park them here instead of allocating per frame. Slots
//! are handed out zeroed and addressed through generational keys, so a
//! stale key after release is a detectable `None` rather than silent
//! corruption. The pool is owned by the caller and passed explicitly;
//! there is no process-wide instance.
//!
//! The pool never blocks and never fails: acquiring beyond the pre-warmed
//! capacity simply grows the backing storage.

use cgalerp_math::Multivector;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational key to a pooled multivector slot.
    pub struct MvKey;
}

/// Pre-warmed arena of multivector slots.
pub struct MvPool {
    slots: SlotMap<MvKey, Multivector>,
}

impl Default for MvPool {
    fn default() -> Self {
        Self::new()
    }
}

impl MvPool {
    /// Default pre-warmed capacity, sized to cover one frame's worth of
    /// rotors without growth.
    pub const DEFAULT_CAPACITY: usize = 5000;

    /// Create a pool with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a pool pre-warmed to hold `capacity` slots without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Hand out a zeroed slot, reusing released storage when available.
    pub fn acquire(&mut self) -> MvKey {
        self.slots.insert(Multivector::ZERO)
    }

    /// Return a slot to the pool. Returns `false` when the key is stale
    /// (already released), making a double release detectable.
    pub fn release(&mut self, key: MvKey) -> bool {
        self.slots.remove(key).is_some()
    }

    /// Read a live slot; `None` for stale keys.
    pub fn get(&self, key: MvKey) -> Option<&Multivector> {
        self.slots.get(key)
    }

    /// Mutate a live slot; `None` for stale keys.
    pub fn get_mut(&mut self, key: MvKey) -> Option<&mut Multivector> {
        self.slots.get_mut(key)
    }

    /// Number of slots currently handed out.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slots are handed out.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total slot capacity before the pool has to grow.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}
