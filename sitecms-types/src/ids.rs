//! Monotonic id allocation for editable collections.
//!
//! The reference site mixed two allocation schemes (timestamp-derived ids in
//! one code path, `max + 1` in another), which can collide. Here every new
//! id comes from a single session-scoped high-water mark: seed it with the
//! ids already in the collection, then each allocation returns
//! `high_water + 1`. Deleting the highest record does not make its id
//! available again within the session.

/// Allocates collection-unique ids above everything seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    high_water: u64,
}

impl IdAllocator {
    /// An allocator that has seen no ids; the first allocation returns 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator seeded with every id currently in a collection.
    #[must_use]
    pub fn seeded(ids: impl IntoIterator<Item = u64>) -> Self {
        let mut alloc = Self::new();
        for id in ids {
            alloc.observe(id);
        }
        alloc
    }

    /// Raises the high-water mark to cover `id`.
    pub fn observe(&mut self, id: u64) {
        self.high_water = self.high_water.max(id);
    }

    /// Allocates the next id.
    pub fn next(&mut self) -> u64 {
        self.high_water += 1;
        self.high_water
    }

    /// The highest id observed or allocated so far.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
