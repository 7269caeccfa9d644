//! Bounding-box spatial indexing.
//!
//! [`SpatialIndex`] is the capability the centerline adjuster needs: store a
//! payload under a box, then ask which payloads have boxes meeting a query
//! window. [`LineIndex`] is the default R-tree implementation.

mod rtree;

pub use rtree::LineIndex;

use crate::core::Bounds;

/// Box-keyed payload index.
pub trait SpatialIndex<T>: Default {
    /// Insert `payload` under `bounds`.
    fn insert(&mut self, bounds: Bounds, payload: T);

    /// All payloads whose box intersects `window` (touching counts).
    fn query(&self, window: &Bounds) -> Vec<T>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Whether the index holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build an index from a batch of entries.
    ///
    /// Implementations with a cheaper bulk path should override this.
    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Bounds, T)>,
        Self: Sized,
    {
        let mut index = Self::default();
        for (bounds, payload) in entries {
            index.insert(bounds, payload);
        }
        index
    }
}
