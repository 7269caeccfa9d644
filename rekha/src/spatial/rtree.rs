//! R-tree backed [`SpatialIndex`].

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

use super::SpatialIndex;
use crate::core::Bounds;

type Entry<T> = GeomWithData<Rectangle<[f64; 2]>, T>;

fn rectangle(bounds: &Bounds) -> Rectangle<[f64; 2]> {
    Rectangle::from_corners([bounds.min.x, bounds.min.y], [bounds.max.x, bounds.max.y])
}

/// Spatial index over line bounding boxes using an R-tree.
///
/// # Example
/// ```rust
/// use rekha::core::{Bounds, Coord};
/// use rekha::spatial::{LineIndex, SpatialIndex};
///
/// let index = LineIndex::from_entries([
///     (Bounds::new(Coord::new(0.0, 0.0), Coord::new(5.0, 0.0)), 0usize),
///     (Bounds::new(Coord::new(0.0, 5.0), Coord::new(5.0, 5.0)), 1usize),
/// ]);
///
/// let hits = index.query(&Bounds::around(Coord::new(2.0, 0.1), 0.5));
/// assert_eq!(hits, vec![0]);
/// ```
pub struct LineIndex<T> {
    tree: RTree<Entry<T>>,
}

impl<T> LineIndex<T> {
    /// Create an empty index.
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }
}

impl<T: Clone> SpatialIndex<T> for LineIndex<T> {
    /// O(log n) insertion time.
    fn insert(&mut self, bounds: Bounds, payload: T) {
        self.tree.insert(GeomWithData::new(rectangle(&bounds), payload));
    }

    fn query(&self, window: &Bounds) -> Vec<T> {
        let aabb = AABB::from_corners([window.min.x, window.min.y], [window.max.x, window.max.y]);

        self.tree
            .locate_in_envelope_intersecting(&aabb)
            .map(|entry| entry.data.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.tree.size()
    }

    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Bounds, T)>,
    {
        let entries: Vec<Entry<T>> = entries
            .into_iter()
            .map(|(bounds, payload)| GeomWithData::new(rectangle(&bounds), payload))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }
}

impl<T> Default for LineIndex<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Debug for LineIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> Bounds {
        Bounds::from_coords([Coord::new(x0, y0), Coord::new(x1, y1)]).unwrap()
    }

    fn make_test_index() -> LineIndex<usize> {
        LineIndex::from_entries([
            (segment(0.0, 0.0, 5.0, 0.0), 0),   // Horizontal at y=0
            (segment(5.0, 0.0, 5.0, 5.0), 1),   // Vertical at x=5
            (segment(5.0, 5.0, 0.0, 5.0), 2),   // Horizontal at y=5
            (segment(0.0, 5.0, 0.0, 0.0), 3),   // Vertical at x=0
            (segment(10.0, 0.0, 15.0, 0.0), 4), // Far horizontal
        ])
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_new_index() {
        let index = make_test_index();
        assert_eq!(index.len(), 5);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index: LineIndex<usize> = LineIndex::empty();
        assert!(index.is_empty());
        assert!(index.query(&Bounds::around(Coord::ZERO, 100.0)).is_empty());
    }

    #[test]
    fn test_query_small_window() {
        let index = make_test_index();

        // Near the middle of the bottom wall
        let hits = index.query(&Bounds::around(Coord::new(2.5, 0.1), 0.2));
        assert_eq!(hits, vec![0]);

        // At the bottom-left corner: bottom and left walls
        let hits = sorted(index.query(&Bounds::around(Coord::new(0.0, 0.0), 0.01)));
        assert_eq!(hits, vec![0, 3]);
    }

    #[test]
    fn test_query_large_window() {
        let index = make_test_index();

        let room = sorted(index.query(&Bounds::new(
            Coord::new(-1.0, -1.0),
            Coord::new(6.0, 6.0),
        )));
        assert_eq!(room, vec![0, 1, 2, 3]);

        let all = index.query(&Bounds::new(Coord::new(-1.0, -1.0), Coord::new(20.0, 10.0)));
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_query_window_inside_box_hits_line() {
        let index = LineIndex::from_entries([(segment(0.0, 0.0, 10.0, 10.0), 7usize)]);

        // Window strictly inside the diagonal's box but off the line itself
        let hits = index.query(&Bounds::around(Coord::new(8.0, 2.0), 1e-5));
        assert_eq!(hits, vec![7]);
    }

    #[test]
    fn test_insert_one_at_a_time() {
        let mut index = LineIndex::empty();
        index.insert(segment(0.0, 0.0, 1.0, 0.0), 0usize);
        index.insert(segment(0.0, 1.0, 1.0, 1.0), 1usize);
        assert_eq!(index.len(), 2);

        let hits = index.query(&Bounds::around(Coord::new(0.5, 0.1), 0.2));
        assert_eq!(hits, vec![0]);
    }
}
