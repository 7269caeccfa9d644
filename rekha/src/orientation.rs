//! Left/right side classification against a directed segment.

use crate::core::Coord;

/// Side of a directed reference segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Counter-clockwise of the reference direction
    Left,
    /// Clockwise of the reference direction
    Right,
}

/// Classify `candidate` against the directed segment `origin → toward`.
///
/// Uses the sign of `cross(toward - origin, candidate - origin)`:
/// positive is [`Side::Left`], negative is [`Side::Right`]. Exactly zero
/// (collinear, or a zero-length reference) is ambiguous and yields `None`.
///
/// ```
/// use rekha::core::Coord;
/// use rekha::orientation::{Side, classify};
///
/// let a = Coord::new(0.0, 0.0);
/// let b = Coord::new(1.0, 0.0);
/// assert_eq!(classify(a, b, Coord::new(0.0, 1.0)), Some(Side::Left));
/// assert_eq!(classify(a, b, Coord::new(0.0, -1.0)), Some(Side::Right));
/// assert_eq!(classify(a, b, Coord::new(2.0, 0.0)), None);
/// ```
#[inline]
pub fn classify(origin: Coord, toward: Coord, candidate: Coord) -> Option<Side> {
    let cross = (toward - origin).cross(candidate - origin);
    if cross > 0.0 {
        Some(Side::Left)
    } else if cross < 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}
