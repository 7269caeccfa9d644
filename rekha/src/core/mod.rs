//! Core value types.
//!
//! - [`Coord`]: plain planar coordinate used for arithmetic
//! - [`Point`]: identified map point
//! - [`Line`] and [`LineType`]: typed polyline record
//! - [`Bounds`]: axis-aligned bounding box
//!
//! Coordinates must already be planar and metrically comparable; no
//! projection or unit conversion happens anywhere in this crate.

mod bounds;
mod coord;
mod line;
mod point;

pub use bounds::Bounds;
pub use coord::Coord;
pub use line::{Line, LineType, ParseLineTypeError};
pub use point::Point;
