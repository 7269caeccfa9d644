//! Typed polyline records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Bounds, Coord, Point};

/// Role of a line on the map.
///
/// `CenterLine` entries are the ones adjusted by
/// [`CenterlineAdjuster`](crate::centerline::CenterlineAdjuster); every other
/// type is boundary geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    /// Lane centerline, the only type that gets adjusted
    CenterLine,
    /// Dashed white lane divider
    DottedWhite,
    /// Dashed yellow lane divider
    DottedYellow,
    /// Continuous white lane edge
    SolidWhite,
    /// Continuous yellow lane edge
    SolidYellow,
    /// Stop bar across the lane
    StopLine,
    /// Topological connection edge
    TopoLine,
    /// Inferred connection with no painted marking
    VirtualTopo,
    /// Auxiliary inspection output, never part of the map proper.
    DebugLine,
}

impl LineType {
    /// Every line type, in declaration order.
    pub const ALL: [LineType; 9] = [
        LineType::CenterLine,
        LineType::DottedWhite,
        LineType::DottedYellow,
        LineType::SolidWhite,
        LineType::SolidYellow,
        LineType::StopLine,
        LineType::TopoLine,
        LineType::VirtualTopo,
        LineType::DebugLine,
    ];

    /// Wire name (`"center_line"`, `"solid_white"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::CenterLine => "center_line",
            LineType::DottedWhite => "dotted_white",
            LineType::DottedYellow => "dotted_yellow",
            LineType::SolidWhite => "solid_white",
            LineType::SolidYellow => "solid_yellow",
            LineType::StopLine => "stop_line",
            LineType::TopoLine => "topo_line",
            LineType::VirtualTopo => "virtual_topo",
            LineType::DebugLine => "debug_line",
        }
    }

    /// Whether this type acts as boundary geometry during adjustment.
    pub fn is_boundary(&self) -> bool {
        !matches!(self, LineType::CenterLine)
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown line type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line type \"{0}\"")]
pub struct ParseLineTypeError(pub String);

impl FromStr for LineType {
    type Err = ParseLineTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseLineTypeError(s.to_string()))
    }
}

/// An ordered, typed polyline.
///
/// Point order is spatially meaningful. A line with fewer than two points is
/// degenerate and most transformations pass it through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Opaque identifier
    #[serde(default)]
    pub id: String,
    /// Role of the line
    #[serde(rename = "type")]
    pub line_type: LineType,
    /// Vertices in order
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Line {
    /// Create a new line
    pub fn new(id: impl Into<String>, line_type: LineType, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            line_type,
            points,
        }
    }

    /// Create a line whose points are all synthesized from `coords`.
    pub fn from_coords(
        id: impl Into<String>,
        line_type: LineType,
        coords: impl IntoIterator<Item = impl Into<Coord>>,
    ) -> Self {
        Self::new(
            id,
            line_type,
            coords
                .into_iter()
                .map(|c| Point::synthesized(c.into()))
                .collect(),
        )
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// No vertices at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fewer than two vertices (cannot represent a segment)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Whether this is a `center_line`
    #[inline]
    pub fn is_center_line(&self) -> bool {
        self.line_type == LineType::CenterLine
    }

    /// Vertex positions
    pub fn coords(&self) -> Vec<Coord> {
        self.points.iter().map(Point::coord).collect()
    }

    /// First vertex
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last vertex
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Axis-aligned bounding box, `None` for an empty line.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_coords(self.points.iter().map(Point::coord))
    }
}
