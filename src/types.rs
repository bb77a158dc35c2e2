//! Core data types for the graph editor.
//!
//! This module defines the element identifiers, world-space geometry and the
//! vertex and edge records stored by the graph.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a graph vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(Uuid);

impl VertexId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v-{}", self.0)
    }
}

/// Unique identifier for a graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(Uuid);

impl EdgeId {
    /// Creates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e-{}", self.0)
    }
}

/// A point in world space (the graph's own coordinate system, Y pointing up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    /// Horizontal world coordinate
    pub x: f64,
    /// Vertical world coordinate
    pub y: f64,
}

impl WorldPos {
    /// Creates a world-space point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: WorldPos) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    /// Lower-left corner
    pub min: WorldPos,
    /// Upper-right corner
    pub max: WorldPos,
}

impl WorldBounds {
    /// Smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = WorldPos>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => WorldBounds { min: p, max: p },
                Some(b) => WorldBounds {
                    min: WorldPos::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: WorldPos::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                },
            })
        })
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A vertex of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,
    /// Position in world space
    pub position: WorldPos,
    /// Whether the vertex is drawn. Hidden vertices still take part in hit testing.
    pub visible: bool,
}

impl Vertex {
    /// Creates a visible vertex at the given world position.
    pub fn new(position: WorldPos) -> Self {
        Self {
            id: VertexId::new(),
            position,
            visible: true,
        }
    }
}

/// An undirected edge between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,
    /// First endpoint
    pub a: VertexId,
    /// Second endpoint
    pub b: VertexId,
    /// Whether the edge is drawn. Hidden edges still take part in hit testing.
    pub visible: bool,
}

impl Edge {
    /// Creates a visible edge between `a` and `b`.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            id: EdgeId::new(),
            a,
            b,
            visible: true,
        }
    }

    /// Whether this edge joins `x` and `y`, in either order.
    pub fn connects(&self, x: VertexId, y: VertexId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Whether `v` is one of the endpoints.
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }
}
