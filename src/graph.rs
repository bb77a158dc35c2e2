//! The graph collaborator consumed by the editor.
//!
//! [`GraphModel`] is the small capability interface the interaction controller
//! needs; [`Graph`] is the default in-memory implementation used by the desktop
//! app and the tests.

use crate::error::GraphError;
use crate::types::*;

/// Operations the editor needs from a graph store.
///
/// Elements are referred to by id. Iteration order of [`GraphModel::vertices`]
/// and [`GraphModel::edges`] must not change between two calls unless the
/// graph was mutated in between, so that hit-test tie-breaks are deterministic.
pub trait GraphModel {
    /// Adds a vertex at `position` and returns its id.
    fn add_vertex(&mut self, position: WorldPos) -> VertexId;

    /// Removes a vertex together with every incident edge.
    ///
    /// Returns `false` if the vertex did not exist.
    fn remove_vertex(&mut self, id: VertexId) -> bool;

    /// All vertices in a stable order.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Looks up a vertex by id.
    fn vertex(&self, id: VertexId) -> Option<&Vertex>;

    /// Moves a vertex. Returns `false` if the vertex did not exist.
    fn set_vertex_position(&mut self, id: VertexId, position: WorldPos) -> bool;

    /// Adds an edge between two existing vertices.
    fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, GraphError>;

    /// Removes an edge. Returns `false` if the edge did not exist.
    fn remove_edge(&mut self, id: EdgeId) -> bool;

    /// All edges in a stable order.
    fn edges(&self) -> impl Iterator<Item = &Edge>;

    /// Looks up an edge by id.
    fn edge(&self, id: EdgeId) -> Option<&Edge>;

    /// Whether an edge joins `a` and `b` in either direction.
    fn contains_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges().any(|e| e.connects(a, b))
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Bounding box of every vertex position, or `None` for an empty graph.
    fn bounds(&self) -> Option<WorldBounds> {
        WorldBounds::from_points(self.vertices().map(|v| v.position))
    }
}

/// In-memory graph keeping vertices and edges in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Shows or hides a vertex. Returns `false` if the vertex did not exist.
    pub fn set_vertex_visible(&mut self, id: VertexId, visible: bool) -> bool {
        match self.vertices.iter_mut().find(|v| v.id == id) {
            Some(vertex) => {
                vertex.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Shows or hides an edge. Returns `false` if the edge did not exist.
    pub fn set_edge_visible(&mut self, id: EdgeId, visible: bool) -> bool {
        match self.edges.iter_mut().find(|e| e.id == id) {
            Some(edge) => {
                edge.visible = visible;
                true
            }
            None => false,
        }
    }
}

impl GraphModel for Graph {
    fn add_vertex(&mut self, position: WorldPos) -> VertexId {
        let vertex = Vertex::new(position);
        let id = vertex.id;
        self.vertices.push(vertex);
        id
    }

    fn remove_vertex(&mut self, id: VertexId) -> bool {
        let before = self.vertices.len();
        self.vertices.retain(|v| v.id != id);
        let removed = self.vertices.len() != before;
        if removed {
            self.edges.retain(|e| !e.touches(id));
        }
        removed
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    fn set_vertex_position(&mut self, id: VertexId, position: WorldPos) -> bool {
        match self.vertices.iter_mut().find(|v| v.id == id) {
            Some(vertex) => {
                vertex.position = position;
                true
            }
            None => false,
        }
    }

    fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        for id in [a, b] {
            if self.vertex(id).is_none() {
                return Err(GraphError::UnknownVertex(id));
            }
        }

        let edge = Edge::new(a, b);
        let id = edge.id;
        self.edges.push(edge);
        Ok(id)
    }

    fn remove_edge(&mut self, id: EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
