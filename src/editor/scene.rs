//! Render-packet derivation: what to draw and where, in canvas pixels.
//!
//! The presentation layer only has to paint the returned shapes in order
//! (edges first, then vertices on top).

use super::controller::GraphEditor;
use super::viewport::{CanvasSize, ScreenPos};
use crate::graph::GraphModel;
use crate::types::{EdgeId, VertexId};

/// A vertex to draw as a filled, outlined circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexShape {
    /// Vertex being drawn
    pub id: VertexId,
    /// Circle center
    pub center: ScreenPos,
    /// Circle radius in pixels
    pub radius: f32,
    /// Whether the vertex is the current selection
    pub selected: bool,
}

/// An edge to draw as a straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    /// Edge being drawn
    pub id: EdgeId,
    /// First endpoint
    pub from: ScreenPos,
    /// Second endpoint
    pub to: ScreenPos,
    /// Whether the edge is the current selection
    pub selected: bool,
}

/// Everything visible on the canvas for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Visible edges
    pub edges: Vec<EdgeLine>,
    /// Visible vertices
    pub vertices: Vec<VertexShape>,
}

impl<G: GraphModel> GraphEditor<G> {
    /// Computes the shapes to paint for the current graph, view and selection.
    ///
    /// Hidden vertices and edges are left out. An edge is still drawn when its
    /// endpoints are hidden.
    pub fn draw_list(&self, canvas: CanvasSize) -> DrawList {
        let graph = self.graph();
        let selected_vertex = self.selected_vertex();
        let selected_edge = self.selected_edge();

        let edges = graph
            .edges()
            .filter(|e| e.visible)
            .filter_map(|e| {
                let a = graph.vertex(e.a)?;
                let b = graph.vertex(e.b)?;
                Some(EdgeLine {
                    id: e.id,
                    from: self.world_to_screen(a.position, canvas),
                    to: self.world_to_screen(b.position, canvas),
                    selected: selected_edge == Some(e.id),
                })
            })
            .collect();

        let vertices = graph
            .vertices()
            .filter(|v| v.visible)
            .map(|v| VertexShape {
                id: v.id,
                center: self.world_to_screen(v.position, canvas),
                radius: self.config().vertex_radius_px,
                selected: selected_vertex == Some(v.id),
            })
            .collect();

        DrawList { edges, vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::types::WorldPos;

    #[test]
    fn test_draw_list_skips_hidden_and_flags_selection() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(WorldPos::new(10.0, 10.0));
        let b = graph.add_vertex(WorldPos::new(20.0, 10.0));
        let hidden = graph.add_vertex(WorldPos::new(30.0, 10.0));
        let ab = graph.add_edge(a, b).unwrap();
        let bh = graph.add_edge(b, hidden).unwrap();
        graph.set_vertex_visible(hidden, false);
        graph.set_edge_visible(ab, false);

        let mut editor = GraphEditor::new(graph, Default::default());
        editor.select_vertex(Some(a));

        let canvas = CanvasSize::new(100, 100);
        let list = editor.draw_list(canvas);

        assert_eq!(list.vertices.len(), 2);
        assert!(list.vertices.iter().all(|v| v.id != hidden));
        let shape_a = list.vertices.iter().find(|v| v.id == a).unwrap();
        assert!(shape_a.selected);
        assert_eq!(shape_a.center, ScreenPos::new(10, 90));

        assert_eq!(list.edges.len(), 1);
        assert_eq!(list.edges[0].id, bh);
        assert_eq!(list.edges[0].from, ScreenPos::new(20, 90));
        assert_eq!(list.edges[0].to, ScreenPos::new(30, 90));
        assert!(!list.edges[0].selected);
    }
}
