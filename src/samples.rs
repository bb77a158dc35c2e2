//! Built-in sample graphs that can be quickly loaded from the UI.

use crate::graph::{Graph, GraphModel};
use crate::types::*;

/// Kinds of built-in sample graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Five vertices in a zig-zag line
    Path,
    /// Three mutually connected vertices
    Triangle,
    /// A 4x4 lattice
    Grid,
    /// One hub connected to six spokes
    Star,
}

/// Metadata for a single sample.
pub struct SampleInfo {
    /// Stable identifier for the sample
    pub kind: SampleKind,
    /// Human-friendly display name
    pub name: &'static str,
}

/// Returns all samples with their display names.
pub const fn all_samples() -> &'static [SampleInfo] {
    const SAMPLES: &[SampleInfo] = &[
        SampleInfo {
            kind: SampleKind::Path,
            name: "Path",
        },
        SampleInfo {
            kind: SampleKind::Triangle,
            name: "Triangle",
        },
        SampleInfo {
            kind: SampleKind::Grid,
            name: "Grid (4x4)",
        },
        SampleInfo {
            kind: SampleKind::Star,
            name: "Star",
        },
    ];
    SAMPLES
}

/// Builds a graph for the given sample kind.
pub fn build_sample(kind: SampleKind) -> Graph {
    match kind {
        SampleKind::Path => build_path(),
        SampleKind::Triangle => build_triangle(),
        SampleKind::Grid => build_grid(4),
        SampleKind::Star => build_star(6),
    }
}

/// Connects consecutive vertices. Endpoints always exist, so errors only
/// come from programming mistakes and are logged.
fn connect_chain(graph: &mut Graph, ids: &[VertexId]) {
    for pair in ids.windows(2) {
        if let Err(err) = graph.add_edge(pair[0], pair[1]) {
            log::warn!("sample edge skipped: {err}");
        }
    }
}

fn build_path() -> Graph {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = (0..5_i32)
        .map(|i| {
            let y = if i % 2 == 0 { 0.0 } else { 40.0 };
            graph.add_vertex(WorldPos::new(f64::from(i) * 60.0, y))
        })
        .collect();
    connect_chain(&mut graph, &ids);
    graph
}

fn build_triangle() -> Graph {
    let mut graph = Graph::new();
    let a = graph.add_vertex(WorldPos::new(0.0, 0.0));
    let b = graph.add_vertex(WorldPos::new(100.0, 0.0));
    let c = graph.add_vertex(WorldPos::new(50.0, 86.6));
    connect_chain(&mut graph, &[a, b, c, a]);
    graph
}

fn build_grid(size: u32) -> Graph {
    let mut graph = Graph::new();
    let mut rows: Vec<Vec<VertexId>> = Vec::new();
    for row in 0..size {
        let ids: Vec<VertexId> = (0..size)
            .map(|col| graph.add_vertex(WorldPos::new(f64::from(col) * 50.0, f64::from(row) * 50.0)))
            .collect();
        connect_chain(&mut graph, &ids);
        if let Some(prev) = rows.last() {
            for (upper, lower) in prev.iter().zip(&ids) {
                connect_chain(&mut graph, &[*upper, *lower]);
            }
        }
        rows.push(ids);
    }
    graph
}

fn build_star(spokes: u32) -> Graph {
    let mut graph = Graph::new();
    let hub = graph.add_vertex(WorldPos::new(0.0, 0.0));
    for i in 0..spokes {
        let angle = std::f64::consts::TAU * f64::from(i) / f64::from(spokes);
        let spoke = graph.add_vertex(WorldPos::new(angle.cos() * 100.0, angle.sin() * 100.0));
        connect_chain(&mut graph, &[hub, spoke]);
    }
    graph
}
