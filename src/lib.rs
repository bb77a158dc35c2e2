//! # Graph Editor
//!
//! An interactive editor for undirected vertex/edge graphs drawn on a
//! pannable, zoomable canvas.
//!
//! The interesting part is toolkit independent and lives in [`editor`]:
//! - a world/screen viewport transform with wheel zoom and fit-to-content
//! - hit testing with a constant on-screen radius
//! - a vertex-xor-edge selection with observer callbacks
//! - an operation gate that enables or disables each kind of edit at runtime
//! - the controller that turns decoded pointer and key events into edits
//!
//! The [`app`] module hosts the editor in an eframe window.
//!
//! ## Controls
//! - Click: select a vertex, else an edge, else add a vertex
//! - Ctrl+click: connect the selected vertex (adding a vertex on empty canvas)
//! - Drag: move the selected vertex; right-drag: pan; wheel: zoom
//! - Delete: remove the selection; Space: fit the view to the graph

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod app;
mod config;
pub mod constants;
pub mod editor;
mod error;
mod graph;
mod samples;
mod types;

// Re-export public types and functions
pub use config::EditorConfig;
pub use editor::GraphEditor;
pub use error::{ConfigError, GraphError};
pub use graph::{Graph, GraphModel};
pub use samples::*;
pub use types::*;
use app::GraphEditorApp;

/// Runs the graph editor application with default window settings.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use graph_editor::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Graph Editor",
        options,
        Box::new(|cc| Ok(Box::new(GraphEditorApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_default() {
        let editor: GraphEditor = GraphEditor::default();
        assert_eq!(editor.graph().vertex_count(), 0);
        assert!(editor.selection().is_none());
        assert_eq!(editor.viewport().zoom(), constants::DEFAULT_ZOOM);
    }

    #[test]
    fn test_sample_loads_into_editor() {
        let mut editor: GraphEditor = GraphEditor::default();
        let canvas = editor::CanvasSize::new(640, 480);
        editor.replace_graph(build_sample(SampleKind::Triangle), canvas);
        assert_eq!(editor.graph().vertex_count(), 3);
        assert_ne!(editor.viewport().zoom(), constants::DEFAULT_ZOOM);
    }
}
