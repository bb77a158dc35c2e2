//! The interaction controller.
//!
//! [`GraphEditor`] owns the graph, the viewport, the selection and the
//! operation gate, and turns decoded input events into edits. Each event is
//! handled to completion before the next one; nothing here blocks or spawns.

use super::hit_test::{nearest_edge, nearest_vertex};
use super::input::*;
use super::operations::{GraphOperation, OperationGate};
use super::selection::{ObserverId, Selection, SelectionObserver, SelectionState};
use super::viewport::{CanvasSize, ScreenPos, Viewport, WheelDirection};
use crate::config::EditorConfig;
use crate::graph::{Graph, GraphModel};
use crate::types::*;
use log::{debug, info, warn};

/// Interactive editing state for one graph canvas.
///
/// Every instance owns its own gate and observer list; nothing is shared
/// between editors.
#[derive(Debug)]
pub struct GraphEditor<G: GraphModel = Graph> {
    graph: G,
    viewport: Viewport,
    selection: SelectionState,
    gate: OperationGate,
    config: EditorConfig,
    /// Last pointer position of an active secondary-button pan
    pan_anchor: Option<ScreenPos>,
}

impl Default for GraphEditor<Graph> {
    fn default() -> Self {
        Self::new(Graph::new(), EditorConfig::default())
    }
}

impl<G: GraphModel> GraphEditor<G> {
    /// Creates an editor over `graph` using `config`.
    ///
    /// The viewport starts at the default zoom with no pan; call
    /// [`GraphEditor::fit_to_content`] once the canvas size is known.
    pub fn new(graph: G, config: EditorConfig) -> Self {
        Self {
            graph,
            viewport: Viewport::default(),
            selection: SelectionState::new(config.clear_notification),
            gate: OperationGate::with_enabled(config.enabled_operations.iter().copied()),
            config,
            pan_anchor: None,
        }
    }

    /// The graph being edited.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Mutable access to the graph for programmatic edits.
    ///
    /// Removing the selected element through this handle leaves a stale
    /// selection; call [`GraphEditor::clear_selection`] afterwards.
    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph
    }

    /// Swaps in a new graph, clears the selection and fits the view to it.
    ///
    /// Returns the previous graph.
    pub fn replace_graph(&mut self, graph: G, canvas: CanvasSize) -> G {
        let old = std::mem::replace(&mut self.graph, graph);
        self.selection.clear();
        self.pan_anchor = None;
        info!(
            "replaced graph: {} vertices, {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        let _ = self.fit_to_content(canvas);
        old
    }

    /// Current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replaces the viewport parameters.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    /// Selected vertex, if any.
    pub fn selected_vertex(&self) -> Option<VertexId> {
        self.selection.vertex()
    }

    /// Selected edge, if any.
    pub fn selected_edge(&self) -> Option<EdgeId> {
        self.selection.edge()
    }

    /// Selects a vertex programmatically. Does not consult the gate.
    pub fn select_vertex(&mut self, vertex: Option<VertexId>) -> bool {
        self.selection.select_vertex(vertex)
    }

    /// Selects an edge programmatically. Does not consult the gate.
    pub fn select_edge(&mut self, edge: Option<EdgeId>) -> bool {
        self.selection.select_edge(edge)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear()
    }

    /// Registers a selection observer.
    pub fn add_selection_observer(&mut self, observer: Box<dyn SelectionObserver>) -> ObserverId {
        self.selection.add_observer(observer)
    }

    /// Unregisters a selection observer.
    pub fn remove_selection_observer(&mut self, id: ObserverId) -> bool {
        self.selection.remove_observer(id)
    }

    /// Enables one operation kind.
    pub fn enable_operation(&mut self, operation: GraphOperation) {
        self.gate.enable(operation);
    }

    /// Disables one operation kind.
    pub fn disable_operation(&mut self, operation: GraphOperation) {
        self.gate.disable(operation);
    }

    /// Whether an operation kind is enabled.
    pub fn is_operation_enabled(&self, operation: GraphOperation) -> bool {
        self.gate.is_enabled(operation)
    }

    /// Replaces the enabled set; an empty input disables every operation.
    pub fn set_enabled_operations(&mut self, operations: impl IntoIterator<Item = GraphOperation>) {
        self.gate.set_enabled(operations);
    }

    /// The operation gate.
    pub fn operations(&self) -> &OperationGate {
        &self.gate
    }

    /// Hit radius in world units at the current zoom.
    pub fn hit_tolerance(&self) -> f64 {
        self.viewport.pixels_to_world(self.config.hit_precision_px)
    }

    /// Converts a canvas position to world space.
    pub fn screen_to_world(&self, pos: ScreenPos, canvas: CanvasSize) -> WorldPos {
        self.viewport.screen_to_world(pos, canvas)
    }

    /// Converts a world position to canvas pixels.
    pub fn world_to_screen(&self, pos: WorldPos, canvas: CanvasSize) -> ScreenPos {
        self.viewport.world_to_screen(pos, canvas)
    }

    /// Fits the view to the graph. Not gated: it only changes the view.
    pub fn fit_to_content(&mut self, canvas: CanvasSize) -> EventOutcome {
        if self
            .viewport
            .fit_to_content(self.graph.bounds(), canvas, self.config.fit_margin_px)
        {
            info!("fitted view: zoom {:.4}", self.viewport.zoom());
            EventOutcome::REDRAW
        } else {
            debug!("fit skipped: nothing to fit in {canvas:?}");
            EventOutcome::IGNORED
        }
    }

    /// Dispatches a decoded event to the matching handler.
    pub fn handle_event(&mut self, event: InputEvent, canvas: CanvasSize) -> EventOutcome {
        match event {
            InputEvent::PointerPressed { pos, button, modifiers } => {
                self.pointer_pressed(pos, button, modifiers, canvas)
            }
            InputEvent::PointerReleased { button, .. } => self.pointer_released(button),
            InputEvent::PointerDragged { pos, held } => self.pointer_dragged(pos, held, canvas),
            InputEvent::Wheel { pos, direction } => self.wheel(pos, direction, canvas),
            InputEvent::KeyPressed { key } => self.key_pressed(key, canvas),
        }
    }

    /// Handles a mouse button press.
    pub fn pointer_pressed(
        &mut self,
        pos: ScreenPos,
        button: PointerButton,
        modifiers: Modifiers,
        canvas: CanvasSize,
    ) -> EventOutcome {
        match button {
            PointerButton::Primary
                if modifiers.connect && self.gate.is_enabled(GraphOperation::AddEdge) =>
            {
                self.connect_click(pos, canvas)
            }
            PointerButton::Primary => self.plain_click(pos, canvas),
            PointerButton::Secondary => {
                self.pan_anchor = Some(pos);
                EventOutcome::IGNORED
            }
            PointerButton::Middle => EventOutcome::IGNORED,
        }
    }

    /// Handles a mouse button release. Ends a pan gesture.
    pub fn pointer_released(&mut self, button: PointerButton) -> EventOutcome {
        if button == PointerButton::Secondary {
            self.pan_anchor = None;
        }
        EventOutcome::IGNORED
    }

    /// Handles pointer movement with buttons held.
    ///
    /// A held secondary button pans by the delta since the previous event.
    /// Otherwise a held primary button drags the selected vertex so that it
    /// sits directly under the pointer.
    pub fn pointer_dragged(&mut self, pos: ScreenPos, held: HeldButtons, canvas: CanvasSize) -> EventOutcome {
        if held.secondary {
            let outcome = match self.pan_anchor {
                Some(anchor) => {
                    self.viewport
                        .pan(pos.x.saturating_sub(anchor.x), pos.y.saturating_sub(anchor.y));
                    EventOutcome::REDRAW
                }
                None => EventOutcome::IGNORED,
            };
            self.pan_anchor = Some(pos);
            return outcome;
        }

        if !held.primary {
            return EventOutcome::IGNORED;
        }
        let Some(vertex) = self.selection.vertex() else {
            return EventOutcome::IGNORED;
        };
        if !self.gate.is_enabled(GraphOperation::MoveVertex) {
            debug!("move of {vertex} skipped: MoveVertex disabled");
            return EventOutcome::IGNORED;
        }

        let world = self.viewport.screen_to_world(pos, canvas);
        if self.graph.set_vertex_position(vertex, world) {
            EventOutcome::REDRAW
        } else {
            EventOutcome::IGNORED
        }
    }

    /// Handles one wheel notch by zooming around the pointer.
    ///
    /// Ignored once the zoom limit in that direction has been reached.
    pub fn wheel(&mut self, pos: ScreenPos, direction: WheelDirection, canvas: CanvasSize) -> EventOutcome {
        let zoomed = self.viewport.zoom_at(
            pos,
            direction,
            canvas,
            self.config.zoom_in_step,
            self.config.zoom_out_step,
        );
        if zoomed {
            EventOutcome::REDRAW
        } else {
            debug!("wheel {direction:?} ignored at zoom {}", self.viewport.zoom());
            EventOutcome::IGNORED
        }
    }

    /// Handles a key press.
    pub fn key_pressed(&mut self, key: Key, canvas: CanvasSize) -> EventOutcome {
        match key {
            Key::Delete => self.delete_selected(),
            Key::FitView => self.fit_to_content(canvas),
            Key::Other => EventOutcome::IGNORED,
        }
    }

    /// Deletes the selected vertex (with its edges) or the selected edge,
    /// whichever is selected and allowed.
    pub fn delete_selected(&mut self) -> EventOutcome {
        match self.selection.current() {
            Selection::Vertex(vertex) if self.gate.is_enabled(GraphOperation::DeleteVertex) => {
                self.graph.remove_vertex(vertex);
                self.selection.deselect_vertex();
                debug!("deleted vertex {vertex}");
                EventOutcome::REDRAW
            }
            Selection::Edge(edge) if self.gate.is_enabled(GraphOperation::DeleteEdge) => {
                self.graph.remove_edge(edge);
                self.selection.deselect_edge();
                debug!("deleted edge {edge}");
                EventOutcome::REDRAW
            }
            Selection::None => EventOutcome::IGNORED,
            selection => {
                debug!("delete of {selection:?} skipped: operation disabled");
                EventOutcome::IGNORED
            }
        }
    }

    /// Primary click without the connect modifier: select a vertex, else an
    /// edge, else create a vertex. Disabled branches fall through.
    fn plain_click(&mut self, pos: ScreenPos, canvas: CanvasSize) -> EventOutcome {
        let world = self.viewport.screen_to_world(pos, canvas);
        let tolerance = self.hit_tolerance();

        if self.gate.is_enabled(GraphOperation::SelectVertex) {
            if let Some(vertex) = nearest_vertex(&self.graph, world, tolerance) {
                self.selection.select_vertex(Some(vertex));
                return EventOutcome::REDRAW;
            }
        }

        if self.gate.is_enabled(GraphOperation::SelectEdge) {
            if let Some(edge) = nearest_edge(&self.graph, world, tolerance) {
                self.selection.select_edge(Some(edge));
                return EventOutcome::REDRAW;
            }
        }

        if self.gate.is_enabled(GraphOperation::AddVertex) {
            let vertex = self.graph.add_vertex(world);
            self.selection.select_vertex(Some(vertex));
            debug!("added vertex {vertex} at ({:.2}, {:.2})", world.x, world.y);
            return EventOutcome::REDRAW;
        }

        EventOutcome::IGNORED
    }

    /// Primary click with the connect modifier while AddEdge is enabled.
    ///
    /// Without a selected vertex the click is swallowed. Clicking empty space
    /// creates a vertex, connects it to the selection and moves the selection
    /// to it; clicking another vertex connects the two unless they already are.
    fn connect_click(&mut self, pos: ScreenPos, canvas: CanvasSize) -> EventOutcome {
        let Some(selected) = self.selection.vertex() else {
            debug!("connect click ignored: no vertex selected");
            return EventOutcome::IGNORED;
        };

        let world = self.viewport.screen_to_world(pos, canvas);
        match nearest_vertex(&self.graph, world, self.hit_tolerance()) {
            None if self.gate.is_enabled(GraphOperation::AddVertex) => {
                let vertex = self.graph.add_vertex(world);
                if let Err(err) = self.graph.add_edge(vertex, selected) {
                    warn!("could not connect new vertex {vertex}: {err}");
                }
                self.selection.select_vertex(Some(vertex));
                EventOutcome::REDRAW
            }
            None => {
                debug!("connect to empty space skipped: AddVertex disabled");
                EventOutcome::IGNORED
            }
            Some(target) if target != selected && !self.graph.contains_edge(selected, target) => {
                if let Err(err) = self.graph.add_edge(selected, target) {
                    warn!("could not connect {selected} to {target}: {err}");
                    return EventOutcome::IGNORED;
                }
                EventOutcome::REDRAW
            }
            Some(target) => {
                debug!("edge {selected} - {target} not added: self loop or duplicate");
                EventOutcome::IGNORED
            }
        }
    }
}
