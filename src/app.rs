//! Desktop shell: an eframe application hosting one [`GraphEditor`].
//!
//! This module only translates egui input into [`InputEvent`]s and paints the
//! [`crate::editor::DrawList`]; all editing decisions live in the controller.

use crate::config::EditorConfig;
use crate::constants::*;
use crate::editor::*;
use crate::graph::{Graph, GraphModel};
use crate::samples::{all_samples, build_sample};
use crate::types::{EdgeId, VertexId};
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;

/// Turns raw egui events into editor input, tracking which buttons are held.
///
/// Presses outside the canvas are dropped so that dragging across the side
/// panel never moves a vertex.
#[derive(Debug, Default)]
pub struct EguiInputTranslator {
    held: HeldButtons,
    last_pos: Option<ScreenPos>,
}

impl EguiInputTranslator {
    /// Translates one event. `canvas` is the canvas rect in egui screen points.
    pub fn translate(&mut self, event: &egui::Event, canvas: egui::Rect) -> Option<InputEvent> {
        match event {
            egui::Event::PointerMoved(pos) => {
                let pos = to_canvas(*pos, canvas);
                self.last_pos = Some(pos);
                (self.held.primary || self.held.secondary)
                    .then_some(InputEvent::PointerDragged { pos, held: self.held })
            }
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers,
                ..
            } => {
                let button = match button {
                    egui::PointerButton::Primary => PointerButton::Primary,
                    egui::PointerButton::Secondary => PointerButton::Secondary,
                    egui::PointerButton::Middle => PointerButton::Middle,
                    _ => return None,
                };
                let inside = canvas.contains(*pos);
                let pos = to_canvas(*pos, canvas);
                self.last_pos = Some(pos);

                if *pressed {
                    if !inside {
                        return None;
                    }
                    self.set_held(button, true);
                    Some(InputEvent::PointerPressed {
                        pos,
                        button,
                        modifiers: Modifiers {
                            connect: modifiers.command || modifiers.ctrl,
                        },
                    })
                } else {
                    self.set_held(button, false);
                    Some(InputEvent::PointerReleased { pos, button })
                }
            }
            egui::Event::PointerGone => {
                self.held = HeldButtons::default();
                self.last_pos = None;
                None
            }
            egui::Event::MouseWheel { delta, .. } => {
                let pos = self.last_pos?;
                let inside = pos.x >= 0
                    && pos.y >= 0
                    && (pos.x as f32) <= canvas.width()
                    && (pos.y as f32) <= canvas.height();
                if !inside || delta.y == 0.0 {
                    return None;
                }
                // Scrolling away from the user reports a positive delta
                let direction = if delta.y > 0.0 {
                    WheelDirection::Up
                } else {
                    WheelDirection::Down
                };
                Some(InputEvent::Wheel { pos, direction })
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Delete => Some(InputEvent::KeyPressed { key: Key::Delete }),
                egui::Key::Space => Some(InputEvent::KeyPressed { key: Key::FitView }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Buttons currently held, as seen by this translator.
    pub fn held(&self) -> HeldButtons {
        self.held
    }

    fn set_held(&mut self, button: PointerButton, down: bool) {
        match button {
            PointerButton::Primary => self.held.primary = down,
            PointerButton::Secondary => self.held.secondary = down,
            PointerButton::Middle => {}
        }
    }
}

fn to_canvas(pos: egui::Pos2, canvas: egui::Rect) -> ScreenPos {
    let local = pos - canvas.min;
    ScreenPos::new(local.x.round() as i32, local.y.round() as i32)
}

fn to_egui(pos: ScreenPos, canvas: egui::Rect) -> egui::Pos2 {
    canvas.min + egui::vec2(pos.x as f32, pos.y as f32)
}

/// Selection observer backing the status section of the side panel.
#[derive(Debug, Default)]
pub struct SelectionStatus {
    /// Last vertex reported by the editor
    pub vertex: Option<VertexId>,
    /// Last edge reported by the editor
    pub edge: Option<EdgeId>,
    /// Number of notifications received
    pub notifications: u64,
}

impl SelectionObserver for SelectionStatus {
    fn vertex_selected(&mut self, vertex: Option<VertexId>) {
        self.vertex = vertex;
        self.notifications += 1;
    }

    fn edge_selected(&mut self, edge: Option<EdgeId>) {
        self.edge = edge;
        self.notifications += 1;
    }
}

/// The main application structure.
pub struct GraphEditorApp {
    /// The editor driving the canvas
    pub editor: GraphEditor,
    translator: EguiInputTranslator,
    status: Rc<RefCell<SelectionStatus>>,
    /// Canvas size seen in the last frame
    canvas_size: CanvasSize,
    /// Fit the view once the first real canvas size is known
    needs_initial_fit: bool,
}

impl Default for GraphEditorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl GraphEditorApp {
    /// Creates the app, resolving configuration from the environment,
    /// then persisted storage, then defaults.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => EditorConfig::load(&path).unwrap_or_else(|err| {
                log::warn!("ignoring config from {CONFIG_ENV_VAR}: {err}");
                EditorConfig::default()
            }),
            Err(_) => cc
                .storage
                .and_then(|storage| storage.get_string(CONFIG_STORAGE_KEY))
                .and_then(|json| match EditorConfig::from_json(&json) {
                    Ok(config) => Some(config),
                    Err(err) => {
                        log::warn!("ignoring persisted config: {err}");
                        None
                    }
                })
                .unwrap_or_default(),
        };
        Self::with_config(config)
    }

    /// Creates the app with an explicit configuration and an empty graph.
    pub fn with_config(config: EditorConfig) -> Self {
        let mut editor = GraphEditor::new(Graph::new(), config);
        let status = Rc::new(RefCell::new(SelectionStatus::default()));
        editor.add_selection_observer(Box::new(status.clone()));
        Self {
            editor,
            translator: EguiInputTranslator::default(),
            status,
            canvas_size: CanvasSize::new(0, 0),
            needs_initial_fit: true,
        }
    }

    /// Configuration to persist: the startup config with the live gate state.
    pub fn current_config(&self) -> EditorConfig {
        EditorConfig {
            enabled_operations: self.editor.operations().enabled().collect(),
            ..self.editor.config().clone()
        }
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Fit view").clicked() {
                let _ = self.editor.fit_to_content(self.canvas_size);
            }
            if ui.button("Clear").clicked() {
                self.editor.replace_graph(Graph::new(), self.canvas_size);
            }
            ui.separator();
            ui.label("Samples:");
            for info in all_samples() {
                if ui.button(info.name).clicked() {
                    self.editor.replace_graph(build_sample(info.kind), self.canvas_size);
                }
            }
            ui.separator();
            ui.label(format!("zoom {:.3}", self.editor.viewport().zoom()));
        });
    }

    fn draw_side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Operations");
        for op in GraphOperation::ALL {
            let mut enabled = self.editor.is_operation_enabled(op);
            if ui.checkbox(&mut enabled, op.label()).changed() {
                if enabled {
                    self.editor.enable_operation(op);
                } else {
                    self.editor.disable_operation(op);
                }
            }
        }

        ui.separator();
        ui.heading("Selection");
        let status = self.status.borrow();
        match (status.vertex, status.edge) {
            (Some(v), _) => ui.label(format!("Vertex {v}")),
            (_, Some(e)) => ui.label(format!("Edge {e}")),
            _ => ui.label("Nothing selected"),
        };
        ui.label(format!("{} notifications", status.notifications));

        ui.separator();
        ui.label(format!(
            "{} vertices, {} edges",
            self.editor.graph().vertex_count(),
            self.editor.graph().edge_count()
        ));
        ui.small("Click: select / add. Ctrl+click: connect.");
        ui.small("Right-drag: pan. Wheel: zoom. Space: fit. Del: delete.");
    }

    /// Feeds this frame's input to the editor and paints the graph.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        let canvas = CanvasSize::new(rect.width().round() as i32, rect.height().round() as i32);
        self.canvas_size = canvas;

        if self.needs_initial_fit && canvas.width > 0 && canvas.height > 0 {
            let _ = self.editor.fit_to_content(canvas);
            self.needs_initial_fit = false;
        }

        let events = ui.input(|i| i.events.clone());
        let mut redraw = false;
        for event in &events {
            if let Some(input) = self.translator.translate(event, rect) {
                redraw |= self.editor.handle_event(input, canvas).redraw;
            }
        }
        if redraw {
            ui.ctx().request_repaint();
        }

        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        let list = self.editor.draw_list(canvas);
        for edge in &list.edges {
            let color = if edge.selected {
                egui::Color32::RED
            } else {
                egui::Color32::BLACK
            };
            painter.line_segment(
                [to_egui(edge.from, rect), to_egui(edge.to, rect)],
                egui::Stroke::new(STROKE_WIDTH, color),
            );
        }
        for vertex in &list.vertices {
            let center = to_egui(vertex.center, rect);
            painter.circle_filled(center, vertex.radius, egui::Color32::BLUE);
            let stroke = if vertex.selected {
                egui::Stroke::new(SELECTED_STROKE_WIDTH, egui::Color32::RED)
            } else {
                egui::Stroke::new(STROKE_WIDTH, egui::Color32::BLACK)
            };
            painter.circle_stroke(center, vertex.radius, stroke);
        }
    }
}

impl eframe::App for GraphEditorApp {
    /// Persist the editor configuration between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.current_config().to_json() {
            Ok(json) => storage.set_string(CONFIG_STORAGE_KEY, json),
            Err(err) => log::error!("failed to serialize editor config: {err}"),
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });
        egui::SidePanel::right("side_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.draw_side_panel(ui);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(400.0, 300.0))
    }

    fn button(pos: egui::Pos2, button: egui::PointerButton, pressed: bool, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers,
        }
    }

    fn run_ui_with(events: Vec<egui::Event>, f: impl FnMut(&egui::Context)) -> egui::FullOutput {
        let mut raw = egui::RawInput::default();
        raw.screen_rect = Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0)));
        raw.events = events;

        let ctx = egui::Context::default();
        ctx.run(raw, f)
    }

    #[test]
    fn clicking_canvas_frame_adds_and_paints_vertex() {
        let mut app = GraphEditorApp::default();
        let pos = egui::pos2(300.0, 250.0);
        let events = vec![
            egui::Event::PointerMoved(pos),
            button(pos, egui::PointerButton::Primary, true, egui::Modifiers::NONE),
            button(pos, egui::PointerButton::Primary, false, egui::Modifiers::NONE),
        ];

        let output = run_ui_with(events, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                app.draw_canvas(ui);
            });
        });

        assert_eq!(app.editor.graph().vertex_count(), 1);
        assert!(app.editor.selected_vertex().is_some());
        assert!(app.canvas_size.width > 0 && app.canvas_size.height > 0);
        let circles = output
            .shapes
            .iter()
            .filter(|clipped| matches!(clipped.shape, egui::Shape::Circle(_)))
            .count();
        assert_eq!(circles, 2, "vertex fill and outline should be painted");
    }

    #[test]
    fn press_inside_canvas_is_translated_relative_to_origin() {
        let mut translator = EguiInputTranslator::default();
        let event = button(
            egui::pos2(110.0, 70.0),
            egui::PointerButton::Primary,
            true,
            egui::Modifiers::CTRL,
        );

        let input = translator.translate(&event, canvas_rect());

        assert_eq!(
            input,
            Some(InputEvent::PointerPressed {
                pos: ScreenPos::new(100, 50),
                button: PointerButton::Primary,
                modifiers: Modifiers::CONNECT,
            })
        );
        assert!(translator.held().primary);
    }

    #[test]
    fn press_outside_canvas_is_dropped() {
        let mut translator = EguiInputTranslator::default();
        let event = button(
            egui::pos2(500.0, 70.0),
            egui::PointerButton::Primary,
            true,
            egui::Modifiers::NONE,
        );

        assert_eq!(translator.translate(&event, canvas_rect()), None);
        assert!(!translator.held().primary);

        let moved = egui::Event::PointerMoved(egui::pos2(100.0, 100.0));
        assert_eq!(translator.translate(&moved, canvas_rect()), None);
    }

    #[test]
    fn moves_become_drags_while_held() {
        let mut translator = EguiInputTranslator::default();
        let rect = canvas_rect();
        translator.translate(
            &button(egui::pos2(50.0, 50.0), egui::PointerButton::Secondary, true, egui::Modifiers::NONE),
            rect,
        );

        let drag = translator.translate(&egui::Event::PointerMoved(egui::pos2(60.0, 55.0)), rect);
        assert_eq!(
            drag,
            Some(InputEvent::PointerDragged {
                pos: ScreenPos::new(50, 35),
                held: HeldButtons {
                    primary: false,
                    secondary: true,
                },
            })
        );

        let release = translator.translate(
            &button(egui::pos2(60.0, 55.0), egui::PointerButton::Secondary, false, egui::Modifiers::NONE),
            rect,
        );
        assert!(matches!(release, Some(InputEvent::PointerReleased { .. })));
        assert_eq!(translator.translate(&egui::Event::PointerMoved(egui::pos2(70.0, 55.0)), rect), None);
    }

    #[test]
    fn pointer_gone_releases_buttons() {
        let mut translator = EguiInputTranslator::default();
        let rect = canvas_rect();
        translator.translate(
            &button(egui::pos2(50.0, 50.0), egui::PointerButton::Primary, true, egui::Modifiers::NONE),
            rect,
        );
        translator.translate(&egui::Event::PointerGone, rect);
        assert_eq!(translator.held(), HeldButtons::default());
    }

    #[test]
    fn app_observer_tracks_selection() {
        let mut app = GraphEditorApp::default();
        let canvas = CanvasSize::new(400, 300);

        let _ = app.editor.pointer_pressed(ScreenPos::new(40, 40), PointerButton::Primary, Modifiers::NONE, canvas);

        let selected = app.editor.selected_vertex();
        assert!(selected.is_some());
        assert_eq!(app.status.borrow().vertex, selected);
        assert_eq!(app.status.borrow().notifications, 1);
    }

    #[test]
    fn current_config_reflects_gate_changes() {
        let mut app = GraphEditorApp::default();
        app.editor.disable_operation(GraphOperation::DeleteEdge);

        let config = app.current_config();

        assert!(!config.enabled_operations.contains(&GraphOperation::DeleteEdge));
        assert_eq!(config.enabled_operations.len(), GraphOperation::ALL.len() - 1);
    }
}
