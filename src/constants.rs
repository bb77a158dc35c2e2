//! Shared application-wide constants.
//! Centralizes tweakable values used across hit testing, rendering and view fitting.

// Hit testing
/// How close (in screen pixels) a pointer must be to a vertex or edge to hit it.
/// Converted to world units with the current zoom factor before every hit test.
pub const HIT_PRECISION_PX: f64 = 7.0;

// Rendering
/// Radius of a drawn vertex, in screen pixels.
pub const VERTEX_RADIUS_PX: f32 = 5.0;
/// Stroke width of an unselected vertex outline or edge (screen pixels).
pub const STROKE_WIDTH: f32 = 1.0;
/// Stroke width used for the selected vertex outline.
pub const SELECTED_STROKE_WIDTH: f32 = 2.0;

// Viewport
/// Margin in screen pixels kept around the graph when fitting the view.
pub const FIT_MARGIN_PX: i32 = 20;
/// Zoom factor multiplier applied when the wheel scrolls toward zooming in.
pub const ZOOM_IN_STEP: f64 = 10.0 / 11.0;
/// Zoom factor multiplier applied when the wheel scrolls toward zooming out.
pub const ZOOM_OUT_STEP: f64 = 11.0 / 10.0;
/// Initial zoom factor (world units per pixel).
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Smallest zoom factor reachable by wheel zoom or fitting (most zoomed in).
pub const MIN_ZOOM: f64 = 1.0e-3;
/// Largest zoom factor reachable by wheel zoom or fitting (most zoomed out).
pub const MAX_ZOOM: f64 = 1.0e3;

// Configuration
/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "GRAPH_EDITOR_CONFIG";
/// eframe storage key under which the editor configuration is persisted.
pub const CONFIG_STORAGE_KEY: &str = "editor_config";
