//! The view/interaction core of the graph editor.
//!
//! # Module Organization
//!
//! - `viewport` - World/screen transform, pan, wheel zoom and fit-to-content
//! - `hit_test` - Nearest vertex / edge lookup within a tolerance
//! - `selection` - Vertex-xor-edge selection and its observers
//! - `operations` - Runtime enable/disable of edit operations
//! - `input` - Toolkit-independent input events
//! - `controller` - The state machine turning input into edits
//! - `scene` - What to paint, in canvas pixels

mod controller;
mod input;
mod operations;
mod scene;
mod selection;
mod viewport;


pub use controller::GraphEditor;
pub use hit_test::{nearest_edge, nearest_vertex, point_to_segment_distance};
pub use input::{EventOutcome, HeldButtons, InputEvent, Key, Modifiers, PointerButton};
pub use operations::{GraphOperation, OperationGate};
pub use scene::{DrawList, EdgeLine, VertexShape};
pub use selection::{ClearNotification, ObserverId, Selection, SelectionObserver, SelectionState};
pub use viewport::{round_to_pixel, CanvasSize, ScreenPos, Viewport, WheelDirection};
