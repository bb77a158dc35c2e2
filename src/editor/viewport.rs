//! World/screen coordinate transform, panning, zooming and fit-to-content.
//!
//! Screen space is integer pixels with the origin in the top-left corner of the
//! canvas. World space has Y pointing up, so the Y axis flips in the transform:
//!
//! ```text
//! world_x  = (screen_x + pan_x) * zoom
//! world_y  = (height - screen_y + pan_y) * zoom
//! screen_x = round(world_x / zoom - pan_x)
//! screen_y = height - round(world_y / zoom - pan_y)
//! ```
//!
//! The pan offset is stored in whole pixels of the *current* zoom level; it is
//! never rescaled when the zoom changes except by [`Viewport::zoom_at`].

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::types::{WorldBounds, WorldPos};

/// Rounds half-way cases toward positive infinity.
///
/// All world-to-screen conversions go through this so the rounding direction
/// is the same on both axes and for negative coordinates. Values outside the
/// `i32` range saturate; NaN maps to zero.
pub fn round_to_pixel(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// A point on the canvas in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPos {
    /// Pixels from the left edge
    pub x: i32,
    /// Pixels from the top edge
    pub y: i32,
}

impl ScreenPos {
    /// Creates a screen-space point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of the canvas, supplied with every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl CanvasSize {
    /// Creates a canvas size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Which way the mouse wheel turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Away from the user; zooms in
    Up,
    /// Toward the user; zooms out
    Down,
}

/// Zoom and pan state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// World units per pixel. Always positive.
    zoom: f64,
    /// Horizontal pan offset in pixels
    pan_x: i32,
    /// Vertical pan offset in pixels
    pan_y: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan_x: 0,
            pan_y: 0,
        }
    }
}

impl Viewport {
    /// Creates a viewport with explicit parameters.
    ///
    /// Non-positive or non-finite zoom values fall back to the default zoom;
    /// others are clamped to `MIN_ZOOM..=MAX_ZOOM`.
    pub fn new(zoom: f64, pan_x: i32, pan_y: i32) -> Self {
        let zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            DEFAULT_ZOOM
        };
        Self { zoom, pan_x, pan_y }
    }

    /// Current zoom factor in world units per pixel.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset `(x, y)` in pixels.
    pub fn pan_offset(&self) -> (i32, i32) {
        (self.pan_x, self.pan_y)
    }

    /// Converts a canvas pixel position to world coordinates.
    pub fn screen_to_world(&self, screen: ScreenPos, canvas: CanvasSize) -> WorldPos {
        WorldPos::new(
            (f64::from(screen.x) + f64::from(self.pan_x)) * self.zoom,
            (f64::from(canvas.height) - f64::from(screen.y) + f64::from(self.pan_y)) * self.zoom,
        )
    }

    /// Converts a world position to the nearest canvas pixel.
    pub fn world_to_screen(&self, world: WorldPos, canvas: CanvasSize) -> ScreenPos {
        ScreenPos::new(
            round_to_pixel(world.x / self.zoom - f64::from(self.pan_x)),
            canvas
                .height
                .saturating_sub(round_to_pixel(world.y / self.zoom - f64::from(self.pan_y))),
        )
    }

    /// Converts a length in screen pixels to world units at the current zoom.
    pub fn pixels_to_world(&self, pixels: f64) -> f64 {
        pixels * self.zoom
    }

    /// Pans by a pointer movement of `(dx, dy)` screen pixels.
    ///
    /// The content follows the pointer: dragging right moves the graph right.
    /// The delta is applied unscaled, in the same pixel unit the pan is stored in.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.pan_x = self.pan_x.saturating_sub(dx);
        self.pan_y = self.pan_y.saturating_add(dy);
    }

    /// Zooms by one wheel step keeping the world point under `anchor` fixed.
    ///
    /// `zoom_in_step` and `zoom_out_step` are the multipliers applied to the
    /// zoom factor for [`WheelDirection::Up`] and [`WheelDirection::Down`].
    /// The result is clamped to `MIN_ZOOM..=MAX_ZOOM`. Returns `false` when the
    /// zoom is already at the limit in that direction and nothing changed.
    pub fn zoom_at(
        &mut self,
        anchor: ScreenPos,
        direction: WheelDirection,
        canvas: CanvasSize,
        zoom_in_step: f64,
        zoom_out_step: f64,
    ) -> bool {
        let step = match direction {
            WheelDirection::Up => zoom_in_step,
            WheelDirection::Down => zoom_out_step,
        };
        if !(step.is_finite() && step > 0.0) {
            return false;
        }

        let wanted = self.zoom * step;
        let zoom = wanted.clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom == self.zoom {
            return false;
        }
        // Partial step when the limit cuts it short
        let factor = if zoom == wanted { step } else { zoom / self.zoom };
        self.zoom = zoom;

        // Anchor in world-aligned pixels (Y measured from the bottom edge)
        let center_x = f64::from(anchor.x);
        let center_y = f64::from(canvas.height - anchor.y);
        self.pan_x = round_to_pixel((center_x + f64::from(self.pan_x)) / factor - center_x);
        self.pan_y = round_to_pixel((center_y + f64::from(self.pan_y)) / factor - center_y);
        true
    }

    /// Fits `bounds` into the canvas leaving `margin` pixels on every side.
    ///
    /// The tighter of the two per-axis zoom factors is used so the aspect ratio
    /// is preserved; the other axis is centered. The zoom is clamped to
    /// `MIN_ZOOM..=MAX_ZOOM`, so very large or very small content may not fill
    /// the canvas exactly. Returns `false` and leaves the
    /// viewport untouched when there is nothing to fit: no bounds, a canvas no
    /// larger than twice the margin, or a bounding box of zero size.
    pub fn fit_to_content(
        &mut self,
        bounds: Option<WorldBounds>,
        canvas: CanvasSize,
        margin: i32,
    ) -> bool {
        let Some(bounds) = bounds else {
            return false;
        };

        let usable_width = canvas.width - 2 * margin;
        let usable_height = canvas.height - 2 * margin;
        if usable_width <= 0 || usable_height <= 0 {
            return false;
        }

        let zoom_x = bounds.width() / f64::from(usable_width);
        let zoom_y = bounds.height() / f64::from(usable_height);
        let zoom = zoom_x.max(zoom_y);
        if !(zoom.is_finite() && zoom > 0.0) {
            return false;
        }
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);

        self.zoom = zoom;
        if zoom_y > zoom_x {
            // Height binds: top edge sits on the margin, X is centered
            self.pan_x = round_to_pixel((bounds.max.x + bounds.min.x) / (2.0 * zoom))
                .saturating_sub(canvas.width / 2);
            self.pan_y = round_to_pixel(bounds.max.y / zoom)
                .saturating_sub(canvas.height)
                .saturating_add(margin);
        } else {
            // Width binds: left edge sits on the margin, Y is centered
            self.pan_x = round_to_pixel(bounds.min.x / zoom).saturating_sub(margin);
            self.pan_y = round_to_pixel((bounds.max.y + bounds.min.y) / (2.0 * zoom))
                .saturating_sub(canvas.height / 2);
        }
        true
    }
}
