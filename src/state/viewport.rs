// Pan/zoom view state for the grid canvas.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 5.0;

/// Viewport state driven by the canvas pointer/wheel handlers. Pan is in
/// screen pixels and unconstrained; zoom always stays in
/// [`ZOOM_MIN`, `ZOOM_MAX`]. The render step takes a snapshot and never
/// mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub dragging: bool,
    drag_start_x: f64,
    drag_start_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            dragging: false,
            drag_start_x: 0.0,
            drag_start_y: 0.0,
        }
    }
}

impl ViewState {
    /// Wheel zoom: scroll down zooms out, up zooms in. The DOM handler is
    /// responsible for calling `prevent_default()` on the event.
    pub fn on_wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Begin a drag. Storing `cursor - pan` lets every later move set the
    /// pan directly from the cursor position, so repeated drags never drift.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.drag_start_x = x - self.pan_x;
        self.drag_start_y = y - self.pan_y;
    }

    /// Returns true when the pan changed and a redraw is needed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.dragging {
            return false;
        }
        self.pan_x = x - self.drag_start_x;
        self.pan_y = y - self.drag_start_y;
        true
    }

    /// Ends a drag unconditionally. Wired to mouseup and mouseleave both, so
    /// releasing the button outside the canvas cannot leave a stuck drag.
    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
