//! Canvas renderer: model-space millimetres through the pan/zoom viewport
//! onto a device-pixel-ratio-aware 2D context.
//!
//! Every call repaints from scratch, so the draw closure can be re-invoked
//! on any payload or viewport change without accumulating state.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::NormalizedGrid;
use crate::state::ViewState;

/// Fixed model-to-pixel scale: 1 mm = 0.05 px, so one metre is ~50 px at zoom 1.
pub const MM_TO_PX: f64 = 0.05;
/// Reference grid spacing (mm), one metre.
const GRID_SPACING_MM: f64 = 1000.0;
/// Half-extent of the background grid and origin axes (mm).
const BACKDROP_EXTENT_MM: f64 = 20_000.0;
/// Margin past the data bounds so grid lines extend beyond the outermost line.
const BOUNDS_PAD_MM: f64 = 2000.0;

const COLOR_BG: &str = "#0f172a";
const COLOR_BACKDROP: &str = "#1e293b";
const COLOR_ORIGIN_LABEL: &str = "#64748b";
pub const COLOR_AXES: &str = "#334155";
pub const COLOR_X_GRID: &str = "#3b82f6";
pub const COLOR_Y_GRID: &str = "#10b981";
pub const COLOR_INTERSECTION: &str = "#f59e0b";

const LABEL_FONT: &str = "12px system-ui";
const ORIGIN_FONT: &str = "bold 10px system-ui";

/// Convert a screen-pixel quantity (pre-zoom) into model millimetres, for
/// stroke widths, marker radii and label offsets specified in px.
fn px(n: f64) -> f64 {
    n / MM_TO_PX
}

/// Size the backing store for the device pixel ratio, fix the CSS size, and
/// hand back a 2D context pre-scaled so the renderer works in CSS pixels.
/// Resizing resets all context state, so this runs before every repaint.
pub fn prepare_canvas(
    canvas: &HtmlCanvasElement,
    width: f64,
    height: f64,
) -> Option<CanvasRenderingContext2d> {
    let dpr = web_sys::window()?.device_pixel_ratio().max(1.0);
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    let _ = ctx.scale(dpr, dpr);
    Some(ctx)
}

/// Repaint the whole scene under the current viewport.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    grid: &NormalizedGrid,
    view: &ViewState,
    width: f64,
    height: f64,
) {
    ctx.set_fill_style_str(COLOR_BG);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.save();
    // Composite viewport transform: canvas centre plus pan, then zoom, then
    // the fixed mm->px scale with Y flipped so model "up" is screen "up".
    let _ = ctx.translate(width / 2.0 + view.pan_x, height / 2.0 + view.pan_y);
    let _ = ctx.scale(view.zoom, view.zoom);
    let _ = ctx.scale(MM_TO_PX, -MM_TO_PX);

    draw_backdrop(ctx);
    draw_y_lines(ctx, grid);
    draw_x_lines(ctx, grid);
    draw_intersections(ctx, grid);

    ctx.restore();
}

fn stroke_line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

/// Draw a label anchored at a model-space point. The local transform counters
/// the surrounding mm scale and Y flip, so glyphs come out upright at a fixed
/// pixel size (scaling with zoom only).
fn label(ctx: &CanvasRenderingContext2d, x_mm: f64, y_mm: f64, font: &str, text: &str) {
    ctx.save();
    let _ = ctx.translate(x_mm, y_mm);
    let _ = ctx.scale(1.0 / MM_TO_PX, -1.0 / MM_TO_PX);
    ctx.set_font(font);
    let _ = ctx.fill_text(text, 0.0, 0.0);
    ctx.restore();
}

/// One-metre reference grid and bold origin axes. Drawn over a fixed large
/// extent regardless of data bounds, to give spatial orientation.
fn draw_backdrop(ctx: &CanvasRenderingContext2d) {
    let e = BACKDROP_EXTENT_MM;
    ctx.set_stroke_style_str(COLOR_BACKDROP);
    ctx.set_line_width(px(0.5));
    let mut t = -e;
    while t <= e {
        stroke_line(ctx, t, -e, t, e);
        stroke_line(ctx, -e, t, e, t);
        t += GRID_SPACING_MM;
    }

    ctx.set_stroke_style_str(COLOR_AXES);
    ctx.set_line_width(px(2.0));
    stroke_line(ctx, -e, 0.0, e, 0.0);
    stroke_line(ctx, 0.0, -e, 0.0, e);

    ctx.set_fill_style_str(COLOR_ORIGIN_LABEL);
    label(ctx, px(10.0), px(10.0), ORIGIN_FONT, "(0, 0)");
}

/// Horizontal lines at each defined Y position, named at both ends.
fn draw_y_lines(ctx: &CanvasRenderingContext2d, grid: &NormalizedGrid) {
    let b = &grid.bounds;
    let x_start = b.min_x - BOUNDS_PAD_MM;
    let x_end = b.max_x + BOUNDS_PAD_MM;
    ctx.set_stroke_style_str(COLOR_Y_GRID);
    ctx.set_fill_style_str(COLOR_Y_GRID);
    ctx.set_line_width(px(2.0));
    for (line, y) in grid.defined_y() {
        stroke_line(ctx, x_start, y, x_end, y);
        label(ctx, x_start - px(50.0), y - px(5.0), LABEL_FONT, &line.name);
        label(ctx, x_end + px(10.0), y - px(5.0), LABEL_FONT, &line.name);
    }
}

/// Vertical lines at each defined X position, named top and bottom.
fn draw_x_lines(ctx: &CanvasRenderingContext2d, grid: &NormalizedGrid) {
    let b = &grid.bounds;
    let y_bottom = b.min_y - BOUNDS_PAD_MM;
    let y_top = b.max_y + BOUNDS_PAD_MM;
    ctx.set_stroke_style_str(COLOR_X_GRID);
    ctx.set_fill_style_str(COLOR_X_GRID);
    ctx.set_line_width(px(2.0));
    for (line, x) in grid.defined_x() {
        stroke_line(ctx, x, y_bottom, x, y_top);
        label(ctx, x - px(15.0), y_top + px(10.0), LABEL_FONT, &line.name);
        label(ctx, x - px(15.0), y_bottom - px(20.0), LABEL_FONT, &line.name);
    }
}

/// Filled markers at the full cross product of plottable X and Y lines.
fn draw_intersections(ctx: &CanvasRenderingContext2d, grid: &NormalizedGrid) {
    if grid.intersection_count() == 0 {
        return;
    }
    ctx.set_fill_style_str(COLOR_INTERSECTION);
    for (_, x) in grid.defined_x() {
        for (_, y) in grid.defined_y() {
            ctx.begin_path();
            let _ = ctx.arc(x, y, px(3.0), 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}
