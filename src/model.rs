//! Payload types and normalization for the grid viewer.
//!
//! The host delivers grid data in several loosely-typed shapes: axis-specific
//! lists (`created_x`/`created_y`), flat per-axis lists (`x`/`y`), preview
//! lists (`grids`/`items`) and bare counts. Everything is folded into one
//! canonical form here, at the boundary, so nothing downstream branches on
//! raw field presence.

use serde::Deserialize;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Half-span (mm) used for an axis that carries no coordinate data at all,
/// so the view never collapses to a degenerate rectangle.
pub const DEFAULT_SPAN_MM: f64 = 10_000.0;

/// One named reference line. Whether it belongs to the X or the Y axis is
/// decided by which payload list it arrived in, not by its fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GridLine {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    /// Model-space position (mm). May be absent, in which case the line is
    /// shown in counts only and never plotted.
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GridRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default)]
    pub z: Option<f64>,
}

/// Raw host payload. Every field is optional: the combined endpoint shape
/// uses `created_x`/`created_y`, the single-axis shapes use `x`/`y`, preview
/// responses use `grids`/`items`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridPayload {
    pub created_x: Option<Vec<GridLine>>,
    pub created_y: Option<Vec<GridLine>>,
    pub count_x: Option<u32>,
    pub count_y: Option<u32>,
    pub range: Option<GridRange>,
    pub x: Option<Vec<GridLine>>,
    pub y: Option<Vec<GridLine>>,
    pub count: Option<u32>,
    pub grids: Option<Vec<GridLine>>,
    pub items: Option<Vec<GridLine>>,
}

impl GridPayload {
    /// True when any line list is non-empty. Bare counts alone do not make a
    /// payload renderable.
    pub fn has_data(&self) -> bool {
        [
            &self.created_x,
            &self.created_y,
            &self.x,
            &self.y,
            &self.grids,
            &self.items,
        ]
        .iter()
        .any(|l| l.as_ref().is_some_and(|v| !v.is_empty()))
    }
}

/// Axis and combined grid counts for the info panel. Explicit counts win over
/// inferred list lengths; an explicit combined `count` wins over the sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCounts {
    pub x: u32,
    pub y: u32,
    pub total: u32,
}

impl GridCounts {
    pub fn of(payload: &GridPayload) -> Self {
        let len =
            |list: &Option<Vec<GridLine>>| -> u32 { list.as_ref().map_or(0, |v| v.len() as u32) };
        let x = payload
            .count_x
            .unwrap_or_else(|| match len(&payload.created_x) {
                0 => len(&payload.x),
                n => n,
            });
        let y = payload
            .count_y
            .unwrap_or_else(|| match len(&payload.created_y) {
                0 => len(&payload.y),
                n => n,
            });
        let total = payload.count.unwrap_or(x + y);
        Self { x, y, total }
    }
}

/// Data extents in millimeters. Always well-formed: each axis either covers
/// real coordinates (possibly widened by an explicit range) or falls back to
/// the default span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl GridBounds {
    fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            center_x: (min_x + max_x) / 2.0,
            center_y: (min_y + max_y) / 2.0,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(
            -DEFAULT_SPAN_MM,
            DEFAULT_SPAN_MM,
            -DEFAULT_SPAN_MM,
            DEFAULT_SPAN_MM,
        )
    }
}

/// Canonical renderable form of a payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedGrid {
    pub x_lines: Vec<GridLine>,
    pub y_lines: Vec<GridLine>,
    pub bounds: GridBounds,
}

impl NormalizedGrid {
    /// X lines that carry an X coordinate, i.e. the ones that get plotted.
    pub fn defined_x(&self) -> impl Iterator<Item = (&GridLine, f64)> {
        self.x_lines.iter().filter_map(|g| g.x.map(|x| (g, x)))
    }

    /// Y lines that carry a Y coordinate.
    pub fn defined_y(&self) -> impl Iterator<Item = (&GridLine, f64)> {
        self.y_lines.iter().filter_map(|g| g.y.map(|y| (g, y)))
    }

    /// Full cross product of plottable X and Y lines.
    pub fn intersection_count(&self) -> usize {
        self.defined_x().count() * self.defined_y().count()
    }
}

/// Fold a raw payload into its canonical form. Pure; tolerates any subset of
/// fields being present and never fails.
///
/// `created_*` lists come before the flat `x`/`y` lists; `grids`/`items` are
/// undifferentiated preview lists and are never merged into either axis.
pub fn normalize(payload: &GridPayload) -> NormalizedGrid {
    let merge = |first: &Option<Vec<GridLine>>, second: &Option<Vec<GridLine>>| -> Vec<GridLine> {
        let mut lines = Vec::new();
        if let Some(l) = first {
            lines.extend(l.iter().cloned());
        }
        if let Some(l) = second {
            lines.extend(l.iter().cloned());
        }
        lines
    };
    let x_lines = merge(&payload.created_x, &payload.x);
    let y_lines = merge(&payload.created_y, &payload.y);

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for x in x_lines.iter().filter_map(|g| g.x) {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    for y in y_lines.iter().filter_map(|g| g.y) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    // An explicit range only ever widens the computed extents.
    if let Some(r) = &payload.range {
        min_x = min_x.min(r.x_min);
        max_x = max_x.max(r.x_max);
        min_y = min_y.min(r.y_min);
        max_y = max_y.max(r.y_max);
    }
    if !min_x.is_finite() {
        min_x = -DEFAULT_SPAN_MM;
    }
    if !max_x.is_finite() {
        max_x = DEFAULT_SPAN_MM;
    }
    if !min_y.is_finite() {
        min_y = -DEFAULT_SPAN_MM;
    }
    if !max_y.is_finite() {
        max_y = DEFAULT_SPAN_MM;
    }

    NormalizedGrid {
        x_lines,
        y_lines,
        bounds: GridBounds::new(min_x, max_x, min_y, max_y),
    }
}
