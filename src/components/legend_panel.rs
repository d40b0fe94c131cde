use super::legend::LegendRow;
use crate::render;
use yew::prelude::*;

/// Static color legend for the three line families on the canvas.
#[function_component(LegendPanel)]
pub fn legend_panel() -> Html {
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:130px;">
        <div style="font-weight:600; margin-bottom:4px; font-size:13px;">{"Legend"}</div>
        <LegendRow color={render::COLOR_X_GRID} label="X-Axis Grids" />
        <LegendRow color={render::COLOR_Y_GRID} label="Y-Axis Grids" />
        <LegendRow color={render::COLOR_AXES} label="Origin Axes" />
    </div>}
}
