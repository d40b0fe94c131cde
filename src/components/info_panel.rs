use yew::prelude::*;

use crate::model::{GridCounts, GridPayload, normalize};
use crate::util::format_distance;

#[derive(Properties, PartialEq, Clone)]
pub struct InfoPanelProps {
    pub payload: GridPayload,
}

/// Stats panel: per-axis grid counts, data range and center, and elevation
/// when the payload carries one. An axis row is omitted when its count is
/// zero; the combined total only appears when both axis counts are zero.
#[function_component(InfoPanel)]
pub fn info_panel(props: &InfoPanelProps) -> Html {
    let bounds = normalize(&props.payload).bounds;
    let counts = GridCounts::of(&props.payload);
    let grids = |n: u32| if n == 1 { "grid" } else { "grids" };
    let row_style = "display:flex; justify-content:space-between; gap:12px;";

    html! {<div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:190px; display:flex; flex-direction:column; gap:6px; font-size:13px;">
        <div style="font-weight:600;">{"Grids"}</div>
        { if counts.x > 0 { html!{
            <div style={row_style}>
                <span style="color:#3b82f6;">{"X-Axis:"}</span>
                <span>{ format!("{} {}", counts.x, grids(counts.x)) }</span>
            </div>
        } } else { html!{} } }
        { if counts.y > 0 { html!{
            <div style={row_style}>
                <span style="color:#10b981;">{"Y-Axis:"}</span>
                <span>{ format!("{} {}", counts.y, grids(counts.y)) }</span>
            </div>
        } } else { html!{} } }
        { if counts.x == 0 && counts.y == 0 && counts.total > 0 { html!{
            <div style={row_style}>
                <span style="color:#8b949e;">{"Total:"}</span>
                <span>{ format!("{} {}", counts.total, grids(counts.total)) }</span>
            </div>
        } } else { html!{} } }
        <div style="font-size:11px; color:#8b949e;">
            <div style="font-weight:600; margin-bottom:2px;">{"Range (mm)"}</div>
            <div>{ format!("X: {} to {}", format_distance(bounds.min_x), format_distance(bounds.max_x)) }</div>
            <div>{ format!("Y: {} to {}", format_distance(bounds.min_y), format_distance(bounds.max_y)) }</div>
            <div style="margin-top:4px; opacity:0.6;">
                { format!("Center: ({}, {})", format_distance(bounds.center_x), format_distance(bounds.center_y)) }
            </div>
        </div>
        { if let Some(z) = props.payload.range.as_ref().and_then(|r| r.z) { html!{
            <div style="font-size:11px; color:#8b949e;">
                <div style="font-weight:600; margin-bottom:2px;">{"Elevation"}</div>
                <div>{ format!("Z: {}", format_distance(z)) }</div>
            </div>
        } } else { html!{} } }
    </div>}
}
