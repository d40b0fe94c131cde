use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{grid_canvas::GridCanvas, info_panel::InfoPanel};
use crate::model::GridPayload;
use crate::util::clog;

const INLINE_WIDTH: f64 = 640.0;
const INLINE_HEIGHT: f64 = 480.0;

#[derive(PartialEq, Clone, Copy)]
enum DisplayMode {
    Inline,
    Fullscreen,
}

/// Envelope for live payload updates posted by the host page.
#[derive(Deserialize)]
struct HostMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<GridPayload>,
}

/// Initial payload comes from the host's embedded JSON block. A missing or
/// unparseable block is treated as an empty payload, never an error.
fn initial_payload() -> GridPayload {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("grid-data"))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return GridPayload::default();
    };
    match serde_json::from_str(&raw) {
        Ok(p) => p,
        Err(e) => {
            clog(&format!("grid-data parse failed: {e}"));
            GridPayload::default()
        }
    }
}

fn initial_display_mode() -> DisplayMode {
    let mode = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("grid-root"))
        .and_then(|el| el.get_attribute("data-display-mode"));
    match mode.as_deref() {
        Some("fullscreen") => DisplayMode::Fullscreen,
        _ => DisplayMode::Inline,
    }
}

fn window_size() -> (f64, f64) {
    match web_sys::window() {
        Some(win) => {
            let w = win
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(INLINE_WIDTH);
            let h = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(INLINE_HEIGHT);
            (w, h)
        }
        None => (INLINE_WIDTH, INLINE_HEIGHT),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let payload = use_state(initial_payload);
    let display_mode = use_state(initial_display_mode);
    let win_size = use_state(window_size);

    // Live payload updates from the host. The view state is untouched by
    // design: the user's pan/zoom survives a data refresh.
    {
        let payload = payload.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let message_cb = Closure::wrap(Box::new(move |e: web_sys::MessageEvent| {
                let Some(raw) = e.data().as_string() else {
                    return;
                };
                if let Ok(msg) = serde_json::from_str::<HostMessage>(&raw) {
                    if msg.kind == "grid-data" {
                        payload.set(msg.payload.unwrap_or_default());
                    }
                }
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("message", message_cb.as_ref().unchecked_ref())
                .unwrap();
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "message",
                    message_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = &message_cb;
            }
        });
    }
    // Track window size so the fullscreen canvas follows resizes.
    {
        let win_size = win_size.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                win_size.set(window_size());
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = &resize_cb;
            }
        });
    }

    let expand = {
        let display_mode = display_mode.clone();
        Callback::from(move |_| {
            // Ask the host for the full viewport, then follow locally.
            if let Some(win) = web_sys::window() {
                if let Ok(Some(parent)) = win.parent() {
                    let req =
                        serde_json::json!({"type": "requestDisplayMode", "mode": "fullscreen"});
                    let _ = parent.post_message(&JsValue::from_str(&req.to_string()), "*");
                }
            }
            display_mode.set(DisplayMode::Fullscreen);
        })
    };

    let (width, height) = match *display_mode {
        DisplayMode::Inline => (INLINE_WIDTH, INLINE_HEIGHT),
        DisplayMode::Fullscreen => *win_size,
    };

    html! {
        <div style={format!("position:relative; width:{width}px; height:{height}px; background:#0f172a; color:#e6edf3; font-family:system-ui, sans-serif; overflow:hidden;")}>
            {
                if payload.has_data() {
                    html! {<>
                        <GridCanvas payload={(*payload).clone()} width={width} height={height} />
                        <InfoPanel payload={(*payload).clone()} />
                    </>}
                } else {
                    html! {<div style="display:flex; flex-direction:column; align-items:center; justify-content:center; height:100%; gap:8px; color:#8b949e;">
                        <div style="font-size:42px;">{"▦"}</div>
                        <div>{"No grid data available"}</div>
                        <div style="font-size:12px; opacity:0.6;">{"Create grids in the host model to see them here"}</div>
                    </div>}
                }
            }
            {
                if *display_mode == DisplayMode::Inline {
                    html! {<button onclick={expand} title="Expand" style="position:absolute; top:12px; right:12px; z-index:2; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:6px; color:#e6edf3; padding:4px 8px; cursor:pointer;">{"⤢"}</button>}
                } else {
                    html! {}
                }
            }
        </div>
    }
}
