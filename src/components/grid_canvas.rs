use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::legend_panel::LegendPanel;
use crate::model::{GridPayload, normalize};
use crate::render;
use crate::state::ViewState;

#[derive(Properties, PartialEq, Clone)]
pub struct GridCanvasProps {
    pub payload: GridPayload,
    pub width: f64,
    pub height: f64,
}

/// Pannable, zoomable canvas with overlay controls. The view state lives in
/// a mut-ref so pan/zoom survive payload updates; only the overlay readout
/// goes through yew state.
#[function_component(GridCanvas)]
pub fn grid_canvas(props: &GridCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let view = use_mut_ref(ViewState::default);
    let grid = {
        let payload = props.payload.clone();
        use_mut_ref(move || normalize(&payload))
    };
    let size = use_mut_ref(|| (640.0, 480.0));
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let readout = use_state(ViewState::default);

    // Re-normalize and redraw whenever the host sends a new payload.
    {
        let grid = grid.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(props.payload.clone(), move |payload| {
            *grid.borrow_mut() = normalize(payload);
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }
    // Track the requested canvas size (display mode / window resize).
    {
        let size = size.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with((props.width, props.height), move |&(w, h)| {
            *size.borrow_mut() = (w, h);
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }
    // Mount effect: build the draw closure and wire pointer/wheel listeners.
    {
        let canvas_ref = canvas_ref.clone();
        let view_setup = view.clone();
        let grid_setup = grid.clone();
        let size_setup = size.clone();
        let draw_ref_setup = draw_ref.clone();
        let readout_setup = readout.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");

            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let view = view_setup.clone();
                let grid = grid_setup.clone();
                let size = size_setup.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let (w, h) = *size.borrow();
                    let Some(ctx) = render::prepare_canvas(&canvas, w, h) else {
                        return;
                    };
                    render::draw(&ctx, &grid.borrow(), &view.borrow(), w, h);
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            draw_closure();

            let wheel_cb = {
                let view = view_setup.clone();
                let draw = draw_closure.clone();
                let readout = readout_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let mut v = view.borrow_mut();
                    v.on_wheel(e.delta_y());
                    let snapshot = *v;
                    drop(v);
                    readout.set(snapshot);
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                .unwrap();

            let mousedown_cb = {
                let view = view_setup.clone();
                let readout = readout_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let mut v = view.borrow_mut();
                    v.on_pointer_down(e.client_x() as f64, e.client_y() as f64);
                    let snapshot = *v;
                    drop(v);
                    readout.set(snapshot);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            let mousemove_cb = {
                let view = view_setup.clone();
                let draw = draw_closure.clone();
                let readout = readout_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let mut v = view.borrow_mut();
                    if v.on_pointer_move(e.client_x() as f64, e.client_y() as f64) {
                        let snapshot = *v;
                        drop(v);
                        readout.set(snapshot);
                        draw();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Ends the drag wherever the button is released; mouseleave on the
            // canvas catches the pointer leaving mid-drag.
            let mouseup_cb = {
                let view = view_setup.clone();
                let readout = readout_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let mut v = view.borrow_mut();
                    if v.dragging {
                        v.on_pointer_up();
                        let snapshot = *v;
                        drop(v);
                        readout.set(snapshot);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();
            canvas
                .add_event_listener_with_callback("mouseleave", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            move || {
                let _ = canvas
                    .remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&wheel_cb, &mousedown_cb, &mousemove_cb, &mouseup_cb);
            }
        });
    }

    let on_reset = {
        let view = view.clone();
        let draw_ref = draw_ref.clone();
        let readout = readout.clone();
        Callback::from(move |_| {
            view.borrow_mut().reset();
            readout.set(*view.borrow());
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
        })
    };

    let v = *readout;
    let cursor = if v.dragging { "grabbing" } else { "grab" };
    html! {
        <div style="position:relative; width:100%; height:100%;">
            <canvas ref={canvas_ref} style={format!("display:block; cursor:{};", cursor)} />
            <div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:6px; align-items:flex-start;">
                <button onclick={on_reset} style="background:#21262d; border:1px solid #30363d; border-radius:6px; color:#e6edf3; padding:4px 10px; cursor:pointer; font-size:12px;">{"Reset View"}</button>
                <div style="font-size:11px; color:#8b949e; font-variant-numeric:tabular-nums;">
                    <div>{ format!("Zoom: {:.2}x", v.zoom) }</div>
                    <div>{ format!("Pan: {}, {}", v.pan_x.round() as i64, v.pan_y.round() as i64) }</div>
                </div>
            </div>
            <LegendPanel />
        </div>
    }
}
