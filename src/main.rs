mod components;
mod model;
mod render;
mod state;
mod util;

use components::App;
use util::clog;

fn main() {
    let document = web_sys::window()
        .expect("no global `window` exists")
        .document()
        .expect("should have a document on window");
    // Missing mount point is the one fatal startup error.
    let root = document
        .get_element_by_id("grid-root")
        .expect("mount element #grid-root not found");
    yew::Renderer::<App>::with_root(root).render();
    clog("grid-viewer mounted at #grid-root");
}
