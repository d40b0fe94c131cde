pub mod app;
pub mod grid_canvas;
pub mod info_panel;
pub mod legend;
pub mod legend_panel;

pub use app::App;
