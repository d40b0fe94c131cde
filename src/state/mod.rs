pub mod viewport;

pub use viewport::ViewState;
