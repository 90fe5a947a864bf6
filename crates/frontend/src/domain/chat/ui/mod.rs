pub mod model;
pub mod typewriter;
pub mod view;
pub mod view_model;

pub use view::ChatPane;
