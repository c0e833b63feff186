mod component;
mod render;
mod reveal;
mod state;

pub use component::VerbGraphCanvas;
