pub mod context;
pub mod renderer;

pub use context::*;
pub use renderer::*;
