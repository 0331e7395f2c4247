pub mod renderer;
pub mod window;

pub use renderer::*;
pub use window::*;
