mod color;
mod transform;

pub use color::{hex_rgb, hsl_to_rgb};
pub use transform::Transform;
