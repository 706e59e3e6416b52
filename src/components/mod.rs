pub mod camera;
pub mod layer;
pub mod target;

pub use camera::*;
pub use layer::*;
pub use target::*;
