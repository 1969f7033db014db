pub mod clock;
pub mod config;
pub mod fade;
pub mod overlay;
pub mod render;
pub mod stroke;

pub use clock::*;
pub use config::*;
pub use fade::*;
pub use overlay::*;
pub use render::*;
pub use stroke::*;
