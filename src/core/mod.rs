pub mod camera;
pub mod constants;
pub mod controls;
pub mod environment;
pub mod mesh;
pub mod noise;
pub mod texture;
pub mod view;

pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use environment::*;
pub use mesh::*;
pub use noise::*;
pub use view::*;

// Shaders bundled as string constants
pub static BLOB_WGSL: &str = include_str!("../../shaders/blob.wgsl");
pub static SKY_WGSL: &str = include_str!("../../shaders/sky.wgsl");
