pub mod camera;
pub mod config;
pub mod constants;
pub mod drag;
pub mod geometry;
pub mod mesh;
pub mod picking;
pub mod pose;
pub mod quantize;
pub mod render_loop;
pub mod scene;
pub mod texture;
pub mod widget;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use drag::{DragController, DragSession};
pub use geometry::*;
pub use picking::*;
pub use pose::*;
pub use quantize::*;
pub use render_loop::*;
pub use scene::*;
pub use texture::*;
pub use widget::*;
