pub mod animate;
pub mod constants;
pub mod error;
pub mod navigation;
pub mod progress;
pub mod scene;
pub mod state;
pub mod theme;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use animate::*;
pub use error::ConfigError;
pub use navigation::*;
pub use progress::*;
pub use scene::*;
pub use state::*;
pub use theme::*;
