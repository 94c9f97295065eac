pub mod assets;
pub mod camera;
pub mod cloud;
pub mod core;
pub mod mesh;
pub mod motion;
pub mod shaders;
pub mod systems;
