/// Particle cloud shader material
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

use constants::render_settings::CloudShaderSettings;

/// Material binding the position texture and the per-frame uniforms.
///
/// `params[0]` carries `(colour.rgb, scatter)`, `params[1]` carries
/// `(time, point_count, texture_size, 0)`.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleCloudShader {
    #[texture(0)]
    #[sampler(1)]
    pub position_texture: Handle<Image>,

    #[uniform(2)]
    pub settings: CloudShaderSettings,

    #[uniform(3)]
    pub params: [Vec4; 2],
}

impl Material for ParticleCloudShader {
    fn vertex_shader() -> ShaderRef {
        "./shaders/particle_cloud.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "./shaders/particle_cloud.wgsl".into()
    }

    // Additive accumulation, no depth writes: overlapping sprites glow.
    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}
