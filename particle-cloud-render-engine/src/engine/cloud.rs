use bevy::{
    image::{ImageFilterMode, ImageSampler, ImageSamplerDescriptor},
    prelude::*,
    render::render_asset::RenderAssetUsages,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
    render::view::NoFrustumCulling,
};

use constants::cloud::{DEFAULT_POINT_COUNT, POSITION_TEXTURE_SIZE};
use constants::palette::{DEFAULT_COLOUR_INDEX, palette_hex, parse_hex_colour};
use constants::render_settings::CLOUD_SHADER_SETTINGS;
use particle_cloud::{InteractionMode, MorphEngine, ShapeKind};

use super::mesh::point_quad_mesh::{ParticleCloud, create_point_quad_mesh};
use super::shaders::ParticleCloudShader;

/// Live simulation state plus the interaction inputs feeding it.
#[derive(Resource)]
pub struct CloudState {
    pub engine: MorphEngine,
    pub colour_index: usize,
    pub mode: InteractionMode,
    /// Latest horizontal pointer position, window pixels.
    pub pointer_x: f32,
    /// Window width backing the pointer fraction.
    pub window_width: f32,
    /// Raw disturbance fed to the last tick, kept for telemetry.
    pub disturbance: f32,
}

impl Default for CloudState {
    fn default() -> Self {
        // The default count is a non-zero constant, so generation cannot
        // be rejected here.
        let engine = MorphEngine::new(ShapeKind::default(), DEFAULT_POINT_COUNT)
            .expect("default cloud configuration is valid");
        Self {
            engine,
            colour_index: DEFAULT_COLOUR_INDEX,
            mode: InteractionMode::default(),
            pointer_x: 0.0,
            window_width: 0.0,
            disturbance: 0.0,
        }
    }
}

impl CloudState {
    /// Active palette colour as linear rgb.
    pub fn colour(&self) -> Vec3 {
        parse_hex_colour(palette_hex(self.colour_index))
            .map(Vec3::from)
            .unwrap_or(Vec3::ONE)
    }
}

/// Handles backing the cloud entity, filled in during Loading.
#[derive(Resource, Default)]
pub struct CloudAssets {
    pub position_texture: Handle<Image>,
    pub material: Handle<ParticleCloudShader>,
    pub mesh: Handle<Mesh>,
    /// Point count the mesh was built for; a drifted engine count means
    /// the mesh needs rebuilding.
    pub point_count: usize,
    pub presets_applied: bool,
    pub is_spawned: bool,
}

/// Copy a flat `xyzxyz` buffer into the RGBA32F position texture, one
/// texel per point with w fixed at 1.
pub fn write_positions_into(image: &mut Image, positions: &[f32]) {
    let Some(data) = image.data.as_mut() else {
        return;
    };
    let texels: &mut [f32] = bytemuck::cast_slice_mut(data);
    for (i, point) in positions.chunks_exact(3).enumerate() {
        let t = i * 4;
        texels[t] = point[0];
        texels[t + 1] = point[1];
        texels[t + 2] = point[2];
        texels[t + 3] = 1.0;
    }
}

/// Create the texture, material and mesh once presets are applied, then
/// spawn the cloud entity.
pub fn spawn_cloud_when_ready(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ParticleCloudShader>>,
    mut images: ResMut<Assets<Image>>,
    mut assets: ResMut<CloudAssets>,
    state: Res<CloudState>,
) {
    if assets.is_spawned || !assets.presets_applied {
        return;
    }

    let count = state.engine.count();
    println!("Creating particle cloud ({count} points)...");

    let mut image = Image::new_fill(
        Extent3d {
            width: POSITION_TEXTURE_SIZE as u32,
            height: POSITION_TEXTURE_SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0u8; 16],
        TextureFormat::Rgba32Float,
        RenderAssetUsages::default(),
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        mag_filter: ImageFilterMode::Nearest,
        min_filter: ImageFilterMode::Nearest,
        ..default()
    });

    let frame = state.engine.snapshot();
    write_positions_into(&mut image, frame.positions);
    assets.position_texture = images.add(image);

    let colour = state.colour();
    let material = ParticleCloudShader {
        position_texture: assets.position_texture.clone(),
        settings: CLOUD_SHADER_SETTINGS,
        params: [
            Vec4::new(colour.x, colour.y, colour.z, frame.scatter),
            Vec4::new(
                frame.time,
                count as f32,
                POSITION_TEXTURE_SIZE as f32,
                0.0,
            ),
        ],
    };
    assets.material = materials.add(material);
    assets.mesh = meshes.add(create_point_quad_mesh(count));
    assets.point_count = count;

    commands.spawn((
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(assets.material.clone()),
        Transform::from_translation(Vec3::ZERO),
        Visibility::Visible,
        InheritedVisibility::VISIBLE,
        ViewVisibility::default(),
        GlobalTransform::default(),
        ParticleCloud,
        NoFrustumCulling,
    ));

    println!("Cloud entity spawned with {count} points");
    assets.is_spawned = true;
}
