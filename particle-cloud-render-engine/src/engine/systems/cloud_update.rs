use bevy::prelude::*;
use constants::cloud::POSITION_TEXTURE_SIZE;
use constants::render_settings::NOTIFY_INTERVAL_SECONDS;
use particle_cloud::InteractionMode;
use particle_cloud::interaction::{motion_disturbance, pointer_disturbance};

use crate::engine::cloud::{CloudAssets, CloudState, write_positions_into};
use crate::engine::mesh::point_quad_mesh::{ParticleCloud, create_point_quad_mesh};
use crate::engine::motion::sensor::MotionSensor;
use crate::engine::shaders::ParticleCloudShader;
use crate::rpc::web_rpc::WebRpcInterface;

/// Advance the cloud one frame and push the results to the GPU.
///
/// Resolves the disturbance from the active input source, steps the morph
/// engine, then rewrites the position texture and material uniforms. The
/// sprite mesh only changes when the point count does.
pub fn cloud_advance_system(
    time: Res<Time>,
    mut state: ResMut<CloudState>,
    mut assets: ResMut<CloudAssets>,
    sensor: Res<MotionSensor>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<ParticleCloudShader>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut cloud_query: Query<(&mut Mesh3d, &mut Transform), With<ParticleCloud>>,
) {
    if !assets.is_spawned {
        return;
    }

    let disturbance = match state.mode {
        InteractionMode::Pointer => pointer_disturbance(state.pointer_x, state.window_width),
        InteractionMode::Motion => motion_disturbance(sensor.energy()),
    };
    let colour = state.colour();

    state.engine.advance(time.delta_secs(), disturbance, colour);
    state.disturbance = disturbance;

    let frame = state.engine.snapshot();

    if let Some(image) = images.get_mut(&assets.position_texture) {
        write_positions_into(image, frame.positions);
    }

    if let Some(material) = materials.get_mut(&assets.material) {
        material.params[0] = Vec4::new(colour.x, colour.y, colour.z, frame.scatter);
        material.params[1] = Vec4::new(
            frame.time,
            frame.count() as f32,
            POSITION_TEXTURE_SIZE as f32,
            0.0,
        );
    }

    let Ok((mut mesh_handle, mut transform)) = cloud_query.single_mut() else {
        return;
    };
    transform.rotation = Quat::from_rotation_y(frame.spin);

    if frame.count() != assets.point_count {
        let point_count = frame.count();
        let mesh = meshes.add(create_point_quad_mesh(point_count));
        mesh_handle.0 = mesh.clone();
        assets.mesh = mesh;
        assets.point_count = point_count;
        info!("Rebuilt cloud mesh for {point_count} points");
    }
}

pub fn disturbance_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    state: Res<CloudState>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    // Report the interaction state every 0.5 seconds
    if current_time - *last_send_time >= NOTIFY_INTERVAL_SECONDS {
        rpc_interface.send_notification(
            "disturbance_update",
            serde_json::json!({
                "disturbance": state.disturbance,
                "scatter": state.engine.scatter(),
                "mode": state.mode.label(),
            }),
        );
        *last_send_time = current_time;
    }
}
