use bevy::{input::mouse::MouseMotion, prelude::*};

use constants::render_settings::{
    CAMERA_ORBIT_RADIUS, CAMERA_PITCH_LIMIT, CAMERA_PITCH_SENSITIVITY, CAMERA_SMOOTHING,
    CAMERA_YAW_SENSITIVITY,
};

#[derive(Resource)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            radius: CAMERA_ORBIT_RADIUS,
        }
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw += -mouse_delta.x * CAMERA_YAW_SENSITIVITY;
        orbit.pitch += -mouse_delta.y * CAMERA_PITCH_SENSITIVITY;
        // Keeps the orbit inside its polar band around the horizon.
        orbit.pitch = orbit.pitch.clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    // A camera at rot * (0, 0, r) with rotation rot already faces the
    // origin, so one quaternion drives both position and orientation.
    let target_rot = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
    let target_pos = target_rot * Vec3::new(0.0, 0.0, orbit.radius);

    let lerp_speed = (CAMERA_SMOOTHING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}
