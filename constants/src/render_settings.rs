use bevy::render::render_resource::ShaderType;

/// Static shading parameters for the particle cloud material.
/// Uploaded as a uniform block alongside the per-frame params.
#[derive(Debug, Clone, Copy, ShaderType)]
pub struct CloudShaderSettings {
    /// Base sprite size before distance attenuation.
    pub base_size: f32,
    /// Numerator of the `attenuation / -view_z` screen-size falloff.
    pub attenuation: f32,
    /// Exponent shaping the radial glow falloff.
    pub glow_exponent: f32,
    /// How much a fully scattered cloud fades (alpha = 1 - scatter * fade).
    pub alpha_fade: f32,
}

pub const CLOUD_SHADER_SETTINGS: CloudShaderSettings = CloudShaderSettings {
    base_size: 4.0,
    attenuation: 30.0,
    glow_exponent: 1.5,
    alpha_fade: 0.5,
};

pub const CAMERA_ORBIT_RADIUS: f32 = 8.0;
pub const CAMERA_FOV_DEGREES: f32 = 60.0;

/// Pitch stays within +-pi/6 of the horizon (polar angle pi/3..pi/1.5).
pub const CAMERA_PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_6;
pub const CAMERA_SMOOTHING: f32 = 12.0;

pub const CAMERA_YAW_SENSITIVITY: f32 = 0.0035;
pub const CAMERA_PITCH_SENSITIVITY: f32 = 0.0030;

/// Seconds between outbound fps/disturbance RPC notifications.
pub const NOTIFY_INTERVAL_SECONDS: f32 = 0.5;
