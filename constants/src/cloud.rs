/// Side length of the square RGBA32F position texture.
pub const POSITION_TEXTURE_SIZE: usize = 128;

/// Maximum points one position texture can carry.
pub const MAX_CLOUD_POINTS: usize = POSITION_TEXTURE_SIZE * POSITION_TEXTURE_SIZE;

/// Default number of particles in a cloud.
pub const DEFAULT_POINT_COUNT: usize = 8000;
