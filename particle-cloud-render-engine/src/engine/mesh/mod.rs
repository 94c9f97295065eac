//! Mesh generation for the particle quad pipeline.
//!
//! Vertices carry only indices; the vertex shader fetches real positions
//! from a texture and expands each point into a screen-aligned quad.

/// Index mesh where each particle owns six vertices tagged with its point
/// and corner index.
pub mod point_quad_mesh;
