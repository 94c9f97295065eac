use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};

/// Marker for the particle cloud entity.
#[derive(Component)]
pub struct ParticleCloud;

/// Build the index mesh backing one cloud: six vertices per point, two
/// triangles forming a quad once the vertex shader expands them. Each
/// vertex's position attribute encodes `[point_index, corner_index, 0]`;
/// the real particle position is fetched from the position texture.
pub fn create_point_quad_mesh(point_count: usize) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );

    let mut indices = Vec::with_capacity(point_count * 6);
    for point in 0..point_count {
        for corner in 0..6 {
            indices.push([point as f32, corner as f32, 0.0]);
        }
    }

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, indices);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn six_vertices_per_point_with_corner_tags() {
        let mesh = create_point_quad_mesh(3);
        let Some(VertexAttributeValues::Float32x3(values)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("expected float3 position attribute");
        };

        assert_eq!(values.len(), 18);
        assert_eq!(values[0], [0.0, 0.0, 0.0]);
        assert_eq!(values[5], [0.0, 5.0, 0.0]);
        assert_eq!(values[6], [1.0, 0.0, 0.0]);
        assert_eq!(values[17], [2.0, 5.0, 0.0]);
    }
}
