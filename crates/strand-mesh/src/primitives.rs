//! Mesh primitives.

use glam::Vec2;

use crate::Mesh2D;

/// Creates a horizontal quad-strip ribbon.
///
/// The ribbon runs along +X from the origin, `length` units long and
/// `width` units tall, centered vertically, split into `segments`
/// quads. This is the natural rest geometry for path deformation:
/// each column of vertices can be bound to one joint of a chain.
pub fn ribbon(length: f32, segments: usize, width: f32) -> Mesh2D {
    assert!(segments > 0, "ribbon needs at least one segment");

    let columns = segments + 1;
    let half = width * 0.5;

    let mut positions = Vec::with_capacity(columns * 2);
    let mut uvs = Vec::with_capacity(columns * 2);

    for i in 0..columns {
        let t = i as f32 / segments as f32;
        let x = t * length;
        positions.push(Vec2::new(x, -half));
        positions.push(Vec2::new(x, half));
        uvs.push(Vec2::new(t, 0.0));
        uvs.push(Vec2::new(t, 1.0));
    }

    let mut indices = Vec::with_capacity(segments * 6);
    for i in 0..segments as u32 {
        let base = i * 2;
        // Two triangles per quad, counter-clockwise
        indices.extend_from_slice(&[base, base + 2, base + 3]);
        indices.extend_from_slice(&[base, base + 3, base + 1]);
    }

    let mut mesh = Mesh2D::from_positions(positions);
    mesh.uvs = uvs;
    mesh.indices = indices;
    mesh
}

/// Returns the vertex indices of column `i` of a [`ribbon`] mesh.
///
/// Convenience for binding ribbon columns to chain joints.
pub fn ribbon_column(i: usize) -> [usize; 2] {
    [i * 2, i * 2 + 1]
}
