//! Mesh storage with a rest-pose baseline and a live, deformable buffer.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interface a deformer uses to write into a mesh.
///
/// Rest-pose vertices are the immutable baseline with stable indices;
/// live vertices share the same indexing and are written in place.
/// [`refresh`](Drawable::refresh) signals the owner that live vertices
/// changed and should be resubmitted to whatever backend renders them.
pub trait Drawable {
    /// Rest-pose vertex positions (stable indices).
    fn rest_vertices(&self) -> &[Vec2];

    /// Live vertex positions, same indexing as the rest pose.
    fn vertices_mut(&mut self) -> &mut [Vec2];

    /// Signals that live vertices changed.
    fn refresh(&mut self);
}

/// A 2D mesh with a rest pose and a live vertex buffer.
///
/// The live buffer starts as a copy of the rest pose and is what
/// deformers mutate each tick. `refresh` bumps a revision counter,
/// standing in for a GPU re-upload in a headless context.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh2D {
    /// Rest-pose positions. Not mutated after construction.
    pub rest_positions: Vec<Vec2>,
    /// Live positions, same length and indexing as `rest_positions`.
    pub positions: Vec<Vec2>,
    /// Texture coordinates, if any.
    pub uvs: Vec<Vec2>,
    /// Triangle indices, if any.
    pub indices: Vec<u32>,
    revision: u64,
}

impl Mesh2D {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from rest-pose positions.
    ///
    /// The live buffer starts equal to the rest pose.
    pub fn from_positions(positions: Vec<Vec2>) -> Self {
        Self {
            positions: positions.clone(),
            rest_positions: positions,
            uvs: Vec::new(),
            indices: Vec::new(),
            revision: 0,
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.rest_positions.len()
    }

    /// Returns true if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.rest_positions.is_empty()
    }

    /// Snaps the live buffer back to the rest pose.
    ///
    /// Deformers only write the vertices they bind; a pipeline that
    /// wants unbound vertices at rest runs this before its deformers.
    pub fn reset_to_rest(&mut self) {
        self.positions.clear();
        self.positions.extend_from_slice(&self.rest_positions);
    }

    /// Number of times `refresh` has been called.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Drawable for Mesh2D {
    fn rest_vertices(&self) -> &[Vec2] {
        &self.rest_positions
    }

    fn vertices_mut(&mut self) -> &mut [Vec2] {
        &mut self.positions
    }

    fn refresh(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_positions_copies_rest() {
        let mesh = Mesh2D::from_positions(vec![Vec2::ZERO, Vec2::X, Vec2::Y]);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.positions, mesh.rest_positions);
        assert_eq!(mesh.revision(), 0);
    }

    #[test]
    fn test_refresh_bumps_revision() {
        let mut mesh = Mesh2D::from_positions(vec![Vec2::ZERO]);

        mesh.refresh();
        mesh.refresh();

        assert_eq!(mesh.revision(), 2);
    }

    #[test]
    fn test_reset_to_rest() {
        let mut mesh = Mesh2D::from_positions(vec![Vec2::ZERO, Vec2::X]);
        mesh.positions[1] = Vec2::new(5.0, 5.0);

        mesh.reset_to_rest();

        assert_eq!(mesh.positions, mesh.rest_positions);
    }
}
