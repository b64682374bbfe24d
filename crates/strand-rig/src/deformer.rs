//! The path deformer: a joint chain driving bound mesh vertices.

use glam::Vec2;
use strand_mesh::Drawable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BindingSet, JointChain, MeshId, RigError};

/// Deforms meshes by binding their vertices to a chain of joints.
///
/// Bound vertices are expressed in their joint's rest-local frame:
/// each update recovers a rigid transform per joint from the path's
/// change of shape and writes `transform(rest_vertex)` into the live
/// buffer of every bound mesh, then refreshes each mesh once.
///
/// Runs synchronously inside the caller's tick; it must finish before
/// the render pass reads the live buffers. The deformer writes only
/// the vertex slots named in its bindings. Unbound vertices keep
/// whatever an earlier pipeline stage left there, and two deformers
/// must not bind overlapping vertices of one mesh within a tick.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathDeformer {
    chain: JointChain,
    bindings: BindingSet,
}

impl PathDeformer {
    /// Creates a deformer with the given rest-pose joint origins and
    /// no bindings.
    pub fn new(origins: Vec<Vec2>) -> Self {
        Self {
            chain: JointChain::new(origins),
            bindings: BindingSet::new(),
        }
    }

    /// The joint chain.
    pub fn chain(&self) -> &JointChain {
        &self.chain
    }

    /// Current joint positions, mutable for the animator.
    pub fn joints_mut(&mut self) -> &mut [Vec2] {
        self.chain.joints_mut()
    }

    /// Appends a joint at `offset` from the last origin.
    pub fn append_joint(&mut self, offset: Vec2) -> Result<(), RigError> {
        self.chain.append_joint(offset)
    }

    /// Re-anchors joint `index` at its current position.
    pub fn reanchor_joint(&mut self, index: usize) {
        self.chain.reanchor_joint(index);
    }

    /// Snaps all joints back to their rest origins.
    pub fn reset_chain(&mut self) {
        self.chain.reset();
    }

    /// The binding table.
    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }

    /// Binds `vertices` of `mesh` to `joint`.
    ///
    /// The joint index is validated against the chain here, once, so
    /// the per-tick update can skip the check. Vertex indices are not
    /// validated: the deformer does not own the mesh, and an
    /// out-of-range vertex panics at update time instead of silently
    /// corrupting a neighbor.
    pub fn bind(
        &mut self,
        mesh: MeshId,
        joint: usize,
        vertices: Vec<usize>,
    ) -> Result<(), RigError> {
        if joint >= self.chain.len() {
            return Err(RigError::JointOutOfRange {
                index: joint,
                len: self.chain.len(),
            });
        }
        self.bindings.bind(mesh, joint, vertices);
        Ok(())
    }

    /// Runs one deformation tick.
    ///
    /// Recomputes every joint transform, writes all bound vertices of
    /// every bound mesh, and refreshes each mesh exactly once. `meshes`
    /// is the arena the deformer's [`MeshId`]s index into; an id past
    /// the end of the slice panics.
    pub fn update<M: Drawable>(&mut self, meshes: &mut [M]) {
        self.chain.recompute_transforms();
        let transforms = self.chain.transforms();

        for binding in self.bindings.meshes() {
            let mesh = &mut meshes[binding.mesh.0];
            for joint_binding in &binding.joints {
                let transform = transforms[joint_binding.joint];
                for &v in &joint_binding.vertices {
                    let rest = mesh.rest_vertices()[v];
                    mesh.vertices_mut()[v] = transform.transform_point(rest);
                }
            }
            mesh.refresh();
        }
    }

    /// Runs one deformation tick, then the injected base behavior.
    ///
    /// Scene graphs that layer per-node work on top of the deformation
    /// pass their base update here; it runs after all meshes are
    /// written and refreshed.
    pub fn update_with<M, F>(&mut self, meshes: &mut [M], base: F)
    where
        M: Drawable,
        F: FnOnce(),
    {
        self.update(meshes);
        base();
    }

    /// Post-transform local axes of every joint, as line segments.
    ///
    /// Two segments per joint (X then Y axis, `scale` units long) from
    /// the joint's current position. Debug visualization aid; reads
    /// the transforms from the last update and mutates nothing.
    pub fn joint_axes(&self, scale: f32) -> Vec<[Vec2; 2]> {
        let mut segments = Vec::with_capacity(self.chain.len() * 2);
        for transform in self.chain.transforms() {
            let origin = transform.translation;
            segments.push([origin, transform.transform_point(Vec2::X * scale)]);
            segments.push([origin, transform.transform_point(Vec2::Y * scale)]);
        }
        segments
    }
}
