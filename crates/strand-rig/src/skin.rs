//! Bindings from chain joints to mesh vertices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arena-style handle for a mesh affected by a deformer.
///
/// The value is the caller's index into the mesh slice passed to
/// [`PathDeformer::update`](crate::PathDeformer::update). Using an
/// index instead of a reference keeps the deformer from owning the
/// meshes it writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshId(pub usize);

/// Vertices of one mesh driven by one joint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointBinding {
    /// Index into the joint chain.
    pub joint: usize,
    /// Vertex indices into the bound mesh's rest-pose buffer.
    pub vertices: Vec<usize>,
}

/// All joint bindings for one mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshBinding {
    pub mesh: MeshId,
    pub joints: Vec<JointBinding>,
}

/// The many-to-many binding table of a deformer.
///
/// Each mesh appears in at most one [`MeshBinding`] entry, so an
/// update pass can refresh every affected mesh exactly once no matter
/// how many joints drive it. Iteration order is insertion order of
/// first binding, which keeps updates deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BindingSet {
    meshes: Vec<MeshBinding>,
}

impl BindingSet {
    /// Creates an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no mesh is bound.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Number of bound meshes.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Per-mesh bindings, one entry per mesh.
    pub fn meshes(&self) -> &[MeshBinding] {
        &self.meshes
    }

    /// Binds `vertices` of `mesh` to `joint`.
    ///
    /// Merges into the existing entry when the mesh (or the mesh and
    /// joint) is already bound. Joint indices are validated by the
    /// deformer, not here; vertex indices are a caller contract.
    pub fn bind(&mut self, mesh: MeshId, joint: usize, vertices: Vec<usize>) {
        let index = match self.meshes.iter().position(|m| m.mesh == mesh) {
            Some(index) => index,
            None => {
                self.meshes.push(MeshBinding {
                    mesh,
                    joints: Vec::new(),
                });
                self.meshes.len() - 1
            }
        };
        let entry = &mut self.meshes[index];

        match entry.joints.iter_mut().find(|j| j.joint == joint) {
            Some(binding) => binding.vertices.extend(vertices),
            None => entry.joints.push(JointBinding { joint, vertices }),
        }
    }
}
