//! Path-based 2D mesh deformation for strand.
//!
//! A chain of control joints defines a piecewise path. Mesh vertices
//! are bound to individual joints; as joints move away from their
//! rest positions, each joint recovers a rigid transform from the
//! change in shape of its path segment and applies it to its bound
//! vertices.
//!
//! - [`JointChain`] - joint positions, rest origins, recovered transforms
//! - [`PathDeformer`] - chain + bindings, drives meshes each tick
//! - [`BindingSet`] - mesh-identity → per-joint vertex index lists
//! - [`Rigid2D`] - rotation + translation, no scale or shear
//!
//! Joints are discrete rigid anchors, not spline control points: no
//! curve is interpolated between them, and no IK is solved.

mod chain;
mod deformer;
mod error;
mod skin;
mod transform;

pub use chain::JointChain;
pub use deformer::PathDeformer;
pub use error::RigError;
pub use skin::{BindingSet, JointBinding, MeshBinding, MeshId};
pub use transform::Rigid2D;
