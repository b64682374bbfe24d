//! 2D mesh surface for strand.
//!
//! Provides the vertex storage that deformers write into:
//!
//! - [`Mesh2D`] - rest-pose and live vertex buffers with refresh tracking
//! - [`Drawable`] - the narrow interface deformers consume
//! - [`primitives`] - simple rest-pose geometry generators

mod mesh;
pub mod primitives;

pub use mesh::{Drawable, Mesh2D};
