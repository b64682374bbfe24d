//! Error types for strand-rig.

use thiserror::Error;

/// Errors that can occur during rig operations.
///
/// These are precondition violations: the rig configuration must be
/// fixed before retrying, nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RigError {
    /// Operation requires a chain with at least one joint.
    #[error("joint chain is empty")]
    EmptyChain,

    /// A binding referenced a joint past the end of the chain.
    #[error("joint index out of range: {index} >= {len}")]
    JointOutOfRange { index: usize, len: usize },
}
