//! Joint chains and per-joint orientation recovery.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Rigid2D, RigError};

/// A chain of 2D control joints defining a piecewise path.
///
/// Each joint carries an immutable rest origin and a current position.
/// Whatever animates the rig moves the current positions between
/// ticks (through [`joints_mut`](JointChain::joints_mut));
/// [`recompute_transforms`](JointChain::recompute_transforms) then
/// recovers a rigid transform per joint from how the path bent
/// relative to its rest shape.
///
/// Invariant: origins, joints, and transforms always have the same
/// length after any mutating operation completes.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointChain {
    origins: Vec<Vec2>,
    joints: Vec<Vec2>,
    transforms: Vec<Rigid2D>,
}

impl JointChain {
    /// Creates a chain with the given rest-pose origins.
    ///
    /// Current positions start equal to the origins and all transforms
    /// start at identity. An empty chain is allowed; operations that
    /// need at least one joint fail when called instead.
    pub fn new(origins: Vec<Vec2>) -> Self {
        let transforms = vec![Rigid2D::IDENTITY; origins.len()];
        Self {
            joints: origins.clone(),
            origins,
            transforms,
        }
    }

    /// Returns the number of joints.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Returns true if the chain has no joints.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Rest-pose origins.
    pub fn origins(&self) -> &[Vec2] {
        &self.origins
    }

    /// Current joint positions.
    pub fn joints(&self) -> &[Vec2] {
        &self.joints
    }

    /// Mutable access to current joint positions.
    ///
    /// This is how an animator drives the chain between ticks. The
    /// slice cannot change length, so the chain invariants hold.
    pub fn joints_mut(&mut self) -> &mut [Vec2] {
        &mut self.joints
    }

    /// Transforms recovered by the last
    /// [`recompute_transforms`](JointChain::recompute_transforms).
    pub fn transforms(&self) -> &[Rigid2D] {
        &self.transforms
    }

    /// Appends a joint at `offset` from the last origin.
    ///
    /// The new joint starts undeformed: its current position equals
    /// its origin. Its transform slot is identity until the next
    /// recompute. Fails on an empty chain, which has no last origin
    /// to offset from.
    pub fn append_joint(&mut self, offset: Vec2) -> Result<(), RigError> {
        let last = *self.origins.last().ok_or(RigError::EmptyChain)?;
        let origin = last + offset;
        self.origins.push(origin);
        self.joints.push(origin);
        self.transforms.push(Rigid2D::IDENTITY);
        Ok(())
    }

    /// Makes the current position of joint `index` its new rest origin.
    ///
    /// The joint does not move; the deformed pose simply becomes the
    /// new baseline for measuring rotation. Out-of-range indices are
    /// silently ignored so rig authoring tools can pass stale indices.
    pub fn reanchor_joint(&mut self, index: usize) {
        if index < self.joints.len() {
            self.origins[index] = self.joints[index];
        }
    }

    /// Snaps all current positions back to their rest origins.
    ///
    /// Transforms are resized to match but hold stale values until the
    /// next recompute.
    pub fn reset(&mut self) {
        self.joints.clear();
        self.joints.extend_from_slice(&self.origins);
        self.transforms.resize(self.joints.len(), Rigid2D::IDENTITY);
    }

    /// Recovers a rigid transform for every joint.
    ///
    /// Each joint orients itself against a reference segment of the
    /// path: the forward segment to the next joint, except at the tail
    /// of the chain where there is no next joint and the segment back
    /// to the previous joint is used instead. The transform translates
    /// to the joint's current position and rotates by the rest segment
    /// angle minus the current segment angle.
    ///
    /// A single-joint chain has no segment to orient against and is
    /// defined to keep zero rotation. Pure function of the current
    /// origins and joints; calling it twice yields identical results.
    pub fn recompute_transforms(&mut self) {
        let len = self.joints.len();
        self.transforms.resize(len, Rigid2D::IDENTITY);

        if len == 1 {
            self.transforms[0] = Rigid2D::from_translation(self.joints[0]);
            return;
        }

        for i in 0..len {
            // Reference segment: forward, reversed at the tail
            let j = if i + 1 == len { i - 1 } else { i + 1 };
            let rest = self.origins[j] - self.origins[i];
            let current = self.joints[j] - self.joints[i];

            let rest_angle = rest.y.atan2(rest.x);
            let current_angle = current.y.atan2(current.x);

            self.transforms[i] = Rigid2D::new(self.joints[i], rest_angle - current_angle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, TAU};

    /// Angles compared on the circle, ignoring full-turn wrapping.
    fn angle_eq(a: f32, b: f32) -> bool {
        let d = (a - b).rem_euclid(TAU);
        d < 1e-5 || TAU - d < 1e-5
    }

    fn straight_chain() -> JointChain {
        JointChain::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
        ])
    }

    #[test]
    fn test_new_copies_origins_into_joints() {
        let chain = straight_chain();

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.origins(), chain.joints());
        assert_eq!(chain.transforms(), &[Rigid2D::IDENTITY; 3]);
    }

    #[test]
    fn test_undeformed_chain_recovers_identity_rotation() {
        let mut chain = straight_chain();

        chain.recompute_transforms();

        for (i, t) in chain.transforms().iter().enumerate() {
            assert!(t.rotation.abs() < 1e-6, "joint {i} rotated");
            assert_eq!(t.translation, chain.joints()[i]);
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut chain = straight_chain();
        chain.joints_mut()[2] = Vec2::new(20.0, 10.0);

        chain.recompute_transforms();
        let first = chain.transforms().to_vec();
        chain.recompute_transforms();

        assert_eq!(chain.transforms(), first.as_slice());
    }

    #[test]
    fn test_displaced_tail_joint() {
        // Third joint lifted: segment 1→2 swings from 0° to 45°
        let mut chain = straight_chain();
        chain.joints_mut()[2] = Vec2::new(20.0, 10.0);

        chain.recompute_transforms();
        let transforms = chain.transforms();

        // Joint 0 orients against segment 0→1, which did not move
        assert!(transforms[0].rotation.abs() < 1e-6);
        // Joint 1 orients against segment 1→2: rest 0° minus current 45°
        assert!(angle_eq(transforms[1].rotation, -FRAC_PI_4));
        // Joint 2 is the tail and orients against the reversed segment
        // back to joint 1, recovering the same bend
        assert!(angle_eq(transforms[2].rotation, -FRAC_PI_4));
        assert_eq!(transforms[2].translation, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_right_angle_bend() {
        let mut chain = straight_chain();
        chain.joints_mut()[2] = Vec2::new(10.0, 10.0);

        chain.recompute_transforms();

        // Segment 1→2 now points straight up: 0° rest minus 90° current
        let quarter = -std::f32::consts::FRAC_PI_2;
        assert!(angle_eq(chain.transforms()[1].rotation, quarter));
        assert!(angle_eq(chain.transforms()[2].rotation, quarter));
    }

    #[test]
    fn test_single_joint_keeps_zero_rotation() {
        let mut chain = JointChain::new(vec![Vec2::new(3.0, 4.0)]);
        chain.joints_mut()[0] = Vec2::new(7.0, 1.0);

        chain.recompute_transforms();

        let t = chain.transforms()[0];
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.translation, Vec2::new(7.0, 1.0));
    }

    #[test]
    fn test_empty_chain_recompute_is_noop() {
        let mut chain = JointChain::new(Vec::new());
        chain.recompute_transforms();
        assert!(chain.transforms().is_empty());
    }

    #[test]
    fn test_append_extends_chain() {
        let mut chain = straight_chain();

        chain.append_joint(Vec2::new(10.0, 0.0)).unwrap();

        assert_eq!(chain.len(), 4);
        assert_eq!(chain.origins()[3], Vec2::new(30.0, 0.0));
        assert_eq!(chain.joints()[3], Vec2::new(30.0, 0.0));
        assert_eq!(chain.transforms().len(), 4);
    }

    #[test]
    fn test_append_on_empty_chain_fails() {
        let mut chain = JointChain::new(Vec::new());
        assert_eq!(chain.append_joint(Vec2::X), Err(RigError::EmptyChain));
    }

    #[test]
    fn test_reanchor_out_of_range_is_ignored() {
        let mut chain = straight_chain();
        let before = chain.origins().to_vec();

        chain.reanchor_joint(99);

        assert_eq!(chain.origins(), before.as_slice());
    }

    #[test]
    fn test_reanchor_then_reset_keeps_deformed_pose() {
        let mut chain = straight_chain();
        chain.joints_mut()[1] = Vec2::new(10.0, 5.0);
        chain.joints_mut()[2] = Vec2::new(15.0, 12.0);
        let deformed = chain.joints().to_vec();

        for i in 0..chain.len() {
            chain.reanchor_joint(i);
        }
        chain.reset();

        // Origins were updated to the deformed pose, so reset snaps
        // to it rather than the construction-time positions
        assert_eq!(chain.joints(), deformed.as_slice());
    }

    #[test]
    fn test_reset_without_reanchor_restores_origins() {
        let mut chain = straight_chain();
        chain.joints_mut()[2] = Vec2::new(0.0, 50.0);

        chain.reset();

        assert_eq!(chain.joints(), chain.origins());
    }
}
