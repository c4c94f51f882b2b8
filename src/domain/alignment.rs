//! Rotational alignment strategies
//!
//! An alignment strategy turns the two anchors' "up" vectors into a rotation
//! correction and knows how to fold that correction into a module's Euler
//! rotation. The registry only talks to the [`Alignment`] trait, so a full
//! 3D aligner can replace [`YawOnly`] without touching resolution.

use std::fmt;

use super::vector::Vec3;

/// Angle between two "up" vectors in degrees, in [0, 180]
///
/// The dot product is clamped to [-1, 1] before `acos` so float drift and
/// non-unit inputs degrade to a boundary angle instead of NaN. A NaN dot
/// product (NaN components) yields 0.
pub fn up_angle_degrees(a: &Vec3, b: &Vec3) -> f64 {
    let dot = a.dot(b);
    if dot.is_nan() {
        return 0.0;
    }
    dot.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Strategy for computing and applying the rotation between mated anchors
pub trait Alignment: fmt::Debug + Send + Sync {
    /// Strategy name, for diagnostics
    fn name(&self) -> &'static str;

    /// Rotation correction in degrees between two "up" vectors
    fn rotation_degrees(&self, source_up: &Vec3, target_up: &Vec3) -> f64;

    /// Applies a correction to an Euler rotation (degrees)
    fn apply(&self, rotation: Vec3, degrees: f64) -> Vec3;
}

/// Yaw-only approximation
///
/// Produces only the unsigned magnitude of the "up" misalignment and applies
/// it about the vertical (Y) axis. X and Z rotations pass through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YawOnly;

impl Alignment for YawOnly {
    fn name(&self) -> &'static str {
        "yaw_only"
    }

    fn rotation_degrees(&self, source_up: &Vec3, target_up: &Vec3) -> f64 {
        up_angle_degrees(source_up, target_up)
    }

    fn apply(&self, rotation: Vec3, degrees: f64) -> Vec3 {
        Vec3::new(rotation.x, rotation.y + degrees, rotation.z)
    }
}
