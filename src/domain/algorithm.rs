//! Anchor connection algorithm
//!
//! Pure functions that decide whether two anchors can be mated and compute
//! the transform that snaps the second module onto the first:
//!
//! 1. Compatibility: outward directions must be antiparallel
//! 2. Translation: `target.position - source.position`
//! 3. Rotation: angle between the two "up" vectors, as a yaw correction
//! 4. Distance: Euclidean norm of the translation
//!
//! The free functions reproduce the reference behavior exactly (strict
//! component equality, yaw-only rotation). [`Connector`] wraps the same
//! steps with a configurable direction-match policy, alignment strategy
//! and optional unit-vector validation.
//!
//! Nothing here logs or fails; incompatibility is reported as data.

use super::alignment::{Alignment, YawOnly};
use super::anchor::Anchor;
use super::connection::{ConnectionResult, Placement};
use super::vector::Vec3;

/// True iff the two outward directions are exact antiparallels
///
/// This is strict component-wise equality `a.direction == -b.direction`,
/// not a tolerance test. Since `0.0 == -0.0`, two zero directions compare
/// as compatible.
pub fn check_compatible(a: &Anchor, b: &Anchor) -> bool {
    a.direction == -b.direction
}

/// Offset that carries `a`'s position onto `b`'s: `b.position - a.position`
///
/// Both positions must already be expressed in a common frame.
pub fn compute_translation(a: &Anchor, b: &Anchor) -> Vec3 {
    b.position - a.position
}

/// Magnitude of the "up" misalignment in degrees, in [0, 180]
pub fn compute_rotation(a: &Anchor, b: &Anchor) -> f64 {
    YawOnly.rotation_degrees(&a.up, &b.up)
}

/// Mates two anchors using the exact direction test and yaw-only rotation
pub fn connect(a: &Anchor, b: &Anchor) -> ConnectionResult {
    if !check_compatible(a, b) {
        return ConnectionResult::incompatible(direction_mismatch(a, b));
    }

    ConnectionResult::mated(compute_translation(a, b), compute_rotation(a, b))
}

/// Applies a connection to a module's position and Euler rotation
///
/// An incompatible result is a silent no-op: the inputs come back unchanged.
pub fn apply_connection(
    position: Vec3,
    rotation: Vec3,
    connection: &ConnectionResult,
) -> Placement {
    apply_with(&YawOnly, position, rotation, connection)
}

fn apply_with(
    alignment: &dyn Alignment,
    position: Vec3,
    rotation: Vec3,
    connection: &ConnectionResult,
) -> Placement {
    if !connection.compatible {
        return Placement::new(position, rotation);
    }

    Placement::new(
        position + connection.translation,
        alignment.apply(rotation, connection.rotation_degrees),
    )
}

fn direction_mismatch(a: &Anchor, b: &Anchor) -> String {
    format!("incompatible directions: {} vs {}", a.direction, b.direction)
}

/// How outward directions are matched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DirectionMatch {
    /// Strict component-wise antiparallel test
    #[default]
    Exact,

    /// Antiparallel within a cosine tolerance: `cos(a, b) <= -1 + epsilon`
    Tolerant { epsilon: f64 },
}

impl DirectionMatch {
    /// Builds a policy from a tolerance; `epsilon <= 0` is the exact test
    pub fn from_epsilon(epsilon: f64) -> Self {
        if epsilon > 0.0 {
            DirectionMatch::Tolerant { epsilon }
        } else {
            DirectionMatch::Exact
        }
    }

    /// Tests two outward directions
    ///
    /// Under the tolerant rule a zero direction never matches.
    pub fn matches(&self, a: &Vec3, b: &Vec3) -> bool {
        match *self {
            DirectionMatch::Exact => *a == -*b,
            DirectionMatch::Tolerant { epsilon } => a
                .cos_angle(b)
                .map(|cos| cos <= -1.0 + epsilon)
                .unwrap_or(false),
        }
    }
}

/// Configurable connection kernel
#[derive(Debug)]
pub struct Connector {
    direction_match: DirectionMatch,
    alignment: Box<dyn Alignment>,
    require_unit_vectors: bool,
}

impl Default for Connector {
    fn default() -> Self {
        Self::new()
    }
}

impl Connector {
    /// Exact matching, yaw-only alignment, no input validation
    pub fn new() -> Self {
        Self {
            direction_match: DirectionMatch::Exact,
            alignment: Box::new(YawOnly),
            require_unit_vectors: false,
        }
    }

    pub fn with_direction_match(mut self, direction_match: DirectionMatch) -> Self {
        self.direction_match = direction_match;
        self
    }

    pub fn with_alignment(mut self, alignment: Box<dyn Alignment>) -> Self {
        self.alignment = alignment;
        self
    }

    /// Reject anchors whose `direction` or `up` is not unit length
    pub fn require_unit_vectors(mut self, require: bool) -> Self {
        self.require_unit_vectors = require;
        self
    }

    pub fn direction_match(&self) -> DirectionMatch {
        self.direction_match
    }

    pub fn alignment(&self) -> &dyn Alignment {
        self.alignment.as_ref()
    }

    pub fn check_compatible(&self, a: &Anchor, b: &Anchor) -> bool {
        self.direction_match.matches(&a.direction, &b.direction)
    }

    pub fn compute_rotation(&self, a: &Anchor, b: &Anchor) -> f64 {
        self.alignment.rotation_degrees(&a.up, &b.up)
    }

    pub fn connect(&self, a: &Anchor, b: &Anchor) -> ConnectionResult {
        if self.require_unit_vectors {
            for anchor in [a, b] {
                if let Err(e) = anchor.validate_unit_vectors() {
                    return ConnectionResult::incompatible(e.to_string());
                }
            }
        }

        if !self.check_compatible(a, b) {
            return ConnectionResult::incompatible(direction_mismatch(a, b));
        }

        ConnectionResult::mated(compute_translation(a, b), self.compute_rotation(a, b))
    }

    pub fn apply_connection(
        &self,
        position: Vec3,
        rotation: Vec3,
        connection: &ConnectionResult,
    ) -> Placement {
        apply_with(self.alignment.as_ref(), position, rotation, connection)
    }
}
