//! Anchor domain model
//!
//! Anchors are the attachment points on a module: a position in the module's
//! local frame, an outward-facing direction, and an "up" vector that fixes
//! the rotational frame at the anchor face.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use super::id::AnchorId;
use super::vector::Vec3;

#[derive(Debug, Error, PartialEq)]
pub enum AnchorError {
    #[error("Anchor {0}: radius must be positive and finite, got {1}")]
    InvalidRadius(AnchorId, f64),

    #[error("Anchor {anchor}: {field} has non-finite components {value}")]
    NonFinite {
        anchor: AnchorId,
        field: &'static str,
        value: Vec3,
    },

    #[error("Anchor {anchor}: {field} {value} is not a unit vector")]
    NotUnit {
        anchor: AnchorId,
        field: &'static str,
        value: Vec3,
    },
}

/// Kind of interconnect an anchor provides
///
/// Layouts may also spell it `vertical`, `horizontal` or with dashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AnchorKind {
    /// Stacking connection (floor/ceiling hatch)
    #[default]
    VerticalInterconnect,

    /// Side-by-side connection (wall hatch)
    HorizontalInterconnect,
}

impl std::fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorKind::VerticalInterconnect => write!(f, "vertical_interconnect"),
            AnchorKind::HorizontalInterconnect => write!(f, "horizontal_interconnect"),
        }
    }
}

impl std::str::FromStr for AnchorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vertical_interconnect" | "vertical-interconnect" | "vertical" => {
                Ok(AnchorKind::VerticalInterconnect)
            }
            "horizontal_interconnect" | "horizontal-interconnect" | "horizontal" => {
                Ok(AnchorKind::HorizontalInterconnect)
            }
            _ => Err(format!("Unknown anchor kind: {}", s)),
        }
    }
}

impl TryFrom<String> for AnchorKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// An attachment point on a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Identifier, unique within the owning module
    pub id: AnchorId,

    /// Interconnect kind (descriptive only)
    pub kind: AnchorKind,

    /// Physical clearance radius
    pub radius: f64,

    /// Location in the owning module's local frame
    pub position: Vec3,

    /// Outward-facing normal
    pub direction: Vec3,

    /// Rotational frame at the anchor face
    pub up: Vec3,

    /// Module types this anchor may mate with
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub compatible_types: BTreeSet<String>,
}

impl Anchor {
    /// Creates an anchor at `position` facing `direction`, with +Y as up
    /// and a unit radius
    pub fn new(id: AnchorId, position: Vec3, direction: Vec3) -> Self {
        Self {
            id,
            kind: AnchorKind::default(),
            radius: 1.0,
            position,
            direction,
            up: Vec3::UP,
            compatible_types: BTreeSet::new(),
        }
    }

    pub fn with_kind(mut self, kind: AnchorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    /// Adds module types this anchor may mate with
    pub fn with_compatible_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compatible_types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Caller-side policy check: may this anchor mate with a module of the given type?
    ///
    /// An anchor with no declared types accepts anything.
    pub fn accepts(&self, module_type: &str) -> bool {
        self.compatible_types.is_empty() || self.compatible_types.contains(module_type)
    }

    /// Checks the structural invariants: positive radius and finite vectors
    pub fn validate(&self) -> Result<(), AnchorError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(AnchorError::InvalidRadius(self.id.clone(), self.radius));
        }

        for (field, value) in self.vectors() {
            if !value.is_finite() {
                return Err(AnchorError::NonFinite {
                    anchor: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        Ok(())
    }

    /// Stricter check: `direction` and `up` must be unit length
    pub fn validate_unit_vectors(&self) -> Result<(), AnchorError> {
        for (field, value) in [("direction", self.direction), ("up", self.up)] {
            if !value.is_unit() {
                return Err(AnchorError::NotUnit {
                    anchor: self.id.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    fn vectors(&self) -> [(&'static str, Vec3); 3] {
        [
            ("position", self.position),
            ("direction", self.direction),
            ("up", self.up),
        ]
    }
}
