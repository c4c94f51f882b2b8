//! Connection data: declared intents, pairwise results, and placements

use serde::{Deserialize, Serialize};

use super::id::{AnchorId, AnchorRef, ModuleId};
use super::vector::Vec3;

/// A declared intent to connect two anchors on two modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSpec {
    pub source_module: ModuleId,
    pub source_anchor: AnchorId,
    pub target_module: ModuleId,
    pub target_anchor: AnchorId,

    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ConnectionSpec {
    pub fn new(source: AnchorRef, target: AnchorRef) -> Self {
        Self {
            source_module: source.module,
            source_anchor: source.anchor,
            target_module: target.module,
            target_anchor: target.anchor,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn source(&self) -> AnchorRef {
        AnchorRef::new(self.source_module.clone(), self.source_anchor.clone())
    }

    pub fn target(&self) -> AnchorRef {
        AnchorRef::new(self.target_module.clone(), self.target_anchor.clone())
    }

    /// The label if set, otherwise `"{source_anchor} ↔ {target_anchor}"`
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} ↔ {}", self.source_anchor, self.target_anchor),
        }
    }
}

/// Outcome of mating two anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionResult {
    pub compatible: bool,

    /// Offset to apply to the target module
    pub translation: Vec3,

    /// Yaw correction magnitude, in [0, 180]
    pub rotation_degrees: f64,

    /// Euclidean norm of `translation`
    pub distance: f64,

    /// Reason the anchors could not be mated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionResult {
    /// A compatible result; distance is derived from the translation
    pub fn mated(translation: Vec3, rotation_degrees: f64) -> Self {
        Self {
            compatible: true,
            translation,
            rotation_degrees,
            distance: translation.length(),
            error: None,
        }
    }

    /// An incompatible result with zeroed geometry
    pub fn incompatible(reason: impl Into<String>) -> Self {
        Self {
            compatible: false,
            translation: Vec3::ZERO,
            rotation_degrees: 0.0,
            distance: 0.0,
            error: Some(reason.into()),
        }
    }
}

/// Position and Euler rotation (degrees) of a placed module
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Placement {
    /// The unplaced origin
    pub const ORIGIN: Placement = Placement {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }
}
