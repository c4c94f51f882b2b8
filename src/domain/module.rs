//! Module domain model
//!
//! A module is one habitat unit reduced to what docking needs: an id, an
//! optional type tag, and its anchors. Anchor ids are unique per module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::anchor::{Anchor, AnchorError};
use super::id::ModuleId;

#[derive(Debug, Error, PartialEq)]
pub enum ModuleError {
    #[error("Module {module}: duplicate anchor id '{anchor}'")]
    DuplicateAnchor { module: ModuleId, anchor: String },

    #[error("Module {module}: {source}")]
    InvalidAnchor {
        module: ModuleId,
        #[source]
        source: AnchorError,
    },
}

/// A named container of anchors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModuleRecord")]
pub struct Module {
    /// Unique identifier
    pub id: ModuleId,

    /// Module type tag (e.g., "habitat", "lab"), matched against anchor policies
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,

    anchors: Vec<Anchor>,
}

/// Unvalidated shape used for deserialization
#[derive(Deserialize)]
struct ModuleRecord {
    id: ModuleId,
    #[serde(rename = "type", default)]
    module_type: Option<String>,
    #[serde(default)]
    anchors: Vec<Anchor>,
}

impl TryFrom<ModuleRecord> for Module {
    type Error = ModuleError;

    fn try_from(record: ModuleRecord) -> Result<Self, Self::Error> {
        let mut module = Module::new(record.id, record.anchors)?;
        module.module_type = record.module_type;
        Ok(module)
    }
}

impl Module {
    /// Creates a module, rejecting duplicate anchor ids and malformed anchors
    pub fn new(id: ModuleId, anchors: Vec<Anchor>) -> Result<Self, ModuleError> {
        for (i, anchor) in anchors.iter().enumerate() {
            anchor.validate().map_err(|source| ModuleError::InvalidAnchor {
                module: id.clone(),
                source,
            })?;

            if anchors[..i].iter().any(|a| a.id == anchor.id) {
                return Err(ModuleError::DuplicateAnchor {
                    module: id,
                    anchor: anchor.id.to_string(),
                });
            }
        }

        Ok(Self {
            id,
            module_type: None,
            anchors,
        })
    }

    pub fn with_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = Some(module_type.into());
        self
    }

    /// Looks up an anchor by id
    pub fn anchor(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id.as_str() == id)
    }

    /// Anchors in declaration order
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::AnchorId;
    use crate::domain::vector::Vec3;

    fn anchor(id: &str) -> Anchor {
        Anchor::new(AnchorId::new(id).unwrap(), Vec3::ZERO, Vec3::UP)
    }

    fn module_id(id: &str) -> ModuleId {
        ModuleId::new(id).unwrap()
    }

    #[test]
    fn lookup_by_id() {
        let module = Module::new(module_id("m1"), vec![anchor("A"), anchor("C")]).unwrap();

        assert_eq!(module.len(), 2);
        assert!(module.anchor("A").is_some());
        assert!(module.anchor("C").is_some());
        assert!(module.anchor("B").is_none());
    }

    #[test]
    fn duplicate_anchor_rejected() {
        let result = Module::new(module_id("m1"), vec![anchor("A"), anchor("A")]);
        assert!(matches!(result, Err(ModuleError::DuplicateAnchor { .. })));
    }

    #[test]
    fn invalid_anchor_rejected() {
        let result = Module::new(module_id("m1"), vec![anchor("A").with_radius(0.0)]);
        assert!(matches!(result, Err(ModuleError::InvalidAnchor { .. })));
    }

    #[test]
    fn empty_module_is_allowed() {
        let module = Module::new(module_id("shell"), vec![]).unwrap();
        assert!(module.is_empty());
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{
            "id": "m1",
            "type": "lab",
            "anchors": [
                {"id": "A", "kind": "vertical", "radius": 0.2, "position": [0,0,0], "direction": [0,1,0], "up": [0,0,1]},
                {"id": "A", "kind": "vertical", "radius": 0.2, "position": [0,0,0], "direction": [0,-1,0], "up": [0,0,1]}
            ]
        }"#;

        let err = serde_json::from_str::<Module>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate anchor id 'A'"));
    }

    #[test]
    fn serde_keeps_type_tag() {
        let module = Module::new(module_id("m1"), vec![anchor("A")])
            .unwrap()
            .with_type("habitat");

        let json = serde_json::to_string(&module).unwrap();
        assert!(json.contains("\"type\":\"habitat\""));

        let parsed: Module = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, module);
    }
}
