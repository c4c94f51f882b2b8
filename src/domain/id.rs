//! Identifiers for modules and anchors
//!
//! ID Format:
//! - Module IDs: any non-empty string without whitespace or `.` (e.g., `modulo_1`)
//! - Anchor IDs: any non-empty string without whitespace (e.g., `anclaje_A`)
//! - Anchor references: `{module-id}.{anchor-id}` (e.g., `modulo_1.anclaje_A`)
//!
//! Anchor IDs are only unique within their owning module, so the reference
//! form is what addresses an anchor across a whole layout.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid module ID: expected a non-empty name without whitespace or '.', got '{0}'")]
    InvalidModuleId(String),

    #[error("Invalid anchor ID: expected a non-empty name without whitespace, got '{0}'")]
    InvalidAnchorId(String),

    #[error("Invalid anchor reference: expected '{{module-id}}.{{anchor-id}}', got '{0}'")]
    InvalidAnchorRef(String),
}

fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

/// Module identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId(String);

impl ModuleId {
    /// Creates a module ID, validating the format
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        if !is_valid_name(&id) || id.contains('.') {
            return Err(IdError::InvalidModuleId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for ModuleId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.0
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Anchor identifier, unique within its module
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnchorId(String);

impl AnchorId {
    /// Creates an anchor ID, validating the format
    pub fn new(id: impl Into<String>) -> Result<Self, IdError> {
        let id = id.into();
        if !is_valid_name(&id) {
            return Err(IdError::InvalidAnchorId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AnchorId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for AnchorId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnchorId> for String {
    fn from(id: AnchorId) -> Self {
        id.0
    }
}

impl Borrow<str> for AnchorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A fully-qualified anchor address: `{module}.{anchor}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnchorRef {
    pub module: ModuleId,
    pub anchor: AnchorId,
}

impl AnchorRef {
    pub fn new(module: ModuleId, anchor: AnchorId) -> Self {
        Self { module, anchor }
    }
}

impl fmt::Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.anchor)
    }
}

impl FromStr for AnchorRef {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Module IDs cannot contain '.', so the first dot is the separator
        let (module, anchor) = s
            .split_once('.')
            .ok_or_else(|| IdError::InvalidAnchorRef(s.to_string()))?;

        let module = ModuleId::new(module).map_err(|_| IdError::InvalidAnchorRef(s.to_string()))?;
        let anchor = AnchorId::new(anchor).map_err(|_| IdError::InvalidAnchorRef(s.to_string()))?;

        Ok(Self { module, anchor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_id_valid() {
        let id = ModuleId::new("modulo_1").unwrap();
        assert_eq!(id.as_str(), "modulo_1");
        assert_eq!(id.to_string(), "modulo_1");
    }

    #[test]
    fn module_id_rejects_bad_input() {
        assert!(matches!(ModuleId::new(""), Err(IdError::InvalidModuleId(_))));
        assert!(matches!(ModuleId::new("two words"), Err(IdError::InvalidModuleId(_))));
        assert!(matches!(ModuleId::new("m.1"), Err(IdError::InvalidModuleId(_))));
    }

    #[test]
    fn anchor_id_allows_dots() {
        let id = AnchorId::new("port.fwd").unwrap();
        assert_eq!(id.as_str(), "port.fwd");
        assert!(AnchorId::new(" ").is_err());
    }

    #[test]
    fn parse_trims_whitespace() {
        let id: ModuleId = "  lab  ".parse().unwrap();
        assert_eq!(id.as_str(), "lab");
    }

    #[test]
    fn anchor_ref_parse() {
        let r: AnchorRef = "modulo_1.anclaje_A".parse().unwrap();
        assert_eq!(r.module.as_str(), "modulo_1");
        assert_eq!(r.anchor.as_str(), "anclaje_A");
        assert_eq!(r.to_string(), "modulo_1.anclaje_A");
    }

    #[test]
    fn anchor_ref_splits_on_first_dot() {
        let r: AnchorRef = "hab.port.fwd".parse().unwrap();
        assert_eq!(r.module.as_str(), "hab");
        assert_eq!(r.anchor.as_str(), "port.fwd");
    }

    #[test]
    fn anchor_ref_invalid() {
        assert!(matches!("modulo_1".parse::<AnchorRef>(), Err(IdError::InvalidAnchorRef(_))));
        assert!(matches!(".A".parse::<AnchorRef>(), Err(IdError::InvalidAnchorRef(_))));
        assert!(matches!("m1.".parse::<AnchorRef>(), Err(IdError::InvalidAnchorRef(_))));
    }

    #[test]
    fn serde_validates() {
        let id: ModuleId = serde_json::from_str("\"m2\"").unwrap();
        assert_eq!(id.as_str(), "m2");

        let bad: Result<ModuleId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());

        assert_eq!(serde_json::to_string(&id).unwrap(), "\"m2\"");
    }

    #[test]
    fn borrow_as_str_for_map_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(ModuleId::new("m1").unwrap(), 1);
        assert_eq!(map.get("m1"), Some(&1));
    }
}
