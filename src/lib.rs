//! habitat-dock - Anchor-based docking for modular habitat layouts
//!
//! Modules expose anchors (position, outward direction, up vector). Two
//! anchors mate when their directions are opposite; the connection kernel
//! computes the translation and yaw correction that bring the target module
//! onto the source, and a registry resolves a whole layout of declared
//! connections into module placements.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{
    Anchor, AnchorId, ConnectionRegistry, ConnectionResult, ConnectionSpec, Connector, Module,
    ModuleId, Placement, Vec3,
};
