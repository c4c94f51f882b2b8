//! Domain models for habitat docking
//!
//! Contains the anchor model, the connection algorithm and the registry,
//! without any I/O concerns.

mod vector;
mod id;
mod anchor;
mod module;
mod connection;
mod alignment;
mod algorithm;
mod graph;
mod registry;

pub use vector::{Vec3, UNIT_TOLERANCE};
pub use id::{AnchorId, AnchorRef, IdError, ModuleId};
pub use anchor::{Anchor, AnchorError, AnchorKind};
pub use module::{Module, ModuleError};
pub use connection::{ConnectionResult, ConnectionSpec, Placement};
pub use alignment::{up_angle_degrees, Alignment, YawOnly};
pub use algorithm::{
    apply_connection, check_compatible, compute_rotation, compute_translation, connect,
    Connector, DirectionMatch,
};
pub use graph::{GraphError, LayoutGraph};
pub use registry::{ConnectionRegistry, Diagnostic, Issue, Resolution, ResolveStrategy};
