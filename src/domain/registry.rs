//! Connection registry
//!
//! Session state for building a layout: a table of registered modules and
//! an ordered list of declared connections. Resolution walks the declared
//! connections and turns them into module placements.
//!
//! Resolution never aborts. A connection that references an unknown module
//! or anchor, or whose anchors cannot be mated, is skipped and reported as a
//! [`Diagnostic`]; the remaining connections are still processed.
//!
//! One registry per layout session. It is not meant to be shared between
//! threads without external synchronization.

use std::collections::{BTreeMap, HashMap, VecDeque};

use serde::Serialize;
use thiserror::Error;

use super::algorithm::Connector;
use super::anchor::Anchor;
use super::connection::{ConnectionSpec, Placement};
use super::graph::LayoutGraph;
use super::id::ModuleId;
use super::module::{Module, ModuleError};

/// Why a declared connection did not produce a placement
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Issue {
    #[error("unknown module '{module}'")]
    UnknownModule { module: ModuleId },

    #[error("unknown anchor '{anchor}'")]
    UnknownAnchor { anchor: String },

    #[error("{reason}")]
    Incompatible { reason: String },

    #[error("module '{module}' is already placed")]
    AlreadyPlaced { module: ModuleId },

    #[error("not reachable from any root module")]
    Unreachable,
}

/// A skipped connection, tagged with its declaration index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Position of the connection in declaration order
    pub index: usize,

    /// Display name of the connection
    pub connection: String,

    #[serde(flatten)]
    pub issue: Issue,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}: {}", self.index, self.connection, self.issue)
    }
}

/// Outcome of resolving every declared connection
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Resolution {
    pub placements: BTreeMap<ModuleId, Placement>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// How declared connections become placements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolveStrategy {
    /// Each target is placed relative to an unplaced origin, in declaration
    /// order; the last connection to a target wins
    #[default]
    SingleHop,

    /// Breadth-first from the root modules, accumulating each source
    /// module's placement into its targets
    Chained { root: Option<ModuleId> },
}

/// Registry of modules and declared connections for one layout session
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    modules: HashMap<ModuleId, Module>,

    /// Module ids in first-registration order
    order: Vec<ModuleId>,

    connections: Vec<ConnectionSpec>,

    connector: Connector,
}

impl ConnectionRegistry {
    /// Creates an empty registry with the default connector
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with a configured connector
    pub fn with_connector(connector: Connector) -> Self {
        Self {
            connector,
            ..Self::default()
        }
    }

    /// Registers a module, wholly replacing any module with the same id
    ///
    /// Fails, leaving the registry unchanged, if the anchors contain a
    /// duplicate id or a malformed anchor.
    pub fn register_module(&mut self, id: ModuleId, anchors: Vec<Anchor>) -> Result<(), ModuleError> {
        let module = Module::new(id, anchors)?;
        self.register(module);
        Ok(())
    }

    /// Registers a prebuilt module, wholly replacing any with the same id
    pub fn register(&mut self, module: Module) {
        log::debug!(
            "Registered module {} with {} anchors",
            module.id,
            module.len()
        );

        if !self.modules.contains_key(&module.id) {
            self.order.push(module.id.clone());
        }
        self.modules.insert(module.id.clone(), module);
    }

    /// Appends a connection; references are checked at resolution time
    pub fn declare_connection(&mut self, spec: ConnectionSpec) {
        log::debug!(
            "Declared connection: {} -> {}",
            spec.source(),
            spec.target()
        );
        self.connections.push(spec);
    }

    /// Clears all modules and declared connections
    pub fn reset(&mut self) {
        self.modules.clear();
        self.order.clear();
        self.connections.clear();
        log::debug!("Registry reset");
    }

    /// Resolves every declared connection single-hop and returns placements
    pub fn resolve_all(&self) -> BTreeMap<ModuleId, Placement> {
        self.resolve().placements
    }

    /// Single-hop resolution with diagnostics
    pub fn resolve(&self) -> Resolution {
        self.resolve_with(&ResolveStrategy::SingleHop)
    }

    /// Resolution under an explicit strategy
    pub fn resolve_with(&self, strategy: &ResolveStrategy) -> Resolution {
        log::debug!(
            "Resolving {} connections across {} modules ({:?}, {})",
            self.connections.len(),
            self.modules.len(),
            strategy,
            self.connector.alignment().name()
        );

        let resolution = match strategy {
            ResolveStrategy::SingleHop => self.resolve_single_hop(),
            ResolveStrategy::Chained { root } => self.resolve_chained(root.as_ref()),
        };

        for diagnostic in &resolution.diagnostics {
            log::warn!("Skipped connection {}", diagnostic);
        }

        resolution
    }

    fn resolve_single_hop(&self) -> Resolution {
        let mut resolution = Resolution::default();

        for (index, spec) in self.connections.iter().enumerate() {
            match self.mate(spec) {
                Ok(placement) => {
                    log::debug!(
                        "Placed {} at {:.2} via {}",
                        spec.target_module,
                        placement.position,
                        spec.display_name()
                    );
                    resolution
                        .placements
                        .insert(spec.target_module.clone(), placement);
                }
                Err(issue) => resolution.diagnostics.push(diagnostic(index, spec, issue)),
            }
        }

        resolution
    }

    fn resolve_chained(&self, root: Option<&ModuleId>) -> Resolution {
        let graph = LayoutGraph::build(&self.order, &self.connections);
        log::debug!(
            "Layout graph: {} modules, {} of {} connections between known modules",
            graph.len(),
            graph.connection_count(),
            self.connections.len()
        );
        let mut resolution = Resolution::default();
        let mut handled = vec![false; self.connections.len()];

        let roots = match root {
            Some(root) if graph.contains(root) => vec![root.clone()],
            Some(root) => {
                log::warn!("Root module {} is not registered", root);
                vec![]
            }
            None => {
                let roots = graph.roots();
                if roots.is_empty() {
                    // Every module has an incoming connection: break the cycle
                    // at the first registered module
                    self.order.first().cloned().into_iter().collect()
                } else {
                    roots
                }
            }
        };

        let mut queue = VecDeque::new();
        for root in roots {
            resolution.placements.insert(root.clone(), Placement::ORIGIN);
            queue.push_back(root);
        }

        while let Some(module) = queue.pop_front() {
            let base = resolution.placements[&module];

            for index in graph.outgoing(&module) {
                handled[index] = true;
                let spec = &self.connections[index];

                if resolution.placements.contains_key(&spec.target_module) {
                    let issue = Issue::AlreadyPlaced {
                        module: spec.target_module.clone(),
                    };
                    resolution.diagnostics.push(diagnostic(index, spec, issue));
                    continue;
                }

                match self.mate_from(spec, base) {
                    Ok(placement) => {
                        log::debug!(
                            "Placed {} at {:.2} via {}",
                            spec.target_module,
                            placement.position,
                            spec.display_name()
                        );
                        resolution
                            .placements
                            .insert(spec.target_module.clone(), placement);
                        queue.push_back(spec.target_module.clone());
                    }
                    Err(issue) => resolution.diagnostics.push(diagnostic(index, spec, issue)),
                }
            }
        }

        for (index, spec) in self.connections.iter().enumerate() {
            if handled[index] {
                continue;
            }
            let issue = match self.unknown_module(spec) {
                Some(issue) => issue,
                None => Issue::Unreachable,
            };
            resolution.diagnostics.push(diagnostic(index, spec, issue));
        }

        resolution.diagnostics.sort_by_key(|d| d.index);
        resolution
    }

    /// Places the target of `spec` relative to the unplaced origin
    fn mate(&self, spec: &ConnectionSpec) -> Result<Placement, Issue> {
        self.mate_from(spec, Placement::ORIGIN)
    }

    /// Places the target of `spec` relative to `base`
    fn mate_from(&self, spec: &ConnectionSpec, base: Placement) -> Result<Placement, Issue> {
        let (source, target) = self.lookup(spec)?;
        let result = self.connector.connect(source, target);

        if !result.compatible {
            return Err(Issue::Incompatible {
                reason: result.error.unwrap_or_default(),
            });
        }

        Ok(self
            .connector
            .apply_connection(base.position, base.rotation, &result))
    }

    /// Finds both anchors of a connection
    pub fn lookup(&self, spec: &ConnectionSpec) -> Result<(&Anchor, &Anchor), Issue> {
        if let Some(issue) = self.unknown_module(spec) {
            return Err(issue);
        }

        let source = self.modules[&spec.source_module]
            .anchor(spec.source_anchor.as_str())
            .ok_or_else(|| Issue::UnknownAnchor {
                anchor: spec.source().to_string(),
            })?;

        let target = self.modules[&spec.target_module]
            .anchor(spec.target_anchor.as_str())
            .ok_or_else(|| Issue::UnknownAnchor {
                anchor: spec.target().to_string(),
            })?;

        Ok((source, target))
    }

    fn unknown_module(&self, spec: &ConnectionSpec) -> Option<Issue> {
        [&spec.source_module, &spec.target_module]
            .into_iter()
            .find(|id| !self.modules.contains_key(*id))
            .map(|id| Issue::UnknownModule { module: id.clone() })
    }

    /// Returns a registered module
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.get(id)
    }

    /// Registered modules in first-registration order
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.order.iter().filter_map(|id| self.modules.get(id))
    }

    /// Declared connections in declaration order
    pub fn connections(&self) -> &[ConnectionSpec] {
        &self.connections
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.connections.is_empty()
    }
}

fn diagnostic(index: usize, spec: &ConnectionSpec, issue: Issue) -> Diagnostic {
    Diagnostic {
        index,
        connection: spec.display_name(),
        issue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::algorithm::DirectionMatch;
    use crate::domain::id::AnchorId;
    use crate::domain::vector::Vec3;
    use approx::assert_relative_eq;

    fn mid(id: &str) -> ModuleId {
        ModuleId::new(id).unwrap()
    }

    fn anchor(id: &str, position: [f64; 3], direction: [f64; 3], up: [f64; 3]) -> Anchor {
        Anchor::new(AnchorId::new(id).unwrap(), position.into(), direction.into())
            .with_up(up.into())
            .with_radius(0.2)
    }

    fn spec(source: &str, target: &str) -> ConnectionSpec {
        ConnectionSpec::new(source.parse().unwrap(), target.parse().unwrap())
    }

    /// m1 holds A (floor) and C (east wall); m2 holds B (ceiling) and D (west wall)
    fn two_module_registry() -> ConnectionRegistry {
        let mut registry = ConnectionRegistry::new();
        registry
            .register_module(
                mid("m1"),
                vec![
                    anchor("A", [0.0, -2.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]),
                    anchor("C", [2.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
                ],
            )
            .unwrap();
        registry
            .register_module(
                mid("m2"),
                vec![
                    anchor("B", [0.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
                    anchor("D", [-2.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
                ],
            )
            .unwrap();
        registry
    }

    #[test]
    fn scenario_c_single_connection() {
        let mut registry = two_module_registry();
        registry.declare_connection(spec("m1.A", "m2.B"));

        let placements = registry.resolve_all();

        assert_eq!(placements.len(), 1);
        assert_eq!(
            placements[&mid("m2")],
            Placement::new(Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO)
        );
    }

    #[test]
    fn scenario_d_last_write_wins() {
        let mut registry = two_module_registry();
        registry.declare_connection(spec("m1.A", "m2.B"));
        registry.declare_connection(spec("m1.C", "m2.D"));

        let resolution = registry.resolve();
        assert!(resolution.is_clean());

        // The second connection, C-D, decides m2's placement
        let placed = resolution.placements[&mid("m2")];
        assert_eq!(placed.position, Vec3::new(-4.0, 0.0, 0.0));
        assert_relative_eq!(placed.rotation.y, 90.0);
        assert_eq!(placed.rotation.x, 0.0);
        assert_eq!(placed.rotation.z, 0.0);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut registry = two_module_registry();
        registry.declare_connection(spec("m1.A", "m2.B"));
        registry.declare_connection(spec("m1.C", "m9.X"));

        let first = registry.resolve();
        let second = registry.resolve();
        assert_eq!(first, second);
        assert_eq!(registry.resolve_all(), registry.resolve_all());
    }

    #[test]
    fn unknown_module_is_skipped() {
        let mut registry = two_module_registry();
        registry.declare_connection(spec("m1.A", "ghost.B"));
        registry.declare_connection(spec("m1.A", "m2.B"));

        let resolution = registry.resolve();

        assert_eq!(resolution.placements.len(), 1);
        assert!(resolution.placements.contains_key("m2"));
        assert_eq!(resolution.diagnostics.len(), 1);
        assert_eq!(resolution.diagnostics[0].index, 0);
        assert_eq!(
            resolution.diagnostics[0].issue,
            Issue::UnknownModule { module: mid("ghost") }
        );
    }

    #[test]
    fn unknown_source_module_reported_first() {
        let mut registry = ConnectionRegistry::new();
        registry.declare_connection(spec("a.X", "b.Y"));

        let resolution = registry.resolve();
        assert_eq!(
            resolution.diagnostics[0].issue,
            Issue::UnknownModule { module: mid("a") }
        );
    }

    #[test]
    fn unknown_anchor_is_skipped() {
        let mut registry = two_module_registry();
        registry.declare_connection(spec("m1.Q", "m2.B"));
        registry.declare_connection(spec("m1.A", "m2.Q"));

        let resolution = registry.resolve();

        assert!(resolution.placements.is_empty());
        assert_eq!(
            resolution.diagnostics[0].issue,
            Issue::UnknownAnchor { anchor: "m1.Q".to_string() }
        );
        assert_eq!(
            resolution.diagnostics[1].issue,
            Issue::UnknownAnchor { anchor: "m2.Q".to_string() }
        );
    }

    #[test]
    fn incompatible_pair_is_skipped_and_keeps_earlier_result() {
        let mut registry = two_module_registry();
        registry.declare_connection(spec("m1.A", "m2.B"));
        // A faces down, D faces west: not antiparallel
        registry.declare_connection(spec("m1.A", "m2.D"));

        let resolution = registry.resolve();

        assert_eq!(resolution.placements[&mid("m2")].position, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(resolution.diagnostics.len(), 1);
        assert!(matches!(resolution.diagnostics[0].issue, Issue::Incompatible { .. }));
        assert_eq!(resolution.diagnostics[0].connection, "A ↔ D");
    }

    #[test]
    fn declarations_may_precede_registration() {
        let mut registry = ConnectionRegistry::new();
        registry.declare_connection(spec("m1.A", "m2.B").with_label("A-B"));

        assert!(registry.resolve_all().is_empty());

        registry
            .register_module(mid("m1"), vec![anchor("A", [0.0, -2.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0])])
            .unwrap();
        registry
            .register_module(mid("m2"), vec![anchor("B", [0.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])])
            .unwrap();

        assert_eq!(registry.resolve_all()[&mid("m2")].position, Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn reregister_replaces_anchors_wholly() {
        let mut registry = two_module_registry();
        registry
            .register_module(mid("m2"), vec![anchor("Z", [0.0; 3], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])])
            .unwrap();

        let m2 = registry.module("m2").unwrap();
        assert_eq!(m2.len(), 1);
        assert!(m2.anchor("B").is_none());
        assert!(m2.anchor("Z").is_some());

        // Order is kept from the first registration
        let ids: Vec<_> = registry.modules().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn duplicate_anchor_leaves_registry_unchanged() {
        let mut registry = two_module_registry();
        let result = registry.register_module(
            mid("m2"),
            vec![
                anchor("X", [0.0; 3], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
                anchor("X", [0.0; 3], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
            ],
        );

        assert!(matches!(result, Err(ModuleError::DuplicateAnchor { .. })));
        assert!(registry.module("m2").unwrap().anchor("B").is_some());
    }

    #[test]
    fn reset_clears_everything() {
        let mut registry = two_module_registry();
        registry.declare_connection(spec("m1.A", "m2.B"));
        assert!(!registry.is_empty());

        registry.reset();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.connections().is_empty());
        assert!(registry.resolve_all().is_empty());
    }

    #[test]
    fn tolerant_connector_resolves_drifted_directions() {
        let build = |connector| {
            let mut registry = ConnectionRegistry::with_connector(connector);
            registry
                .register_module(mid("m1"), vec![anchor("A", [0.0; 3], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0])])
                .unwrap();
            registry
                .register_module(mid("m2"), vec![anchor("B", [0.0, 1.0, 0.0], [1e-9, 1.0, 0.0], [0.0, 0.0, 1.0])])
                .unwrap();
            registry.declare_connection(spec("m1.A", "m2.B"));
            registry
        };

        assert!(build(Connector::new()).resolve_all().is_empty());

        let tolerant = Connector::new().with_direction_match(DirectionMatch::from_epsilon(1e-9));
        assert_eq!(build(tolerant).resolve_all().len(), 1);
    }

    /// m1 -> m2 -> m3, each stacked 4 units above the previous
    fn tower() -> ConnectionRegistry {
        let mut registry = ConnectionRegistry::new();
        for id in ["m1", "m2", "m3"] {
            registry
                .register_module(
                    mid(id),
                    vec![
                        anchor("top", [0.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
                        anchor("bottom", [0.0, -2.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]),
                    ],
                )
                .unwrap();
        }
        registry.declare_connection(spec("m1.bottom", "m2.top"));
        registry.declare_connection(spec("m2.bottom", "m3.top"));
        registry
    }

    #[test]
    fn single_hop_does_not_chain() {
        let placements = tower().resolve_all();

        assert!(!placements.contains_key("m1"));
        assert_eq!(placements[&mid("m2")].position, Vec3::new(0.0, 4.0, 0.0));
        // Relative to the origin, not to m2
        assert_eq!(placements[&mid("m3")].position, Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn chained_accumulates_positions() {
        let resolution = tower().resolve_with(&ResolveStrategy::Chained { root: None });

        assert!(resolution.is_clean());
        assert_eq!(resolution.placements[&mid("m1")], Placement::ORIGIN);
        assert_eq!(resolution.placements[&mid("m2")].position, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(resolution.placements[&mid("m3")].position, Vec3::new(0.0, 8.0, 0.0));
    }

    #[test]
    fn chained_with_explicit_root() {
        let resolution = tower().resolve_with(&ResolveStrategy::Chained { root: Some(mid("m2")) });

        assert!(!resolution.placements.contains_key("m1"));
        assert_eq!(resolution.placements[&mid("m2")], Placement::ORIGIN);
        assert_eq!(resolution.placements[&mid("m3")].position, Vec3::new(0.0, 4.0, 0.0));

        assert_eq!(resolution.diagnostics.len(), 1);
        assert_eq!(resolution.diagnostics[0].index, 0);
        assert_eq!(resolution.diagnostics[0].issue, Issue::Unreachable);
    }

    #[test]
    fn chained_with_unknown_root_places_nothing() {
        let resolution = tower().resolve_with(&ResolveStrategy::Chained { root: Some(mid("nope")) });

        assert!(resolution.placements.is_empty());
        assert_eq!(resolution.diagnostics.len(), 2);
        assert!(resolution.diagnostics.iter().all(|d| d.issue == Issue::Unreachable));
    }

    #[test]
    fn chained_reports_cycle_as_already_placed() {
        let mut registry = tower();
        registry.declare_connection(spec("m3.bottom", "m1.top"));

        // Every module now has an incoming connection: m1 becomes the root
        let resolution = registry.resolve_with(&ResolveStrategy::Chained { root: None });

        assert_eq!(resolution.placements.len(), 3);
        assert_eq!(resolution.placements[&mid("m1")], Placement::ORIGIN);
        assert_eq!(resolution.diagnostics.len(), 1);
        assert_eq!(resolution.diagnostics[0].index, 2);
        assert_eq!(
            resolution.diagnostics[0].issue,
            Issue::AlreadyPlaced { module: mid("m1") }
        );
    }

    #[test]
    fn chained_reports_unknown_modules() {
        let mut registry = tower();
        registry.declare_connection(spec("m3.bottom", "ghost.top"));

        let resolution = registry.resolve_with(&ResolveStrategy::Chained { root: None });

        assert_eq!(resolution.placements.len(), 3);
        assert_eq!(
            resolution.diagnostics[0].issue,
            Issue::UnknownModule { module: mid("ghost") }
        );
    }

    #[test]
    fn chained_accumulates_yaw() {
        let mut registry = ConnectionRegistry::new();
        registry
            .register_module(mid("hub"), vec![anchor("east", [2.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])])
            .unwrap();
        registry
            .register_module(
                mid("lab"),
                vec![
                    anchor("west", [-2.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
                    anchor("east", [2.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
                ],
            )
            .unwrap();
        registry
            .register_module(mid("store"), vec![anchor("west", [-2.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0])])
            .unwrap();
        registry.declare_connection(spec("hub.east", "lab.west"));
        registry.declare_connection(spec("lab.east", "store.west"));

        let resolution = registry.resolve_with(&ResolveStrategy::Chained { root: None });

        let store = resolution.placements[&mid("store")];
        assert_eq!(store.position, Vec3::new(-8.0, 0.0, 0.0));
        assert_relative_eq!(store.rotation.y, 180.0);
    }

    #[test]
    fn diagnostics_display() {
        let mut registry = ConnectionRegistry::new();
        registry.declare_connection(spec("a.X", "b.Y").with_label("hatch"));

        let resolution = registry.resolve();
        assert_eq!(
            resolution.diagnostics[0].to_string(),
            "#0 hatch: unknown module 'a'"
        );
    }

    #[test]
    fn diagnostics_serialize_with_kind_tag() {
        let mut registry = ConnectionRegistry::new();
        registry.declare_connection(spec("a.X", "b.Y"));

        let json = serde_json::to_value(registry.resolve()).unwrap();
        assert_eq!(json["diagnostics"][0]["kind"], "unknown_module");
        assert_eq!(json["diagnostics"][0]["module"], "a");
        assert_eq!(json["diagnostics"][0]["index"], 0);
    }
}
