//! Layout graph for modules
//!
//! Nodes are registered modules; edges are declared connections running
//! from source module to target module, weighted by declaration index.
//! Uses petgraph for graph operations.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use thiserror::Error;

use super::connection::ConnectionSpec;
use super::id::ModuleId;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Module not found: {0}")]
    ModuleNotFound(ModuleId),
}

/// Module connectivity graph
#[derive(Debug, Default)]
pub struct LayoutGraph {
    /// Edge weight is the connection's declaration index
    graph: DiGraph<ModuleId, usize>,

    /// Map from ModuleId to node index
    node_map: HashMap<ModuleId, NodeIndex>,
}

impl LayoutGraph {
    /// Creates an empty layout graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Builds a graph from modules and declared connections
    ///
    /// Connections that reference an unknown module are left out.
    pub fn build<'a>(
        modules: impl IntoIterator<Item = &'a ModuleId>,
        connections: &[ConnectionSpec],
    ) -> Self {
        let mut graph = Self::new();

        for id in modules {
            graph.add_module(id.clone());
        }

        for (index, spec) in connections.iter().enumerate() {
            if let Err(e) = graph.add_connection(&spec.source_module, &spec.target_module, index) {
                log::debug!("Connection #{} left out of layout graph: {}", index, e);
            }
        }

        graph
    }

    /// Adds a module to the graph
    pub fn add_module(&mut self, id: ModuleId) {
        if !self.node_map.contains_key(&id) {
            let idx = self.graph.add_node(id.clone());
            self.node_map.insert(id, idx);
        }
    }

    /// Adds a connection edge: `source -> target`
    ///
    /// Self-connections and parallel edges are kept; each declared
    /// connection is its own edge.
    pub fn add_connection(
        &mut self,
        source: &ModuleId,
        target: &ModuleId,
        index: usize,
    ) -> Result<(), GraphError> {
        let source_idx = self.index_of(source)?;
        let target_idx = self.index_of(target)?;
        self.graph.add_edge(source_idx, target_idx, index);
        Ok(())
    }

    fn index_of(&self, id: &ModuleId) -> Result<NodeIndex, GraphError> {
        self.node_map
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::ModuleNotFound(id.clone()))
    }

    /// Modules with no incoming connection, in insertion order
    pub fn roots(&self) -> Vec<ModuleId> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .filter_map(|idx| self.graph.node_weight(idx).cloned())
            .collect()
    }

    /// Declaration indices of connections leaving a module, ascending
    pub fn outgoing(&self, id: &ModuleId) -> Vec<usize> {
        let idx = match self.node_map.get(id) {
            Some(idx) => *idx,
            None => return vec![],
        };

        let mut indices: Vec<usize> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| *edge.weight())
            .collect();
        indices.sort_unstable();
        indices
    }

    /// Returns true if the graph contains the module
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Returns the number of modules in the graph
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Returns true if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Returns the number of connection edges
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }
}
