//! Runtime gating of edit operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kinds of graph edits the controller can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GraphOperation {
    /// Create a vertex by clicking empty canvas
    AddVertex,
    /// Select a vertex by clicking it
    SelectVertex,
    /// Drag the selected vertex
    MoveVertex,
    /// Delete the selected vertex
    DeleteVertex,
    /// Connect vertices with the connect modifier held
    AddEdge,
    /// Select an edge by clicking it
    SelectEdge,
    /// Delete the selected edge
    DeleteEdge,
}

impl GraphOperation {
    /// Every operation kind, in declaration order.
    pub const ALL: [GraphOperation; 7] = [
        GraphOperation::AddVertex,
        GraphOperation::SelectVertex,
        GraphOperation::MoveVertex,
        GraphOperation::DeleteVertex,
        GraphOperation::AddEdge,
        GraphOperation::SelectEdge,
        GraphOperation::DeleteEdge,
    ];

    /// Short human-readable label, used by the desktop UI.
    pub fn label(self) -> &'static str {
        match self {
            GraphOperation::AddVertex => "Add vertex",
            GraphOperation::SelectVertex => "Select vertex",
            GraphOperation::MoveVertex => "Move vertex",
            GraphOperation::DeleteVertex => "Delete vertex",
            GraphOperation::AddEdge => "Add edge",
            GraphOperation::SelectEdge => "Select edge",
            GraphOperation::DeleteEdge => "Delete edge",
        }
    }
}

/// The set of currently enabled operations. All operations start enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationGate {
    enabled: BTreeSet<GraphOperation>,
}

impl Default for OperationGate {
    fn default() -> Self {
        Self {
            enabled: GraphOperation::ALL.into_iter().collect(),
        }
    }
}

impl OperationGate {
    /// Creates a gate with exactly the given operations enabled.
    pub fn with_enabled(operations: impl IntoIterator<Item = GraphOperation>) -> Self {
        Self {
            enabled: operations.into_iter().collect(),
        }
    }

    /// Enables one operation.
    pub fn enable(&mut self, operation: GraphOperation) {
        self.enabled.insert(operation);
    }

    /// Disables one operation.
    pub fn disable(&mut self, operation: GraphOperation) {
        self.enabled.remove(&operation);
    }

    /// Whether `operation` is currently allowed.
    pub fn is_enabled(&self, operation: GraphOperation) -> bool {
        self.enabled.contains(&operation)
    }

    /// Replaces the whole set. An empty input disables everything.
    pub fn set_enabled(&mut self, operations: impl IntoIterator<Item = GraphOperation>) {
        self.enabled = operations.into_iter().collect();
    }

    /// The enabled operations in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = GraphOperation> + '_ {
        self.enabled.iter().copied()
    }
}
