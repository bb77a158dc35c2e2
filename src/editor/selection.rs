//! Single-element selection with observer notification.
//!
//! At most one element is selected, and it is either a vertex or an edge,
//! never both. Selecting one kind always clears the other kind first.
//!
//! Observers are called synchronously from inside the mutating method. They
//! receive ids only and no access to the editor, so they cannot re-enter it.

use crate::types::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// What is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    None,
    /// A single vertex
    Vertex(VertexId),
    /// A single edge
    Edge(EdgeId),
}

impl Selection {
    /// The selected vertex, if the selection is a vertex.
    pub fn vertex(&self) -> Option<VertexId> {
        match self {
            Selection::Vertex(id) => Some(*id),
            _ => None,
        }
    }

    /// The selected edge, if the selection is an edge.
    pub fn edge(&self) -> Option<EdgeId> {
        match self {
            Selection::Edge(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether nothing is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

/// Receives selection change notifications.
pub trait SelectionObserver {
    /// The vertex selection changed; `None` means no vertex is selected any more.
    fn vertex_selected(&mut self, vertex: Option<VertexId>);

    /// The edge selection changed; `None` means no edge is selected any more.
    fn edge_selected(&mut self, edge: Option<EdgeId>);
}

impl<T: SelectionObserver> SelectionObserver for Rc<RefCell<T>> {
    fn vertex_selected(&mut self, vertex: Option<VertexId>) {
        self.borrow_mut().vertex_selected(vertex);
    }

    fn edge_selected(&mut self, edge: Option<EdgeId>) {
        self.borrow_mut().edge_selected(edge);
    }
}

/// Which callback fires when a vertex selection is dropped by
/// [`SelectionState::deselect_vertex`] or as a side effect of selecting an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClearNotification {
    /// Fire `edge_selected(None)`, matching the established listener contract
    /// that existing property panels rely on.
    #[default]
    Legacy,
    /// Fire `vertex_selected(None)`.
    PerKind,
}

/// Handle returned by [`SelectionState::add_observer`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Holds the selection and the observers interested in it.
#[derive(Default)]
pub struct SelectionState {
    selection: Selection,
    observers: Vec<(ObserverId, Box<dyn SelectionObserver>)>,
    next_observer: u64,
    clear_notification: ClearNotification,
}

impl std::fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionState")
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .field("clear_notification", &self.clear_notification)
            .finish()
    }
}

impl SelectionState {
    /// Creates an empty selection using the given clear-notification policy.
    pub fn new(clear_notification: ClearNotification) -> Self {
        Self {
            clear_notification,
            ..Default::default()
        }
    }

    /// The current selection.
    pub fn current(&self) -> Selection {
        self.selection
    }

    /// The selected vertex, if any.
    pub fn vertex(&self) -> Option<VertexId> {
        self.selection.vertex()
    }

    /// The selected edge, if any.
    pub fn edge(&self) -> Option<EdgeId> {
        self.selection.edge()
    }

    /// Registers an observer and returns a handle for removing it.
    pub fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregisters an observer. Returns `false` if the handle was unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Selects a vertex, or with `None` drops the vertex selection.
    ///
    /// Any edge selection is cleared first, with its own notification. The
    /// vertex notification fires only if the selected vertex actually changes.
    /// Returns whether the overall selection changed.
    pub fn select_vertex(&mut self, vertex: Option<VertexId>) -> bool {
        let before = self.selection;
        self.deselect_edge();

        if vertex != self.selection.vertex() {
            self.selection = vertex.map_or(Selection::None, Selection::Vertex);
            self.notify_vertex(vertex);
        }
        self.selection != before
    }

    /// Selects an edge, or with `None` drops the edge selection.
    ///
    /// Any vertex selection is cleared first. Returns whether the overall
    /// selection changed.
    pub fn select_edge(&mut self, edge: Option<EdgeId>) -> bool {
        let before = self.selection;
        self.deselect_vertex();

        if edge != self.selection.edge() {
            self.selection = edge.map_or(Selection::None, Selection::Edge);
            self.notify_edge(edge);
        }
        self.selection != before
    }

    /// Drops a vertex selection, notifying per the clear-notification policy.
    pub fn deselect_vertex(&mut self) -> bool {
        if self.selection.vertex().is_none() {
            return false;
        }
        self.selection = Selection::None;
        match self.clear_notification {
            ClearNotification::Legacy => self.notify_edge(None),
            ClearNotification::PerKind => self.notify_vertex(None),
        }
        true
    }

    /// Drops an edge selection, notifying edge observers with `None`.
    pub fn deselect_edge(&mut self) -> bool {
        if self.selection.edge().is_none() {
            return false;
        }
        self.selection = Selection::None;
        self.notify_edge(None);
        true
    }

    /// Clears whatever is selected.
    ///
    /// Behaves like `select_vertex(None)`: an edge is dropped with an edge
    /// notification, a vertex with a vertex notification.
    pub fn clear(&mut self) -> bool {
        self.select_vertex(None)
    }

    fn notify_vertex(&mut self, vertex: Option<VertexId>) {
        for (_, observer) in &mut self.observers {
            observer.vertex_selected(vertex);
        }
    }

    fn notify_edge(&mut self, edge: Option<EdgeId>) {
        for (_, observer) in &mut self.observers {
            observer.edge_selected(edge);
        }
    }
}
