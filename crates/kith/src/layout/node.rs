//! Output types of one layout pass.

use kith_core::{geometry::Point, model::Person};

/// A person with a computed position.
///
/// Borrows the person for the duration of the layout pass; the computed
/// fields are immutable once produced. `x`/`y` are the node center in
/// layout-local coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LayoutNode<'a> {
    person: &'a Person,
    position: Point,
    level: usize,
}

impl<'a> LayoutNode<'a> {
    pub(crate) fn new(person: &'a Person, position: Point, level: usize) -> Self {
        Self {
            person,
            position,
            level,
        }
    }

    /// Returns the person this node positions.
    pub fn person(&self) -> &'a Person {
        self.person
    }

    /// Returns the node center.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the x-coordinate of the node center.
    pub fn x(&self) -> f32 {
        self.position.x()
    }

    /// Returns the y-coordinate of the node center.
    pub fn y(&self) -> f32 {
        self.position.y()
    }

    /// Returns the level: hop distance from the root, or the synthetic
    /// overflow level for people unreachable from it.
    pub fn level(&self) -> usize {
        self.level
    }
}

/// An undirected edge between two positioned nodes.
///
/// Endpoints are indices into [`Layout::positions`]; `source` is always the
/// smaller index, so each semantic edge appears exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    pub(crate) fn new(source: usize, target: usize) -> Self {
        debug_assert!(source < target, "edges are emitted lower-index first");
        Self { source, target }
    }

    /// Returns the position index of the lower-indexed endpoint.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the position index of the higher-indexed endpoint.
    pub fn target(&self) -> usize {
        self.target
    }
}

/// The full result of one layout pass.
///
/// Either both sequences are fully populated, or, only for an empty people
/// list, both are empty. There is no partial state.
#[derive(Debug, Default)]
pub struct Layout<'a> {
    positions: Vec<LayoutNode<'a>>,
    edges: Vec<Edge>,
}

impl<'a> Layout<'a> {
    pub(crate) fn new(positions: Vec<LayoutNode<'a>>, edges: Vec<Edge>) -> Self {
        Self { positions, edges }
    }

    /// Returns the positioned nodes, in discovery order (levels top-down,
    /// first-discovery order within a level, overflow row last).
    pub fn positions(&self) -> &[LayoutNode<'a>] {
        &self.positions
    }

    /// Returns the deduplicated edge set.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Checks whether the layout holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
