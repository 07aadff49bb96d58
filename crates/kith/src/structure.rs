//! Graph structure built from the people list.
//!
//! The persisted document stores connections as one-directional name lists;
//! this module turns them into the explicit, symmetric adjacency structure
//! the layout traversal runs over.

mod adjacency;

pub use adjacency::Adjacency;
