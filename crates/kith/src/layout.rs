//! Layout computation for the relationship graph.
//!
//! The entry point is [`LayoutEngine`], which turns an unordered people list
//! into a [`Layout`]: one positioned node per person and a deduplicated edge
//! set ready for rendering.

mod engine;
mod node;

pub use engine::LayoutEngine;
pub use node::{Edge, Layout, LayoutNode};
