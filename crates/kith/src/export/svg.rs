//! SVG rendering for relationship graph layouts.
//!
//! Draws exactly what the layout pass produced: one line per edge, one
//! circle with an initial (or name label) per node. Edge policy is already
//! applied by the engine; the renderer stays dumb.

use log::debug;
use svg::{
    Document,
    node::element::{Circle, Line, Rectangle, Text},
};

use kith_core::model::{Person, RelationshipCategory};

use crate::{
    config::StyleConfig,
    layout::{Layout, LayoutNode},
};

/// Radius of a node circle.
const NODE_RADIUS: f32 = 40.0;

/// Extra space kept around the outermost node centers.
const CANVAS_MARGIN: f32 = 100.0;

/// Node fill color per relationship category.
fn fill_color(category: RelationshipCategory) -> &'static str {
    match category {
        RelationshipCategory::Family => "#f093fb",
        RelationshipCategory::Friend => "#4facfe",
        RelationshipCategory::Work => "#43e97b",
        RelationshipCategory::School => "#fa709a",
        RelationshipCategory::Myself | RelationshipCategory::Unset => "#667eea",
    }
}

/// Edge stroke color; family-to-family links get their own color.
fn edge_color(a: &Person, b: &Person) -> &'static str {
    if a.relationship == RelationshipCategory::Family
        && b.relationship == RelationshipCategory::Family
    {
        "#f5576c"
    } else {
        "#4facfe"
    }
}

/// Builder for rendering a [`Layout`] to an SVG string.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    background_color: Option<String>,
}

impl SvgBuilder {
    /// Creates a builder with no background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies style configuration to the builder.
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.background_color = style.background_color().map(str::to_string);
        self
    }

    /// Renders the layout to an SVG document string.
    ///
    /// An empty layout yields a valid empty document.
    pub fn render(&self, layout: &Layout<'_>) -> String {
        let (width, height) = canvas_size(layout);
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height);

        if let Some(color) = &self.background_color {
            document = document.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", color.as_str()),
            );
        }

        // Edges below, nodes on top.
        for edge in layout.edges() {
            let source = &layout.positions()[edge.source()];
            let target = &layout.positions()[edge.target()];
            document = document.add(
                Line::new()
                    .set("x1", source.x())
                    .set("y1", source.y())
                    .set("x2", target.x())
                    .set("y2", target.y())
                    .set("stroke", edge_color(source.person(), target.person()))
                    .set("stroke-width", 2),
            );
        }

        for node in layout.positions() {
            document = render_node(document, node);
        }

        debug!(
            nodes = layout.positions().len(),
            edges = layout.edges().len();
            "SVG rendered"
        );

        document.to_string()
    }
}

/// Renders one node: a filled circle, the initial inside it, the name below.
fn render_node(document: Document, node: &LayoutNode<'_>) -> Document {
    let person = node.person();
    let initial = person
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    document
        .add(
            Circle::new()
                .set("cx", node.x())
                .set("cy", node.y())
                .set("r", NODE_RADIUS)
                .set("fill", fill_color(person.relationship)),
        )
        .add(
            Text::new(initial)
                .set("x", node.x())
                .set("y", node.y())
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("fill", "#ffffff")
                .set("font-size", 28),
        )
        .add(
            Text::new(person.name.clone())
                .set("x", node.x())
                .set("y", node.y() + NODE_RADIUS + 20.0)
                .set("text-anchor", "middle")
                .set("font-size", 14),
        )
}

/// Canvas large enough for every node center plus a margin.
fn canvas_size(layout: &Layout<'_>) -> (f32, f32) {
    let max_x = layout
        .positions()
        .iter()
        .map(LayoutNode::x)
        .fold(0.0, f32::max);
    let max_y = layout
        .positions()
        .iter()
        .map(LayoutNode::y)
        .fold(0.0, f32::max);
    (max_x + CANVAS_MARGIN, max_y + CANVAS_MARGIN)
}
