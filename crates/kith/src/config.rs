//! Configuration types for Kith layout and rendering.
//!
//! This module provides configuration structures that control how the
//! relationship graph is laid out and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing constants and the [`SameLevelEdges`] policy.
//! - [`StyleConfig`] - Visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use kith::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().horizontal_spacing(), 180.0);
//! ```

use serde::Deserialize;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Rendering policy for edges between two nodes on the same level.
///
/// A strict top-down rendering reads better without horizontal lines inside
/// a row, so [`SameLevelEdges::Suppress`] is the default. [`SameLevelEdges::Keep`]
/// emits them like any other edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameLevelEdges {
    /// Drop edges whose endpoints share a level.
    #[default]
    Suppress,
    /// Emit same-level edges like any other.
    Keep,
}

/// Spacing constants and edge policy for the level layout.
///
/// The defaults reproduce the spacing the viewer UI was designed around:
/// rows 200 apart, nodes 180 apart, 100 of headroom above the root and 50
/// of padding on each side.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between adjacent nodes in a row.
    horizontal_spacing: f32,

    /// Vertical distance between levels.
    vertical_spacing: f32,

    /// Distance from the top of the layout space to the root row.
    top_margin: f32,

    /// Padding on each side of the widest row.
    padding: f32,

    /// Policy for edges between nodes on the same level.
    same_level_edges: SameLevelEdges,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 180.0,
            vertical_spacing: 200.0,
            top_margin: 100.0,
            padding: 50.0,
            same_level_edges: SameLevelEdges::default(),
        }
    }
}

impl LayoutConfig {
    /// Returns the horizontal distance between adjacent nodes in a row.
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Returns the vertical distance between levels.
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Returns the distance from the top of the layout space to the root row.
    pub fn top_margin(&self) -> f32 {
        self.top_margin
    }

    /// Returns the padding on each side of the widest row.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the policy for edges between nodes on the same level.
    pub fn same_level_edges(&self) -> SameLevelEdges {
        self.same_level_edges
    }
}

/// Visual styling configuration for rendered graphs.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color for the rendered graph, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the configured background color string, if any.
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}
