//! Kith - layout and rendering for personal relationship graphs.
//!
//! A small set of people with named connections comes in; a deterministic
//! 2D layout (breadth-first levels radiating down from a chosen root) and an
//! optional SVG picture come out. The people document is plain JSON, edited
//! by hand or through the companion HTTP backend.

pub mod config;

mod error;
mod export;
mod layout;
mod structure;

pub use kith_core::{geometry, identifier, model};

pub use error::KithError;
pub use export::svg::SvgBuilder;
pub use layout::{Edge, Layout, LayoutEngine, LayoutNode};
pub use structure::Adjacency;

use log::{debug, info};

use config::AppConfig;
use model::Person;

/// Builder for loading, laying out, and rendering relationship graphs.
///
/// # Examples
///
/// ```
/// use kith::{GraphBuilder, config::AppConfig};
///
/// let source = r#"[
///     {"name": "Me", "relationship": "Self", "connections": ["Alice"]},
///     {"name": "Alice", "relationship": "Friend", "connections": []}
/// ]"#;
///
/// let builder = GraphBuilder::new(AppConfig::default());
/// let people = builder.parse(source).expect("valid document");
/// let svg = builder.render_svg(&people, None).expect("rendered");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Creates a new graph builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parses a people document (a JSON array of person objects).
    ///
    /// # Errors
    ///
    /// Returns [`KithError::Data`] when the document is not valid JSON of
    /// the expected shape. Dangling connection names are not an error; the
    /// layout treats them as inert.
    pub fn parse(&self, source: &str) -> Result<Vec<Person>, KithError> {
        let people: Vec<Person> = serde_json::from_str(source)?;
        debug!(people = people.len(); "People document parsed");
        Ok(people)
    }

    /// Computes the layout for a people list.
    ///
    /// Pure and deterministic; see [`LayoutEngine::compute`].
    pub fn layout<'a>(&self, people: &'a [Person], root: Option<&str>) -> Layout<'a> {
        LayoutEngine::with_config(self.config.layout().clone()).compute(people, root)
    }

    /// Computes the layout and renders it to an SVG string.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; the `Result` keeps the signature
    /// stable for exporters that can fail.
    pub fn render_svg(&self, people: &[Person], root: Option<&str>) -> Result<String, KithError> {
        info!(people = people.len(); "Computing layout");
        let layout = self.layout(people, root);

        let svg = SvgBuilder::new()
            .with_style(self.config.style())
            .render(&layout);

        info!(
            nodes = layout.positions().len(),
            edges = layout.edges().len();
            "SVG rendered"
        );
        Ok(svg)
    }
}
