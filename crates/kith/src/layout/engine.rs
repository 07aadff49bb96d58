//! Breadth-first level layout engine.
//!
//! This module implements the deterministic graph-to-2D layout: level
//! assignment by breadth-first traversal from a root person over the
//! symmetrized adjacency structure, centered per-level horizontal placement,
//! a trailing overflow row for people unreachable from the root, and
//! derivation of a deduplicated edge set.

use indexmap::IndexMap;
use log::debug;

use kith_core::{geometry::Point, identifier::Id, model::Person};

use crate::{
    config::{LayoutConfig, SameLevelEdges},
    layout::node::{Edge, Layout, LayoutNode},
    structure::Adjacency,
};

/// Deterministic level layout engine.
///
/// A pure, synchronous computation: [`compute`](LayoutEngine::compute)
/// performs no I/O, holds no state between calls, and yields bit-identical
/// output for identical input. It is safe to re-run on every data reload or
/// viewport resize.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine with the default spacing and edge policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given layout configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Computes positions and edges for a people list.
    ///
    /// `root` selects the traversal origin; it defaults to the first person
    /// and falls back to the first person when it matches nobody. An empty
    /// list yields an empty layout. Connection names with no matching person
    /// are inert: they produce no node and no edge.
    ///
    /// Duplicate names are not rejected; the first occurrence in the list
    /// defines the node and later occurrences are ignored.
    pub fn compute<'a>(&self, people: &'a [Person], root: Option<&str>) -> Layout<'a> {
        if people.is_empty() {
            return Layout::default();
        }

        // First occurrence wins for node identity.
        let mut by_id: IndexMap<Id, &'a Person> = IndexMap::new();
        for person in people {
            by_id.entry(person.id()).or_insert(person);
        }

        let adjacency = Adjacency::from_people(people);
        let root_id = resolve_root(&by_id, people, root);

        let (levels, level_of) = assign_levels(&adjacency, &by_id, root_id);
        let overflow: Vec<Id> = by_id
            .keys()
            .filter(|id| !level_of.contains_key(*id))
            .copied()
            .collect();

        debug!(
            people = people.len(),
            levels = levels.len(),
            overflow = overflow.len();
            "Assigned levels"
        );

        let (positions, position_of) = self.place(&by_id, &levels, &overflow);
        let edges = self.derive_edges(&adjacency, &positions, &position_of);

        Layout::new(positions, edges)
    }

    /// Places every leveled row and the overflow row.
    ///
    /// All rows share a vertical center axis derived from the widest regular
    /// level, so no level is biased left or right relative to the others.
    fn place<'a>(
        &self,
        by_id: &IndexMap<Id, &'a Person>,
        levels: &[Vec<Id>],
        overflow: &[Id],
    ) -> (Vec<LayoutNode<'a>>, IndexMap<Id, usize>) {
        let spacing = self.config.horizontal_spacing();

        let max_width = levels
            .iter()
            .map(|row| row_width(row.len(), spacing))
            .fold(0.0, f32::max);
        let base_x = self.config.padding() + max_width / 2.0;

        let mut positions = Vec::new();
        let mut position_of = IndexMap::new();

        for (level, row) in levels.iter().enumerate() {
            self.place_row(by_id, row, level, base_x, &mut positions, &mut position_of);
        }

        if !overflow.is_empty() {
            // One synthetic row below the deepest regular level.
            self.place_row(
                by_id,
                overflow,
                levels.len(),
                base_x,
                &mut positions,
                &mut position_of,
            );
        }

        (positions, position_of)
    }

    /// Places a single row: evenly spaced, centered on the shared axis.
    fn place_row<'a>(
        &self,
        by_id: &IndexMap<Id, &'a Person>,
        row: &[Id],
        level: usize,
        base_x: f32,
        positions: &mut Vec<LayoutNode<'a>>,
        position_of: &mut IndexMap<Id, usize>,
    ) {
        let spacing = self.config.horizontal_spacing();
        let start_x = base_x - row_width(row.len(), spacing) / 2.0;
        let y = self.config.top_margin() + level as f32 * self.config.vertical_spacing();

        for (index, id) in row.iter().enumerate() {
            let person = by_id[id];
            let point = Point::new(start_x + index as f32 * spacing, y);
            position_of.insert(*id, positions.len());
            positions.push(LayoutNode::new(person, point, level));
        }
    }

    /// Emits each semantic edge exactly once.
    ///
    /// An edge is emitted from the lower position index to the higher one,
    /// so redundant mutual listings collapse and self-connections vanish.
    /// Neighbors without a position (dangling names) are skipped. Same-level
    /// edges are dropped under [`SameLevelEdges::Suppress`].
    fn derive_edges(
        &self,
        adjacency: &Adjacency,
        positions: &[LayoutNode<'_>],
        position_of: &IndexMap<Id, usize>,
    ) -> Vec<Edge> {
        let mut edges = Vec::new();

        for (source, node) in positions.iter().enumerate() {
            for neighbor in adjacency.neighbors(node.person().id()) {
                let Some(&target) = position_of.get(&neighbor) else {
                    continue;
                };
                if target <= source {
                    continue;
                }
                if self.config.same_level_edges() == SameLevelEdges::Suppress
                    && positions[target].level() == node.level()
                {
                    continue;
                }
                edges.push(Edge::new(source, target));
            }
        }

        edges
    }
}

/// Resolves the traversal origin.
///
/// Falls back to the first person when no root is given or when the given
/// name matches nobody. Not a failure: the data is hand-edited and must
/// never hard-fail the view.
fn resolve_root(by_id: &IndexMap<Id, &Person>, people: &[Person], root: Option<&str>) -> Id {
    root.map(Id::new)
        .filter(|id| by_id.contains_key(id))
        .unwrap_or_else(|| people[0].id())
}

/// Assigns every person reachable from the root its level: the shortest hop
/// distance from the root in the symmetrized graph.
///
/// Levels are processed in increasing order; a neighbor is assigned
/// `current + 1` the first time it is reached and never revisited, so each
/// person gets exactly one level. Within a level, order is first-discovery
/// order (parents processed left to right as they appeared in the list).
/// Names without a matching person are never enqueued.
fn assign_levels(
    adjacency: &Adjacency,
    by_id: &IndexMap<Id, &Person>,
    root_id: Id,
) -> (Vec<Vec<Id>>, IndexMap<Id, usize>) {
    let mut levels: Vec<Vec<Id>> = vec![vec![root_id]];
    let mut level_of: IndexMap<Id, usize> = IndexMap::new();
    level_of.insert(root_id, 0);

    let mut current = 0;
    while current < levels.len() {
        let row = levels[current].clone();
        let mut next = Vec::new();

        for id in row {
            for neighbor in adjacency.neighbors(id) {
                if by_id.contains_key(&neighbor) && !level_of.contains_key(&neighbor) {
                    level_of.insert(neighbor, current + 1);
                    next.push(neighbor);
                }
            }
        }

        if !next.is_empty() {
            levels.push(next);
        }
        current += 1;
    }

    (levels, level_of)
}

/// Width of a row of `count` evenly spaced nodes, measured center to center.
fn row_width(count: usize, spacing: f32) -> f32 {
    count.saturating_sub(1) as f32 * spacing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, connections: &[&str]) -> Person {
        Person::new(name).with_connections(connections.iter().copied())
    }

    fn node<'a>(layout: &'a Layout<'_>, name: &str) -> &'a LayoutNode<'a> {
        layout
            .positions()
            .iter()
            .find(|node| node.person().name == name)
            .unwrap_or_else(|| panic!("no node for {name}"))
    }

    fn edge_names(layout: &Layout<'_>) -> Vec<(String, String)> {
        layout
            .edges()
            .iter()
            .map(|edge| {
                (
                    layout.positions()[edge.source()].person().name.clone(),
                    layout.positions()[edge.target()].person().name.clone(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_people_list() {
        let layout = LayoutEngine::new().compute(&[], None);
        assert!(layout.is_empty());
        assert!(layout.edges().is_empty());
    }

    #[test]
    fn test_single_person_defaults_to_root() {
        let people = vec![person("Root", &[])];
        let layout = LayoutEngine::new().compute(&people, None);

        assert_eq!(layout.positions().len(), 1);
        assert_eq!(node(&layout, "Root").level(), 0);
        assert!(layout.edges().is_empty());
    }

    #[test]
    fn test_one_sided_connection() {
        let people = vec![person("A", &["B"]), person("B", &[])];
        let layout = LayoutEngine::new().compute(&people, Some("A"));

        assert_eq!(node(&layout, "A").level(), 0);
        assert_eq!(node(&layout, "B").level(), 1);
        assert_eq!(edge_names(&layout), vec![("A".to_string(), "B".to_string())]);
    }

    #[test]
    fn test_mutual_listing_yields_one_edge() {
        let people = vec![person("A", &["B"]), person("B", &["A"])];
        let layout = LayoutEngine::new().compute(&people, Some("A"));

        assert_eq!(node(&layout, "A").level(), 0);
        assert_eq!(node(&layout, "B").level(), 1);
        assert_eq!(layout.edges().len(), 1);
    }

    #[test]
    fn test_dangling_reference_and_overflow() {
        // "Y" exists only as a connection target; Z is unreachable from A.
        let people = vec![person("A", &[]), person("Z", &["Y"])];
        let layout = LayoutEngine::new().compute(&people, Some("A"));

        assert_eq!(layout.positions().len(), 2);
        assert_eq!(node(&layout, "A").level(), 0);
        // Z lands in the overflow row, one below the deepest regular level.
        assert_eq!(node(&layout, "Z").level(), 1);
        assert!(
            layout
                .positions()
                .iter()
                .all(|node| node.person().name != "Y")
        );
        assert!(layout.edges().is_empty());
    }

    #[test]
    fn test_diamond_single_assignment() {
        let people = vec![
            person("A", &["B", "C"]),
            person("B", &["D"]),
            person("C", &["D"]),
            person("D", &[]),
        ];
        let layout = LayoutEngine::new().compute(&people, Some("A"));

        assert_eq!(node(&layout, "D").level(), 2);
        assert_eq!(
            layout
                .positions()
                .iter()
                .filter(|node| node.person().name == "D")
                .count(),
            1
        );
        // A-B, A-C, B-D, C-D; no same-level edges exist here
        assert_eq!(layout.edges().len(), 4);
    }

    #[test]
    fn test_levels_are_shortest_hop_distance() {
        // Long path Root-B-C-D plus a shortcut Root-D
        let people = vec![
            person("Root", &["B", "D"]),
            person("B", &["C"]),
            person("C", &["D"]),
            person("D", &[]),
        ];
        let layout = LayoutEngine::new().compute(&people, Some("Root"));

        assert_eq!(node(&layout, "D").level(), 1);
        assert_eq!(node(&layout, "C").level(), 2);
    }

    #[test]
    fn test_cycle_terminates() {
        let people = vec![
            person("A", &["B"]),
            person("B", &["C"]),
            person("C", &["A"]),
        ];
        let layout = LayoutEngine::new().compute(&people, Some("A"));

        assert_eq!(layout.positions().len(), 3);
        assert_eq!(node(&layout, "A").level(), 0);
        assert_eq!(node(&layout, "B").level(), 1);
        assert_eq!(node(&layout, "C").level(), 1);
    }

    #[test]
    fn test_reverse_reachability() {
        // Only A lists the connection; traversal from B still reaches A.
        let people = vec![person("A", &["B"]), person("B", &[])];
        let layout = LayoutEngine::new().compute(&people, Some("B"));

        assert_eq!(node(&layout, "B").level(), 0);
        assert_eq!(node(&layout, "A").level(), 1);
    }

    #[test]
    fn test_unknown_root_falls_back_to_first_person() {
        let people = vec![person("First", &["Second"]), person("Second", &[])];
        let layout = LayoutEngine::new().compute(&people, Some("Nobody"));

        assert_eq!(node(&layout, "First").level(), 0);
    }

    #[test]
    fn test_determinism() {
        let people = vec![
            person("Me", &["Mom", "Dad", "Sam"]),
            person("Mom", &["Grandma"]),
            person("Dad", &[]),
            person("Sam", &["Alex"]),
            person("Grandma", &[]),
            person("Alex", &[]),
            person("Stranger", &[]),
        ];
        let engine = LayoutEngine::new();

        let first = engine.compute(&people, Some("Me"));
        let second = engine.compute(&people, Some("Me"));

        let coords = |layout: &Layout<'_>| {
            layout
                .positions()
                .iter()
                .map(|node| (node.person().name.clone(), node.x(), node.y(), node.level()))
                .collect::<Vec<_>>()
        };
        assert_eq!(coords(&first), coords(&second));
        assert_eq!(first.edges(), second.edges());
    }

    #[test]
    fn test_level_order_is_first_discovery() {
        // Me's connections in document order decide level-1 order.
        let people = vec![
            person("Me", &["Carol", "Alice", "Bob"]),
            person("Alice", &[]),
            person("Bob", &[]),
            person("Carol", &[]),
        ];
        let layout = LayoutEngine::new().compute(&people, Some("Me"));

        let level_one: Vec<&str> = layout
            .positions()
            .iter()
            .filter(|node| node.level() == 1)
            .map(|node| node.person().name.as_str())
            .collect();
        assert_eq!(level_one, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_rows_share_a_center_axis() {
        // Level 1 has three nodes, level 0 has one; the root sits on the
        // axis of the widest row.
        let people = vec![
            person("Me", &["A", "B", "C"]),
            person("A", &[]),
            person("B", &[]),
            person("C", &[]),
        ];
        let layout = LayoutEngine::new().compute(&people, Some("Me"));

        let config = LayoutConfig::default();
        let base_x = config.padding() + 2.0 * config.horizontal_spacing() / 2.0;

        assert_eq!(node(&layout, "Me").x(), base_x);
        assert_eq!(node(&layout, "B").x(), base_x);
        assert_eq!(
            node(&layout, "A").x(),
            base_x - config.horizontal_spacing()
        );
        assert_eq!(
            node(&layout, "C").x(),
            base_x + config.horizontal_spacing()
        );
    }

    #[test]
    fn test_vertical_placement() {
        let people = vec![person("Me", &["A"]), person("A", &[]), person("Lost", &[])];
        let layout = LayoutEngine::new().compute(&people, Some("Me"));

        let config = LayoutConfig::default();
        assert_eq!(node(&layout, "Me").y(), config.top_margin());
        assert_eq!(
            node(&layout, "A").y(),
            config.top_margin() + config.vertical_spacing()
        );
        // Overflow row sits one step below the deepest regular level.
        assert_eq!(
            node(&layout, "Lost").y(),
            config.top_margin() + 2.0 * config.vertical_spacing()
        );
        assert_eq!(node(&layout, "Lost").level(), 2);
    }

    #[test]
    fn test_overflow_completeness() {
        let people = vec![
            person("Me", &["A"]),
            person("A", &[]),
            person("Island1", &["Island2"]),
            person("Island2", &[]),
        ];
        let layout = LayoutEngine::new().compute(&people, Some("Me"));

        assert_eq!(layout.positions().len(), 4);
        let overflow: Vec<&str> = layout
            .positions()
            .iter()
            .filter(|node| node.level() == 2)
            .map(|node| node.person().name.as_str())
            .collect();
        assert_eq!(overflow, vec!["Island1", "Island2"]);
    }

    #[test]
    fn test_same_level_edges_suppressed_by_default() {
        // B and C are both level 1 and connected to each other.
        let people = vec![
            person("A", &["B", "C"]),
            person("B", &["C"]),
            person("C", &[]),
        ];
        let layout = LayoutEngine::new().compute(&people, Some("A"));

        assert_eq!(edge_names(&layout).len(), 2);
        assert!(!edge_names(&layout).contains(&("B".to_string(), "C".to_string())));
    }

    #[test]
    fn test_same_level_edges_kept_when_configured() {
        let people = vec![
            person("A", &["B", "C"]),
            person("B", &["C"]),
            person("C", &[]),
        ];
        let config: LayoutConfig =
            toml::from_str("same_level_edges = \"keep\"").unwrap();
        let layout = LayoutEngine::with_config(config).compute(&people, Some("A"));

        assert_eq!(layout.edges().len(), 3);
        assert!(edge_names(&layout).contains(&("B".to_string(), "C".to_string())));
    }

    #[test]
    fn test_self_connection_produces_no_edge() {
        let people = vec![person("A", &["A", "B"]), person("B", &[])];
        let layout = LayoutEngine::new().compute(&people, Some("A"));

        assert_eq!(layout.edges().len(), 1);
        assert_eq!(edge_names(&layout), vec![("A".to_string(), "B".to_string())]);
    }

    #[test]
    fn test_edges_between_overflow_nodes_still_drawn() {
        let people = vec![
            person("Me", &[]),
            person("Island1", &["Island2"]),
            person("Island2", &["Island3"]),
            person("Island3", &[]),
        ];
        let config: LayoutConfig =
            toml::from_str("same_level_edges = \"keep\"").unwrap();
        let layout = LayoutEngine::with_config(config).compute(&people, Some("Me"));

        // All islands share the single overflow row
        assert_eq!(
            edge_names(&layout),
            vec![
                ("Island1".to_string(), "Island2".to_string()),
                ("Island2".to_string(), "Island3".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_names_first_occurrence_wins() {
        let mut duplicate = person("Twin", &[]);
        duplicate.note = Some("the other one".to_string());
        let people = vec![person("Me", &["Twin"]), person("Twin", &[]), duplicate];
        let layout = LayoutEngine::new().compute(&people, Some("Me"));

        let twins: Vec<_> = layout
            .positions()
            .iter()
            .filter(|node| node.person().name == "Twin")
            .collect();
        assert_eq!(twins.len(), 1);
        assert!(twins[0].person().note.is_none());
    }
}
