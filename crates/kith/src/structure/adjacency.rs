//! Symmetrized adjacency structure over person identifiers.
//!
//! This is the foundational structure for level assignment. It is built once
//! per layout pass from the raw connection lists and never re-resolved by
//! re-scanning the people list.
//!
//! # Symmetrization
//!
//! For every person P listing a connection C, C is inserted into P's
//! neighbor set AND P into C's. Who lists whom is therefore irrelevant to
//! visual adjacency; editors only need to add a connection on one side.
//! C need not exist as a person — a dangling name gets an adjacency entry
//! but the layout never turns it into a node.
//!
//! # Determinism
//!
//! Neighbor sets and the entry map are insertion-ordered ([`indexmap`]), so
//! iteration order is a pure function of the input list. The layout's
//! tie-break rule (first-discovery order within a level) depends on this.

use indexmap::{IndexMap, IndexSet};

use kith_core::{identifier::Id, model::Person};

/// Symmetric neighbor sets keyed by interned person name.
#[derive(Debug, Default)]
pub struct Adjacency {
    neighbors: IndexMap<Id, IndexSet<Id>>,
}

impl Adjacency {
    /// Creates a new empty adjacency structure.
    pub fn new() -> Self {
        Adjacency::default()
    }

    /// Builds the symmetrized adjacency structure for a people list.
    ///
    /// Every person gets an entry even with no connections; every referenced
    /// connection name gets an entry whether or not it matches a person.
    pub fn from_people(people: &[Person]) -> Self {
        let mut adjacency = Adjacency::new();

        for person in people {
            let id = person.id();
            adjacency.neighbors.entry(id).or_default();

            for connection in &person.connections {
                adjacency.insert_symmetric(id, Id::new(connection));
            }
        }

        adjacency
    }

    /// Inserts `b` into `a`'s neighbor set and `a` into `b`'s.
    ///
    /// Re-inserting an existing pair is a no-op; redundant mutual listings
    /// in the document collapse to one adjacency.
    pub fn insert_symmetric(&mut self, a: Id, b: Id) {
        self.neighbors.entry(a).or_default().insert(b);
        self.neighbors.entry(b).or_default().insert(a);
    }

    /// Returns an iterator over the neighbors of `id`, in insertion order.
    ///
    /// Returns an empty iterator for an unknown identifier.
    pub fn neighbors(&self, id: Id) -> impl Iterator<Item = Id> + '_ {
        self.neighbors.get(&id).into_iter().flatten().copied()
    }

    /// Checks whether the structure has an entry for `id`.
    pub fn contains(&self, id: Id) -> bool {
        self.neighbors.contains_key(&id)
    }

    /// Returns the number of entries, dangling names included.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Checks whether the structure is empty.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(adjacency: &Adjacency, name: &str) -> Vec<String> {
        adjacency
            .neighbors(Id::new(name))
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_empty_people_list() {
        let adjacency = Adjacency::from_people(&[]);
        assert!(adjacency.is_empty());
        assert_eq!(adjacency.neighbors(Id::new("nobody")).count(), 0);
    }

    #[test]
    fn test_one_sided_listing_is_symmetric() {
        let people = vec![
            Person::new("A").with_connections(["B"]),
            Person::new("B"),
        ];
        let adjacency = Adjacency::from_people(&people);

        assert_eq!(ids(&adjacency, "A"), vec!["B"]);
        assert_eq!(ids(&adjacency, "B"), vec!["A"]);
    }

    #[test]
    fn test_mutual_listing_collapses() {
        let people = vec![
            Person::new("A").with_connections(["B"]),
            Person::new("B").with_connections(["A"]),
        ];
        let adjacency = Adjacency::from_people(&people);

        assert_eq!(ids(&adjacency, "A"), vec!["B"]);
        assert_eq!(ids(&adjacency, "B"), vec!["A"]);
    }

    #[test]
    fn test_dangling_connection_gets_entry() {
        let people = vec![Person::new("Z").with_connections(["Ghost"])];
        let adjacency = Adjacency::from_people(&people);

        assert!(adjacency.contains(Id::new("Ghost")));
        assert_eq!(ids(&adjacency, "Ghost"), vec!["Z"]);
        assert_eq!(adjacency.len(), 2);
    }

    #[test]
    fn test_person_without_connections_gets_entry() {
        let people = vec![Person::new("Loner")];
        let adjacency = Adjacency::from_people(&people);

        assert!(adjacency.contains(Id::new("Loner")));
        assert_eq!(adjacency.neighbors(Id::new("Loner")).count(), 0);
    }

    #[test]
    fn test_neighbor_order_follows_document_order() {
        let people = vec![
            Person::new("Hub").with_connections(["C", "A", "B"]),
            Person::new("A"),
            Person::new("B"),
            Person::new("C"),
        ];
        let adjacency = Adjacency::from_people(&people);

        // Insertion order, not alphabetical
        assert_eq!(ids(&adjacency, "Hub"), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_connection_entries_collapse() {
        let people = vec![
            Person::new("A").with_connections(["B", "B"]),
            Person::new("B"),
        ];
        let adjacency = Adjacency::from_people(&people);

        assert_eq!(ids(&adjacency, "A"), vec!["B"]);
    }

    #[test]
    fn test_self_connection() {
        let people = vec![Person::new("Ouroboros").with_connections(["Ouroboros"])];
        let adjacency = Adjacency::from_people(&people);

        assert_eq!(ids(&adjacency, "Ouroboros"), vec!["Ouroboros"]);
        assert_eq!(adjacency.len(), 1);
    }
}
