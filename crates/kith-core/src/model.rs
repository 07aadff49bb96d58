//! The persisted people document.
//!
//! This module defines the data model for the relationship graph as it is
//! stored on disk: a flat JSON array of person objects. There is no schema
//! versioning and no separate numeric ID; a person's `name` is the join key
//! that `connections` entries refer to.
//!
//! # Document shape
//!
//! ```json
//! [
//!   {
//!     "name": "Alice",
//!     "relationship": "Friend",
//!     "note": "College roommate",
//!     "image": "alice.jpg",
//!     "connections": ["Bob"]
//!   }
//! ]
//! ```
//!
//! `note` and `image` are optional; `relationship` strings outside the known
//! set map to [`RelationshipCategory::Unset`].

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// How a person relates to the owner of the graph.
///
/// Serialized as the plain strings the editing UI writes (`"Self"`,
/// `"Family"`, `"Friend"`, `"Work"`, `"School"`). Anything else, including
/// an absent or empty field, becomes [`RelationshipCategory::Unset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipCategory {
    /// The graph owner themselves.
    Myself,
    /// A family member.
    Family,
    /// A friend.
    Friend,
    /// A colleague or professional contact.
    Work,
    /// Someone known from school.
    School,
    /// No category recorded.
    #[default]
    Unset,
}

impl RelationshipCategory {
    /// Returns the category's document string, or `""` for [`Self::Unset`].
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipCategory::Myself => "Self",
            RelationshipCategory::Family => "Family",
            RelationshipCategory::Friend => "Friend",
            RelationshipCategory::Work => "Work",
            RelationshipCategory::School => "School",
            RelationshipCategory::Unset => "",
        }
    }
}

impl From<String> for RelationshipCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Self" => RelationshipCategory::Myself,
            "Family" => RelationshipCategory::Family,
            "Friend" => RelationshipCategory::Friend,
            "Work" => RelationshipCategory::Work,
            "School" => RelationshipCategory::School,
            _ => RelationshipCategory::Unset,
        }
    }
}

impl From<RelationshipCategory> for String {
    fn from(value: RelationshipCategory) -> Self {
        value.as_str().to_string()
    }
}

/// A single person in the relationship graph.
///
/// Externally owned: people are created and edited by the editing UI and
/// read fresh from the document on every layout request. `name` uniqueness
/// is assumed, not enforced; when duplicates occur the first occurrence in
/// the list defines the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Display name and join key for connections.
    pub name: String,

    /// Relationship category, used for node coloring.
    #[serde(default)]
    pub relationship: RelationshipCategory,

    /// Free-text note shown when the person is inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Filename of a stored photo, relative to the images folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Names of connected people. Direction as stored is one-sided; the
    /// layout treats the relation as symmetric.
    #[serde(default)]
    pub connections: Vec<String>,
}

impl Person {
    /// Creates a person with just a name and no category, note, image, or
    /// connections.
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            relationship: RelationshipCategory::Unset,
            note: None,
            image: None,
            connections: Vec::new(),
        }
    }

    /// Replaces the connection list, for fluent construction.
    pub fn with_connections<I, S>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the interned identifier for this person's name.
    pub fn id(&self) -> Id {
        Id::new(&self.name)
    }
}
