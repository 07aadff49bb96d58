//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based
//! approach. Person names are interned once when the layout graph is built, so
//! adjacency and level maps compare symbols instead of re-hashing strings.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning.
///
/// An `Id` is the canonical key for a person's name. Two `Id`s created from
/// the same string are equal and cheap to compare and hash.
///
/// # Examples
///
/// ```
/// use kith_core::identifier::Id;
///
/// let a = Id::new("Alice");
/// let b = Id::new("Alice");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "Alice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let name = interner
            .resolve(self.0)
            .expect("Id symbol should exist in interner");
        write!(f, "{name}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Id::new(name)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
