//! Identifier management using string interning.
//!
//! This module provides the [`Id`] type used for diagram nodes and clusters.
//! Interning keeps identifiers `Copy` and makes comparisons cheap, which is
//! convenient because relations refer to their endpoints by `Id`.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// Access goes through a `Mutex` so identifiers can be created from tests
/// running on multiple threads.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// An interned identifier for a diagram node or cluster.
///
/// # Examples
///
/// ```
/// use archmap_core::identifier::Id;
///
/// let gateway = Id::new("gateway");
/// let auth_db = Id::new("db_auth");
///
/// // Nested identifiers name clusters inside clusters
/// let services = Id::new("microservices");
/// let auth_box = services.create_nested(Id::new("auth_service"));
/// assert_eq!(auth_box, "microservices::auth_service");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string slice.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a nested ID by combining this ID and a child ID with a '::'
    /// separator. Used to give nested clusters globally unique names.
    ///
    /// # Examples
    ///
    /// ```
    /// use archmap_core::identifier::Id;
    ///
    /// let outer = Id::new("microservices");
    /// let inner = Id::new("blog_service");
    /// assert_eq!(outer.create_nested(inner), "microservices::blog_service");
    /// ```
    pub fn create_nested(&self, child_id: Id) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let parent_str = interner
            .resolve(self.0)
            .expect("Parent ID should exist in interner");
        let child_str = interner
            .resolve(child_id.0)
            .expect("Child ID should exist in interner");
        let nested_name = format!("{parent_str}::{child_str}");
        let symbol = interner.get_or_intern(&nested_name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interns_equal_strings() {
        let id1 = Id::new("gateway");
        let id2 = Id::new("gateway");
        let id3 = Id::new("frontend");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "gateway");
    }

    #[test]
    fn test_create_nested() {
        let parent = Id::new("microservices");
        let auth = parent.create_nested(Id::new("auth_service"));
        let blog = parent.create_nested(Id::new("blog_service"));

        assert_ne!(auth, blog);
        assert_eq!(auth, "microservices::auth_service");
        assert_eq!(blog, "microservices::blog_service");
    }

    #[test]
    fn test_display() {
        let id = Id::new("db_auth");
        assert_eq!(format!("{id}"), "db_auth");
    }

    #[test]
    fn test_from_str_slice() {
        let id1: Id = "frontend_layer".into();
        let id2 = Id::new("frontend_layer");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("auth");
        let id2 = Id::new("auth");
        let id3 = Id::new("blog");

        let mut map = HashMap::new();
        map.insert(id1, "auth service");
        map.insert(id3, "blog service");

        assert_eq!(map.get(&id2), Some(&"auth service"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_copy() {
        let id1 = Id::new("user");
        let id2 = id1;
        // id1 remains usable after the copy
        assert_eq!(id1, id2);
        assert_eq!(id1, "user");
    }
}
