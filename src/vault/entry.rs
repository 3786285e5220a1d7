//! Entry and EntrySet types stored inside a vault.
//!
//! A service maps either to a single `Entry` or to a list of them.  Both
//! shapes appear in the decrypted JSON:
//!
//! ```text
//! { "Gmail": {"login": "bob", "password": "..."},
//!   "GitHub": [{"login": "a", "password": "..."}, {"login": "b", "password": "..."}] }
//! ```
//!
//! `EntrySet` is untagged so either shape deserializes transparently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The decrypted vault: service name -> entries.
///
/// Service names are case-sensitive. A `BTreeMap` keeps the serialized
/// output and listings sorted by name.
pub type Vault = BTreeMap<String, EntrySet>;

/// A single login/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub login: String,
    pub password: String,

    /// Fields PassVault does not know about, kept as-is on rewrite.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Entry {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            extra: Map::new(),
        }
    }
}

/// One entry, or an ordered list of entries, stored under a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySet {
    Single(Entry),
    Many(Vec<Entry>),
}

impl EntrySet {
    /// Add `entry` to whatever is currently stored under a service.
    ///
    /// - nothing stored -> `Single`
    /// - `Single(a)`    -> `Many([a, entry])`
    /// - `Many(list)`   -> `Many(list + [entry])`
    pub fn add(existing: Option<EntrySet>, entry: Entry) -> EntrySet {
        match existing {
            None => EntrySet::Single(entry),
            Some(EntrySet::Single(first)) => EntrySet::Many(vec![first, entry]),
            Some(EntrySet::Many(mut list)) => {
                list.push(entry);
                EntrySet::Many(list)
            }
        }
    }

    /// Entries in insertion order; a `Single` reads as a one-element slice.
    pub fn entries(&self) -> &[Entry] {
        match self {
            EntrySet::Single(entry) => std::slice::from_ref(entry),
            EntrySet::Many(list) => list,
        }
    }

    /// Consume the set and return its entries in insertion order.
    pub fn into_entries(self) -> Vec<Entry> {
        match self {
            EntrySet::Single(entry) => vec![entry],
            EntrySet::Many(list) => list,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(login: &str) -> Entry {
        Entry::new(login, format!("pw-{login}"))
    }

    #[test]
    fn first_add_is_single() {
        let set = EntrySet::add(None, entry("a"));
        assert_eq!(set, EntrySet::Single(entry("a")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn second_add_promotes_to_list() {
        let set = EntrySet::add(Some(EntrySet::Single(entry("a"))), entry("b"));
        assert_eq!(set, EntrySet::Many(vec![entry("a"), entry("b")]));
    }

    #[test]
    fn further_adds_append() {
        let mut set = None;
        for login in ["a", "b", "c", "d"] {
            set = Some(EntrySet::add(set, entry(login)));
        }
        let logins: Vec<_> = set
            .unwrap()
            .into_entries()
            .into_iter()
            .map(|e| e.login)
            .collect();
        assert_eq!(logins, ["a", "b", "c", "d"]);
    }

    #[test]
    fn single_serializes_as_object() {
        let set = EntrySet::Single(Entry::new("bob", "pw"));
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"login":"bob","password":"pw"}"#);
    }

    #[test]
    fn many_serializes_as_array() {
        let set = EntrySet::Many(vec![Entry::new("a", "1"), Entry::new("b", "2")]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"[{"login":"a","password":"1"},{"login":"b","password":"2"}]"#
        );
    }

    #[test]
    fn reads_both_shapes_from_one_document() {
        let json = r#"{
            "Gmail": {"login": "bob", "password": "x"},
            "GitHub": [{"login": "a", "password": "1"}, {"login": "b", "password": "2"}]
        }"#;
        let vault: Vault = serde_json::from_str(json).unwrap();
        assert_eq!(vault["Gmail"].entries(), &[Entry::new("bob", "x")]);
        assert_eq!(vault["GitHub"].len(), 2);
        assert_eq!(vault["GitHub"].entries()[1].login, "b");
    }

    #[test]
    fn rejects_value_that_is_neither_shape() {
        let json = r#"{"Gmail": "just a string"}"#;
        assert!(serde_json::from_str::<Vault>(json).is_err());
    }

    #[test]
    fn empty_list_reads_as_no_entries() {
        let vault: Vault = serde_json::from_str(r#"{"Old": []}"#).unwrap();
        assert!(vault["Old"].is_empty());
        let set = EntrySet::add(vault.get("Old").cloned(), entry("new"));
        assert_eq!(set.entries(), &[entry("new")]);
    }

    #[test]
    fn unknown_fields_survive_a_rewrite() {
        let json = r#"{"Gmail": {"login": "bob", "password": "x", "note": "work"}}"#;
        let mut vault: Vault = serde_json::from_str(json).unwrap();
        assert_eq!(vault["Gmail"].entries()[0].extra["note"], "work");

        let set = EntrySet::add(vault.remove("Gmail"), entry("alice"));
        let out = serde_json::to_string(&set).unwrap();
        assert_eq!(
            out,
            r#"[{"login":"bob","password":"x","note":"work"},{"login":"alice","password":"pw-alice"}]"#
        );
    }
}
