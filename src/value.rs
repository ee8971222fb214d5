use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Map key under which a node's child blocks are stored.
///
/// Every `@{ ... }` block is appended to this one list on its parent,
/// regardless of what the block follows; blocks are never keyed by name.
pub const NESTED_DICTS_KEY: &str = "nested_dicts";

/// A scalar value in a configuration tree.
///
/// # Examples
///
/// ```rust
/// use confix::value::ConfigValue;
/// let n = ConfigValue::Integer(42);
/// assert_eq!(n.type_name(), "Integer");
/// let s = ConfigValue::String("hello".to_string());
/// assert_eq!(s.type_name(), "String");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Integer(u64),
    String(String),
}

impl ConfigValue {
    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Integer(_) => "Integer",
            ConfigValue::String(_) => "String",
        }
    }

    /// Returns the contained integer if this is an Integer value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confix::value::ConfigValue;
    /// assert_eq!(ConfigValue::Integer(7).as_integer(), Some(7));
    /// assert_eq!(ConfigValue::String("7;".into()).as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained text if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// One entry of a [`Dict`]: either a scalar or the child-block list.
///
/// Kept in the same ordered map as the scalars so that `nested_dicts`
/// serializes at the position where the first block appeared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum Entry {
    Scalar(ConfigValue),
    Blocks(Vec<Dict>),
}

/// A node of the configuration tree: an insertion-ordered mapping from
/// identifier to scalar value, plus the optional `nested_dicts` list of
/// child nodes.
///
/// Serializes as a plain JSON object preserving key insertion order,
/// with `nested_dicts` (if any blocks were opened under this node) as an
/// array of child objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dict {
    entries: IndexMap<String, Entry>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the node has no scalar entries and no child blocks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries, counting the `nested_dicts` list as one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets `key` to a scalar value. An existing entry under the same key
    /// is overwritten in place; last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.entries.insert(key.into(), Entry::Scalar(value));
    }

    /// Returns the scalar stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self.entries.get(key) {
            Some(Entry::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the child blocks of this node, or `None` if no block was
    /// ever opened under it. An absent list and an empty one serialize
    /// differently, so the distinction is kept.
    pub fn nested(&self) -> Option<&[Dict]> {
        match self.entries.get(NESTED_DICTS_KEY) {
            Some(Entry::Blocks(children)) => Some(children),
            _ => None,
        }
    }

    /// Appends a child block to this node's `nested_dicts` list, creating
    /// the list entry at the current insertion position on first use.
    pub fn push_nested(&mut self, child: Dict) {
        match self
            .entries
            .entry(NESTED_DICTS_KEY.to_string())
            .or_insert_with(|| Entry::Blocks(Vec::new()))
        {
            Entry::Blocks(children) => children.push(child),
            entry => *entry = Entry::Blocks(vec![child]),
        }
    }

    /// Iterates over the keys of this node in insertion order, including
    /// `nested_dicts` if present.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let mut dict = Dict::new();
        dict.set("a", ConfigValue::Integer(1));
        dict.set("b", ConfigValue::Integer(2));
        dict.set("a", ConfigValue::String("again".into()));
        assert_eq!(dict.get("a"), Some(&ConfigValue::String("again".into())));
        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn nested_list_keeps_first_use_position() {
        let mut dict = Dict::new();
        dict.set("a", ConfigValue::Integer(1));
        dict.push_nested(Dict::new());
        dict.set("b", ConfigValue::Integer(2));
        dict.push_nested(Dict::new());
        assert_eq!(
            dict.keys().collect::<Vec<_>>(),
            vec!["a", NESTED_DICTS_KEY, "b"]
        );
        assert_eq!(dict.nested().map(<[Dict]>::len), Some(2));
    }

    #[test]
    fn empty_dict_has_no_nested_list() {
        assert!(Dict::new().nested().is_none());
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut child = Dict::new();
        child.set("x", ConfigValue::Integer(2));
        let mut root = Dict::new();
        root.set("a", ConfigValue::Integer(1));
        root.push_nested(child);
        root.set("b", ConfigValue::String("three".into()));
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, r#"{"a":1,"nested_dicts":[{"x":2}],"b":"three"}"#);
    }
}
