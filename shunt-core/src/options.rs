//! Opaque option bags forwarded to the host registration layer.
//!
//! Shunt never interprets host options beyond two reserved keys: the
//! toggle descriptor a declaration may carry under [`TOGGLE_KEY`], and the
//! derived type hint the binder records under [`TARGET_TYPE_KEY`].
//! Everything else passes through verbatim.

use crate::ident::Ident;
use crate::toggle::ToggleDescriptor;
use std::collections::BTreeMap;

/// Key under which a declaration's options carry its toggle descriptor.
///
/// Consumed by the binder; never forwarded to the host.
pub const TOGGLE_KEY: &str = "toggle";

/// Key under which the binder records the derived target-type hint.
///
/// An explicit entry in the declaration's options wins over the derived
/// hint.
pub const TARGET_TYPE_KEY: &str = "target_type";

/// A single host option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean flag.
    Bool(bool),
    /// An integer setting.
    Int(i64),
    /// Free-form text.
    Str(String),
    /// A symbolic name.
    Name(Ident),
    /// A toggle descriptor, only meaningful under [`TOGGLE_KEY`].
    Toggle(ToggleDescriptor),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<Ident> for OptionValue {
    fn from(value: Ident) -> Self {
        OptionValue::Name(value)
    }
}

impl From<ToggleDescriptor> for OptionValue {
    fn from(value: ToggleDescriptor) -> Self {
        OptionValue::Toggle(value)
    }
}

/// An ordered map of host options.
///
/// Merging is right-biased: entries from the merged-in map replace entries
/// already present. The binder relies on this to let explicit declaration
/// options override the derived type hint, and on/off variant options
/// override both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: BTreeMap<String, OptionValue>,
}

impl OptionMap {
    /// Create an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up an entry.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Remove an entry, returning it.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.remove(key)
    }

    /// Whether the map has an entry under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Merge `other` into this map; entries from `other` win.
    pub fn merge(&mut self, other: OptionMap) {
        self.entries.extend(other.entries);
    }

    /// Consuming form of [`merge`](OptionMap::merge).
    pub fn merged(mut self, other: OptionMap) -> OptionMap {
        self.merge(other);
        self
    }
}

/// Build an [`OptionMap`] from literal entries.
///
/// # Example
///
/// ```rust,ignore
/// let opts = options! { "validate" => true, "target_type" => "Example" };
/// assert_eq!(opts.len(), 2);
/// ```
#[macro_export]
macro_rules! options {
    () => { $crate::OptionMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::OptionMap::new();
        $( map.insert($key, $value); )+
        map
    }};
}
