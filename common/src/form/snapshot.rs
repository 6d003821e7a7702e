use std::collections::BTreeMap;

use super::FieldKey;

/// Value of every form field at one instant.
///
/// Keys are fixed: each `FieldKey` always has an entry and the empty string
/// means "unset".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    values: [String; FieldKey::COUNT],
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
        }
    }
}

impl FieldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> &str {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values[key.index()] = value.into();
    }

    /// Builder form of `set`, handy when preparing fixtures.
    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        FieldKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }
}

/// Field → message. A key present in the map marks the field as invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldKey, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.errors.insert(key, message.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.errors.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.errors.iter().map(|(key, msg)| (*key, msg.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snapshot_has_every_field_empty() {
        let snapshot = FieldSnapshot::new();
        assert_eq!(snapshot.iter().count(), FieldKey::COUNT);
        assert!(snapshot.iter().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn set_replaces_only_one_entry() {
        let mut snapshot = FieldSnapshot::new().with(FieldKey::Company, "Acme");
        snapshot.set(FieldKey::Name, "Cake");
        snapshot.set(FieldKey::Name, "Pie");

        assert_eq!(snapshot.get(FieldKey::Name), "Pie");
        assert_eq!(snapshot.get(FieldKey::Company), "Acme");
        assert_eq!(snapshot.get(FieldKey::SourceUrl), "");
    }

    #[test]
    fn error_map_iterates_in_field_order() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldKey::SourceUrl, "c");
        errors.insert(FieldKey::Name, "a");
        errors.insert(FieldKey::Company, "b");

        let keys: Vec<_> = errors.keys().collect();
        assert_eq!(
            keys,
            vec![FieldKey::Name, FieldKey::Company, FieldKey::SourceUrl]
        );
    }
}
