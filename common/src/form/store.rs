use super::{ErrorMap, FieldKey, FieldSnapshot, FormError, RuleSet};

/// Owns the field values and the error messages of one form session.
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    values: FieldSnapshot,
    errors: ErrorMap,
    rules: RuleSet,
}

impl FieldStore {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            values: FieldSnapshot::new(),
            errors: ErrorMap::new(),
            rules,
        }
    }

    /// Replaces one value. Errors are left as they are until the next blur.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values.set(key, value);
    }

    /// `set_field` for callers that only hold the DOM `name` attribute of the
    /// edited control. Components that already know the `FieldKey` should call
    /// `set_field` directly.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let key = name.parse::<FieldKey>()?;
        self.set_field(key, value);
        Ok(())
    }

    /// Blur handler: re-validates the whole snapshot and replaces the error
    /// map, so a blur on one field may surface or clear errors on others.
    pub fn touch_field(&mut self, key: FieldKey) {
        log::trace!("blur on `{key}`, re-validating form");
        self.errors = self.rules.validate(&self.values);
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        self.values.clone()
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.values.get(key)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(key)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Installs the map produced by a submit-time validation run.
    pub fn show_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    pub fn reset(&mut self) {
        self.values = FieldSnapshot::new();
        self.errors = ErrorMap::new();
    }
}
