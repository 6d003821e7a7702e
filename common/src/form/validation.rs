//! Rule engine for the new product form.
//!
//! Validation is a pure function of a `FieldSnapshot`. Each rule only looks at
//! the value of its own field; there is no cross-field validation.

use super::{ErrorMap, FieldKey, FieldSnapshot};

/// A single field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be the empty string. Whitespace is not trimmed.
    Required { message: &'static str },
}

impl Rule {
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required { message } => value.is_empty().then_some(*message),
        }
    }
}

/// Ordered list of `(field, rule)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<(FieldKey, Rule)>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::product()
    }
}

impl RuleSet {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Rules of the new product form.
    pub fn product() -> Self {
        Self::empty()
            .require(FieldKey::Name, "El Nombre es obligatorio")
            .require(FieldKey::Company, "Nombre de Empresa es obligatorio")
            .require(FieldKey::SourceUrl, "La URL del producto es obligatoria")
    }

    pub fn require(mut self, key: FieldKey, message: &'static str) -> Self {
        self.rules.push((key, Rule::Required { message }));
        self
    }

    /// Fields carrying a `Required` rule, for the rendering layer.
    pub fn required_fields(&self) -> Vec<FieldKey> {
        let mut keys: Vec<FieldKey> = self
            .rules
            .iter()
            .filter(|(_, rule)| matches!(rule, Rule::Required { .. }))
            .map(|(key, _)| *key)
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    pub fn is_required(&self, key: FieldKey) -> bool {
        self.required_fields().contains(&key)
    }

    /// Runs every rule against `snapshot`.
    ///
    /// The first failing rule of a field wins; later rules for the same field
    /// are not evaluated.
    pub fn validate(&self, snapshot: &FieldSnapshot) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for (key, rule) in &self.rules {
            if errors.contains(*key) {
                continue;
            }
            if let Some(message) = rule.check(snapshot.get(*key)) {
                errors.insert(*key, message);
            }
        }
        errors
    }
}

/// Validates `snapshot` against the product rules.
pub fn validate(snapshot: &FieldSnapshot) -> ErrorMap {
    RuleSet::product().validate(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FieldSnapshot {
        FieldSnapshot::new()
            .with(FieldKey::Name, "Cake")
            .with(FieldKey::Company, "Acme")
            .with(FieldKey::SourceUrl, "http://x")
    }

    #[test]
    fn empty_snapshot_reports_every_required_field() {
        let errors = validate(&FieldSnapshot::new());
        let keys: Vec<_> = errors.keys().collect();
        assert_eq!(
            keys,
            vec![FieldKey::Name, FieldKey::Company, FieldKey::SourceUrl]
        );
        assert_eq!(errors.get(FieldKey::Name), Some("El Nombre es obligatorio"));
    }

    #[test]
    fn filled_required_fields_are_clean() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn each_empty_required_field_is_reported() {
        for key in [FieldKey::Name, FieldKey::Company, FieldKey::SourceUrl] {
            let errors = validate(&filled().with(key, ""));
            assert!(errors.contains(key), "{key} should be reported");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn error_keys_stay_within_required_set() {
        let rules = RuleSet::product();
        let required = rules.required_fields();
        let samples = [
            FieldSnapshot::new(),
            filled(),
            filled().with(FieldKey::Company, ""),
            FieldSnapshot::new().with(FieldKey::Description, "x"),
            FieldSnapshot::new().with(FieldKey::FatPct, "12"),
        ];
        for snapshot in &samples {
            let errors = rules.validate(snapshot);
            assert!(errors.keys().all(|key| required.contains(&key)));
        }
    }

    #[test]
    fn whitespace_only_value_is_not_trimmed() {
        let errors = validate(&filled().with(FieldKey::Name, "   "));
        assert!(!errors.contains(FieldKey::Name));
    }

    #[test]
    fn optional_fields_never_fail() {
        let errors = validate(&filled());
        for key in [
            FieldKey::Description,
            FieldKey::Ingredients,
            FieldKey::Preparation,
            FieldKey::FatPct,
            FieldKey::ProteinPct,
            FieldKey::CarbPct,
        ] {
            assert!(!errors.contains(key));
        }
    }

    #[test]
    fn extra_required_rule_follows_same_pattern() {
        let rules = RuleSet::product().require(FieldKey::Description, "Agrega una descripción");
        let errors = rules.validate(&filled());
        assert_eq!(errors.get(FieldKey::Description), Some("Agrega una descripción"));
        assert!(rules.is_required(FieldKey::Description));
    }

    #[test]
    fn first_rule_for_a_field_wins() {
        let rules = RuleSet::empty()
            .require(FieldKey::Name, "first")
            .require(FieldKey::Name, "second");
        let errors = rules.validate(&FieldSnapshot::new());
        assert_eq!(errors.get(FieldKey::Name), Some("first"));
        assert_eq!(rules.required_fields(), vec![FieldKey::Name]);
    }
}
