use std::fmt;
use std::str::FromStr;

use super::FormError;

/// Every input of the new product form.
///
/// The declaration order is the display order and the iteration order of
/// `FieldSnapshot` and `ErrorMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Company,
    SourceUrl,
    Description,
    Ingredients,
    Preparation,
    FatPct,
    ProteinPct,
    CarbPct,
}

impl FieldKey {
    pub const COUNT: usize = 9;

    pub const ALL: [FieldKey; FieldKey::COUNT] = [
        FieldKey::Name,
        FieldKey::Company,
        FieldKey::SourceUrl,
        FieldKey::Description,
        FieldKey::Ingredients,
        FieldKey::Preparation,
        FieldKey::FatPct,
        FieldKey::ProteinPct,
        FieldKey::CarbPct,
    ];

    /// Name used in the DOM (`name`/`id` attributes) and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Company => "company",
            FieldKey::SourceUrl => "sourceUrl",
            FieldKey::Description => "description",
            FieldKey::Ingredients => "ingredients",
            FieldKey::Preparation => "preparation",
            FieldKey::FatPct => "fatPct",
            FieldKey::ProteinPct => "proteinPct",
            FieldKey::CarbPct => "carbPct",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Nombre",
            FieldKey::Company => "Empresa",
            FieldKey::SourceUrl => "URL",
            FieldKey::Description => "Descripción",
            FieldKey::Ingredients => "Ingredientes",
            FieldKey::Preparation => "Preparación",
            FieldKey::FatPct => "% Grasas",
            FieldKey::ProteinPct => "% Proteína",
            FieldKey::CarbPct => "% Carbohidratos",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FormError::InvalidField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for key in FieldKey::ALL {
            assert_eq!(key.as_str().parse::<FieldKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_name_is_invalid_field() {
        assert_eq!(
            "imagen".parse::<FieldKey>(),
            Err(FormError::InvalidField("imagen".to_string()))
        );
    }

    #[test]
    fn all_is_in_index_order() {
        for (i, key) in FieldKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }
}
