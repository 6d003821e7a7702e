//! The catalog record created by the new product form.
//!
//! `Product` is serialized in camelCase because the same JSON document travels
//! from the browser to `POST /api/products` and back through the listing
//! endpoint. A product is written once, on submission; votes and comments are
//! kept in the shape of the record but never modified here.

use serde::{Deserialize, Serialize};

use super::identity::Identity;
use crate::form::{FieldKey, FieldSnapshot};

/// Author of a product or a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: String,
    pub display_name: String,
}

impl From<&Identity> for Creator {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            display_name: identity.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: Creator,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub company: String,
    pub source_url: String,
    /// Locator of the uploaded image, empty when no upload had resolved.
    pub image_url: String,
    pub description: String,
    pub ingredients: String,
    pub preparation: String,
    pub fat_pct: String,
    pub protein_pct: String,
    pub carb_pct: String,
    pub vote_count: u32,
    pub comments: Vec<Comment>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    pub creator: Creator,
    /// Ids of the users that voted.
    pub voted_by: Vec<String>,
}

impl Product {
    /// Assembles a fresh record: no votes, no comments.
    pub fn from_form(
        fields: &FieldSnapshot,
        image_url: impl Into<String>,
        creator: &Identity,
        created_at: i64,
    ) -> Self {
        let field = |key: FieldKey| fields.get(key).to_string();
        Self {
            name: field(FieldKey::Name),
            company: field(FieldKey::Company),
            source_url: field(FieldKey::SourceUrl),
            image_url: image_url.into(),
            description: field(FieldKey::Description),
            ingredients: field(FieldKey::Ingredients),
            preparation: field(FieldKey::Preparation),
            fat_pct: field(FieldKey::FatPct),
            protein_pct: field(FieldKey::ProteinPct),
            carb_pct: field(FieldKey::CarbPct),
            vote_count: 0,
            comments: Vec::new(),
            created_at,
            creator: Creator::from(creator),
            voted_by: Vec::new(),
        }
    }
}

/// A product as stored by the backend, with its generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: String,
    #[serde(flatten)]
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Identity {
        Identity {
            id: "u1".to_string(),
            display_name: "Ana".to_string(),
        }
    }

    #[test]
    fn from_form_copies_fields_and_zeroes_metadata() {
        let fields = FieldSnapshot::new()
            .with(FieldKey::Name, "Cake")
            .with(FieldKey::Company, "Acme")
            .with(FieldKey::SourceUrl, "http://x")
            .with(FieldKey::ProteinPct, "7");

        let product = Product::from_form(&fields, "http://img/f.png", &ana(), 42);

        assert_eq!(product.name, "Cake");
        assert_eq!(product.protein_pct, "7");
        assert_eq!(product.image_url, "http://img/f.png");
        assert_eq!(product.vote_count, 0);
        assert!(product.comments.is_empty());
        assert!(product.voted_by.is_empty());
        assert_eq!(product.created_at, 42);
        assert_eq!(product.creator.display_name, "Ana");
    }

    #[test]
    fn serializes_in_camel_case() {
        let product = Product::from_form(&FieldSnapshot::new(), "", &ana(), 1);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["voteCount"], 0);
        assert_eq!(json["sourceUrl"], "");
        assert_eq!(json["creator"]["displayName"], "Ana");
        assert!(json["votedBy"].as_array().unwrap().is_empty());
        assert!(json.get("vote_count").is_none());
    }

    #[test]
    fn stored_product_flattens_record() {
        let stored = StoredProduct {
            id: "p1".to_string(),
            product: Product::from_form(&FieldSnapshot::new(), "", &ana(), 1),
        };
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["createdAt"], 1);
    }
}
