//! Offer documents as returned by the content backend.

use crate::i18n::LanguageRegistry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A CMS-managed promotional package.
///
/// Name and description are stored per language in the CMS as
/// `<code>name` / `<code>description` (e.g. `plname`, `endescription`).
/// They are collected into maps keyed by language code for every language in
/// the registry; unknown suffixed fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawOffer")]
pub struct Offer {
    pub id: String,
    pub slug: Option<String>,
    pub names: HashMap<&'static str, String>,
    pub descriptions: HashMap<&'static str, Vec<Block>>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub image: Option<ImageRef>,
}

impl Offer {
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn description(&self, code: &str) -> Option<&[Block]> {
        self.descriptions.get(code).map(Vec::as_slice)
    }
}

#[derive(Debug, Deserialize)]
struct RawOffer {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default, deserialize_with = "lenient")]
    slug: Option<Slug>,
    #[serde(default, deserialize_with = "lenient")]
    price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    image: Option<ImageRef>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct Slug {
    current: Option<String>,
}

impl From<RawOffer> for Offer {
    fn from(mut raw: RawOffer) -> Self {
        let mut names = HashMap::new();
        let mut descriptions = HashMap::new();

        for language in LanguageRegistry::get().list_all() {
            if let Some(Value::String(name)) = raw.rest.remove(&format!("{}name", language.code)) {
                names.insert(language.code, name);
            }
            if let Some(Value::Array(nodes)) =
                raw.rest.remove(&format!("{}description", language.code))
            {
                descriptions.insert(language.code, nodes.into_iter().map(Block::from_value).collect());
            }
        }

        Self {
            id: raw.id,
            slug: raw.slug.and_then(|s| s.current),
            names,
            descriptions,
            price: raw.price,
            currency: raw.currency,
            image: raw.image,
        }
    }
}

/// One node of a rich-text (Portable Text) array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    /// A paragraph-like text block
    #[serde(rename = "block")]
    Text {
        #[serde(default)]
        children: Vec<Span>,
    },
    /// Images, embeds and any other node type
    #[serde(other)]
    Other,
}

impl Block {
    /// Decode a node, treating anything that does not fit as `Other`.
    ///
    /// One malformed node must not make the whole offer unreadable.
    pub fn from_value(value: Value) -> Self {
        Block::deserialize(value).unwrap_or(Block::Other)
    }

    pub fn text(children: &[&str]) -> Self {
        Block::Text {
            children: children.iter().map(|t| Span::new(t)).collect(),
        }
    }
}

/// An inline child of a text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
}

impl Span {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }
}

/// Decode an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| T::deserialize(v).ok()))
}

/// Accept only string text; inline objects may carry other shapes.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// An image field pointing at a CMS asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Asset document id, e.g. `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg`
    #[serde(rename = "_ref", default)]
    pub reference: Option<String>,

    /// Present when the query dereferenced the asset (`asset->`)
    #[serde(default)]
    pub url: Option<String>,
}

impl ImageRef {
    pub fn from_reference(reference: &str) -> Self {
        Self {
            asset: Some(AssetRef {
                reference: Some(reference.to_string()),
                url: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_offer_json() -> Value {
        json!({
            "_id": "offer-1",
            "_type": "offer",
            "slug": { "_type": "slug", "current": "romantyczny-weekend" },
            "plname": "Romantyczny weekend",
            "enname": "Romantic weekend",
            "pldescription": [
                {
                    "_type": "block",
                    "_key": "a1",
                    "style": "normal",
                    "markDefs": [],
                    "children": [
                        { "_type": "span", "_key": "s1", "text": "Dwie noce ", "marks": [] },
                        { "_type": "span", "_key": "s2", "text": "we dwoje.", "marks": ["strong"] }
                    ]
                }
            ],
            "endescription": [
                { "_type": "block", "children": [{ "_type": "span", "text": "Two nights." }] },
                { "_type": "image", "asset": { "_ref": "image-abc-10x10-png" } }
            ],
            "price": 1299.0,
            "currency": "PLN",
            "image": {
                "_type": "image",
                "asset": { "_ref": "image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg", "_type": "reference" }
            }
        })
    }

    #[test]
    fn test_offer_deserialization() {
        let offer: Offer = serde_json::from_value(sample_offer_json()).expect("Should deserialize");

        assert_eq!(offer.id, "offer-1");
        assert_eq!(offer.slug.as_deref(), Some("romantyczny-weekend"));
        assert_eq!(offer.name("pl"), Some("Romantyczny weekend"));
        assert_eq!(offer.name("en"), Some("Romantic weekend"));
        assert_eq!(offer.price, Some(1299.0));
        assert_eq!(offer.currency.as_deref(), Some("PLN"));
        assert_eq!(
            offer.image,
            Some(ImageRef::from_reference(
                "image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg"
            ))
        );
    }

    #[test]
    fn test_offer_description_blocks() {
        let offer: Offer = serde_json::from_value(sample_offer_json()).unwrap();

        let pl = offer.description("pl").unwrap();
        assert_eq!(pl, &[Block::text(&["Dwie noce ", "we dwoje."])]);

        let en = offer.description("en").unwrap();
        assert_eq!(en.len(), 2);
        assert_eq!(en[1], Block::Other);
    }

    #[test]
    fn test_offer_wrongly_typed_fields_become_absent() {
        let offer: Offer = serde_json::from_value(json!({
            "_id": "x",
            "slug": "not-an-object",
            "plname": "Pakiet",
            "price": "300",
            "currency": 985,
            "image": "image-abc-10x10-png"
        }))
        .unwrap();

        assert_eq!(offer.name("pl"), Some("Pakiet"));
        assert_eq!(offer.slug, None);
        assert_eq!(offer.price, None);
        assert_eq!(offer.currency, None);
        assert_eq!(offer.image, None);
    }

    #[test]
    fn test_offer_minimal_fields() {
        let offer: Offer = serde_json::from_value(json!({ "_id": "bare" })).unwrap();

        assert!(offer.names.is_empty());
        assert!(offer.descriptions.is_empty());
        assert_eq!(offer.price, None);
        assert_eq!(offer.currency, None);
        assert_eq!(offer.image, None);
        assert_eq!(offer.slug, None);
    }

    #[test]
    fn test_offer_ignores_unknown_language_fields() {
        let offer: Offer =
            serde_json::from_value(json!({ "_id": "x", "dename": "Wochenende" })).unwrap();
        assert!(offer.names.is_empty());
    }

    #[test]
    fn test_offer_null_fields() {
        let offer: Offer = serde_json::from_value(json!({
            "_id": "x",
            "plname": null,
            "price": null,
            "currency": null,
            "image": null
        }))
        .unwrap();

        assert_eq!(offer.name("pl"), None);
        assert_eq!(offer.price, None);
    }

    #[test]
    fn test_block_unknown_type_is_other() {
        let block = Block::from_value(json!({ "_type": "youtube", "url": "https://..." }));
        assert_eq!(block, Block::Other);
    }

    #[test]
    fn test_block_malformed_is_other() {
        assert_eq!(Block::from_value(json!("just a string")), Block::Other);
        assert_eq!(Block::from_value(json!({ "children": [] })), Block::Other);
        assert_eq!(
            Block::from_value(json!({ "_type": "block", "children": "oops" })),
            Block::Other
        );
    }

    #[test]
    fn test_span_without_text() {
        let block = Block::from_value(json!({
            "_type": "block",
            "children": [
                { "_type": "span", "text": "a" },
                { "_type": "inlineIcon", "name": "star" },
                { "_type": "span", "text": 42 }
            ]
        }));

        assert_eq!(
            block,
            Block::Text {
                children: vec![Span::new("a"), Span { text: None }, Span { text: None }]
            }
        );
    }
}
