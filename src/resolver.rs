//! Localized-field resolution for offers.
//!
//! Turns a CMS offer with per-language fields into the flat, display-ready
//! strings a page needs. Resolution never fails: every missing field has a
//! fallback.

use crate::cms::{Block, Offer};
use crate::i18n::{format_currency, Language};
use std::collections::HashMap;

pub const FALLBACK_NAME: &str = "No title available";
pub const FALLBACK_DESCRIPTION: &str = "No description available";
pub const PLACEHOLDER_NAME: &str = "Package Offer";
pub const PLACEHOLDER_DESCRIPTION: &str = "Details not available";

/// Business conventions for pricing display.
///
/// The per-unit price is the package price split across its nights; the
/// default currency applies to offers that carry none.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRules {
    per_unit_divisor: u32,
    currency_overrides: HashMap<String, String>,
}

impl PricingRules {
    pub const DEFAULT_PER_UNIT_DIVISOR: u32 = 2;

    /// A divisor of 0 is treated as 1.
    pub fn new(per_unit_divisor: u32, currency_overrides: HashMap<String, String>) -> Self {
        Self {
            per_unit_divisor: per_unit_divisor.max(1),
            currency_overrides,
        }
    }

    pub fn per_unit_divisor(&self) -> u32 {
        self.per_unit_divisor
    }

    /// Currency used when an offer has none: configured override, else the
    /// registry default for the language.
    pub fn default_currency(&self, language: Language) -> &str {
        self.currency_overrides
            .get(language.code())
            .map(String::as_str)
            .unwrap_or(language.config().default_currency)
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PER_UNIT_DIVISOR, HashMap::new())
    }
}

/// Display-ready offer fields for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedOffer {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
}

/// Formatted prices for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferPrices {
    pub total: String,
    pub per_unit: String,
}

/// Resolve an offer's fields for the active language.
pub fn localize_offer(offer: &Offer, language: Language, pricing: &PricingRules) -> LocalizedOffer {
    let name = offer
        .name(language.code())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string();

    let description = offer
        .description(language.code())
        .map(flatten_blocks)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

    let price = offer.price.filter(|p| !p.is_nan()).unwrap_or(0.0);

    let currency = offer
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| pricing.default_currency(language))
        .to_string();

    LocalizedOffer {
        name,
        description,
        price,
        currency,
    }
}

/// Fixed content shown when no offer matches the requested slug.
pub fn placeholder_offer(language: Language, pricing: &PricingRules) -> LocalizedOffer {
    LocalizedOffer {
        name: PLACEHOLDER_NAME.to_string(),
        description: PLACEHOLDER_DESCRIPTION.to_string(),
        price: 0.0,
        currency: pricing.default_currency(language).to_string(),
    }
}

/// Concatenate the text of every `block` node's children, in order, with no
/// separators. Other node types contribute nothing.
pub fn flatten_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Text { children } => Some(children),
            Block::Other => None,
        })
        .flatten()
        .filter_map(|span| span.text.as_deref())
        .collect()
}

/// Format the total and per-unit prices of a resolved offer.
pub fn format_prices(
    offer: &LocalizedOffer,
    language: Language,
    pricing: &PricingRules,
) -> OfferPrices {
    let per_unit = offer.price / f64::from(pricing.per_unit_divisor());

    OfferPrices {
        total: format_currency(offer.price, &offer.currency, language),
        per_unit: format_currency(per_unit, &offer.currency, language),
    }
}
