//! Internationalization (i18n) module for multi-language support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their locale data
//! - `language`: Validated `Language` handle and `Accept-Language` negotiation
//! - `dictionary`: Per-language UI text keyed by dotted paths, and its loader
//! - `format`: Locale-aware currency and date formatting
//! - `validator`: Dictionary key parity checks
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{format_currency, Dictionary, Language};
//!
//! let polish = Language::from_code("pl")?;
//! let dict = Dictionary::embedded(polish);
//! let label = dict.t("common.bookNow");
//! let price = format_currency(200.0, "PLN", polish); // "200 zł"
//! ```

mod dictionary;
mod format;
mod language;
mod registry;
mod validator;

pub use dictionary::{Dictionary, DictionaryLoader};
pub use format::{format_currency, format_date, NumberFormat, SymbolPlacement};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{DictionaryValidator, ValidationReport};
