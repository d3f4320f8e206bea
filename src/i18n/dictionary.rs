//! UI dictionaries: nested JSON documents keyed by dotted paths.
//!
//! Every page looks its copy up with `t("spa.title")`-style keys. Missing keys
//! never fail a render: they resolve to the key path itself or to an explicit
//! default supplied by the caller.

use crate::i18n::Language;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

const EMBEDDED_PL: &str = include_str!("../../dictionaries/pl.json");
const EMBEDDED_EN: &str = include_str!("../../dictionaries/en.json");

/// A per-language lookup table for UI text.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// A dictionary with no entries; every lookup falls back.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json).map(Self::new)
    }

    /// The dictionary compiled into the binary for a language.
    ///
    /// Falls back to an empty dictionary for languages without an embedded
    /// file, so adding a language to the registry never breaks rendering.
    pub fn embedded(language: Language) -> Self {
        let source = match language.code() {
            "pl" => EMBEDDED_PL,
            "en" => EMBEDDED_EN,
            _ => return Self::empty(),
        };

        match Self::from_json(source) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!("Embedded dictionary for {} is malformed: {}", language, e);
                Self::empty()
            }
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Walk a dotted path (e.g. "common.bookNow") to any JSON node.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }

    /// Look up a non-empty string at a dotted path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.lookup(path)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Translate a key, falling back to the key path itself.
    pub fn t<'a>(&'a self, path: &'a str) -> &'a str {
        self.get(path).unwrap_or(path)
    }

    /// Translate a key, falling back to a caller-supplied default.
    pub fn t_or<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.get(path).unwrap_or(default)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Loads a fresh dictionary per request.
///
/// With a directory configured, `<dir>/<code>.json` is read from disk on every
/// call, so copy edits go live without a restart. Unreadable or malformed
/// files fall back to the embedded dictionary.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLoader {
    dir: Option<PathBuf>,
}

impl DictionaryLoader {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Loader that only serves the embedded dictionaries.
    pub fn embedded() -> Self {
        Self { dir: None }
    }

    pub async fn load(&self, language: Language) -> Dictionary {
        let Some(dir) = &self.dir else {
            return Dictionary::embedded(language);
        };

        let path = dir.join(format!("{}.json", language.code()));
        debug!("Loading dictionary from {}", path.display());

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "Failed to read dictionary {}: {}, using embedded copy",
                    path.display(),
                    e
                );
                return Dictionary::embedded(language);
            }
        };

        match Dictionary::from_json(&contents) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!(
                    "Failed to parse dictionary {}: {}, using embedded copy",
                    path.display(),
                    e
                );
                Dictionary::embedded(language)
            }
        }
    }
}
