//! Dictionary completeness validation.
//!
//! Compares a translated dictionary against the default language's dictionary
//! so that untranslated keys are caught at startup instead of showing up as
//! raw key paths on a live page.

use crate::i18n::Dictionary;
use serde_json::Value;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Key paths whose text cannot be rendered at all
    pub errors: Vec<String>,

    /// Key paths that are present but suspicious
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for dictionary key parity.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Check that every string leaf in `reference` is translated in `candidate`.
    ///
    /// - missing key or non-string value where the reference has a string: error
    /// - empty string where the reference has text: warning
    /// - keys only present in the candidate: warning
    pub fn validate(reference: &Dictionary, candidate: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (path, value) in Self::string_leaves(reference.root()) {
            match candidate.lookup(&path) {
                None => report.errors.push(format!("Missing key: {}", path)),
                Some(Value::String(s)) if s.is_empty() && !value.is_empty() => {
                    report.warnings.push(format!("Empty translation: {}", path))
                }
                Some(Value::String(_)) => {}
                Some(_) => report.errors.push(format!("Expected text at: {}", path)),
            }
        }

        for (path, _) in Self::string_leaves(candidate.root()) {
            if reference.lookup(&path).is_none() {
                report.warnings.push(format!("Unused key: {}", path));
            }
        }

        report
    }

    /// All `(dotted path, text)` pairs for string leaves, sorted by key at each level.
    fn string_leaves(root: &Value) -> Vec<(String, String)> {
        let mut leaves = Vec::new();
        Self::collect(root, String::new(), &mut leaves);
        leaves
    }

    fn collect(node: &Value, prefix: String, out: &mut Vec<(String, String)>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    Self::collect(child, path, out);
                }
            }
            Value::String(s) if !prefix.is_empty() => out.push((prefix, s.clone())),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use serde_json::json;

    #[test]
    fn test_identical_dictionaries_are_clean() {
        let dict = Dictionary::new(json!({"a": {"b": "x"}, "c": "y"}));
        assert!(DictionaryValidator::validate(&dict, &dict).is_clean());
    }

    #[test]
    fn test_string_leaves_are_sorted_by_key() {
        let dict = Dictionary::from_json(r#"{"z": "1", "a": {"y": "2", "b": "3"}, "m": 4}"#).unwrap();

        let paths: Vec<_> = DictionaryValidator::string_leaves(dict.root())
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(paths, vec!["a.b", "a.y", "z"]);
    }

    #[test]
    fn test_missing_key_is_error() {
        let reference = Dictionary::new(json!({"spa": {"title": "SPA", "intro": "..."}}));
        let candidate = Dictionary::new(json!({"spa": {"title": "SPA"}}));

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert_eq!(report.errors, vec!["Missing key: spa.intro".to_string()]);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_object_where_text_expected_is_error() {
        let reference = Dictionary::new(json!({"title": "Hotel"}));
        let candidate = Dictionary::new(json!({"title": {"main": "Hotel"}}));

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert_eq!(report.errors, vec!["Expected text at: title".to_string()]);
        assert_eq!(report.warnings, vec!["Unused key: title.main".to_string()]);
    }

    #[test]
    fn test_empty_translation_is_warning() {
        let reference = Dictionary::new(json!({"title": "Hotel"}));
        let candidate = Dictionary::new(json!({"title": ""}));

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert!(!report.has_errors());
        assert_eq!(report.warnings, vec!["Empty translation: title".to_string()]);
    }

    #[test]
    fn test_extra_key_is_warning() {
        let reference = Dictionary::new(json!({"a": "x"}));
        let candidate = Dictionary::new(json!({"a": "x", "b": "y"}));

        let report = DictionaryValidator::validate(&reference, &candidate);
        assert_eq!(report.warnings, vec!["Unused key: b".to_string()]);
    }

    #[test]
    fn test_embedded_dictionaries_have_parity() {
        let reference = Dictionary::embedded(Language::default_language());
        for language in Language::all() {
            let report =
                DictionaryValidator::validate(&reference, &Dictionary::embedded(language));
            assert!(report.is_clean(), "{}: {:?}", language, report);
        }
    }
}
