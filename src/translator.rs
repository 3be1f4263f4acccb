//! Translators and string identifiers
//!
//! A [`Translator`] is a table of localized strings for one locale, declared
//! in memory by the embedding application. Its `lang` tag says which locale
//! it covers; every other metadata field is informational and never takes
//! part in matching or in the identifier consistency check.
//!
//! Translators can be built in code or read from an in-memory JSON document
//! in the MediaWiki-style message format, with an `@metadata` object:
//!
//! ```json
//! {
//!     "@metadata": { "lang": "es_MX", "domain": "appstrings.example" },
//!     "TEST": "¡Hola mundo!"
//! }
//! ```

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// Metadata field holding the translator's locale
pub const LANG_FIELD: &str = "lang";

/// Key of the metadata object in JSON declarations
pub const METADATA_KEY: &str = "@metadata";

/// Identifier of a translatable string, carrying its intrinsic default text
///
/// The default is what [`lookup`](crate::TranslationState::lookup) returns
/// when no installed translator matches the active locale.
///
/// ```
/// use appstrings::StringId;
///
/// const GREETING: StringId<'static> = StringId::new("GREETING", "Hello world!");
/// assert_eq!(GREETING.key(), "GREETING");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringId<'a> {
    key: &'a str,
    default_text: &'a str,
}

impl<'a> StringId<'a> {
    pub const fn new(key: &'a str, default_text: &'a str) -> Self {
        Self { key, default_text }
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn default_text(&self) -> &'a str {
        self.default_text
    }
}

/// Localized strings for a single locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    name: String,
    lang: Option<String>,
    metadata: BTreeMap<String, String>,
    strings: BTreeMap<String, String>,
}

impl Translator {
    /// Create an empty translator
    ///
    /// The name only identifies the translator in errors and logs.
    pub fn new(name: impl Into<String>) -> Self {
        Translator {
            name: name.into(),
            lang: None,
            metadata: BTreeMap::new(),
            strings: BTreeMap::new(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Attach a metadata field. `lang` is routed to [`Translator::with_lang`].
    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        if key == LANG_FIELD {
            return self.with_lang(value);
        }
        self.metadata.insert(key.to_owned(), value.into());
        self
    }

    pub fn with_string(mut self, key: &str, text: impl Into<String>) -> Self {
        self.strings.insert(key.to_owned(), text.into());
        self
    }

    /// Read a translator from a JSON document
    ///
    /// Top-level string members are identifiers; members starting with `@`
    /// are skipped, except `@metadata` whose string fields become metadata.
    /// Non-string messages are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDeclaration`] if the document is not valid JSON
    /// or its root (or its `@metadata`) is not an object. A missing `lang` is
    /// not an error here; it is reported when the translator is installed.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        let mut translator = Translator::new(name);

        let value: Value = serde_json::from_str(json).map_err(|e| {
            Error::InvalidDeclaration(format!("'{}': {}", translator.name, e))
        })?;
        let obj = value.as_object().ok_or_else(|| {
            Error::InvalidDeclaration(format!("'{}': root must be an object", translator.name))
        })?;

        for (key, value) in obj {
            if key == METADATA_KEY {
                let fields = value.as_object().ok_or_else(|| {
                    Error::InvalidDeclaration(format!(
                        "'{}': {} must be an object",
                        translator.name, METADATA_KEY
                    ))
                })?;
                for (field, value) in fields {
                    match value.as_str() {
                        Some(text) => translator = translator.with_metadata(field, text),
                        None => warn!(
                            translator = %translator.name,
                            "metadata field '{}' is not a string, skipping", field
                        ),
                    }
                }
                continue;
            }

            if key.starts_with('@') {
                continue;
            }

            match value.as_str() {
                Some(text) => translator = translator.with_string(key, text),
                None => warn!(
                    translator = %translator.name,
                    "message '{}' is not a string, skipping", key
                ),
            }
        }

        Ok(translator)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw `lang` tag, as declared
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Identifiers in key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Use this translator as the reference declaration for `key`
    ///
    /// The returned identifier defaults to this translator's text.
    pub fn id(&self, key: &str) -> Option<StringId<'_>> {
        self.strings
            .get_key_value(key)
            .map(|(key, text)| StringId::new(key, text))
    }
}

impl Serialize for Translator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut metadata = self.metadata.clone();
        if let Some(lang) = &self.lang {
            metadata.insert(LANG_FIELD.to_string(), lang.clone());
        }

        let mut map = serializer.serialize_map(Some(self.strings.len() + 1))?;
        map.serialize_entry(METADATA_KEY, &metadata)?;
        for (key, text) in &self.strings {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn es_mx() -> Translator {
        Translator::new("ES_MX")
            .with_lang("es_MX")
            .with_metadata("domain", "appstrings.example")
            .with_string("TEST", "¡Hola mundo!")
    }

    #[test]
    fn test_builder() {
        let translator = es_mx();
        assert_eq!(translator.name(), "ES_MX");
        assert_eq!(translator.lang(), Some("es_MX"));
        assert_eq!(translator.metadata("domain"), Some("appstrings.example"));
        assert_eq!(translator.get("TEST"), Some("¡Hola mundo!"));
        assert_eq!(translator.get("OTHER"), None);
        assert_eq!(translator.len(), 1);
    }

    #[test]
    fn test_metadata_is_not_an_identifier() {
        let translator = es_mx();
        assert!(!translator.contains("domain"));
        assert_eq!(translator.keys().collect::<Vec<_>>(), vec!["TEST"]);
    }

    #[test]
    fn test_lang_metadata_sets_lang() {
        let translator = Translator::new("EN").with_metadata("lang", "en");
        assert_eq!(translator.lang(), Some("en"));
        assert_eq!(translator.metadata("lang"), None);
    }

    #[test]
    fn test_id_uses_reference_text() {
        let translator = es_mx();
        let id = translator.id("TEST").unwrap();
        assert_eq!(id.key(), "TEST");
        assert_eq!(id.default_text(), "¡Hola mundo!");
        assert!(translator.id("MISSING").is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "@metadata": { "lang": "es_MX", "domain": "appstrings.example", "authors": ["x"] },
            "@comment": "ignored",
            "TEST": "¡Hola mundo!",
            "COUNT": 3
        }"#;
        let translator = Translator::from_json("ES_MX", json).unwrap();
        assert_eq!(translator.lang(), Some("es_MX"));
        assert_eq!(translator.metadata("domain"), Some("appstrings.example"));
        assert_eq!(translator.metadata("authors"), None);
        assert_eq!(translator.keys().collect::<Vec<_>>(), vec!["TEST"]);
    }

    #[test]
    fn test_from_json_without_lang() {
        let translator = Translator::from_json("NOLANG", r#"{"TEST": "x"}"#).unwrap();
        assert_eq!(translator.lang(), None);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Translator::from_json("BAD", "[1, 2]"),
            Err(Error::InvalidDeclaration(_))
        ));
        assert!(matches!(
            Translator::from_json("BAD", "{"),
            Err(Error::InvalidDeclaration(_))
        ));
        assert!(matches!(
            Translator::from_json("BAD", r#"{"@metadata": "es"}"#),
            Err(Error::InvalidDeclaration(_))
        ));
    }

    #[test]
    fn test_serialize_reads_back() {
        let translator = es_mx();
        let json = serde_json::to_string(&translator).unwrap();
        assert_eq!(Translator::from_json("ES_MX", &json).unwrap(), translator);
    }
}
