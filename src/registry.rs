//! Registry of installed translators
//!
//! # Invariants
//!
//! 1. **Insertion order is kept**: it is the tie-break order used by the
//!    [resolver](crate::resolver).
//!
//! 2. **Identical identifier sets**: every installed translator declares
//!    exactly the identifiers of the first one, so a lookup can never hit a
//!    partially translated table.
//!
//! 3. **Identity, not equality**: a translator is a duplicate only when the
//!    same `Arc` is installed again. Two separately built translators with
//!    equal contents are both kept.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing `lang` | Translator declared without a locale | `MissingLanguageTag` |
//! | Bad `lang` | Not `LL` / `LL_RR` | `InvalidLocale` |
//! | Identifier mismatch | Key present on one side only | `InconsistentStringSet` |
//! | Duplicate handle | Same `Arc` installed twice | No-op |

use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::locale::LocaleCode;
use crate::translator::Translator;

#[derive(Debug, Clone)]
struct Installed {
    locale: LocaleCode,
    translator: Arc<Translator>,
}

/// Ordered set of installed translators
#[derive(Debug, Clone, Default)]
pub struct TranslatorSet {
    installed: Vec<Installed>,
}

impl TranslatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a translator
    ///
    /// Returns `Ok(false)` when this exact translator is already installed.
    ///
    /// # Errors
    ///
    /// See the failure modes in the module documentation. A failed install
    /// leaves the set untouched.
    pub fn install(&mut self, translator: Arc<Translator>) -> Result<bool> {
        let lang = translator
            .lang()
            .ok_or_else(|| Error::MissingLanguageTag {
                translator: translator.name().to_string(),
            })?;
        let locale = LocaleCode::parse(lang)?;

        if self.contains(&translator) {
            debug!(translator = translator.name(), "translator already installed");
            return Ok(false);
        }

        if let Some(reference) = self.installed.first() {
            check_string_ids(&translator, &reference.translator)?;
        }

        debug!(
            translator = translator.name(),
            locale = %locale,
            position = self.installed.len(),
            "installed translator"
        );
        self.installed.push(Installed { locale, translator });
        Ok(true)
    }

    /// Whether this exact translator is installed
    pub fn contains(&self, translator: &Arc<Translator>) -> bool {
        self.installed
            .iter()
            .any(|entry| Arc::ptr_eq(&entry.translator, translator))
    }

    /// Snapshot of the installed translators in installation order
    pub fn list(&self) -> Vec<Arc<Translator>> {
        self.installed
            .iter()
            .map(|entry| Arc::clone(&entry.translator))
            .collect()
    }

    /// Installed translators with their decoded locales, in installation order
    pub fn entries(&self) -> impl Iterator<Item = (&LocaleCode, &Arc<Translator>)> {
        self.installed
            .iter()
            .map(|entry| (&entry.locale, &entry.translator))
    }

    pub fn len(&self) -> usize {
        self.installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    pub fn clear(&mut self) {
        self.installed.clear();
    }
}

/// Both translators must declare exactly the same identifiers
fn check_string_ids(candidate: &Translator, reference: &Translator) -> Result<()> {
    missing_id(candidate, reference)?;
    missing_id(reference, candidate)
}

fn missing_id(from: &Translator, at: &Translator) -> Result<()> {
    match from.keys().find(|key| !at.contains(key)) {
        Some(id) => Err(Error::InconsistentStringSet {
            id: id.to_string(),
            present_in: from.name().to_string(),
            missing_from: at.name().to_string(),
        }),
        None => Ok(()),
    }
}
