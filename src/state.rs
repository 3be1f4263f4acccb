//! Translation state
//!
//! [`TranslationState`] owns the active locale and the installed
//! translators, and caches which translator serves lookups. The cache is
//! marked dirty by every install and every locale change, and recomputed by
//! the first lookup that follows.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::environment::{LocaleProvider, SystemLocale, detect_locale};
use crate::error::{Error, Result};
use crate::locale::LocaleCode;
use crate::registry::TranslatorSet;
use crate::resolver;
use crate::translator::{StringId, Translator};

/// Active locale, installed translators and the cached resolution
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use appstrings::{FixedLocale, StringId, TranslationState, Translator};
///
/// const TEST: StringId<'static> = StringId::new("TEST", "Hello world!");
///
/// let mut state = TranslationState::with_provider(FixedLocale::new("en_US"));
/// state
///     .install(Arc::new(Translator::new("EN").with_lang("en").with_string("TEST", "Hello world!")))
///     .unwrap();
/// state
///     .install(Arc::new(Translator::new("ES_MX").with_lang("es_MX").with_string("TEST", "¡Hola mundo!")))
///     .unwrap();
///
/// state.set_locale(Some("es_MX")).unwrap();
/// assert_eq!(state.lookup(TEST), "¡Hola mundo!");
///
/// state.set_locale(Some("pt")).unwrap();
/// assert_eq!(state.lookup(TEST), "Hello world!");
/// ```
#[derive(Debug)]
pub struct TranslationState {
    active_locale: Option<LocaleCode>,
    translators: TranslatorSet,
    resolved: Option<Arc<Translator>>,
    dirty: bool,
    provider: Box<dyn LocaleProvider>,
}

impl Default for TranslationState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationState {
    /// Create a state whose active locale comes from the host
    pub fn new() -> Self {
        Self::with_provider(SystemLocale)
    }

    /// Create a state reading the host locale from `provider`
    pub fn with_provider(provider: impl LocaleProvider + 'static) -> Self {
        let provider: Box<dyn LocaleProvider> = Box::new(provider);
        let active_locale = detect_locale(provider.as_ref());
        TranslationState {
            active_locale,
            translators: TranslatorSet::new(),
            resolved: None,
            dirty: true,
            provider,
        }
    }

    /// Install a translator
    ///
    /// Installing a translator that is already installed does nothing.
    ///
    /// # Errors
    ///
    /// `MissingLanguageTag`, `InvalidLocale` or `InconsistentStringSet`; see
    /// [`TranslatorSet::install`].
    pub fn install(&mut self, translator: Arc<Translator>) -> Result<()> {
        self.dirty = true;
        self.translators.install(translator)?;
        Ok(())
    }

    /// Set the active locale, or re-read it from the host when `None`
    ///
    /// # Errors
    ///
    /// `InvalidLocale` if `locale` is not `LL` or `LL_RR`. The active locale
    /// is left unchanged in that case.
    pub fn set_locale(&mut self, locale: Option<&str>) -> Result<()> {
        self.active_locale = match locale {
            Some(locale) => Some(LocaleCode::parse(locale)?),
            None => detect_locale(self.provider.as_ref()),
        };
        self.dirty = true;
        Ok(())
    }

    pub fn active_locale(&self) -> Option<&LocaleCode> {
        self.active_locale.as_ref()
    }

    /// The active locale as `LL` or `LL_RR`, empty when unknown
    pub fn get_locale(&self) -> String {
        self.active_locale
            .as_ref()
            .map(LocaleCode::to_string)
            .unwrap_or_default()
    }

    /// The translator lookups are served from, if any matches
    pub fn resolved(&mut self) -> Option<Arc<Translator>> {
        self.refresh();
        self.resolved.clone()
    }

    /// Translate `id`
    ///
    /// Falls back to the identifier's default text when no translator
    /// matches the active locale.
    ///
    /// # Errors
    ///
    /// `UnknownIdentifier` if a translator matched but does not declare `id`.
    pub fn try_lookup(&mut self, id: StringId<'_>) -> Result<String> {
        self.refresh();
        match &self.resolved {
            Some(translator) => translator
                .get(id.key())
                .map(str::to_string)
                .ok_or_else(|| Error::UnknownIdentifier {
                    id: id.key().to_string(),
                    translator: translator.name().to_string(),
                }),
            None => Ok(id.default_text().to_string()),
        }
    }

    /// Translate `id`, falling back to its default text on any failure
    pub fn lookup(&mut self, id: StringId<'_>) -> String {
        self.try_lookup(id).unwrap_or_else(|err| {
            warn!(%err, "lookup outside the declared identifiers");
            id.default_text().to_string()
        })
    }

    /// Snapshot of the installed translators in installation order
    pub fn list_installed(&self) -> Vec<Arc<Translator>> {
        self.translators.list()
    }

    /// Drop every translator and re-read the host locale
    pub fn reset(&mut self) {
        self.translators.clear();
        self.active_locale = detect_locale(self.provider.as_ref());
        self.resolved = None;
        self.dirty = true;
    }

    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }

        self.resolved = match &self.active_locale {
            Some(active) => resolver::resolve(active, self.translators.entries()).cloned(),
            None => None,
        };
        self.dirty = false;

        debug!(
            locale = %self.get_locale(),
            translator = self.resolved.as_ref().map(|t| t.name()).unwrap_or("<none>"),
            "resolved translator"
        );
    }
}
