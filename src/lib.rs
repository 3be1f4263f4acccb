//! Minimal string translation for Rust applications
//!
//! `appstrings` picks, for the active locale, the best translator among the
//! ones an application installs, and serves strings from it. It is not a
//! full internationalization library: no plurals, no message formatting and
//! no catalog files. Translators are plain in-memory tables.
//!
//! # Overview
//!
//! 1. **Locale codes** - `LL` / `LL_RR` pairs, see [`LocaleCode`]
//! 2. **Translators** - string tables tagged with a locale, see [`Translator`]
//! 3. **Registry** - installed translators, all declaring the same
//!    identifiers, see [`TranslatorSet`]
//! 4. **Resolver** - order-sensitive fallback from the active locale to one
//!    translator, see [`resolver::resolve`]
//! 5. **State** - active locale plus cached resolution, see
//!    [`TranslationState`] and the process-wide [`global`] functions
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use appstrings::{FixedLocale, TranslationState, Translator};
//!
//! let en = Arc::new(Translator::new("EN").with_lang("en").with_string("TEST", "Hello world!"));
//! let es_mx = Arc::new(Translator::new("ES_MX").with_lang("es_MX").with_string("TEST", "¡Hola mundo!"));
//!
//! let mut state = TranslationState::with_provider(FixedLocale::new("en_US.UTF-8"));
//! state.install(Arc::clone(&en)).unwrap();
//! state.install(es_mx).unwrap();
//!
//! let test = en.id("TEST").unwrap();
//! assert_eq!(state.lookup(test), "Hello world!");
//!
//! state.set_locale(Some("es_MX")).unwrap();
//! assert_eq!(state.lookup(test), "¡Hola mundo!");
//! ```

pub mod environment;
pub mod error;
pub mod global;
pub mod locale;
pub mod registry;
pub mod resolver;
pub mod state;
pub mod translator;

// End-to-end scenarios (only available during testing)
#[cfg(test)]
mod integration_tests;

pub use environment::{
    FixedLocale, LOCALE_ENV_VAR, LocaleProvider, LocaleSource, SystemLocale, detect_locale,
};
pub use error::{Error, Result};
pub use locale::LocaleCode;
pub use registry::TranslatorSet;
pub use state::TranslationState;
pub use translator::{StringId, Translator};
