//! Host locale detection
//!
//! The active locale falls back to the host when the caller does not set one.
//! [`SystemLocale`] consults, in order:
//!
//! 1. The `APPSTRINGS_LOCALE` environment variable.
//! 2. The operating system locale, as reported by `sys-locale`.
//!
//! Tests and embedders that must not depend on the host use [`FixedLocale`].

use std::env;
use std::fmt;

use tracing::{debug, warn};

use crate::locale::LocaleCode;

/// Environment variable overriding the system locale
pub const LOCALE_ENV_VAR: &str = "APPSTRINGS_LOCALE";

/// Source of the host locale string
pub trait LocaleProvider: fmt::Debug + Send + Sync {
    /// Raw locale string, in whatever shape the host reports it
    fn host_locale(&self) -> Option<String>;
}

/// Where a host locale came from
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Locale taken from `APPSTRINGS_LOCALE`
    EnvironmentVariable,
    /// Locale reported by the operating system
    System,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvironmentVariable => f.write_str(LOCALE_ENV_VAR),
            Self::System => f.write_str("system locale"),
        }
    }
}

/// Host locale from `APPSTRINGS_LOCALE` or the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl SystemLocale {
    /// The host locale together with its source
    pub fn lookup(&self) -> Option<(LocaleSource, String)> {
        let from_var = env::var(LOCALE_ENV_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        match from_var {
            Some(value) => Some((LocaleSource::EnvironmentVariable, value)),
            None => sys_locale::get_locale().map(|value| (LocaleSource::System, value)),
        }
    }
}

impl LocaleProvider for SystemLocale {
    fn host_locale(&self) -> Option<String> {
        let (source, value) = self.lookup()?;
        debug!(%source, locale = %value, "read host locale");
        Some(value)
    }
}

/// A host locale fixed at construction time
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        FixedLocale(Some(locale.into()))
    }

    /// A host that reports no locale at all
    pub fn unknown() -> Self {
        FixedLocale(None)
    }
}

impl LocaleProvider for FixedLocale {
    fn host_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Read and normalize the host locale
///
/// Host locales the two-letter model cannot express (`C`, `fil_PH`, ...)
/// are logged and treated as unknown.
pub fn detect_locale(provider: &dyn LocaleProvider) -> Option<LocaleCode> {
    let Some(raw) = provider.host_locale() else {
        warn!("host locale is unknown");
        return None;
    };

    let locale = LocaleCode::from_host(&raw);
    if locale.is_none() {
        warn!(locale = %raw, "host locale is not usable for translation");
    }
    locale
}
