//! Locale codes
//!
//! A [`LocaleCode`] is the `(language, region)` pair every translator is
//! tagged with and the active locale is compared against. Only two shapes are
//! accepted: `LL` and `LL_RR`, where both subtags are two ASCII letters.
//! Parsing is case-insensitive and stores both subtags in lowercase; the
//! display form upper-cases the region (`es_MX`).
//!
//! Host locale strings (`en_US.UTF-8`, `de_DE@euro`, `zh-Hans-CN`) are far
//! looser than that, so [`LocaleCode::from_host`] runs them through
//! `icu_locale` first and keeps only what the two-letter model can express.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use icu_locale::Locale;
use regex::Regex;

use crate::error::{Error, Result};

static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2})(?:_([A-Za-z]{2}))?$").expect("locale pattern is a valid regex")
});

/// A normalized `(language, region)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleCode {
    language: String,
    region: String,
}

impl LocaleCode {
    /// Parse a locale string of the form `LL` or `LL_RR`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] for anything else, including `pt_`,
    /// `en-US` and `en_US.UTF-8`.
    ///
    /// # Example
    ///
    /// ```
    /// use appstrings::LocaleCode;
    ///
    /// let locale = LocaleCode::parse("ES_mx").unwrap();
    /// assert_eq!(locale.language(), "es");
    /// assert_eq!(locale.region(), "mx");
    /// assert_eq!(locale.to_string(), "es_MX");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let captures = LOCALE_PATTERN
            .captures(s)
            .ok_or_else(|| Error::InvalidLocale(s.to_string()))?;

        let language = captures[1].to_ascii_lowercase();
        let region = captures
            .get(2)
            .map(|m| m.as_str().to_ascii_lowercase())
            .unwrap_or_default();

        Ok(Self { language, region })
    }

    /// Normalize a locale string reported by the host
    ///
    /// Strips the POSIX codeset and modifier (`.UTF-8`, `@euro`), accepts
    /// either `_` or `-` as separator and drops script and variant subtags.
    /// Returns `None` for `C`, `POSIX`, three-letter languages, numeric
    /// regions and anything `icu_locale` rejects.
    pub fn from_host(raw: &str) -> Option<Self> {
        let tag = raw.split(['.', '@']).next().unwrap_or_default().trim();
        if tag.is_empty() {
            return None;
        }

        let locale: Locale = tag.replace('_', "-").parse().ok()?;
        let language = locale.id.language.as_str();
        let candidate = match locale.id.region {
            Some(region) => format!("{}_{}", language, region.as_str()),
            None => language.to_string(),
        };

        Self::parse(&candidate).ok()
    }

    /// Two-letter lowercase language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Two-letter lowercase region code, empty for language-only locales
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    /// Convert to an ICU locale (`es-MX`) for callers that format with ICU
    pub fn to_icu(&self) -> Result<Locale> {
        let tag = if self.has_region() {
            format!("{}-{}", self.language, self.region.to_ascii_uppercase())
        } else {
            self.language.clone()
        };
        tag.parse().map_err(|_| Error::InvalidLocale(tag))
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_region() {
            write!(f, "{}_{}", self.language, self.region.to_ascii_uppercase())
        } else {
            f.write_str(&self.language)
        }
    }
}

impl FromStr for LocaleCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
