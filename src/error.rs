use thiserror::Error;

/// Error types for translator registration and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A locale string is not `LL` or `LL_RR`
    #[error("'{0}' is not a valid locale string")]
    InvalidLocale(String),
    /// A translator was declared without a `lang` field
    #[error("{translator} is missing the 'lang' attribute")]
    MissingLanguageTag { translator: String },
    /// Two translators disagree on their string identifiers
    #[error("String ID '{id}' from '{present_in}' is missing at '{missing_from}'")]
    InconsistentStringSet {
        id: String,
        present_in: String,
        missing_from: String,
    },
    /// A lookup asked for an identifier the resolved translator does not declare
    #[error("String ID '{id}' is not declared by '{translator}'")]
    UnknownIdentifier { id: String, translator: String },
    /// An in-memory translator declaration could not be read
    #[error("Invalid translator declaration: {0}")]
    InvalidDeclaration(String),
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, Error>;
