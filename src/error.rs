/// Error types for dictionary loading and translator construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// A direction string that is neither `american-to-british` nor `british-to-american`
    InvalidLocale(String),
    /// A dictionary file or directory could not be read or parsed
    DictionaryLoad(String),
    /// Inverting a dictionary would map two entries onto the same key
    InversionCollision(String),
    /// A dictionary key could not be compiled into a match rule
    Pattern(String),
}

impl std::fmt::Display for TranslatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslatorError::InvalidLocale(locale) => {
                write!(f, "Invalid value for locale field: {}", locale)
            }
            TranslatorError::DictionaryLoad(msg) => write!(f, "Dictionary load error: {}", msg),
            TranslatorError::InversionCollision(msg) => {
                write!(f, "Dictionary inversion collision: {}", msg)
            }
            TranslatorError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl std::error::Error for TranslatorError {}

/// Result type for translator operations
pub type TranslatorResult<T> = Result<T, TranslatorError>;
