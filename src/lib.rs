//! Dictionary-driven translation between American and British English
//!
//! Known vocabulary, spellings, titles and clock times are substituted, and every
//! changed span is wrapped in a highlight marker.
//!
//! ```ignore
//! use dialect_translator::{Direction, translate};
//!
//! assert_eq!(
//!     translate("Mangoes are my favorite fruit.", Direction::AmericanToBritish),
//!     r#"Mangoes are my <span class="highlight">favourite</span> fruit."#
//! );
//! assert_eq!(
//!     translate("Everything looks good to me!", Direction::BritishToAmerican),
//!     "Everything looks good to me!"
//! );
//! ```

pub mod dictionary;
pub mod direction;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod loader;

pub use dictionary::{Dictionaries, Dictionary};
pub use direction::Direction;
pub use engine::{
    Replacement, ReplacementKind, SENTINEL, Translation, Translator, default_translator,
    translate,
};
pub use error::{TranslatorError, TranslatorResult};
pub use highlight::{Marker, diff_highlight, split_word_boundaries};
pub use loader::{load_dictionaries_from_dir, load_dictionary_from_file, parse_dictionary};
