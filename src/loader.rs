use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde_json::Value;
use tracing::{debug, warn};

use crate::dictionary::{Dictionaries, Dictionary};
use crate::error::{TranslatorError, TranslatorResult};

pub const AMERICAN_ONLY_FILE: &str = "american-only.json";
pub const BRITISH_ONLY_FILE: &str = "british-only.json";
pub const SPELLING_FILE: &str = "american-to-british-spelling.json";
pub const TITLES_FILE: &str = "american-to-british-titles.json";

const EMBEDDED_AMERICAN_ONLY: &str = include_str!("../data/american-only.json");
const EMBEDDED_BRITISH_ONLY: &str = include_str!("../data/british-only.json");
const EMBEDDED_SPELLING: &str = include_str!("../data/american-to-british-spelling.json");
const EMBEDDED_TITLES: &str = include_str!("../data/american-to-british-titles.json");

static EMBEDDED: LazyLock<Dictionaries> = LazyLock::new(|| Dictionaries {
    american_only: parse_embedded(AMERICAN_ONLY_FILE, EMBEDDED_AMERICAN_ONLY),
    british_only: parse_embedded(BRITISH_ONLY_FILE, EMBEDDED_BRITISH_ONLY),
    american_to_british_spelling: parse_embedded(SPELLING_FILE, EMBEDDED_SPELLING),
    american_to_british_titles: parse_embedded(TITLES_FILE, EMBEDDED_TITLES),
});

impl Dictionaries {
    /// The dictionaries compiled into the crate
    pub fn embedded() -> &'static Dictionaries {
        &EMBEDDED
    }
}

fn parse_embedded(name: &str, content: &str) -> Dictionary {
    match parse_dictionary(name, content) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            // Only reachable if a bundled data file is broken; covered by tests
            warn!("Embedded dictionary {} is unusable: {}", name, e);
            Dictionary::new()
        }
    }
}

/// Parse a dictionary from JSON text
///
/// The JSON should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "parking lot": "car park",
///     "trashcan": "bin"
/// }
/// ```
///
/// `origin` is only used in error messages.
pub fn parse_dictionary(origin: &str, content: &str) -> TranslatorResult<Dictionary> {
    let json: Value = serde_json::from_str(content).map_err(|e| {
        TranslatorError::DictionaryLoad(format!("Failed to parse JSON from '{}': {}", origin, e))
    })?;

    let obj = json.as_object().ok_or_else(|| {
        TranslatorError::DictionaryLoad(format!(
            "Invalid JSON in '{}': root must be an object",
            origin
        ))
    })?;

    let mut dictionary = Dictionary::new();
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        if let Some(term) = value.as_str() {
            dictionary.with_term(key, term);
        } else {
            warn!("Term '{}' in '{}' is not a string, skipping", key, origin);
        }
    }

    debug!("Loaded {} terms from {}", dictionary.len(), origin);
    Ok(dictionary)
}

/// Load a single dictionary from a JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON, or a root that is not an object
pub fn load_dictionary_from_file(path: &Path) -> TranslatorResult<Dictionary> {
    let content = fs::read_to_string(path).map_err(|e| {
        TranslatorError::DictionaryLoad(format!(
            "Failed to read file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_dictionary(&path.display().to_string(), &content)
}

/// Load all four dictionaries from a directory
///
/// The directory must contain `american-only.json`, `british-only.json`,
/// `american-to-british-spelling.json` and `american-to-british-titles.json`.
pub fn load_dictionaries_from_dir(dir: &Path) -> TranslatorResult<Dictionaries> {
    if !dir.is_dir() {
        return Err(TranslatorError::DictionaryLoad(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    Ok(Dictionaries {
        american_only: load_dictionary_from_file(&dir.join(AMERICAN_ONLY_FILE))?,
        british_only: load_dictionary_from_file(&dir.join(BRITISH_ONLY_FILE))?,
        american_to_british_spelling: load_dictionary_from_file(&dir.join(SPELLING_FILE))?,
        american_to_british_titles: load_dictionary_from_file(&dir.join(TITLES_FILE))?,
    })
}
