use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::direction::Direction;
use crate::error::{TranslatorError, TranslatorResult};

/// A term table mapping phrases in one dialect to their equivalent in the other.
///
/// Keys are stored lowercase so lookups are case-insensitive. Values keep the
/// casing they were given (e.g. proper nouns like "Tylenol").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary(HashMap<String, String>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary(HashMap::new())
    }

    /// Add a term, replacing any previous value for the same key. Empty keys are ignored.
    pub fn with_term(&mut self, key: &str, value: &str) -> &mut Self {
        let key = key.trim().to_lowercase();
        if !key.is_empty() {
            self.0.insert(key, value.to_owned());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(&key.to_lowercase())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Swap keys and values.
    ///
    /// Fails when two entries share a value, since the inverted table could
    /// then only keep one of them.
    pub fn inverted(&self) -> TranslatorResult<Dictionary> {
        let mut inverted: HashMap<String, String> = HashMap::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match inverted.entry(value.trim().to_lowercase()) {
                Entry::Occupied(existing) => {
                    return Err(TranslatorError::InversionCollision(format!(
                        "'{}' and '{}' both translate to '{}'",
                        existing.get(),
                        key,
                        value
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(key.clone());
                }
            }
        }
        Ok(Dictionary(inverted))
    }

    /// Add every entry of `other` whose key is not already present
    fn absorb(&mut self, other: Dictionary) {
        for (key, value) in other.0 {
            self.0.entry(key).or_insert(value);
        }
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.with_term(&key, &value);
        }
        dictionary
    }
}

/// The four term tables the translator draws from
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    /// Terms only used in American English, already in American -> British form
    pub american_only: Dictionary,
    /// Terms only used in British English, already in British -> American form
    pub british_only: Dictionary,
    /// Spelling variants, American -> British
    pub american_to_british_spelling: Dictionary,
    /// Title abbreviations, American -> British (e.g. "mr." -> "mr")
    pub american_to_british_titles: Dictionary,
}

impl Dictionaries {
    /// Merge the tables that apply to `direction` into one replace-from -> replace-to mapping.
    ///
    /// For American to British this is the American-only terms plus the spelling and
    /// title pairs as stored. For British to American it is the British-only terms plus
    /// the spelling and title pairs inverted. When a key is contributed by more than one
    /// table, the earlier table in that order keeps it.
    pub fn build_mapping(&self, direction: Direction) -> TranslatorResult<Dictionary> {
        let mut mapping = Dictionary::new();
        match direction {
            Direction::AmericanToBritish => {
                mapping.absorb(self.american_only.clone());
                mapping.absorb(self.american_to_british_spelling.clone());
                mapping.absorb(self.american_to_british_titles.clone());
            }
            Direction::BritishToAmerican => {
                mapping.absorb(self.british_only.clone());
                mapping.absorb(self.american_to_british_spelling.inverted()?);
                mapping.absorb(self.american_to_british_titles.inverted()?);
            }
        }
        Ok(mapping)
    }
}
