//! Substitution engine
//!
//! A [`Translator`] compiles the merged mapping of each direction into match rules
//! once, then translates any number of texts without further allocation of rules.
//!
//! # Algorithm
//!
//! 1. **Collect terms** - rules run longest key first against the original text. A match
//!    is kept when it stands alone (no letter, digit or underscore directly before or
//!    after it) and does not overlap a span claimed by a longer key.
//! 2. **Collect times** - `H:MM` / `H.MM` spans are found on the original text, skipping
//!    any that overlap a term span.
//! 3. **Render** - the spans are applied in text order in a single pass, each wrapped in
//!    the translator's [`Marker`].
//!
//! # Example
//!
//! ```ignore
//! use dialect_translator::{Direction, Dictionaries, Translator};
//!
//! let translator = Translator::new(Dictionaries::embedded())?;
//! let translation = translator.translate("The parking lot was full.", Direction::AmericanToBritish);
//! assert_eq!(
//!     translation.text(),
//!     r#"The <span class="highlight">car park</span> was full."#
//! );
//! ```

use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::dictionary::{Dictionaries, Dictionary};
use crate::direction::Direction;
use crate::error::{TranslatorError, TranslatorResult};
use crate::highlight::{Marker, is_word_char};

/// Returned in place of the text when nothing needed translating
pub const SENTINEL: &str = "Everything looks good to me!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementKind {
    /// A dictionary term, spelling or title
    Term,
    /// A clock time whose separator changed
    Time,
}

/// One changed span of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Byte range in the source text
    pub range: Range<usize>,
    /// The source text that was matched
    pub original: String,
    /// What it was replaced with, before highlighting
    pub replacement: String,
    pub kind: ReplacementKind,
}

/// The outcome of translating one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    source: String,
    text: String,
    direction: Direction,
    replacements: Vec<Replacement>,
}

impl Translation {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The translated text, with highlight markup
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Replacements in the order they appear in the source
    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn is_unchanged(&self) -> bool {
        self.text == self.source
    }

    /// The translated text, or [`SENTINEL`] when it is identical to the source
    pub fn into_message(self) -> String {
        if self.is_unchanged() {
            SENTINEL.to_string()
        } else {
            self.text
        }
    }
}

#[derive(Debug)]
struct Rule {
    value: String,
    pattern: Regex,
}

/// Compiled rules for one direction
#[derive(Debug)]
struct RuleSet {
    rules: Vec<Rule>,
    time_pattern: Regex,
    time_separator: char,
}

impl RuleSet {
    fn build(mapping: &Dictionary, direction: Direction) -> TranslatorResult<Self> {
        let mut entries: Vec<(&String, &String)> = mapping.iter().collect();
        // Longest key first so a phrase wins over any shorter key inside it.
        // Ties are broken alphabetically to keep output stable across runs.
        entries.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let rules = entries
            .into_iter()
            .map(|(key, value)| {
                let pattern = RegexBuilder::new(&regex::escape(key))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        TranslatorError::Pattern(format!("Cannot compile rule for '{}': {}", key, e))
                    })?;
                Ok(Rule {
                    value: value.clone(),
                    pattern,
                })
            })
            .collect::<TranslatorResult<Vec<_>>>()?;

        let (time_pattern, time_separator) = match direction {
            Direction::AmericanToBritish => (r"([0-9]{1,2}):([0-9]{2})", '.'),
            Direction::BritishToAmerican => (r"([0-9]{1,2})\.([0-9]{2})", ':'),
        };
        let time_pattern = Regex::new(time_pattern)
            .map_err(|e| TranslatorError::Pattern(format!("Cannot compile time rule: {}", e)))?;

        debug!("Built {} rules for {}", rules.len(), direction);

        Ok(RuleSet {
            rules,
            time_pattern,
            time_separator,
        })
    }

    fn collect(&self, text: &str) -> BTreeMap<usize, Replacement> {
        let mut spans = BTreeMap::new();

        for rule in &self.rules {
            let mut pos = 0;
            while let Some(m) = rule.pattern.find_at(text, pos) {
                let range = m.range();
                if stands_alone(text, &range) && !overlaps(&spans, &range) {
                    spans.insert(
                        range.start,
                        Replacement {
                            range: range.clone(),
                            original: m.as_str().to_string(),
                            replacement: match_case(m.as_str(), &rule.value),
                            kind: ReplacementKind::Term,
                        },
                    );
                    pos = range.end;
                } else {
                    // Retry one character later; a match may still start inside this one
                    pos = range.start + text[range.start..].chars().next().map_or(1, char::len_utf8);
                }
                if pos > text.len() {
                    break;
                }
            }
        }

        for caps in self.time_pattern.captures_iter(text) {
            let (Some(whole), Some(hours), Some(minutes)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let range = whole.range();
            if overlaps(&spans, &range) {
                continue;
            }
            spans.insert(
                range.start,
                Replacement {
                    range,
                    original: whole.as_str().to_string(),
                    replacement: format!(
                        "{}{}{}",
                        hours.as_str(),
                        self.time_separator,
                        minutes.as_str()
                    ),
                    kind: ReplacementKind::Time,
                },
            );
        }

        spans
    }
}

/// True when the span is not glued to a letter, digit or underscore on either side.
/// Punctuation is fine, so "Mr." still matches in "Mr. Bond".
fn stands_alone(text: &str, range: &Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn overlaps(spans: &BTreeMap<usize, Replacement>, range: &Range<usize>) -> bool {
    // Spans never overlap each other, so only the last one starting before `range.end`
    // can reach into `range`
    spans
        .range(..range.end)
        .next_back()
        .is_some_and(|(_, existing)| existing.range.end > range.start)
}

/// Capitalise the replacement when the matched text starts with a capital
fn match_case(matched: &str, value: &str) -> String {
    if !matched.chars().next().is_some_and(char::is_uppercase) {
        return value.to_string();
    }
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dictionary-driven American/British English translator
#[derive(Debug)]
pub struct Translator {
    american_to_british: RuleSet,
    british_to_american: RuleSet,
    marker: Marker,
}

impl Translator {
    /// Build rule tables for both directions from `dictionaries`
    ///
    /// # Errors
    /// - `InversionCollision` if the spelling or title pairs cannot be inverted
    /// - `Pattern` if a key cannot be compiled
    pub fn new(dictionaries: &Dictionaries) -> TranslatorResult<Self> {
        Ok(Translator {
            american_to_british: RuleSet::build(
                &dictionaries.build_mapping(Direction::AmericanToBritish)?,
                Direction::AmericanToBritish,
            )?,
            british_to_american: RuleSet::build(
                &dictionaries.build_mapping(Direction::BritishToAmerican)?,
                Direction::BritishToAmerican,
            )?,
            marker: Marker::default(),
        })
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Number of dictionary rules applied in `direction`
    pub fn rule_count(&self, direction: Direction) -> usize {
        self.rule_set(direction).rules.len()
    }

    fn rule_set(&self, direction: Direction) -> &RuleSet {
        match direction {
            Direction::AmericanToBritish => &self.american_to_british,
            Direction::BritishToAmerican => &self.british_to_american,
        }
    }

    pub fn translate(&self, text: &str, direction: Direction) -> Translation {
        let spans = self.rule_set(direction).collect(text);

        let mut rendered = String::with_capacity(text.len());
        let mut cursor = 0;
        for replacement in spans.values() {
            rendered.push_str(&text[cursor..replacement.range.start]);
            rendered.push_str(&self.marker.wrap(&replacement.replacement));
            cursor = replacement.range.end;
        }
        rendered.push_str(&text[cursor..]);

        debug!("{}: {} replacement(s)", direction, spans.len());

        Translation {
            source: text.to_string(),
            text: rendered,
            direction,
            replacements: spans.into_values().collect(),
        }
    }
}

static DEFAULT_TRANSLATOR: LazyLock<Translator> = LazyLock::new(|| {
    Translator::new(Dictionaries::embedded())
        .expect("bundled dictionaries must build a valid translator")
});

/// A translator over the bundled dictionaries with HTML highlighting, built on first use
pub fn default_translator() -> &'static Translator {
    &DEFAULT_TRANSLATOR
}

/// Translate `text` with the bundled dictionaries.
///
/// Returns the highlighted translation, or [`SENTINEL`] when nothing changed.
pub fn translate(text: &str, direction: Direction) -> String {
    default_translator().translate(text, direction).into_message()
}
