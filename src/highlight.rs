//! Highlight markers and word-level diff highlighting
//!
//! The engine wraps every replacement in a [`Marker`] as it renders. [`diff_highlight`]
//! is the post-hoc alternative: it compares an original and a plain translated string
//! token by token and marks whatever differs.

/// Opening/closing strings wrapped around a changed span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    open: String,
    close: String,
}

impl Marker {
    pub const HTML_OPEN: &'static str = r#"<span class="highlight">"#;
    pub const HTML_CLOSE: &'static str = "</span>";

    pub fn new(open: &str, close: &str) -> Self {
        Marker {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    /// `<span class="highlight">…</span>`, what the web front end styles
    pub fn html() -> Self {
        Marker::new(Self::HTML_OPEN, Self::HTML_CLOSE)
    }

    /// No markup at all
    pub fn none() -> Self {
        Marker::new("", "")
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }

    pub fn wrap(&self, text: &str) -> String {
        let mut wrapped = String::with_capacity(self.open.len() + text.len() + self.close.len());
        wrapped.push_str(&self.open);
        wrapped.push_str(text);
        wrapped.push_str(&self.close);
        wrapped
    }

    /// Remove every occurrence of this marker from `text`
    pub fn strip(&self, text: &str) -> String {
        let mut stripped = text.to_string();
        for token in [&self.open, &self.close] {
            if !token.is_empty() {
                stripped = stripped.replace(token.as_str(), "");
            }
        }
        stripped
    }
}

impl Default for Marker {
    fn default() -> Self {
        Marker::html()
    }
}

/// Letters, digits and underscore. Anything else is a boundary.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into alternating runs of word and non-word characters
pub fn split_word_boundaries(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (index, c) in text.char_indices() {
        let word = is_word_char(c);
        match current {
            Some(kind) if kind != word => {
                tokens.push(&text[start..index]);
                start = index;
            }
            _ => {}
        }
        current = Some(word);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Wrap each token of `translated` that differs from the token at the same position
/// in `original`.
///
/// Tokens are compared by position, so this works best when a translation swaps
/// single words. Multi-word replacements shift positions and every shifted token
/// is marked.
pub fn diff_highlight(original: &str, translated: &str, marker: &Marker) -> String {
    let original_tokens = split_word_boundaries(original);

    split_word_boundaries(translated)
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            if original_tokens.get(i) == Some(&token) {
                token.to_string()
            } else {
                marker.wrap(token)
            }
        })
        .collect()
}
