/// Normalised search input: trimmed and lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// First `n` characters
    pub fn head(&self, n: usize) -> &str {
        match self.text.char_indices().nth(n) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

impl From<Option<&str>> for SearchQuery {
    fn from(raw: Option<&str>) -> Self {
        raw.map(SearchQuery::new).unwrap_or_default()
    }
}
