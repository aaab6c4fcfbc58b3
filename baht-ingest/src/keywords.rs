//! Keyword hints for transaction direction.
//!
//! Descriptions are short and localized, so this is only a fallback: the
//! reconciler prefers running-balance arithmetic whenever it can.

/// Built-in keywords of a format plus any configured by the user.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet<'a> {
    builtin: &'static [&'static str],
    extra: &'a [String],
}

impl<'a> KeywordSet<'a> {
    pub fn new(builtin: &'static [&'static str], extra: &'a [String]) -> Self {
        Self { builtin, extra }
    }

    /// Case-insensitive substring match against any keyword.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.builtin
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
            .filter(|k| !k.trim().is_empty())
            .any(|k| text.contains(&k.to_lowercase()))
    }
}

/// True if `text` contains any of `phrases` verbatim.
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}
