//! # Feedback Lexicon
//!
//! Keyword and emoji tables for rule-based feedback sentiment tagging.

use serde::{Deserialize, Serialize};

const STRONG_POSITIVE: &[&str] = &[
    "excellent",
    "outstanding",
    "amazing",
    "fantastic",
    "perfect",
    "love",
    "brilliant",
    "superb",
];

const POSITIVE: &[&str] = &[
    "good",
    "great",
    "nice",
    "awesome",
    "wonderful",
    "happy",
    "satisfied",
    "pleased",
    "impressed",
];

const STRONG_NEGATIVE: &[&str] = &[
    "terrible",
    "horrible",
    "awful",
    "disgusting",
    "hate",
    "disappointing",
    "useless",
    "broken",
];

const NEGATIVE: &[&str] = &[
    "bad",
    "poor",
    "worst",
    "problem",
    "issue",
    "complaint",
    "unhappy",
    "disappointed",
    "frustrated",
];

const PREVIEW_POSITIVE: &[&str] = &[
    "excellent",
    "love",
    "great",
    "awesome",
    "perfect",
    "good",
    "happy",
    "amazing",
    "fantastic",
    "wonderful",
];

const PREVIEW_NEGATIVE: &[&str] = &[
    "terrible",
    "hate",
    "awful",
    "bad",
    "disappointed",
    "poor",
    "problem",
    "horrible",
    "disgusting",
    "broken",
];

const POSITIVE_EMOJIS: &[&str] = &[
    "\u{1F60A}", // 😊
    "\u{1F602}", // 😂
    "\u{1F60D}", // 😍
    "\u{1F970}", // 🥰
    "\u{1F60E}", // 😎
    "\u{1F44D}", // 👍
    "\u{2B50}",  // ⭐
    "\u{1F31F}", // 🌟
    "\u{1F496}", // 💖
    "\u{1F389}", // 🎉
];

const NEGATIVE_EMOJIS: &[&str] = &[
    "\u{1F61E}", // 😞
    "\u{1F620}", // 😠
    "\u{1F621}", // 😡
    "\u{1F622}", // 😢
    "\u{1F62D}", // 😭
    "\u{1F44E}", // 👎
    "\u{1F494}", // 💔
    "\u{1F624}", // 😤
];

/// Lexicon error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// An entry would match every text
    #[error("Lexicon list `{list}` contains an empty entry")]
    EmptyEntry {
        /// Name of the offending list
        list: &'static str,
    },
}

/// Feedback sentiment lexicon
///
/// Word lists are matched by substring containment against lower-cased text,
/// so entries are expected in lower case (see [`Lexicon::normalized`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PartialLexicon")]
pub struct Lexicon {
    /// Words that decide `positive` on their own
    pub strong_positive: Vec<String>,
    /// Words counted on the weighted path
    pub positive: Vec<String>,
    /// Words that decide `negative` on their own
    pub strong_negative: Vec<String>,
    /// Words counted against the weighted score
    pub negative: Vec<String>,
    /// Emoji that decide `positive` before any word is looked at
    pub positive_emojis: Vec<String>,
    /// Emoji that decide `negative` before any word is looked at
    pub negative_emojis: Vec<String>,
    /// Words counted for the live preview while a comment is typed
    pub preview_positive: Vec<String>,
    /// Words counted against the live preview
    pub preview_negative: Vec<String>,
}

/// Lexicon as read from a config file, lists may be left out
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartialLexicon {
    strong_positive: Option<Vec<String>>,
    positive: Option<Vec<String>>,
    strong_negative: Option<Vec<String>>,
    negative: Option<Vec<String>>,
    positive_emojis: Option<Vec<String>>,
    negative_emojis: Option<Vec<String>>,
    preview_positive: Option<Vec<String>>,
    preview_negative: Option<Vec<String>>,
}

impl PartialLexicon {
    /// Fill omitted lists from the built-in tables, returning their names
    fn complete(self) -> (Lexicon, Vec<&'static str>) {
        let mut missing = Vec::new();
        let mut take = |list: Option<Vec<String>>, name: &'static str, fallback: &[&str]| {
            list.unwrap_or_else(|| {
                missing.push(name);
                owned(fallback)
            })
        };

        let lexicon = Lexicon {
            strong_positive: take(self.strong_positive, "strongPositive", STRONG_POSITIVE),
            positive: take(self.positive, "positive", POSITIVE),
            strong_negative: take(self.strong_negative, "strongNegative", STRONG_NEGATIVE),
            negative: take(self.negative, "negative", NEGATIVE),
            positive_emojis: take(self.positive_emojis, "positiveEmojis", POSITIVE_EMOJIS),
            negative_emojis: take(self.negative_emojis, "negativeEmojis", NEGATIVE_EMOJIS),
            preview_positive: take(self.preview_positive, "previewPositive", PREVIEW_POSITIVE),
            preview_negative: take(self.preview_negative, "previewNegative", PREVIEW_NEGATIVE),
        };
        (lexicon, missing)
    }
}

impl From<PartialLexicon> for Lexicon {
    fn from(partial: PartialLexicon) -> Self {
        let (lexicon, missing) = partial.complete();
        if !missing.is_empty() {
            tracing::warn!(
                lists = ?missing,
                "Lexicon lists missing from config, using built-in defaults"
            );
        }
        lexicon
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Lexicon {
    /// Create the built-in feedback lexicon
    pub fn new() -> Self {
        Self {
            strong_positive: owned(STRONG_POSITIVE),
            positive: owned(POSITIVE),
            strong_negative: owned(STRONG_NEGATIVE),
            negative: owned(NEGATIVE),
            positive_emojis: owned(POSITIVE_EMOJIS),
            negative_emojis: owned(NEGATIVE_EMOJIS),
            preview_positive: owned(PREVIEW_POSITIVE),
            preview_negative: owned(PREVIEW_NEGATIVE),
        }
    }

    /// Create a lexicon with no entries
    pub fn empty() -> Self {
        Self {
            strong_positive: Vec::new(),
            positive: Vec::new(),
            strong_negative: Vec::new(),
            negative: Vec::new(),
            positive_emojis: Vec::new(),
            negative_emojis: Vec::new(),
            preview_positive: Vec::new(),
            preview_negative: Vec::new(),
        }
    }

    fn lists(&self) -> [(&'static str, &Vec<String>); 8] {
        [
            ("strongPositive", &self.strong_positive),
            ("positive", &self.positive),
            ("strongNegative", &self.strong_negative),
            ("negative", &self.negative),
            ("positiveEmojis", &self.positive_emojis),
            ("negativeEmojis", &self.negative_emojis),
            ("previewPositive", &self.preview_positive),
            ("previewNegative", &self.preview_negative),
        ]
    }

    /// Lower-case and trim word entries, trim emoji entries
    pub fn normalized(mut self) -> Self {
        for list in [
            &mut self.strong_positive,
            &mut self.positive,
            &mut self.strong_negative,
            &mut self.negative,
            &mut self.preview_positive,
            &mut self.preview_negative,
        ] {
            for word in list.iter_mut() {
                *word = word.trim().to_lowercase();
            }
        }
        for list in [&mut self.positive_emojis, &mut self.negative_emojis] {
            for emoji in list.iter_mut() {
                *emoji = emoji.trim().to_string();
            }
        }
        self
    }

    /// Reject entries that would match any text
    pub fn validate(&self) -> Result<(), LexiconError> {
        for (name, entries) in self.lists() {
            if entries.iter().any(|e| e.trim().is_empty()) {
                return Err(LexiconError::EmptyEntry { list: name });
            }
        }
        Ok(())
    }

    /// Append the entries of `other` that are not already present
    pub fn extend(&mut self, other: &Lexicon) {
        fn merge(into: &mut Vec<String>, from: &[String]) {
            for entry in from {
                if !into.contains(entry) {
                    into.push(entry.clone());
                }
            }
        }

        merge(&mut self.strong_positive, &other.strong_positive);
        merge(&mut self.positive, &other.positive);
        merge(&mut self.strong_negative, &other.strong_negative);
        merge(&mut self.negative, &other.negative);
        merge(&mut self.positive_emojis, &other.positive_emojis);
        merge(&mut self.negative_emojis, &other.negative_emojis);
        merge(&mut self.preview_positive, &other.preview_positive);
        merge(&mut self.preview_negative, &other.preview_negative);
    }

    /// Total number of entries across all lists
    pub fn len(&self) -> usize {
        self.lists().iter().map(|(_, l)| l.len()).sum()
    }

    /// Check if every list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check if any entry is a substring of `text`
pub(crate) fn contains_any(text: &str, entries: &[String]) -> bool {
    entries.iter().any(|entry| text.contains(entry.as_str()))
}

/// Entries contained in `text`, each counted once
pub(crate) fn matching(text: &str, entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| text.contains(entry.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let lexicon = Lexicon::new();
        assert!(lexicon.strong_positive.contains(&"amazing".to_string()));
        assert!(lexicon.strong_negative.contains(&"terrible".to_string()));
        assert!(lexicon.positive.contains(&"good".to_string()));
        assert!(lexicon.negative.contains(&"bad".to_string()));
        assert_eq!(lexicon.positive_emojis.len(), 10);
        assert_eq!(lexicon.negative_emojis.len(), 8);
        assert!(lexicon.validate().is_ok());
    }

    #[test]
    fn test_normalized_lowercases_words() {
        let mut lexicon = Lexicon::empty();
        lexicon.positive.push("  Stellar ".to_string());
        lexicon.positive_emojis.push(" \u{1F44C} ".to_string());

        let lexicon = lexicon.normalized();
        assert_eq!(lexicon.positive, vec!["stellar"]);
        assert_eq!(lexicon.positive_emojis, vec!["\u{1F44C}"]);
    }

    #[test]
    fn test_validate_rejects_empty_entry() {
        let mut lexicon = Lexicon::new();
        lexicon.negative.push("   ".to_string());
        assert_eq!(
            lexicon.validate(),
            Err(LexiconError::EmptyEntry { list: "negative" })
        );
    }

    #[test]
    fn test_extend_skips_duplicates() {
        let mut lexicon = Lexicon::new();
        let before = lexicon.len();

        let mut extra = Lexicon::empty();
        extra.positive = vec!["good".to_string(), "comfy".to_string()];
        lexicon.extend(&extra);

        assert_eq!(lexicon.len(), before + 1);
        assert!(lexicon.positive.contains(&"comfy".to_string()));
    }

    #[test]
    fn test_matching_counts_entries_once() {
        let entries = vec!["bad".to_string(), "poor".to_string()];
        let found = matching("bad bad bad service", &entries);
        assert_eq!(found, vec!["bad"]);
        assert!(contains_any("badge", &entries));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let lexicon: Lexicon = serde_json::from_str(r#"{"positive": ["comfy"]}"#).unwrap();
        assert_eq!(lexicon.positive, vec!["comfy"]);
        assert_eq!(lexicon.strong_positive, Lexicon::new().strong_positive);
        assert_eq!(lexicon.preview_negative, Lexicon::new().preview_negative);
    }

    #[test]
    fn test_omitted_lists_are_reported() {
        let partial: PartialLexicon =
            serde_json::from_str(r#"{"positive": [], "negativeEmojis": ["x"]}"#)
                .unwrap();
        let (lexicon, missing) = partial.complete();

        assert!(lexicon.positive.is_empty());
        assert_eq!(
            missing,
            vec![
                "strongPositive",
                "strongNegative",
                "negative",
                "positiveEmojis",
                "previewPositive",
                "previewNegative",
            ]
        );
    }

    #[test]
    fn test_complete_lexicon_reports_nothing() {
        let json = serde_json::to_string(&Lexicon::new()).unwrap();
        let partial: PartialLexicon = serde_json::from_str(&json).unwrap();
        let (lexicon, missing) = partial.complete();

        assert!(missing.is_empty());
        assert_eq!(lexicon, Lexicon::new());
    }

    #[test]
    fn test_preview_tables() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.preview_positive.len(), 10);
        assert_eq!(lexicon.preview_negative.len(), 10);
        assert!(!lexicon.preview_positive.contains(&"nice".to_string()));
        assert!(!lexicon.preview_negative.contains(&"useless".to_string()));
    }
}
