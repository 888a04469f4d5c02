//! Keyword-based preference interpreter.

use log::debug;
use suburb_core::{
    Category, Interpretation, InterpreterError, PerCategory, PreferenceInterpreter,
    PreferenceVector,
};

const RECREATION: &[&str] = &[
    "park",
    "parks",
    "beach",
    "beaches",
    "sports",
    "gym",
    "pool",
    "playground",
    "green space",
    "nature",
    "outdoors",
    "recreation",
    "nightlife",
    "bars",
    "restaurants",
];

const COMMUNITY: &[&str] = &[
    "community",
    "family",
    "family-friendly",
    "families",
    "kids",
    "safe",
    "quiet",
    "peaceful",
    "neighbourly",
    "neighborhood",
    "village",
    "local vibe",
    "community centre",
    "community center",
    "library",
];

const TRANSPORT: &[&str] = &[
    "transport",
    "public transport",
    "train",
    "station",
    "bus",
    "metro",
    "light rail",
    "tram",
    "easy commute",
    "close to city",
    "near cbd",
    "good transport",
    "strong transport",
];

const EDUCATION: &[&str] = &[
    "school",
    "schools",
    "good schools",
    "education",
    "university",
    "uni",
    "college",
    "tafes",
    "students",
    "student",
    "children's education",
];

const UTILITY: &[&str] = &[
    "shopping",
    "shops",
    "supermarket",
    "mall",
    "services",
    "hospital",
    "clinic",
    "doctor",
    "healthcare",
    "infrastructure",
    "amenities",
    "essential services",
];

/// Built-in keyword lists, one per category.
#[must_use]
pub fn default_keywords() -> PerCategory<Vec<String>> {
    let owned = |words: &[&str]| -> Vec<String> {
        words.iter().map(|word| (*word).to_owned()).collect()
    };
    PerCategory {
        recreation: owned(RECREATION),
        community: owned(COMMUNITY),
        transport: owned(TRANSPORT),
        education: owned(EDUCATION),
        utility: owned(UTILITY),
    }
}

/// Maps free text to preferences by counting keyword hits.
///
/// Every keyword or phrase that occurs as whole words in the query adds
/// `1.0` to its category. Matching ignores case and punctuation. A query
/// with no hits yields the zero vector, which normalises to the default
/// weights.
///
/// # Examples
/// ```
/// use suburb_core::{Category, PreferenceInterpreter};
/// use suburb_scorer::KeywordInterpreter;
///
/// let interpretation = KeywordInterpreter::default().interpret("Quiet, near a train station")?;
/// assert_eq!(interpretation.preferences.get(Category::Community), 1.0);
/// assert_eq!(interpretation.preferences.get(Category::Transport), 2.0);
/// # Ok::<(), suburb_core::InterpreterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordInterpreter {
    phrases: PerCategory<Vec<String>>,
}

impl Default for KeywordInterpreter {
    fn default() -> Self {
        Self::new(&default_keywords())
    }
}

impl KeywordInterpreter {
    /// Build an interpreter from custom keyword lists.
    ///
    /// Blank keywords are ignored.
    #[must_use]
    pub fn new(keywords: &PerCategory<Vec<String>>) -> Self {
        let phrases = keywords.map(|words| {
            words
                .iter()
                .map(|word| normalise_phrase(word))
                .filter(|phrase| !phrase.is_empty())
                .map(|phrase| format!(" {phrase} "))
                .collect()
        });
        Self { phrases }
    }

    /// Count keyword hits per category.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "each hit adds one to a weight")]
    pub fn hits(&self, query: &str) -> PerCategory<f64> {
        let padded = format!(" {} ", normalise_phrase(query));
        let mut hits = PerCategory::<f64>::default();
        for category in Category::ALL {
            let slot = hits.get_mut(category);
            for phrase in self.phrases.get_ref(category) {
                if padded.contains(phrase.as_str()) {
                    *slot += 1.0;
                }
            }
        }
        hits
    }
}

impl PreferenceInterpreter for KeywordInterpreter {
    fn interpret(&self, query: &str) -> Result<Interpretation, InterpreterError> {
        let hits = self.hits(query);
        debug!("keyword hits for query: {hits:?}");
        let preferences =
            PreferenceVector::new(hits).map_err(|error| InterpreterError::InvalidOutput {
                reason: error.to_string(),
            })?;
        Ok(Interpretation::from_preferences(preferences))
    }
}

/// Lower-case `text` and collapse it to single-space separated words.
fn normalise_phrase(text: &str) -> String {
    text.replace('\u{2019}', "'")
        .split(|c: char| !(c.is_alphanumeric() || c == '-' || c == '\''))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
