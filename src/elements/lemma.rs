use serde::{Deserialize, Serialize};

use crate::elements::Sense;
use crate::inflection::VerbClass;

/// A dictionary entry under conjugation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    /// Phonetic reading in kana.
    pub reading: String,
    /// Orthographic variants, the first one being canonical.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spellings: Vec<String>,
    /// Senses of the lemma.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<Sense>,
}

impl Lemma {
    /// Construct a lemma with the given reading and no spellings or senses.
    pub fn new<R>(reading: R) -> Self
    where
        R: Into<String>,
    {
        Self {
            reading: reading.into(),
            spellings: Vec::new(),
            senses: Vec::new(),
        }
    }

    /// Add a spelling to the lemma.
    pub fn with_spelling<S>(mut self, spelling: S) -> Self
    where
        S: Into<String>,
    {
        self.spellings.push(spelling.into());
        self
    }

    /// Add a sense to the lemma.
    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.senses.push(sense);
        self
    }

    /// The canonical spelling, if the lemma has one.
    pub fn spelling(&self) -> Option<&str> {
        let spelling = self.spellings.first()?;

        if spelling.is_empty() {
            return None;
        }

        Some(spelling)
    }

    /// The class tag which governs conjugation.
    ///
    /// Only the first tag of the first sense is considered, even if later
    /// senses disagree. Use [`Verb::with_class`] to pick a class explicitly.
    ///
    /// [`Verb::with_class`]: crate::inflection::Verb::with_class
    pub fn class_tag(&self) -> Option<&str> {
        Some(self.senses.first()?.pos.first()?.as_str())
    }

    /// Test if the lemma is tagged as a verb which might be conjugated.
    pub fn is_verb(&self) -> bool {
        self.class_tag().is_some_and(VerbClass::is_verb_tag)
    }

    /// Test if the query matches the reading, a spelling or a gloss.
    pub fn matches(&self, query: &str) -> bool {
        self.reading == query
            || self.spellings.iter().any(|s| s == query)
            || self.senses.iter().any(|s| s.has_gloss(query))
    }
}
