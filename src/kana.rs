use core::fmt;

use crate::concat::Concat;

/// Split off the terminal mora of a verb.
///
/// Dictionary forms of verbs always end in a single full-sized kana, so the
/// terminal mora is the last character of the input.
pub fn split_last(input: &str) -> Option<(&str, &str)> {
    let (index, _) = input.char_indices().next_back()?;
    Some(input.split_at(index))
}

/// A reading paired with its orthography, made up of borrowed fragments.
///
/// The orthography is absent when the lemma has no kanji spelling, in which
/// case suffixes are only appended to the reading.
#[derive(Debug, Clone)]
pub struct Pair<'a> {
    reading: Concat<'a, 4>,
    text: Option<Concat<'a, 4>>,
}

impl<'a> Pair<'a> {
    /// Construct a new pair out of a reading and an optional orthography.
    pub fn new(reading: &'a str, text: Option<&'a str>) -> Self {
        Self {
            reading: Concat::new([reading]),
            text: text.map(|text| Concat::new([text])),
        }
    }

    /// Append a suffix to this pair.
    pub fn concat(&self, suffix: &'a str) -> Self {
        let mut this = self.clone();
        this.reading.push(suffix);

        if let Some(text) = &mut this.text {
            text.push(suffix);
        }

        this
    }

    /// Convert into an owned conjugated form.
    pub fn to_form(&self) -> ConjugatedForm {
        ConjugatedForm {
            reading: self.reading.to_string(),
            orthography: self
                .text
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

impl PartialEq for Pair<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.reading == other.reading && self.text == other.text
    }
}

impl Eq for Pair<'_> {}

impl fmt::Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) if *text != self.reading => write!(f, "{text} ({})", self.reading),
            _ => write!(f, "{}", self.reading),
        }
    }
}

/// A conjugated surface form.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ConjugatedForm {
    /// Phonetic reading of the form.
    pub reading: String,
    /// Kanji orthography of the form. Empty if the lemma has no kanji
    /// spelling, in which case only the reading should be rendered.
    pub orthography: String,
}

impl ConjugatedForm {
    /// Test if the form has an orthography.
    #[inline]
    pub fn has_orthography(&self) -> bool {
        !self.orthography.is_empty()
    }

    /// Test if the given answer matches either the reading or the
    /// orthography of this form.
    pub fn matches(&self, answer: &str) -> bool {
        let answer = answer.trim();

        if answer.is_empty() {
            return false;
        }

        answer == self.reading || (self.has_orthography() && answer == self.orthography)
    }
}

impl fmt::Display for ConjugatedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_orthography() && self.orthography != self.reading {
            write!(f, "{} ({})", self.orthography, self.reading)
        } else {
            write!(f, "{}", self.reading)
        }
    }
}
