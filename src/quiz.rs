//! Single quiz questions over the conjugation catalogue.

use core::fmt;

use rand::Rng;

use crate::inflection::{Form, Unsupported, Verb};
use crate::kana::ConjugatedForm;

/// A question asking for one form under a polarity and formality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Question {
    pub form: Form,
    pub positive: bool,
    pub formal: bool,
}

/// The graded answer to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// The expected form.
    pub expected: ConjugatedForm,
    /// If the given answer matched the expected form.
    pub correct: bool,
}

impl Question {
    /// Pick a random question.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: ?Sized + Rng,
    {
        Self {
            form: Form::ALL[rng.gen_range(0..Form::ALL.len())],
            positive: rng.gen(),
            formal: rng.gen(),
        }
    }

    /// The expected answer for the given verb.
    pub fn expected(&self, verb: &Verb<'_>) -> Result<ConjugatedForm, Unsupported> {
        verb.conjugate(self.form, self.positive, self.formal)
    }

    /// Grade an answer, which may be given either as a reading or in its
    /// kanji orthography.
    pub fn grade(&self, verb: &Verb<'_>, input: &str) -> Result<Answer, Unsupported> {
        let expected = self.expected(verb)?;
        let correct = expected.matches(input);
        tracing::trace!(question = %self, input, correct);
        Ok(Answer { expected, correct })
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let polarity = if self.positive { "Positive" } else { "Negative" };
        let formality = if self.formal { "Polite" } else { "Plain" };
        write!(f, "{} - {polarity} / {formality}", self.form)
    }
}
