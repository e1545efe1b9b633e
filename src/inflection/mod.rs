//! Verb inflection, based on a word's class.

pub mod godan;

mod class;
pub use self::class::{classify, Irregular, VerbClass};

mod bases;
pub use self::bases::{Base, Bases, Verb, BASE_RULES};

mod conjugate;
pub use self::conjugate::Form;

mod table;
pub use self::table::{Cell, Table, VARIANTS};

use crate::elements::Lemma;
use crate::error::Error;
use crate::kana::ConjugatedForm;

/// Sentinel for a base which is not modelled for the verb's class.
///
/// Irregular and defective classes are recognized but not fully supported,
/// anything derived from their mizenkei or renyoukei carries this instead of
/// a surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Conjugation of `{class}` verbs is not supported")]
pub struct Unsupported {
    /// The class of the verb.
    pub class: VerbClass,
}

/// Conjugate a single form of the given lemma.
///
/// This classifies the lemma by its governing class tag, so it fails if the
/// lemma can't be classified or if the derived form is unsupported.
pub fn conjugate(
    lemma: &Lemma,
    form: Form,
    positive: bool,
    formal: bool,
) -> Result<ConjugatedForm, Error> {
    let verb = Verb::new(lemma)?;
    Ok(verb.conjugate(form, positive, formal)?)
}

#[cfg(test)]
mod tests;
