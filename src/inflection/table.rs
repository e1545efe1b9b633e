use core::iter::FusedIterator;

use crate::inflection::{Form, Unsupported, Verb};
use crate::kana::ConjugatedForm;

/// Polarity and formality in the order each form lists them: positive plain,
/// positive polite, negative plain, negative polite.
pub const VARIANTS: [(bool, bool); 4] = [(true, false), (true, true), (false, false), (false, true)];

/// A single cell of a conjugation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub form: Form,
    pub positive: bool,
    pub formal: bool,
    /// The conjugated form, or the sentinel if it can't be derived.
    pub result: Result<ConjugatedForm, Unsupported>,
}

impl Cell {
    /// Name of the form of this cell.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.form.name()
    }
}

/// Iterator over the full conjugation table of a verb.
///
/// See [`Verb::table`].
#[derive(Debug, Clone)]
pub struct Table<'v, 'a> {
    verb: &'v Verb<'a>,
    index: usize,
}

impl<'a> Verb<'a> {
    /// Enumerate every form under every polarity and formality, in the order
    /// of [`Form::ALL`].
    pub fn table(&self) -> Table<'_, 'a> {
        Table {
            verb: self,
            index: 0,
        }
    }
}

impl Iterator for Table<'_, '_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let form = *Form::ALL.get(self.index / VARIANTS.len())?;
        let (positive, formal) = VARIANTS[self.index % VARIANTS.len()];
        self.index += 1;

        Some(Cell {
            form,
            positive,
            formal,
            result: self.verb.conjugate(form, positive, formal),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (Form::ALL.len() * VARIANTS.len()).saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Table<'_, '_> {}

impl FusedIterator for Table<'_, '_> {}
