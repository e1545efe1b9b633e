use core::fmt;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

/// A concatenation of multiple borrowed strings with fixed size storage.
#[derive(Clone)]
pub struct Concat<'a, const N: usize> {
    storage: ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Concatenate the given strings together into a single composite string.
    pub fn new<I>(iter: I) -> Concat<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut this = Concat {
            storage: ArrayVec::new(),
        };

        for string in iter {
            this.push(string);
        }

        this
    }

    /// Push the given string onto storage. Empty strings are not stored.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` non-empty strings are pushed.
    pub fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            self.storage.push(string);
        }
    }

    /// Iterate over strings.
    pub fn as_slice(&self) -> &[&'a str] {
        self.storage.as_slice()
    }

    /// Iterate over characters in the composite word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.storage.iter().flat_map(|s| s.chars())
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        let a = self.chars();
        let b = other.chars();
        a.eq(b)
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> Hash for Concat<'_, N> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        for c in self.chars() {
            c.hash(state);
        }
    }
}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.storage {
            f.write_str(string)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

#[test]
fn concat_skips_empty() {
    let concat: Concat<'_, 3> = Concat::new(["買", "", "った"]);
    assert_eq!(concat.as_slice(), ["買", "った"]);
    assert_eq!(concat.to_string(), "買った");

    let whole: Concat<'_, 1> = Concat::new(["買った"]);
    assert!(concat == whole);
}
