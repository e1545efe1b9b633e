//! A word list of lemmas, standing in for a full dictionary.
//!
//! The list is a TOML document with one `[[lemma]]` table per entry:
//!
//! ```toml
//! [[lemma]]
//! reading = "かう"
//! spellings = ["買う"]
//! senses = [{ pos = ["v5u", "vt"], gloss = ["to buy"] }]
//! ```
//!
//! Files ending in `.gz` are decompressed first.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::elements::Lemma;
use crate::error::{Error, ErrorKind};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default, rename = "lemma")]
    lemmas: Vec<Lemma>,
}

/// A collection of lemmas in file order.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    lemmas: Vec<Lemma>,
}

impl Dictionary {
    /// Open a word list from the given path.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let io = |error| {
            Error::new(ErrorKind::Io {
                path: path.into(),
                error,
            })
        };

        let mut file = File::open(path).map_err(io)?;
        let mut string = String::new();

        if path.extension().is_some_and(|e| e == "gz") {
            GzDecoder::new(file).read_to_string(&mut string).map_err(io)?;
        } else {
            file.read_to_string(&mut string).map_err(io)?;
        }

        let this = Self::parse(&string).map_err(|error| {
            Error::new(ErrorKind::Toml {
                path: path.into(),
                error,
            })
        })?;

        tracing::debug!(path = %path.display(), lemmas = this.lemmas.len(), "Loaded dictionary");
        Ok(this)
    }

    /// Parse a word list.
    pub fn parse(string: &str) -> Result<Self, toml::de::Error> {
        let document: Document = toml::from_str(string)?;
        let mut lemmas = Vec::with_capacity(document.lemmas.len());

        for lemma in document.lemmas {
            if lemma.reading.is_empty() {
                tracing::warn!(?lemma, "Skipping lemma without a reading");
                continue;
            }

            lemmas.push(lemma);
        }

        Ok(Self { lemmas })
    }

    /// All lemmas in the dictionary.
    pub fn lemmas(&self) -> &[Lemma] {
        &self.lemmas
    }

    /// Look up lemmas whose reading, spelling or gloss equals the query.
    pub fn lookup<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Lemma> + 'a {
        self.lemmas.iter().filter(move |lemma| lemma.matches(query))
    }

    /// Iterate over lemmas tagged as verbs.
    pub fn verbs(&self) -> impl Iterator<Item = &Lemma> + '_ {
        self.lemmas.iter().filter(|lemma| lemma.is_verb())
    }

    /// Pick a random verb.
    pub fn random_verb<R>(&self, rng: &mut R) -> Option<&Lemma>
    where
        R: ?Sized + Rng,
    {
        let verbs = self.verbs().collect::<Vec<_>>();
        verbs.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const WORDS: &str = r#"
[[lemma]]
reading = "かう"
spellings = ["買う"]
senses = [{ pos = ["v5u", "vt"], gloss = ["to buy"] }]

[[lemma]]
reading = "たべる"
spellings = ["食べる"]
senses = [{ pos = ["v1", "vt"], gloss = ["to eat"] }]

[[lemma]]
reading = "たかい"
spellings = ["高い"]
senses = [{ pos = ["adj-i"], gloss = ["tall", "expensive"] }]

[[lemma]]
reading = ""
"#;

    #[test]
    fn parse_and_lookup() {
        let dict = Dictionary::parse(WORDS).unwrap();
        assert_eq!(dict.lemmas().len(), 3);

        let found = dict.lookup("食べる").collect::<Vec<_>>();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].reading, "たべる");

        let found = dict.lookup("expensive").collect::<Vec<_>>();
        assert_eq!(found[0].reading, "たかい");

        assert_eq!(dict.lookup("のむ").count(), 0);
    }

    #[test]
    fn only_verbs() {
        let dict = Dictionary::parse(WORDS).unwrap();

        let verbs = dict.verbs().map(|l| l.reading.as_str()).collect::<Vec<_>>();
        assert_eq!(verbs, ["かう", "たべる"]);

        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..16 {
            let verb = dict.random_verb(&mut rng).unwrap();
            assert!(verb.is_verb());
        }

        assert!(Dictionary::default().random_verb(&mut rng).is_none());
    }

    #[test]
    fn broken_document() {
        assert!(Dictionary::parse("[[lemma]]\nspellings = 1").is_err());
    }
}
