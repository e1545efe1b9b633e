use crate::elements::Lemma;
use crate::error::{Error, ErrorKind};
use crate::inflection::godan::{self, Vowel};
use crate::inflection::{classify, Unsupported, VerbClass};
use crate::kana::{self, Pair};

/// How each base is derived for ichidan and godan verbs.
pub const BASE_RULES: &str = "\
        ichidan            godan
語幹    drop final る      drop final mora
未然形  語幹               final mora in the あ-row
連用形  語幹               final mora in the い-row
連体形  dictionary form    dictionary form
已然形  語幹 + れ          final mora in the え-row
命令形  語幹               final mora in the え-row";

/// A derived inflection base, or the sentinel for an unsupported class.
pub type Base<'a> = Result<Pair<'a>, Unsupported>;

/// A lemma which has been classified and validated for conjugation.
#[derive(Debug, Clone, Copy)]
pub struct Verb<'a> {
    lemma: &'a Lemma,
    class: VerbClass,
    /// Reading without its terminal mora.
    stem: &'a str,
    /// Terminal mora of the reading.
    ending: &'a str,
    /// Canonical spelling without its terminal mora.
    text_stem: Option<&'a str>,
}

impl<'a> Verb<'a> {
    /// Classify the lemma by its governing class tag and validate it.
    pub fn new(lemma: &'a Lemma) -> Result<Self, Error> {
        let Some(tag) = lemma.class_tag() else {
            return Err(Error::new(ErrorKind::MissingClass {
                reading: lemma.reading.as_str().into(),
            }));
        };

        let class = classify(tag).map_err(|error| {
            tracing::debug!(reading = %lemma.reading, tag, "Cannot classify lemma");
            error
        })?;

        Self::with_class(lemma, class)
    }

    /// Validate the lemma for conjugation as the given class.
    pub fn with_class(lemma: &'a Lemma, class: VerbClass) -> Result<Self, Error> {
        let Some((stem, ending)) = kana::split_last(&lemma.reading) else {
            return Err(Error::new(ErrorKind::EmptyReading));
        };

        for spelling in lemma.spellings.iter().filter(|s| !s.is_empty()) {
            if !spelling.ends_with(ending) {
                return Err(Error::new(ErrorKind::MisalignedSpelling {
                    reading: lemma.reading.as_str().into(),
                    spelling: spelling.as_str().into(),
                }));
            }
        }

        let text_stem = lemma
            .spelling()
            .and_then(|spelling| spelling.strip_suffix(ending));

        let expected = match class {
            VerbClass::Ichidan => Some("る"),
            VerbClass::Godan(e) => Some(e.mora()),
            VerbClass::Irregular(..) => None,
        };

        if let Some(expected) = expected {
            if ending != expected {
                return Err(Error::new(ErrorKind::UnmappedEnding {
                    reading: lemma.reading.as_str().into(),
                    class: class.tag(),
                }));
            }
        }

        Ok(Self {
            lemma,
            class,
            stem,
            ending,
            text_stem,
        })
    }

    /// The class of the verb.
    #[inline]
    pub fn class(&self) -> VerbClass {
        self.class
    }

    /// The stem, which is the dictionary form without its terminal mora.
    pub fn stem(&self) -> Pair<'a> {
        Pair::new(self.stem, self.text_stem)
    }

    /// The mizenkei (irrealis, a-base).
    pub fn mizenkei(&self) -> Base<'a> {
        self.shifted(Vowel::A)
    }

    /// The renyoukei (conjunctive, i-base).
    pub fn renyoukei(&self) -> Base<'a> {
        self.shifted(Vowel::I)
    }

    /// The rentaikei (attributive), which is the dictionary form.
    pub fn rentaikei(&self) -> Pair<'a> {
        Pair::new(self.lemma.reading.as_str(), self.lemma.spelling())
    }

    /// The izenkei (realis, e-base).
    ///
    /// Unlike the other vowel bases this is derived for every class through
    /// the alternation table, so ichidan verbs shift their final る to れ.
    pub fn izenkei(&self) -> Base<'a> {
        match godan::shift(self.ending, Vowel::E) {
            Some(mora) => Ok(self.stem().concat(mora)),
            None => Err(self.unsupported()),
        }
    }

    /// The meireikei (imperative base).
    pub fn meireikei(&self) -> Base<'a> {
        match self.class {
            VerbClass::Ichidan => Ok(self.stem()),
            _ => self.izenkei(),
        }
    }

    /// Derive all inflection bases.
    pub fn bases(&self) -> Bases<'a> {
        Bases {
            class: self.class,
            stem: self.stem(),
            mizenkei: self.mizenkei(),
            renyoukei: self.renyoukei(),
            rentaikei: self.rentaikei(),
            izenkei: self.izenkei(),
        }
    }

    fn shifted(&self, vowel: Vowel) -> Base<'a> {
        match self.class {
            VerbClass::Ichidan => Ok(self.stem()),
            VerbClass::Godan(ending) => Ok(self.stem().concat(ending.table().vowel(vowel))),
            VerbClass::Irregular(..) => Err(self.unsupported()),
        }
    }

    pub(super) fn unsupported(&self) -> Unsupported {
        Unsupported { class: self.class }
    }
}

/// The traditional inflection bases of a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bases<'a> {
    class: VerbClass,
    /// The stem.
    pub stem: Pair<'a>,
    /// Irrealis, a-base.
    pub mizenkei: Base<'a>,
    /// Conjunctive, i-base.
    pub renyoukei: Base<'a>,
    /// Attributive, the plain dictionary form.
    pub rentaikei: Pair<'a>,
    /// Realis, e-base.
    pub izenkei: Base<'a>,
}

impl<'a> Bases<'a> {
    /// The imperative base.
    pub fn meireikei(&self) -> Base<'a> {
        match self.class {
            VerbClass::Ichidan => Ok(self.stem.clone()),
            _ => self.izenkei.clone(),
        }
    }
}
