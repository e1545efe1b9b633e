use core::fmt;
use core::str::FromStr;

use crate::error::{Error, ErrorKind};
use crate::inflection::godan::Ending;

/// Irregular or defective godan classes whose bases are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Irregular {
    /// `v5aru`, honorific verbs like ござる and なさる.
    Aru,
    /// `v5k-s`, 行く and its compounds.
    KS,
    /// `v5r-i`, irregular る-ending verbs like ある.
    RI,
    /// `v5u-s`, special う-ending verbs like 問う.
    US,
    /// `v5uru`, the classical うる.
    Uru,
}

impl Irregular {
    pub const ALL: [Irregular; 5] = [
        Irregular::Aru,
        Irregular::KS,
        Irregular::RI,
        Irregular::US,
        Irregular::Uru,
    ];

    /// The class tag of this irregular class.
    pub fn tag(self) -> &'static str {
        match self {
            Irregular::Aru => "v5aru",
            Irregular::KS => "v5k-s",
            Irregular::RI => "v5r-i",
            Irregular::US => "v5u-s",
            Irregular::Uru => "v5uru",
        }
    }
}

/// The grammatical class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerbClass {
    /// Ichidan (`v1`), the stem is invariant.
    Ichidan,
    /// Godan (`v5*`), the terminal mora shifts between vowel rows.
    Godan(Ending),
    /// An irregular or defective class.
    Irregular(Irregular),
}

impl VerbClass {
    /// The class tag of this class.
    pub fn tag(self) -> &'static str {
        match self {
            VerbClass::Ichidan => "v1",
            VerbClass::Godan(ending) => match ending {
                Ending::U => "v5u",
                Ending::Ru => "v5r",
                Ending::Su => "v5s",
                Ending::Ku => "v5k",
                Ending::Gu => "v5g",
                Ending::Mu => "v5m",
                Ending::Bu => "v5b",
                Ending::Nu => "v5n",
                Ending::Tsu => "v5t",
            },
            VerbClass::Irregular(irregular) => irregular.tag(),
        }
    }

    /// Test if the given tag describes a class which can be classified,
    /// without reporting why it can't.
    pub fn is_verb_tag(tag: &str) -> bool {
        tag == "v1" || tag.starts_with("v5")
    }
}

impl fmt::Display for VerbClass {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for VerbClass {
    type Err = Error;

    #[inline]
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        classify(tag)
    }
}

/// Classify a grammatical class tag.
///
/// Godan row codes are accepted both in their abbreviated form (`v5k`) and
/// spelled out as the row (`v5ku`). The abbreviated codes are the ones JMdict
/// uses, and are accepted on top of the row-spelled tags. Irregular tags are
/// matched before the generic godan rule since they share its prefix.
pub fn classify(tag: &str) -> Result<VerbClass, Error> {
    if tag == "v1" {
        return Ok(VerbClass::Ichidan);
    }

    for irregular in Irregular::ALL {
        if tag == irregular.tag() {
            return Ok(VerbClass::Irregular(irregular));
        }
    }

    let Some(code) = tag.strip_prefix("v5") else {
        return Err(Error::new(ErrorKind::Classification { tag: tag.into() }));
    };

    let ending = match code {
        "u" => Ending::U,
        "r" | "ru" => Ending::Ru,
        "s" | "su" => Ending::Su,
        "k" | "ku" => Ending::Ku,
        "g" | "gu" => Ending::Gu,
        "m" | "mu" => Ending::Mu,
        "b" | "bu" => Ending::Bu,
        "n" | "nu" => Ending::Nu,
        "t" | "tsu" => Ending::Tsu,
        _ => return Err(Error::new(ErrorKind::Classification { tag: tag.into() })),
    };

    Ok(VerbClass::Godan(ending))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags() {
        assert_eq!(classify("v1").ok(), Some(VerbClass::Ichidan));
        assert_eq!(classify("v5u").ok(), Some(VerbClass::Godan(Ending::U)));
        assert_eq!(classify("v5k").ok(), Some(VerbClass::Godan(Ending::Ku)));
        assert_eq!(classify("v5ku").ok(), Some(VerbClass::Godan(Ending::Ku)));
        assert_eq!(classify("v5tsu").ok(), Some(VerbClass::Godan(Ending::Tsu)));
        assert_eq!(classify("v5r").ok(), Some(VerbClass::Godan(Ending::Ru)));

        assert_eq!(
            classify("v5r-i").ok(),
            Some(VerbClass::Irregular(Irregular::RI))
        );

        assert_eq!(
            classify("v5k-s").ok(),
            Some(VerbClass::Irregular(Irregular::KS))
        );
    }

    #[test]
    fn every_row_and_irregular() {
        for ending in Ending::ALL {
            let tag = format!("v5{}", ending.name());
            assert_eq!(classify(&tag).ok(), Some(VerbClass::Godan(ending)), "{tag}");

            let class = VerbClass::Godan(ending);
            assert_eq!(classify(class.tag()).ok(), Some(class));
        }

        for irregular in Irregular::ALL {
            let class = VerbClass::Irregular(irregular);
            assert_eq!(classify(irregular.tag()).ok(), Some(class));
        }
    }

    #[test]
    fn unknown_tags() {
        for tag in ["", "v", "v5", "v1-s", "vs-i", "vk", "n", "v5x", "V1", "v5k-ss", " v1"] {
            let error = classify(tag).unwrap_err();

            assert!(
                matches!(error.kind(), ErrorKind::Classification { tag: t } if t.as_ref() == tag),
                "{tag}"
            );
        }
    }

    #[test]
    fn parse() {
        assert_eq!("v5m".parse::<VerbClass>().ok(), Some(VerbClass::Godan(Ending::Mu)));
        assert!("adj-i".parse::<VerbClass>().is_err());
    }
}
