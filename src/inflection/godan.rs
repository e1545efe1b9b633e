//! Phonetic alternation tables for godan verbs.

use core::fmt;

/// The vowel row a terminal mora can be shifted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    /// The あ-row, used by the mizenkei.
    A,
    /// The い-row, used by the renyoukei.
    I,
    /// The え-row, used by the izenkei and meireikei.
    E,
}

/// Historical sound-change (onbin) group of a terminal mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onbin {
    /// く becomes い.
    K,
    /// ぐ becomes い and voices the suffix.
    G,
    /// ぬ, ぶ and む become ん and voice the suffix.
    Nasal,
    /// う, つ and る become っ.
    Liquid,
}

/// The euphonic suffix cluster which replaces a terminal mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Euphonic {
    /// The sound-change group.
    pub group: Onbin,
    /// Fragment for the past (-ta) family.
    pub past: &'static str,
    /// Fragment for the te-form family.
    pub te: &'static str,
}

const K: Euphonic = Euphonic {
    group: Onbin::K,
    past: "いた",
    te: "いて",
};

const G: Euphonic = Euphonic {
    group: Onbin::G,
    past: "いだ",
    te: "いで",
};

const NASAL: Euphonic = Euphonic {
    group: Onbin::Nasal,
    past: "んだ",
    te: "んで",
};

const LIQUID: Euphonic = Euphonic {
    group: Onbin::Liquid,
    past: "った",
    te: "って",
};

#[derive(Debug)]
pub(crate) struct Godan {
    a: &'static str,
    i: &'static str,
    u: &'static str,
    e: &'static str,
    euphonic: Option<Euphonic>,
}

impl Godan {
    /// Get the mora of the given vowel row.
    pub(crate) fn vowel(&self, vowel: Vowel) -> &'static str {
        match vowel {
            Vowel::A => self.a,
            Vowel::I => self.i,
            Vowel::E => self.e,
        }
    }
}

/// The U godan table.
static U: &Godan = &Godan {
    a: "わ",
    i: "い",
    u: "う",
    e: "え",
    euphonic: Some(LIQUID),
};

/// The RU godan table.
static RU: &Godan = &Godan {
    a: "ら",
    i: "り",
    u: "る",
    e: "れ",
    euphonic: Some(LIQUID),
};

/// The SU godan table. す has no sound change, the renyoukei is used as-is.
static SU: &Godan = &Godan {
    a: "さ",
    i: "し",
    u: "す",
    e: "せ",
    euphonic: None,
};

/// The KU godan table.
static KU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    euphonic: Some(K),
};

/// The GU godan table.
static GU: &Godan = &Godan {
    a: "が",
    i: "ぎ",
    u: "ぐ",
    e: "げ",
    euphonic: Some(G),
};

/// The MU godan table.
static MU: &Godan = &Godan {
    a: "ま",
    i: "み",
    u: "む",
    e: "め",
    euphonic: Some(NASAL),
};

/// The BU godan table.
static BU: &Godan = &Godan {
    a: "ば",
    i: "び",
    u: "ぶ",
    e: "べ",
    euphonic: Some(NASAL),
};

/// The NU godan table.
static NU: &Godan = &Godan {
    a: "な",
    i: "に",
    u: "ぬ",
    e: "ね",
    euphonic: Some(NASAL),
};

/// The TSU godan table.
static TSU: &Godan = &Godan {
    a: "た",
    i: "ち",
    u: "つ",
    e: "て",
    euphonic: Some(LIQUID),
};

/// The terminal mora of a godan verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ending {
    U,
    Ru,
    Su,
    Ku,
    Gu,
    Mu,
    Bu,
    Nu,
    Tsu,
}

impl Ending {
    pub const ALL: [Ending; 9] = [
        Ending::U,
        Ending::Ru,
        Ending::Su,
        Ending::Ku,
        Ending::Gu,
        Ending::Mu,
        Ending::Bu,
        Ending::Nu,
        Ending::Tsu,
    ];

    /// Look up the ending of the given terminal mora.
    pub fn from_mora(mora: &str) -> Option<Ending> {
        let ending = match mora {
            "う" => Ending::U,
            "る" => Ending::Ru,
            "す" => Ending::Su,
            "く" => Ending::Ku,
            "ぐ" => Ending::Gu,
            "む" => Ending::Mu,
            "ぶ" => Ending::Bu,
            "ぬ" => Ending::Nu,
            "つ" => Ending::Tsu,
            _ => return None,
        };

        Some(ending)
    }

    /// The dictionary form mora of this ending.
    pub fn mora(self) -> &'static str {
        self.table().u
    }

    /// The romanized row name, as used in class tags.
    pub fn name(self) -> &'static str {
        match self {
            Ending::U => "u",
            Ending::Ru => "ru",
            Ending::Su => "su",
            Ending::Ku => "ku",
            Ending::Gu => "gu",
            Ending::Mu => "mu",
            Ending::Bu => "bu",
            Ending::Nu => "nu",
            Ending::Tsu => "tsu",
        }
    }

    pub(crate) fn table(self) -> &'static Godan {
        match self {
            Ending::U => U,
            Ending::Ru => RU,
            Ending::Su => SU,
            Ending::Ku => KU,
            Ending::Gu => GU,
            Ending::Mu => MU,
            Ending::Bu => BU,
            Ending::Nu => NU,
            Ending::Tsu => TSU,
        }
    }
}

impl fmt::Display for Ending {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shift a terminal mora into the given vowel row.
///
/// Returns `None` if the mora is not one of the nine godan terminal morae.
pub fn shift(mora: &str, vowel: Vowel) -> Option<&'static str> {
    Some(Ending::from_mora(mora)?.table().vowel(vowel))
}

/// Look up the euphonic suffix cluster which replaces the given terminal mora
/// in past, te-form, conditional and alternative constructions.
///
/// Returns `None` for morae without a sound change, including す.
pub fn euphonic(mora: &str) -> Option<Euphonic> {
    Ending::from_mora(mora)?.table().euphonic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_rows() {
        assert_eq!(shift("く", Vowel::A), Some("か"));
        assert_eq!(shift("く", Vowel::I), Some("き"));
        assert_eq!(shift("く", Vowel::E), Some("け"));
        assert_eq!(shift("う", Vowel::A), Some("わ"));
        assert_eq!(shift("つ", Vowel::I), Some("ち"));
        assert_eq!(shift("つ", Vowel::E), Some("て"));
    }

    #[test]
    fn unmapped() {
        assert_eq!(shift("べ", Vowel::A), None);
        assert_eq!(shift("", Vowel::I), None);
        assert_eq!(shift("くる", Vowel::E), None);
        assert_eq!(euphonic("る る"), None);
    }

    #[test]
    fn euphonic_groups() {
        macro_rules! test {
            ($($mora:literal => $group:ident, $past:literal, $te:literal;)*) => {
                $(
                    let e = euphonic($mora).expect($mora);
                    assert_eq!(e.group, Onbin::$group, "{}", $mora);
                    assert_eq!(e.past, $past, "{}", $mora);
                    assert_eq!(e.te, $te, "{}", $mora);
                )*
            };
        }

        test! {
            "く" => K, "いた", "いて";
            "ぐ" => G, "いだ", "いで";
            "ぬ" => Nasal, "んだ", "んで";
            "ぶ" => Nasal, "んだ", "んで";
            "む" => Nasal, "んだ", "んで";
            "う" => Liquid, "った", "って";
            "つ" => Liquid, "った", "って";
            "る" => Liquid, "った", "って";
        }

        assert_eq!(euphonic("す"), None);
    }

    #[test]
    fn endings_round_trip_their_mora() {
        for ending in Ending::ALL {
            assert_eq!(Ending::from_mora(ending.mora()), Some(ending));
        }
    }
}
