//! The catalogue of conjugated forms.

use core::fmt;
use core::str::FromStr;

use fixed_map::Key;

use crate::error::{Error, ErrorKind};
use crate::inflection::godan::{self, Euphonic};
use crate::inflection::{Base, Unsupported, Verb, VerbClass};
use crate::kana::ConjugatedForm;

/// A conjugated form, in the order in which tables list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
pub enum Form {
    Present,
    Past,
    /// Te-form.
    Te,
    Conditional,
    Provisional,
    /// Passive and potential, which share a surface form.
    Passive,
    Causative,
    CausativePassive,
    Conjectural,
    Alternative,
    Imperative,
}

impl Form {
    pub const ALL: [Form; 11] = [
        Form::Present,
        Form::Past,
        Form::Te,
        Form::Conditional,
        Form::Provisional,
        Form::Passive,
        Form::Causative,
        Form::CausativePassive,
        Form::Conjectural,
        Form::Alternative,
        Form::Imperative,
    ];

    /// Name of the form.
    pub fn name(&self) -> &'static str {
        match self {
            Form::Present => "Present",
            Form::Past => "Past",
            Form::Te => "Te-form",
            Form::Conditional => "Conditional",
            Form::Provisional => "Provisional",
            Form::Passive => "Passive/Potential",
            Form::Causative => "Causative",
            Form::CausativePassive => "Causative-Passive",
            Form::Conjectural => "Conjectural",
            Form::Alternative => "Alternative",
            Form::Imperative => "Imperative",
        }
    }

    /// Keyword used to select the form on the command line.
    pub fn keyword(&self) -> &'static str {
        match self {
            Form::Present => "present",
            Form::Past => "past",
            Form::Te => "te",
            Form::Conditional => "conditional",
            Form::Provisional => "provisional",
            Form::Passive => "passive",
            Form::Causative => "causative",
            Form::CausativePassive => "causative-passive",
            Form::Conjectural => "conjectural",
            Form::Alternative => "alternative",
            Form::Imperative => "imperative",
        }
    }

    /// Parse a keyword into a form.
    pub fn parse_keyword(input: &str) -> Option<Form> {
        let form = match input {
            "present" => Form::Present,
            "past" => Form::Past,
            "te" | "te-form" => Form::Te,
            "conditional" => Form::Conditional,
            "provisional" => Form::Provisional,
            "passive" | "potential" => Form::Passive,
            "causative" => Form::Causative,
            "causative-passive" => Form::CausativePassive,
            "conjectural" => Form::Conjectural,
            "alternative" => Form::Alternative,
            "imperative" => Form::Imperative,
            _ => return None,
        };

        Some(form)
    }

    /// Longer title for the form.
    pub fn title(&self) -> &'static str {
        match self {
            Form::Present => "present / future tense",
            Form::Past => "past tense",
            Form::Te => "~te form, joins clauses",
            Form::Conditional => "conditional, if ~, when ~",
            Form::Provisional => "provisional, if ~, provided that ~",
            Form::Passive => "passive, ~ was done to someone, or potential, can do ~",
            Form::Causative => "causative, make ~ do something, let / allow ~",
            Form::CausativePassive => "causative passive, be made to do ~",
            Form::Conjectural => "conjectural, probably ~",
            Form::Alternative => "alternative, doing things like ~",
            Form::Imperative => "imperative, command",
        }
    }

    /// Describe how the form is built out of the bases of a verb of the
    /// given class, such as `連用形 + ます`.
    pub fn rule(&self, class: VerbClass, positive: bool, formal: bool) -> String {
        let (base, suffix) = match rule(*self, positive, formal) {
            Rule::Mizenkei(suffix) => ("未然形", suffix),
            Rule::Renyoukei(suffix) => ("連用形", suffix),
            Rule::Rentaikei(suffix) => ("連体形", suffix),
            Rule::Izenkei(suffix) => ("已然形", suffix),
            Rule::Past(suffix) => return euphonic_rule(class, |e| e.past, "た", suffix),
            Rule::Te => return euphonic_rule(class, |e| e.te, "て", ""),
            Rule::Meireikei => match class {
                VerbClass::Ichidan => ("命令形", "ろ"),
                _ => ("命令形", ""),
            },
        };

        if suffix.is_empty() {
            base.to_owned()
        } else {
            format!("{base} + {suffix}")
        }
    }
}

fn euphonic_rule(
    class: VerbClass,
    fragment: fn(&Euphonic) -> &'static str,
    plain: &'static str,
    suffix: &'static str,
) -> String {
    if let VerbClass::Godan(ending) = class {
        if let Some(e) = godan::euphonic(ending.mora()) {
            return format!("語幹 + {}{suffix}", fragment(&e));
        }
    }

    format!("連用形 + {plain}{suffix}")
}

impl fmt::Display for Form {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Form {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Form::parse_keyword(s) {
            Some(form) => Ok(form),
            None => Err(Error::new(ErrorKind::UnknownForm(s.into()))),
        }
    }
}

/// How a single form is constructed from the bases.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Mizenkei(&'static str),
    Renyoukei(&'static str),
    Rentaikei(&'static str),
    Izenkei(&'static str),
    /// Euphonic past of godan verbs, renyoukei + た otherwise.
    Past(&'static str),
    /// Euphonic te-form of godan verbs, renyoukei + て otherwise.
    Te,
    /// Bare meireikei, with ろ for ichidan verbs.
    Meireikei,
}

#[rustfmt::skip]
fn rule(form: Form, positive: bool, formal: bool) -> Rule {
    use Rule::*;

    match (form, positive, formal) {
        (Form::Present, true, true) => Renyoukei("ます"),
        (Form::Present, true, false) => Rentaikei(""),
        (Form::Present, false, true) => Renyoukei("ません"),
        (Form::Present, false, false) => Mizenkei("ない"),
        (Form::Past, true, true) => Renyoukei("ました"),
        (Form::Past, true, false) => Past(""),
        (Form::Past, false, true) => Mizenkei("ませんでした"),
        (Form::Past, false, false) => Renyoukei("なかった"),
        (Form::Te, true, true) => Renyoukei("まして"),
        (Form::Te, true, false) => Te,
        (Form::Te, false, true) => Renyoukei("ませんで"),
        (Form::Te, false, false) => Mizenkei("ないで"),
        (Form::Conditional, true, true) => Renyoukei("ましたら"),
        (Form::Conditional, true, false) => Past("ら"),
        (Form::Conditional, false, true) => Renyoukei("ませんでしたら"),
        (Form::Conditional, false, false) => Mizenkei("なかったら"),
        (Form::Provisional, true, true) => Rentaikei("なら"),
        (Form::Provisional, true, false) => Izenkei("ば"),
        (Form::Provisional, false, true) => Mizenkei("ませんなら"),
        (Form::Provisional, false, false) => Renyoukei("なければ"),
        (Form::Passive, true, true) => Mizenkei("れます"),
        (Form::Passive, true, false) => Mizenkei("れる"),
        (Form::Passive, false, true) => Mizenkei("れません"),
        (Form::Passive, false, false) => Mizenkei("れない"),
        (Form::Causative, true, true) => Mizenkei("せます"),
        (Form::Causative, true, false) => Mizenkei("せる"),
        (Form::Causative, false, true) => Mizenkei("せません"),
        (Form::Causative, false, false) => Mizenkei("せない"),
        (Form::CausativePassive, true, true) => Mizenkei("せられます"),
        (Form::CausativePassive, true, false) => Mizenkei("せられる"),
        (Form::CausativePassive, false, true) => Mizenkei("せられません"),
        (Form::CausativePassive, false, false) => Mizenkei("せられない"),
        (Form::Conjectural, true, true) => Rentaikei("でしょう"),
        (Form::Conjectural, true, false) => Rentaikei("だろう"),
        (Form::Conjectural, false, true) => Mizenkei("ないでしょう"),
        (Form::Conjectural, false, false) => Mizenkei("なかっただろう"),
        (Form::Alternative, true, true) => Renyoukei("ましたり"),
        (Form::Alternative, true, false) => Past("り"),
        (Form::Alternative, false, true) => Renyoukei("ませんでしたり"),
        (Form::Alternative, false, false) => Mizenkei("なかったり"),
        (Form::Imperative, true, true) => Renyoukei("なさい"),
        (Form::Imperative, true, false) => Meireikei,
        (Form::Imperative, false, true) => Rentaikei("な"),
        (Form::Imperative, false, false) => Renyoukei("なさるな"),
    }
}

impl<'a> Verb<'a> {
    /// Conjugate the verb into the given form.
    pub fn conjugate(
        &self,
        form: Form,
        positive: bool,
        formal: bool,
    ) -> Result<ConjugatedForm, Unsupported> {
        let pair = match rule(form, positive, formal) {
            Rule::Mizenkei(suffix) => self.mizenkei()?.concat(suffix),
            Rule::Renyoukei(suffix) => self.renyoukei()?.concat(suffix),
            Rule::Rentaikei(suffix) => self.rentaikei().concat(suffix),
            Rule::Izenkei(suffix) => self.izenkei()?.concat(suffix),
            Rule::Past(suffix) => self.euphonic(|e| e.past, "た")?.concat(suffix),
            Rule::Te => self.euphonic(|e| e.te, "て")?,
            Rule::Meireikei => match self.class() {
                VerbClass::Ichidan => self.meireikei()?.concat("ろ"),
                _ => self.meireikei()?,
            },
        };

        tracing::trace!(?form, positive, formal, %pair);
        Ok(pair.to_form())
    }

    /// Present tense.
    pub fn present(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Present, positive, formal)
    }

    /// Past tense.
    pub fn past(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Past, positive, formal)
    }

    /// Te-form.
    pub fn te(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Te, positive, formal)
    }

    pub fn conditional(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Conditional, positive, formal)
    }

    pub fn provisional(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Provisional, positive, formal)
    }

    /// Passive and potential.
    pub fn passive(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Passive, positive, formal)
    }

    pub fn causative(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Causative, positive, formal)
    }

    pub fn causative_passive(
        &self,
        positive: bool,
        formal: bool,
    ) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::CausativePassive, positive, formal)
    }

    pub fn conjectural(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Conjectural, positive, formal)
    }

    pub fn alternative(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Alternative, positive, formal)
    }

    pub fn imperative(&self, positive: bool, formal: bool) -> Result<ConjugatedForm, Unsupported> {
        self.conjugate(Form::Imperative, positive, formal)
    }

    /// The stem of godan verbs jointly substituted with the euphonic fragment
    /// of their terminal mora. Everything else, including godan verbs
    /// without a sound change, uses the renyoukei with a plain suffix.
    fn euphonic(&self, fragment: fn(&Euphonic) -> &'static str, plain: &'static str) -> Base<'a> {
        if let VerbClass::Godan(ending) = self.class() {
            if let Some(e) = godan::euphonic(ending.mora()) {
                return Ok(self.stem().concat(fragment(&e)));
            }
        }

        Ok(self.renyoukei()?.concat(plain))
    }
}
