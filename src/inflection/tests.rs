use super::godan::{self, Ending, Vowel};
use super::*;
use crate::elements::Sense;
use crate::error::ErrorKind;

fn lemma(reading: &str, spelling: Option<&str>, tag: &str) -> Lemma {
    let mut lemma = Lemma::new(reading).with_sense(Sense::new([tag], ["test"]));

    if let Some(spelling) = spelling {
        lemma = lemma.with_spelling(spelling);
    }

    lemma
}

fn reading(pair: Base<'_>) -> String {
    pair.expect("supported base").to_form().reading
}

macro_rules! test_case {
    ($verb:expr, $form:ident, $positive:expr, $formal:expr, $reading:expr, $text:expr) => {
        let form = $verb
            .conjugate(Form::$form, $positive, $formal)
            .expect("supported form");

        assert_eq!(
            (form.reading.as_str(), form.orthography.as_str()),
            ($reading, $text),
            "{:?} positive={} formal={}",
            Form::$form,
            $positive,
            $formal,
        );
    };
}

#[test]
fn taberu_present() {
    let taberu = lemma("たべる", Some("食べる"), "v1");
    let verb = Verb::new(&taberu).unwrap();

    test_case!(verb, Present, true, false, "たべる", "食べる");
    test_case!(verb, Present, false, false, "たべない", "食べない");
    test_case!(verb, Present, true, true, "たべます", "食べます");
    test_case!(verb, Present, false, true, "たべません", "食べません");
}

#[test]
fn kau_past_and_te() {
    let kau = lemma("かう", Some("買う"), "v5u");
    let verb = Verb::new(&kau).unwrap();

    test_case!(verb, Past, true, false, "かった", "買った");
    test_case!(verb, Te, true, true, "かいまして", "買いまして");
    test_case!(verb, Te, true, false, "かって", "買って");
    test_case!(verb, Present, false, false, "かわない", "買わない");
    test_case!(verb, Conditional, true, false, "かったら", "買ったら");
    test_case!(verb, Alternative, true, false, "かったり", "買ったり");
    test_case!(verb, Provisional, true, false, "かえば", "買えば");
    test_case!(verb, Imperative, true, false, "かえ", "買え");
}

#[test]
fn ichidan_forms() {
    let taberu = lemma("たべる", Some("食べる"), "v1");
    let verb = Verb::new(&taberu).unwrap();

    test_case!(verb, Past, true, false, "たべた", "食べた");
    test_case!(verb, Past, true, true, "たべました", "食べました");
    test_case!(verb, Past, false, true, "たべませんでした", "食べませんでした");
    test_case!(verb, Past, false, false, "たべなかった", "食べなかった");
    test_case!(verb, Te, true, false, "たべて", "食べて");
    test_case!(verb, Te, false, false, "たべないで", "食べないで");
    test_case!(verb, Conditional, true, false, "たべたら", "食べたら");
    test_case!(verb, Provisional, true, false, "たべれば", "食べれば");
    test_case!(verb, Provisional, true, true, "たべるなら", "食べるなら");
    test_case!(verb, Provisional, false, false, "たべなければ", "食べなければ");
    test_case!(verb, Passive, true, false, "たべれる", "食べれる");
    test_case!(verb, Causative, false, true, "たべせません", "食べせません");
    test_case!(verb, CausativePassive, true, true, "たべせられます", "食べせられます");
    test_case!(verb, Conjectural, true, false, "たべるだろう", "食べるだろう");
    test_case!(verb, Conjectural, false, false, "たべなかっただろう", "食べなかっただろう");
    test_case!(verb, Alternative, true, false, "たべたり", "食べたり");
    test_case!(verb, Imperative, true, false, "たべろ", "食べろ");
    test_case!(verb, Imperative, true, true, "たべなさい", "食べなさい");
    test_case!(verb, Imperative, false, true, "たべるな", "食べるな");
    test_case!(verb, Imperative, false, false, "たべなさるな", "食べなさるな");
}

#[test]
fn godan_decision_table() {
    let matsu = lemma("まつ", Some("待つ"), "v5t");
    let verb = Verb::new(&matsu).unwrap();

    test_case!(verb, Present, true, true, "まちます", "待ちます");
    test_case!(verb, Past, false, true, "またませんでした", "待たませんでした");
    test_case!(verb, Past, false, false, "まちなかった", "待ちなかった");
    test_case!(verb, Te, false, true, "まちませんで", "待ちませんで");
    test_case!(verb, Conditional, false, false, "またなかったら", "待たなかったら");
    test_case!(verb, Provisional, false, true, "またませんなら", "待たませんなら");
    test_case!(verb, Passive, true, true, "またれます", "待たれます");
    test_case!(verb, Causative, true, false, "またせる", "待たせる");
    test_case!(verb, CausativePassive, false, false, "またせられない", "待たせられない");
    test_case!(verb, Conjectural, false, true, "またないでしょう", "待たないでしょう");
    test_case!(verb, Alternative, false, true, "まちませんでしたり", "待ちませんでしたり");
    test_case!(verb, Imperative, true, false, "まて", "待て");
}

#[test]
fn euphonic_past_and_te() {
    macro_rules! test {
        ($($reading:literal, $tag:literal => $past:literal, $te:literal;)*) => {
            $(
                let entry = lemma($reading, None, $tag);
                let verb = Verb::new(&entry).unwrap();
                test_case!(verb, Past, true, false, $past, "");
                test_case!(verb, Te, true, false, $te, "");
            )*
        };
    }

    test! {
        "かく", "v5k" => "かいた", "かいて";
        "およぐ", "v5g" => "およいだ", "およいで";
        "しぬ", "v5n" => "しんだ", "しんで";
        "あそぶ", "v5b" => "あそんだ", "あそんで";
        "よむ", "v5m" => "よんだ", "よんで";
        "まつ", "v5t" => "まった", "まって";
        "かえる", "v5r" => "かえった", "かえって";
        "はなす", "v5s" => "はなした", "はなして";
    }
}

#[test]
fn su_has_no_sound_change() {
    let hanasu = lemma("はなす", Some("話す"), "v5s");
    let verb = Verb::new(&hanasu).unwrap();

    test_case!(verb, Conditional, true, false, "はなしたら", "話したら");
    test_case!(verb, Alternative, true, false, "はなしたり", "話したり");
}

#[test]
fn ichidan_bases_coincide() {
    for (reading, spelling) in [("たべる", Some("食べる")), ("みる", None), ("おきる", Some("起きる"))] {
        let entry = lemma(reading, spelling, "v1");
        let verb = Verb::new(&entry).unwrap();

        assert_eq!(verb.mizenkei(), Ok(verb.stem()));
        assert_eq!(verb.renyoukei(), Ok(verb.stem()));
        assert_eq!(verb.meireikei(), Ok(verb.stem()));
    }
}

#[test]
fn godan_bases_shift_final_mora() {
    for ending in Ending::ALL {
        let entry = lemma(&format!("あ{}", ending.mora()), None, VerbClass::Godan(ending).tag());
        let verb = Verb::new(&entry).unwrap();
        let stem = verb.stem().to_form().reading;
        assert_eq!(stem, "あ");

        for (vowel, base) in [
            (Vowel::A, verb.mizenkei()),
            (Vowel::I, verb.renyoukei()),
            (Vowel::E, verb.izenkei()),
        ] {
            let shifted = godan::shift(ending.mora(), vowel).unwrap();
            assert_eq!(reading(base), format!("{stem}{shifted}"), "{ending} {vowel:?}");
        }

        assert_eq!(verb.meireikei(), verb.izenkei());
    }
}

#[test]
fn bases_are_pure() {
    let kau = lemma("かう", Some("買う"), "v5u");
    let a = Verb::new(&kau).unwrap().bases();
    let b = Verb::new(&kau).unwrap().bases();
    assert_eq!(a, b);
    assert_eq!(a.meireikei(), b.meireikei());

    assert_eq!(reading(a.mizenkei.clone()), "かわ");
    assert_eq!(reading(a.renyoukei.clone()), "かい");
    assert_eq!(reading(a.izenkei.clone()), "かえ");
    assert_eq!(a.rentaikei.to_form().orthography, "買う");
    assert_eq!(a.stem.to_form().orthography, "買");
}

#[test]
fn missing_orthography() {
    for (reading, tag) in [("たべる", "v1"), ("かう", "v5u"), ("いく", "v5k-s")] {
        let entry = lemma(reading, None, tag);
        let verb = Verb::new(&entry).unwrap();

        for cell in verb.table() {
            if let Ok(form) = &cell.result {
                assert!(form.orthography.is_empty(), "{cell:?}");
                assert!(!form.reading.is_empty(), "{cell:?}");
            }
        }
    }
}

#[test]
fn irregular_is_unsupported() {
    let gozaru = lemma("ござる", None, "v5aru");
    let verb = Verb::new(&gozaru).unwrap();

    let unsupported = Unsupported {
        class: VerbClass::Irregular(Irregular::Aru),
    };

    assert_eq!(verb.mizenkei().unwrap_err(), unsupported);
    assert_eq!(verb.renyoukei().unwrap_err(), unsupported);
    assert_eq!(verb.present(false, false), Err(unsupported));
    assert_eq!(verb.past(true, false), Err(unsupported));
    assert_eq!(verb.te(true, false), Err(unsupported));
}

#[test]
fn irregular_dictionary_bases_survive() {
    let iku = lemma("いく", Some("行く"), "v5k-s");
    let verb = Verb::new(&iku).unwrap();

    test_case!(verb, Present, true, false, "いく", "行く");
    test_case!(verb, Provisional, true, false, "いけば", "行けば");
    test_case!(verb, Imperative, true, false, "いけ", "行け");
    test_case!(verb, Conjectural, true, true, "いくでしょう", "行くでしょう");

    assert!(verb.past(true, false).is_err());
    assert!(verb.causative(true, false).is_err());
}

#[test]
fn invalid_lemmas() {
    let no_class = Lemma::new("たべる");
    let error = Verb::new(&no_class).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::MissingClass { .. }));

    let adjective = lemma("たかい", Some("高い"), "adj-i");
    let error = Verb::new(&adjective).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Classification { tag } if tag.as_ref() == "adj-i"));

    let empty = lemma("", None, "v1");
    let error = Verb::new(&empty).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::EmptyReading));

    let misaligned = lemma("かう", Some("買い"), "v5u");
    let error = Verb::new(&misaligned).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::MisalignedSpelling { .. }));

    let second_misaligned = lemma("かう", Some("買う"), "v5u").with_spelling("飼い");
    let error = Verb::new(&second_misaligned).unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::MisalignedSpelling { spelling, .. } if spelling.as_ref() == "飼い"
    ));

    let variants = lemma("かう", Some("買う"), "v5u").with_spelling("飼う");
    assert!(Verb::new(&variants).is_ok());

    let wrong_row = lemma("かう", Some("買う"), "v5k");
    let error = Verb::new(&wrong_row).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnmappedEnding { class: "v5k", .. }));

    let not_ichidan = lemma("かう", None, "v1");
    let error = Verb::new(&not_ichidan).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnmappedEnding { class: "v1", .. }));
}

#[test]
fn explicit_class() {
    let kaeru = Lemma::new("かえる")
        .with_spelling("帰る")
        .with_sense(Sense::new(["v1"], ["to change"]))
        .with_sense(Sense::new(["v5r"], ["to return"]));

    let verb = Verb::new(&kaeru).unwrap();
    assert_eq!(verb.class(), VerbClass::Ichidan);
    test_case!(verb, Past, true, false, "かえた", "帰た");

    let verb = Verb::with_class(&kaeru, VerbClass::Godan(Ending::Ru)).unwrap();
    test_case!(verb, Past, true, false, "かえった", "帰った");
}

#[test]
fn single_form() {
    let kau = lemma("かう", Some("買う"), "v5u");
    let form = conjugate(&kau, Form::Past, true, false).unwrap();
    assert_eq!(form.reading, "かった");
    assert!(form.matches("買った"));

    let gozaru = lemma("ござる", None, "v5aru");
    let error = conjugate(&gozaru, Form::Past, true, false).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Unsupported(..)));
}

#[test]
fn table_order() {
    let kau = lemma("かう", Some("買う"), "v5u");
    let verb = Verb::new(&kau).unwrap();

    let table = verb.table();
    assert_eq!(table.len(), 44);

    let cells = table.collect::<Vec<_>>();
    assert_eq!(cells.len(), 44);

    for (index, cell) in cells.iter().enumerate() {
        assert_eq!(cell.form, Form::ALL[index / 4]);
        assert!(cell.result.is_ok(), "{cell:?}");
    }

    let first = cells
        .iter()
        .take(4)
        .map(|c| (c.positive, c.formal))
        .collect::<Vec<_>>();

    assert_eq!(first, [(true, false), (true, true), (false, false), (false, true)]);
    assert_eq!(cells[0].result.as_ref().map(|f| f.reading.as_str()), Ok("かう"));
    assert_eq!(cells[43].name(), "Imperative");

    let again = verb.table().collect::<Vec<_>>();
    assert_eq!(cells, again);
}

#[test]
fn form_keywords() {
    for form in Form::ALL {
        assert_eq!(Form::parse_keyword(form.keyword()), Some(form));
    }

    assert_eq!(Form::parse_keyword("potential"), Some(Form::Passive));
    assert_eq!(Form::parse_keyword("volitional"), None);

    assert_eq!("te-form".parse::<Form>().ok(), Some(Form::Te));
    let error = "volitional".parse::<Form>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnknownForm(name) if name.as_ref() == "volitional"));
}

#[test]
fn form_rules() {
    macro_rules! test {
        ($($form:ident, $class:expr, $positive:expr, $formal:expr => $rule:literal;)*) => {
            $(
                assert_eq!(
                    Form::$form.rule($class, $positive, $formal),
                    $rule,
                    "{:?} positive={} formal={}",
                    Form::$form,
                    $positive,
                    $formal,
                );
            )*
        };
    }

    test! {
        Present, VerbClass::Ichidan, true, false => "連体形";
        Present, VerbClass::Ichidan, true, true => "連用形 + ます";
        Present, VerbClass::Godan(Ending::U), false, false => "未然形 + ない";
        Past, VerbClass::Ichidan, true, false => "連用形 + た";
        Past, VerbClass::Godan(Ending::Ku), true, false => "語幹 + いた";
        Te, VerbClass::Godan(Ending::Mu), true, false => "語幹 + んで";
        Conditional, VerbClass::Godan(Ending::Su), true, false => "連用形 + たら";
        Alternative, VerbClass::Godan(Ending::Tsu), true, false => "語幹 + ったり";
        Provisional, VerbClass::Godan(Ending::Ku), true, false => "已然形 + ば";
        Imperative, VerbClass::Ichidan, true, false => "命令形 + ろ";
        Imperative, VerbClass::Godan(Ending::Ru), true, false => "命令形";
        Past, VerbClass::Irregular(Irregular::Aru), true, false => "連用形 + た";
    }
}

#[test]
fn rules_describe_every_cell() {
    for form in Form::ALL {
        for (positive, formal) in VARIANTS {
            let rule = form.rule(VerbClass::Ichidan, positive, formal);
            assert!(!rule.is_empty(), "{form:?} positive={positive} formal={formal}");
        }
    }

    for base in ["語幹", "未然形", "連用形", "連体形", "已然形", "命令形"] {
        assert!(BASE_RULES.contains(base), "{base}");
    }
}
