//! Japanese verb conjugation.
//!
//! A [`Lemma`] is classified once into a [`VerbClass`] and validated as a
//! [`Verb`], from which the inflection bases and every form in the
//! conjugation catalogue are derived.

mod concat;
pub use self::concat::Concat;

pub mod config;
pub use self::config::Config;

pub mod dictionary;
pub use self::dictionary::Dictionary;

mod dirs;
pub use self::dirs::Dirs;

pub mod elements;
pub use self::elements::{Lemma, Sense};

mod error;
pub use self::error::{Error, ErrorKind};

pub mod inflection;
pub use self::inflection::{conjugate, Form, Unsupported, Verb, VerbClass};

pub mod kana;
pub use self::kana::ConjugatedForm;

pub mod quiz;
