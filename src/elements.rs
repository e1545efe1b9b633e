pub(crate) mod lemma;
pub(crate) mod sense;

pub use self::lemma::Lemma;
pub use self::sense::Sense;
