use std::io;
use std::path::Path;

use crate::inflection::Unsupported;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// Access the kind of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl<K> From<K> for Error
where
    ErrorKind: From<K>,
{
    #[inline]
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("Lemma has an empty reading")]
    EmptyReading,
    #[error("Lemma `{reading}` has no class tag")]
    MissingClass { reading: Box<str> },
    #[error("Cannot conjugate class `{tag}`")]
    Classification { tag: Box<str> },
    #[error("Spelling `{spelling}` does not share the ending of `{reading}`")]
    MisalignedSpelling {
        reading: Box<str>,
        spelling: Box<str>,
    },
    #[error("Reading `{reading}` does not have the ending of class `{class}`")]
    UnmappedEnding {
        reading: Box<str>,
        class: &'static str,
    },
    #[error("Unknown conjugation form `{0}`")]
    UnknownForm(Box<str>),
    #[error(transparent)]
    Unsupported(#[from] Unsupported),
    #[error("Failed to read `{}`", path.display())]
    Io {
        path: Box<Path>,
        #[source]
        error: io::Error,
    },
    #[error("Failed to parse `{}`", path.display())]
    Toml {
        path: Box<Path>,
        #[source]
        error: toml::de::Error,
    },
}
