use core::fmt;

use serde::{Deserialize, Serialize};

/// A sense of a lemma, carrying grammatical class tags and glosses.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Grammatical class tags, such as `v1` or `v5k`.
    #[serde(default)]
    pub pos: Vec<String>,
    /// Meaning glosses.
    #[serde(default)]
    pub gloss: Vec<String>,
}

impl Sense {
    /// Construct a sense out of class tags and glosses.
    pub fn new<P, G>(pos: P, gloss: G) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self {
            pos: pos.into_iter().map(Into::into).collect(),
            gloss: gloss.into_iter().map(Into::into).collect(),
        }
    }

    /// Test if any gloss of this sense equals the query.
    pub fn has_gloss(&self, query: &str) -> bool {
        self.gloss.iter().any(|g| g.eq_ignore_ascii_case(query))
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.pos.is_empty() {
            write!(f, "[{}] ", self.pos.join(", "))?;
        }

        write!(f, "{}", self.gloss.join(", "))
    }
}
