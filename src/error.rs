use serde::Serialize;
use thiserror::Error;

use crate::entry::WordClass;

/// Fatal lookup failures. Any of these aborts the lookup; no partial entry is returned.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid dictionary URL: {0}")]
    InvalidUrl(String),

    #[error("error parsing information: empty page for '{lemma}'")]
    EntryNotFound { lemma: String },

    #[error("error parsing word class of '{lemma}', double check the word is spelt correctly")]
    Classification { lemma: String },

    #[error("unsupported word class '{word_class}' (only nouns, adjectives and verbs are supported)")]
    UnsupportedWordClass { word_class: String },
}

/// Recoverable conditions recorded on the entry instead of failing the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractWarning {
    MissingTable { word_class: WordClass },
    /// A case row whose form count fits no known layout; its forms are left empty.
    MalformedTable { case: String, pairs: usize },
}

impl std::fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractWarning::MissingTable { word_class } => {
                write!(f, "no {} inflection table found", word_class.table_marker())
            }
            ExtractWarning::MalformedTable { case, pairs } => {
                write!(f, "case '{}' has {} form pairs, expected 2 or 4", case, pairs)
            }
        }
    }
}
