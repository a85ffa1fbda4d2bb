use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::language::PosTag;

/// A tagged, lemmatized word of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub position: usize,
    pub surface: String,
    pub lemma: String,
    pub tag: PosTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Lemma is not in the vocabulary
    NonWord,
    /// Known word in an implausible context
    RealWord,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NonWord => "non-word",
            ErrorKind::RealWord => "real-word",
        }
    }
}

/// A flagged token occurrence with its ranked suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Surface form as it appeared in the text
    pub word: String,
    pub lemma: String,
    pub position: usize,
    pub kind: ErrorKind,
    /// At most five candidates, best first. Empty when nothing in the
    /// vocabulary is close enough.
    pub suggestions: Vec<String>,
}

impl ErrorRecord {
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarCorrection {
    pub index: usize,
    pub original: String,
    pub corrected: String,
}

/// Display token stream produced by the grammar normalizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTokens {
    pub tokens: Vec<String>,
    pub corrected: BTreeSet<usize>,
    pub corrections: BTreeMap<usize, GrammarCorrection>,
}

impl DisplayTokens {
    pub fn is_corrected(&self, index: usize) -> bool {
        self.corrected.contains(&index)
    }

    pub fn correction(&self, index: usize) -> Option<&GrammarCorrection> {
        self.corrections.get(&index)
    }
}

/// Everything one pass over a text produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub errors: Vec<ErrorRecord>,
    pub display: DisplayTokens,
}

impl Analysis {
    /// Flagged record at a token position, if any
    pub fn error_at(&self, position: usize) -> Option<&ErrorRecord> {
        self.errors.iter().find(|e| e.position == position)
    }
}
