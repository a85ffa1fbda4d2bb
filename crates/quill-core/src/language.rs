use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Token;

/// Text analysis interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "de", ...)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, case folding, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Break text into tagged and lemmatized tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Part-of-speech tagging capability
pub trait Tagger: Send + Sync {
    /// Tag every token, preserving order and length
    fn tag(&self, tokens: &[String]) -> Result<Vec<(String, PosTag)>, TagError>;
}

/// Lemmatization capability
pub trait Lemmatizer: Send + Sync {
    /// Reduce a word to its dictionary form, None if no base form is known
    fn lemmatize(&self, word: &str, hint: PosHint) -> Option<String>;
}

/// Coarse part-of-speech tag, rendered with Penn Treebank codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PosTag {
    Noun,
    PluralNoun,
    Verb,
    VerbPast,
    VerbGerund,
    VerbParticiple,
    VerbThirdPerson,
    VerbNonThirdPerson,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Modal,
    To,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NN",
            PosTag::PluralNoun => "NNS",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbParticiple => "VBN",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::VerbNonThirdPerson => "VBP",
            PosTag::Adjective => "JJ",
            PosTag::Adverb => "RB",
            PosTag::Determiner => "DT",
            PosTag::Pronoun => "PRP",
            PosTag::Preposition => "IN",
            PosTag::Conjunction => "CC",
            PosTag::Modal => "MD",
            PosTag::To => "TO",
        }
    }

    pub fn is_verb(&self) -> bool {
        self.as_str().starts_with('V')
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::PluralNoun | PosTag::Pronoun)
    }

    /// Determiners, pronouns, prepositions, conjunctions, modals and "to"
    pub fn is_closed_class(&self) -> bool {
        matches!(
            self,
            PosTag::Determiner
                | PosTag::Pronoun
                | PosTag::Preposition
                | PosTag::Conjunction
                | PosTag::Modal
                | PosTag::To
        )
    }

    /// Lemmatization hint: verbs reduce as verbs, everything else as nouns
    pub fn lemma_hint(&self) -> PosHint {
        if self.is_verb() {
            PosHint::Verb
        } else {
            PosHint::Noun
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.as_str().to_string()
    }
}

impl TryFrom<String> for PosTag {
    type Error = TagError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        let tag = match code.as_str() {
            "NN" => PosTag::Noun,
            "NNS" => PosTag::PluralNoun,
            "VB" => PosTag::Verb,
            "VBD" => PosTag::VerbPast,
            "VBG" => PosTag::VerbGerund,
            "VBN" => PosTag::VerbParticiple,
            "VBZ" => PosTag::VerbThirdPerson,
            "VBP" => PosTag::VerbNonThirdPerson,
            "JJ" => PosTag::Adjective,
            "RB" => PosTag::Adverb,
            "DT" => PosTag::Determiner,
            "PRP" => PosTag::Pronoun,
            "IN" => PosTag::Preposition,
            "CC" => PosTag::Conjunction,
            "MD" => PosTag::Modal,
            "TO" => PosTag::To,
            _ => return Err(TagError::UnknownTag(code)),
        };
        Ok(tag)
    }
}

/// Part of speech used to pick lemmatization rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosHint {
    Noun,
    Verb,
    Adjective,
}

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("Tagger returned {actual} tags for {expected} tokens")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Untaggable token: {0}")]
    Untaggable(String),

    #[error("Unknown tag code: {0}")]
    UnknownTag(String),
}
