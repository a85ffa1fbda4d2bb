use std::collections::HashMap;

use quill_core::language::{PosTag, TagError, Tagger};

use crate::function_words::{NEGATOR, is_auxiliary};

#[rustfmt::skip]
const CLOSED_CLASS: &[(PosTag, &[&str])] = &[
    (PosTag::Determiner, &[
        "a", "an", "the", "this", "that", "these", "those", "every", "each",
        "some", "any", "no", "all", "another", "many", "much", "few",
        "several", "more", "most", "other", "such",
    ]),
    (PosTag::Pronoun, &[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them", "my", "your", "his", "its", "our", "their", "who", "whom",
        "whose", "which", "what",
    ]),
    (PosTag::Preposition, &[
        "of", "in", "on", "for", "with", "by", "at", "from", "into", "onto",
        "about", "over", "under", "after", "before", "between", "through",
        "during", "without", "within", "against", "among", "since", "until",
        "upon", "across", "behind", "beyond", "near", "than", "as", "if",
        "because", "though", "although", "while", "whether",
    ]),
    (PosTag::Conjunction, &["and", "or", "but", "nor", "yet", "so"]),
    (PosTag::To, &["to"]),
    (PosTag::Modal, &[
        "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    ]),
    (PosTag::Adverb, &[
        "not", "never", "very", "also", "too", "just", "only", "already",
        "always", "often", "still", "even", "now", "then", "here", "there",
        "again", "soon", "well",
    ]),
    (PosTag::Verb, &["be", "do"]),
    (PosTag::VerbNonThirdPerson, &["am", "are", "have"]),
    (PosTag::VerbThirdPerson, &["is", "has", "does"]),
    (PosTag::VerbPast, &["was", "were", "had", "did"]),
    (PosTag::VerbParticiple, &["been"]),
    (PosTag::VerbGerund, &["being"]),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "al"];

/// Deterministic rule-based English tagger.
///
/// Closed-class words come from a fixed lexicon; open-class words are tagged
/// from their left context first and their suffix second, defaulting to noun.
pub struct EnglishTagger {
    lexicon: HashMap<&'static str, PosTag>,
}

impl EnglishTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();

        for (tag, words) in CLOSED_CLASS {
            for word in *words {
                // First listing wins ("that" stays a determiner)
                lexicon.entry(*word).or_insert(*tag);
            }
        }

        Self { lexicon }
    }

    /// Tag a single open-class word given the words and tags to its left
    fn tag_open_class(&self, word: &str, left: &[(String, PosTag)]) -> PosTag {
        let previous = left.last();

        // Look through a negator to the word before it ("has not move")
        let governor = match previous {
            Some((w, _)) if w == NEGATOR => left.iter().rev().nth(1),
            other => other,
        };

        if let Some((gov_word, gov_tag)) = governor {
            if matches!(gov_tag, PosTag::Modal | PosTag::To) {
                return PosTag::Verb;
            }
            if is_auxiliary(gov_word) {
                return if word.ends_with("ing") {
                    PosTag::VerbGerund
                } else if word.ends_with("ed") || word.ends_with("en") {
                    PosTag::VerbParticiple
                } else {
                    PosTag::Verb
                };
            }
        }

        if word.len() > 4 && word.ends_with("ing") {
            return PosTag::VerbGerund;
        }
        if word.len() > 3 && word.ends_with("ed") {
            return PosTag::VerbPast;
        }
        if word.len() > 3 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| word.len() > suffix.len() + 2 && word.ends_with(suffix))
        {
            return PosTag::Adjective;
        }
        if word.len() > 2 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
            let after_subject = previous.is_some_and(|(_, tag)| tag.is_nominal());
            return if after_subject {
                PosTag::VerbThirdPerson
            } else {
                PosTag::PluralNoun
            };
        }

        PosTag::Noun
    }
}

impl Default for EnglishTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for EnglishTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<(String, PosTag)>, TagError> {
        let mut tagged: Vec<(String, PosTag)> = Vec::with_capacity(tokens.len());

        for token in tokens {
            if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(TagError::Untaggable(token.clone()));
            }

            let word = token.to_lowercase();
            let tag = match self.lexicon.get(word.as_str()) {
                Some(tag) => *tag,
                None => self.tag_open_class(&word, &tagged),
            };
            tagged.push((token.clone(), tag));
        }

        Ok(tagged)
    }
}
