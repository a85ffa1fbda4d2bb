use std::sync::Arc;

use quill_core::corpus::Corpus;
use quill_core::language::{Lemmatizer, PosHint};

/// Inflected forms that no suffix rule can reduce
#[rustfmt::skip]
const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"),
    ("went", "go"), ("gone", "go"),
    ("came", "come"),
    ("rose", "rise"), ("risen", "rise"),
    ("saw", "see"), ("seen", "see"),
    ("took", "take"), ("taken", "take"),
    ("gave", "give"), ("given", "give"),
    ("made", "make"),
    ("said", "say"),
    ("got", "get"), ("gotten", "get"),
    ("ran", "run"),
    ("wrote", "write"), ("written", "write"),
    ("knew", "know"), ("known", "know"),
    ("thought", "think"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("found", "find"),
    ("left", "leave"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("held", "hold"),
    ("told", "tell"),
    ("sold", "sell"),
    ("began", "begin"), ("begun", "begin"),
    ("broke", "break"), ("broken", "break"),
    ("chose", "choose"), ("chosen", "choose"),
    ("drove", "drive"), ("driven", "drive"),
    ("ate", "eat"), ("eaten", "eat"),
    ("fell", "fall"), ("fallen", "fall"),
    ("flew", "fly"), ("flown", "fly"),
    ("forgot", "forget"), ("forgotten", "forget"),
    ("grew", "grow"), ("grown", "grow"),
    ("heard", "hear"),
    ("lost", "lose"),
    ("met", "meet"),
    ("paid", "pay"),
    ("sent", "send"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("spoke", "speak"), ("spoken", "speak"),
    ("won", "win"),
    ("sang", "sing"), ("sung", "sing"),
    ("swam", "swim"), ("swum", "swim"),
    ("sat", "sit"),
    ("built", "build"),
    ("meant", "mean"),
    ("led", "lead"),
    ("understood", "understand"),
];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("women", "woman"),
    ("men", "man"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Suffix detachment rules, tried in order
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
];

/// Dictionary-validated English lemmatizer.
///
/// Exceptions are checked first, then suffix rules for the hinted part of
/// speech. With a lexicon, the shortest base the lexicon knows wins, and a
/// known word with no known base is its own lemma. Without one the first
/// applicable rule wins.
pub struct EnglishLemmatizer {
    lexicon: Option<Arc<Corpus>>,
}

impl EnglishLemmatizer {
    /// Rules-only lemmatizer
    pub fn new() -> Self {
        Self { lexicon: None }
    }

    /// Lemmatizer that validates bases against the corpus vocabulary
    pub fn with_lexicon(corpus: Arc<Corpus>) -> Self {
        Self {
            lexicon: Some(corpus),
        }
    }

    fn is_known(&self, word: &str) -> bool {
        match &self.lexicon {
            Some(corpus) => corpus.contains(word),
            None => true,
        }
    }

    fn exceptions(hint: PosHint) -> &'static [(&'static str, &'static str)] {
        match hint {
            PosHint::Noun => NOUN_EXCEPTIONS,
            PosHint::Verb => VERB_EXCEPTIONS,
            PosHint::Adjective => ADJECTIVE_EXCEPTIONS,
        }
    }

    fn rules(hint: PosHint) -> &'static [(&'static str, &'static str)] {
        match hint {
            PosHint::Noun => NOUN_RULES,
            PosHint::Verb => VERB_RULES,
            PosHint::Adjective => ADJECTIVE_RULES,
        }
    }

    /// Candidate bases for `word` under one rule. Doubled final consonants
    /// ("stopped", "running") also yield the undoubled stem.
    fn detach(word: &str, suffix: &str, replacement: &str) -> Vec<String> {
        let Some(stem) = word.strip_suffix(suffix) else {
            return Vec::new();
        };
        if stem.len() < 2 {
            return Vec::new();
        }

        let mut bases = vec![format!("{stem}{replacement}")];

        if replacement.is_empty() && (suffix == "ed" || suffix == "ing") {
            let bytes = stem.as_bytes();
            let n = bytes.len();
            if n >= 3 && bytes[n - 1] == bytes[n - 2] && !b"aeiou".contains(&bytes[n - 1]) {
                bases.push(stem[..n - 1].to_string());
            }
        }

        bases
    }
}

impl Default for EnglishLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, word: &str, hint: PosHint) -> Option<String> {
        if word.is_empty() || !word.is_ascii() {
            return None;
        }

        if let Some((_, base)) = Self::exceptions(hint).iter().find(|(form, _)| *form == word) {
            return Some(base.to_string());
        }

        let mut bases = Self::rules(hint)
            .iter()
            .flat_map(|(suffix, replacement)| Self::detach(word, suffix, replacement))
            .filter(|base| self.is_known(base));

        match self.lexicon {
            None => bases.next(),
            // "fields" is in most vocabularies too, but "field" is the lemma
            Some(_) => bases
                .min_by_key(String::len)
                .or_else(|| self.is_known(word).then(|| word.to_string())),
        }
    }
}
