use quill_core::types::{DisplayTokens, GrammarCorrection};

use crate::function_words::{
    NEGATOR, is_auxiliary, is_be_auxiliary, is_function_word, is_have_auxiliary,
};
use crate::participles::{
    is_irregular_past_base, is_irregular_present_base, is_past_participle, is_present_participle,
    to_past_participle, to_present_participle,
};

/// Transformation selected by the previously emitted display token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// No pending transformation
    Copy,
    /// After am/is/are/was/were
    PresentParticiple,
    /// After has/have/had
    PastParticiple,
}

impl Step {
    fn after(previous: Option<&str>) -> Self {
        match previous {
            Some(word) if is_be_auxiliary(word) => Step::PresentParticiple,
            Some(word) if is_have_auxiliary(word) => Step::PastParticiple,
            _ => Step::Copy,
        }
    }
}

/// Rewrites "auxiliary + base verb" into participle forms for display.
///
/// Looks back exactly one display token, so rewrites never chain.
#[derive(Debug, Default)]
pub struct GrammarNormalizer;

impl GrammarNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize<S: AsRef<str>>(&self, lemmas: &[S]) -> DisplayTokens {
        let mut output = DisplayTokens::default();
        let mut i = 0;

        while i < lemmas.len() {
            let token = lemmas[i].as_ref();
            let step = Step::after(output.tokens.last().map(String::as_str));

            match step {
                Step::PresentParticiple => {
                    let display = self.present(token);
                    Self::emit(&mut output, i, token, display);
                    i += 1;
                }
                Step::PastParticiple if token == NEGATOR && i + 1 < lemmas.len() => {
                    // "has not move": keep the negator, inflect the verb after it
                    output.tokens.push(token.to_string());
                    let verb = lemmas[i + 1].as_ref();
                    let display = self.past(verb);
                    Self::emit(&mut output, i + 1, verb, display);
                    i += 2;
                }
                Step::PastParticiple => {
                    let display = self.past(token);
                    Self::emit(&mut output, i, token, display);
                    i += 1;
                }
                Step::Copy => {
                    output.tokens.push(token.to_string());
                    i += 1;
                }
            }
        }

        output
    }

    fn present(&self, token: &str) -> String {
        if is_function_word(token) || is_auxiliary(token) {
            return token.to_string();
        }
        if !is_irregular_present_base(token) && is_present_participle(token) {
            return token.to_string();
        }
        to_present_participle(token)
    }

    fn past(&self, token: &str) -> String {
        if is_function_word(token) || is_auxiliary(token) {
            return token.to_string();
        }
        if !is_irregular_past_base(token) && is_past_participle(token) {
            return token.to_string();
        }
        to_past_participle(token)
    }

    /// Push a display token, recording a correction when it changed
    fn emit(output: &mut DisplayTokens, index: usize, original: &str, display: String) {
        if display != original {
            output.corrected.insert(index);
            output.corrections.insert(
                index,
                GrammarCorrection {
                    index,
                    original: original.to_string(),
                    corrected: display.clone(),
                },
            );
        }
        output.tokens.push(display);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::function_words::{BE_AUXILIARIES, HAVE_AUXILIARIES};
    use crate::participles::{IRREGULAR_PAST, IRREGULAR_PRESENT};

    fn normalize(lemmas: &[&str]) -> DisplayTokens {
        GrammarNormalizer::new().normalize(lemmas)
    }

    #[test]
    fn test_be_plus_base_verb() {
        let output = normalize(&["is", "rise"]);
        assert_eq!(output.tokens, vec!["is", "rising"]);
        assert_eq!(output.corrected, BTreeSet::from([1]));
        assert_eq!(
            output.correction(1),
            Some(&GrammarCorrection {
                index: 1,
                original: "rise".to_string(),
                corrected: "rising".to_string(),
            })
        );
    }

    #[test]
    fn test_have_not_plus_base_verb() {
        let output = normalize(&["has", "not", "move"]);
        assert_eq!(output.tokens, vec!["has", "not", "moved"]);
        assert_eq!(output.corrected, BTreeSet::from([2]));
        assert_eq!(output.correction(2).unwrap().original, "move");
        assert!(!output.is_corrected(1));
    }

    #[test]
    fn test_have_plus_base_verb() {
        assert_eq!(normalize(&["she", "has", "go"]).tokens, vec!["she", "has", "gone"]);
        assert_eq!(normalize(&["they", "have", "move"]).tokens, vec!["they", "have", "moved"]);
        assert_eq!(normalize(&["he", "was", "come"]).tokens, vec!["he", "was", "coming"]);
    }

    #[test]
    fn test_negator_at_end_is_kept() {
        let output = normalize(&["it", "has", "not"]);
        assert_eq!(output.tokens, vec!["it", "has", "not"]);
        assert!(output.corrected.is_empty());
    }

    #[test]
    fn test_function_words_are_never_rewritten() {
        let output = normalize(&["is", "the", "year", "has", "a", "field"]);
        assert_eq!(output.tokens, vec!["is", "the", "year", "has", "a", "field"]);
        assert!(output.corrections.is_empty());
    }

    #[test]
    fn test_auxiliaries_are_kept() {
        let output = normalize(&["is", "is", "has", "had"]);
        assert_eq!(output.tokens, vec!["is", "is", "has", "had"]);
        assert!(output.corrected.is_empty());
    }

    #[test]
    fn test_rewrites_do_not_chain() {
        // "rising" is not an auxiliary, so "fast" is copied
        let output = normalize(&["is", "rise", "fast"]);
        assert_eq!(output.tokens, vec!["is", "rising", "fast"]);
        assert_eq!(output.corrected, BTreeSet::from([1]));
    }

    #[test]
    fn test_unchanged_irregular_form_is_not_a_correction() {
        let output = normalize(&["has", "come"]);
        assert_eq!(output.tokens, vec!["has", "come"]);
        assert!(output.corrected.is_empty());
    }

    #[test]
    fn test_length_is_preserved() {
        for lemmas in [
            vec!["has", "not", "move", "in", "a", "year"],
            vec!["is", "is", "is"],
            vec!["has", "have", "go"],
            vec!["had", "not"],
            vec![],
        ] {
            assert_eq!(normalize(&lemmas).tokens.len(), lemmas.len());
        }
    }

    #[test]
    fn test_idempotent_for_both_auxiliary_families() {
        for lemmas in [
            vec!["bitcoin", "is", "rise", "this", "year"],
            vec!["bitcoin", "has", "not", "move", "in", "a", "year"],
            vec!["they", "have", "move", "to", "another", "city"],
            vec!["he", "was", "come", "late"],
            vec!["she", "has", "go", "and", "is", "sing"],
            vec!["we", "have", "need", "it"],
        ] {
            let once = normalize(&lemmas);
            let twice = GrammarNormalizer::new().normalize(&once.tokens);
            assert_eq!(twice.tokens, once.tokens, "{lemmas:?}");
            assert!(twice.corrected.is_empty(), "{lemmas:?}");
        }
    }

    #[test]
    fn test_after_be_every_content_word_is_a_present_participle() {
        let verbs = ["rise", "help", "make", "go", "run", "see", "bring", "determine"];
        for aux in BE_AUXILIARIES {
            for verb in verbs {
                let output = normalize(&[*aux, verb]);
                let shown = &output.tokens[1];
                let irregular = IRREGULAR_PRESENT.iter().any(|(_, form)| form == shown);
                assert!(shown.ends_with("ing") || irregular, "{aux} {verb} -> {shown}");
            }
        }
    }

    #[test]
    fn test_after_have_every_content_word_is_a_past_participle() {
        let verbs = ["move", "help", "go", "do", "be", "need", "walk", "rise"];
        for aux in HAVE_AUXILIARIES {
            for verb in verbs {
                let output = normalize(&[*aux, verb]);
                let shown = &output.tokens[1];
                let irregular = IRREGULAR_PAST.iter().any(|(_, form)| form == shown);
                assert!(
                    shown.ends_with("ed") || shown.ends_with('d') || irregular,
                    "{aux} {verb} -> {shown}"
                );
            }
        }
    }
}
