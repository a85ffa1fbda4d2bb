use std::collections::{BTreeMap, BTreeSet};

use quill_core::corpus::Corpus;
use quill_core::language::PosTag;
use quill_core::types::{
    Analysis, DisplayTokens, ErrorKind, ErrorRecord, GrammarCorrection, Token,
};

use crate::report::{by_distance, grammar_fixes, highlight, render, render_lookup};

fn token(position: usize, word: &str) -> Token {
    Token {
        position,
        surface: word.to_string(),
        lemma: word.to_string(),
        tag: PosTag::Noun,
    }
}

fn error(position: usize, word: &str, suggestions: &[&str]) -> ErrorRecord {
    ErrorRecord {
        word: word.to_string(),
        lemma: word.to_string(),
        position,
        kind: ErrorKind::NonWord,
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

/// "bitcoin is rise in mny fields" after analysis
fn analysis() -> Analysis {
    let words = ["bitcoin", "is", "rise", "in", "mny", "fields"];
    let correction = GrammarCorrection {
        index: 2,
        original: "rise".to_string(),
        corrected: "rising".to_string(),
    };

    Analysis {
        tokens: words.iter().enumerate().map(|(i, w)| token(i, w)).collect(),
        errors: vec![error(4, "mny", &["money", "many", "any"])],
        display: DisplayTokens {
            tokens: ["bitcoin", "is", "rising", "in", "mny", "fields"]
                .map(String::from)
                .to_vec(),
            corrected: BTreeSet::from([2]),
            corrections: BTreeMap::from([(2, correction)]),
        },
    }
}

#[test]
fn test_highlight_marks_both_kinds() {
    assert_eq!(highlight(&analysis()), "bitcoin is {rising} in [mny] fields");
}

#[test]
fn test_suggestions_sorted_by_distance_keep_rank_among_equals() {
    let error = error(0, "mny", &["money", "man", "many", "any"]);
    assert_eq!(by_distance(&error), vec!["many", "any", "money", "man"]);
}

#[test]
fn test_render_lists_spelling_and_grammar() {
    let report = render(&analysis());
    assert!(report.starts_with("bitcoin is {rising} in [mny] fields"));
    assert!(report.contains("Spelling:"));
    assert!(report.contains("  mny (non-word, word 5): many, any, money"));
    assert!(report.contains("Grammar:"));
    assert!(report.contains("  rise -> rising (word 3)"));
}

#[test]
fn test_flagged_word_without_candidates() {
    let mut analysis = analysis();
    analysis.errors = vec![error(4, "mny", &[])];
    assert!(render(&analysis).contains("  mny (non-word, word 5): no suggestions"));
}

#[test]
fn test_clean_report() {
    let analysis = Analysis {
        tokens: vec![token(0, "hello")],
        errors: Vec::new(),
        display: DisplayTokens {
            tokens: vec!["hello".to_string()],
            ..DisplayTokens::default()
        },
    };
    assert_eq!(render(&analysis), "hello\nNo errors found.");
}

/// One sentence with its lemma stream already normalized
fn normalized(surfaces: &[&str], lemmas: &[&str], display: &[&str], fixed: usize) -> Analysis {
    let correction = GrammarCorrection {
        index: fixed,
        original: lemmas[fixed].to_string(),
        corrected: display[fixed].to_string(),
    };
    Analysis {
        tokens: surfaces
            .iter()
            .zip(lemmas)
            .enumerate()
            .map(|(i, (surface, lemma))| Token {
                position: i,
                surface: surface.to_string(),
                lemma: lemma.to_string(),
                tag: PosTag::Noun,
            })
            .collect(),
        errors: Vec::new(),
        display: DisplayTokens {
            tokens: display.iter().map(|t| t.to_string()).collect(),
            corrected: BTreeSet::from([fixed]),
            corrections: BTreeMap::from([(fixed, correction)]),
        },
    }
}

#[test]
fn test_participle_already_written_is_not_reported() {
    let analysis = normalized(
        &["bitcoin", "is", "rising"],
        &["bitcoin", "is", "rise"],
        &["bitcoin", "is", "rising"],
        2,
    );
    assert!(grammar_fixes(&analysis).is_empty());
    assert_eq!(render(&analysis), "bitcoin is rising\nNo errors found.");
}

#[test]
fn test_grammar_fix_reports_the_written_word() {
    let analysis = normalized(
        &["she", "has", "went"],
        &["she", "has", "go"],
        &["she", "has", "gone"],
        2,
    );
    assert_eq!(highlight(&analysis), "she has {gone}");
    assert!(render(&analysis).contains("  went -> gone (word 3)"));
}

#[test]
fn test_uncorrected_words_are_shown_as_written() {
    let analysis = normalized(
        &["ai", "helps", "is", "rise"],
        &["ai", "help", "is", "rise"],
        &["ai", "help", "is", "rising"],
        3,
    );
    assert_eq!(highlight(&analysis), "ai helps is {rising}");
}

#[test]
fn test_lookup() {
    let corpus = Corpus::new(
        ["many".to_string()],
        [("many".to_string(), 4)],
        Vec::<((String, String), u64)>::new(),
        &[],
    );
    assert_eq!(render_lookup("many", &corpus), "many: in vocabulary, frequency 4 of 4");
    assert_eq!(render_lookup("mny", &corpus), "mny: not in vocabulary");
}
