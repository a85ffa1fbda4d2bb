use quill_core::corpus::Corpus;
use quill_core::distance::levenshtein;
use quill_core::types::{Analysis, ErrorRecord, GrammarCorrection};

/// Written form of the token at `index`, falling back to the display stream
fn surface(analysis: &Analysis, index: usize) -> &str {
    match analysis.tokens.get(index) {
        Some(token) => &token.surface,
        None => analysis.display.tokens.get(index).map_or("", String::as_str),
    }
}

/// Grammar corrections that change what was actually written, paired with the
/// written word. Misspelled positions are left to the spelling section.
pub fn grammar_fixes(analysis: &Analysis) -> Vec<(&str, &GrammarCorrection)> {
    analysis
        .display
        .corrections
        .values()
        .filter(|c| analysis.error_at(c.index).is_none())
        .map(|c| (surface(analysis, c.index), c))
        .filter(|(written, c)| c.corrected != *written)
        .collect()
}

/// Written text with `[word]` around spelling errors and `{word}` around
/// grammar corrections. A spelling error wins over a grammar rewrite.
pub fn highlight(analysis: &Analysis) -> String {
    let fixes = grammar_fixes(analysis);

    (0..analysis.display.tokens.len())
        .map(|i| match analysis.error_at(i) {
            Some(error) => format!("[{}]", error.word),
            None => match fixes.iter().find(|(_, c)| c.index == i) {
                Some((_, correction)) => format!("{{{}}}", correction.corrected),
                None => surface(analysis, i).to_string(),
            },
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Suggestions closest to the written word first; rank order among equals
pub fn by_distance(error: &ErrorRecord) -> Vec<&str> {
    let mut suggestions: Vec<&str> = error.suggestions.iter().map(String::as_str).collect();
    suggestions.sort_by_key(|s| levenshtein(&error.word, s));
    suggestions
}

pub fn render(analysis: &Analysis) -> String {
    let mut lines = vec![highlight(analysis)];
    let grammar = grammar_fixes(analysis);

    if analysis.errors.is_empty() && grammar.is_empty() {
        lines.push("No errors found.".to_string());
        return lines.join("\n");
    }

    if !analysis.errors.is_empty() {
        lines.push(String::new());
        lines.push("Spelling:".to_string());
        for error in &analysis.errors {
            let suggestions = if error.has_suggestions() {
                by_distance(error).join(", ")
            } else {
                "no suggestions".to_string()
            };
            lines.push(format!(
                "  {} ({}, word {}): {}",
                error.word,
                error.kind.as_str(),
                error.position + 1,
                suggestions
            ));
        }
    }

    if !grammar.is_empty() {
        lines.push(String::new());
        lines.push("Grammar:".to_string());
        for (written, correction) in grammar {
            lines.push(format!(
                "  {} -> {} (word {})",
                written,
                correction.corrected,
                correction.index + 1
            ));
        }
    }

    lines.join("\n")
}

pub fn render_lookup(word: &str, corpus: &Corpus) -> String {
    if corpus.contains(word) {
        format!(
            "{word}: in vocabulary, frequency {} of {}",
            corpus.frequency(word),
            corpus.total_unigrams()
        )
    } else {
        format!("{word}: not in vocabulary")
    }
}
