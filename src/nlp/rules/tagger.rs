use super::lexicon::{
    is_abbreviation, is_acronym, is_calendar_name, is_capitalized, is_cardinal,
    is_dotted_letters, is_initial, is_ordinal, lookup, lookup_inflected,
};
use crate::nlp::{PosTag, Token};
use std::collections::HashSet;

/// A word of a sentence before tagging, with its byte span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Splits a sentence into whitespace-separated words, detaching a trailing
/// sentence period into its own token.
///
/// Inside the sentence, abbreviations ("Dr."), initials ("J.") and dotted
/// letter forms ("p.m.") keep their period. On the last word only dotted forms
/// keep it, since the period there closes the sentence ("to Jan.").
pub fn tokenize(sentence: &str) -> Vec<RawToken<'_>> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in sentence.char_indices() {
        match (c.is_whitespace(), word_start) {
            (true, Some(start)) => {
                spans.push((start, i));
                word_start = None;
            }
            (false, None) => word_start = Some(i),
            _ => {}
        }
    }
    if let Some(start) = word_start {
        spans.push((start, sentence.len()));
    }

    let last = spans.len().saturating_sub(1);
    let mut tokens = Vec::with_capacity(spans.len() + 1);
    for (n, (start, end)) in spans.into_iter().enumerate() {
        push_word(&mut tokens, sentence, start, end, n == last);
    }
    tokens
}

fn push_word<'a>(
    tokens: &mut Vec<RawToken<'a>>,
    sentence: &'a str,
    start: usize,
    end: usize,
    last: bool,
) {
    let word = &sentence[start..end];
    let stem = word.trim_end_matches('.');

    let keeps_period = stem.is_empty()
        || stem.len() == word.len()
        || is_dotted_letters(word)
        || (!last && (is_initial(stem) || is_abbreviation(&stem.to_lowercase())));

    if keeps_period {
        tokens.push(RawToken { text: word, start, end });
    } else {
        let split = start + stem.len();
        tokens.push(RawToken {
            text: stem,
            start,
            end: split,
        });
        tokens.push(RawToken {
            text: &sentence[split..end],
            start: split,
            end,
        });
    }
}

/// Tags tokenized words with their part of speech.
///
/// # Arguments
/// * `raw` - Words of one sentence, in order
/// * `known_names` - Lowercase words always tagged as proper nouns
pub fn tag(raw: &[RawToken<'_>], known_names: &HashSet<String>) -> Vec<Token> {
    let first_word = raw.iter().position(|t| !is_punctuation(t.text));

    raw.iter()
        .enumerate()
        .map(|(i, token)| {
            let lower = token.text.to_lowercase();
            let next = raw.get(i + 1).map(|t| t.text.to_lowercase());
            let pos = tag_word(
                token.text,
                &lower,
                Some(i) == first_word,
                next.as_deref(),
                known_names,
            );
            Token {
                text: token.text.to_string(),
                lower,
                pos,
                start: token.start,
                end: token.end,
            }
        })
        .collect()
}

fn is_punctuation(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c == '.')
}

fn tag_word(
    word: &str,
    lower: &str,
    sentence_initial: bool,
    next: Option<&str>,
    known_names: &HashSet<String>,
) -> PosTag {
    if is_punctuation(word) {
        return PosTag::Punctuation;
    }
    if known_names.contains(lower) {
        return PosTag::ProperNoun;
    }
    if is_cardinal(lower) || is_ordinal(lower) {
        return PosTag::Numeral;
    }
    if lower == "to" {
        return match next.and_then(lookup) {
            Some(PosTag::Verb) | Some(PosTag::Auxiliary) => PosTag::Particle,
            _ => PosTag::Adposition,
        };
    }

    if is_capitalized(word) {
        if word == "I" {
            return PosTag::Pronoun;
        }
        if is_acronym(word) {
            return lookup(lower).unwrap_or(PosTag::ProperNoun);
        }
        if sentence_initial {
            if let Some(pos) = lookup(lower).or_else(|| lookup_inflected(lower)) {
                return pos;
            }
        }
        return PosTag::ProperNoun;
    }

    if is_calendar_name(word) {
        return PosTag::ProperNoun;
    }
    if let Some(pos) = lookup(lower) {
        return pos;
    }
    if !word.chars().any(|c| c.is_alphabetic()) {
        return PosTag::Other;
    }
    if lower.len() > 4 && lower.ends_with("ly") {
        PosTag::Adverb
    } else if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
        PosTag::Verb
    } else {
        PosTag::Noun
    }
}
