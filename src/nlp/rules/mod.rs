//! Rule-based English annotator
//!
//! A deterministic, dictionary-driven backend: sentence boundaries from
//! periods and blank lines, part-of-speech tags from a closed-class lexicon and
//! capitalization, DATE/TIME entities from calendar patterns.

mod entities;
mod lexicon;
mod segmenter;
mod tagger;

use super::{Annotation, AnnotatorError, Entity, LinguisticAnnotator, Token};
use std::collections::HashSet;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct RuleAnnotator {
    /// Lowercase words always tagged as proper nouns
    known_names: HashSet<String>,
    /// Longest text, in characters, accepted by any operation
    max_length: usize,
}

impl RuleAnnotator {
    /// Creates a rule-based annotator.
    ///
    /// # Arguments
    /// * `known_names` - Extra words to tag as proper nouns (e.g. lowercase team handles)
    /// * `max_length` - Longest text accepted, in characters
    ///
    /// # Returns
    /// * `Result<RuleAnnotator, AnnotatorError>` - The annotator, or an error if a known
    ///   name is not a single alphanumeric word
    pub fn new(known_names: &[String], max_length: usize) -> Result<Self, AnnotatorError> {
        let known_names = known_names
            .iter()
            .map(|name| {
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                    Err(AnnotatorError::InvalidKnownName(name.clone()))
                } else {
                    Ok(name.to_lowercase())
                }
            })
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self {
            known_names,
            max_length,
        })
    }

    fn check_length(&self, text: &str) -> Result<(), AnnotatorError> {
        let length = text.chars().count();
        if length > self.max_length {
            return Err(AnnotatorError::TextTooLong {
                length,
                max_length: self.max_length,
            });
        }
        Ok(())
    }
}

impl LinguisticAnnotator for RuleAnnotator {
    fn name(&self) -> &str {
        "rules"
    }

    fn sentence_segment(&self, text: &str) -> Result<Vec<String>, AnnotatorError> {
        self.check_length(text)?;
        Ok(segmenter::split_sentences(text)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn tokenize_and_tag(&self, sentence: &str) -> Result<Vec<Token>, AnnotatorError> {
        self.check_length(sentence)?;
        Ok(tagger::tag(&tagger::tokenize(sentence), &self.known_names))
    }

    fn recognize_entities(&self, sentence: &str) -> Result<Vec<Entity>, AnnotatorError> {
        let tokens = self.tokenize_and_tag(sentence)?;
        Ok(entities::recognize(sentence, &tokens))
    }

    fn annotate(&self, sentence: &str) -> Result<Annotation, AnnotatorError> {
        let tokens = self.tokenize_and_tag(sentence)?;
        let entities = entities::recognize(sentence, &tokens);
        trace!(
            "Annotated {} tokens and {} entities in {:?}",
            tokens.len(),
            entities.len(),
            sentence
        );
        Ok(Annotation { tokens, entities })
    }
}
