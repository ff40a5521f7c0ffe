use super::task::TaskRecord;
use crate::constants::ACTION_VERBS;
use crate::nlp::{AnnotatorError, LinguisticAnnotator, PosTag};
use std::collections::HashSet;
use tracing::debug;

/// Turns sentences into task records using a linguistic annotator
#[derive(Debug, Clone, Copy)]
pub struct TaskExtractor<'a> {
    pub(super) annotator: &'a dyn LinguisticAnnotator,
}

impl<'a> TaskExtractor<'a> {
    /// Creates an extractor backed by an already loaded annotator
    pub fn new(annotator: &'a dyn LinguisticAnnotator) -> Self {
        Self { annotator }
    }

    /// Splits cleaned text into trimmed sentences, in document order.
    ///
    /// Sentences that are empty after trimming are dropped.
    pub fn segment(&self, cleaned: &str) -> Result<Vec<String>, AnnotatorError> {
        let sentences: Vec<String> = self
            .annotator
            .sentence_segment(cleaned)?
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        debug!("Segmented text into {} sentences", sentences.len());
        Ok(sentences)
    }

    /// Extracts a task record from a sentence.
    ///
    /// A sentence is a task when one of its lowercased tokens is an action verb.
    /// The assignee is the first proper noun anywhere in the sentence, whether or
    /// not it precedes the verb. The deadline is the first DATE or TIME entity.
    ///
    /// # Arguments
    ///
    /// * `sentence` - Sentence text
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if the sentence holds no action verb
    /// * `Ok(Some(record))` otherwise
    /// * `Err(AnnotatorError)` if annotation fails
    pub fn extract(&self, sentence: &str) -> Result<Option<TaskRecord>, AnnotatorError> {
        let sentence = sentence.trim();
        let annotation = self.annotator.annotate(sentence)?;

        let words: HashSet<&str> = annotation.tokens.iter().map(|t| t.lower.as_str()).collect();
        let verbs: Vec<&str> = ACTION_VERBS
            .iter()
            .copied()
            .filter(|verb| words.contains(verb))
            .collect();
        if verbs.is_empty() {
            debug!("No action verb in {:?}", sentence);
            return Ok(None);
        }

        let mut record = TaskRecord::new(sentence);

        let assignees: Vec<&str> = annotation
            .tokens
            .iter()
            .filter(|t| t.pos == PosTag::ProperNoun)
            .map(|t| t.text.as_str())
            .collect();
        if let Some(first) = assignees.first() {
            record.assignee = Some(first.to_string());
        }

        let deadlines: Vec<&str> = annotation
            .entities
            .iter()
            .filter(|e| e.label.is_temporal())
            .map(|e| e.text.as_str())
            .collect();
        if let Some(first) = deadlines.first() {
            record.deadline = Some(first.to_string());
        }

        debug!(
            "Task found (verbs: {:?}, assignee: {:?}, deadline: {:?}) in {:?}",
            verbs, record.assignee, record.deadline, sentence
        );
        Ok(Some(record))
    }
}
