//! Linguistic annotation used by the task extractor
//!
//! This module contains:
//! - The `LinguisticAnnotator` trait: sentence segmentation, tokenization with
//!   part-of-speech tagging, and named-entity recognition
//! - The token, entity and annotation types shared by every backend
//! - The rule-based English backend (`rules`)

pub mod rules;
mod types;

use crate::config::AnnotatorConfig;
use tracing::info;

pub use rules::RuleAnnotator;
pub use types::*;

/// Errors raised while loading an annotator or annotating text
#[derive(Debug, thiserror::Error)]
pub enum AnnotatorError {
    #[error("Unknown annotator backend '{0}'")]
    UnknownBackend(String),
    #[error("Invalid known name '{0}': names must be a single word of letters and digits")]
    InvalidKnownName(String),
    #[error("Text of length {length} exceeds the maximum of {max_length} characters")]
    TextTooLong { length: usize, max_length: usize },
}

/// Capabilities the task extractor needs from an NLP backend.
///
/// Implementations must be deterministic: annotating the same text twice
/// yields the same result.
pub trait LinguisticAnnotator: std::fmt::Debug + Send + Sync {
    /// Backend name, as used in the configuration
    fn name(&self) -> &str;

    /// Splits text into raw sentence spans, in document order.
    /// Spans are not trimmed.
    fn sentence_segment(&self, text: &str) -> Result<Vec<String>, AnnotatorError>;

    /// Tokenizes a sentence and tags every token with its part of speech
    fn tokenize_and_tag(&self, sentence: &str) -> Result<Vec<Token>, AnnotatorError>;

    /// Recognizes named entities, ordered left to right
    fn recognize_entities(&self, sentence: &str) -> Result<Vec<Entity>, AnnotatorError>;

    /// Runs tagging and entity recognition over one sentence
    fn annotate(&self, sentence: &str) -> Result<Annotation, AnnotatorError> {
        Ok(Annotation {
            tokens: self.tokenize_and_tag(sentence)?,
            entities: self.recognize_entities(sentence)?,
        })
    }
}

/// Loads the annotator backend named in the configuration.
///
/// # Arguments
/// * `config` - Annotator configuration (backend name and backend options)
///
/// # Returns
/// * `Result<Box<dyn LinguisticAnnotator>, AnnotatorError>` - The loaded backend, or an
///   error if the backend is unknown or its options are invalid
pub fn load_annotator(
    config: &AnnotatorConfig,
) -> Result<Box<dyn LinguisticAnnotator>, AnnotatorError> {
    let annotator: Box<dyn LinguisticAnnotator> = match config.backend.as_str() {
        "rules" => Box::new(RuleAnnotator::new(&config.known_names, config.max_length)?),
        other => return Err(AnnotatorError::UnknownBackend(other.to_string())),
    };

    info!(
        "Loaded annotator backend '{}' ({} known names)",
        annotator.name(),
        config.known_names.len()
    );
    Ok(annotator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rules_backend() {
        let annotator = load_annotator(&AnnotatorConfig::default()).unwrap();
        assert_eq!(annotator.name(), "rules");
    }

    #[test]
    fn test_unknown_backend_fails_at_load() {
        let config = AnnotatorConfig {
            backend: "spacy".to_string(),
            ..AnnotatorConfig::default()
        };
        let err = load_annotator(&config).unwrap_err();
        assert!(matches!(err, AnnotatorError::UnknownBackend(name) if name == "spacy"));
    }

    #[test]
    fn test_invalid_known_name_fails_at_load() {
        let config = AnnotatorConfig {
            known_names: vec!["Mary Ann".to_string()],
            ..AnnotatorConfig::default()
        };
        assert!(matches!(
            load_annotator(&config),
            Err(AnnotatorError::InvalidKnownName(_))
        ));
    }
}
