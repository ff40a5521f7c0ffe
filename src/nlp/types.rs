use serde::Serialize;
use std::fmt;

/// Coarse part-of-speech tags, following the Universal Dependencies tag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PosTag {
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "AUX")]
    Auxiliary,
    #[serde(rename = "ADP")]
    Adposition,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "CCONJ")]
    CoordinatingConjunction,
    #[serde(rename = "SCONJ")]
    SubordinatingConjunction,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PUNCT")]
    Punctuation,
    #[serde(rename = "X")]
    Other,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::ProperNoun => "PROPN",
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Auxiliary => "AUX",
            PosTag::Adposition => "ADP",
            PosTag::Determiner => "DET",
            PosTag::Pronoun => "PRON",
            PosTag::CoordinatingConjunction => "CCONJ",
            PosTag::SubordinatingConjunction => "SCONJ",
            PosTag::Particle => "PART",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Punctuation => "PUNCT",
            PosTag::Other => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named entity categories produced by the annotators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// Calendar dates and relative periods ("Monday", "the end of this week")
    Date,
    /// Times of day ("5pm", "this morning")
    Time,
    /// Runs of proper nouns that are not calendar names
    Person,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Person => "PERSON",
        }
    }

    /// Whether the label describes a point or period in time
    pub fn is_temporal(&self) -> bool {
        matches!(self, EntityLabel::Date | EntityLabel::Time)
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single word or punctuation token of a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Surface text, as written
    pub text: String,
    /// Lowercased surface text
    pub lower: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Byte offset of the first character within the sentence
    pub start: usize,
    /// Byte offset one past the last character within the sentence
    pub end: usize,
}

/// A recognized named entity spanning one or more tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Exact sentence slice covered by the entity
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// Full linguistic annotation of one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Tokens in sentence order
    pub tokens: Vec<Token>,
    /// Entities in the order the annotator reports them
    pub entities: Vec<Entity>,
}
