use crate::nlp::AnnotatorError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Annotator error: {0}")]
    AnnotatorError(#[from] AnnotatorError),
}
