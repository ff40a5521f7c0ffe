use crate::constants::SAMPLE_TEXT;
use crate::errors::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Where the raw text to scan comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Text(String),
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
    /// The built-in demonstration text
    Sample,
}

impl InputSource {
    /// Reads the whole input into memory
    pub fn read(&self) -> Result<String, Error> {
        let text = match self {
            InputSource::Text(text) => text.clone(),
            InputSource::File(path) => fs::read_to_string(path)?,
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().lock().read_to_string(&mut buffer)?;
                buffer
            }
            InputSource::Sample => SAMPLE_TEXT.to_string(),
        };
        debug!("Read {} bytes from {:?}", text.len(), self);
        Ok(text)
    }
}
