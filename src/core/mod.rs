//! Core module containing the task extraction pipeline
//!
//! This module contains:
//! - Text normalization
//! - Sentence segmentation and per-sentence task extraction
//! - The pipeline driver tying them together
//! - The `TaskRecord` output type

mod extractor;
mod normalizer;
mod pipeline;
mod task;

pub use extractor::*;
pub use task::*;
