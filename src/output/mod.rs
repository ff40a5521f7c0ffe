//! Rendering of extracted task records
//!
//! Records can be printed as human-readable text or serialized as JSON,
//! JSON lines or YAML, to stdout or to a file.

use crate::core::TaskRecord;
use crate::errors::Error;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Output formats for the task records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One indented block per task
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
    /// YAML sequence
    Yaml,
}

/// Renders task records in the requested format
///
/// # Arguments
/// * `tasks` - Records in pipeline order
/// * `format` - Output format
/// * `color` - Whether text output may use terminal colors
///
/// # Returns
/// * `Result<String, Error>` - The rendered document, ending with a newline
pub fn render(tasks: &[TaskRecord], format: OutputFormat, color: bool) -> Result<String, Error> {
    let rendered = match format {
        OutputFormat::Text => render_text(tasks, color),
        OutputFormat::Json => serde_json::to_string_pretty(tasks)? + "\n",
        OutputFormat::Jsonl => {
            let mut lines = String::new();
            for task in tasks {
                lines.push_str(&serde_json::to_string(task)?);
                lines.push('\n');
            }
            lines
        }
        OutputFormat::Yaml => serde_yaml::to_string(tasks)?,
    };
    Ok(rendered)
}

fn render_text(tasks: &[TaskRecord], color: bool) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let blocks: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            format!(
                "{}. {}\n   {} {}\n   {} {}\n",
                i + 1,
                paint(&task.task, color, |s: &str| s.bold()),
                paint("assignee:", color, |s: &str| s.cyan()),
                task.assignee.as_deref().unwrap_or("-"),
                paint("deadline:", color, |s: &str| s.cyan()),
                task.deadline.as_deref().unwrap_or("-"),
            )
        })
        .collect();
    blocks.join("\n")
}

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Writes rendered output to a file, or to stdout when no file is given
pub fn write_output(rendered: &str, file: Option<&Path>) -> Result<(), Error> {
    match file {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Wrote tasks to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
