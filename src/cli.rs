use crate::output::OutputFormat;
use crate::utils::InputSource;
use clap::Parser;
use std::path::PathBuf;

/// Extract tasks, assignees and deadlines from free-form text
#[derive(Parser, Debug)]
#[command(name = "taskscan", version)]
pub struct Cli {
    /// File to read the text from ("-" for standard input)
    #[arg(conflicts_with_all = ["text", "sample"])]
    pub input: Option<PathBuf>,

    /// Text to scan, given inline
    #[arg(short, long, conflicts_with = "sample")]
    pub text: Option<String>,

    /// Scan the built-in demonstration text
    #[arg(long)]
    pub sample: bool,

    /// Path to the YAML configuration file
    #[arg(short, long, env = "TASKSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the tasks to this file instead of stdout (overrides the configuration)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "warn"
    #[arg(long, env = "TASKSCAN_LOG")]
    pub logging_level: Option<String>,

    /// Also write logs to a daily rotating file in the "logs" directory
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Resolves where the input text comes from
    pub fn input_source(&self) -> InputSource {
        if self.sample {
            return InputSource::Sample;
        }
        if let Some(text) = &self.text {
            return InputSource::Text(text.clone());
        }
        match &self.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("taskscan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_input_sources() {
        assert_eq!(parse(&[]).input_source(), InputSource::Stdin);
        assert_eq!(parse(&["-"]).input_source(), InputSource::Stdin);
        assert_eq!(
            parse(&["notes.txt"]).input_source(),
            InputSource::File(PathBuf::from("notes.txt"))
        );
        assert_eq!(
            parse(&["--text", "Bob will review it."]).input_source(),
            InputSource::Text("Bob will review it.".to_string())
        );
        assert_eq!(parse(&["--sample"]).input_source(), InputSource::Sample);
    }

    #[test]
    fn test_conflicting_inputs_are_rejected() {
        let args = ["taskscan", "notes.txt", "--text", "hi"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_format_flag() {
        let cli = parse(&["--sample", "--format", "jsonl", "-o", "out.jsonl"]);
        assert_eq!(cli.format, Some(OutputFormat::Jsonl));
        assert_eq!(cli.output, Some(PathBuf::from("out.jsonl")));
        assert!(Cli::try_parse_from(["taskscan", "--format", "csv"]).is_err());
    }
}
