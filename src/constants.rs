/// Lowercase words whose presence marks a sentence as a task
pub const ACTION_VERBS: [&str; 9] = [
    "review", "schedule", "submit", "discuss", "approve", "analyze", "check", "send", "deliver",
];

/// Demonstration text used by `--sample`
pub const SAMPLE_TEXT: &str = "
Lisa is supposed to check the inventory before the weekend.
Tom and Jerry need to discuss the marketing strategy by the end of this week.
Alice has to prepare the sales report and submit it to the director before Monday.

";

/// Annotator backend loaded when the configuration names none
pub const DEFAULT_ANNOTATOR: &str = "rules";

/// Longest text, in characters, the annotator accepts by default
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

/// Log filter used when neither the CLI nor the configuration sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Directory and file name prefix of the rotating log file
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "taskscan.log";
