use serde::{Deserialize, Serialize};

/// A task detected in one sentence of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Trimmed text of the sentence holding the task
    pub task: String,
    /// First proper noun of the sentence, as written
    pub assignee: Option<String>,
    /// First date or time expression of the sentence, as written
    pub deadline: Option<String>,
}

impl TaskRecord {
    /// Creates a record with no assignee and no deadline
    ///
    /// # Arguments
    ///
    /// * `task` - Sentence text of the task
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            assignee: None,
            deadline: None,
        }
    }
}
