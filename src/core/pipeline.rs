use super::normalizer::normalize;
use super::task::TaskRecord;
use super::TaskExtractor;
use crate::nlp::AnnotatorError;
use tracing::info;

impl TaskExtractor<'_> {
    /// Runs the whole pipeline over raw text
    ///
    /// # Arguments
    ///
    /// * `text` - Raw input text
    ///
    /// # Details
    ///
    /// - Normalizes the text (see `normalize`)
    /// - Segments it into sentences
    /// - Extracts at most one task record per sentence
    ///
    /// Records keep the order of their sentences. The first annotator error
    /// aborts the run.
    pub fn run(&self, text: &str) -> Result<Vec<TaskRecord>, AnnotatorError> {
        let cleaned = normalize(text);
        let sentences = self.segment(&cleaned)?;

        let mut tasks = Vec::new();
        for sentence in &sentences {
            if let Some(record) = self.extract(sentence)? {
                tasks.push(record);
            }
        }

        info!(
            "Extracted {} tasks from {} sentences using the '{}' annotator",
            tasks.len(),
            sentences.len(),
            self.annotator.name()
        );
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLE_TEXT;
    use crate::nlp::RuleAnnotator;

    fn run(text: &str) -> Vec<TaskRecord> {
        let annotator = RuleAnnotator::new(&[], 1_000_000).unwrap();
        TaskExtractor::new(&annotator).run(text).unwrap()
    }

    fn record(task: &str, assignee: Option<&str>, deadline: Option<&str>) -> TaskRecord {
        TaskRecord {
            task: task.to_string(),
            assignee: assignee.map(str::to_string),
            deadline: deadline.map(str::to_string),
        }
    }

    #[test]
    fn test_sample_text() {
        assert_eq!(
            run(SAMPLE_TEXT),
            vec![
                record(
                    "Lisa is supposed to check the inventory before the weekend.",
                    Some("Lisa"),
                    Some("the weekend"),
                ),
                record(
                    "Tom and Jerry need to discuss the marketing strategy by the end of this week.",
                    Some("Tom"),
                    Some("the end of this week"),
                ),
                record(
                    "Alice has to prepare the sales report and submit it to the director before Monday.",
                    Some("Alice"),
                    Some("Monday"),
                ),
            ]
        );
    }

    #[test]
    fn test_non_task_sentences_are_skipped_in_order() {
        let text = "The weather is nice today. Bob will review the draft. \
                    Lunch was great. Carol must approve the budget tomorrow.";
        let tasks = run(text);
        let assignees: Vec<_> = tasks.iter().map(|t| t.assignee.as_deref()).collect();
        assert_eq!(assignees, vec![Some("Bob"), Some("Carol")]);
        assert_eq!(tasks[1].deadline.as_deref(), Some("tomorrow"));
    }

    #[test]
    fn test_run_is_idempotent() {
        assert_eq!(run(SAMPLE_TEXT), run(SAMPLE_TEXT));
    }

    #[test]
    fn test_empty_input_yields_no_tasks() {
        assert!(run("").is_empty());
        assert!(run("  \n\n ?!, ").is_empty());
    }

    #[test]
    fn test_punctuation_inside_dates_is_stripped_before_annotation() {
        let tasks = run("Dana, please send the invoice by March, 3rd.");
        assert_eq!(
            tasks,
            vec![record(
                "Dana please send the invoice by March 3rd.",
                Some("Dana"),
                Some("March 3rd"),
            )]
        );
    }

    #[test]
    fn test_times_survive_normalization() {
        let tasks = run("Ed: check the servers at 5 p.m. today!");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task, "Ed check the servers at 5 p.m. today");
        assert_eq!(tasks[0].deadline.as_deref(), Some("5 p.m."));
    }

    #[test]
    fn test_name_like_abbreviation_before_new_sentence_keeps_both_tasks() {
        assert_eq!(
            run("Please send the slides to Jan. Bob must review the plan."),
            vec![
                record("Please send the slides to Jan.", Some("Jan"), None),
                record("Bob must review the plan.", Some("Bob"), None),
            ]
        );
    }

    #[test]
    fn test_label_initial_before_new_sentence_keeps_both_tasks() {
        assert_eq!(
            run("Send the draft to Team A. Carol must review the plan."),
            vec![
                record("Send the draft to Team A.", Some("Team"), None),
                record("Carol must review the plan.", Some("Carol"), None),
            ]
        );
    }

    #[test]
    fn test_pronoun_i_before_new_sentence_keeps_both_tasks() {
        let tasks = run("Bob will check it and so will I. Carol must approve the budget.");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].task, "Bob will check it and so will I.");
        assert_eq!(tasks[1].assignee.as_deref(), Some("Carol"));
    }

    #[test]
    fn test_titles_and_name_initials_stay_in_one_task() {
        assert_eq!(
            run("Dr. Brown will review the plan by Sep. 15. J. Smith will send it."),
            vec![
                record(
                    "Dr. Brown will review the plan by Sep. 15.",
                    Some("Dr."),
                    Some("Sep. 15"),
                ),
                record("J. Smith will send it.", Some("J."), None),
            ]
        );
    }

    #[test]
    fn test_annotator_errors_abort_the_run() {
        let annotator = RuleAnnotator::new(&[], 20).unwrap();
        let result = TaskExtractor::new(&annotator)
            .run("Bob will review the draft. Carol must approve it.");
        assert!(matches!(result, Err(AnnotatorError::TextTooLong { .. })));
    }
}
