use super::lexicon::{
    is_abbreviation, is_continuing_abbreviation, is_dotted_letters, is_initial, lookup,
};
use crate::nlp::PosTag;

/// Splits text into raw sentence spans.
///
/// A sentence ends after a period followed by whitespace or the end of the text.
/// Titles ("Dr.") never end a sentence. Other abbreviations ("Jan.", "Inc.")
/// and initials ("J.") end one only when the next word starts a new clause, and
/// dotted forms ("p.m.") only when the next word is not lowercase. A blank line
/// also ends a sentence. Spans keep their surrounding whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '.' => {
                let next = i + c.len_utf8();
                let at_gap = chars.peek().map_or(true, |(_, n)| n.is_whitespace());
                if at_gap && ends_sentence(text, i, next) {
                    sentences.push(&text[start..next]);
                    start = next;
                }
            }
            '\n' => {
                if starts_blank_line(&text[i + 1..]) && !text[start..i].trim().is_empty() {
                    sentences.push(&text[start..i]);
                    start = i;
                }
            }
            _ => {}
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Whether the period at byte `dot` ends a sentence. `next` is the byte after it.
fn ends_sentence(text: &str, dot: usize, next: usize) -> bool {
    let before = &text[..dot];
    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default();
    if word.is_empty() || word.ends_with('.') {
        return true;
    }
    let lower = word.to_lowercase();
    if is_continuing_abbreviation(&lower) {
        return false;
    }

    let Some(following) = text[next..].split_whitespace().next() else {
        return true;
    };
    let starts_upper = following.chars().next().is_some_and(char::is_uppercase);

    if is_dotted_letters(word) {
        following.chars().next().map_or(true, |c| !c.is_lowercase())
    } else if word == "I" {
        true
    } else if is_initial(word) {
        let previous = before[..before.len() - word.len()].split_whitespace().next_back();
        starts_upper && !continues_name(previous, following)
    } else if is_abbreviation(&lower) {
        starts_upper
    } else {
        true
    }
}

/// Whether an initial between `previous` and `following` is part of a name
/// ("J. Smith", "John F. Kennedy") rather than a label closing a sentence
/// ("Team A. Carol ...")
fn continues_name(previous: Option<&str>, following: &str) -> bool {
    let following = following.trim_end_matches('.').to_lowercase();
    if lookup(&following).is_some() {
        return false;
    }
    let labels_previous = previous.is_some_and(|word| {
        !word.ends_with('.') && lookup(&word.to_lowercase()) == Some(PosTag::Noun)
    });
    !labels_previous
}

/// Whether the text right after a line break holds another line break before
/// any non-whitespace character
fn starts_blank_line(rest: &str) -> bool {
    rest.chars()
        .take_while(|c| c.is_whitespace())
        .any(|c| c == '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trimmed(text: &str) -> Vec<&str> {
        split_sentences(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    #[test]
    fn test_split_on_periods() {
        let text = "Lisa will check the stock. Tom will send the invoice.";
        assert_eq!(
            trimmed(text),
            vec!["Lisa will check the stock.", "Tom will send the invoice."]
        );
    }

    #[test]
    fn test_spans_cover_text() {
        let text = "\nFirst one.  \nSecond one.  \n\n";
        let spans = split_sentences(text);
        assert_eq!(spans.concat(), text);
        assert_eq!(spans[0], "\nFirst one.");
    }

    #[test]
    fn test_abbreviations_and_initials_do_not_split() {
        let text = "Dr. Brown will review it. J. Smith agreed.";
        assert_eq!(
            trimmed(text),
            vec!["Dr. Brown will review it.", "J. Smith agreed."]
        );
    }

    #[test]
    fn test_abbreviation_before_new_clause_splits() {
        let text = "Please send the slides to Jan. Bob must review the plan.";
        assert_eq!(
            trimmed(text),
            vec!["Please send the slides to Jan.", "Bob must review the plan."]
        );
        assert_eq!(
            trimmed("Acme Inc. Carol will sign it."),
            vec!["Acme Inc.", "Carol will sign it."]
        );
    }

    #[test]
    fn test_month_abbreviation_before_day_does_not_split() {
        assert_eq!(trimmed("Due Sep. 15 at noon."), vec!["Due Sep. 15 at noon."]);
        assert_eq!(trimmed("Jan. and Feb. are busy."), vec!["Jan. and Feb. are busy."]);
    }

    #[test]
    fn test_label_initials_and_pronoun_i_split() {
        assert_eq!(
            trimmed("Send the draft to Team A. Carol must review the plan."),
            vec!["Send the draft to Team A.", "Carol must review the plan."]
        );
        assert_eq!(
            trimmed("Bob will check it and so will I. Carol must approve the budget."),
            vec!["Bob will check it and so will I.", "Carol must approve the budget."]
        );
        assert_eq!(
            trimmed("Ask J. The others can wait."),
            vec!["Ask J.", "The others can wait."]
        );
    }

    #[test]
    fn test_initials_inside_names_do_not_split() {
        assert_eq!(
            trimmed("John F. Kennedy will review it."),
            vec!["John F. Kennedy will review it."]
        );
        assert_eq!(
            trimmed("Ask J. R. Smith to send it."),
            vec!["Ask J. R. Smith to send it."]
        );
    }

    #[test]
    fn test_dotted_time_followed_by_lowercase() {
        let text = "Send it by 5 p.m. tomorrow. Then relax.";
        assert_eq!(
            trimmed(text),
            vec!["Send it by 5 p.m. tomorrow.", "Then relax."]
        );
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        assert_eq!(trimmed("Budget grew 2.5 percent."), vec!["Budget grew 2.5 percent."]);
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        let text = "Action items\n\nAlice will submit the draft";
        assert_eq!(
            trimmed(text),
            vec!["Action items", "Alice will submit the draft"]
        );
    }

    #[test]
    fn test_single_line_break_does_not_split() {
        assert_eq!(
            trimmed("Tom will review\nthe contract."),
            vec!["Tom will review\nthe contract."]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
    }
}
