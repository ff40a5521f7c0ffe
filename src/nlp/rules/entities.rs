use super::lexicon::{
    day_of_month, is_calendar_name, is_cardinal, is_ordinal, month_abbreviation, month_name,
    weekday_name,
};
use crate::nlp::{Entity, EntityLabel, PosTag, Token};
use once_cell::sync::Lazy;
use regex::Regex;

/// Clock times with a meridiem suffix attached ("5pm", "10.30am", "9a.m.")
static CLOCK_WITH_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}(\.\d{2})?(am|pm|a\.m\.|p\.m\.)$").expect("valid clock regex")
});

/// Bare clock numbers ("5", "10.30")
static CLOCK_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}(\.\d{2})?$").expect("valid clock number regex"));

/// Dotted numeric dates ("15.03.2024", "2024.03.15")
static DOTTED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}\.\d{1,2}\.\d{2,4}|\d{4}\.\d{1,2}\.\d{1,2})$")
        .expect("valid dotted date regex")
});

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(19|20)\d{2}$").expect("valid year regex"));

const RELATIVE_DAYS: &[&str] = &["today", "tomorrow", "yesterday", "weekend"];
const PERIOD_UNITS: &[&str] = &["day", "week", "weekend", "month", "year", "quarter", "fortnight"];
const PERIOD_UNITS_PLURAL: &[&str] = &["days", "weeks", "months", "years", "quarters"];
const CLOCK_UNITS_PLURAL: &[&str] = &["hours", "minutes"];
const PERIOD_MODIFIERS: &[&str] = &["this", "next", "last", "coming", "following"];
const PERIOD_EDGES: &[&str] = &["end", "beginning", "start", "middle"];
const DAY_PARTS: &[&str] = &["morning", "afternoon", "evening", "night"];
const MERIDIEMS: &[&str] = &["am", "pm", "a.m.", "p.m.", "oclock"];
const CLOCK_WORDS: &[&str] = &["noon", "midnight", "tonight", "eod"];

/// Recognizes DATE, TIME and PERSON entities over tagged tokens.
///
/// Temporal expressions are matched left to right, taking the longest match at
/// each position (TIME wins ties). PERSON entities are the remaining runs of
/// proper nouns that are not weekday or month names. The result is ordered by
/// position in the sentence.
pub fn recognize(sentence: &str, tokens: &[Token]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut covered = vec![false; tokens.len()];

    let mut i = 0;
    while i < tokens.len() {
        let time = match_time(tokens, i).unwrap_or(0);
        let date = match_date(tokens, i).unwrap_or(0);
        let (label, len) = if time >= date {
            (EntityLabel::Time, time)
        } else {
            (EntityLabel::Date, date)
        };

        if len == 0 {
            i += 1;
            continue;
        }
        entities.push(span_entity(sentence, &tokens[i..i + len], label));
        covered[i..i + len].fill(true);
        i += len;
    }

    let mut i = 0;
    while i < tokens.len() {
        let run = tokens[i..]
            .iter()
            .zip(&covered[i..])
            .take_while(|(t, c)| !**c && is_person_token(t))
            .count();
        if run == 0 {
            i += 1;
            continue;
        }
        entities.push(span_entity(sentence, &tokens[i..i + run], EntityLabel::Person));
        i += run;
    }

    entities.sort_by_key(|e| e.start);
    entities
}

fn span_entity(sentence: &str, tokens: &[Token], label: EntityLabel) -> Entity {
    let start = tokens.first().map_or(0, |t| t.start);
    let end = tokens.last().map_or(start, |t| t.end);
    Entity {
        text: sentence[start..end].to_string(),
        label,
        start,
        end,
    }
}

fn is_person_token(token: &Token) -> bool {
    token.pos == PosTag::ProperNoun && !is_calendar_name(&token.text)
}

/// Lowercase text of the token at `i`, if any
fn word(tokens: &[Token], i: usize) -> Option<&str> {
    tokens.get(i).map(|t| t.lower.as_str())
}

fn word_in(tokens: &[Token], i: usize, set: &[&str]) -> bool {
    word(tokens, i).is_some_and(|w| set.contains(&w))
}

fn is_weekday(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| weekday_name(&t.text).is_some())
}

/// Full month names, plus capitalized abbreviations when a day follows
fn is_month(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| {
        month_name(&t.text).is_some()
            || (month_abbreviation(&t.text).is_some() && is_day(tokens, i + 1))
    })
}

fn is_day(tokens: &[Token], i: usize) -> bool {
    word(tokens, i).is_some_and(|w| day_of_month(w).is_some())
}

fn is_year(tokens: &[Token], i: usize) -> bool {
    word(tokens, i).is_some_and(|w| YEAR.is_match(w))
}

/// Length of the longest TIME expression starting at `i`
fn match_time(tokens: &[Token], i: usize) -> Option<usize> {
    let w = word(tokens, i)?;

    let candidates = [
        CLOCK_WITH_SUFFIX.is_match(w).then_some(1),
        (CLOCK_NUMBER.is_match(w) && word_in(tokens, i + 1, MERIDIEMS)).then_some(2),
        CLOCK_WORDS.contains(&w).then_some(1),
        (w == "end" && word(tokens, i + 1) == Some("of") && word(tokens, i + 2) == Some("day"))
            .then_some(3),
        day_part(tokens, i),
        (is_cardinal(w) && word_in(tokens, i + 1, CLOCK_UNITS_PLURAL)).then_some(2),
    ];
    candidates.into_iter().flatten().max()
}

/// "this morning", "the afternoon", "tomorrow evening", "Monday morning"
fn day_part(tokens: &[Token], i: usize) -> Option<usize> {
    let w = word(tokens, i)?;
    let anchored = matches!(w, "this" | "the" | "tomorrow" | "yesterday" | "tonight")
        || is_weekday(tokens, i);
    (anchored && word_in(tokens, i + 1, DAY_PARTS)).then_some(2)
}

/// Length of the longest DATE expression starting at `i`
fn match_date(tokens: &[Token], i: usize) -> Option<usize> {
    let w = word(tokens, i)?;

    let candidates = [
        RELATIVE_DAYS.contains(&w).then_some(1),
        day_after_tomorrow(tokens, i),
        period_edge(tokens, i),
        period_reference(tokens, i),
        (w == "the" && word_in(tokens, i + 1, PERIOD_UNITS)).then_some(2),
        (w == "the" && word(tokens, i + 1).is_some_and(is_ordinal) && is_day(tokens, i + 1))
            .then(|| 2 + day_of_month_tail(tokens, i + 2)),
        weekday_date(tokens, i),
        month_date(tokens, i),
        day_month_date(tokens, i),
        quantity(tokens, i),
        is_year(tokens, i).then_some(1),
        DOTTED_DATE.is_match(w).then_some(1),
    ];
    candidates.into_iter().flatten().max()
}

/// "the day after tomorrow", "the day before yesterday"
fn day_after_tomorrow(tokens: &[Token], i: usize) -> Option<usize> {
    let matched = word(tokens, i) == Some("the")
        && word(tokens, i + 1) == Some("day")
        && matches!(
            (word(tokens, i + 2), word(tokens, i + 3)),
            (Some("after"), Some("tomorrow")) | (Some("before"), Some("yesterday"))
        );
    matched.then_some(4)
}

/// "[the] end of [this|next|the] week", "the beginning of March"
fn period_edge(tokens: &[Token], i: usize) -> Option<usize> {
    let lead = usize::from(word(tokens, i) == Some("the"));
    let edge = i + lead;
    if !word_in(tokens, edge, PERIOD_EDGES) || word(tokens, edge + 1) != Some("of") {
        return None;
    }
    let anchor = edge + 2;
    let anchor_len = period_reference(tokens, anchor)
        .or_else(|| {
            (word(tokens, anchor) == Some("the") && word_in(tokens, anchor + 1, PERIOD_UNITS))
                .then_some(2)
        })
        .or_else(|| month_date(tokens, anchor))
        .or_else(|| is_weekday(tokens, anchor).then_some(1))
        .or_else(|| is_year(tokens, anchor).then_some(1))?;
    Some(lead + 2 + anchor_len)
}

/// "this week", "next Monday", "the following month"
fn period_reference(tokens: &[Token], i: usize) -> Option<usize> {
    let lead = usize::from(
        word(tokens, i) == Some("the") && word_in(tokens, i + 1, &["next", "following", "coming"]),
    );
    let modifier = i + lead;
    if !word_in(tokens, modifier, PERIOD_MODIFIERS) {
        return None;
    }
    let target = modifier + 1;
    let matched = word_in(tokens, target, PERIOD_UNITS)
        || is_weekday(tokens, target)
        || tokens
            .get(target)
            .is_some_and(|t| month_name(&t.text).is_some());
    matched.then_some(lead + 2)
}

/// "Monday", "Friday March 3rd"
fn weekday_date(tokens: &[Token], i: usize) -> Option<usize> {
    if !is_weekday(tokens, i) {
        return None;
    }
    Some(1 + month_date(tokens, i + 1).unwrap_or(0))
}

/// "March", "March 3rd", "March 3rd 2024", "March 2024", "Sep 15"
fn month_date(tokens: &[Token], i: usize) -> Option<usize> {
    if !is_month(tokens, i) {
        return None;
    }
    let mut len = 1;
    if is_day(tokens, i + len) {
        len += 1;
    }
    if is_year(tokens, i + len) {
        len += 1;
    }
    Some(len)
}

/// "3rd March", "3 of March 2024"
fn day_month_date(tokens: &[Token], i: usize) -> Option<usize> {
    if !is_day(tokens, i) {
        return None;
    }
    let tail = day_of_month_tail(tokens, i + 1);
    (tail > 0).then_some(1 + tail)
}

/// Length of "[of] <month> [year]" following a day number, or 0
fn day_of_month_tail(tokens: &[Token], i: usize) -> usize {
    let of = usize::from(word(tokens, i) == Some("of"));
    let month = i + of;
    let is_full_month = tokens
        .get(month)
        .is_some_and(|t| month_name(&t.text).is_some() || month_abbreviation(&t.text).is_some());
    if !is_full_month {
        return 0;
    }
    of + 1 + usize::from(is_year(tokens, month + 1))
}

/// "two weeks", "3 days", "a week", "a couple of days"
fn quantity(tokens: &[Token], i: usize) -> Option<usize> {
    let w = word(tokens, i)?;
    if w == "a" {
        if word(tokens, i + 1) == Some("couple") && word(tokens, i + 2) == Some("of") {
            return word_in(tokens, i + 3, PERIOD_UNITS_PLURAL).then_some(4);
        }
        return word_in(tokens, i + 1, PERIOD_UNITS).then_some(2);
    }
    (is_cardinal(w) && w != "couple" && word_in(tokens, i + 1, PERIOD_UNITS_PLURAL)).then_some(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::rules::tagger::{tag, tokenize};
    use std::collections::HashSet;

    fn entities(sentence: &str) -> Vec<(String, EntityLabel)> {
        let tokens = tag(&tokenize(sentence), &HashSet::new());
        recognize(sentence, &tokens)
            .into_iter()
            .map(|e| (e.text, e.label))
            .collect()
    }

    fn temporal(sentence: &str) -> Vec<(String, EntityLabel)> {
        entities(sentence)
            .into_iter()
            .filter(|(_, label)| label.is_temporal())
            .collect()
    }

    fn date(text: &str) -> (String, EntityLabel) {
        (text.to_string(), EntityLabel::Date)
    }

    fn time(text: &str) -> (String, EntityLabel) {
        (text.to_string(), EntityLabel::Time)
    }

    #[test]
    fn test_sample_deadlines() {
        assert_eq!(
            temporal("Lisa is supposed to check the inventory before the weekend."),
            vec![date("the weekend")]
        );
        assert_eq!(
            temporal("Tom and Jerry need to discuss the marketing strategy by the end of this week."),
            vec![date("the end of this week")]
        );
        assert_eq!(
            temporal("Alice has to prepare the sales report and submit it to the director before Monday."),
            vec![date("Monday")]
        );
    }

    #[test]
    fn test_month_dates() {
        assert_eq!(temporal("Send it by March 3rd."), vec![date("March 3rd")]);
        assert_eq!(temporal("Send it by Sep. 15 please."), vec![date("Sep. 15")]);
        assert_eq!(temporal("Due March 3rd 2025."), vec![date("March 3rd 2025")]);
        assert_eq!(temporal("Due on the 3rd of March."), vec![date("the 3rd of March")]);
        assert_eq!(
            temporal("Due 15 Sep 2025 at the latest."),
            vec![date("15 Sep 2025")]
        );
        assert_eq!(temporal("Due on 15.03.2024."), vec![date("15.03.2024")]);
    }

    #[test]
    fn test_relative_dates() {
        assert_eq!(temporal("Ship it next Friday."), vec![date("next Friday")]);
        assert_eq!(temporal("Ship it within two weeks."), vec![date("two weeks")]);
        assert_eq!(temporal("Ship it tomorrow."), vec![date("tomorrow")]);
        assert_eq!(
            temporal("Ship it the day after tomorrow."),
            vec![date("the day after tomorrow")]
        );
        assert_eq!(
            temporal("Ship it by the beginning of next month."),
            vec![date("the beginning of next month")]
        );
    }

    #[test]
    fn test_times() {
        assert_eq!(temporal("Call at 5pm."), vec![time("5pm")]);
        assert_eq!(temporal("Call at 5 p.m. sharp."), vec![time("5 p.m.")]);
        assert_eq!(temporal("Call at 9 oclock."), vec![time("9 oclock")]);
        assert_eq!(temporal("Call this morning."), vec![time("this morning")]);
        assert_eq!(temporal("Call by end of day."), vec![time("end of day")]);
        assert_eq!(
            temporal("Call tomorrow morning."),
            vec![time("tomorrow morning")]
        );
    }

    #[test]
    fn test_entities_are_ordered_left_to_right() {
        assert_eq!(
            temporal("Meet at noon on Friday."),
            vec![time("noon"), date("Friday")]
        );
    }

    #[test]
    fn test_person_entities() {
        let found = entities("Tom and Jerry meet on Monday.");
        assert_eq!(
            found,
            vec![
                ("Tom".to_string(), EntityLabel::Person),
                ("Jerry".to_string(), EntityLabel::Person),
                date("Monday"),
            ]
        );
    }

    #[test]
    fn test_ambiguous_words_are_not_dates() {
        assert!(temporal("They may march on.").is_empty());
        assert!(temporal("The weather is nice.").is_empty());
        assert!(temporal("Jan will review the report.").is_empty());
    }
}
