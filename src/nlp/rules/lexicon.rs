use crate::nlp::PosTag;
use chrono::{Month, Weekday};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Closed-class words and common open-class words, keyed by lowercase form
static LEXICON: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    let mut lexicon = HashMap::new();

    let groups: [(PosTag, &[&str]); 13] = [
        (
            PosTag::Determiner,
            &[
                "a", "an", "the", "this", "that", "these", "those", "every", "each", "some",
                "any", "no", "all", "both", "either", "neither", "another",
            ],
        ),
        (
            PosTag::Pronoun,
            &[
                "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
                "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours",
                "theirs", "myself", "yourself", "himself", "herself", "itself", "ourselves",
                "themselves", "someone", "somebody", "anyone", "anybody", "everyone",
                "everybody", "nobody", "something", "anything", "everything", "nothing",
                "who", "whom", "whose", "what", "which",
            ],
        ),
        (
            PosTag::Adposition,
            &[
                "about", "above", "across", "after", "against", "along", "among", "around",
                "at", "before", "behind", "below", "beneath", "beside", "between", "beyond",
                "by", "despite", "during", "except", "for", "from", "in", "inside", "into",
                "near", "of", "off", "on", "onto", "outside", "over", "past", "per", "since",
                "through", "throughout", "till", "toward", "towards", "under", "until",
                "upon", "via", "with", "within", "without", "to",
            ],
        ),
        (PosTag::CoordinatingConjunction, &["and", "or", "but", "nor"]),
        (
            PosTag::SubordinatingConjunction,
            &[
                "if", "because", "although", "though", "while", "whether", "unless",
                "whereas", "once",
            ],
        ),
        (
            PosTag::Auxiliary,
            &[
                "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had",
                "do", "does", "did", "will", "would", "shall", "should", "can", "could",
                "may", "might", "must",
            ],
        ),
        (PosTag::Particle, &["not", "nt"]),
        (
            PosTag::Adverb,
            &[
                "also", "always", "never", "soon", "now", "then", "here", "there", "very",
                "just", "still", "already", "again", "asap", "ever", "often", "too", "so",
                "later", "out", "up", "down", "together", "first",
            ],
        ),
        (PosTag::Interjection, &["please", "hi", "hello", "thanks", "ok", "okay"]),
        (
            PosTag::Adjective,
            &[
                "new", "good", "nice", "final", "next", "last", "annual", "quarterly",
                "weekly", "monthly", "daily", "urgent", "important", "early", "late",
                "supposed", "able", "ready", "responsible", "due", "whole", "other", "same",
                "following", "coming",
            ],
        ),
        (
            PosTag::Verb,
            &[
                "review", "schedule", "submit", "discuss", "approve", "analyze", "check",
                "send", "deliver", "need", "needs", "prepare", "make", "take", "give", "get",
                "go", "come", "finish", "complete", "update", "write", "call", "meet", "plan",
                "create", "share", "follow", "ensure", "confirm", "organize", "book",
                "arrange", "handle", "draft", "present", "fix", "test", "email", "contact",
                "want", "ask", "remind", "help", "let", "start", "begin", "work", "look",
                "find", "keep", "try", "read", "run", "set", "put", "bring", "order", "buy",
                "pay", "sign", "file", "march", "agreed", "said", "asked", "promised",
            ],
        ),
        (
            PosTag::Noun,
            &[
                "team", "report", "meeting", "project", "budget", "client", "customer",
                "manager", "director", "inventory", "strategy", "document", "documents",
                "invoice", "presentation", "proposal", "contract", "deadline", "task",
                "tasks", "day", "days", "week", "weeks", "weekend", "month", "months", "year",
                "years", "quarter", "morning", "afternoon", "evening", "night", "time",
                "today", "tomorrow", "yesterday", "tonight", "office", "weather", "sales",
                "marketing", "notes", "agenda", "data", "results", "code", "release", "end",
                "beginning", "middle", "noon", "midnight", "eod", "hours", "minutes",
                "option", "phase", "group", "section", "room", "step", "stage", "version",
                "part", "item", "level", "unit",
            ],
        ),
        (
            PosTag::Numeral,
            &[
                "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
                "eleven", "twelve", "fifteen", "twenty", "thirty", "hundred", "couple",
            ],
        ),
    ];

    for (tag, words) in groups {
        for word in words {
            lexicon.insert(*word, tag);
        }
    }
    lexicon
});

/// Abbreviations whose trailing period does not end a sentence
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "inc", "ltd", "co",
        "corp", "dept", "approx", "e.g", "i.e", "jan", "feb", "mar", "apr", "jun",
        "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "tues", "wed", "thu",
        "thur", "thurs", "fri", "sat", "sun",
    ]
    .into_iter()
    .collect()
});

/// Abbreviations that never close a sentence: titles before a name and
/// connectives that always take a complement
const CONTINUING_ABBREVIATIONS: [&str; 12] = [
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "approx", "e.g", "i.e",
];

/// Ordinal words with the day of month they denote
static ORDINAL_WORDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
        "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
        "seventeenth", "eighteenth", "nineteenth", "twentieth", "twentyfirst",
        "twentysecond", "twentythird", "twentyfourth", "twentyfifth", "twentysixth",
        "twentyseventh", "twentyeighth", "twentyninth", "thirtieth", "thirtyfirst",
    ]
    .into_iter()
    .zip(1..)
    .collect()
});

/// Looks up the lexicon tag of a lowercase word
pub fn lookup(lower: &str) -> Option<PosTag> {
    LEXICON.get(lower).copied()
}

/// Whether a lowercase word (without its trailing period) is a known abbreviation
pub fn is_abbreviation(lower: &str) -> bool {
    ABBREVIATIONS.contains(lower)
}

/// Whether a lowercase abbreviation is always followed by more of its sentence
pub fn is_continuing_abbreviation(lower: &str) -> bool {
    CONTINUING_ABBREVIATIONS.contains(&lower)
}

/// Tags an inflected form of a lexicon word: plural nouns and third-person
/// verbs ("managers", "checks"), past forms ("reviewed"), gerunds ("sending")
/// and adverbs built on lexicon adjectives ("finally").
pub fn lookup_inflected(lower: &str) -> Option<PosTag> {
    let stem_tag = |suffix: &str| {
        let stem = lower.strip_suffix(suffix).filter(|stem| stem.len() > 1)?;
        lookup(stem).or_else(|| lookup(&format!("{stem}e")))
    };

    if let Some(tag @ (PosTag::Noun | PosTag::Verb)) = stem_tag("s").or_else(|| stem_tag("es")) {
        return Some(tag);
    }
    let verb_form = [stem_tag("ed"), stem_tag("d"), stem_tag("ing")]
        .into_iter()
        .flatten()
        .any(|tag| tag == PosTag::Verb);
    if verb_form {
        return Some(PosTag::Verb);
    }
    (stem_tag("ly") == Some(PosTag::Adjective)).then_some(PosTag::Adverb)
}

/// Whether a word is a single capital letter, as in the initial of "J. Smith"
pub fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

/// Whether a word is written in letters separated by periods ("p.m.", "e.g.")
pub fn is_dotted_letters(word: &str) -> bool {
    let parts: Vec<&str> = word.trim_end_matches('.').split('.').collect();
    parts.len() > 1
        && parts
            .iter()
            .all(|p| p.len() == 1 && p.chars().all(|c| c.is_ascii_alphabetic()))
}

pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Whether a word of two or more characters is written entirely in capitals ("HR", "Q3")
pub fn is_acronym(word: &str) -> bool {
    word.len() > 1
        && word.chars().any(|c| c.is_ascii_alphabetic())
        && word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Parses a weekday name. Three-letter abbreviations must be capitalized.
pub fn weekday_name(word: &str) -> Option<Weekday> {
    let weekday = word.parse::<Weekday>().ok()?;
    (word.len() > 3 || is_capitalized(word)).then_some(weekday)
}

/// Parses a full month name. "May" and "March" only count when capitalized.
pub fn month_name(word: &str) -> Option<Month> {
    let month = word.parse::<Month>().ok()?;
    let lower = word.to_lowercase();
    if lower != month.name().to_lowercase() {
        return None;
    }
    if matches!(month, Month::May | Month::March) && !is_capitalized(word) {
        return None;
    }
    Some(month)
}

/// Parses a three-letter month abbreviation ("Jan", "Sep."); these must be capitalized
pub fn month_abbreviation(word: &str) -> Option<Month> {
    let word = word.strip_suffix('.').unwrap_or(word);
    if word.len() != 3 || !is_capitalized(word) {
        return None;
    }
    word.parse::<Month>().ok()
}

/// Whether a word names a weekday or a full month
pub fn is_calendar_name(word: &str) -> bool {
    weekday_name(word).is_some() || month_name(word).is_some()
}

/// Parses a day of month written as digits ("3"), a numeric ordinal ("3rd") or
/// an ordinal word ("third")
pub fn day_of_month(lower: &str) -> Option<u32> {
    let digits = lower
        .strip_suffix("st")
        .or_else(|| lower.strip_suffix("nd"))
        .or_else(|| lower.strip_suffix("rd"))
        .or_else(|| lower.strip_suffix("th"))
        .unwrap_or(lower);
    let day = if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse::<u32>().ok()?
    } else {
        *ORDINAL_WORDS.get(lower)?
    };
    (1..=31).contains(&day).then_some(day)
}

/// Whether a lowercase word is an ordinal ("3rd", "fifth")
pub fn is_ordinal(lower: &str) -> bool {
    ORDINAL_WORDS.contains_key(lower)
        || (lower.len() > 2
            && ["st", "nd", "rd", "th"].iter().any(|s| lower.ends_with(s))
            && lower[..lower.len() - 2].chars().all(|c| c.is_ascii_digit()))
}

/// Whether a lowercase word is a cardinal number ("3", "two", "1.5")
pub fn is_cardinal(lower: &str) -> bool {
    let numeric = !lower.is_empty()
        && lower.chars().any(|c| c.is_ascii_digit())
        && lower.chars().all(|c| c.is_ascii_digit() || c == '.');
    numeric || matches!(lookup(lower), Some(PosTag::Numeral))
}
