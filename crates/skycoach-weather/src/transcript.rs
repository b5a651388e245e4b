//! Best-effort city extraction from a spoken request.
//!
//! Plain pattern matching over a lowercased transcript: look for a
//! preposition that usually precedes a place name, keep what follows it and
//! drop filler words. Multi-city or negated requests are not disambiguated.

const STOP_WORDS: &[&str] = &[
    "weather",
    "forecast",
    "climate",
    "temperature",
    "in",
    "for",
    "at",
    "of",
    "to",
    "the",
    "how",
    "is",
    "a",
    "what",
    "what's",
    "whats",
    "like",
    "today",
    "tell",
    "me",
    "show",
];

/// Checked in order; the first one that leaves a non-filler word wins
const TRIGGERS: &[&str] = &["in ", "for ", "at ", "of "];

const PUNCTUATION: &[char] = &['?', '.', ',', '!'];

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

fn content_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect()
}

/// Uppercase the first letter of every word (words split on whitespace and
/// hyphens) and lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() || c == '-' {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Text after the last occurrence of `trigger`, minus filler words
fn after_trigger(text: &str, trigger: &str) -> Option<String> {
    let (_, tail) = text.rsplit_once(trigger)?;
    let tail = strip_punctuation(tail);
    let words = content_words(&tail);
    if words.is_empty() {
        None
    } else {
        Some(title_case(&words.join(" ")))
    }
}

/// Extract a city name from free-form transcribed text.
///
/// Returns `None` when nothing but filler words remain.
pub fn extract_city(text: &str) -> Option<String> {
    let text = text.trim().to_lowercase();

    let city = TRIGGERS
        .iter()
        .find_map(|trigger| after_trigger(&text, trigger))
        .or_else(|| {
            let cleaned = strip_punctuation(&text);
            let words = content_words(&cleaned);
            (!words.is_empty()).then(|| title_case(&words.join(" ")))
        });

    tracing::debug!("Transcript {:?} resolved to city {:?}", text, city);
    city
}
