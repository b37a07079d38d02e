/// Text analysis and transformation: word frequency, reversal, leetspeak,
/// Caesar cipher, statistics, palindrome check.
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::TextAnalysis;

/// An ASCII word bounded by word boundaries on both sides.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"));

/// Runs of sentence-ending punctuation.
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

/// Count word occurrences (case-insensitive) and return the `top_n` most common.
///
/// Sorted by count descending; words with equal counts keep the order in
/// which they first appeared.
#[must_use]
pub fn word_frequency(text: &str, top_n: usize) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for m in WORD_RE.find_iter(&lowered) {
        match index.get(m.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(m.as_str(), counts.len());
                counts.push((m.as_str().to_owned(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
}

/// Reverse the characters of each word while keeping word order.
///
/// Runs of whitespace collapse to a single space.
#[must_use]
pub fn reverse_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn leet_char(c: char) -> Option<char> {
    Some(match c.to_ascii_lowercase() {
        'a' => '4',
        'e' => '3',
        'i' | 'l' => '1',
        'o' => '0',
        's' => '5',
        't' => '7',
        'b' => '8',
        _ => return None,
    })
}

/// Convert text to leetspeak (1337 speak).
#[must_use]
pub fn to_leetspeak(text: &str) -> String {
    text.chars().map(|c| leet_char(c).unwrap_or(c)).collect()
}

/// Compute character, word and sentence statistics for `text`.
#[must_use]
pub fn analyze_text(text: &str) -> TextAnalysis {
    let words: Vec<&str> = WORD_RE.find_iter(text).map(|m| m.as_str()).collect();
    let sentence_count = SENTENCE_END_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();

    let total_len: usize = words.iter().map(|w| w.len()).sum();
    #[allow(clippy::cast_precision_loss)]
    let average = if words.is_empty() {
        0.0
    } else {
        total_len as f64 / words.len() as f64
    };

    let mut unique: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    unique.sort_unstable();
    unique.dedup();

    // First word of maximal length wins.
    let mut longest = "";
    for word in &words {
        if word.len() > longest.len() {
            longest = word;
        }
    }

    TextAnalysis {
        character_count: text.chars().count(),
        word_count: words.len(),
        sentence_count,
        average_word_length: (average * 100.0).round() / 100.0,
        unique_words: unique.len(),
        longest_word: longest.to_owned(),
    }
}

/// Whether `text` reads the same backwards, ignoring case, spaces and punctuation.
#[must_use]
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Shift ASCII letters by `shift` places, wrapping within the alphabet.
///
/// Case is preserved and every other character passes through unchanged.
#[must_use]
pub fn caesar_cipher(text: &str, shift: i64) -> String {
    // rem_euclid keeps the offset in 0..26 for negative shifts.
    let offset = u8::try_from(shift.rem_euclid(26)).unwrap_or(0);
    text.chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };
            let pos = (c as u8 - base + offset) % 26;
            char::from(base + pos)
        })
        .collect()
}
