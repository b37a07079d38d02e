/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. Domain functions return them directly when the result is a
/// fixed set of named figures.
use serde::{Deserialize, Serialize};

/// Character, word and sentence statistics for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Number of Unicode scalar values.
    pub character_count: usize,
    /// Number of ASCII-letter words.
    pub word_count: usize,
    /// Number of non-blank pieces between `.`, `!` and `?` runs.
    pub sentence_count: usize,
    /// Mean word length, rounded to two decimals.
    pub average_word_length: f64,
    /// Number of distinct words, compared case-insensitively.
    pub unique_words: usize,
    /// First word of maximal length, or empty.
    pub longest_word: String,
}

/// Line counts for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCount {
    pub total_lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
}

/// One row of a word-frequency report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCountOutput {
    pub word: String,
    pub count: usize,
}

/// Palindrome check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalindromeOutput {
    /// The text as given.
    pub text: String,
    pub palindrome: bool,
}

/// JSON envelope for commands whose natural output is plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextOutput {
    pub result: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Suggested alternatives (close pattern names, valid choices).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `PowerError`.
    #[must_use]
    pub fn from_power_error(err: &crate::powers::PowerError) -> Self {
        use crate::powers::PowerError;
        let candidates = match err {
            PowerError::UnknownPattern { suggestions, .. } if !suggestions.is_empty() => {
                Some(suggestions.clone())
            }
            PowerError::InvalidChoice { choices, .. } => Some(choices.clone()),
            _ => None,
        };
        Self::new(err.code(), err.to_string(), candidates)
    }

    /// Construct from an arbitrary code and message.
    #[must_use]
    pub fn new(code: &str, message: String, candidates: Option<Vec<String>>) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message,
                candidates,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::powers::PowerError;

    #[test]
    fn test_error_envelope_carries_suggestions() {
        let err = PowerError::UnknownPattern {
            name: "hart".to_owned(),
            available: vec!["heart".to_owned()],
            suggestions: vec!["heart".to_owned()],
        };
        let out = ErrorOutput::from_power_error(&err);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "unknown_pattern");
        assert_eq!(json["error"]["candidates"][0], "heart");
    }

    #[test]
    fn test_error_envelope_omits_empty_candidates() {
        let err = PowerError::FileNotFound {
            path: "missing.py".to_owned(),
        };
        let json = serde_json::to_value(ErrorOutput::from_power_error(&err)).unwrap();
        assert_eq!(json["error"]["message"], "File not found - missing.py");
        assert!(json["error"].get("candidates").is_none());
    }
}
