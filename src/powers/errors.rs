/// Errors from the utility domain layer.
use thiserror::Error;

/// Errors that can occur while running a text, code, data, or art operation.
#[derive(Debug, Error)]
pub enum PowerError {
    /// Input was not valid JSON.
    #[error("Invalid JSON - {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Input was not valid CSV, or a CSV record could not be written.
    #[error("Invalid CSV - {0}")]
    Csv(#[from] csv::Error),

    /// An enumerated option (language, case, box style) was not recognized.
    #[error("Unsupported {kind}: {value}. Valid choices: {}", choices.join(", "))]
    InvalidChoice {
        /// What kind of option was being parsed (e.g. "language").
        kind: &'static str,
        /// The rejected value.
        value: String,
        /// All accepted values.
        choices: Vec<String>,
    },

    /// No art pattern with this name exists.
    #[error("Unknown pattern: {name}. Available: {}", available.join(", "))]
    UnknownPattern {
        /// The requested pattern name.
        name: String,
        /// Every known pattern name.
        available: Vec<String>,
        /// Close matches for the requested name, best first.
        suggestions: Vec<String>,
    },

    /// JSON input parsed but had the wrong shape.
    #[error("Expected {expected}, found {found}")]
    InvalidInput {
        /// The shape the operation needs (e.g. "a JSON object").
        expected: &'static str,
        /// The JSON type actually supplied.
        found: &'static str,
    },

    /// An argument value is unusable for the operation.
    #[error("Invalid value for {name}: {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Two flattened keys disagree about whether a path is a leaf or a mapping.
    #[error("Key '{key}' conflicts with an existing value at '{segment}'")]
    KeyConflict {
        /// The flattened key being inserted.
        key: String,
        /// The path prefix where the collision happened.
        segment: String,
    },

    /// A row passed to CSV conversion has a column the header does not.
    #[error("Row {row} contains field '{field}' not present in the header")]
    CsvField {
        /// Zero-based row index in the input array.
        row: usize,
        /// The unexpected key.
        field: String,
    },

    /// Input file does not exist.
    #[error("File not found - {path}")]
    FileNotFound {
        /// The path that was requested.
        path: String,
    },

    /// Any other I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PowerError {
    /// Machine-readable snake_case code for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "invalid_json",
            Self::Csv(_) => "invalid_csv",
            Self::InvalidChoice { .. } => "invalid_choice",
            Self::UnknownPattern { .. } => "unknown_pattern",
            Self::InvalidInput { .. } => "invalid_input",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::KeyConflict { .. } => "key_conflict",
            Self::CsvField { .. } => "csv_field_mismatch",
            Self::FileNotFound { .. } => "file_not_found",
            Self::Io(_) => "io_error",
        }
    }

    /// Return the CLI exit code for this error.
    ///
    /// Every failure in this toolkit is a local, user-facing input problem.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Build an `InvalidChoice` from a list of static choice names.
    pub(crate) fn invalid_choice(kind: &'static str, value: &str, choices: &[&str]) -> Self {
        Self::InvalidChoice {
            kind,
            value: value.to_owned(),
            choices: choices.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

/// Name of a JSON value's type, for `InvalidInput` messages.
#[must_use]
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_lists_choices() {
        let err = PowerError::invalid_choice("language", "ruby", &["python", "javascript"]);
        assert_eq!(
            err.to_string(),
            "Unsupported language: ruby. Valid choices: python, javascript"
        );
        assert_eq!(err.code(), "invalid_choice");
    }

    #[test]
    fn test_invalid_json_message() {
        let err: PowerError = serde_json::from_str::<serde_json::Value>("not-json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Invalid JSON - "));
        assert_eq!(err.exit_code(), 1);
    }
}
