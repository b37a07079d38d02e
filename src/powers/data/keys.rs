/// Rewrite object keys to snake_case, camelCase or PascalCase.
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::powers::PowerError;

/// Any character followed by a capitalized word (`xName`, `PServer`).
static CAPITALIZED_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("word pattern is valid"));

/// A lowercase letter or digit directly followed by an uppercase letter.
static LOWER_UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("boundary pattern is valid"));

/// Target naming convention for keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    #[default]
    Snake,
    Camel,
    Pascal,
}

impl KeyCase {
    /// Every supported style, in the order shown to users.
    pub const ALL: [Self; 3] = [Self::Snake, Self::Camel, Self::Pascal];

    /// The style's name as written on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snake => "snake_case",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
        }
    }

    /// Convert a single key to this style.
    #[must_use]
    pub fn apply(self, key: &str) -> String {
        match self {
            Self::Snake => to_snake_case(key),
            Self::Camel => to_camel_case(key),
            Self::Pascal => to_pascal_case(key),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyCase {
    type Err = PowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|case| case.as_str() == s)
            .ok_or_else(|| PowerError::invalid_choice("case", s, &Self::ALL.map(Self::as_str)))
    }
}

/// `firstName` → `first_name`, `HTTPServer` → `http_server`.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let s = CAPITALIZED_WORD_RE.replace_all(s, "${1}_${2}");
    LOWER_UPPER_RE.replace_all(&s, "${1}_${2}").to_lowercase()
}

fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(['_', '-'])
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `first_name` → `firstName`. Hyphens count as underscores.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut parts = split_words(s);
    let mut out = parts.next().map(str::to_lowercase).unwrap_or_default();
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

/// `first_name` → `FirstName`. Hyphens count as underscores.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).map(capitalize).collect()
}

/// Rewrite every top-level key of `data` to `case`. Values are not visited.
///
/// If two keys convert to the same name, the later value wins and keeps the
/// earlier key's position.
#[must_use]
pub fn transform_keys(data: &Map<String, Value>, case: KeyCase) -> Map<String, Value> {
    data.iter()
        .map(|(key, value)| (case.apply(key), value.clone()))
        .collect()
}
