/// ASCII art: named patterns, banners, boxes, big letters, progress bars.
use std::fmt;
use std::str::FromStr;

use super::errors::PowerError;
use super::suggest::suggest;

/// Built-in patterns, in listing order.
const PATTERNS: &[(&str, &[&str])] = &[
    (
        "star",
        &[
            "    *    ",
            "   ***   ",
            "  *****  ",
            " ******* ",
            "*********",
            " ******* ",
            "  *****  ",
            "   ***   ",
            "    *    ",
        ],
    ),
    (
        "heart",
        &[
            "  **   **  ",
            " **** **** ",
            "***********",
            " ********* ",
            "  *******  ",
            "   *****   ",
            "    ***    ",
            "     *     ",
        ],
    ),
    (
        "rocket",
        &[
            r"     /\     ",
            r"    /  \    ",
            r"   /    \   ",
            r"  |  ()  |  ",
            r"  |      |  ",
            r"  |      |  ",
            r" /|      |\ ",
            r"/_|______|_\",
            r"   |    |   ",
            r"  /|    |\  ",
            r" / |    | \ ",
            r"/__|    |__\",
        ],
    ),
    (
        "lightning",
        &[
            "     **",
            "    ** ",
            "   **  ",
            "  **   ",
            " ******",
            "   **  ",
            "  **   ",
            " **    ",
            "**     ",
        ],
    ),
];

/// Names of all built-in patterns, in listing order.
#[must_use]
pub fn list_patterns() -> Vec<&'static str> {
    PATTERNS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in pattern by exact name.
///
/// # Errors
///
/// Returns `PowerError::UnknownPattern` with the available names and fuzzy
/// suggestions when `name` is not a pattern.
pub fn get_pattern(name: &str) -> Result<String, PowerError> {
    PATTERNS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, lines)| lines.join("\n"))
        .ok_or_else(|| {
            let available = list_patterns();
            PowerError::UnknownPattern {
                name: name.to_owned(),
                suggestions: suggest(&available, name),
                available: available.into_iter().map(str::to_owned).collect(),
            }
        })
}

/// Frame `text` with a border of `fill` above, below and at both ends.
///
/// The border is `len(text) + 2 * padding + 2` repetitions of `fill`.
#[must_use]
pub fn banner(text: &str, fill: &str, padding: usize) -> String {
    let width = text.chars().count() + padding * 2 + 2;
    let border = fill.repeat(width);
    let spaces = " ".repeat(padding);
    format!("{border}\n{fill}{spaces}{text}{spaces}{fill}\n{border}")
}

/// Border character set for [`boxed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Single,
    Double,
    Rounded,
}

struct BoxChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BoxStyle {
    /// Every style, in the order shown to users.
    pub const ALL: [Self; 3] = [Self::Single, Self::Double, Self::Rounded];

    /// The style's name as written on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Rounded => "rounded",
        }
    }

    fn chars(self) -> BoxChars {
        match self {
            Self::Single => BoxChars {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            },
            Self::Double => BoxChars {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '=',
                vertical: '║',
            },
            Self::Rounded => BoxChars {
                top_left: '/',
                top_right: '\\',
                bottom_left: '\\',
                bottom_right: '/',
                horizontal: '-',
                vertical: '|',
            },
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoxStyle {
    type Err = PowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                PowerError::invalid_choice("box style", s, &Self::ALL.map(Self::as_str))
            })
    }
}

/// Draw a box around `text`; each line is left-justified to the widest one.
#[must_use]
pub fn boxed(text: &str, style: BoxStyle) -> String {
    let c = style.chars();
    let lines: Vec<&str> = text.split('\n').collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule: String = std::iter::repeat_n(c.horizontal, width + 2).collect();

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("{}{rule}{}", c.top_left, c.top_right));
    for line in &lines {
        out.push(format!("{v} {line:<width$} {v}", v = c.vertical));
    }
    out.push(format!("{}{rule}{}", c.bottom_left, c.bottom_right));
    out.join("\n")
}

/// Rows per big-text glyph.
const GLYPH_HEIGHT: usize = 5;

/// Rendering for characters without a glyph.
const BLANK_GLYPH: [&str; GLYPH_HEIGHT] = ["     "; GLYPH_HEIGHT];

fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        'A' => ["  A  ", " A A ", "AAAAA", "A   A", "A   A"],
        'B' => ["BBBB ", "B   B", "BBBB ", "B   B", "BBBB "],
        'C' => [" CCC ", "C    ", "C    ", "C    ", " CCC "],
        'D' => ["DDD  ", "D  D ", "D   D", "D  D ", "DDD  "],
        'E' => ["EEEEE", "E    ", "EEE  ", "E    ", "EEEEE"],
        'F' => ["FFFFF", "F    ", "FFF  ", "F    ", "F    "],
        'G' => [" GGG ", "G    ", "G  GG", "G   G", " GGG "],
        'H' => ["H   H", "H   H", "HHHHH", "H   H", "H   H"],
        'I' => ["IIIII", "  I  ", "  I  ", "  I  ", "IIIII"],
        'J' => ["JJJJJ", "   J ", "   J ", "J  J ", " JJ  "],
        'K' => ["K   K", "K  K ", "KKK  ", "K  K ", "K   K"],
        'L' => ["L    ", "L    ", "L    ", "L    ", "LLLLL"],
        'M' => ["M   M", "MM MM", "M M M", "M   M", "M   M"],
        'N' => ["N   N", "NN  N", "N N N", "N  NN", "N   N"],
        'O' => [" OOO ", "O   O", "O   O", "O   O", " OOO "],
        'P' => ["PPPP ", "P   P", "PPPP ", "P    ", "P    "],
        'Q' => [" QQQ ", "Q   Q", "Q   Q", "Q  Q ", " QQ Q"],
        'R' => ["RRRR ", "R   R", "RRRR ", "R  R ", "R   R"],
        'S' => [" SSS ", "S    ", " SSS ", "    S", " SSS "],
        'T' => ["TTTTT", "  T  ", "  T  ", "  T  ", "  T  "],
        'U' => ["U   U", "U   U", "U   U", "U   U", " UUU "],
        'V' => ["V   V", "V   V", "V   V", " V V ", "  V  "],
        'W' => ["W   W", "W   W", "W W W", "WW WW", "W   W"],
        'X' => ["X   X", " X X ", "  X  ", " X X ", "X   X"],
        'Y' => ["Y   Y", " Y Y ", "  Y  ", "  Y  ", "  Y  "],
        'Z' => ["ZZZZZ", "   Z ", "  Z  ", " Z   ", "ZZZZZ"],
        _ => BLANK_GLYPH,
    }
}

/// Render `text` in 5-row block letters.
///
/// Input is upper-cased; characters outside A–Z render as blank columns.
/// Every glyph is followed by one space.
#[must_use]
pub fn big_text(text: &str) -> String {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();
    for c in text.chars().flat_map(char::to_uppercase) {
        for (row, part) in rows.iter_mut().zip(glyph(c)) {
            row.push_str(part);
            row.push(' ');
        }
    }
    rows.join("\n")
}

/// Widest progress bar the command line will render.
pub const MAX_PROGRESS_WIDTH: usize = 10_000;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render `[████░░░░] 50.0%` for `current` out of `total`.
///
/// A non-positive `total` counts as 1 and the ratio is clamped to `0..=1`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn progress_bar(current: i64, total: i64, width: usize) -> String {
    let total = if total <= 0 { 1 } else { total };
    let ratio = (current as f64 / total as f64).clamp(0.0, 1.0);
    let filled = ((width as f64) * ratio).floor() as usize;
    let filled = filled.min(width);

    let mut bar = String::new();
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    format!("[{bar}] {:.1}%", ratio * 100.0)
}
