/// Output formatting: text, JSON and table modes.
use std::io::Write;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use serde_json::Value;

use super::args::OutputFormat;
use crate::types::{PalindromeOutput, TextOutput, WordCountOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print stage timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    fn table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        if !self.no_header {
            table.set_header(header.to_vec());
        }
        table
    }
}

// --- Plain text results ---

/// Write a text result (generated code, art, transformed text) to stdout.
///
/// JSON modes wrap it as `{"result": ...}`.
pub fn write_text(text: &str, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(&TextOutput {
            result: text.to_owned(),
        }),
        OutputFormat::Compact => print_compact_json(&TextOutput {
            result: text.to_owned(),
        }),
        OutputFormat::Auto | OutputFormat::Text | OutputFormat::Table => print_raw(text),
    }
}

fn print_raw(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

// --- Structured results ---

/// Write a structured result (analysis record, transformed JSON) to stdout.
///
/// Table mode renders the top-level keys of an object as FIELD/VALUE rows;
/// arrays and scalars fall back to pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(value: &T, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Compact => print_compact_json(value),
        OutputFormat::Table => match serde_json::to_value(value) {
            Ok(Value::Object(map)) => {
                let mut table = ctx.table(&["FIELD", "VALUE"]);
                for (key, value) in &map {
                    table.add_row([key.as_str(), &cell_text(value)]);
                }
                println!("{table}");
            }
            Ok(other) => print_json(&other),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        },
        OutputFormat::Auto | OutputFormat::Json | OutputFormat::Text => print_json(value),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// --- Word frequency ---

/// Write a word-frequency report to stdout.
pub fn write_frequency(rows: &[WordCountOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(rows),
        OutputFormat::Compact => print_compact_json(rows),
        OutputFormat::Table => {
            let mut table = ctx.table(&["WORD", "COUNT"]);
            for row in rows {
                table.add_row([row.word.as_str(), &row.count.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Auto | OutputFormat::Text => {
            for row in rows {
                println!("{}: {}", row.word, row.count);
            }
        }
    }
}

// --- Palindrome ---

/// Write a palindrome verdict to stdout.
pub fn write_palindrome(result: &PalindromeOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Auto | OutputFormat::Text | OutputFormat::Table => {
            let verdict = if result.palindrome { "is" } else { "is not" };
            println!("'{}' {verdict} a palindrome", result.text);
        }
    }
}

// --- Pattern list ---

/// Write the built-in pattern names to stdout.
pub fn write_patterns(names: &[&str], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(names),
        OutputFormat::Compact => print_compact_json(names),
        OutputFormat::Table => {
            let mut table = ctx.table(&["PATTERN"]);
            for name in names {
                table.add_row([*name]);
            }
            println!("{table}");
        }
        OutputFormat::Auto | OutputFormat::Text => {
            println!("Available patterns: {}", names.join(", "));
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Compact => {
            let s = serde_json::to_string(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Auto | OutputFormat::Text | OutputFormat::Table => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let (Some(candidates), "unknown_pattern") =
                (&err.error.candidates, err.error.code.as_str())
            {
                let _ = writeln!(out, "  Did you mean: {}?", candidates.join(", "));
            }
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
