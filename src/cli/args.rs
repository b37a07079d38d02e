/// CLI argument definitions via clap derive.
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::powers::data::DEFAULT_SEPARATOR;

/// superpowers: text, code, data and ASCII-art utilities.
#[derive(Debug, Parser)]
#[command(
    name = "superpowers",
    about = "Text, code-skeleton, data-transform and ASCII-art utilities",
    version,
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Output format. `auto` uses each command's natural rendering.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print per-stage timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Each command's natural form: JSON for structured results, text otherwise.
    #[default]
    Auto,
    /// JSON (pretty-printed). Text results are wrapped as `{"result": ...}`.
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned table with headers (human-readable).
    Table,
    /// Plain text only.
    Text,
}

/// Command groups.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Text analysis and transformation.
    #[command(subcommand)]
    Text(TextCommand),
    /// Code skeleton generation and line counting.
    #[command(subcommand)]
    Code(CodeCommand),
    /// JSON and CSV data transforms.
    #[command(subcommand)]
    Data(DataCommand),
    /// ASCII art generation.
    #[command(subcommand)]
    Art(ArtCommand),
}

// --- text ---

/// `superpowers text ...`
#[derive(Debug, Subcommand)]
pub enum TextCommand {
    /// Character, word and sentence statistics.
    Analyze(TextInput),
    /// Most common words.
    Frequency(FrequencyArgs),
    /// Reverse each word, keeping word order.
    Reverse(TextInput),
    /// Convert to leetspeak.
    Leet(TextInput),
    /// Caesar cipher.
    Cipher(CipherArgs),
    /// Check whether the text is a palindrome.
    Palindrome(TextInput),
}

/// A single text argument.
#[derive(Debug, Parser)]
pub struct TextInput {
    /// Input text, or `-` to read stdin.
    pub text: String,
}

/// Arguments for `superpowers text frequency`.
#[derive(Debug, Parser)]
pub struct FrequencyArgs {
    /// Input text, or `-` to read stdin.
    pub text: String,

    /// Number of top words to show.
    #[arg(long, short = 'n', value_name = "N", default_value_t = 10)]
    pub top: usize,
}

/// Arguments for `superpowers text cipher`.
#[derive(Debug, Parser)]
pub struct CipherArgs {
    /// Input text, or `-` to read stdin.
    pub text: String,

    /// Positions to shift each letter (negative decodes).
    #[arg(long, short, default_value_t = 3, allow_negative_numbers = true)]
    pub shift: i64,
}

// --- code ---

/// `superpowers code ...`
#[derive(Debug, Subcommand)]
pub enum CodeCommand {
    /// Generate a class skeleton.
    Class(ClassArgs),
    /// Generate a function skeleton.
    Function(FunctionArgs),
    /// Count total, code, blank and comment lines.
    Count(CountArgs),
}

/// Arguments for `superpowers code class`.
#[derive(Debug, Parser)]
pub struct ClassArgs {
    /// Class name.
    pub name: String,

    /// Comma-separated attribute names.
    #[arg(long, short, value_name = "ATTRS")]
    pub attrs: String,

    /// Comma-separated method names.
    #[arg(long, short, value_name = "METHODS", default_value = "")]
    pub methods: String,

    /// Target language: python, javascript, typescript.
    #[arg(long, short, value_name = "LANG", default_value = "python")]
    pub lang: String,
}

/// Arguments for `superpowers code function`.
#[derive(Debug, Parser)]
pub struct FunctionArgs {
    /// Function name.
    pub name: String,

    /// Comma-separated parameter names.
    #[arg(long, short, value_name = "PARAMS")]
    pub params: String,

    /// Return type annotation (Python only).
    #[arg(long, short, value_name = "TYPE", default_value = "None")]
    pub returns: String,

    /// Target language: python, javascript, typescript.
    #[arg(long, short, value_name = "LANG", default_value = "python")]
    pub lang: String,
}

/// Arguments for `superpowers code count`.
#[derive(Debug, Parser)]
pub struct CountArgs {
    /// Source file to analyze, or `-` to read stdin.
    pub file: String,
}

// --- data ---

/// `superpowers data ...`
#[derive(Debug, Subcommand)]
pub enum DataCommand {
    /// Flatten a nested JSON object into separator-joined keys.
    Flatten(SeparatorArgs),
    /// Rebuild a nested JSON object from separator-joined keys.
    Unflatten(SeparatorArgs),
    /// Deep-merge two JSON objects; the second wins on conflicts.
    Merge(MergeArgs),
    /// Group a JSON array of objects by one key.
    GroupBy(GroupByArgs),
    /// Rewrite top-level JSON object keys to another case style.
    TransformKeys(TransformKeysArgs),
    /// Convert a JSON array of objects to CSV.
    JsonToCsv(DataInput),
    /// Convert CSV with a header row to a JSON array.
    CsvToJson(DataInput),
}

/// A single JSON or CSV document argument.
#[derive(Debug, Parser)]
pub struct DataInput {
    /// Input document, or `-` to read stdin.
    pub input: String,
}

/// Arguments for `superpowers data flatten` / `unflatten`.
#[derive(Debug, Parser)]
pub struct SeparatorArgs {
    /// JSON object, or `-` to read stdin.
    pub input: String,

    /// Separator placed between nested keys.
    #[arg(long, value_name = "SEP", default_value = DEFAULT_SEPARATOR)]
    pub sep: String,
}

/// Arguments for `superpowers data merge`.
#[derive(Debug, Parser)]
pub struct MergeArgs {
    /// Base JSON object, or `-` to read stdin.
    pub base: String,

    /// JSON object merged on top of the base.
    pub overlay: String,
}

/// Arguments for `superpowers data group-by`.
#[derive(Debug, Parser)]
pub struct GroupByArgs {
    /// JSON array of objects, or `-` to read stdin.
    pub input: String,

    /// Key whose value names each group.
    #[arg(long, short, value_name = "KEY")]
    pub key: String,
}

/// Arguments for `superpowers data transform-keys`.
#[derive(Debug, Parser)]
pub struct TransformKeysArgs {
    /// JSON object, or `-` to read stdin.
    pub input: String,

    /// Target case style: snake_case, camelCase, PascalCase.
    #[arg(long, short, value_name = "CASE", default_value = "snake_case")]
    pub case: String,
}

// --- art ---

/// `superpowers art ...`
#[derive(Debug, Subcommand)]
pub enum ArtCommand {
    /// Print a built-in pattern.
    Pattern(PatternArgs),
    /// List built-in patterns.
    List,
    /// Frame text in a banner.
    Banner(BannerArgs),
    /// Draw a box around text.
    Box(BoxArgs),
    /// Render text in big block letters (A-Z and space).
    Big(TextInput),
    /// Render a progress bar.
    Progress(ProgressArgs),
}

/// Arguments for `superpowers art pattern`.
#[derive(Debug, Parser)]
pub struct PatternArgs {
    /// Pattern name (see `superpowers art list`).
    pub name: String,
}

/// Arguments for `superpowers art banner`.
#[derive(Debug, Parser)]
pub struct BannerArgs {
    /// Banner text.
    pub text: String,

    /// Border character.
    #[arg(long = "char", short = 'c', value_name = "CHAR", default_value = "*")]
    pub fill: String,

    /// Spaces between the border and the text.
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub padding: usize,
}

/// Arguments for `superpowers art box`.
#[derive(Debug, Parser)]
pub struct BoxArgs {
    /// Text to frame; may contain newlines.
    pub text: String,

    /// Box style: single, double, rounded.
    #[arg(long, short, value_name = "STYLE", default_value = "single")]
    pub style: String,
}

/// Arguments for `superpowers art progress`.
#[derive(Debug, Parser)]
pub struct ProgressArgs {
    /// Current value.
    #[arg(allow_negative_numbers = true)]
    pub current: i64,

    /// Total value.
    #[arg(allow_negative_numbers = true)]
    pub total: i64,

    /// Bar width in characters.
    #[arg(long, short, value_name = "N", default_value_t = 40)]
    pub width: usize,
}

/// Exit code for a failed parse of `arg_count` process arguments.
///
/// Help and version requests succeed, and so does a bare invocation, which
/// only prints help. A group without its subcommand is a usage error.
#[must_use]
pub fn usage_exit_code(kind: ErrorKind, arg_count: usize) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand if arg_count <= 1 => 0,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_nested_subcommand_parses() {
        let cli = Cli::try_parse_from(["superpowers", "text", "cipher", "abc", "--shift", "-3"])
            .unwrap();
        match cli.command {
            Command::Text(TextCommand::Cipher(args)) => {
                assert_eq!(args.text, "abc");
                assert_eq!(args.shift, -3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_choice_flags_are_passed_through_for_the_handler() {
        let cli = Cli::try_parse_from([
            "superpowers",
            "code",
            "class",
            "User",
            "--attrs",
            "name",
            "--lang",
            "ruby",
        ])
        .unwrap();
        match cli.command {
            Command::Code(CodeCommand::Class(args)) => assert_eq!(args.lang, "ruby"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_output_format_is_rejected() {
        let err = Cli::try_parse_from(["superpowers", "--output", "xml", "art", "list"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(usage_exit_code(err.kind(), 5), 1);
    }

    #[test]
    fn test_bare_invocation_shows_help_successfully() {
        let err = Cli::try_parse_from(["superpowers"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand);
        assert_eq!(usage_exit_code(err.kind(), 1), 0);
    }

    #[test]
    fn test_group_without_subcommand_exits_with_error() {
        let err = Cli::try_parse_from(["superpowers", "art"]).unwrap_err();
        assert_eq!(usage_exit_code(err.kind(), 2), 1);
    }

    #[test]
    fn test_short_version_flag() {
        let err = Cli::try_parse_from(["superpowers", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert_eq!(usage_exit_code(err.kind(), 2), 0);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["superpowers", "art", "progress", "5", "10"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Auto);
        match cli.command {
            Command::Art(ArtCommand::Progress(args)) => assert_eq!(args.width, 40),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
