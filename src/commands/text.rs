/// `text` commands: analysis and transformation of a text argument.
use super::input::read_input;
use crate::cli::OutputCtx;
use crate::cli::args::TextCommand;
use crate::cli::output::{write_frequency, write_json, write_palindrome, write_text};
use crate::powers::PowerError;
use crate::powers::text;
use crate::types::{PalindromeOutput, WordCountOutput};

/// Run `superpowers text <subcommand>`.
///
/// # Errors
///
/// Returns `PowerError::Io` if stdin input cannot be read.
pub fn run(command: &TextCommand, ctx: &OutputCtx) -> Result<(), PowerError> {
    match command {
        TextCommand::Analyze(args) => {
            let input = load(&args.text, ctx)?;
            let _t = ctx.timer("analyze");
            let stats = text::analyze_text(&input);
            drop(_t);
            write_json(&stats, ctx);
        }
        TextCommand::Frequency(args) => {
            let input = load(&args.text, ctx)?;
            let _t = ctx.timer("frequency");
            let rows: Vec<WordCountOutput> = text::word_frequency(&input, args.top)
                .into_iter()
                .map(|(word, count)| WordCountOutput { word, count })
                .collect();
            drop(_t);
            write_frequency(&rows, ctx);
        }
        TextCommand::Reverse(args) => {
            let input = load(&args.text, ctx)?;
            write_text(&text::reverse_words(&input), ctx);
        }
        TextCommand::Leet(args) => {
            let input = load(&args.text, ctx)?;
            write_text(&text::to_leetspeak(&input), ctx);
        }
        TextCommand::Cipher(args) => {
            let input = load(&args.text, ctx)?;
            write_text(&text::caesar_cipher(&input, args.shift), ctx);
        }
        TextCommand::Palindrome(args) => {
            let input = load(&args.text, ctx)?;
            let palindrome = text::is_palindrome(&input);
            write_palindrome(
                &PalindromeOutput {
                    text: input,
                    palindrome,
                },
                ctx,
            );
        }
    }
    Ok(())
}

fn load(arg: &str, ctx: &OutputCtx) -> Result<String, PowerError> {
    let _t = ctx.timer("read_input");
    read_input(arg)
}
