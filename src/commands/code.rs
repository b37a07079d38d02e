/// `code` commands: skeleton generation and line counting.
use super::input::{read_source, split_list};
use crate::cli::OutputCtx;
use crate::cli::args::CodeCommand;
use crate::cli::output::{write_json, write_text};
use crate::powers::PowerError;
use crate::powers::code::{Language, count_lines, generate_class, generate_function};

/// Run `superpowers code <subcommand>`.
///
/// # Errors
///
/// Returns `PowerError::InvalidChoice` for an unsupported `--lang`, and
/// `PowerError::FileNotFound` or `PowerError::Io` when `count` cannot read
/// its input.
pub fn run(command: &CodeCommand, ctx: &OutputCtx) -> Result<(), PowerError> {
    match command {
        CodeCommand::Class(args) => {
            let lang: Language = args.lang.parse()?;
            let attrs = split_list(&args.attrs);
            let methods = split_list(&args.methods);
            write_text(&generate_class(&args.name, &attrs, &methods, lang), ctx);
        }
        CodeCommand::Function(args) => {
            let lang: Language = args.lang.parse()?;
            let params = split_list(&args.params);
            write_text(&generate_function(&args.name, &params, &args.returns, lang), ctx);
        }
        CodeCommand::Count(args) => {
            let _t = ctx.timer("read_source");
            let source = read_source(&args.file)?;
            drop(_t);

            let _t = ctx.timer("count_lines");
            let counts = count_lines(&source);
            drop(_t);
            write_json(&counts, ctx);
        }
    }
    Ok(())
}
