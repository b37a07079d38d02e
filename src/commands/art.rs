/// `art` commands: patterns, banners, boxes, big letters, progress bars.
use crate::cli::OutputCtx;
use crate::cli::args::ArtCommand;
use crate::cli::output::{write_patterns, write_text};
use crate::powers::PowerError;
use crate::powers::art::{
    BoxStyle, MAX_PROGRESS_WIDTH, banner, big_text, boxed, get_pattern, list_patterns,
    progress_bar,
};

/// Run `superpowers art <subcommand>`.
///
/// # Errors
///
/// Returns `PowerError::UnknownPattern` for an unrecognized pattern name,
/// `PowerError::InvalidChoice` for an unsupported box style, and
/// `PowerError::InvalidArgument` for a progress bar wider than
/// [`MAX_PROGRESS_WIDTH`].
pub fn run(command: &ArtCommand, ctx: &OutputCtx) -> Result<(), PowerError> {
    match command {
        ArtCommand::Pattern(args) => write_text(&get_pattern(&args.name)?, ctx),
        ArtCommand::List => write_patterns(&list_patterns(), ctx),
        ArtCommand::Banner(args) => write_text(&banner(&args.text, &args.fill, args.padding), ctx),
        ArtCommand::Box(args) => {
            let style: BoxStyle = args.style.parse()?;
            write_text(&boxed(&args.text, style), ctx);
        }
        ArtCommand::Big(args) => write_text(&big_text(&args.text), ctx),
        ArtCommand::Progress(args) => {
            if args.width > MAX_PROGRESS_WIDTH {
                return Err(PowerError::InvalidArgument {
                    name: "width",
                    reason: "must be at most 10000",
                });
            }
            write_text(&progress_bar(args.current, args.total, args.width), ctx);
        }
    }
    Ok(())
}
