/// `data` commands: JSON and CSV transforms.
use serde_json::Value;

use super::input::{STDIN_ARG, read_input};
use crate::cli::OutputCtx;
use crate::cli::args::DataCommand;
use crate::cli::output::{write_json, write_text};
use crate::powers::PowerError;
use crate::powers::data::{
    KeyCase, csv_to_json, deep_merge, flatten, group_by, json_to_csv, parse_array, parse_object,
    transform_keys, unflatten,
};

/// Run `superpowers data <subcommand>`.
///
/// # Errors
///
/// Returns `PowerError` on malformed JSON or CSV, input of the wrong shape,
/// an unsupported key case, an empty separator, conflicting flattened keys,
/// or `merge` asked to read both documents from stdin.
pub fn run(command: &DataCommand, ctx: &OutputCtx) -> Result<(), PowerError> {
    match command {
        DataCommand::Flatten(args) => {
            let data = parse_object(&load(&args.input, ctx)?)?;
            let _t = ctx.timer("flatten");
            let flat = flatten(&data, &args.sep)?;
            drop(_t);
            write_json(&flat, ctx);
        }
        DataCommand::Unflatten(args) => {
            let data = parse_object(&load(&args.input, ctx)?)?;
            let _t = ctx.timer("unflatten");
            let nested = unflatten(&data, &args.sep)?;
            drop(_t);
            write_json(&nested, ctx);
        }
        DataCommand::Merge(args) => {
            if args.base == STDIN_ARG && args.overlay == STDIN_ARG {
                return Err(PowerError::InvalidArgument {
                    name: "overlay",
                    reason: "stdin can only supply one of the two documents",
                });
            }
            let base = parse_object(&load(&args.base, ctx)?)?;
            let overlay = parse_object(&load(&args.overlay, ctx)?)?;
            let _t = ctx.timer("merge");
            let merged = deep_merge(&base, &overlay);
            drop(_t);
            write_json(&merged, ctx);
        }
        DataCommand::GroupBy(args) => {
            let items = parse_array(&load(&args.input, ctx)?)?;
            let _t = ctx.timer("group_by");
            let groups = group_by(&items, &args.key)?;
            drop(_t);
            write_json(&groups, ctx);
        }
        DataCommand::TransformKeys(args) => {
            let case: KeyCase = args.case.parse()?;
            let data = parse_object(&load(&args.input, ctx)?)?;
            write_json(&transform_keys(&data, case), ctx);
        }
        DataCommand::JsonToCsv(args) => {
            let rows = parse_array(&load(&args.input, ctx)?)?;
            let _t = ctx.timer("json_to_csv");
            let csv = json_to_csv(&rows)?;
            drop(_t);
            write_text(&csv, ctx);
        }
        DataCommand::CsvToJson(args) => {
            let input = load(&args.input, ctx)?;
            let _t = ctx.timer("csv_to_json");
            let rows: Vec<Value> = csv_to_json(&input)?
                .into_iter()
                .map(Value::Object)
                .collect();
            drop(_t);
            write_json(&rows, ctx);
        }
    }
    Ok(())
}

fn load(arg: &str, ctx: &OutputCtx) -> Result<String, PowerError> {
    let _t = ctx.timer("read_input");
    read_input(arg)
}
