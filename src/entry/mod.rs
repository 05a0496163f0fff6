mod plan;

#[cfg(test)]
mod tests;

use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::FuzzArgs;
use crate::config::has_default_config;
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(args, &matches)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}

fn parse_args() -> AppResult<Option<(FuzzArgs, ArgMatches)>> {
    let mut cmd = FuzzArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = FuzzArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

/// Bare invocations print help, unless a default config file supplies the run.
fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}
