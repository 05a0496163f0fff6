use std::path::Path;

use clap::ArgMatches;

use crate::args::FuzzArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::filter::FilterChain;
use crate::http::RequestTemplate;
use crate::input::{InputProvider, WordlistInput};

use super::types::RunPlan;

pub(in crate::entry) fn build_plan(mut args: FuzzArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, matches, &config)?;
    }

    let Some(url) = args.url.clone() else {
        tracing::error!("Missing URL (set -u/--url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    };
    let Some(wordlist) = args.wordlist.clone() else {
        tracing::error!("Missing wordlist (set -w/--wordlist or provide in config).");
        return Err(AppError::validation(ValidationError::MissingWordlist));
    };
    if args.output_format.is_some() && args.output.is_none() {
        return Err(AppError::validation(
            ValidationError::OutputFormatRequiresOutput,
        ));
    }

    let template = RequestTemplate::new(
        &args.keyword,
        &args.method,
        &url,
        args.headers.clone(),
        &args.data,
    )?;
    if !template.uses_keyword() {
        return Err(AppError::validation(ValidationError::KeywordNotUsed {
            keyword: args.keyword.clone(),
        }));
    }

    let chain = FilterChain::from_args(&args)?;
    let input = WordlistInput::from_file(Path::new(&wordlist))?;
    tracing::debug!(
        "Planned {} requests against {} with {} workers",
        input.total(),
        url,
        args.threads.get()
    );

    Ok(RunPlan {
        args,
        template,
        chain,
        input,
    })
}
