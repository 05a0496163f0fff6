use crate::error::{AppError, AppResult, ValidationError};
use crate::http::{ClientConfig, Executor, build_client};
use crate::job::Job;
use crate::output::{OutputSettings, Stdoutput};
use crate::shutdown::{setup_signal_shutdown_handler, shutdown_channel};

use super::types::RunPlan;

pub(in crate::entry) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match run_plan(plan).await {
        Err(AppError::Validation(ValidationError::RunCancelled)) => Ok(()),
        result => result,
    }
}

async fn run_plan(plan: RunPlan) -> AppResult<()> {
    let RunPlan {
        args,
        template,
        chain,
        input,
    } = plan;

    let client = build_client(&ClientConfig::from_args(&args))?;
    let executor = Executor::new(client, args.max_download_size.get());
    let output = Stdoutput::new(OutputSettings::from_args(&args));

    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let job = Job::new(
        template,
        executor,
        chain,
        input,
        output,
        args.threads.get(),
    );
    let summary = job.run(&shutdown_tx).await;
    drop(shutdown_tx.send(()));
    signal_handle.await?;

    let summary = summary?;
    if summary.cancelled {
        tracing::info!(
            "Run stopped after {}/{} requests",
            summary.processed,
            summary.total
        );
        return Err(AppError::validation(ValidationError::RunCancelled));
    }
    Ok(())
}
