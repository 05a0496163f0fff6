//! Drives a fuzzing run: one request per input, a bounded worker pool, and a
//! single aggregator that owns the output.
mod aggregator;
mod progress;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::time::Instant;
use tracing::debug;

use crate::error::{AppError, AppResult, HttpError};
use crate::filter::FilterChain;
use crate::http::{Executor, FuzzResponse, RequestTemplate};
use crate::input::InputProvider;
use crate::output::OutputProvider;
use crate::shutdown::ShutdownSender;

use aggregator::Aggregator;

pub use progress::format_progress;

/// Capacity of the worker -> aggregator channel.
const EVENT_CHANNEL_CAPACITY: usize = 1_024;

/// What a worker hands to the aggregator.
#[derive(Debug)]
pub enum WorkerEvent {
    Response(Box<FuzzResponse>),
    Failed { input: Vec<u8>, error: HttpError },
}

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    pub total: usize,
    pub processed: usize,
    pub reported: usize,
    pub errors: usize,
    pub elapsed: Duration,
    /// Shutdown fired before every input was processed.
    pub cancelled: bool,
}

pub struct Job<I, O> {
    template: Arc<RequestTemplate>,
    executor: Executor,
    chain: FilterChain,
    input: I,
    output: O,
    threads: usize,
}

impl<I, O> Job<I, O>
where
    I: InputProvider,
    O: OutputProvider + 'static,
{
    #[must_use]
    pub fn new(
        template: RequestTemplate,
        executor: Executor,
        chain: FilterChain,
        input: I,
        output: O,
        threads: usize,
    ) -> Self {
        Self {
            template: Arc::new(template),
            executor,
            chain,
            input,
            output,
            threads: threads.max(1),
        }
    }

    /// Runs until the input is exhausted or `shutdown_tx` fires, then
    /// finalizes the output.
    ///
    /// # Errors
    ///
    /// Returns an error when the aggregator task panics or the output cannot
    /// be finalized.
    pub async fn run(self, shutdown_tx: &ShutdownSender) -> AppResult<JobSummary> {
        let Self {
            template,
            executor,
            chain,
            mut input,
            mut output,
            threads,
        } = self;

        let total = input.total();
        let started = Instant::now();
        output.banner(&chain);

        let (event_tx, event_rx) = mpsc::channel::<WorkerEvent>(EVENT_CHANNEL_CAPACITY);
        let aggregator = tokio::spawn(
            Aggregator {
                output,
                chain,
                total,
                started,
            }
            .run(event_rx, shutdown_tx.subscribe()),
        );

        let mut shutdown_rx = shutdown_tx.subscribe();
        let permits = Arc::new(Semaphore::new(threads));
        let mut cancelled = false;

        while let Some(value) = input.next() {
            let permit = tokio::select! {
                biased;
                _ = shutdown_rx.recv() => {
                    cancelled = true;
                    break;
                }
                permit = Arc::clone(&permits).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_err) => break,
                },
            };

            let template = Arc::clone(&template);
            let executor = executor.clone();
            let event_tx = event_tx.clone();
            let mut worker_shutdown = shutdown_tx.subscribe();
            tokio::spawn(async move {
                let _permit = permit;
                let request = template.prepare(&value);
                let event = match executor.execute(&request, &mut worker_shutdown).await {
                    Ok(response) => WorkerEvent::Response(Box::new(response)),
                    Err(HttpError::Cancelled { url }) => {
                        debug!("Request to {} cancelled", url);
                        return;
                    }
                    Err(error) => WorkerEvent::Failed { input: value, error },
                };
                if event_tx.send(event).await.is_err() {
                    debug!("Aggregator gone, dropping event");
                }
            });
        }
        drop(event_tx);

        let (mut output, counters) = aggregator.await?;
        output.finalize().map_err(AppError::output)?;

        let summary = JobSummary {
            total,
            processed: counters.processed,
            reported: counters.reported,
            errors: counters.errors,
            elapsed: started.elapsed(),
            cancelled: cancelled || counters.processed < total,
        };
        debug!("Run finished: {:?}", summary);
        Ok(summary)
    }
}
