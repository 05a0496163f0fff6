use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::warn;

use crate::filter::FilterChain;
use crate::output::OutputProvider;
use crate::shutdown::ShutdownReceiver;

use super::WorkerEvent;
use super::progress::format_progress;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct Counters {
    pub processed: usize,
    pub reported: usize,
    pub errors: usize,
}

/// Sole owner of the output for the whole run.
pub(super) struct Aggregator<O> {
    pub output: O,
    pub chain: FilterChain,
    pub total: usize,
    pub started: Instant,
}

impl<O> Aggregator<O>
where
    O: OutputProvider,
{
    /// Consumes worker events until every sender is gone, then hands the
    /// output back for finalization.
    pub(super) async fn run(
        mut self,
        mut event_rx: mpsc::Receiver<WorkerEvent>,
        mut shutdown_rx: ShutdownReceiver,
    ) -> (O, Counters) {
        let mut counters = Counters::default();
        let mut ticker = interval(PROGRESS_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut shutdown_seen = false;

        loop {
            tokio::select! {
                event = event_rx.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    self.handle(event, &mut counters);
                }
                _ = ticker.tick() => {
                    self.show_progress(counters);
                }
                signal = shutdown_rx.recv(), if !shutdown_seen => {
                    shutdown_seen = true;
                    if !matches!(signal, Err(broadcast::error::RecvError::Closed)) {
                        self.output.warning("Stopping: waiting for in-flight requests");
                    }
                }
            }
        }

        self.show_progress(counters);
        (self.output, counters)
    }

    fn handle(&mut self, event: WorkerEvent, counters: &mut Counters) {
        counters.processed = counters.processed.saturating_add(1);
        match event {
            WorkerEvent::Response(response) => {
                if self.output.result(&response, &self.chain) {
                    counters.reported = counters.reported.saturating_add(1);
                }
            }
            WorkerEvent::Failed { input, error } => {
                counters.errors = counters.errors.saturating_add(1);
                warn!(
                    "Request for '{}' failed: {}",
                    String::from_utf8_lossy(&input),
                    error
                );
                self.output.error(&error.to_string());
            }
        }
    }

    fn show_progress(&mut self, counters: Counters) {
        self.output.progress(&format_progress(
            counters.processed,
            self.total,
            self.started.elapsed(),
            counters.errors,
        ));
    }
}
