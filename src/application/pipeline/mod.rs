//! Concurrent deletion pipeline.
//!
//! Turns a list of short URL identifiers into a single stream of
//! [`UpdateIntent`]s:
//!
//! ```text
//! ids ─► generator ─► shared input ─┬─► lane 0 ─► relay 0 ─┐
//!                                   ├─► lane 1 ─► relay 1 ─┼─► merged stream
//!                                   └─► lane N ─► relay N ─┘
//! ```
//!
//! - [`generator`] - single producer feeding the shared input stream
//! - [`fan_out`] - worker lanes competing for identifiers
//! - [`fan_in`] - relays merging lane outputs into one stream
//!
//! All stages observe one [`CancellationToken`] at every send and receive.
//! Stages have no error channel: the only failure point is the storage call
//! that consumes the merged stream.

pub mod fan_in;
pub mod fan_out;
pub mod generator;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::UpdateIntent;

/// Buffer size of every channel between stages.
pub(crate) const STREAM_CAPACITY: usize = 1;

/// Per-call pipeline topology.
///
/// Owns the merged output stream and every task spawned to produce it. The
/// topology exists for one deletion call only and is torn down when the
/// merged stream is consumed or dropped.
pub struct Pipeline {
    updates: mpsc::Receiver<UpdateIntent>,
    tasks: JoinSet<()>,
}

impl Pipeline {
    /// Wires generator, fan-out and fan-in for `url_ids` with `workers` lanes.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(url_ids: Vec<String>, workers: usize, cancel: &CancellationToken) -> Self {
        let mut tasks = JoinSet::new();

        tracing::debug!(ids = url_ids.len(), workers, "Building deletion pipeline");

        let input = generator::generate(&mut tasks, cancel, url_ids);
        let lanes = fan_out::fan_out(&mut tasks, cancel, input, workers);
        let updates = fan_in::fan_in(&mut tasks, cancel, lanes);

        Self { updates, tasks }
    }

    /// Number of tasks still owned by the topology.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Splits the topology into the merged stream and its task set.
    pub fn into_parts(self) -> (mpsc::Receiver<UpdateIntent>, JoinSet<()>) {
        (self.updates, self.tasks)
    }
}

/// Awaits every stage task, logging any that panicked.
pub async fn shutdown(mut tasks: JoinSet<()>) {
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::warn!(error = %e, "Pipeline task did not complete cleanly");
        }
    }
}
