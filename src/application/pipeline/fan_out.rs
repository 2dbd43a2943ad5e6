//! Fan-out stage: worker lanes competing for the shared input stream.

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::STREAM_CAPACITY;
use crate::domain::entities::UpdateIntent;

/// Spawns `workers` lanes that all drain the same `input` stream.
///
/// Whichever lane is ready first takes the next identifier; each identifier
/// reaches exactly one lane. Every lane turns identifiers into
/// [`UpdateIntent`]s on its own output stream and closes it once the input is
/// exhausted, cancellation fires, or its consumer is gone.
///
/// Returns one receiver per lane. `workers` of zero is treated as one.
pub fn fan_out(
    tasks: &mut JoinSet<()>,
    cancel: &CancellationToken,
    input: flume::Receiver<String>,
    workers: usize,
) -> Vec<mpsc::Receiver<UpdateIntent>> {
    let workers = workers.max(1);
    let mut lanes = Vec::with_capacity(workers);

    for lane_id in 0..workers {
        let (tx, rx) = mpsc::channel(STREAM_CAPACITY);
        tasks.spawn(run_lane(lane_id, input.clone(), tx, cancel.clone()));
        lanes.push(rx);
    }

    lanes
}

/// Body of a single worker lane.
async fn run_lane(
    lane_id: usize,
    input: flume::Receiver<String>,
    output: mpsc::Sender<UpdateIntent>,
    cancel: CancellationToken,
) {
    let mut processed = 0usize;

    loop {
        let url_id = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            received = input.recv_async() => match received {
                Ok(url_id) => url_id,
                Err(_) => break,
            },
        };

        let intent = UpdateIntent::new(url_id);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            sent = output.send(intent) => {
                if sent.is_err() {
                    break;
                }
                processed += 1;
            }
        }
    }

    tracing::trace!(lane_id, processed, "Worker lane finished");
}
