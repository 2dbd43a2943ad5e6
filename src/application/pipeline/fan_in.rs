//! Fan-in stage: merges the worker lanes into one stream.

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::STREAM_CAPACITY;
use crate::domain::entities::UpdateIntent;

/// Merges `lanes` into a single stream.
///
/// One relay task per lane forwards every intent to the shared output. Each
/// relay owns a clone of the merged sender and the original is dropped before
/// returning, so the merged stream closes exactly once: after the last relay
/// has finished. Under cancellation relays exit early and buffered intents are
/// discarded.
pub fn fan_in(
    tasks: &mut JoinSet<()>,
    cancel: &CancellationToken,
    lanes: Vec<mpsc::Receiver<UpdateIntent>>,
) -> mpsc::Receiver<UpdateIntent> {
    let (tx, rx) = mpsc::channel(STREAM_CAPACITY);

    for (relay_id, lane) in lanes.into_iter().enumerate() {
        tasks.spawn(run_relay(relay_id, lane, tx.clone(), cancel.clone()));
    }

    rx
}

async fn run_relay(
    relay_id: usize,
    mut lane: mpsc::Receiver<UpdateIntent>,
    merged: mpsc::Sender<UpdateIntent>,
    cancel: CancellationToken,
) {
    let mut forwarded = 0usize;

    loop {
        let intent = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            received = lane.recv() => match received {
                Some(intent) => intent,
                None => break,
            },
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            sent = merged.send(intent) => {
                if sent.is_err() {
                    break;
                }
                forwarded += 1;
            }
        }
    }

    tracing::trace!(relay_id, forwarded, "Relay finished");
}
