//! Work generator: turns an identifier list into the shared input stream.

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::STREAM_CAPACITY;

/// Spawns the producer task feeding `url_ids` into a multi-consumer stream.
///
/// Identifiers are emitted in input order. The stream closes when every
/// identifier has been sent, when cancellation fires, or when all consumers
/// have gone away. An in-flight send is abandoned on cancellation.
pub fn generate(
    tasks: &mut JoinSet<()>,
    cancel: &CancellationToken,
    url_ids: Vec<String>,
) -> flume::Receiver<String> {
    let (tx, rx) = flume::bounded(STREAM_CAPACITY);
    let cancel = cancel.clone();

    tasks.spawn(async move {
        let total = url_ids.len();
        let mut emitted = 0usize;

        for url_id in url_ids {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                sent = tx.send_async(url_id) => {
                    if sent.is_err() {
                        break;
                    }
                    emitted += 1;
                }
            }
        }

        tracing::trace!(emitted, total, "Generator finished");
    });

    rx
}
