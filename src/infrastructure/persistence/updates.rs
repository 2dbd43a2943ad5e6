use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::UpdateIntent;

/// Buffers every URL id from `updates` until the stream closes.
///
/// Returns `None` if `cancel` fires first; the partial batch is discarded.
pub(crate) async fn drain_updates(
    cancel: &CancellationToken,
    updates: &mut mpsc::Receiver<UpdateIntent>,
) -> Option<Vec<String>> {
    let mut url_ids = Vec::new();

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return None,
            received = updates.recv() => match received {
                Some(intent) => url_ids.push(intent.url_id),
                None => return Some(url_ids),
            },
        }
    }
}
