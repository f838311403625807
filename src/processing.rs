//! Fan-out/fan-in processing of a captured item set.
//!
//! One tokio task per item sleeps for the simulated delay and sends a single
//! status line on a shared bounded channel. The caller waits for every task
//! to finish through a `JoinSet`, then drains the channel until it closes.

use crate::error::DemoError;
use crate::item::Item;
use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

pub fn format_result(item: &Item) -> String {
    format!("Processed: {} [{}]", item.text, item.status())
}

/// Simulates work on one item, then sends exactly one status line.
pub async fn process_item(
    item: Item,
    tx: mpsc::Sender<String>,
    delay: Duration,
) -> Result<(), DemoError> {
    tokio::time::sleep(delay).await;
    tx.send(format_result(&item)).await?;
    Ok(())
}

/// Processes every item concurrently and collects one line per item.
///
/// Launch and drain counts both come from `items`. The channel holds one slot
/// per item, so no task blocks on a send while the caller is joining.
pub async fn fan_out(items: Vec<Item>, delay: Duration) -> Result<Vec<String>, DemoError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let launched = items.len();
    let (tx, mut rx) = mpsc::channel(launched);
    let mut set = JoinSet::new();

    for item in items {
        set.spawn(process_item(item, tx.clone(), delay));
    }
    // Only the task clones remain, so the channel closes once they finish.
    drop(tx);
    debug!("launched {} processing tasks", launched);

    while let Some(joined) = set.join_next().await {
        joined??;
    }

    let mut results = Vec::with_capacity(launched);
    while let Some(line) = rx.recv().await {
        results.push(line);
    }
    debug!("collected {} of {} results", results.len(), launched);

    Ok(results)
}
