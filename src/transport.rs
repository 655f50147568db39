//! Line-oriented delivery of control messages.
//!
//! Reads newline-delimited JSON from stdin or a file/pipe on a background
//! task and forwards every decoded message to the event loop.

use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::models::ControlMessage;

/// Where control messages come from.
#[derive(Debug, Clone)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::Path(PathBuf::from(path)),
        }
    }
}

/// Spawn the reader task for `source`.
pub fn spawn_reader(
    source: Source,
    tx: mpsc::UnboundedSender<ControlMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = match &source {
            Source::Stdin => forward_lines(BufReader::new(tokio::io::stdin()), &tx).await,
            Source::Path(path) => match tokio::fs::File::open(path).await {
                Ok(file) => forward_lines(BufReader::new(file), &tx).await,
                Err(e) => {
                    tracing::error!("Cannot open {}: {}", path.display(), e);
                    return;
                }
            },
        };
        match result {
            Ok(count) => tracing::info!(count, "message source closed"),
            Err(e) => tracing::warn!("Reading control messages failed: {}", e),
        }
    })
}

/// Decode every line of `reader` and send the resulting messages.
/// Returns the number of messages forwarded.
pub async fn forward_lines<R>(
    reader: R,
    tx: &mpsc::UnboundedSender<ControlMessage>,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut forwarded = 0;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match ControlMessage::parse(line) {
            Ok(Some(msg)) => {
                if tx.send(msg).is_err() {
                    break;
                }
                forwarded += 1;
            }
            Ok(None) => tracing::debug!("Ignoring message without a known action"),
            Err(e) => tracing::warn!("Skipping control message: {}", e),
        }
    }
    Ok(forwarded)
}
