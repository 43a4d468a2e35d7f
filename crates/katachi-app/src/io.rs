use std::io::BufRead;

use kanal::Sender;
use tokio_util::sync::CancellationToken;

/// What the terminal reader hands to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// End of input; nothing more will arrive
    Closed,
}

/// Forward lines from `reader` until it ends or nobody listens; returns the count sent
pub fn read_lines<R: BufRead>(reader: R, input_tx: &Sender<Input>) -> usize {
    let mut sent = 0;
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        if input_tx.send(Input::Line(line)).is_err() {
            return sent;
        }
        sent += 1;
    }
    let _ = input_tx.send(Input::Closed);
    sent
}

/// Read stdin on a dedicated thread so a pending read never blocks shutdown
pub async fn watch_input(cancel: CancellationToken, input_tx: Sender<Input>) -> anyhow::Result<()> {
    std::thread::spawn(move || {
        let sent = read_lines(std::io::stdin().lock(), &input_tx);
        tracing::debug!("Input closed after {} lines", sent);
    });

    cancel.cancelled().await;
    tracing::debug!("Input watcher stopping");
    Ok(())
}
