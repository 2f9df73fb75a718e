use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

/// Forwards only the latest value once the input has been quiet for `delay`
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Spawn a debouncing task between a fresh input channel and the returned output
    pub fn spawn<T: Send + 'static>(self, capacity: usize) -> (mpsc::Sender<T>, mpsc::Receiver<T>) {
        let (input_tx, input_rx) = mpsc::channel(capacity);
        let (output_tx, output_rx) = mpsc::channel(capacity);
        tokio::spawn(self.run(input_rx, output_tx));
        (input_tx, output_rx)
    }

    /// Runs until the input closes. A pending value is flushed on close.
    pub async fn run<T>(self, mut input: mpsc::Receiver<T>, output: mpsc::Sender<T>) {
        let mut pending: Option<T> = None;
        let mut deadline = Instant::now();

        loop {
            if pending.is_none() {
                match input.recv().await {
                    Some(value) => {
                        pending = Some(value);
                        deadline = Instant::now() + self.delay;
                    }
                    None => return,
                }
                continue;
            }

            tokio::select! {
                received = input.recv() => match received {
                    Some(value) => {
                        pending = Some(value);
                        deadline = Instant::now() + self.delay;
                    }
                    None => {
                        if let Some(value) = pending.take() {
                            let _ = output.send(value).await;
                        }
                        return;
                    }
                },
                _ = sleep_until(deadline) => {
                    if let Some(value) = pending.take() {
                        if output.send(value).await.is_err() {
                            return;
                        }
                    }
                }
            }
        }
    }
}
