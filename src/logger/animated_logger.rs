use std::io::Write;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 120;

/// Spinner on stderr while a backend request is in flight.
pub struct AnimatedLogger {
    message: String,
    started_at: Option<Instant>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            started_at: None,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", FRAMES[frame], message);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.started_at = Some(Instant::now());
        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        let elapsed = self.halt().await;
        eprint!("\r\x1b[K✅ {} ({:.2}s)\n", final_message, elapsed);
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) -> f64 {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        self.started_at.take().map_or(0.0, |start| start.elapsed().as_secs_f64())
    }

    /// Runs `future` with the spinner showing, then reports success or failure.
    pub async fn track<T, E, F>(message: &str, done: &str, future: F) -> Result<T, E>
    where
        F: std::future::Future<Output = Result<T, E>>,
    {
        let mut logger = Self::new(message);
        logger.start();
        let result = future.await;
        match &result {
            Ok(_) => logger.stop(done).await,
            Err(_) => logger.error(&format!("{} failed", message.trim_end_matches("..."))).await,
        }
        result
    }
}
