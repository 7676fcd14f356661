//! Output aggregation for deployed subprocesses.
//!
//! A background drain task owns the child's stdout reader and appends every
//! chunk it reads to an [`OutputBuffer`]. Callers read snapshots and clear the
//! buffer from their own task; all three operations go through one mutex.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::watch;

/// Append-only byte log shared between a drain task and its caller.
///
/// Cloning yields another handle to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl OutputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // The buffer holds plain bytes, so a panic mid-append cannot leave it
    // in a state worse than a truncated chunk.
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, chunk: &[u8]) {
        self.lock().extend_from_slice(chunk);
    }

    /// Copy of the current contents. Does not clear.
    #[must_use]
    pub fn snapshot(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Discard everything buffered so far. A no-op on an empty buffer.
    pub fn clear(&self) {
        self.lock().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Lifecycle of a drain task as seen by an observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrainState {
    Running,
    /// End of stream reached.
    Finished,
    /// A read failed; draining stopped. Carries the error text.
    Failed(String),
}

impl DrainState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Spawn a task that copies `reader` into `buffer` until end of stream.
///
/// The returned receiver reports the drain's final state. Nobody has to
/// watch it: publishing never blocks the drain.
pub fn spawn_drain<R>(
    reader: R,
    buffer: OutputBuffer,
    chunk_size: usize,
) -> watch::Receiver<DrainState>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = watch::channel(DrainState::Running);
    tokio::spawn(async move {
        let state = drain(reader, &buffer, chunk_size).await;
        tx.send_replace(state);
    });
    rx
}

async fn drain<R>(mut reader: R, buffer: &OutputBuffer, chunk_size: usize) -> DrainState
where
    R: AsyncRead + Unpin,
{
    let mut chunk = vec![0u8; chunk_size.max(1)];
    let mut total = 0usize;
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => {
                tracing::debug!(bytes = total, "stdout drain reached end of stream");
                return DrainState::Finished;
            }
            Ok(n) => {
                buffer.append(&chunk[..n]);
                total += n;
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => {
                tracing::warn!(error = %e, bytes = total, "stdout drain stopped on read error");
                return DrainState::Failed(e.to_string());
            }
        }
    }
}

/// Wait until the drain behind `rx` reaches a terminal state.
pub async fn wait_drained(rx: &mut watch::Receiver<DrainState>) -> DrainState {
    match rx.wait_for(DrainState::is_terminal).await {
        Ok(state) => state.clone(),
        // Sender gone without a terminal state: the task was aborted.
        Err(_) => DrainState::Failed("drain task ended unexpectedly".to_string()),
    }
}
