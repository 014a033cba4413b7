//! Durable ticket number sequencer.
//!
//! A single integer persisted in a small state file. `next()` performs the
//! read-increment-persist cycle under an async mutex, so concurrent
//! requests can never observe the same number, and the persisted value
//! survives process restarts. Numbers are consumed before the print
//! attempt and are never rolled back, so the sequence may have gaps where
//! a render or print failed downstream.
//!
//! Mutual-exclusion scope is the process. Running multiple instances
//! against the same counter file is not supported.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub struct TicketSequencer {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TicketSequencer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomically advance the counter and return the new value.
    ///
    /// The whole read-increment-persist cycle runs under the lock. An
    /// absent or non-numeric counter file is treated as 0, so numbering
    /// restarts from 1 rather than failing the request, an accepted
    /// degradation for a corrupted state file.
    pub async fn next(&self) -> io::Result<u64> {
        let _guard = self.lock.lock().await;

        let current = self.read_current().await;
        let next = current + 1;
        self.persist(next).await?;

        debug!(ticket_num = next, "Advanced ticket counter");
        Ok(next)
    }

    async fn read_current(&self) -> u64 {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(value) => value,
                Err(_) => {
                    warn!(
                        path = %self.path.display(),
                        "Ticket counter is not numeric, restarting from 0"
                    );
                    0
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ticket counter unreadable, restarting from 0"
                );
                0
            }
        }
    }

    /// Persist via temp file + fsync + rename so a crash mid-write leaves
    /// the previous value intact.
    async fn persist(&self, value: u64) -> io::Result<()> {
        let tmp = self.path.with_extension("tmp");

        let mut file = fs::File::create(&tmp).await?;
        file.write_all(value.to_string().as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp, &self.path).await
    }
}
