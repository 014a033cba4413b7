//! Append-only ticket event log.
//!
//! One line per accepted request, written after the number is consumed and
//! the ticket rendered, regardless of print outcome. This is an audit
//! trail, never read back by the service, so append failures are logged
//! and swallowed rather than failing the request.

use std::io;
use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

pub struct TicketLog {
    path: PathBuf,
}

impl TicketLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a `(ticket_num, ticket_type, task)` event. Also emitted as a
    /// tracing event so it shows up in operational logs.
    pub async fn append(&self, ticket_num: u64, ticket_type: &str, task: &str) {
        info!(ticket_num, ticket_type, task, "Ticket issued");

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!(
            "{timestamp} Ticket #{ticket_num} ({ticket_type}): {}\n",
            task.replace('\n', " ")
        );

        if let Err(e) = self.write_line(&line).await {
            error!(
                path = %self.path.display(),
                error = %e,
                "Failed to append ticket log entry"
            );
        }
    }

    async fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn appends_one_line_per_event() {
        let temp_dir = TempDir::new().unwrap();
        let log = TicketLog::new(temp_dir.path().join("tickets.log"));

        log.append(1, "default", "Buy milk").await;
        log.append(2, "chore", "Feed the cat\ntwice").await;

        let contents = std::fs::read_to_string(temp_dir.path().join("tickets.log")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Ticket #1 (default): Buy milk"));
        // Newlines in the task are flattened so the log stays line-oriented.
        assert!(lines[1].contains("Ticket #2 (chore): Feed the cat twice"));
    }

    #[tokio::test]
    async fn unwritable_path_does_not_panic() {
        let log = TicketLog::new("/nonexistent-dir/tickets.log");
        log.append(1, "default", "task").await;
    }
}
