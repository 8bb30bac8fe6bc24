//! Sequential id-sheet file writer.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::SheetConfig;
use crate::observability::metrics;
use crate::sheet::types::IdSheet;

pub const HEADER: &str = "id";

/// Writes sheets under one output directory.
#[derive(Debug)]
pub struct SheetWriter {
    output_dir: PathBuf,
    pace: Duration,
    atomic_replace: bool,
    /// Per-target guards; `None` when writes are not serialized.
    locks: Option<DashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl SheetWriter {
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            output_dir: PathBuf::from(&config.output_dir),
            pace: Duration::from_millis(config.pace_ms),
            atomic_replace: config.atomic_replace,
            locks: config.serialize_writes.then(DashMap::new),
        }
    }

    /// Where `sheet` will be written.
    pub fn target_path(&self, sheet: &IdSheet) -> PathBuf {
        self.output_dir.join(sheet.filename())
    }

    /// Write the header and one line per id, returning the time taken.
    ///
    /// Without atomic replace a failure part-way through leaves a partial
    /// file behind.
    pub async fn write(&self, sheet: &IdSheet) -> std::io::Result<Duration> {
        let start = Instant::now();
        let path = self.target_path(sheet);

        let result = match &self.locks {
            Some(locks) => {
                let lock = locks.entry(path.clone()).or_default().clone();
                let guard = lock.lock_owned().await;
                let result = self.write_unlocked(&path, sheet.ids()).await;
                drop(guard);
                // Only the table's own handle left: nobody is waiting on this path.
                locks.remove_if(&path, |_, m| Arc::strong_count(m) == 1);
                result
            }
            None => self.write_unlocked(&path, sheet.ids()).await,
        };

        match &result {
            Ok(()) => {
                metrics::record_sheet_written(sheet.ids().len());
                tracing::info!(
                    path = %path.display(),
                    ids = sheet.ids().len(),
                    elapsed_s = start.elapsed().as_secs_f64(),
                    "Sheet written"
                );
            }
            Err(e) => {
                metrics::record_sheet_failure();
                tracing::warn!(path = %path.display(), error = %e, "Sheet write failed");
            }
        }

        result.map(|()| start.elapsed())
    }

    async fn write_unlocked(&self, path: &Path, ids: &[i64]) -> std::io::Result<()> {
        if self.atomic_replace {
            self.write_atomic(path, ids).await
        } else {
            write_lines(path, ids, self.pace).await
        }
    }

    async fn write_atomic(&self, path: &Path, ids: &[i64]) -> std::io::Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sheet".to_string());
        let tmp = path.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()));

        let written = match write_lines(&tmp, ids, self.pace).await {
            Ok(()) => tokio::fs::rename(&tmp, path).await,
            Err(e) => Err(e),
        };

        if written.is_err() {
            if let Err(e) = tokio::fs::remove_file(&tmp).await {
                tracing::debug!(tmp = %tmp.display(), error = %e, "Temp sheet not removed");
            }
        }
        written
    }
}

async fn write_lines(path: &Path, ids: &[i64], pace: Duration) -> std::io::Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(format!("{HEADER}\n").as_bytes()).await?;

    for id in ids {
        if !pace.is_zero() {
            tokio::time::sleep(pace).await;
        }
        file.write_all(format!("{id}\n").as_bytes()).await?;
    }

    // tokio files finish the last write in the background unless flushed
    file.flush().await?;
    Ok(())
}
