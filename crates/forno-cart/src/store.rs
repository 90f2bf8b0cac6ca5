//! # Pending-Order Store
//!
//! The durable append/rewrite buffer of staged order lines.
//!
//! ## Concurrency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Store-Wide Exclusive Lock                              │
//! │                                                                         │
//! │  add_line ───────► store.append(line)        ┐                          │
//! │  remove_line ────► store.remove_at(i)        ├─ each takes the lock     │
//! │  clear_cart ─────► store.clear()             │  for one operation       │
//! │  list_cart ──────► store.load()              ┘                          │
//! │                                                                         │
//! │  commit_order ───► store.lock() ──► guard.load()                        │
//! │                                     ... price, persist sale ...         │
//! │                                     guard.clear()                       │
//! │                                                                         │
//! │  The commit holds the guard across its await points, so no append or   │
//! │  removal interleaves: the commit prices exactly the snapshot it reads  │
//! │  and clears exactly what it committed.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Crash Consistency
//! - `append` writes one whole record plus newline in a single call; a crash
//!   mid-write leaves at worst a trailing partial line that the
//!   malformed-record skip drops on the next load.
//! - `remove_at` rewrites the whole buffer through a temp file and rename,
//!   so the buffer is never observed half-rewritten.
//! - The buffer is re-read from disk on every access, never cached.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::codec;
use crate::error::CartResult;
use forno_core::types::StagedLine;

// =============================================================================
// Store
// =============================================================================

/// Durable buffer of staged order lines, keyed by position.
///
/// ## Usage
/// ```rust,no_run
/// # async fn demo() -> forno_cart::CartResult<()> {
/// use forno_cart::PendingOrderStore;
/// use forno_core::types::StagedLine;
///
/// let store = PendingOrderStore::new("pedidos.txt");
/// store.append(&StagedLine::new("medium", 1, vec![])).await?;
/// let lines = store.load().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PendingOrderStore {
    /// Path of the plain-text buffer file.
    path: PathBuf,

    /// Serializes buffer access; commits hold it across their whole run.
    lock: Mutex<()>,
}

impl PendingOrderStore {
    /// Creates a store over the given buffer file. The file itself is
    /// created lazily on first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PendingOrderStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the underlying buffer file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full buffer. A missing file is initialized empty and an
    /// empty sequence returned — never a not-found error. Malformed records
    /// are skipped with a warning.
    pub async fn load(&self) -> CartResult<Vec<StagedLine>> {
        let _guard = self.lock.lock().await;
        load_lines(&self.path)
    }

    /// Appends one line to the end of the buffer without disturbing
    /// existing entries.
    pub async fn append(&self, line: &StagedLine) -> CartResult<()> {
        let _guard = self.lock.lock().await;
        append_line(&self.path, line)
    }

    /// Removes the entry at `index` if in range, rewriting the whole buffer.
    /// Returns whether a removal occurred; out-of-range is `Ok(false)` and
    /// leaves the buffer unchanged.
    pub async fn remove_at(&self, index: usize) -> CartResult<bool> {
        let _guard = self.lock.lock().await;
        remove_line_at(&self.path, index)
    }

    /// Truncates the buffer to empty. Idempotent.
    pub async fn clear(&self) -> CartResult<()> {
        let _guard = self.lock.lock().await;
        clear_file(&self.path)
    }

    /// Acquires the store-wide lock and returns a guard exposing the same
    /// operations synchronously. The commit pipeline holds this guard for
    /// its entire run so it reads a consistent snapshot and no interleaved
    /// append is dropped or double-counted.
    pub async fn lock(&self) -> StoreGuard<'_> {
        StoreGuard {
            path: &self.path,
            _guard: self.lock.lock().await,
        }
    }
}

// =============================================================================
// Store Guard
// =============================================================================

/// Exclusive handle on the store for multi-step operations.
///
/// The buffer operations on the guard are synchronous: the caller already
/// holds the lock, and file access is blocking either way.
#[derive(Debug)]
pub struct StoreGuard<'a> {
    path: &'a Path,
    _guard: MutexGuard<'a, ()>,
}

impl StoreGuard<'_> {
    /// See [`PendingOrderStore::load`].
    pub fn load(&self) -> CartResult<Vec<StagedLine>> {
        load_lines(self.path)
    }

    /// See [`PendingOrderStore::append`].
    pub fn append(&self, line: &StagedLine) -> CartResult<()> {
        append_line(self.path, line)
    }

    /// See [`PendingOrderStore::remove_at`].
    pub fn remove_at(&self, index: usize) -> CartResult<bool> {
        remove_line_at(self.path, index)
    }

    /// See [`PendingOrderStore::clear`].
    pub fn clear(&self) -> CartResult<()> {
        clear_file(self.path)
    }
}

// =============================================================================
// File Operations
// =============================================================================

fn load_lines(path: &Path) -> CartResult<Vec<StagedLine>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Initialize an empty buffer, matching the legacy behavior of
            // creating the file on first read.
            File::create(path)?;
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut lines = Vec::new();
    for (number, record) in raw.lines().enumerate() {
        match codec::decode(record) {
            Some(line) => lines.push(line),
            None => {
                warn!(record = number + 1, "Skipping malformed cart record");
            }
        }
    }

    Ok(lines)
}

fn append_line(path: &Path, line: &StagedLine) -> CartResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    // One write call per record: a crash leaves at worst a partial trailing
    // line, which decodes to None and is skipped on the next load.
    file.write_all(format!("{}\n", codec::encode(line)).as_bytes())?;

    debug!(size = %line.size, quantity = line.quantity, "Staged line appended");
    Ok(())
}

fn remove_line_at(path: &Path, index: usize) -> CartResult<bool> {
    let mut lines = load_lines(path)?;
    if index >= lines.len() {
        return Ok(false);
    }

    lines.remove(index);
    rewrite_all(path, &lines)?;

    debug!(index, remaining = lines.len(), "Staged line removed");
    Ok(true)
}

fn clear_file(path: &Path) -> CartResult<()> {
    // Truncate; creating the file if missing keeps clear idempotent.
    File::create(path)?;
    Ok(())
}

/// Rewrites the whole buffer via write-temp-then-rename so a crash never
/// leaves a half-rewritten file.
fn rewrite_all(path: &Path, lines: &[StagedLine]) -> CartResult<()> {
    let tmp = path.with_extension("tmp");

    let mut encoded = String::new();
    for line in lines {
        encoded.push_str(&codec::encode(line));
        encoded.push('\n');
    }

    fs::write(&tmp, encoded)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> PendingOrderStore {
        PendingOrderStore::new(dir.path().join("pedidos.txt"))
    }

    fn line(size: &str, quantity: i64, ingredients: &[&str]) -> StagedLine {
        StagedLine::new(
            size,
            quantity,
            ingredients.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[tokio::test]
    async fn test_load_missing_file_initializes_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let lines = store.load().await.unwrap();
        assert!(lines.is_empty());
        // The file now exists
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_append_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let staged = vec![
            line("medium", 2, &["cheese", "olives"]),
            line("small", 1, &[]),
            line("large", 3, &["ham", "ham"]),
        ];
        for l in &staged {
            store.append(l).await.unwrap();
        }

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, staged);
    }

    #[tokio::test]
    async fn test_file_encoding_is_byte_exact() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store
            .append(&line("medium", 2, &["cheese", "olives"]))
            .await
            .unwrap();
        store.append(&line("small", 1, &[])).await.unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "medium|2|cheese,olives\nsmall|1|\n");
    }

    #[tokio::test]
    async fn test_remove_at_valid_index_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.append(&line("small", 1, &[])).await.unwrap();
        store.append(&line("medium", 2, &[])).await.unwrap();
        store.append(&line("large", 3, &[])).await.unwrap();

        assert!(store.remove_at(1).await.unwrap());

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].size, "small");
        assert_eq!(loaded[1].size, "large");
    }

    #[tokio::test]
    async fn test_remove_at_out_of_range_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.append(&line("small", 1, &[])).await.unwrap();

        assert!(!store.remove_at(1).await.unwrap());
        assert!(!store.remove_at(99).await.unwrap());

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.append(&line("small", 1, &[])).await.unwrap();

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());

        // Clearing an already-empty buffer is fine
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_records_are_skipped_on_load() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        // Two good records around a malformed one and a partial append
        fs::write(
            store.path(),
            "medium|2|cheese\ngarbage-line\nsmall|1|\nlarge|3",
        )
        .unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].size, "medium");
        assert_eq!(loaded[1].size, "small");
    }

    #[tokio::test]
    async fn test_guard_sees_and_clears_consistent_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        store.append(&line("medium", 1, &[])).await.unwrap();

        let guard = store.lock().await;
        let snapshot = guard.load().unwrap();
        assert_eq!(snapshot.len(), 1);
        guard.clear().unwrap();
        drop(guard);

        assert!(store.load().await.unwrap().is_empty());
    }
}
