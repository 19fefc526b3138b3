//! Tabular store boundary. The remote store replaces whole-sheet contents on
//! write, so the append operation reconstructs the full row set.

use crate::error::{LadderError, Result};
use crate::progress;
use crate::record::ProgressRecord;
use serde::Serialize;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// SheetStore
// ---------------------------------------------------------------------------

/// A worksheet-addressed tabular store.
///
/// Reading a missing or empty sheet returns an empty vec, never an error.
/// `write` replaces the entire sheet contents with the given row set.
pub trait SheetStore: Send + Sync {
    fn read(&self, worksheet: &str) -> Result<Vec<ProgressRecord>>;
    fn write(&self, worksheet: &str, rows: &[ProgressRecord]) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Append
// ---------------------------------------------------------------------------

/// Outcome of a submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    /// True when this record crossed the cleared threshold for the first time.
    pub milestone: bool,
    pub record: ProgressRecord,
}

/// Append one record to the log.
///
/// The row only lands when the whole-sheet write succeeds; a rejected write
/// leaves the sheet untouched, so no partial row is ever persisted.
pub fn append_record(
    store: &dyn SheetStore,
    worksheet: &str,
    record: ProgressRecord,
) -> Result<Vec<ProgressRecord>> {
    let mut rows = store.read(worksheet)?;
    rows.push(record);
    store.write(worksheet, &rows)?;
    Ok(rows)
}

/// Append one record and report whether it was a milestone — the first time
/// this user reached the cleared threshold for the item. Duplicate
/// submissions simply add rows; history is preserved, never deduplicated.
pub fn submit(
    store: &dyn SheetStore,
    worksheet: &str,
    record: ProgressRecord,
) -> Result<Submission> {
    if record.nurse_name.trim().is_empty() {
        return Err(LadderError::MissingUser);
    }

    let mut rows = store.read(worksheet)?;
    let prior = progress::level_for(
        &progress::reduce(&rows, &record.nurse_name),
        &record.item_id,
    );
    rows.push(record.clone());
    store.write(worksheet, &rows)?;

    Ok(Submission {
        milestone: progress::is_milestone(prior, record.level),
        record,
    })
}

// ---------------------------------------------------------------------------
// MemorySheetStore
// ---------------------------------------------------------------------------

/// In-memory store for unit and integration tests. `fail_writes` simulates a
/// store that serves reads but rejects writes.
#[derive(Default)]
pub struct MemorySheetStore {
    rows: Mutex<Vec<ProgressRecord>>,
    fail_writes: bool,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<ProgressRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_writes: false,
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn rows(&self) -> Vec<ProgressRecord> {
        self.rows.lock().expect("store mutex poisoned").clone()
    }
}

impl SheetStore for MemorySheetStore {
    fn read(&self, _worksheet: &str) -> Result<Vec<ProgressRecord>> {
        Ok(self.rows())
    }

    fn write(&self, _worksheet: &str, rows: &[ProgressRecord]) -> Result<()> {
        if self.fail_writes {
            return Err(LadderError::StoreUnavailable("write rejected".into()));
        }
        *self.rows.lock().expect("store mutex poisoned") = rows.to_vec();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
