//! File-backed slot store, one per clinic daemon.
//!
//! The whole collection lives in a single JSON file and is rewritten in
//! full on every mutation (no append log, no versioning). All
//! load -> mutate -> save triplets run under the store's exclusive lock;
//! the lock is private to this process — the store is single-writer-process
//! by design, with no cross-process or cross-machine coordination.

use clinic_common::fsio::atomic_write_str;
use clinic_common::{Slot, ToolError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// On-disk layout: `{"slots": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    slots: Vec<Slot>,
}

/// Durable slot collection backed by a single file.
pub struct SlotStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SlotStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Exclusive section guard. Hold it across the whole
    /// load -> mutate -> save triplet.
    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read the full slot collection. A missing or malformed file is fatal
    /// for the request; there is no partial recovery.
    pub fn load(&self) -> Result<Vec<Slot>, ToolError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            ToolError::Storage(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let file: StoreFile = serde_json::from_str(&raw).map_err(|e| {
            ToolError::Storage(format!("corrupt store {}: {e}", self.path.display()))
        })?;

        for slot in &file.slots {
            if !slot.invariant_ok() {
                return Err(ToolError::Storage(format!(
                    "inconsistent slot for {} on {} at {} in {}",
                    slot.doctor,
                    slot.date,
                    slot.time,
                    self.path.display()
                )));
            }
        }
        Ok(file.slots)
    }

    /// Atomically rewrite the backing file with the full collection.
    /// Serialization is deterministic (stable field order, trailing
    /// newline), so re-reads are byte-reproducible for identical data.
    pub fn save(&self, slots: &[Slot]) -> Result<(), ToolError> {
        let file = StoreFile {
            slots: slots.to_vec(),
        };
        let body = serde_json::to_string_pretty(&file)
            .map_err(|e| ToolError::Storage(e.to_string()))?;
        atomic_write_str(&self.path, &format!("{body}\n")).map_err(|e| {
            ToolError::Storage(format!("cannot write {}: {e}", self.path.display()))
        })
    }

    /// Write the seed collection only when the backing file does not exist
    /// yet; an existing store is never overwritten.
    pub fn seed_if_missing(&self, slots: &[Slot]) -> Result<(), ToolError> {
        if self.path.exists() {
            return Ok(());
        }
        info!("seeding {} with {} slots", self.path.display(), slots.len());
        self.save(slots)
    }
}
