//! The `StoreWriter` trait implemented by all result-store backends.

use std::path::{Path, PathBuf};

use crate::{ResultStore, StoreResult};

/// Durable storage for one sweep's [`ResultStore`].
///
/// A writer is bound to one path.  Constructing it touches nothing on disk;
/// the file appears on the first [`checkpoint`](Self::checkpoint).
pub trait StoreWriter {
    /// Bind a writer to `path`.
    fn at(path: PathBuf) -> Self
    where
        Self: Sized;

    fn path(&self) -> &Path;

    /// `true` if a result file is already present at [`path`](Self::path).
    fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Persist the full accumulated store, replacing whatever was written
    /// before.  Called after every sweep point.
    fn checkpoint(&mut self, store: &ResultStore) -> StoreResult<()>;

    /// Read the store back.  A file that cannot be decoded into a
    /// well-formed store is reported as `StoreError::Corrupt`.
    fn load(&self) -> StoreResult<ResultStore>;
}
