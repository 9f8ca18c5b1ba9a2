//! JSON result store (the default backend).
//!
//! Each checkpoint rewrites the whole file.  The rewrite is not atomic: a
//! crash during a checkpoint can leave a truncated file, which [`load`]
//! reports as corrupt.
//!
//! [`load`]: StoreWriter::load

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::writer::StoreWriter;
use crate::{ResultStore, StoreError, StoreResult};

/// Writes a [`ResultStore`] as a single JSON document.
#[derive(Clone, Debug)]
pub struct JsonStoreWriter {
    path: PathBuf,
}

impl StoreWriter for JsonStoreWriter {
    fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn checkpoint(&mut self, store: &ResultStore) -> StoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut out, store)?;
        out.flush()?;
        Ok(())
    }

    fn load(&self) -> StoreResult<ResultStore> {
        let file = File::open(&self.path)?;
        let corrupt = |reason: String| StoreError::Corrupt { path: self.path.clone(), reason };

        let store: ResultStore = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                StoreError::Json(e)
            } else {
                corrupt(e.to_string())
            }
        })?;
        store.check().map_err(corrupt)
    }
}
