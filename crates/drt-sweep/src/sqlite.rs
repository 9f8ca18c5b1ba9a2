//! SQLite result store (feature `sqlite`).
//!
//! Two tables: `grid` holds the single sweep grid row, `points` one row per
//! computed point with the record as JSON text.  A checkpoint inserts the
//! rows not yet on disk inside one transaction; stored rows are never
//! updated.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use drt_demand::SweepGrid;
use drt_engine::ResultRecord;

use crate::writer::StoreWriter;
use crate::{ResultStore, StoreError, StoreResult};

const SCHEMA: &str = "
    PRAGMA synchronous = NORMAL;
    CREATE TABLE IF NOT EXISTS grid (
        id     INTEGER PRIMARY KEY CHECK (id = 0),
        start  REAL    NOT NULL,
        stop   REAL    NOT NULL,
        points INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS points (
        idx    INTEGER PRIMARY KEY,
        x      REAL    NOT NULL,
        seq    INTEGER NOT NULL,
        record TEXT    NOT NULL
    );";

/// Writes a [`ResultStore`] to an SQLite database file.
pub struct SqliteStoreWriter {
    path: PathBuf,
    conn: Option<Connection>,
}

impl SqliteStoreWriter {
    fn connection(&mut self) -> StoreResult<&mut Connection> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    fs::create_dir_all(dir)?;
                }
                let conn = Connection::open(&self.path)?;
                conn.execute_batch(SCHEMA)?;
                conn
            }
        };
        Ok(self.conn.insert(conn))
    }

    fn read(&self) -> rusqlite::Result<(SweepGrid, Vec<(usize, String)>)> {
        let conn = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let grid = conn.query_row("SELECT start, stop, points FROM grid WHERE id = 0", [], |row| {
            Ok(SweepGrid {
                start:  row.get(0)?,
                stop:   row.get(1)?,
                points: row.get::<_, i64>(2)? as usize,
            })
        })?;
        let mut stmt = conn.prepare("SELECT idx, record FROM points ORDER BY seq")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)? as usize, row.get::<_, String>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok((grid, rows))
    }
}

impl StoreWriter for SqliteStoreWriter {
    fn at(path: PathBuf) -> Self {
        Self { path, conn: None }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn checkpoint(&mut self, store: &ResultStore) -> StoreResult<()> {
        let grid = *store.grid();
        let mut encoded = Vec::with_capacity(store.len());
        for entry in store.entries() {
            encoded.push(serde_json::to_string(&entry.record)?);
        }

        let conn = self.connection()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT OR IGNORE INTO grid (id, start, stop, points) VALUES (0, ?1, ?2, ?3)",
            rusqlite::params![grid.start, grid.stop, grid.points as i64],
        )?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR IGNORE INTO points (idx, x, seq, record) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (seq, (entry, record)) in store.entries().iter().zip(&encoded).enumerate() {
                stmt.execute(rusqlite::params![entry.index as i64, entry.x, seq as i64, record])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load(&self) -> StoreResult<ResultStore> {
        let corrupt = |reason: String| StoreError::Corrupt { path: self.path.clone(), reason };

        let (grid, rows) = self.read().map_err(|e| corrupt(e.to_string()))?;
        let mut entries = Vec::with_capacity(rows.len());
        for (index, text) in rows {
            let record: ResultRecord =
                serde_json::from_str(&text).map_err(|e| corrupt(e.to_string()))?;
            entries.push((index, record));
        }
        grid.validate().map_err(|e| corrupt(e.to_string()))?;
        ResultStore::from_entries(grid, entries).map_err(|e| corrupt(e.to_string()))
    }
}
