use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, params};

use crate::records::InvocationRecord;
use crate::{Error, Result};

/// How long a writer waits on a locked store before failing.
///
/// Parallel builds run many proxy processes against the same file; lock
/// contention is the normal case and is retried at the storage layer rather
/// than surfaced to writers.
const BUSY_TIMEOUT: Duration = Duration::from_millis(1000);

/// The `ON CONFLICT REPLACE` clause on the primary key makes a plain INSERT
/// an upsert: the newer row for a (directory, file) pair entirely overwrites
/// the older one.
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS cflags(\
directory TEXT, file TEXT, command TEXT, \
PRIMARY KEY(directory, file) ON CONFLICT REPLACE);";

const UPSERT: &str = "INSERT INTO cflags(directory, file, command) VALUES (?1, ?2, ?3)";
const SELECT_BY_FILE: &str =
    "SELECT directory, file, command FROM cflags WHERE file GLOB ?1";
const SELECT_BY_DIRECTORY: &str =
    "SELECT directory, file, command FROM cflags WHERE directory GLOB ?1";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `db_path`, creating the file and the schema as
    /// needed. Safe to call from many processes at once.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert or replace the record for `(directory, file)`.
    pub fn upsert(&self, directory: &str, file: &str, command: &str) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(UPSERT)?;
        stmt.execute(params![directory, file, command])?;
        Ok(())
    }

    /// Record every source file of one invocation under a shared command.
    ///
    /// A failure for one file is reported on stderr and skipped; the
    /// remaining files still write. Returns the number of rows written.
    pub fn record_invocation(
        &self,
        directory: &Path,
        files: &[PathBuf],
        command: &str,
    ) -> usize {
        let directory = directory.to_string_lossy();
        let mut written = 0;

        for file in files {
            let file = file.to_string_lossy();
            match self.upsert(&directory, &file, command) {
                Ok(()) => written += 1,
                Err(err) => eprintln!("cctrace: could not record {}: {}", file, err),
            }
        }

        written
    }

    /// Prepare a query matching `pattern` against the `file` column.
    pub fn query_files(&self, pattern: &str) -> Result<RecordQuery<'_>> {
        self.query(SELECT_BY_FILE, pattern)
    }

    /// Prepare a query matching `pattern` against the `directory` column.
    pub fn query_directories(&self, pattern: &str) -> Result<RecordQuery<'_>> {
        self.query(SELECT_BY_DIRECTORY, pattern)
    }

    fn query(&self, sql: &str, pattern: &str) -> Result<RecordQuery<'_>> {
        if pattern.is_empty() {
            return Err(Error::Query("empty glob pattern".to_string()));
        }

        let stmt = self.conn.prepare(sql)?;
        Ok(RecordQuery {
            stmt,
            pattern: pattern.to_owned(),
        })
    }
}

/// A prepared glob query over the store.
pub struct RecordQuery<'conn> {
    stmt: rusqlite::Statement<'conn>,
    pattern: String,
}

impl RecordQuery<'_> {
    /// Execute the query, yielding records lazily in storage order.
    ///
    /// The iterator may be dropped before exhaustion; rows past that point
    /// are never fetched.
    pub fn rows(&mut self) -> Result<RecordRows<'_>> {
        let rows = self.stmt.query([self.pattern.as_str()])?;
        Ok(RecordRows { rows })
    }
}

pub struct RecordRows<'stmt> {
    rows: rusqlite::Rows<'stmt>,
}

impl Iterator for RecordRows<'_> {
    type Item = Result<InvocationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.rows.next() {
                Ok(Some(row)) => match read_record(row) {
                    Ok(Some(record)) => return Some(Ok(record)),
                    // Corrupt row, already reported; keep going.
                    Ok(None) => continue,
                    Err(err) => return Some(Err(err)),
                },
                Ok(None) => return None,
                Err(err) => return Some(Err(Error::Database(err))),
            }
        }
    }
}

/// Read one row, skipping rows that carry a NULL column.
fn read_record(row: &rusqlite::Row<'_>) -> Result<Option<InvocationRecord>> {
    let directory: Option<String> = row.get(0)?;
    let file: Option<String> = row.get(1)?;
    let command: Option<String> = row.get(2)?;

    match (directory, file, command) {
        (Some(directory), Some(file), Some(command)) => Ok(Some(InvocationRecord {
            directory,
            file,
            command,
        })),
        _ => {
            eprintln!("cctrace: skipping store row with NULL column");
            Ok(None)
        }
    }
}
