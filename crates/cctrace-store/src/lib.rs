// SQLite invocation store
// One row per (directory, file); the command string is an opaque blob

mod db;
mod error;
mod records;

// Public API
pub use db::{Database, RecordQuery, RecordRows};
pub use error::{Error, Result};
pub use records::InvocationRecord;
