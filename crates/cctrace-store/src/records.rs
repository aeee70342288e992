/// One recorded compiler invocation.
///
/// An invocation that names N source files produces N records sharing the
/// same `command` string. The pair (`directory`, `file`) is the store's
/// primary key; the last successful compile for a pair wins.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InvocationRecord {
    /// Absolute working directory at invocation time.
    pub directory: String,
    /// Absolute path of a single source-file operand.
    pub file: String,
    /// Full argument vector of the invocation, space-joined. Opaque; never
    /// re-parsed.
    pub command: String,
}
