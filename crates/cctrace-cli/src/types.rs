use cctrace_store::InvocationRecord;
use serde::Serialize;

/// One entry of a clang-convention compilation database.
///
/// Key order is part of the external contract: directory, command, file.
/// See http://clang.llvm.org/docs/JSONCompilationDatabase.html
#[derive(Debug, Serialize)]
pub struct CompileCommand {
    pub directory: String,
    pub command: String,
    pub file: String,
}

impl From<InvocationRecord> for CompileCommand {
    fn from(record: InvocationRecord) -> Self {
        Self {
            directory: record.directory,
            command: record.command,
            file: record.file,
        }
    }
}
