use std::io::{self, Write};

use anyhow::Result;
use cctrace_store::Database;

use crate::args::OutputFormat;
use crate::types::CompileCommand;

pub fn handle(
    db: &Database,
    pattern: &str,
    directories: bool,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    let mut query = if directories {
        db.query_directories(pattern)?
    } else {
        db.query_files(pattern)?
    };

    let rows = query.rows()?;
    let limit = limit.unwrap_or(usize::MAX);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Plain => {
            for record in rows.take(limit) {
                let record = record?;
                writeln!(out, "{}, {}, {}", record.directory, record.file, record.command)?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<CompileCommand> = rows
                .take(limit)
                .map(|record| record.map(CompileCommand::from))
                .collect::<cctrace_store::Result<_>>()?;
            serde_json::to_writer_pretty(&mut out, &entries)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
