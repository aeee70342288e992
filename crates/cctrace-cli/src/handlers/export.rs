use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cctrace_store::Database;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::types::CompileCommand;

pub fn handle(db: &Database, roots: &[PathBuf]) -> Result<()> {
    let colored = io::stderr().is_terminal();
    let mut failed = 0usize;

    for root in roots {
        match export_root(db, root) {
            Ok(0) => eprintln!(" {}: no records", root.display()),
            Ok(count) => eprintln!(" {}: {} ({} entries)", root.display(), ok(colored), count),
            Err(err) => {
                failed += 1;
                eprintln!(" {}: {}: {:#}", root.display(), fail(colored), err);
            }
        }
    }

    if failed > 0 {
        bail!("export failed for {} of {} roots", failed, roots.len());
    }
    Ok(())
}

/// Export one root. Returns the number of entries written; zero means no
/// matching records, and then no file is created.
fn export_root(db: &Database, root: &Path) -> Result<usize> {
    let mut query = db.query_files(&glob_under(root))?;
    let entries: Vec<CompileCommand> = query
        .rows()?
        .map(|record| record.map(CompileCommand::from))
        .collect::<cctrace_store::Result<_>>()?;

    if entries.is_empty() {
        return Ok(0);
    }

    let target = root.join("compile_commands.json");
    let file = File::create(&target)
        .with_context(|| format!("could not create {}", target.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &entries)
        .with_context(|| format!("could not write {}", target.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(entries.len())
}

/// Glob matching every recorded file under `root`.
fn glob_under(root: &Path) -> String {
    let root = root.to_string_lossy();
    format!("{}/*", root.trim_end_matches('/'))
}

fn ok(colored: bool) -> String {
    if colored {
        "OK".green().to_string()
    } else {
        "OK".to_string()
    }
}

fn fail(colored: bool) -> String {
    if colored {
        "FAIL".red().to_string()
    } else {
        "FAIL".to_string()
    }
}
