use anyhow::{Context, Result, anyhow};
use cctrace_core::{STORE_ENV_VAR, resolve_store_path};
use cctrace_store::Database;

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let store_path = resolve_store_path(cli.db.as_deref())
        .ok_or_else(|| anyhow!("no store configured; pass --db or set {}", STORE_ENV_VAR))?;
    let db = Database::open(&store_path)
        .with_context(|| format!("could not open store {}", store_path.display()))?;

    match cli.command {
        Commands::Export { roots } => handlers::export::handle(&db, &roots),

        Commands::Query {
            pattern,
            directories,
            format,
            limit,
        } => handlers::query::handle(&db, &pattern, directories, format, limit),
    }
}
