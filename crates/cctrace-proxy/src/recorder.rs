use cctrace_core::{Classification, classify, resolve_store_path};
use cctrace_store::Database;

/// Record one successful invocation, best effort.
///
/// The compile already succeeded, so nothing in here may change the proxy's
/// exit status: an unconfigured store is a silent no-op, and every failure
/// is reported on stderr and swallowed.
pub fn record(argv: &[String]) {
    let Some(store_path) = resolve_store_path(None) else {
        return;
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("cctrace: could not determine working directory: {}", err);
            return;
        }
    };

    let Classification { files, command } = classify(argv, &cwd);
    if files.is_empty() {
        return;
    }

    match Database::open(&store_path) {
        Ok(db) => {
            db.record_invocation(&cwd, &files, &command);
        }
        Err(err) => {
            eprintln!(
                "cctrace: could not open store {}: {}",
                store_path.display(),
                err
            );
        }
    }
}
