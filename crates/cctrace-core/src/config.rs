use std::path::PathBuf;

/// Environment variable naming the invocation store.
pub const STORE_ENV_VAR: &str = "CCTRACE_DB";

/// Resolve the store location based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CCTRACE_DB environment variable (with tilde expansion)
/// 3. None — the recorder then does nothing, the CLI reports an error
pub fn resolve_store_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    std::env::var(STORE_ENV_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(|value| expand_tilde(&value))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
