use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Tool used when the invoked name carries no suffix.
pub const DEFAULT_TOOL: &str = "cc";

/// Extract the real tool name from the name the proxy was invoked under.
///
/// The proxy is installed as `<anything>-<realtool>`, e.g. `cctrace-gcc` or
/// `cctrace-arm-gcc`. Everything after the first `-` of the basename is the
/// tool; a missing separator or an empty suffix falls back to [`DEFAULT_TOOL`].
pub fn resolve_tool_name(invoked: &str) -> String {
    let basename = Path::new(invoked)
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    match basename.split_once('-') {
        Some((_, tool)) if !tool.is_empty() => tool.to_string(),
        _ => DEFAULT_TOOL.to_string(),
    }
}

/// Search a PATH-style value for an executable named `tool`.
///
/// An absolute name is accepted as-is when it points at an executable.
pub fn find_in_path(tool: &str, search_path: &OsStr) -> Option<PathBuf> {
    let candidate = Path::new(tool);
    if candidate.is_absolute() {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    std::env::split_paths(search_path)
        .map(|dir| dir.join(tool))
        .find(|candidate| is_executable(candidate))
}

/// Locate `tool` on the process search path.
pub fn locate_tool(tool: &str) -> Option<PathBuf> {
    let search_path = std::env::var_os("PATH")?;
    find_in_path(tool, &search_path)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
