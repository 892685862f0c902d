//! Small path helpers shared by the loader and diagnostics.

use std::path::Path;

/// Suffix every runnable script must carry.
const SCRIPT_SUFFIX: &str = ".js";

/// Whether `path` names a file the loader should execute.
///
/// Matches the `.js` suffix of the file name, case-sensitively.
pub fn is_script_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SCRIPT_SUFFIX))
}

/// Short name used in log lines and diagnostics: the file name when there is
/// one, the whole path otherwise.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
