use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const JSON_EXTENSION: &str = ".json";

/// Lists the regular files directly inside `dir`, sorted by file name
///
/// Entries that vanish or cannot be stat'ed while scanning are left out.
pub fn sorted_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Like [`sorted_files`], restricted to `*.json`
pub fn sorted_json_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    Ok(sorted_files(dir)?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(JSON_EXTENSION))
        })
        .collect())
}
