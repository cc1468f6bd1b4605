//! File helpers for card lists.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::list::{parse_names, parse_sections, Section};

/// Read a one-name-per-line file.
pub fn read_names(path: &Path) -> io::Result<Vec<String>> {
    Ok(parse_names(&fs::read_to_string(path)?))
}

/// Read a `Header:` sectioned file.
pub fn read_sections(path: &Path) -> io::Result<Vec<Section>> {
    Ok(parse_sections(&fs::read_to_string(path)?))
}

/// `.txt` files in `dir` whose names start with `prefix`, sorted by name.
pub fn find_lists(dir: &Path, prefix: &str) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(prefix) && n.ends_with(".txt"));
        if matches && path.is_file() {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// Move `winner` to the front of `paths`.
///
/// A bare file name matches the listed file with that name, so the listed
/// path (with its directory) is the one kept. A winner that matches nothing
/// is prepended as given.
#[must_use]
pub fn winner_first(mut paths: Vec<PathBuf>, winner: &Path) -> Vec<PathBuf> {
    let bare = winner.parent().map_or(true, |dir| dir.as_os_str().is_empty());
    let position = paths
        .iter()
        .position(|p| p == winner || (bare && p.file_name() == winner.file_name()));
    let first = match position {
        Some(i) => paths.remove(i),
        None => winner.to_path_buf(),
    };
    paths.insert(0, first);
    paths
}
