//! Lexical path helpers.
//!
//! Nothing here touches the filesystem. Both `/` and `\` are accepted as
//! separators, and component comparisons ignore case.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PathError, Result};

const SEPARATORS: [char; 2] = ['/', '\\'];

fn same_component(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Drive prefix such as `C:`, or `""` for paths without one.
fn drive_root(path: &str) -> &str {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => &path[..2],
        _ => "",
    }
}

fn trim_separators(path: &str) -> String {
    path.replace('\\', "/").trim_matches('/').to_owned()
}

/// Whether `path` can be expressed relative to `parent`, i.e. both sit on
/// the same drive (or neither names one).
///
/// # Errors
///
/// Returns [`PathError::EmptyParent`] if `parent` is empty.
pub fn can_make_relative(parent: &str, path: &str) -> Result<bool> {
    if parent.is_empty() {
        return Err(PathError::EmptyParent.into());
    }
    let parent = trim_separators(parent);
    let path = trim_separators(path);
    Ok(drive_root(&parent).eq_ignore_ascii_case(drive_root(&path)))
}

/// Expresses `path` relative to the directory `parent`.
///
/// Both paths are split into components after trimming trailing
/// separators. The result climbs out of every `parent` component past the
/// shared prefix with `..`, then descends into the rest of `path`, joined
/// with `/`. Identical paths give an empty string.
///
/// # Errors
///
/// Returns [`PathError::NoCommonDirectory`] if the first components differ.
pub fn make_relative(parent: &str, path: &str) -> Result<String> {
    let parent_parts: Vec<&str> = parent.trim_end_matches(SEPARATORS).split(SEPARATORS).collect();
    let path_parts: Vec<&str> = path.trim_end_matches(SEPARATORS).split(SEPARATORS).collect();

    let common = parent_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| same_component(a, b))
        .count();
    if common == 0 {
        debug!(parent, path, "no common directory");
        return Err(PathError::NoCommonDirectory {
            parent: parent.to_owned(),
            path: path.to_owned(),
        }
        .into());
    }

    let ups = std::iter::repeat("..").take(parent_parts.len() - common);
    let downs = path_parts[common..].iter().copied();
    Ok(ups.chain(downs).collect::<Vec<_>>().join("/"))
}

/// [`make_relative`] guarded by [`can_make_relative`]; `None` when either
/// refuses.
#[must_use]
pub fn try_make_relative(parent: &str, path: &str) -> Option<String> {
    match can_make_relative(parent, path) {
        Ok(true) => make_relative(parent, path).ok(),
        _ => None,
    }
}

/// Joins `a` and `b` with exactly one `/`, normalizing `\` to `/`.
#[must_use]
pub fn combine(a: &str, b: &str) -> String {
    let a = a.replace('\\', "/");
    let b = b.replace('\\', "/");
    format!("{}/{}", a.trim_end_matches('/'), b.trim_start_matches('/'))
}

fn trimmed_lossy(path: &Path) -> String {
    path.to_string_lossy().trim_end_matches(SEPARATORS).to_owned()
}

/// Whether `sub` is `parent` or lies beneath it.
#[must_use]
pub fn has_sub_directory(parent: &Path, sub: &Path) -> bool {
    let parent = trimmed_lossy(parent);
    sub.ancestors().any(|dir| trimmed_lossy(dir) == parent)
}

/// Walks up from `dir` and returns the first directory named `name`.
///
/// Filesystem roots never match.
#[must_use]
pub fn find_parent_directory_with_name(dir: &Path, name: &str) -> Option<PathBuf> {
    let mut dir = dir;
    loop {
        let parent = dir.parent()?;
        let matches = dir
            .file_name()
            .is_some_and(|n| same_component(&n.to_string_lossy(), name));
        if matches {
            return Some(dir.to_path_buf());
        }
        dir = parent;
    }
}
