use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Lists the non-directory entries directly inside `dir`, sorted by name.
/// Sub-directories are skipped, not descended into.
///
/// Entries whose type cannot be determined are skipped.
pub fn list_files(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_type() {
            Ok(ft) if !ft.is_dir() => names.push(entry.file_name()),
            Ok(_) => {}
            Err(err) => tracing::debug!(path = ?entry.path(), %err, "skipping entry"),
        }
    }

    names.sort();
    Ok(names)
}

/// Lexically normalises a path: drops `.`, folds `name/..`, removes
/// redundant separators. A rooted path never climbs above its root and an
/// empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut prefix: Vec<Component> = Vec::new();
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => prefix.push(component),
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ if prefix.iter().any(|c| matches!(c, Component::RootDir)) => {}
                _ => parts.push(component),
            },
            Component::Normal(_) => parts.push(component),
        }
    }

    let cleaned: PathBuf = prefix.into_iter().chain(parts).collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RelativePathError {
    #[error("can't make path relative to an empty base")]
    EmptyBase,
    #[error("can't make {target:?} relative to {base:?}")]
    Unrelated { base: PathBuf, target: PathBuf },
}

/// Expresses `target` relative to `base` using only path text.
///
/// Fails when exactly one side is absolute, when the roots differ, or when
/// the base would have to climb out of an unknown (`..`) directory.
pub fn relative_path(base: &Path, target: &Path) -> Result<PathBuf, RelativePathError> {
    if base.as_os_str().is_empty() {
        return Err(RelativePathError::EmptyBase);
    }

    let base_clean = clean_path(base);
    let target_clean = clean_path(target);
    let unrelated = || RelativePathError::Unrelated {
        base: base.to_path_buf(),
        target: target.to_path_buf(),
    };

    if base_clean.has_root() != target_clean.has_root() {
        return Err(unrelated());
    }

    let base_parts: Vec<Component> = base_clean
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let target_parts: Vec<Component> = target_clean
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(b, t)| b == t)
        .count();

    let base_rest = &base_parts[common..];
    if base_rest
        .iter()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(unrelated());
    }

    let relative: PathBuf = base_rest
        .iter()
        .map(|_| Component::ParentDir)
        .chain(target_parts[common..].iter().copied())
        .collect();

    if relative.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(relative)
    }
}
