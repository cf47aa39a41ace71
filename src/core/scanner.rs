//! Expands path arguments into candidate files
//!
//! Missing or unreadable inputs are dropped without a diagnostic.

use crate::fs::{clean_path, list_files};
use std::path::{Path, PathBuf};

/// Expands `inputs` into a flat list of candidate file paths.
///
/// Files are kept verbatim. Directories contribute their immediate
/// non-directory children as `clean(dir)/name`. Inputs are processed in
/// order and nothing is deduplicated.
pub fn collect_paths<P: AsRef<Path>>(inputs: &[P]) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for input in inputs {
        let input = input.as_ref();

        let metadata = match std::fs::metadata(input) {
            Ok(m) => m,
            Err(err) => {
                tracing::debug!(path = ?input, %err, "skipping input");
                continue;
            }
        };

        if !metadata.is_dir() {
            paths.push(input.to_path_buf());
            continue;
        }

        let names = match list_files(input) {
            Ok(names) => names,
            Err(err) => {
                tracing::debug!(path = ?input, %err, "skipping unreadable directory");
                continue;
            }
        };

        let dir = clean_path(input);
        paths.extend(names.into_iter().map(|name| dir.join(name)));
    }

    tracing::debug!(count = paths.len(), "collected candidate paths");
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_missing_inputs_are_dropped() {
        let paths = collect_paths(&["/no/such/file.png", "/no/such/dir"]);
        assert!(paths.is_empty());
    }

    #[test]
    fn test_files_are_kept_verbatim_and_duplicated() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("a.png");
        File::create(&file)?;

        let paths = collect_paths(&[file.clone(), file.clone()]);
        assert_eq!(paths, vec![file.clone(), file]);
        Ok(())
    }

    #[test]
    fn test_directory_is_one_level_deep() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        File::create(root.join("one.png"))?;
        File::create(root.join("two.jpg"))?;
        fs::create_dir(root.join("sub"))?;
        fs::create_dir(root.join("sub2"))?;
        File::create(root.join("sub/three.gif"))?;

        let paths = collect_paths(&[root]);
        assert_eq!(paths, vec![root.join("one.png"), root.join("two.jpg")]);
        Ok(())
    }

    #[test]
    fn test_directory_path_is_cleaned() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("imgs"))?;
        File::create(root.join("imgs/a.png"))?;

        let messy = format!("{}/./imgs//", root.display());
        let paths = collect_paths(&[messy]);
        assert_eq!(paths, vec![root.join("imgs").join("a.png")]);
        Ok(())
    }

    #[test]
    fn test_input_order_is_preserved() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("dir"))?;
        File::create(root.join("dir/inner.png"))?;
        File::create(root.join("z.png"))?;

        let paths = collect_paths(&[root.join("z.png"), root.join("missing"), root.join("dir")]);
        assert_eq!(paths, vec![root.join("z.png"), root.join("dir/inner.png")]);
        Ok(())
    }
}
