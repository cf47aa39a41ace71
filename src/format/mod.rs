//! Output formatting for imgls

pub mod table;

pub use table::write_report;

use crate::fs::relative_path;
use std::path::{Path, PathBuf};

/// Path shown in the FILENAME column.
///
/// Relative to `base_dir` when that can be computed, otherwise the path as
/// recorded.
pub fn display_path(path: &Path, base_dir: Option<&Path>) -> PathBuf {
    base_dir
        .filter(|base| !base.as_os_str().is_empty())
        .and_then(|base| relative_path(base, path).ok())
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative_to_base() {
        let shown = display_path(Path::new("/home/u/pics/a.png"), Some(Path::new("/home/u")));
        assert_eq!(shown, PathBuf::from("pics/a.png"));
    }

    #[test]
    fn test_display_path_fallbacks() {
        let path = Path::new("photo.png");
        assert_eq!(display_path(path, None), path);
        assert_eq!(display_path(path, Some(Path::new(""))), path);
        assert_eq!(display_path(path, Some(Path::new("/home/u"))), path);
    }
}
