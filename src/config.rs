use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolved settings for one imgls run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImglsConfig {
    /// Files or directories to scan, in the order given
    pub inputs: Vec<PathBuf>,
    /// Directory that displayed file names are made relative to
    pub base_dir: Option<PathBuf>,
    /// Emit debug logs on stderr
    pub verbose: bool,
}

impl ImglsConfig {
    /// Builds the config from command-line paths.
    ///
    /// With no paths the current directory becomes the only input, and
    /// failing to resolve it is an error. With explicit paths a missing
    /// current directory only disables relative display names.
    pub fn from_inputs(paths: Vec<PathBuf>, verbose: bool) -> Result<Self> {
        Self::resolve(paths, std::env::current_dir(), verbose)
    }

    fn resolve(
        paths: Vec<PathBuf>,
        cwd: std::io::Result<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        if paths.is_empty() {
            let cwd = cwd.context("Couldn't get current directory")?;
            return Ok(Self {
                inputs: vec![cwd.clone()],
                base_dir: Some(cwd),
                verbose,
            });
        }

        Ok(Self {
            inputs: paths,
            base_dir: cwd.ok(),
            verbose,
        })
    }
}
