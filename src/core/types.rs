//! Core types shared across imgls modules

use crate::utils::image::{DecodeError, ImageHeader};
use std::path::PathBuf;
use thiserror::Error;

/// Metadata for one file whose header decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Encoding identifier reported by the decoder, e.g. "png"
    pub format: String,
    pub width: u32,
    pub height: u32,
    /// Size on disk when the file was opened
    pub file_size: u64,
    /// Path as supplied or as built from directory expansion
    pub path: PathBuf,
}

impl ImageRecord {
    pub fn new(header: ImageHeader, file_size: u64, path: PathBuf) -> Self {
        Self {
            format: header.format.to_string(),
            width: header.width,
            height: header.height,
            file_size,
            path,
        }
    }
}

/// Why a candidate file produced no record.
///
/// Displays as the bare underlying cause so diagnostics read
/// `Failed to decode <path>. <cause>`.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Open(std::io::Error),
    #[error(transparent)]
    Metadata(std::io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
