//! Reads format, dimensions and size for candidate files
//!
//! Every failure is reported to the diagnostics sink and the file is skipped;
//! one bad file never stops the run.

use crate::core::{ExtractError, ImageRecord};
use crate::utils::image::DecoderRegistry;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Opens `path` and decodes just its header.
///
/// The file handle is dropped before this returns, on every path.
pub fn read_image_meta(registry: &DecoderRegistry, path: &Path) -> Result<ImageRecord, ExtractError> {
    let file = File::open(path).map_err(ExtractError::Open)?;
    let file_size = file.metadata().map_err(ExtractError::Metadata)?.len();

    let mut reader = BufReader::new(file);
    let header = registry.decode(&mut reader)?;

    Ok(ImageRecord::new(header, file_size, path.to_path_buf()))
}

/// Builds a record for every path that decodes, in input order.
///
/// Failures are written to `diagnostics` as `Failed to decode <path>. <cause>`.
pub fn extract_metadata(
    registry: &DecoderRegistry,
    paths: &[PathBuf],
    diagnostics: &mut dyn Write,
) -> Vec<ImageRecord> {
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        match read_image_meta(registry, path) {
            Ok(record) => {
                tracing::debug!(
                    path = ?record.path,
                    format = %record.format,
                    width = record.width,
                    height = record.height,
                    "decoded header"
                );
                records.push(record);
            }
            Err(err) => {
                // best-effort: a failed diagnostic write is ignored
                let _ = writeln!(diagnostics, "Failed to decode {}. {}", path.display(), err);
            }
        }
    }

    tracing::info!(
        candidates = paths.len(),
        decoded = records.len(),
        "metadata extraction finished"
    );
    records
}
