//! Tab-separated table output

use crate::core::ImageRecord;
use crate::utils::size::human_readable_size;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

use super::display_path;

pub const NO_IMAGES: &str = "No loadable images specified.";

pub const COLUMNS: [&str; 6] = ["NUM", "FORMAT", "WIDTH", "HEIGHT", "SIZE", "FILENAME"];

/// Writes the header row and one 1-indexed row per record.
///
/// An empty record list prints only [`NO_IMAGES`].
pub fn write_report(
    output: &mut dyn Write,
    records: &[ImageRecord],
    base_dir: Option<&Path>,
) -> Result<()> {
    if records.is_empty() {
        writeln!(output, "{}", NO_IMAGES)?;
        return Ok(());
    }

    writeln!(output, "{}", COLUMNS.join("\t"))?;

    for (i, record) in records.iter().enumerate() {
        writeln!(
            output,
            "{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            record.format,
            record.width,
            record.height,
            human_readable_size(record.file_size),
            display_path(&record.path, base_dir).display()
        )?;
    }
    Ok(())
}
