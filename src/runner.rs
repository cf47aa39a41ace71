use crate::config::ImglsConfig;
use crate::core::{collect_paths, extract_metadata};
use crate::format::write_report;
use crate::utils::image::DecoderRegistry;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Main entry point in CLI mode.
///
/// Prints the table on stdout and per-file diagnostics on stderr using the
/// default set of decoders.
pub fn run(config: &ImglsConfig) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diagnostics = stderr.lock();

    run_with(config, &DecoderRegistry::default(), &mut out, &mut diagnostics)?;
    out.flush().context("Failed to flush output")
}

/// Collects, extracts and prints with explicit decoders and sinks.
pub fn run_with(
    config: &ImglsConfig,
    registry: &DecoderRegistry,
    output: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> Result<()> {
    tracing::debug!(inputs = config.inputs.len(), formats = ?registry.names(), "scan started");

    let paths = collect_paths(&config.inputs);
    let records = extract_metadata(registry, &paths, diagnostics);

    write_report(output, &records, config.base_dir.as_deref()).context("Failed to write report")
}
