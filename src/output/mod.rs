//! Output of merged block lists.
//!
//! - [`text`] - one block per line
//! - [`json`] - JSON document
//! - [`terminal`] - stderr diagnostics

mod json;
mod terminal;
mod text;

pub use json::write_json;
pub use terminal::{format_summary, print_summary, StderrObserver};
pub use text::write_text;

use crate::config::{Config, OutputFormat};
use crate::processing::{FamilyGroups, MergeSummary};
use std::error::Error;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

fn write_to<W: Write>(
    out: &mut W,
    groups: &FamilyGroups,
    summary: MergeSummary,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let options = config.render_options();
    match config.format {
        OutputFormat::Text => write_text(out, groups, options)?,
        OutputFormat::Json => write_json(out, groups, options, summary)?,
    }
    Ok(())
}

/// Write the merged groups to the configured output file, or stdout.
///
/// Missing parent directories of the output file are created.
pub fn write_output(
    groups: &FamilyGroups,
    summary: MergeSummary,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    log::info!("Creating output directory: {}", parent.display());
                    fs::create_dir_all(parent)?;
                }
            }
            let file = File::create(path)
                .map_err(|e| format!("Error creating output file {}: {e}", path.display()))?;
            log::info!("Writing output to file: {}", path.display());
            write_to(&mut BufWriter::new(file), groups, summary, config)
        }
        None => write_to(&mut io::stdout().lock(), groups, summary, config),
    }
}
