//! Merge CIDR blocks (IPv4 and IPv6) into the minimal equivalent set.
//!
//! Duplicates are removed, adjacent halves combined into their parent and
//! blocks contained in another dropped.
//!
//! ```
//! use ipmerge::{normalize_texts, models::Family};
//! let groups = normalize_texts(["10.0.0.0/25", "10.0.0.128/25", "::1"]).unwrap();
//! assert_eq!(groups[&Family::Ipv4][0].to_string(), "10.0.0.0/24");
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use input::read_blocks;
use models::{AddressError, NetworkBlock};
use output::{print_summary, write_output, StderrObserver};
use processing::{block_count, normalize, FamilyGroups, MergeSummary, NoopObserver};
use std::error::Error;

/// Parse block texts, failing on the first invalid one.
pub fn parse_blocks<I, S>(texts: I) -> Result<Vec<NetworkBlock>, AddressError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| NetworkBlock::parse(t.as_ref()))
        .collect()
}

/// Parse and merge block texts without any I/O.
pub fn normalize_texts<I, S>(texts: I) -> Result<FamilyGroups, AddressError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(normalize(parse_blocks(texts)?, &mut NoopObserver))
}

/// Read, merge and write according to `config`.
pub fn run(config: &Config) -> Result<MergeSummary, Box<dyn Error>> {
    log::info!("#Start run() with {} input(s)", config.inputs.len());

    let blocks = read_blocks(config)?;
    let original = blocks.len();

    let groups = if config.print_merges() {
        let mut observer = StderrObserver::new(config.render_options());
        let groups = normalize(blocks, &mut observer);
        log::debug!("{} merge(s) reported", observer.count);
        groups
    } else {
        normalize(blocks, &mut NoopObserver)
    };

    let summary = MergeSummary::new(original, block_count(&groups));
    write_output(&groups, summary, config)?;

    if config.print_summary() {
        if config.print_merges() {
            eprintln!();
        }
        print_summary(&summary);
    }
    Ok(summary)
}
