//! Diagnostics printed to stderr.

use crate::models::{DualMode, NetworkBlock, RenderOptions};
use crate::processing::{MergeObserver, MergeSummary};
use colored::Colorize;

/// Percentage as the report shows it: at least one decimal, so `50.0`.
fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Format the merge summary, one line per figure.
pub fn format_summary(summary: &MergeSummary) -> String {
    format!(
        "Original block count: {}.\nMerged block count: {} ({} %).\nDecrease by: {} ({} %).",
        summary.original,
        summary.merged.to_string().green(),
        format_percent(summary.merged_percent()),
        summary.decrease().to_string().yellow(),
        format_percent(summary.decrease_percent())
    )
}

/// Print the merge summary to stderr.
pub fn print_summary(summary: &MergeSummary) {
    eprintln!("{}", format_summary(summary));
}

/// Prints every merge event to stderr.
#[derive(Debug)]
pub struct StderrObserver {
    options: RenderOptions,
    pub count: usize,
}

impl StderrObserver {
    pub fn new(options: RenderOptions) -> StderrObserver {
        StderrObserver { options, count: 0 }
    }

    fn render(&self, block: &NetworkBlock) -> String {
        block.render(self.options, DualMode::ValueDependent)
    }

    /// Format one merge event.
    pub fn format_event(
        &self,
        left: &NetworkBlock,
        right: &NetworkBlock,
        result: &NetworkBlock,
    ) -> String {
        format!(
            "Merged {} and {} into {}.",
            self.render(left),
            self.render(right),
            self.render(result).bold()
        )
    }
}

impl MergeObserver for StderrObserver {
    fn merged(&mut self, left: &NetworkBlock, right: &NetworkBlock, result: &NetworkBlock) {
        self.count += 1;
        eprintln!("{}", self.format_event(left, right, result));
    }
}
