//! Plain text output: one block per line.

use crate::models::{DualMode, RenderOptions};
use crate::processing::FamilyGroups;
use std::io::{self, Write};

/// Separator between family groups: three blank lines.
const GROUP_SEPARATOR: &str = "\n\n\n";

/// Write every group, one rendered block per line.
pub fn write_text<W: Write>(
    out: &mut W,
    groups: &FamilyGroups,
    options: RenderOptions,
) -> io::Result<()> {
    let non_empty: Vec<_> = groups.values().filter(|g| !g.is_empty()).collect();
    for (i, blocks) in non_empty.iter().enumerate() {
        for block in blocks.iter() {
            writeln!(out, "{}", block.render(options, DualMode::ValueDependent))?;
        }
        if i + 1 < non_empty.len() {
            out.write_all(GROUP_SEPARATOR.as_bytes())?;
        }
    }
    out.flush()
}
