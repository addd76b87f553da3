//! JSON output of the merged groups.

use crate::models::{DualMode, Family, NetworkBlock, RenderOptions};
use crate::processing::{FamilyGroups, MergeSummary};
use serde::Serialize;
use std::error::Error;
use std::io::Write;

#[derive(Serialize, Debug)]
struct OutputDocument {
    ipv4: Vec<String>,
    ipv6: Vec<String>,
    summary: MergeSummary,
}

fn render_family(groups: &FamilyGroups, family: Family, options: RenderOptions) -> Vec<String> {
    groups
        .get(&family)
        .map(|blocks| {
            blocks
                .iter()
                .map(|b: &NetworkBlock| b.render(options, DualMode::ValueDependent))
                .collect()
        })
        .unwrap_or_default()
}

/// Write the groups and summary as a pretty-printed JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    groups: &FamilyGroups,
    options: RenderOptions,
    summary: MergeSummary,
) -> Result<(), Box<dyn Error>> {
    let document = OutputDocument {
        ipv4: render_family(groups, Family::Ipv4, options),
        ipv6: render_family(groups, Family::Ipv6, options),
        summary,
    };
    serde_json::to_writer_pretty(&mut *out, &document)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::group_by_family;

    #[test]
    fn test_write_json() {
        let groups = group_by_family(vec![
            NetworkBlock::parse("10.0.0.0/24").unwrap(),
            NetworkBlock::parse("::ffff:192.0.2.0/120").unwrap(),
        ]);
        let mut buf = Vec::new();
        write_json(
            &mut buf,
            &groups,
            RenderOptions::default(),
            MergeSummary::new(3, 2),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ipv4"][0], "10.0.0.0/24");
        assert_eq!(value["ipv6"][0], "::ffff:192.0.2.0/120");
        assert_eq!(value["summary"]["original"], 3);
        assert_eq!(value["summary"]["merged"], 2);
    }

    #[test]
    fn test_write_json_missing_family() {
        let groups = group_by_family(vec![NetworkBlock::parse("::1").unwrap()]);
        let mut buf = Vec::new();
        write_json(
            &mut buf,
            &groups,
            RenderOptions::default(),
            MergeSummary::new(1, 1),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ipv4"], serde_json::json!([]));
        assert_eq!(value["ipv6"][0], "::1/128");
    }
}
