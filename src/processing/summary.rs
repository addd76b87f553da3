//! Block counts before and after merging.

use serde::Serialize;

/// How much a merge run reduced the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    pub original: usize,
    pub merged: usize,
}

impl MergeSummary {
    pub fn new(original: usize, merged: usize) -> MergeSummary {
        MergeSummary { original, merged }
    }

    /// Number of blocks removed.
    pub fn decrease(&self) -> usize {
        self.original.saturating_sub(self.merged)
    }

    /// Merged count as a percentage of the original, 0 with no input.
    pub fn merged_percent(&self) -> f64 {
        percent(self.merged, self.original)
    }

    /// Decrease as a percentage of the original, 0 with no input.
    pub fn decrease_percent(&self) -> f64 {
        percent(self.decrease(), self.original)
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let value = part as f64 / whole as f64 * 100.0;
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let s = MergeSummary::new(8, 3);
        assert_eq!(s.decrease(), 5);
        assert_eq!(s.merged_percent(), 37.5);
        assert_eq!(s.decrease_percent(), 62.5);
    }

    #[test]
    fn test_summary_rounding() {
        let s = MergeSummary::new(3, 1);
        assert_eq!(s.merged_percent(), 33.33);
        assert_eq!(s.decrease_percent(), 66.67);
    }

    #[test]
    fn test_summary_empty() {
        let s = MergeSummary::new(0, 0);
        assert_eq!(s.decrease(), 0);
        assert_eq!(s.merged_percent(), 0.0);
    }
}
