//! Content fingerprints for render memoization.

use sheaf_report::Section;
use std::hash::{Hash, Hasher};

/// Bumped whenever renderer output changes for identical input, so stale
/// cache entries from an older renderer never survive an upgrade.
pub const RENDERER_VERSION: u32 = 1;

/// Stable fingerprint of a normalized section plus the renderer version.
/// Two sections with equal content always fingerprint identically within a
/// process, which is all the render cache needs.
pub fn section_fingerprint(section: &Section) -> u64 {
    let mut hasher = std::hash::DefaultHasher::new();
    RENDERER_VERSION.hash(&mut hasher);
    section.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheaf_report::{PieChartSection, PieValue, Section};

    fn pie(raws: &[f64]) -> Section {
        Section::PieChart(PieChartSection {
            header: "h".into(),
            values: raws
                .iter()
                .map(|&raw| PieValue { title: "t".into(), raw: Some(raw), color: None })
                .collect(),
        })
    }

    #[test]
    fn equal_content_equal_fingerprint() {
        assert_eq!(section_fingerprint(&pie(&[1.0, 2.0])), section_fingerprint(&pie(&[1.0, 2.0])));
    }

    #[test]
    fn content_changes_move_the_fingerprint() {
        assert_ne!(section_fingerprint(&pie(&[1.0, 2.0])), section_fingerprint(&pie(&[1.0, 3.0])));
    }
}
