//! CF → risk band classification and the overall aggregation policy.

use crate::result::RiskLevel;

/// Threshold between Low and Medium (half-open: `cf < 0.34` is Low).
pub const MEDIUM_THRESHOLD: f64 = 0.34;
/// Threshold between Medium and High (`cf >= 0.67` is High).
pub const HIGH_THRESHOLD: f64 = 0.67;

/// Map one category CF to its risk band.
pub fn classify(cf: f64) -> RiskLevel {
    if cf < MEDIUM_THRESHOLD {
        RiskLevel::Low
    } else if cf < HIGH_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// How many of the five categories landed in each band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskCounts {
    pub fn tally(levels: impl IntoIterator<Item = RiskLevel>) -> Self {
        let mut counts = RiskCounts::default();
        for level in levels {
            match level {
                RiskLevel::Low => counts.low += 1,
                RiskLevel::Medium => counts.medium += 1,
                RiskLevel::High => counts.high += 1,
            }
        }
        counts
    }
}

/// Aggregate the per-category bands into one overall band.
///
/// Priorities: two or more High categories dominate; a single High or a
/// Medium majority (3+) still warrants Medium; anything else is Low.
pub fn overall_risk(counts: &RiskCounts) -> RiskLevel {
    if counts.high >= 2 {
        RiskLevel::High
    } else if counts.high >= 1 || counts.medium >= 3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
