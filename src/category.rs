//! The five fixed screening domains of the instrument.
//!
//! Order matters: `ALL` is the canonical enumeration order, and the
//! dominant-category scan resolves ties in favour of the earlier entry.

use serde::{Deserialize, Serialize};

/// One of the five psychological domains screened by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    SleepAndPhysical,
    Emotional,
    Motivation,
    Anxiety,
    SelfConfidence,
}

impl Category {
    /// Canonical enumeration order. Tie-breaks and per-category output
    /// iteration both follow this order.
    pub const ALL: [Category; 5] = [
        Category::SleepAndPhysical,
        Category::Emotional,
        Category::Motivation,
        Category::Anxiety,
        Category::SelfConfidence,
    ];

    /// Human-readable label as shown to respondents and stored with results.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SleepAndPhysical => "Gangguan Tidur & Keluhan Fisik",
            Category::Emotional => "Gangguan Emosi & Afektif",
            Category::Motivation => "Penurunan Motivasi & Aktivitas",
            Category::Anxiety => "Kecemasan",
            Category::SelfConfidence => "Kepercayaan Diri & Penyesuaian Sosial",
        }
    }

    /// Inverse of `label()`; exact match only.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
