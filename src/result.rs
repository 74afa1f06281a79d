//! Output values of one scoring invocation.
//!
//! Field and variant names on the wire match what the persistence backend
//! stores (`dominant_category`, `overall_risk`, `raw_answers`, risk labels
//! "Ringan"/"Sedang"/"Tinggi"), so a result can be posted as-is.

use serde::{Deserialize, Serialize};

use crate::answer::AnswerMatrix;
use crate::category::Category;
use crate::recommend::Recommendation;

/// Ordinal risk band derived from a CF value via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Ringan")]
    Low,
    #[serde(rename = "Sedang")]
    Medium,
    #[serde(rename = "Tinggi")]
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Ringan",
            RiskLevel::Medium => "Sedang",
            RiskLevel::High => "Tinggi",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per screening domain, addressable by `Category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerCategory<T> {
    pub sleep_and_physical: T,
    pub emotional: T,
    pub motivation: T,
    pub anxiety: T,
    pub self_confidence: T,
}

impl<T> PerCategory<T> {
    /// Build by evaluating `f` once per category, in the fixed order.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            sleep_and_physical: f(Category::SleepAndPhysical),
            emotional: f(Category::Emotional),
            motivation: f(Category::Motivation),
            anxiety: f(Category::Anxiety),
            self_confidence: f(Category::SelfConfidence),
        }
    }

    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::SleepAndPhysical => &self.sleep_and_physical,
            Category::Emotional => &self.emotional,
            Category::Motivation => &self.motivation,
            Category::Anxiety => &self.anxiety,
            Category::SelfConfidence => &self.self_confidence,
        }
    }

    /// Iterate `(category, value)` in the fixed enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerCategory<U> {
        PerCategory::from_fn(|c| f(self.get(c)))
    }
}

/// Serialize `Category` by its human label ("Kecemasan"), the form the
/// backend stores for `dominant_category`.
mod category_label {
    use super::Category;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(c: &Category, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(c.label())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Category, D::Error> {
        let raw = String::deserialize(d)?;
        Category::from_label(&raw)
            .ok_or_else(|| de::Error::custom(format!("unknown category label: {raw}")))
    }
}

/// Immutable outcome of one completed questionnaire submission.
///
/// Constructed fresh per `score::diagnose` call; the engine never retains
/// or mutates one. Persistence (id, user, date) is the store's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Per-category risk band.
    pub categories: PerCategory<RiskLevel>,
    /// Per-category combined CF in [0,1] (UIs render these as percentages).
    #[serde(rename = "cfScores")]
    pub cf_scores: PerCategory<f64>,
    /// Category with the strictly greatest CF; earlier category wins ties.
    #[serde(with = "category_label")]
    pub dominant_category: Category,
    pub overall_risk: RiskLevel,
    /// Curated matches for the dominant category, or the built-in fallback tips.
    pub recommendations: Vec<Recommendation>,
    /// The submitted answers, retained verbatim.
    pub raw_answers: AnswerMatrix,
}
