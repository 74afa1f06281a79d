//! # Scoring pipeline
//! Pure, testable logic that maps `(catalog, answers, curated)` → `DiagnosisResult`.
//! No I/O, no ambient state, suitable for unit tests and concurrent use.
//!
//! Stages: normalize raw answers → per-symptom CF → per-category CF fold →
//! risk classification → dominant-category selection → overall aggregation →
//! recommendation selection. Every stage is fail-soft: malformed input
//! degrades to zero evidence instead of erroring.

pub mod combine;
pub mod normalize;
pub mod risk;

use tracing::debug;

use crate::answer::AnswerMatrix;
use crate::catalog::SymptomCatalog;
use crate::category::Category;
use crate::recommend::{select_recommendations, CuratedRecommendation};
use crate::result::{DiagnosisResult, PerCategory};

// Re-export convenient helpers.
pub use combine::{combine, combine_all};
pub use normalize::{clamp01, parse_scale_value};
pub use risk::{classify, overall_risk, RiskCounts};

/// CF of one answered symptom: self-reported certainty scaled by how
/// diagnostically informative the item is.
pub fn symptom_cf(user_cf: f64, expert_weight: f64) -> f64 {
    clamp01(clamp01(user_cf) * clamp01(expert_weight))
}

/// Combined CF for one category's answers. Unanswered or unknown codes
/// contribute nothing; an empty category scores 0.
pub fn category_cf<'a>(
    catalog: &SymptomCatalog,
    answers: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> f64 {
    combine_all(answers.into_iter().map(|(code, raw)| {
        let weight = catalog.weight_of(code);
        if weight == 0.0 && !catalog.contains(code) {
            // Observable but fail-soft: the submission may be malformed.
            debug!(target: "score", code, "answer for unknown symptom code, weight 0");
        }
        symptom_cf(parse_scale_value(raw), weight)
    }))
}

/// Category with the strictly greatest CF. The scan follows the fixed
/// enumeration order with a strict `>`, so the earlier category wins ties.
pub fn dominant_category(scores: &PerCategory<f64>) -> Category {
    let mut max = -1.0;
    let mut dominant = Category::SleepAndPhysical;
    for (category, cf) in scores.iter() {
        if *cf > max {
            max = *cf;
            dominant = category;
        }
    }
    dominant
}

/// Score one completed questionnaire submission.
///
/// Pure function of its inputs: reads the catalog snapshot and the answer
/// matrix, returns a fresh immutable result. Safe to call concurrently.
pub fn diagnose(
    catalog: &SymptomCatalog,
    answers: &AnswerMatrix,
    curated: &[CuratedRecommendation],
) -> DiagnosisResult {
    if answers.is_empty() {
        // Indistinguishable from a genuinely low-risk respondent downstream;
        // mark it here so it is at least observable.
        debug!(target: "score", "diagnosing an empty answer matrix");
    }

    // 1) Per-category combined CF
    let cf_scores = PerCategory::from_fn(|c| category_cf(catalog, answers.category(c)));

    // 2) Risk band per category
    let categories = cf_scores.map(|cf| classify(*cf));

    // 3) Dominant category (first wins ties) and overall aggregation
    let dominant = dominant_category(&cf_scores);
    let counts = RiskCounts::tally(categories.iter().map(|(_, level)| *level));
    let overall = overall_risk(&counts);

    // 4) Recommendations for the dominant category
    let recommendations = select_recommendations(curated, dominant);

    // Never log raw answers; aggregates only.
    debug!(
        target: "score",
        dominant = %dominant,
        overall = %overall,
        high = counts.high,
        medium = counts.medium,
        low = counts.low,
        answers = answers.answer_count(),
        "diagnosis computed"
    );

    DiagnosisResult {
        categories,
        cf_scores,
        dominant_category: dominant,
        overall_risk: overall,
        recommendations,
        raw_answers: answers.clone(),
    }
}
