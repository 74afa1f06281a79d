//! Recommendation selection for the dominant category.
//!
//! Two tiers: curated entries from the admin-managed content collection
//! (matched by normalized category label, capped at [`MAX_CURATED`]),
//! falling back to a fixed per-category tip list embedded at build time.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category::Category;

/// Upper bound on curated matches returned per diagnosis.
pub const MAX_CURATED: usize = 6;

static FALLBACK_TIPS: Lazy<HashMap<Category, Vec<String>>> = Lazy::new(|| {
    let raw = include_str!("../fallback_tips.json");
    serde_json::from_str::<HashMap<Category, Vec<String>>>(raw).expect("valid fallback tip table")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Article,
    Video,
    /// Built-in fallback tip (no external content behind it).
    Tip,
}

/// Admin-curated content entry, as stored by the content collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedRecommendation {
    /// Category label as entered by the admin; matched leniently.
    pub category: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One recommendation in a `DiagnosisResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Lowercase with internal whitespace collapsed to single spaces, so admin
/// typos in spacing/casing still match the canonical label.
pub fn normalize_label(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Lenient link handling: trim, drop empties, default the scheme to https.
pub fn safe_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Pick recommendations for the dominant category.
///
/// Curated entries win when any match; otherwise the fixed 4-tip fallback
/// list for that category.
pub fn select_recommendations(
    curated: &[CuratedRecommendation],
    dominant: Category,
) -> Vec<Recommendation> {
    let wanted = normalize_label(dominant.label());
    let matched: Vec<Recommendation> = curated
        .iter()
        .filter(|r| normalize_label(&r.category) == wanted)
        .take(MAX_CURATED)
        .map(|r| Recommendation {
            kind: r.kind,
            title: r.title.clone(),
            link: safe_url(&r.link),
        })
        .collect();

    if !matched.is_empty() {
        return matched;
    }

    FALLBACK_TIPS
        .get(&dominant)
        .map(|tips| {
            tips.iter()
                .map(|t| Recommendation {
                    kind: RecommendationKind::Tip,
                    title: t.clone(),
                    link: None,
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curated(category: &str, title: &str) -> CuratedRecommendation {
        CuratedRecommendation {
            category: category.to_string(),
            kind: RecommendationKind::Article,
            title: title.to_string(),
            link: "example.com/a".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn label_matching_is_case_and_whitespace_insensitive() {
        let entries = vec![curated("  kecemasan ", "Mengelola rasa cemas")];
        let picked = select_recommendations(&entries, Category::Anxiety);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].title, "Mengelola rasa cemas");
        assert_eq!(picked[0].link.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn internal_whitespace_is_collapsed() {
        let entries = vec![curated("Gangguan  Tidur   & Keluhan Fisik", "Tidur nyenyak")];
        let picked = select_recommendations(&entries, Category::SleepAndPhysical);
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn curated_matches_are_capped() {
        let entries: Vec<_> = (0..10).map(|i| curated("Kecemasan", &format!("A{i}"))).collect();
        let picked = select_recommendations(&entries, Category::Anxiety);
        assert_eq!(picked.len(), MAX_CURATED);
        // Order preserved: first entries win.
        assert_eq!(picked[0].title, "A0");
    }

    #[test]
    fn falls_back_to_fixed_tips_when_nothing_matches() {
        let entries = vec![curated("Kecemasan", "A")];
        let picked = select_recommendations(&entries, Category::Motivation);
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|r| r.kind == RecommendationKind::Tip));
        assert!(picked.iter().all(|r| r.link.is_none()));
    }

    #[test]
    fn every_category_has_four_fallback_tips() {
        for c in Category::ALL {
            let picked = select_recommendations(&[], c);
            assert_eq!(picked.len(), 4, "category {c:?}");
        }
    }

    #[test]
    fn safe_url_handles_schemes_and_empties() {
        assert_eq!(safe_url(""), None);
        assert_eq!(safe_url("   "), None);
        assert_eq!(safe_url("https://a.example"), Some("https://a.example".into()));
        assert_eq!(safe_url("HTTP://a.example"), Some("HTTP://a.example".into()));
        assert_eq!(safe_url("a.example/x"), Some("https://a.example/x".into()));
    }
}
