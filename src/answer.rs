//! Answer payloads handed to the engine by the questionnaire collaborator.
//!
//! Raw answers stay strings all the way through: the engine normalizes them
//! itself (see `score::normalize`) and retains them verbatim in the result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::Category;

/// Per-category mapping of symptom code to the raw scale-value string
/// exactly as submitted (decimal comma included).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMatrix {
    by_category: BTreeMap<Category, BTreeMap<String, String>>,
}

impl AnswerMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one answer. Re-answering the same code overwrites.
    pub fn insert(
        &mut self,
        category: Category,
        code: impl Into<String>,
        raw: impl Into<String>,
    ) {
        self.by_category
            .entry(category)
            .or_default()
            .insert(code.into(), raw.into());
    }

    /// Answers for one category as `(code, raw)` pairs; empty if the
    /// category was never answered.
    pub fn category(&self, category: Category) -> impl Iterator<Item = (&str, &str)> {
        self.by_category
            .get(&category)
            .into_iter()
            .flatten()
            .map(|(code, raw)| (code.as_str(), raw.as_str()))
    }

    /// True when no category holds any answer at all.
    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(BTreeMap::is_empty)
    }

    pub fn answer_count(&self) -> usize {
        self.by_category.values().map(BTreeMap::len).sum()
    }
}

/// The fixed five-point response scale offered to respondents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleValue {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl ScaleValue {
    pub const ALL: [ScaleValue; 5] = [
        ScaleValue::Never,
        ScaleValue::Rarely,
        ScaleValue::Sometimes,
        ScaleValue::Often,
        ScaleValue::Always,
    ];

    /// Numeric certainty the option stands for.
    pub fn value(&self) -> f64 {
        match self {
            ScaleValue::Never => 0.0,
            ScaleValue::Rarely => 0.25,
            ScaleValue::Sometimes => 0.5,
            ScaleValue::Often => 0.75,
            ScaleValue::Always => 1.0,
        }
    }

    /// Raw string form as submitted by the questionnaire UI (decimal comma).
    pub fn raw(&self) -> &'static str {
        match self {
            ScaleValue::Never => "0,0",
            ScaleValue::Rarely => "0,25",
            ScaleValue::Sometimes => "0,5",
            ScaleValue::Often => "0,75",
            ScaleValue::Always => "1,0",
        }
    }

    /// Label shown next to the option.
    pub fn label(&self) -> &'static str {
        match self {
            ScaleValue::Never => "Tidak Pernah",
            ScaleValue::Rarely => "Jarang",
            ScaleValue::Sometimes => "Kadang-kadang",
            ScaleValue::Often => "Sering",
            ScaleValue::Always => "Selalu",
        }
    }
}
