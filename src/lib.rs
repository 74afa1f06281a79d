// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod answer;
pub mod catalog;
pub mod category;
pub mod recommend;
pub mod result;
pub mod store;

// Scoring pipeline (normalize, combine, risk, diagnose)
pub mod score;

// ---- Re-exports for stable public API ----
pub use crate::answer::{AnswerMatrix, ScaleValue};
pub use crate::catalog::{load_catalog_file, HotReloadCatalog, Symptom, SymptomCatalog};
pub use crate::category::Category;
pub use crate::recommend::{CuratedRecommendation, Recommendation, RecommendationKind};
pub use crate::result::{DiagnosisResult, PerCategory, RiskLevel};
pub use crate::score::diagnose;
pub use crate::store::{DiagnosisStore, MemoryStore, StoredDiagnosis};
