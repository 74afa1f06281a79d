//! Symptom catalog: expert-weighted questionnaire items.
//!
//! The catalog is admin-managed and read-only to the engine. Weight lookup
//! is fail-soft: an unknown code contributes no evidence (weight 0), and
//! stored weights are clamped into [0,1] on every read.
//!
//! `HotReloadCatalog` wraps a JSON file (`config/symptoms.json` by default);
//! on each `current()` call it checks the file's modified time and reloads
//! if changed.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::SystemTime,
};
use tracing::info;

use crate::category::Category;
use crate::score::normalize::clamp01;

/// One questionnaire item with its expert-assigned diagnostic weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub code: String,
    pub category: Category,
    /// Expert weight in [0,1]; clamped on lookup regardless of stored value.
    pub weight: f64,
    /// Question text shown to respondents. Ignored by scoring.
    #[serde(default)]
    pub text: String,
}

/// Ordered, read-only collection of symptoms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
}

impl SymptomCatalog {
    pub fn new(symptoms: Vec<Symptom>) -> Self {
        Self { symptoms }
    }

    /// Expert weight for a code, clamped to [0,1].
    ///
    /// Codes are compared as trimmed strings so numeric-looking codes match
    /// regardless of how the client stringified them. A missing code yields
    /// 0: the symptom contributes no evidence rather than erroring.
    pub fn weight_of(&self, code: &str) -> f64 {
        let code = code.trim();
        self.symptoms
            .iter()
            .find(|s| s.code.trim() == code)
            .map(|s| clamp01(s.weight))
            .unwrap_or(0.0)
    }

    pub fn contains(&self, code: &str) -> bool {
        let code = code.trim();
        self.symptoms.iter().any(|s| s.code.trim() == code)
    }

    /// Symptoms belonging to one category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter().filter(move |s| s.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

/// Load a catalog directly (no caching). Public for tests/tools.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<SymptomCatalog> {
    let bytes = fs::read(path).with_context(|| format!("read catalog {}", path.display()))?;
    let catalog: SymptomCatalog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse catalog {}", path.display()))?;
    Ok(catalog)
}

/// Hot-reload wrapper: reloads when the catalog file mtime changes.
#[derive(Debug)]
pub struct HotReloadCatalog {
    path: PathBuf,
    inner: RwLock<State>,
}

#[derive(Debug)]
struct State {
    catalog: SymptomCatalog,
    last_modified: Option<SystemTime>,
}

impl HotReloadCatalog {
    /// Create with a path (defaults to "config/symptoms.json" if `None`).
    pub fn new(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config/symptoms.json"));
        Self {
            path,
            inner: RwLock::new(State {
                catalog: SymptomCatalog::default(),
                last_modified: None,
            }),
        }
    }

    /// Get the latest catalog snapshot, reloading if the file changed.
    pub fn current(&self) -> SymptomCatalog {
        // Fast path: compare mtime under the read lock only.
        let needs_reload = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(mtime) => {
                let guard = self.inner.read().unwrap();
                guard.last_modified != Some(mtime)
            }
            // If the file isn't there, we keep the last snapshot; no reload.
            Err(_) => false,
        };

        if !needs_reload {
            return self.inner.read().unwrap().catalog.clone();
        }

        // Slow path: reload with write lock.
        let mut guard = self.inner.write().unwrap();
        // Double-check in case of races.
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Ok(mtime) = meta.modified() {
                if guard.last_modified != Some(mtime) {
                    // Malformed file: keep serving the previous snapshot.
                    if let Ok(catalog) = load_catalog_file(&self.path) {
                        info!(
                            target: "catalog",
                            symptoms = catalog.len(),
                            path = %self.path.display(),
                            "symptom catalog reloaded"
                        );
                        guard.catalog = catalog;
                        guard.last_modified = Some(mtime);
                    }
                }
            }
        }
        guard.catalog.clone()
    }
}
