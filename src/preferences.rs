//! The algorithm the user prefers for each case.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Preferred algorithm per case id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgPreferences(HashMap<String, String>);

impl AlgPreferences {
    /// No preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// The preferred algorithm for `case_id`, or `fallback` if none is set or it is blank.
    pub fn primary<'a>(&'a self, case_id: &str, fallback: &'a str) -> &'a str {
        match self.0.get(case_id).map(|alg| alg.trim()) {
            Some(alg) if !alg.is_empty() => alg,
            _ => fallback,
        }
    }

    /// Set the preferred algorithm for `case_id`. Blank algorithms are ignored.
    pub fn set_primary(&mut self, case_id: impl Into<String>, alg: &str) {
        let alg = alg.trim();
        if alg.is_empty() {
            return;
        }
        self.0.insert(case_id.into(), alg.to_owned());
    }
}
