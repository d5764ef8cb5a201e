//! How well the user knows each case. Less familiar cases get picked more often in weighted
//! practice.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cases::PllCase;
use crate::error::TryFromIntToEnumError;

/// Self assessed familiarity with a case. Stored as `1`, `2` or `3`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ProficiencyLevel {
    /// Still needs work. Every case starts here.
    #[default]
    Unfamiliar = 1,
    /// Known but slow.
    Familiar = 2,
    /// Fluent.
    Fluent = 3,
}

impl ProficiencyLevel {
    /// A label for showing the level to a user.
    pub fn label(self) -> &'static str {
        match self {
            ProficiencyLevel::Unfamiliar => "Unfamiliar",
            ProficiencyLevel::Familiar => "Familiar",
            ProficiencyLevel::Fluent => "Fluent",
        }
    }

    /// Relative chance of being picked in weighted practice.
    pub fn weight(self) -> u32 {
        match self {
            ProficiencyLevel::Unfamiliar => 3,
            ProficiencyLevel::Familiar => 2,
            ProficiencyLevel::Fluent => 1,
        }
    }
}

impl TryFrom<u8> for ProficiencyLevel {
    type Error = TryFromIntToEnumError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ProficiencyLevel::Unfamiliar),
            2 => Ok(ProficiencyLevel::Familiar),
            3 => Ok(ProficiencyLevel::Fluent),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}

impl From<ProficiencyLevel> for u8 {
    fn from(level: ProficiencyLevel) -> u8 {
        level as u8
    }
}

/// Proficiency per case id. Cases without an entry are [`ProficiencyLevel::Unfamiliar`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProficiencyMap(HashMap<String, ProficiencyLevel>);

impl ProficiencyMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The level recorded for `case_id`.
    pub fn level(&self, case_id: &str) -> ProficiencyLevel {
        self.0.get(case_id).copied().unwrap_or_default()
    }

    /// Record a level for `case_id`.
    pub fn set_level(&mut self, case_id: impl Into<String>, level: ProficiencyLevel) {
        self.0.insert(case_id.into(), level);
    }

    /// Forget every recorded level.
    pub fn reset(&mut self) {
        self.0.clear();
    }
}

/// How many cases are at each level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ProficiencySummary {
    pub unfamiliar: usize,
    pub familiar: usize,
    pub fluent: usize,
}

/// Count the cases at each level.
pub fn summarize<'a>(
    cases: impl IntoIterator<Item = &'a PllCase>,
    map: &ProficiencyMap,
) -> ProficiencySummary {
    let mut summary = ProficiencySummary::default();
    for case in cases {
        match map.level(case.id) {
            ProficiencyLevel::Unfamiliar => summary.unfamiliar += 1,
            ProficiencyLevel::Familiar => summary.familiar += 1,
            ProficiencyLevel::Fluent => summary.fluent += 1,
        }
    }
    summary
}
