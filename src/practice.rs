//! Choosing which case to practise next.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cases::{PllCase, PllGroup};
use crate::proficiency::ProficiencyMap;

/// How the next case is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    /// Every candidate is equally likely.
    #[default]
    Balanced,
    /// Candidates are weighted by [`ProficiencyLevel::weight`](crate::proficiency::ProficiencyLevel::weight).
    Weighted,
}

/// Which cases take part in practice, and how they are picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticeConfig {
    /// Groups to draw from.
    pub enabled_groups: Vec<PllGroup>,
    /// Case ids to leave out even if their group is enabled.
    pub excluded_case_ids: Vec<String>,
    /// How to pick.
    pub mode: PracticeMode,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        PracticeConfig {
            enabled_groups: PllGroup::ALL.to_vec(),
            excluded_case_ids: Vec::new(),
            mode: PracticeMode::default(),
        }
    }
}

/// The cases `config` allows, in library order.
pub fn filter_cases<'a>(cases: &'a [PllCase], config: &PracticeConfig) -> Vec<&'a PllCase> {
    cases
        .iter()
        .filter(|c| config.enabled_groups.contains(&c.group))
        .filter(|c| !config.excluded_case_ids.iter().any(|id| id == c.id))
        .collect()
}

/// Pick the next case to practise from `candidates`. Returns `None` if there are none.
pub fn choose_case<'a, R>(
    candidates: &[&'a PllCase],
    proficiency: &ProficiencyMap,
    mode: PracticeMode,
    rng: &mut R,
) -> Option<&'a PllCase>
where
    R: Rng,
{
    if candidates.is_empty() {
        return None;
    }

    let chosen = match mode {
        PracticeMode::Balanced => candidates[rng.gen_range(0..candidates.len())],
        PracticeMode::Weighted => {
            let weights: Vec<u32> = candidates
                .iter()
                .map(|c| proficiency.level(c.id).weight())
                .collect();
            let total: u32 = weights.iter().sum();
            let r = rng.gen_range(0..total);

            let mut acc = 0;
            let mut chosen = candidates[candidates.len() - 1];
            for (case, weight) in candidates.iter().zip(weights) {
                acc += weight;
                if r < acc {
                    chosen = *case;
                    break;
                }
            }
            chosen
        }
    };

    log::trace!("chose case {} ({:?})", chosen.id, mode);
    Some(chosen)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::cases::{find, pll_cases};
    use crate::proficiency::ProficiencyLevel;

    #[test]
    fn default_config_allows_everything() {
        assert_eq!(filter_cases(pll_cases(), &PracticeConfig::default()).len(), 21);
    }

    #[test]
    fn filters_groups_and_exclusions() {
        let config = PracticeConfig {
            enabled_groups: vec![PllGroup::Epll],
            excluded_case_ids: vec!["H".to_owned()],
            mode: PracticeMode::Balanced,
        };
        let ids: Vec<_> = filter_cases(pll_cases(), &config)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, ["Ua", "Ub", "Z"]);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config: PracticeConfig =
            serde_json::from_str(r#"{"enabledGroups": ["CPLL"], "mode": "weighted"}"#).unwrap();
        assert_eq!(config.enabled_groups, [PllGroup::Cpll]);
        assert!(config.excluded_case_ids.is_empty());
        assert_eq!(config.mode, PracticeMode::Weighted);
    }

    #[test]
    fn no_candidates() {
        let mut rng = SmallRng::seed_from_u64(0);
        let map = ProficiencyMap::new();
        assert!(choose_case(&[], &map, PracticeMode::Balanced, &mut rng).is_none());
        assert!(choose_case(&[], &map, PracticeMode::Weighted, &mut rng).is_none());
    }

    #[test]
    fn single_candidate_always_chosen() {
        let mut rng = SmallRng::seed_from_u64(1);
        let map = ProficiencyMap::new();
        let t = find("T").unwrap();
        for mode in [PracticeMode::Balanced, PracticeMode::Weighted] {
            for _ in 0..20 {
                assert_eq!(choose_case(&[t], &map, mode, &mut rng), Some(t));
            }
        }
    }

    #[test]
    fn weighted_prefers_unfamiliar_cases() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut map = ProficiencyMap::new();
        map.set_level("T", ProficiencyLevel::Fluent);
        let candidates = [find("T").unwrap(), find("H").unwrap()];

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..4000 {
            let case = choose_case(&candidates, &map, PracticeMode::Weighted, &mut rng).unwrap();
            *counts.entry(case.id).or_default() += 1;
        }
        // Expected 1000 vs 3000.
        assert!(counts["T"] > 700 && counts["T"] < 1300, "{counts:?}");
        assert!(counts["H"] > 2700, "{counts:?}");
    }

    #[test]
    fn balanced_reaches_every_candidate() {
        let mut rng = SmallRng::seed_from_u64(3);
        let map = ProficiencyMap::new();
        let candidates = filter_cases(pll_cases(), &PracticeConfig::default());
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            let case = choose_case(&candidates, &map, PracticeMode::Balanced, &mut rng).unwrap();
            seen.insert(case.id);
        }
        assert_eq!(seen.len(), candidates.len());
    }
}
