//! The library of PLL cases. Each case's setup algorithm is the inverse of its first default
//! algorithm, computed once the first time the library is used.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::alg::{invert, CaseState};

/// Which kind of pieces a PLL case permutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PllGroup {
    /// Edges only
    #[serde(rename = "EPLL")]
    Epll,
    /// Corners only
    #[serde(rename = "CPLL")]
    Cpll,
    /// Corners and edges
    Mixed,
}

impl PllGroup {
    /// Every group, in display order.
    pub const ALL: [PllGroup; 3] = [PllGroup::Epll, PllGroup::Cpll, PllGroup::Mixed];

    /// A label for showing the group to a user.
    pub fn label(self) -> &'static str {
        match self {
            PllGroup::Epll => "EPLL (edges only)",
            PllGroup::Cpll => "CPLL (corners only)",
            PllGroup::Mixed => "Mixed (corners + edges)",
        }
    }
}

/// The step of the solve a case library belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseType {
    /// Permutation of the last layer
    Pll,
    /// Orientation of the last layer
    Oll,
    /// First two layers
    F2l,
}

/// A single PLL case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PllCase {
    /// Short conventional name, e.g. `"Aa"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Group the case belongs to.
    pub group: PllGroup,
    /// Recommended algorithms. Never empty; the first one is the canonical solution.
    pub default_algs: &'static [&'static str],
    /// Alternative algorithms.
    pub alt_algs: &'static [&'static str],
    /// Free form tags for browsing.
    pub tags: &'static [&'static str],
    /// How to recognise the case.
    pub recognition_hint: &'static str,
    /// Takes a solved cube to this case: the inverse of `default_algs[0]`.
    pub setup_alg: String,
}

impl PllCase {
    /// The first default algorithm.
    pub fn canonical_alg(&self) -> &'static str {
        self.default_algs[0]
    }
}

impl CaseState for PllCase {
    fn setup_alg(&self) -> &str {
        &self.setup_alg
    }
}

struct CaseTemplate {
    id: &'static str,
    name: &'static str,
    group: PllGroup,
    default_algs: &'static [&'static str],
    alt_algs: &'static [&'static str],
    tags: &'static [&'static str],
    recognition_hint: &'static str,
}

const PLL_TEMPLATES: &[CaseTemplate] = &[
    CaseTemplate {
        id: "Aa",
        name: "Aa corner cycle",
        group: PllGroup::Cpll,
        default_algs: &["x L2 D2 L' U' L D2 L' U L'"],
        alt_algs: &["x' R2 D2 R' U' R D2 R' U R'"],
        tags: &["adjacent corners", "A shape"],
        recognition_hint: "One pair of matching adjacent corners, the other three cycle clockwise.",
    },
    CaseTemplate {
        id: "Ab",
        name: "Ab corner cycle",
        group: PllGroup::Cpll,
        default_algs: &["x' L2 D2 L U L' D2 L U' L"],
        alt_algs: &["x R2 D2 R U R' D2 R U' R"],
        tags: &["adjacent corners", "A shape, reversed"],
        recognition_hint: "Like Aa, but the corners cycle anticlockwise.",
    },
    CaseTemplate {
        id: "E",
        name: "E corner swap",
        group: PllGroup::Cpll,
        default_algs: &["x' L' U L D' L' U' L D L' U' L D' L' U L D"],
        alt_algs: &[],
        tags: &["diagonal corners", "ring"],
        recognition_hint: "Every corner is out of place and there are no headlights; two diagonal swaps.",
    },
    CaseTemplate {
        id: "H",
        name: "H edge swap",
        group: PllGroup::Epll,
        default_algs: &["M2 U M2 U2 M2 U M2"],
        alt_algs: &[],
        tags: &["H shape", "opposite edges"],
        recognition_hint: "Opposite edges swap in pairs, forming a cross; corners are solved.",
    },
    CaseTemplate {
        id: "Ua",
        name: "Ua edge cycle",
        group: PllGroup::Epll,
        default_algs: &["M2 U M U2 M' U M2"],
        alt_algs: &[],
        tags: &["U shape", "three edges clockwise"],
        recognition_hint: "One solved side bar, the other three edges cycle clockwise.",
    },
    CaseTemplate {
        id: "Ub",
        name: "Ub edge cycle",
        group: PllGroup::Epll,
        default_algs: &["M2 U' M U2 M' U' M2"],
        alt_algs: &[],
        tags: &["U shape", "three edges anticlockwise"],
        recognition_hint: "One solved side bar, the other three edges cycle anticlockwise.",
    },
    CaseTemplate {
        id: "Z",
        name: "Z edge swap",
        group: PllGroup::Epll,
        default_algs: &["M' U M2 U M2 U M' U2 M2"],
        alt_algs: &[],
        tags: &["Z shape", "adjacent edges"],
        recognition_hint: "Two pairs of adjacent edges swap in a Z pattern.",
    },
    CaseTemplate {
        id: "F",
        name: "F permutation",
        group: PllGroup::Mixed,
        default_algs: &["R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R"],
        alt_algs: &[],
        tags: &["adjacent corners + edges", "F shape"],
        recognition_hint: "A block of adjacent corners on one side, a T-like pattern with moving edges on the other.",
    },
    CaseTemplate {
        id: "Ga",
        name: "Ga permutation",
        group: PllGroup::Mixed,
        default_algs: &["R2 U R' U R' U' R U' R2 U' D R' U R D'"],
        alt_algs: &[],
        tags: &["G shape", "block + edges"],
        recognition_hint: "Headlights plus a fake block; the block sits back left.",
    },
    CaseTemplate {
        id: "Gb",
        name: "Gb permutation",
        group: PllGroup::Mixed,
        default_algs: &["R' U' R U D' R2 U R' U R U' R U' R2 D"],
        alt_algs: &[],
        tags: &["G shape", "variant"],
        recognition_hint: "Like Ga with the fake block moved, the pattern turned clockwise.",
    },
    CaseTemplate {
        id: "Gc",
        name: "Gc permutation",
        group: PllGroup::Mixed,
        default_algs: &["R2 U' R U' R U R' U R2 U D' R U' R' D"],
        alt_algs: &[],
        tags: &["G shape", "variant"],
        recognition_hint: "A corner block with the fake block back right, hook and stripe.",
    },
    CaseTemplate {
        id: "Gd",
        name: "Gd permutation",
        group: PllGroup::Mixed,
        default_algs: &["R U R' U' D R2 U' R U' R' U R' U R2 D'"],
        alt_algs: &[],
        tags: &["G shape", "variant"],
        recognition_hint: "A corner block with the fake block front right, the mirror of Gc.",
    },
    CaseTemplate {
        id: "Ja",
        name: "Ja permutation",
        group: PllGroup::Mixed,
        default_algs: &["x R2 F R F' R U2 r' U r U2"],
        alt_algs: &[],
        tags: &["J shape", "block right"],
        recognition_hint: "A 2x1 corner-edge block in front, on the right.",
    },
    CaseTemplate {
        id: "Jb",
        name: "Jb permutation",
        group: PllGroup::Mixed,
        default_algs: &["R U R' F' R U R' U' R' F R2 U' R'"],
        alt_algs: &[],
        tags: &["J shape", "block left"],
        recognition_hint: "The mirror of Ja, the 2x1 block sits on the left.",
    },
    CaseTemplate {
        id: "Ra",
        name: "Ra permutation",
        group: PllGroup::Mixed,
        default_algs: &["R U' R' U' R U R D R' U' R D' R' U2 R'"],
        alt_algs: &[],
        tags: &["R shape", "block + three edges"],
        recognition_hint: "A 2x1 block in front with a U-like edge cycle on the other side.",
    },
    CaseTemplate {
        id: "Rb",
        name: "Rb permutation",
        group: PllGroup::Mixed,
        default_algs: &["R2 F R U R U' R' F' R U2 R' U2 R"],
        alt_algs: &[],
        tags: &["R shape", "mirror"],
        recognition_hint: "The mirror of Ra, the block sits on the left.",
    },
    CaseTemplate {
        id: "T",
        name: "T permutation",
        group: PllGroup::Mixed,
        default_algs: &["R U R' U' R' F R2 U' R' U' R U R' F'"],
        alt_algs: &[],
        tags: &["T shape", "classic"],
        recognition_hint: "Headlights on one side and a T shaped bar across the others.",
    },
    CaseTemplate {
        id: "Na",
        name: "Na permutation",
        group: PllGroup::Mixed,
        default_algs: &["R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'"],
        alt_algs: &[],
        tags: &["N shape", "diagonal swap"],
        recognition_hint: "Two opposite corner pairs with scrambled edges, looks busy.",
    },
    CaseTemplate {
        id: "Nb",
        name: "Nb permutation",
        group: PllGroup::Mixed,
        default_algs: &["R' U R U' R' F' U' F R U R' F R' F' R U' R"],
        alt_algs: &[],
        tags: &["N shape", "mirror"],
        recognition_hint: "The mirror of Na.",
    },
    CaseTemplate {
        id: "V",
        name: "V permutation",
        group: PllGroup::Mixed,
        default_algs: &["R' U R' U' y R' F' R2 U' R' U R' F R F"],
        alt_algs: &[],
        tags: &["V shape", "block front right"],
        recognition_hint: "A front right corner block with a V shaped arrow opposite.",
    },
    CaseTemplate {
        id: "Y",
        name: "Y permutation",
        group: PllGroup::Mixed,
        default_algs: &["F R U' R' U' R U R' F' R U R' U' R' F R F'"],
        alt_algs: &[],
        tags: &["Y shape", "diagonal corners + edges"],
        recognition_hint: "Diagonal corners swapped along with two edges, a Y when viewed from the side.",
    },
];

static PLL_CASES: LazyLock<Vec<PllCase>> = LazyLock::new(|| {
    let cases: Vec<PllCase> = PLL_TEMPLATES.iter().map(build_case).collect();
    log::debug!("built PLL case library with {} cases", cases.len());
    cases
});

fn build_case(template: &CaseTemplate) -> PllCase {
    // The templates are fixed data, covered by the library tests.
    let setup_alg = invert(template.default_algs[0]).unwrap_or_else(|err| {
        panic!("PLL case {} has an unparseable default algorithm: {err}", template.id)
    });

    PllCase {
        id: template.id,
        name: template.name,
        group: template.group,
        default_algs: template.default_algs,
        alt_algs: template.alt_algs,
        tags: template.tags,
        recognition_hint: template.recognition_hint,
        setup_alg,
    }
}

/// All PLL cases.
pub fn pll_cases() -> &'static [PllCase] {
    &PLL_CASES
}

/// Look up a PLL case by id.
pub fn find(id: &str) -> Option<&'static PllCase> {
    pll_cases().iter().find(|c| c.id == id)
}

/// The cases for a given step. Only PLL has any so far.
pub fn cases_for(ty: CaseType) -> &'static [PllCase] {
    match ty {
        CaseType::Pll => pll_cases(),
        CaseType::Oll | CaseType::F2l => &[],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::alg::apply_to_case;

    #[test]
    fn twenty_one_unique_cases() {
        let ids: HashSet<_> = pll_cases().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 21);
        assert_eq!(pll_cases().len(), 21);
    }

    #[test]
    fn canonical_algs_solve_their_case() {
        for case in pll_cases() {
            let result = apply_to_case(case.canonical_alg(), case).unwrap();
            assert!(result.identity.is_identity, "{} does not solve itself", case.id);
        }
    }

    #[test]
    fn alt_algs_parse() {
        for case in pll_cases() {
            assert!(!case.default_algs.is_empty());
            for alg in case.default_algs.iter().chain(case.alt_algs) {
                crate::alg::parse(alg).unwrap();
            }
        }
    }

    #[test]
    fn setup_is_inverse() {
        let t = find("T").unwrap();
        assert_eq!(t.setup_alg, "F R U' R' U R U R2 F' R U R U' R'");
        assert_eq!(t.group, PllGroup::Mixed);
        assert!(find("Q").is_none());
    }

    #[test]
    fn groups_are_populated() {
        for group in PllGroup::ALL {
            assert!(pll_cases().iter().any(|c| c.group == group));
        }
        assert_eq!(pll_cases().iter().filter(|c| c.group == PllGroup::Epll).count(), 4);
        assert_eq!(pll_cases().iter().filter(|c| c.group == PllGroup::Cpll).count(), 3);
    }

    #[test]
    fn only_pll_is_populated() {
        assert_eq!(cases_for(CaseType::Pll).len(), 21);
        assert!(cases_for(CaseType::Oll).is_empty());
        assert!(cases_for(CaseType::F2l).is_empty());
    }

    #[test]
    fn serializes_like_the_ui_expects() {
        let json = serde_json::to_value(find("H").unwrap()).unwrap();
        assert_eq!(json["group"], "EPLL");
        assert_eq!(json["defaultAlgs"][0], "M2 U M2 U2 M2 U M2");
        assert_eq!(json["setupAlg"], "M2 U' M2 U2 M2 U' M2");
    }
}
