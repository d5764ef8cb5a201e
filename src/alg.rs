//! Text level operations on algorithms: parsing, identity checking, inversion and checking a
//! candidate solution against a case.
//!
//! None of these functions keep any state between calls.

use crate::error::ParseError;
use crate::moves::MoveSequence;
use crate::notation::{self, Token};

/// An algorithm after parsing and expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAlg {
    /// The text as given.
    pub raw: String,
    /// The expanded algorithm rendered back to text, steps separated by single spaces.
    pub normalized: String,
    /// Each expanded step as text.
    pub steps: Vec<String>,
    /// The expanded tokens.
    pub moves: MoveSequence<Token>,
}

/// Result of simplifying an algorithm and checking whether anything is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityResult {
    /// Whether the algorithm simplified away completely.
    pub is_identity: bool,
    /// What is left after adjacent cancellation.
    pub simplified: MoveSequence<Token>,
    /// `simplified.len()`, i.e. how far from solved the algorithm leaves the cube.
    pub remaining_moves: usize,
}

impl IdentityResult {
    fn from_moves(moves: MoveSequence<Token>) -> Self {
        let simplified = moves.simplify();
        IdentityResult {
            is_identity: simplified.is_empty(),
            remaining_moves: simplified.len(),
            simplified,
        }
    }
}

/// Result of applying a candidate algorithm to a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    /// The verdict on the combined algorithm.
    pub identity: IdentityResult,
    /// The case setup followed by the candidate, as text.
    pub combined: String,
}

/// Anything that knows how to reach its pattern from a solved cube.
pub trait CaseState {
    /// An algorithm taking the solved cube to this state.
    fn setup_alg(&self) -> &str;
}

impl CaseState for str {
    fn setup_alg(&self) -> &str {
        self
    }
}

impl CaseState for String {
    fn setup_alg(&self) -> &str {
        self
    }
}

/// Parse and expand an algorithm.
pub fn parse(text: &str) -> Result<ParsedAlg, ParseError> {
    let moves = notation::parse(text)?;
    let steps: Vec<String> = moves.iter().map(ToString::to_string).collect();

    Ok(ParsedAlg {
        raw: text.to_owned(),
        normalized: steps.join(" "),
        steps,
        moves,
    })
}

/// The expanded steps of an algorithm.
pub fn to_steps(text: &str) -> Result<Vec<String>, ParseError> {
    parse(text).map(|p| p.steps)
}

/// Check whether an algorithm cancels down to nothing.
///
/// ```rust
/// let result = pll_trainer::is_identity("R U R' U'").unwrap();
/// assert!(!result.is_identity);
/// assert_eq!(result.remaining_moves, 4);
/// ```
pub fn is_identity(text: &str) -> Result<IdentityResult, ParseError> {
    Ok(IdentityResult::from_moves(notation::parse(text)?))
}

/// Apply `candidate` to the pattern produced by `case`, and check whether that solves it.
///
/// The setup and the candidate are simplified as one sequence, so moves cancel across the
/// boundary between them. A candidate that solves the case but leaves a net rotation is
/// reported as not being the identity.
///
/// Errors in the candidate are reported with positions relative to `candidate`.
pub fn apply_to_case<C>(candidate: &str, case: &C) -> Result<ApplyResult, ParseError>
where
    C: CaseState + ?Sized,
{
    let setup = case.setup_alg();
    let moves = notation::parse(setup)?.append(notation::parse(candidate)?);

    Ok(ApplyResult {
        identity: IdentityResult::from_moves(moves),
        combined: format!("{setup} {candidate}").trim().to_owned(),
    })
}

/// The algorithm that undoes `text`, in expanded form. Nothing is cancelled.
///
/// ```rust
/// assert_eq!(pll_trainer::invert("R U R'").unwrap(), "R U' R'");
/// ```
pub fn invert(text: &str) -> Result<String, ParseError> {
    Ok(notation::parse(text)?.inverse().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes() {
        let parsed = parse(" (R U)2  R2' ").unwrap();
        assert_eq!(parsed.raw, " (R U)2  R2' ");
        assert_eq!(parsed.normalized, "R U R U R2");
        assert_eq!(parsed.steps, ["R", "U", "R", "U", "R2"]);
        assert_eq!(to_steps("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn identity_checks() {
        let result = is_identity("R U R' U'").unwrap();
        assert!(!result.is_identity);
        assert_eq!(result.remaining_moves, 4);
        assert_eq!(result.simplified.to_string(), "R U R' U'");

        let result = is_identity("R U U' R'").unwrap();
        assert!(result.is_identity);
        assert_eq!(result.remaining_moves, 0);

        let result = is_identity("(R U R' U')6").unwrap();
        // Only adjacent cancellation, so the sexy move order is not discovered.
        assert!(!result.is_identity);
        assert_eq!(result.remaining_moves, 24);

        assert!(is_identity("R2 R2'").unwrap().is_identity);
        assert!(is_identity("").unwrap().is_identity);
        assert!(is_identity("(R").is_err());
    }

    #[test]
    fn inversion() {
        assert_eq!(invert("R U R'").unwrap(), "R U' R'");
        assert_eq!(invert("R2 U' x").unwrap(), "x' U R2");
        assert_eq!(invert("(R U)2").unwrap(), "U' R' U' R'");
        assert_eq!(invert("R R").unwrap(), "R' R'");
        assert_eq!(invert("").unwrap(), "");
        assert!(invert("[R, U").is_err());
    }

    #[test]
    fn apply_canonical_solution() {
        let alg = "R U2 R' U' R U' R'";
        let setup = invert(alg).unwrap();
        let result = apply_to_case(alg, &setup).unwrap();
        assert!(result.identity.is_identity);
        assert_eq!(result.combined, format!("{setup} {alg}"));
    }

    #[test]
    fn apply_wrong_solution() {
        let result = apply_to_case("R U R'", "R U R' U'").unwrap();
        assert!(!result.identity.is_identity);
        assert_eq!(result.identity.simplified.to_string(), "R U R' U' R U R'");
        assert_eq!(result.identity.remaining_moves, 7);
    }

    #[test]
    fn apply_cancels_across_boundary() {
        let result = apply_to_case("U R'", "R U'").unwrap();
        assert!(result.identity.is_identity);
        let result = apply_to_case("U R' y", "R U'").unwrap();
        assert_eq!(result.identity.simplified.to_string(), "y");
    }

    #[test]
    fn apply_empty_setup() {
        let result = apply_to_case("R", "").unwrap();
        assert_eq!(result.combined, "R");
        assert_eq!(result.identity.remaining_moves, 1);
    }

    #[test]
    fn apply_reports_candidate_positions() {
        let err = apply_to_case("R )", "U U U U").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedClose {
                found: ')',
                position: 2
            }
        );
    }

    use crate::notation::Turn;
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn inverse_text_cancels(mvs in vec(any::<Turn>(), 0..20)) {
            let text = MoveSequence(mvs).to_string();
            let inverse = invert(&text).unwrap();
            let forwards = format!("{text} {inverse}");
            let backwards = format!("{inverse} {text}");
            prop_assert!(is_identity(&forwards).unwrap().is_identity);
            prop_assert!(is_identity(&backwards).unwrap().is_identity);
            prop_assert!(apply_to_case(&text, &inverse).unwrap().identity.is_identity);
        }
    }
}
