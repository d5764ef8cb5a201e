//! A library for practising PLL algorithms on the 3x3x3: a move notation parser with adjacent
//! move cancellation, a library of PLL cases, and the bookkeeping around practice sessions.
//!
//! The text level entry points are re-exported here:
//!
//! ```rust
//! use pll_trainer::{apply_to_case, cases, invert, is_identity};
//!
//! assert!(is_identity("R U U' R'").unwrap().is_identity);
//! assert_eq!(invert("R U R'").unwrap(), "R U' R'");
//!
//! let t = cases::find("T").unwrap();
//! assert!(apply_to_case(t.canonical_alg(), t).unwrap().identity.is_identity);
//! ```

#![deny(missing_docs)]

pub mod alg;
pub mod cases;
pub mod error;
pub mod moves;
pub mod notation;
pub mod practice;
pub mod preferences;
pub mod proficiency;
pub mod timing;

pub use alg::{apply_to_case, invert, is_identity, parse, to_steps};
pub use error::ParseError;
