//! Move notation for the 3x3x3: the layers a move can turn, single move tokens, and the
//! [`parse`] function that turns a whole algorithm into a
//! [`MoveSequence`](crate::moves::MoveSequence).
//!
//! Both WCA style (`Rw`) and SiGN style (`r`) wide moves are understood. They are kept as
//! distinct layers, so `r Rw'` does not cancel.

use std::fmt;

use crate::moves::{Cancellation, Move};

mod parser;

pub use parser::{parse, MAX_EXPANDED_MOVES, MAX_NESTING};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The six outer faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Right
    R,
    /// Left
    L,
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
}

impl Face {
    fn from_upper(c: char) -> Option<Face> {
        Some(match c {
            'R' => Face::R,
            'L' => Face::L,
            'U' => Face::U,
            'D' => Face::D,
            'F' => Face::F,
            'B' => Face::B,
            _ => return None,
        })
    }

    fn upper(self) -> char {
        match self {
            Face::R => 'R',
            Face::L => 'L',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }
}

/// The three middle slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Slice {
    /// Between L and R, turning like L
    M,
    /// Between U and D, turning like D
    E,
    /// Between F and B, turning like F
    S,
}

/// Whole cube rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Rotation {
    /// Rotation about the R axis
    X,
    /// Rotation about the U axis
    Y,
    /// Rotation about the F axis
    Z,
}

/// How a wide move was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum WideStyle {
    /// SiGN style, e.g. `r`
    Lowercase,
    /// WCA style, e.g. `Rw`
    Suffix,
}

/// What a move turns. Two moves can only cancel if their layers are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Layer {
    Outer(Face),
    Wide(Face, WideStyle),
    Slice(Slice),
    Rotation(Rotation),
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Layer::Outer(face) => write!(f, "{}", face.upper()),
            Layer::Wide(face, WideStyle::Lowercase) => {
                write!(f, "{}", face.upper().to_ascii_lowercase())
            }
            Layer::Wide(face, WideStyle::Suffix) => write!(f, "{}w", face.upper()),
            Layer::Slice(slice) => write!(f, "{slice:?}"),
            Layer::Rotation(Rotation::X) => f.write_str("x"),
            Layer::Rotation(Rotation::Y) => f.write_str("y"),
            Layer::Rotation(Rotation::Z) => f.write_str("z"),
        }
    }
}

/// Stores a layer and a quarter turn counter. An anti-clockwise move will have a count of 3.
/// A count of 0 is never stored; such a move is simply absent.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Turn {
    pub layer: Layer,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl Move for Turn {
    fn inverse(self) -> Self {
        Self {
            layer: self.layer,
            count: (4 - self.count) % 4,
        }
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.layer == b.layer {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Turn {
                    layer: self.layer,
                    count,
                })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.layer),
            3 => write!(f, "{}'", self.layer),
            _ => write!(f, "{}{}", self.layer, self.count),
        }
    }
}

// I don't want the default derive debug for this, `Turn { layer: Outer(R), count: 3 }` is
// unreadable in assertion failures.
impl fmt::Debug for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Classify a single move token such as `R`, `Uw2` or `x'`. Returns `None` if the token isn't a
/// move this grammar knows about.
///
/// The accepted suffixes are nothing, `'`, `2` and `2'`, the last being a half turn just like `2`.
/// Letters are case sensitive and only outer faces take a `w`, so `X`, `m'` and `Mw` are not moves
/// here even though looser, case folding readers of this notation accept them.
pub fn classify(token: &str) -> Option<Turn> {
    let mut chars = token.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    let (layer, suffix) = match first {
        'M' => (Layer::Slice(Slice::M), rest),
        'E' => (Layer::Slice(Slice::E), rest),
        'S' => (Layer::Slice(Slice::S), rest),
        'x' => (Layer::Rotation(Rotation::X), rest),
        'y' => (Layer::Rotation(Rotation::Y), rest),
        'z' => (Layer::Rotation(Rotation::Z), rest),
        c if c.is_ascii_lowercase() => (
            Layer::Wide(Face::from_upper(c.to_ascii_uppercase())?, WideStyle::Lowercase),
            rest,
        ),
        c => {
            let face = Face::from_upper(c)?;
            match rest.strip_prefix('w') {
                Some(rest) => (Layer::Wide(face, WideStyle::Suffix), rest),
                None => (Layer::Outer(face), rest),
            }
        }
    };

    let count = match suffix {
        "" => 1,
        "'" => 3,
        "2" | "2'" => 2,
        _ => return None,
    };

    Some(Turn { layer, count })
}

/// One step of a parsed algorithm. Tokens the grammar doesn't recognise are kept verbatim so
/// nothing the user typed is lost, but they never cancel with anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A recognised move.
    Known(Turn),
    /// Unrecognised text, e.g. `R3` or `2R`.
    Opaque(String),
}

impl Token {
    /// Classify `text`, falling back to an opaque token.
    pub fn from_text(text: &str) -> Token {
        match classify(text) {
            Some(turn) => Token::Known(turn),
            None => Token::Opaque(text.to_owned()),
        }
    }

    /// The recognised move, if any.
    pub fn turn(&self) -> Option<Turn> {
        match self {
            Token::Known(turn) => Some(*turn),
            Token::Opaque(_) => None,
        }
    }
}

impl From<Turn> for Token {
    fn from(turn: Turn) -> Self {
        Token::Known(turn)
    }
}

impl Move for Token {
    /// Opaque tokens have no known inverse. A trailing `'` is toggled so that inverting twice
    /// gives back the original text. Pauses (`.`, `..`) invert to themselves.
    fn inverse(self) -> Self {
        match self {
            Token::Known(turn) => Token::Known(turn.inverse()),
            Token::Opaque(text) if text.chars().all(|c| c == '.') => Token::Opaque(text),
            Token::Opaque(mut text) => {
                if text.len() > 1 && text.ends_with('\'') {
                    text.pop();
                } else {
                    text.push('\'');
                }
                Token::Opaque(text)
            }
        }
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        match (self, b) {
            (Token::Known(a), Token::Known(b)) => match a.cancel(b) {
                Cancellation::NoMove => Cancellation::NoMove,
                Cancellation::OneMove(m) => Cancellation::OneMove(Token::Known(m)),
                Cancellation::TwoMove(a, b) => {
                    Cancellation::TwoMove(Token::Known(a), Token::Known(b))
                }
            },
            (a, b) => Cancellation::TwoMove(a, b),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Known(turn) => write!(f, "{turn}"),
            Token::Opaque(text) => f.write_str(text),
        }
    }
}

/// Create an outer face move by specifying a face and move count. Note that you do not need to
/// specify for example Face::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($face:ident, $count: expr) => {
        $crate::notation::Turn {
            layer: $crate::notation::Layer::Outer($crate::notation::Face::$face),
            count: $count,
        }
    };
}
