//! Parsing of whole algorithms. Groups, repeats, commutators and conjugates are expanded while
//! parsing, so the result is always a flat list of tokens.
//!
//! ```text
//! steps    := (group | token)*
//! group    := '(' steps ')' repeat?
//!           | '[' steps ']' repeat?
//!           | '[' steps (',' | ':') steps ']' repeat?
//! repeat   := (digits | 'x' digits)? '\''?
//! token    := [A-Za-z0-9'._-]+
//! ```
//!
//! A repeat must be attached directly to the closing delimiter. `(R U) x2` is the group followed
//! by an `x2` rotation, while `(R U)x2` is the group done twice.
//!
//! Expansion is bounded by [`MAX_EXPANDED_MOVES`] and nesting by [`MAX_NESTING`].

use crate::error::ParseError;
use crate::moves::MoveSequence;

use super::Token;

/// The largest number of moves an algorithm may expand to.
pub const MAX_EXPANDED_MOVES: usize = 10_000;

/// The deepest groups may be nested.
pub const MAX_NESTING: usize = 64;

/// Parse an algorithm into its fully expanded sequence of tokens.
///
/// Tokens that aren't valid moves are kept as [`Token::Opaque`]; only structural problems are
/// errors.
pub fn parse(text: &str) -> Result<MoveSequence<Token>, ParseError> {
    let mut parser = Parser {
        src: text,
        pos: 0,
        depth: 0,
    };
    let steps = parser.steps()?;

    match parser.peek() {
        None => Ok(MoveSequence(steps)),
        Some(found @ (')' | ']')) => Err(ParseError::UnmatchedClose {
            found,
            position: parser.pos,
        }),
        Some(found) => Err(ParseError::MisplacedSeparator {
            found,
            position: parser.pos,
        }),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Paren,
    Bracket,
}

impl Delimiter {
    fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
        }
    }

    fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
        }
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '\'' | '.' | '_' | '-')
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Parse steps up to (but not including) a closing delimiter, a separator or the end of the
    /// input.
    fn steps(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut out = Vec::new();

        loop {
            self.skip_whitespace();
            let start = self.pos;

            match self.peek() {
                None | Some(')' | ']' | ',' | ':') => return Ok(out),
                Some('(') => {
                    let group = self.group(Delimiter::Paren)?;
                    extend_checked(&mut out, group, start)?;
                }
                Some('[') => {
                    let group = self.group(Delimiter::Bracket)?;
                    extend_checked(&mut out, group, start)?;
                }
                Some(c) if is_token_char(c) => {
                    let len = self
                        .rest()
                        .find(|c: char| !is_token_char(c))
                        .unwrap_or(self.rest().len());
                    let token = Token::from_text(&self.rest()[..len]);
                    self.pos += len;
                    extend_checked(&mut out, vec![token], start)?;
                }
                Some(found) => {
                    return Err(ParseError::UnexpectedCharacter {
                        found,
                        position: start,
                    })
                }
            }
        }
    }

    fn group(&mut self, delim: Delimiter) -> Result<Vec<Token>, ParseError> {
        let open = self.pos;
        if self.depth == MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                position: open,
            });
        }
        self.bump();

        self.depth += 1;
        let body = self.group_body(delim, open);
        self.depth -= 1;

        self.repeat(body?, open)
    }

    fn group_body(&mut self, delim: Delimiter, open: usize) -> Result<Vec<Token>, ParseError> {
        let first = self.steps()?;
        let body = match self.peek() {
            Some(c) if c == delim.close() => {
                self.bump();
                first
            }
            Some(sep @ (',' | ':')) if delim == Delimiter::Bracket => {
                let sep_pos = self.pos;
                self.bump();
                let second = self.steps()?;
                self.expect_close(delim, open)?;

                if first.is_empty() || second.is_empty() {
                    return Err(ParseError::EmptyOperand { position: sep_pos });
                }
                if sep == ',' {
                    commutator(first, second)
                } else {
                    conjugate(first, second)
                }
            }
            _ => {
                self.expect_close(delim, open)?;
                first
            }
        };
        Ok(body)
    }

    /// Consume the closing delimiter for `delim`, or report why it isn't there.
    fn expect_close(&mut self, delim: Delimiter, open: usize) -> Result<(), ParseError> {
        let position = self.pos;
        match self.peek() {
            Some(c) if c == delim.close() => {
                self.bump();
                Ok(())
            }
            Some(found @ (',' | ':')) => Err(ParseError::MisplacedSeparator { found, position }),
            Some(found) => Err(ParseError::MismatchedClose {
                expected: delim.close(),
                found,
                position,
            }),
            None => Err(ParseError::UnclosedGroup {
                open: delim.open(),
                position: open,
            }),
        }
    }

    /// Read an optional repeat suffix directly after a closing delimiter and expand `body`.
    fn repeat(&mut self, body: Vec<Token>, open: usize) -> Result<Vec<Token>, ParseError> {
        let count = match self.digits()? {
            Some(n) => n,
            None if self.x_repeat_follows() => {
                self.bump();
                self.skip_whitespace();
                // x_repeat_follows guarantees digits.
                self.digits()?.unwrap_or(1)
            }
            None => 1,
        };

        let body = if self.peek() == Some('\'') {
            self.bump();
            MoveSequence(body).inverse().0
        } else {
            body
        };

        let total = body
            .len()
            .checked_mul(count as usize)
            .filter(|&n| n <= MAX_EXPANDED_MOVES)
            .ok_or(ParseError::TooManyMoves {
                limit: MAX_EXPANDED_MOVES,
                position: open,
            })?;

        Ok(body.iter().cloned().cycle().take(total).collect())
    }

    fn x_repeat_follows(&self) -> bool {
        self.rest()
            .strip_prefix('x')
            .map(str::trim_start)
            .is_some_and(|s| s.starts_with(|c: char| c.is_ascii_digit()))
    }

    fn digits(&mut self) -> Result<Option<u32>, ParseError> {
        let start = self.pos;
        let len = self
            .rest()
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest().len());
        if len == 0 {
            return Ok(None);
        }

        let n = self.rest()[..len]
            .parse()
            .map_err(|_| ParseError::RepeatOverflow { position: start })?;
        self.pos += len;
        Ok(Some(n))
    }
}

fn extend_checked(
    out: &mut Vec<Token>,
    tokens: Vec<Token>,
    position: usize,
) -> Result<(), ParseError> {
    if out.len() + tokens.len() > MAX_EXPANDED_MOVES {
        return Err(ParseError::TooManyMoves {
            limit: MAX_EXPANDED_MOVES,
            position,
        });
    }
    out.extend(tokens);
    Ok(())
}

/// `[A, B]` is `A B A' B'`.
fn commutator(a: Vec<Token>, b: Vec<Token>) -> Vec<Token> {
    let a = MoveSequence(a);
    let b = MoveSequence(b);
    a.clone()
        .append(b.clone())
        .append(a.inverse())
        .append(b.inverse())
        .0
}

/// `[A: B]` is `A B A'`.
fn conjugate(a: Vec<Token>, b: Vec<Token>) -> Vec<Token> {
    let a = MoveSequence(a);
    a.clone().append(MoveSequence(b)).append(a.inverse()).0
}
