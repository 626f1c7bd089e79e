use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::core::automaton::StateKey;

/// Error emitted by the lexer with a message and column position.
#[derive(Debug, Error, Clone)]
#[error("{message} at column {column}")]
pub struct LexError {
    /// Column at which the error occurred (1-indexed).
    pub column: usize,
    /// Human-readable error message.
    pub message: String,
}

impl LexError {
    /// Creates a new [`LexError`].
    #[must_use]
    pub fn new(column: usize, message: impl Into<String>) -> Self {
        Self {
            column,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEos,
    #[error("unexpected token {found}")]
    UnexpectedToken { found: String },
    #[error("missing closing parenthesis")]
    MissingRParen,
    #[error("illegal postfix operator usage")]
    MisplacedPostfix,
    #[error("empty alternative")]
    EmptyAlternative,
}

/// Parser error annotated with the offending column and kind.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Column at which the parser reported the error.
    pub column: usize,
    /// Detailed categorization of the error.
    pub kind: ParseErrorKind,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}", self.kind, self.column)
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// Creates a new [`ParseError`].
    #[must_use]
    pub fn new(column: usize, kind: ParseErrorKind) -> Self {
        Self { column, kind }
    }
}

/// Any failure while compiling a regular expression into an automaton.
#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Shape violations raised by [`BoolMatrix`](crate::core::matrix::BoolMatrix)
/// operations. These indicate programming errors and abort the enclosing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("dimension mismatch: {left_rows}x{left_cols} against {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} matrix")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("matrix power requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// Errors raised while lowering an automaton into matrix form or combining
/// lowered automata.
#[derive(Debug, Error, Clone)]
pub enum AutomatonError {
    /// The input still carries an epsilon transition. Epsilons must be
    /// eliminated by the frontends before lowering.
    #[error("epsilon transition from {from} to {to}")]
    EpsilonTransition { from: StateKey, to: StateKey },
    /// A transition endpoint or start/final marker names a state that was
    /// never declared.
    #[error("state {0} is not in the declared state set")]
    UndeclaredState(StateKey),
    /// A lookup asked for a state this automaton does not contain.
    #[error("state {0} is not part of this automaton")]
    UnknownState(StateKey),
    /// A dense state index fell outside the automaton's state range.
    #[error("state index {index} is outside the dense range 0..{states_num}")]
    IndexOutOfRange { index: usize, states_num: usize },
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Top-level error for the RPQ entry points. No partial result accompanies it.
#[derive(Debug, Error, Clone)]
pub enum RpqError {
    #[error("invalid regex: {0}")]
    Regex(#[from] BuildError),
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
