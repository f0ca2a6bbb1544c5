//! Error types used in the library.
//!
//! - The engine is deterministic and pure, so no error invites a retry --- a repeated call reproduces the same error.
//! - Evaluation errors should never surface through [model_check](crate::procedures::model_check::model_check), which builds every assignment from the joint symbol set of the sentences checked.
//!   They guard direct use of the evaluator with an assignment assembled elsewhere.
//! - Build errors belong to the puzzle-definition collaborator rather than the engine, though empty atom names are also rejected at sentence construction.

use crate::structures::sentence::Connective;

/// The errors of the library, by part.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Sentence(SentenceError),
    Evaluation(EvaluationError),
    Build(BuildError),
    Table(TableError),
}

/// Noted errors when constructing a sentence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SentenceError {
    /// An atom was requested with the empty string as its name.
    EmptyAtomName,

    /// A fixed-arity connective was paired with the wrong number of operands.
    ///
    /// The sentence was not built, and there is no partial sentence to proceed with.
    Malformed {
        /// The connective requested.
        connective: Connective,

        /// The number of operands supplied.
        operands: usize,
    },
}

impl From<SentenceError> for ErrorKind {
    fn from(e: SentenceError) -> Self {
        ErrorKind::Sentence(e)
    }
}

/// Noted errors when evaluating a sentence on an assignment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The sentence reaches an atom to which the assignment gives no value.
    ///
    /// The assignment must be total over the atoms of the sentence --- union symbol sets before evaluating.
    UndefinedSymbol(String),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Noted errors when assembling a puzzle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A symbol was declared with the empty string as its name.
    EmptySymbolName,

    /// A symbol was declared twice with different meanings.
    ConflictingMeaning(String),

    /// A premise or query uses an atom with no declared meaning.
    UndeclaredSymbol(String),

    /// A puzzle with no premises has nothing to check.
    NoPremises,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Noted errors when generating a truth table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TableError {
    /// The joint symbol set is larger than the configured ceiling.
    ///
    /// Enumeration is exponential in the symbol count, so the ceiling bounds the work a table may demand.
    SymbolCeiling {
        /// The number of symbols requested.
        symbols: usize,

        /// The configured ceiling.
        ceiling: usize,
    },

    /// Evaluation failed while filling a row.
    ///
    /// Unexpected, as rows are evaluated on assignments drawn from the joint symbol set.
    Evaluation(EvaluationError),
}

impl From<TableError> for ErrorKind {
    fn from(e: TableError) -> Self {
        ErrorKind::Table(e)
    }
}

impl From<EvaluationError> for TableError {
    fn from(e: EvaluationError) -> Self {
        TableError::Evaluation(e)
    }
}
