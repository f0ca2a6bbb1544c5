//! Evaluation of a sentence on an assignment.
//!
//! Evaluation is structural recursion, deterministic, and side-effect free, with depth bounded by the depth of the sentence.
//!
//! The assignment must be total over every atom reachable from the sentence.
//! A missing atom is an [UndefinedSymbol](EvaluationError::UndefinedSymbol) error rather than a default value, and the check is uniform: conjunctions and disjunctions are folded over *all* operands rather than short-circuited, so whether a missing atom surfaces does not depend on the values of its siblings.
//! (Short-circuiting would be sound for the boolean result --- it is skipped only to keep the totality precondition honest.)

use crate::{
    structures::{assignment::Assignment, sentence::Sentence},
    types::err::EvaluationError,
};

impl Sentence {
    /// The truth value of the sentence on the given assignment.
    ///
    /// - An atom takes the value the assignment gives its name, and it is an error for the assignment to give none.
    /// - The empty conjunction is true; the empty disjunction is false.
    /// - An implication is true whenever its antecedent is false.
    /// - A biconditional is true when both sides take the same value.
    ///
    /// ```rust
    /// # use std::collections::HashMap;
    /// # use veritable::structures::sentence::Sentence;
    /// # use veritable::types::err::EvaluationError;
    /// let rain = Sentence::atom("rain")?;
    /// let wet = Sentence::atom("wet")?;
    /// let sentence = Sentence::implies(rain, wet);
    ///
    /// let assignment = HashMap::from([("rain".to_string(), false), ("wet".to_string(), false)]);
    /// assert_eq!(sentence.evaluate(&assignment), Ok(true));
    ///
    /// let partial = HashMap::from([("rain".to_string(), true)]);
    /// assert_eq!(
    ///     sentence.evaluate(&partial),
    ///     Err(EvaluationError::UndefinedSymbol("wet".to_string()))
    /// );
    /// # Ok::<(), veritable::types::err::ErrorKind>(())
    /// ```
    pub fn evaluate(&self, assignment: &impl Assignment) -> Result<bool, EvaluationError> {
        match self {
            Self::Atom(name) => assignment
                .value_of(name)
                .ok_or_else(|| EvaluationError::UndefinedSymbol(name.clone())),

            Self::Not(operand) => Ok(!operand.evaluate(assignment)?),

            Self::And(conjuncts) => conjuncts
                .iter()
                .try_fold(true, |value, conjunct| Ok(value & conjunct.evaluate(assignment)?)),

            Self::Or(disjuncts) => disjuncts
                .iter()
                .try_fold(false, |value, disjunct| Ok(value | disjunct.evaluate(assignment)?)),

            Self::Implies(antecedent, consequent) => {
                Ok(!antecedent.evaluate(assignment)? | consequent.evaluate(assignment)?)
            }

            Self::Iff(left, right) => Ok(left.evaluate(assignment)? == right.evaluate(assignment)?),
        }
    }
}
