//! A canonical textual form for sentences.
//!
//! The rendering is deterministic and fully parenthesised, intended for display and for readable test assertions.
//! It is not a key: two structurally different sentences may be logically equivalent and still render differently, and that is expected.
//! Structural equality is [PartialEq] on [Sentence]; evaluation never consults the rendering.

use crate::structures::sentence::Sentence;

/// The rendering of the empty conjunction.
const TOP: &str = "⊤";

/// The rendering of the empty disjunction.
const BOTTOM: &str = "⊥";

impl Sentence {
    /// The sentence as a formula string, in infix form with explicit parentheses.
    ///
    /// ```rust
    /// # use veritable::structures::sentence::Sentence;
    /// let p = Sentence::atom("p")?;
    /// let q = Sentence::atom("q")?;
    ///
    /// let sentence = Sentence::implies(Sentence::not(p), Sentence::or(vec![q]));
    /// assert_eq!(sentence.as_formula(), "(¬p => (q))");
    ///
    /// assert_eq!(Sentence::and(vec![]).as_formula(), "⊤");
    /// # Ok::<(), veritable::types::err::ErrorKind>(())
    /// ```
    pub fn as_formula(&self) -> String {
        match self {
            Self::Atom(name) => name.clone(),

            // Every non-atom rendering is self-delimiting, so no extra parentheses are needed.
            Self::Not(operand) => format!("¬{}", operand.as_formula()),

            Self::And(conjuncts) => match conjuncts.is_empty() {
                true => TOP.to_string(),
                false => format!("({})", Self::interleave(conjuncts, " ∧ ")),
            },

            Self::Or(disjuncts) => match disjuncts.is_empty() {
                true => BOTTOM.to_string(),
                false => format!("({})", Self::interleave(disjuncts, " ∨ ")),
            },

            Self::Implies(antecedent, consequent) => {
                format!("({} => {})", antecedent.as_formula(), consequent.as_formula())
            }

            Self::Iff(left, right) => {
                format!("({} <=> {})", left.as_formula(), right.as_formula())
            }
        }
    }

    fn interleave(operands: &[Sentence], separator: &str) -> String {
        operands
            .iter()
            .map(Self::as_formula)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_formula())
    }
}
