/*!
Sentences of propositional logic.

A sentence is a finite, immutable tree whose leaves are named atoms and whose interior nodes are connectives.
Each node exclusively owns its children, and no mutation is exposed after construction.

Equality between sentences is *structural* --- the same variant with the same children, recursively, and for atoms the same name.
Structural equality is not semantic equivalence: `And([p])` and `p` are distinct sentences, though they are true on exactly the same assignments.

Conjunction and disjunction take any number of operands, zero included:
- The empty conjunction is true (the identity of conjunction).
- The empty disjunction is false (the identity of disjunction).

# Construction

The enum is public and fixed-arity connectives carry their arity in the variant, so most construction needs no checks.
Two seams are checked:
- [Sentence::atom] rejects the empty name (a [SentenceError::EmptyAtomName](crate::types::err::SentenceError)).
- [Sentence::join] builds a sentence from a [Connective] paired with a vector of operands --- the form an external, step-by-step builder naturally produces --- and rejects an operand count which does not fit the connective.

```rust
use veritable::structures::sentence::{Connective, Sentence};

let p = Sentence::atom("p")?;
let q = Sentence::atom("q")?;

let by_method = Sentence::implies(p.clone(), q.clone());
let by_join = Sentence::join(Connective::Implies, vec![p.clone(), q.clone()])?;

assert_eq!(by_method, by_join);

assert!(Sentence::join(Connective::Not, vec![p, q]).is_err());
assert!(Sentence::atom("").is_err());
# Ok::<(), veritable::types::err::ErrorKind>(())
```
*/

mod evaluate;
mod render;
mod symbols;

use crate::types::err::SentenceError;

/// A sentence of propositional logic, as a tree of connectives over named atoms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sentence {
    /// An indivisible proposition, identified by name.
    Atom(String),

    /// The negation of a sentence.
    Not(Box<Sentence>),

    /// The conjunction of zero or more sentences, in order.
    And(Vec<Sentence>),

    /// The disjunction of zero or more sentences, in order.
    Or(Vec<Sentence>),

    /// The material implication from an antecedent to a consequent.
    Implies(Box<Sentence>, Box<Sentence>),

    /// The biconditional of two sentences.
    Iff(Box<Sentence>, Box<Sentence>),
}

/// A connective, detached from any operands.
///
/// Used to request construction of a sentence from a vector of operands via [Sentence::join].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connective {
    /// Negation, exactly one operand.
    Not,

    /// Conjunction, any number of operands.
    And,

    /// Disjunction, any number of operands.
    Or,

    /// Implication, exactly two operands (antecedent, consequent).
    Implies,

    /// Biconditional, exactly two operands.
    Iff,
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "¬"),
            Self::And => write!(f, "∧"),
            Self::Or => write!(f, "∨"),
            Self::Implies => write!(f, "=>"),
            Self::Iff => write!(f, "<=>"),
        }
    }
}

impl Sentence {
    /// An atom with the given name.
    ///
    /// The name identifies the atom: two atoms are equal exactly when their names are.
    /// The empty name is rejected.
    pub fn atom(name: impl Into<String>) -> Result<Self, SentenceError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SentenceError::EmptyAtomName);
        }
        Ok(Self::Atom(name))
    }

    /// The negation of the given sentence.
    pub fn not(operand: Sentence) -> Self {
        Self::Not(Box::new(operand))
    }

    /// The conjunction of the given sentences, in the given order.
    pub fn and(conjuncts: Vec<Sentence>) -> Self {
        Self::And(conjuncts)
    }

    /// The disjunction of the given sentences, in the given order.
    pub fn or(disjuncts: Vec<Sentence>) -> Self {
        Self::Or(disjuncts)
    }

    /// The implication from `antecedent` to `consequent`.
    pub fn implies(antecedent: Sentence, consequent: Sentence) -> Self {
        Self::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// The biconditional of `left` and `right`.
    pub fn iff(left: Sentence, right: Sentence) -> Self {
        Self::Iff(Box::new(left), Box::new(right))
    }

    /// A sentence built by applying `connective` to `operands`.
    ///
    /// Checks the operand count against the arity of the connective, and otherwise defers to the direct constructors.
    /// The checked form suits callers which assemble sentences piecewise, where arity is data rather than syntax.
    pub fn join(connective: Connective, mut operands: Vec<Sentence>) -> Result<Self, SentenceError> {
        match (connective, operands.len()) {
            (Connective::And, _) => Ok(Self::And(operands)),

            (Connective::Or, _) => Ok(Self::Or(operands)),

            (Connective::Not, 1) => {
                // Length is checked, so the pop is total.
                let operand = operands.pop().ok_or(SentenceError::Malformed {
                    connective,
                    operands: 0,
                })?;
                Ok(Self::not(operand))
            }

            (Connective::Implies | Connective::Iff, 2) => {
                let second = operands.pop().ok_or(SentenceError::Malformed {
                    connective,
                    operands: 0,
                })?;
                let first = operands.pop().ok_or(SentenceError::Malformed {
                    connective,
                    operands: 1,
                })?;
                match connective {
                    Connective::Implies => Ok(Self::implies(first, second)),
                    _ => Ok(Self::iff(first, second)),
                }
            }

            (_, found) => Err(SentenceError::Malformed {
                connective,
                operands: found,
            }),
        }
    }
}
