//! A library for deciding whether a propositional knowledge base entails, contradicts, or is agnostic about a query, by exhaustive truth-table model checking.
//!
//! veritable works over sentences of propositional logic --- named atoms combined with negation, conjunction, disjunction, implication, and the biconditional.
//! A knowledge base is just a sentence, conventionally the conjunction of a collection of premises, and a query is entailed by the knowledge base just in case the query is true on every assignment which makes the knowledge base true.
//!
//! Deciding entailment is by brute force: every assignment of truth values to the atoms at hand is enumerated and the knowledge base and query evaluated on each.
//! There is no resolution, no clause learning, and no normal forms --- the cost of a check is 2^(atom count) evaluations, always.
//! In exchange the engine is a handful of pure functions over an immutable tree, and the full truth table falls out of the same enumeration for free.
//!
//! # Orientation
//!
//! - The [sentence representation](crate::structures::sentence) and [assignments](crate::structures::assignment) are defined in [structures].
//! - The [model enumerator](crate::procedures::enumerate) and the [model checker](crate::procedures::model_check) are defined in [procedures].
//! - The three-way outcome of a check is a [Verdict](crate::reports::Verdict).
//! - Errors are collected in [types::err](crate::types::err).
//! - A [builder] assembles puzzles --- premises with descriptions, atoms with meanings, queries with questions --- and [tables] turns an enumeration into a displayable or CSV-exportable truth table.
//!
//! The core functions allocate no long-lived state and never mutate their arguments, so sentences may be shared freely between callers.
//!
//! # Examples
//!
//! + Check a sentence against a one-premise knowledge base.
//!
//! ```rust
//! use veritable::procedures::model_check::model_check;
//! use veritable::reports::Verdict;
//! use veritable::structures::sentence::Sentence;
//!
//! let p = Sentence::atom("p")?;
//! let q = Sentence::atom("q")?;
//!
//! let kb = Sentence::and(vec![p.clone(), Sentence::implies(p.clone(), q.clone())]);
//!
//! assert_eq!(model_check(&kb, &q)?, Verdict::Entailed);
//! assert_eq!(model_check(&kb, &Sentence::not(q))?, Verdict::Contradicted);
//! # Ok::<(), veritable::types::err::ErrorKind>(())
//! ```
//!
//! + Enumerate every assignment over the atoms of a sentence.
//!
//! ```rust
//! use veritable::procedures::enumerate::Models;
//! use veritable::structures::sentence::Sentence;
//!
//! let sentence = Sentence::or(vec![Sentence::atom("a")?, Sentence::atom("b")?]);
//!
//! let satisfying = Models::over(&sentence.symbols())
//!     .filter(|assignment| sentence.evaluate(assignment) == Ok(true))
//!     .count();
//!
//! assert_eq!(satisfying, 3);
//! # Ok::<(), veritable::types::err::ErrorKind>(())
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a handful of targets, listed in [misc::log], to help narrow output to the part of the library of interest.
//! No log implementation is provided; for use with [env_logger](https://docs.rs/env_logger/latest/env_logger/), e.g. `RUST_LOG=model_check=trace …`.

pub mod builder;
pub mod procedures;

pub mod config;
pub mod reports;
pub mod structures;
pub mod types;

pub mod tables;

pub mod misc;
