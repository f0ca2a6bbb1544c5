/*!
Tools for assembling a puzzle.

A puzzle pairs the engine's inputs with their human reading:
- Each atom is declared with a natural-language meaning.
- Each premise is a sentence with a description.
- Each query is a sentence with a short display label and the question it asks.

The engine itself only ever sees two things: the knowledge base --- the conjunction of the premises, in order --- and a sentence per query.
Everything else is carried for presentation.

# Building

[PuzzleBuilder] checks declarations as they arrive and hands back a [Puzzle] once the parts cohere:

```rust
use veritable::builder::PuzzleBuilder;
use veritable::config::Config;
use veritable::reports::Verdict;
use veritable::structures::sentence::Sentence;

let mut builder = PuzzleBuilder::new("Rain");
builder.declare("rain", "It is raining")?;
builder.declare("wet", "The grass is wet")?;

let rain = Sentence::atom("rain")?;
let wet = Sentence::atom("wet")?;

builder.premise(Sentence::implies(rain.clone(), wet.clone()), "If it rains, the grass is wet");
builder.premise(rain, "It is raining");
builder.query("Wet?", "Is the grass wet?", wet);

let puzzle = builder.finish()?;
let verdicts = puzzle.verdicts(&Config::default())?;

assert_eq!(verdicts, vec![("Wet?".to_string(), Verdict::Entailed)]);
# Ok::<(), veritable::types::err::ErrorKind>(())
```

Checks made, each a [BuildError](crate::types::err::BuildError):
- A declared name may not be empty.
- A name may be redeclared, but only with the same meaning.
- Every atom used by a premise or query must have been declared.
- A puzzle must have at least one premise.
*/

pub mod catalog;

use std::collections::BTreeMap;

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::model_check::model_check,
    reports::Verdict,
    structures::sentence::Sentence,
    types::err::{BuildError, ErrorKind, TableError},
};

/// A premise: a sentence together with its natural-language description.
#[derive(Clone, Debug)]
pub struct Premise {
    /// The sentence asserted.
    pub sentence: Sentence,

    /// The description of what the sentence asserts.
    pub description: String,
}

/// A query: a sentence together with a short display label and the question it asks.
#[derive(Clone, Debug)]
pub struct Query {
    /// The sentence checked against the knowledge base.
    pub sentence: Sentence,

    /// A short label, used as a truth table column header.
    pub label: String,

    /// The question, in natural language.
    pub question: String,
}

/// A puzzle: declared symbols, premises, and queries.
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// A description of the puzzle.
    pub description: String,

    /// The meaning of each declared atom, by name.
    pub meanings: BTreeMap<String, String>,

    /// The premises, in order.
    pub premises: Vec<Premise>,

    /// The queries, in order.
    pub queries: Vec<Query>,
}

impl Puzzle {
    /// The knowledge base of the puzzle: the conjunction of its premises, in order.
    pub fn knowledge_base(&self) -> Sentence {
        Sentence::and(
            self.premises
                .iter()
                .map(|premise| premise.sentence.clone())
                .collect(),
        )
    }

    /// The joint symbol count of the knowledge base and every query.
    pub fn symbol_count(&self) -> usize {
        let mut symbols = self.knowledge_base().symbols();
        for query in &self.queries {
            symbols.append(&mut query.sentence.symbols());
        }
        symbols.len()
    }

    /// The verdict for each query, labelled, in query order.
    ///
    /// A single knowledge base is built and checked against each query in turn.
    /// Refused if the joint symbol count is above the configured ceiling.
    pub fn verdicts(&self, config: &Config) -> Result<Vec<(String, Verdict)>, ErrorKind> {
        let symbols = self.symbol_count();
        if symbols > config.symbol_ceiling {
            return Err(TableError::SymbolCeiling {
                symbols,
                ceiling: config.symbol_ceiling,
            }
            .into());
        }

        let knowledge_base = self.knowledge_base();

        let mut verdicts = Vec::with_capacity(self.queries.len());
        for query in &self.queries {
            let verdict = model_check(&knowledge_base, &query.sentence)?;
            verdicts.push((query.label.clone(), verdict));
        }
        Ok(verdicts)
    }
}

/// An incremental builder for a [Puzzle], validating as parts arrive.
#[derive(Default)]
pub struct PuzzleBuilder {
    description: String,
    meanings: BTreeMap<String, String>,
    premises: Vec<Premise>,
    queries: Vec<Query>,
}

impl PuzzleBuilder {
    /// A fresh builder for a puzzle with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        PuzzleBuilder {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Declare an atom by name, with its natural-language meaning.
    ///
    /// Redeclaration is permitted with the same meaning and an error otherwise.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Result<(), BuildError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BuildError::EmptySymbolName);
        }

        let meaning = meaning.into();
        match self.meanings.get(&name) {
            Some(held) if *held != meaning => Err(BuildError::ConflictingMeaning(name)),
            _ => {
                self.meanings.insert(name, meaning);
                Ok(())
            }
        }
    }

    /// Append a premise.
    pub fn premise(&mut self, sentence: Sentence, description: impl Into<String>) {
        self.premises.push(Premise {
            sentence,
            description: description.into(),
        });
    }

    /// Append a query.
    pub fn query(&mut self, label: impl Into<String>, question: impl Into<String>, sentence: Sentence) {
        self.queries.push(Query {
            sentence,
            label: label.into(),
            question: question.into(),
        });
    }

    /// The assembled puzzle, if its parts cohere.
    pub fn finish(self) -> Result<Puzzle, BuildError> {
        if self.premises.is_empty() {
            return Err(BuildError::NoPremises);
        }

        let declared = |sentence: &Sentence| -> Result<(), BuildError> {
            for symbol in sentence.symbols() {
                if !self.meanings.contains_key(&symbol) {
                    return Err(BuildError::UndeclaredSymbol(symbol));
                }
            }
            Ok(())
        };

        for premise in &self.premises {
            declared(&premise.sentence)?;
        }
        for query in &self.queries {
            declared(&query.sentence)?;
        }

        log::debug!(target: targets::BUILDER,
            "Puzzle built: {} symbols, {} premises, {} queries",
            self.meanings.len(),
            self.premises.len(),
            self.queries.len());

        Ok(Puzzle {
            description: self.description,
            meanings: self.meanings,
            premises: self.premises,
            queries: self.queries,
        })
    }
}
