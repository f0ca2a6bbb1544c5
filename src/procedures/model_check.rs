/*!
Deciding entailment by exhaustive model checking.

# Overview

A knowledge base entails a query just in case the query is true in every model of the knowledge base --- every assignment on which the knowledge base is true.
And, over a finite set of atoms the models can simply be listed.

[model_check] makes a single pass over the [enumeration](crate::procedures::enumerate) of the *joint* symbol set of the knowledge base and the query, tallying:
- The assignments on which the knowledge base is true (its models).
- The models on which the query is also true.

Both of the classical checks --- 'KB ⊨ query' and 'KB ⊨ ¬query' --- are read off the same tallies, so one enumeration settles the three-way [Verdict] and the model sets underlying the two checks are identical by construction.

# Vacuous truth

A knowledge base with no models at all is unsatisfiable, and by the standard convention entails *every* query: there is no model on which the query fails.
[model_check] follows the convention and reports [Entailed](Verdict::Entailed).
The caveat is worth keeping in mind --- an unsatisfiable knowledge base also entails the negation of the query, so an `Entailed` verdict is not, on its own, evidence the knowledge base is coherent.
[count_models] distinguishes the case when it matters.
*/

use crate::{
    misc::log::targets::{self},
    procedures::enumerate::Models,
    reports::Verdict,
    structures::sentence::Sentence,
    types::err::EvaluationError,
};

/// Whether the knowledge base entails, contradicts, or leaves undetermined the query.
///
/// A single enumeration of the joint symbol set of the two sentences, so the cost is 2^*n* evaluations for *n* joint symbols.
/// An unsatisfiable knowledge base is reported [Entailed](Verdict::Entailed), by vacuous truth (see the [module documentation](self)).
///
/// The error is defensive: every enumerated assignment is total over the joint symbol set, so evaluation cannot in fact meet an undefined symbol here.
///
/// ```rust
/// # use veritable::procedures::model_check::model_check;
/// # use veritable::reports::Verdict;
/// # use veritable::structures::sentence::Sentence;
/// let p = Sentence::atom("p")?;
/// let q = Sentence::atom("q")?;
/// let kb = Sentence::and(vec![Sentence::implies(p.clone(), q.clone()), p]);
///
/// assert_eq!(model_check(&kb, &q)?, Verdict::Entailed);
/// # Ok::<(), veritable::types::err::ErrorKind>(())
/// ```
pub fn model_check(knowledge_base: &Sentence, query: &Sentence) -> Result<Verdict, EvaluationError> {
    let mut symbols = knowledge_base.symbols();
    symbols.append(&mut query.symbols());

    let mut models = 0_usize;
    let mut query_holds = 0_usize;

    for assignment in Models::over(&symbols) {
        if knowledge_base.evaluate(&assignment)? {
            models += 1;
            if query.evaluate(&assignment)? {
                query_holds += 1;
            }
        }
    }

    log::trace!(target: targets::MODEL_CHECK,
        "{models} models of the knowledge base, query true in {query_holds}");

    let verdict = if query_holds == models {
        // Zero models falls in here: vacuous truth.
        Verdict::Entailed
    } else if query_holds == 0 {
        Verdict::Contradicted
    } else {
        Verdict::Undetermined
    };

    log::info!(target: targets::MODEL_CHECK, "{verdict} : {query}");

    Ok(verdict)
}

/// The number of models of the given sentence --- assignments over its own symbols on which it is true.
///
/// Zero means the sentence is unsatisfiable.
///
/// ```rust
/// # use veritable::procedures::model_check::count_models;
/// # use veritable::structures::sentence::Sentence;
/// let p = Sentence::atom("p")?;
/// let contradiction = Sentence::and(vec![p.clone(), Sentence::not(p)]);
///
/// assert_eq!(count_models(&contradiction)?, 0);
/// # Ok::<(), veritable::types::err::ErrorKind>(())
/// ```
pub fn count_models(sentence: &Sentence) -> Result<usize, EvaluationError> {
    let mut models = 0;
    for assignment in Models::over(&sentence.symbols()) {
        if sentence.evaluate(&assignment)? {
            models += 1;
        }
    }
    Ok(models)
}
