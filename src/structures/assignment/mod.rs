/*!
Assignments of truth values to atoms.

An assignment (elsewhere, a 'model') maps atom names to booleans.
Assignments are transient --- the [model enumerator](crate::procedures::enumerate) constructs one per enumerated combination, each is evaluated against, and then discarded.

Or, rather, an assignment is anything with a method for returning the value of a named atom, if one is held.
The canonical implementation of the trait is [CAssignment], a plain hash map from names to booleans.

An assignment is *total* over a set of atoms when it gives a value to each; [evaluation](crate::structures::sentence::Sentence::evaluate) requires totality over the atoms of the sentence evaluated.
Callers pairing a knowledge base with a query must take the union of the two symbol sets before building assignments, exactly as [model_check](crate::procedures::model_check::model_check) does internally --- an assignment collected from the knowledge base alone may miss a query-only atom.
*/

use std::collections::HashMap;

/// The canonical implementation of an assignment.
pub type CAssignment = HashMap<String, bool>;

/// Something which may hold a truth value for a named atom.
pub trait Assignment {
    /// The value the assignment gives to the named atom, if any.
    fn value_of(&self, atom: &str) -> Option<bool>;

    /// A count of the atoms given a value.
    fn atom_count(&self) -> usize;
}

impl Assignment for CAssignment {
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
