//! Collection of the atoms of a sentence.

use std::collections::BTreeSet;

use crate::structures::sentence::Sentence;

impl Sentence {
    /// The set of distinct atom names reachable in the sentence.
    ///
    /// Duplicates collapse, and the set is ordered, which fixes the symbol order used when [enumerating models](crate::procedures::enumerate).
    ///
    /// ```rust
    /// # use veritable::structures::sentence::Sentence;
    /// let p = Sentence::atom("p")?;
    /// let q = Sentence::atom("q")?;
    /// let sentence = Sentence::and(vec![p.clone(), Sentence::or(vec![p, q])]);
    ///
    /// assert_eq!(sentence.symbols().len(), 2);
    /// # Ok::<(), veritable::types::err::ErrorKind>(())
    /// ```
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut collection = BTreeSet::new();
        self.collect_symbols(&mut collection);
        collection
    }

    fn collect_symbols(&self, collection: &mut BTreeSet<String>) {
        match self {
            Self::Atom(name) => {
                collection.insert(name.clone());
            }

            Self::Not(operand) => operand.collect_symbols(collection),

            Self::And(operands) | Self::Or(operands) => {
                for operand in operands {
                    operand.collect_symbols(collection);
                }
            }

            Self::Implies(first, second) | Self::Iff(first, second) => {
                first.collect_symbols(collection);
                second.collect_symbols(collection);
            }
        }
    }
}
