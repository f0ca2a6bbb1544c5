/*!
Verdicts from a model check.
*/

/// The three-way outcome of checking a query against a knowledge base.
///
/// Entailment and contradiction are mutually exclusive outcomes of the same enumeration: a knowledge base with at least one model cannot report both for one query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Verdict {
    /// The query is true in every model of the knowledge base.
    ///
    /// A knowledge base with no models at all entails everything, and is reported entailed by the vacuous-truth convention --- see [model_check](crate::procedures::model_check::model_check).
    Entailed,

    /// The query is false in every model of the knowledge base, of which there is at least one.
    Contradicted,

    /// The query is true in some models of the knowledge base and false in others.
    Undetermined,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::Contradicted => write!(f, "Contradicted"),
            Self::Undetermined => write!(f, "Undetermined"),
        }
    }
}
