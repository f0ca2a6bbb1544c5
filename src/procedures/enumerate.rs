/*!
Enumeration of every assignment over a set of symbols.

For *n* symbols there are 2^*n* total assignments, and [Models] yields each exactly once.
The enumeration is lazy --- one assignment is held at a time, so peak memory is O(*n*) however large the enumeration --- and the 2^*n* count is the dominant cost of the whole library.

# Order

The order of enumeration is deterministic, though callers should not rely on it beyond determinism:
symbols are taken in sorted order, the all-false assignment comes first, and the value of the last symbol varies fastest.
In effect the assignments count upwards in binary, with the first symbol as the most significant digit.

```rust
use std::collections::BTreeSet;
use veritable::procedures::enumerate::Models;
use veritable::structures::assignment::Assignment;

let symbols = BTreeSet::from(["p".to_string(), "q".to_string()]);

let models = Models::over(&symbols).collect::<Vec<_>>();
assert_eq!(models.len(), 4);

assert_eq!(models[0].value_of("p"), Some(false));
assert_eq!(models[0].value_of("q"), Some(false));

assert_eq!(models[1].value_of("p"), Some(false));
assert_eq!(models[1].value_of("q"), Some(true));
```
*/

use std::collections::BTreeSet;

use crate::structures::assignment::CAssignment;

/// A lazy enumeration of every total assignment over a fixed set of symbols.
///
/// Implemented as a binary odometer over a vector of booleans, so no symbol count is materialised eagerly and no integer width caps the symbol count.
/// The practical cap is the 2^*n* running time, not the representation.
pub struct Models {
    /// The symbols assigned, in sorted order.
    symbols: Vec<String>,

    /// The values to yield next, or nothing once the enumeration is exhausted.
    values: Option<Vec<bool>>,
}

impl Models {
    /// An enumeration of every assignment over the given symbols.
    pub fn over(symbols: &BTreeSet<String>) -> Self {
        log::debug!(target: crate::misc::log::targets::ENUMERATION,
            "Enumerating 2^{} assignments", symbols.len());

        Models {
            symbols: symbols.iter().cloned().collect(),
            values: Some(vec![false; symbols.len()]),
        }
    }
}

impl Iterator for Models {
    type Item = CAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        let values = self.values.as_mut()?;

        let assignment = self
            .symbols
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect::<CAssignment>();

        // Binary increment, least significant digit last.
        // If every digit carries the enumeration is exhausted.
        let mut exhausted = true;
        for value in values.iter_mut().rev() {
            match *value {
                false => {
                    *value = true;
                    exhausted = false;
                    break;
                }
                true => *value = false,
            }
        }
        if exhausted {
            self.values = None;
        }

        Some(assignment)
    }
}
