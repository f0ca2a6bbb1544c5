use std::collections::{BTreeSet, HashMap};

use veritable::{procedures::enumerate::Models, structures::assignment::Assignment};

fn symbol_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// An assignment in a hashable, canonical form.
fn canonical(assignment: &HashMap<String, bool>) -> Vec<(String, bool)> {
    let mut pairs = assignment
        .iter()
        .map(|(name, value)| (name.clone(), *value))
        .collect::<Vec<_>>();
    pairs.sort();
    pairs
}

#[test]
fn completeness() {
    for n in 0..8 {
        let names = (0..n).map(|i| format!("s{i}")).collect::<BTreeSet<_>>();

        let mut distinct = BTreeSet::new();
        let mut yielded = 0;

        for assignment in Models::over(&names) {
            yielded += 1;

            // Total over the symbol set, and over nothing else.
            assert_eq!(assignment.atom_count(), n);
            for name in &names {
                assert!(assignment.value_of(name).is_some());
            }

            distinct.insert(canonical(&assignment));
        }

        assert_eq!(yielded, 1 << n);
        assert_eq!(distinct.len(), 1 << n);
    }
}

#[test]
fn deterministic_order() {
    let symbols = symbol_set(&["a", "b", "c"]);

    let first = Models::over(&symbols).map(|a| canonical(&a)).collect::<Vec<_>>();
    let second = Models::over(&symbols).map(|a| canonical(&a)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn zero_symbols() {
    // 2^0 = 1: the single empty assignment.
    let models = Models::over(&BTreeSet::new()).collect::<Vec<_>>();

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].atom_count(), 0);
}

#[test]
fn all_false_first() {
    let symbols = symbol_set(&["p", "q"]);

    let first = Models::over(&symbols).next().expect("At least one assignment");

    assert_eq!(first.value_of("p"), Some(false));
    assert_eq!(first.value_of("q"), Some(false));
}
