use veritable::{
    procedures::model_check::{count_models, model_check},
    reports::Verdict,
    structures::sentence::Sentence,
};

fn atom(name: &str) -> Sentence {
    Sentence::atom(name).expect("Valid atom name")
}

/// The knowledge base of the unicorn puzzle, built directly.
fn unicorn_kb() -> Sentence {
    Sentence::and(vec![
        Sentence::implies(atom("Mythical"), atom("Immortal")),
        Sentence::implies(
            Sentence::not(atom("Mythical")),
            Sentence::and(vec![atom("Mammal"), atom("Mortal")]),
        ),
        Sentence::implies(
            Sentence::or(vec![atom("Immortal"), atom("Mammal")]),
            atom("Horned"),
        ),
        Sentence::implies(atom("Horned"), atom("Magical")),
    ])
}

mod unicorn {
    use super::*;

    #[test]
    fn verdicts() {
        let kb = unicorn_kb();

        assert_eq!(model_check(&kb, &atom("Mythical")), Ok(Verdict::Undetermined));
        assert_eq!(model_check(&kb, &atom("Magical")), Ok(Verdict::Entailed));
        assert_eq!(model_check(&kb, &atom("Horned")), Ok(Verdict::Entailed));
    }

    #[test]
    fn model_count() {
        // Six symbols, three free choices once the premises bind the rest.
        let kb = unicorn_kb();

        assert_eq!(kb.symbols().len(), 6);
        assert_eq!(count_models(&kb), Ok(8));
    }
}

mod verdict_structure {
    use super::*;

    #[test]
    fn query_only_symbols_are_enumerated() {
        // The query atom does not occur in the knowledge base, so the check
        // must enumerate the union of the two symbol sets.
        let kb = atom("p");
        let query = atom("q");

        assert_eq!(model_check(&kb, &query), Ok(Verdict::Undetermined));
    }

    #[test]
    fn entailment_and_contradiction_exclude_each_other() {
        let p = atom("p");
        let q = atom("q");
        let kb = Sentence::and(vec![p.clone(), Sentence::iff(p.clone(), q.clone())]);

        let queries = [
            q.clone(),
            Sentence::not(q.clone()),
            Sentence::or(vec![p.clone(), q.clone()]),
            Sentence::and(vec![]),
            Sentence::or(vec![]),
        ];

        assert!(count_models(&kb).expect("Evaluation is total") > 0);

        for query in &queries {
            let verdict = model_check(&kb, query).expect("Evaluation is total");
            let negated = model_check(&kb, &Sentence::not(query.clone())).expect("Evaluation is total");

            // A single verdict per query, and negation swaps the decided verdicts.
            match verdict {
                Verdict::Entailed => assert_eq!(negated, Verdict::Contradicted),
                Verdict::Contradicted => assert_eq!(negated, Verdict::Entailed),
                Verdict::Undetermined => assert_eq!(negated, Verdict::Undetermined),
            }
        }
    }

    #[test]
    fn tautology_entailed_contradiction_contradicted() {
        let kb = atom("p");

        let tautology = Sentence::or(vec![atom("q"), Sentence::not(atom("q"))]);
        let contradiction = Sentence::and(vec![atom("q"), Sentence::not(atom("q"))]);

        assert_eq!(model_check(&kb, &tautology), Ok(Verdict::Entailed));
        assert_eq!(model_check(&kb, &contradiction), Ok(Verdict::Contradicted));
    }
}

mod vacuous_truth {
    use super::*;

    #[test]
    fn unsatisfiable_kb_entails_everything() {
        let kb = Sentence::and(vec![atom("p"), Sentence::not(atom("p"))]);

        assert_eq!(count_models(&kb), Ok(0));

        // The documented policy: entailed, never a silent undetermined.
        assert_eq!(model_check(&kb, &atom("p")), Ok(Verdict::Entailed));
        assert_eq!(model_check(&kb, &Sentence::not(atom("p"))), Ok(Verdict::Entailed));
        assert_eq!(model_check(&kb, &atom("unrelated")), Ok(Verdict::Entailed));
    }
}
