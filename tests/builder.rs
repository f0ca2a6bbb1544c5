use veritable::{
    builder::{catalog, PuzzleBuilder},
    config::Config,
    reports::Verdict,
    structures::sentence::Sentence,
    types::err::{BuildError, ErrorKind, TableError},
};

fn atom(name: &str) -> Sentence {
    Sentence::atom(name).expect("Valid atom name")
}

mod validation {
    use super::*;

    #[test]
    fn empty_symbol_name() {
        let mut builder = PuzzleBuilder::new("Empty");
        assert_eq!(builder.declare("", "nothing"), Err(BuildError::EmptySymbolName));
    }

    #[test]
    fn conflicting_meaning() {
        let mut builder = PuzzleBuilder::new("Conflict");

        assert!(builder.declare("p", "It rains").is_ok());
        // Redeclaration with the same meaning is harmless.
        assert!(builder.declare("p", "It rains").is_ok());

        assert_eq!(
            builder.declare("p", "It snows"),
            Err(BuildError::ConflictingMeaning("p".to_string()))
        );
    }

    #[test]
    fn undeclared_symbol() {
        let mut builder = PuzzleBuilder::new("Undeclared");
        builder.declare("p", "Declared").expect("A valid declaration");

        builder.premise(Sentence::implies(atom("p"), atom("q")), "Uses q, undeclared");

        assert_eq!(
            builder.finish().err(),
            Some(BuildError::UndeclaredSymbol("q".to_string()))
        );
    }

    #[test]
    fn no_premises() {
        let mut builder = PuzzleBuilder::new("Hollow");
        builder.declare("p", "Declared").expect("A valid declaration");
        builder.query("P?", "Is p?", atom("p"));

        assert_eq!(builder.finish().err(), Some(BuildError::NoPremises));
    }
}

mod solving {
    use super::*;

    #[test]
    fn catalog_unicorn_verdicts() {
        let puzzle = catalog::unicorn().expect("The catalog puzzle builds");

        let verdicts = puzzle
            .verdicts(&Config::default())
            .expect("Within the ceiling");

        assert_eq!(
            verdicts,
            vec![
                ("Mythical?".to_string(), Verdict::Undetermined),
                ("Magical?".to_string(), Verdict::Entailed),
                ("Horned?".to_string(), Verdict::Entailed),
            ]
        );
    }

    #[test]
    fn knowledge_base_conjoins_premises_in_order() {
        let mut builder = PuzzleBuilder::new("Order");
        builder.declare("a", "First").expect("A valid declaration");
        builder.declare("b", "Second").expect("A valid declaration");

        builder.premise(atom("a"), "a holds");
        builder.premise(atom("b"), "b holds");

        let puzzle = builder.finish().expect("A coherent puzzle");

        assert_eq!(
            puzzle.knowledge_base(),
            Sentence::and(vec![atom("a"), atom("b")])
        );
    }

    #[test]
    fn ceiling_refusal() {
        let mut builder = PuzzleBuilder::new("Wide");
        for i in 0..4 {
            let name = format!("s{i}");
            builder.declare(&name, "A symbol").expect("A valid declaration");
            builder.premise(atom(&name), "Holds");
        }

        let puzzle = builder.finish().expect("A coherent puzzle");
        let config = Config { symbol_ceiling: 3 };

        assert_eq!(
            puzzle.verdicts(&config).err(),
            Some(ErrorKind::Table(TableError::SymbolCeiling {
                symbols: 4,
                ceiling: 3
            }))
        );
    }
}
