use veritable::{
    builder::catalog,
    config::Config,
    structures::sentence::Sentence,
    tables::TruthTable,
    types::err::TableError,
};

fn atom(name: &str) -> Sentence {
    Sentence::atom(name).expect("Valid atom name")
}

#[test]
fn shape_and_headers() {
    let config = Config::default();

    let kb = Sentence::implies(atom("p"), atom("q"));
    let query = atom("q");
    let table = TruthTable::generate(&config, &kb, &[("Q?", &query)]).expect("Within the ceiling");

    assert_eq!(table.headers(), vec!["p", "q", "KB", "Q?"]);
    assert_eq!(table.rows().len(), 4);

    // p => q fails only on p = 1, q = 0.
    assert_eq!(table.satisfying_rows().count(), 3);
}

#[test]
fn rows_follow_enumeration_order() {
    let config = Config::default();

    let kb = atom("p");
    let table = TruthTable::generate(&config, &kb, &[]).expect("Within the ceiling");

    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[0].values, vec![false]);
    assert_eq!(table.rows()[0].knowledge_base, false);
    assert_eq!(table.rows()[1].values, vec![true]);
    assert_eq!(table.rows()[1].knowledge_base, true);
}

#[test]
fn csv_encoding() {
    let config = Config::default();

    let kb = Sentence::implies(atom("p"), atom("q"));
    let query = atom("q");
    let table = TruthTable::generate(&config, &kb, &[("Q?", &query)]).expect("Within the ceiling");

    let mut csv = Vec::new();
    table.write_csv(&mut csv).expect("Writing to a vector");
    let csv = String::from_utf8(csv).expect("CSV is UTF-8");

    let expected = "\
p,q,KB,Q?
0,0,1,0
0,1,1,1
1,0,0,0
1,1,1,1
";
    assert_eq!(csv, expected);
}

#[test]
fn symbol_ceiling() {
    let config = Config { symbol_ceiling: 2 };

    let kb = Sentence::and(vec![atom("a"), atom("b"), atom("c")]);
    let result = TruthTable::generate(&config, &kb, &[]);

    assert_eq!(
        result.err(),
        Some(TableError::SymbolCeiling {
            symbols: 3,
            ceiling: 2
        })
    );
}

#[test]
fn query_columns_cover_query_only_symbols() {
    let config = Config::default();

    let kb = atom("p");
    let query = atom("q");
    let table = TruthTable::generate(&config, &kb, &[("Q?", &query)]).expect("Within the ceiling");

    // The union symbol set is enumerated, so four rows rather than two.
    assert_eq!(table.rows().len(), 4);
}

#[test]
fn puzzle_table_matches_scenario() {
    let config = Config::default();

    let puzzle = catalog::unicorn().expect("The catalog puzzle builds");
    let table = TruthTable::of_puzzle(&config, &puzzle).expect("Within the ceiling");

    assert_eq!(table.rows().len(), 64);
    assert_eq!(table.satisfying_rows().count(), 8);

    // Every model of the premises is magical and horned.
    let magical = table
        .headers()
        .iter()
        .position(|header| header == "Magical?")
        .expect("A column per query");
    let horned = table
        .headers()
        .iter()
        .position(|header| header == "Horned?")
        .expect("A column per query");
    let kb = table
        .headers()
        .iter()
        .position(|header| header == "KB")
        .expect("A knowledge base column");

    for row in table.satisfying_rows() {
        let cells = row
            .values
            .iter()
            .copied()
            .chain(std::iter::once(row.knowledge_base))
            .chain(row.queries.iter().copied())
            .collect::<Vec<_>>();

        assert!(cells[kb]);
        assert!(cells[magical]);
        assert!(cells[horned]);
    }
}

#[test]
fn render_has_a_row_per_assignment() {
    let config = Config::default();

    let kb = Sentence::iff(atom("p"), atom("q"));
    let table = TruthTable::generate(&config, &kb, &[]).expect("Within the ceiling");

    let rendered = table.render();

    // Header, rule, one line per assignment, then the legend block.
    assert_eq!(rendered.lines().count(), 2 + 4 + 4);
    assert!(rendered.lines().next().expect("A header line").contains("KB"));

    assert!(rendered.contains("Legend:"));
    assert!(rendered.contains("0 = false, 1 = true"));
    assert!(rendered.contains("KB = the knowledge base"));
}

#[test]
fn render_legend_explains_puzzle_queries() {
    let config = Config::default();

    let puzzle = catalog::unicorn().expect("The catalog puzzle builds");
    let table = TruthTable::of_puzzle(&config, &puzzle).expect("Within the ceiling");

    let rendered = table.render();

    // One legend line per query column, label against question.
    for query in &puzzle.queries {
        assert!(rendered.contains(&format!("{} = {}", query.label, query.question)));
    }

    // A table built from bare sentences has no questions to explain.
    let bare = TruthTable::generate(&config, &puzzle.knowledge_base(), &[])
        .expect("Within the ceiling");
    assert!(!bare.render().contains(" = Is "));
}
