use veritable::{builder::catalog, config::Config, tables::TruthTable, types::err::ErrorKind};

/// The catalog unicorn puzzle, checked and printed with its truth table.
fn main() -> Result<(), ErrorKind> {
    let puzzle = catalog::unicorn()?;
    let config = Config::default();

    println!("{}\n", puzzle.description);

    for premise in &puzzle.premises {
        println!("{}", premise.sentence);
    }

    let table = TruthTable::of_puzzle(&config, &puzzle)?;
    println!("\n{}", table.render());

    for (label, verdict) in puzzle.verdicts(&config)? {
        println!("{label} {verdict}");
    }

    Ok(())
}
