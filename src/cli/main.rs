use std::path::PathBuf;

use parse_args::parse_args;
use veritable::{
    builder::catalog, config::Config, procedures::model_check::count_models, reports::Verdict,
    tables::TruthTable,
};

mod parse_args;

#[derive(Default)]
struct CliOptions {
    table: bool,
    models: bool,
    csv: Option<PathBuf>,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let mut cli_options = CliOptions::default();

    let args: Vec<String> = std::env::args().collect();
    parse_args(&args, &mut cli_options);

    let puzzle = match catalog::unicorn() {
        Ok(puzzle) => puzzle,
        Err(e) => {
            println!("Failed to build the puzzle: {e:?}");
            std::process::exit(2);
        }
    };

    let config = Config::default();

    println!("{}", puzzle.description);

    println!("\nSymbols:");
    for (name, meaning) in &puzzle.meanings {
        println!("  {name}: {meaning}");
    }

    println!("\nPremises:");
    for (index, premise) in puzzle.premises.iter().enumerate() {
        println!("  {}. {}", index + 1, premise.description);
        println!("     {}", premise.sentence);
    }

    // The table costs a full enumeration, so it is generated only on request.
    let table = match cli_options.table || cli_options.csv.is_some() {
        false => None,
        true => match TruthTable::of_puzzle(&config, &puzzle) {
            Ok(table) => Some(table),
            Err(e) => {
                println!("Failed to generate the truth table: {e:?}");
                std::process::exit(2);
            }
        },
    };

    if cli_options.table {
        if let Some(table) = &table {
            println!("\n{}", table.render());
        }
    }

    if cli_options.models {
        let knowledge_base = puzzle.knowledge_base();
        match count_models(&knowledge_base) {
            Ok(models) => println!(
                "\nThe knowledge base has {} models over {} assignments.",
                models,
                1_u128 << knowledge_base.symbols().len()
            ),
            Err(e) => {
                println!("Model count error: {e:?}");
                std::process::exit(2);
            }
        }
    }

    let verdicts = match puzzle.verdicts(&config) {
        Ok(verdicts) => verdicts,
        Err(e) => {
            println!("Model check error: {e:?}");
            std::process::exit(2);
        }
    };

    println!("\nAnswers:");
    for (query, (label, verdict)) in puzzle.queries.iter().zip(&verdicts) {
        println!("  {} [{label}]", query.question);
        match verdict {
            Verdict::Entailed => println!("    Yes: the knowledge base entails {}", query.sentence),
            Verdict::Contradicted => {
                println!("    No: the knowledge base contradicts {}", query.sentence)
            }
            Verdict::Undetermined => {
                println!("    Undetermined: the knowledge base does not settle {}", query.sentence)
            }
        }
    }

    // Presentation failures are reported and otherwise ignored --- the verdicts above stand.
    if let (Some(path), Some(table)) = (cli_options.csv, &table) {
        let write = std::fs::File::create(&path)
            .and_then(|mut file| table.write_csv(&mut file));
        match write {
            Ok(()) => println!("\nTruth table written to {path:?}"),
            Err(e) => println!("\nFailed to write CSV to {path:?}: {e}"),
        }
    }
}
