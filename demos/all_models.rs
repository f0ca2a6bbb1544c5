use veritable::{
    builder::catalog,
    procedures::enumerate::Models,
    structures::assignment::Assignment,
    types::err::ErrorKind,
};

/// Every model of the unicorn knowledge base, one line per model.
///
/// The enumeration is walked directly: each assignment over the symbols of the
/// knowledge base is evaluated, and the satisfying ones printed as rows of 0s and 1s.
fn main() -> Result<(), ErrorKind> {
    let knowledge_base = catalog::unicorn()?.knowledge_base();
    let symbols = knowledge_base.symbols();

    println!("{}", symbols.iter().cloned().collect::<Vec<_>>().join(" "));

    let mut count = 0;

    for assignment in Models::over(&symbols) {
        if knowledge_base.evaluate(&assignment)? {
            count += 1;

            let row = symbols
                .iter()
                .map(|symbol| match assignment.value_of(symbol) {
                    Some(true) => "1",
                    _ => "0",
                })
                .collect::<Vec<_>>()
                .join(" ");
            println!("m {count}\t {row}");
        }
    }

    println!("{count} models");

    Ok(())
}
