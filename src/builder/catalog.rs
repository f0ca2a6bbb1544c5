//! Fixed puzzles, ready to check.

use crate::{
    builder::{Puzzle, PuzzleBuilder},
    structures::sentence::Sentence,
    types::err::ErrorKind,
};

/// The mythical unicorn puzzle.
///
/// > If the unicorn is mythical, then it is immortal, but if it is not mythical, then it is a mortal mammal.
/// > If the unicorn is either immortal or a mammal, then it is horned.
/// > The unicorn is magical if it is horned.
///
/// Can the unicorn be proven mythical? Magical? Horned?
pub fn unicorn() -> Result<Puzzle, ErrorKind> {
    let mut builder = PuzzleBuilder::new(
        "Given what is known of the unicorn, can it be proven mythical? Magical? Horned?",
    );

    builder.declare("Mythical", "The unicorn is mythical")?;
    builder.declare("Immortal", "The unicorn is immortal")?;
    builder.declare("Mammal", "The unicorn is a mammal")?;
    builder.declare("Mortal", "The unicorn is mortal")?;
    builder.declare("Horned", "The unicorn is horned")?;
    builder.declare("Magical", "The unicorn is magical")?;

    let mythical = Sentence::atom("Mythical")?;
    let immortal = Sentence::atom("Immortal")?;
    let mammal = Sentence::atom("Mammal")?;
    let mortal = Sentence::atom("Mortal")?;
    let horned = Sentence::atom("Horned")?;
    let magical = Sentence::atom("Magical")?;

    builder.premise(
        Sentence::implies(mythical.clone(), immortal.clone()),
        "If the unicorn is mythical, then it is immortal",
    );
    builder.premise(
        Sentence::implies(
            Sentence::not(mythical.clone()),
            Sentence::and(vec![mammal.clone(), mortal]),
        ),
        "If the unicorn is not mythical, then it is a mortal mammal",
    );
    builder.premise(
        Sentence::implies(Sentence::or(vec![immortal, mammal]), horned.clone()),
        "If the unicorn is either immortal or a mammal, then it is horned",
    );
    builder.premise(
        Sentence::implies(horned.clone(), magical.clone()),
        "The unicorn is magical if it is horned",
    );

    builder.query("Mythical?", "Is the unicorn mythical?", mythical);
    builder.query("Magical?", "Is the unicorn magical?", magical);
    builder.query("Horned?", "Is the unicorn horned?", horned);

    Ok(builder.finish()?)
}
