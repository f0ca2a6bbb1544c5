/*!
Configuration of the presentation layer.

The core procedures are pure functions with no configuration of their own.
What is configured is how much work a caller is willing to ask of them: enumeration is exponential in the symbol count, and the ceiling below bounds the tables and puzzle solves a caller may request.
*/

/// The primary configuration structure.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// The largest joint symbol set for which a truth table or puzzle solve will be attempted.
    ///
    /// An enumeration over *n* symbols yields 2^*n* assignments, so the ceiling is the exponent of the work accepted.
    /// The ceiling binds [tables](crate::tables) and [builder](crate::builder) calls; direct calls to the [procedures](crate::procedures) are not checked.
    pub symbol_ceiling: usize,
}

impl Default for Config {
    /// The default configuration keeps enumerations within interactive use --- at most 2^20 assignments.
    fn default() -> Self {
        Config { symbol_ceiling: 20 }
    }
}
