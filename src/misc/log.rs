/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [model enumeration](crate::procedures::enumerate)
    pub const ENUMERATION: &str = "enumeration";

    /// Logs related to [model checking](crate::procedures::model_check)
    pub const MODEL_CHECK: &str = "model_check";

    /// Logs related to [puzzle assembly](crate::builder)
    pub const BUILDER: &str = "builder";

    /// Logs related to [truth tables](crate::tables)
    pub const TABLE: &str = "table";
}
