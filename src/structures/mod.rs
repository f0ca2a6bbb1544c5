//! Structures, such as sentences and assignments.

pub mod assignment;
pub mod sentence;
