//! The procedures of the engine: model enumeration and model checking.
//!
//! Both are pure --- no state survives a call, and sentences are only read.

pub mod enumerate;
pub mod model_check;
