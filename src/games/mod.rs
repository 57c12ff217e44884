//! Game implementations built on the core types and the `RulesEngine` trait.

pub mod morris;
