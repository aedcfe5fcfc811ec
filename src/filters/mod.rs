/// The capability every filter implements
pub mod filter;

/// Closure adapter for filters without a named type
pub mod inline;
