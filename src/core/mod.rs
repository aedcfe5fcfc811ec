/// The chain registry and continuation protocol
pub mod chain;

/// Opaque failure returned by filters
pub mod filter_error;
