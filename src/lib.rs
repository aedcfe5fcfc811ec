//! Filter Chain - a cursor-driven middleware pipeline
//!
//! This library provides an ordered chain of filters executed one after
//! another. Each filter receives a handle to the chain and decides whether
//! to continue it (by calling [`Chain::next`]), stop it, or fail it.
//!
//! # Quick Start
//!
//! ```
//! use filter_chain::{Chain, FilterResult};
//!
//! let mut chain: Chain<String> = Chain::new();
//! chain
//!     .add_inline(|chain, request| {
//!         // pre-action
//!         let result = chain.next(format!("{request}/validated"));
//!         // post-action
//!         result
//!     })
//!     .add_inline(|_chain, request| -> FilterResult {
//!         assert_eq!(request, "GET /users/validated");
//!         Ok(())
//!     });
//!
//! chain.execute("GET /users".to_string()).unwrap();
//! ```

pub mod core;
pub mod filters;

// Convenience re-exports
pub use core::chain::Chain;
pub use core::filter_error::{FilterError, FilterResult};
pub use filters::filter::Filter;
pub use filters::inline::Inline;
