use crate::core::chain::Chain;
use crate::core::filter_error::FilterResult;
use crate::filters::filter::Filter;
use std::fmt;

/// Adapter turning a closure into a [`Filter`]
///
/// Invoking the adapter invokes the closure with the same arguments and
/// returns its result unchanged.
///
/// # Example
///
/// ```
/// use filter_chain::{Chain, Inline};
///
/// let mut chain: Chain<u32> = Chain::new();
/// chain.add_filter(Inline::named("double", |chain: &mut Chain<u32>, n: u32| chain.next(n * 2)));
/// chain.execute(21).unwrap();
/// ```
pub struct Inline<F> {
    handler: F,
    name: Option<String>,
}

impl<F> Inline<F> {
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            name: None,
        }
    }

    /// Wrap a closure and label it for diagnostics
    pub fn named(name: impl Into<String>, handler: F) -> Self {
        Self {
            handler,
            name: Some(name.into()),
        }
    }
}

impl<C, F> Filter<C> for Inline<F>
where
    F: Fn(&mut Chain<C>, C) -> FilterResult + Send + Sync,
{
    fn execute(&self, chain: &mut Chain<C>, context: C) -> FilterResult {
        (self.handler)(chain, context)
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("inline")
    }
}

impl<F> fmt::Debug for Inline<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inline")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
