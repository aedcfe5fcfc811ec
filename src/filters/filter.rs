use crate::core::chain::Chain;
use crate::core::filter_error::FilterResult;
use std::sync::Arc;

/// A single step of a [`Chain`]
///
/// A filter receives the chain it belongs to and the context value passed by
/// whoever invoked it. It decides what happens next:
///
/// * **Continue**: call [`Chain::next`] with the context for the following filter
/// * **Stop**: return without calling `next`; later filters do not run in this pass
/// * **Fail**: return an error; it propagates to the caller of [`Chain::execute`]
///
/// Code placed after the `next` call runs once the rest of the chain has
/// finished, so post-actions run in reverse registration order.
///
/// # Stateful filters
///
/// Filters are shared behind `Arc` and executed through `&self`. Keep mutable
/// state behind atomics or a `Mutex`. Registering an `Arc<T>` keeps a handle
/// to the filter after it has been moved into the chain:
///
/// ```
/// use filter_chain::{Chain, Filter, FilterResult};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Default)]
/// struct CountingFilter {
///     runs: AtomicUsize,
/// }
///
/// impl Filter<()> for CountingFilter {
///     fn execute(&self, chain: &mut Chain, context: ()) -> FilterResult {
///         self.runs.fetch_add(1, Ordering::SeqCst);
///         chain.next(context)
///     }
/// }
///
/// let counter = Arc::new(CountingFilter::default());
/// let mut chain: Chain = Chain::new();
/// chain.add_filter(Arc::clone(&counter));
///
/// chain.execute(()).unwrap();
/// assert_eq!(counter.runs.load(Ordering::SeqCst), 1);
/// ```
pub trait Filter<C>: Send + Sync {
    /// Run this filter with the chain as continuation handle
    fn execute(&self, chain: &mut Chain<C>, context: C) -> FilterResult;

    /// Name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<C, T> Filter<C> for Arc<T>
where
    T: Filter<C> + ?Sized,
{
    fn execute(&self, chain: &mut Chain<C>, context: C) -> FilterResult {
        (**self).execute(chain, context)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C, T> Filter<C> for Box<T>
where
    T: Filter<C> + ?Sized,
{
    fn execute(&self, chain: &mut Chain<C>, context: C) -> FilterResult {
        (**self).execute(chain, context)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
