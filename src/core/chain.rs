use crate::core::filter_error::FilterResult;
use crate::filters::filter::Filter;
use crate::filters::inline::Inline;
use std::fmt;
use std::sync::Arc;

/// Ordered filter registry with a resumable cursor
///
/// A chain owns its filters and a cursor pointing at the next filter to run.
/// [`execute`](Self::execute) runs the filter at the cursor, handing it the
/// chain itself; the filter continues the pipeline by calling
/// [`next`](Self::next) on that handle.
///
/// # Execution Order
///
/// * **Pre-actions** (code before `next`): registration order
/// * **Post-actions** (code after `next`): reverse registration order
///
/// ```text
/// AuthFilter (before)
///   → LoggingFilter (before)
///     → HandlerFilter
///   ← LoggingFilter (after)
/// ← AuthFilter (after)
/// ```
///
/// # Cursor Semantics
///
/// * The cursor only moves forward until [`rewind`](Self::rewind)
/// * Once every filter has run, `execute` is a no-op returning `Ok(())`
/// * A filter that does not call `next` leaves the cursor just past itself
/// * A failure propagates unchanged to the caller of `execute`
///
/// # Example
///
/// ```
/// use filter_chain::{Chain, FilterError};
///
/// let mut chain: Chain<String> = Chain::new().with_name("api");
/// chain
///     .add_inline(|chain, token| {
///         if token.is_empty() {
///             return Err(FilterError::msg("missing token"));
///         }
///         chain.next(token)
///     })
///     .add_inline(|_chain, _token| Ok(()));
///
/// assert_eq!(chain.execute(String::new()).unwrap_err().to_string(), "missing token");
///
/// // Completed (or stopped) chains have to be rewound before running again
/// chain.rewind();
/// assert!(chain.execute("secret".to_string()).is_ok());
/// ```
pub struct Chain<C = ()> {
    name: Option<String>,
    filters: Vec<Arc<dyn Filter<C>>>,
    cursor: usize,
}

impl<C> Chain<C> {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            name: None,
            filters: Vec::new(),
            cursor: 0,
        }
    }

    /// Create an empty chain with room for `capacity` filters
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name: None,
            filters: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Label this chain in diagnostics
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a filter to the end of the chain
    ///
    /// Returns the chain so registrations can be chained. The same filter
    /// may be registered several times.
    ///
    /// Calling this from inside a running filter is allowed: the new filter
    /// runs in the current pass as long as the pass has not reached the end
    /// of the chain yet.
    pub fn add_filter<F: Filter<C> + 'static>(&mut self, filter: F) -> &mut Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Append a closure as an [`Inline`] filter
    pub fn add_inline<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut Chain<C>, C) -> FilterResult + Send + Sync + 'static,
    {
        self.add_filter(Inline::new(handler))
    }

    /// Append a filter (fluent API - consumes self)
    ///
    /// # Example
    ///
    /// ```
    /// use filter_chain::{Chain, Inline};
    ///
    /// let chain: Chain = Chain::new()
    ///     .filter(Inline::named("first", |chain: &mut Chain, ctx: ()| chain.next(ctx)))
    ///     .inline(|_chain, _ctx| Ok(()));
    ///
    /// assert_eq!(chain.len(), 2);
    /// ```
    pub fn filter<F: Filter<C> + 'static>(mut self, filter: F) -> Self {
        self.add_filter(filter);
        self
    }

    /// Append a closure as an [`Inline`] filter (fluent API - consumes self)
    pub fn inline<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Chain<C>, C) -> FilterResult + Send + Sync + 'static,
    {
        self.add_inline(handler);
        self
    }

    /// Run the filter at the cursor
    ///
    /// Advances the cursor by one and invokes that filter with this chain
    /// and `context`. Returns `Ok(())` without invoking anything when no
    /// filter is left. A failure is returned exactly as the filter produced
    /// it.
    pub fn execute(&mut self, context: C) -> FilterResult {
        let pos = self.cursor;
        let Some(filter) = self.filters.get(pos).map(Arc::clone) else {
            tracing::trace!(chain = self.label(), position = pos, "no filters left to run");
            return Ok(());
        };

        self.cursor = pos + 1;
        tracing::trace!(
            chain = self.label(),
            position = pos,
            filter = filter.name(),
            "invoking filter"
        );

        let result = filter.execute(self, context);

        if let Err(error) = &result {
            tracing::debug!(
                chain = self.label(),
                position = pos,
                filter = filter.name(),
                %error,
                "filter failed"
            );
        }

        result
    }

    /// Continue to the following filter
    ///
    /// This is the same operation as [`execute`](Self::execute); filters call
    /// it on the handle they were given. The following filter runs nested
    /// inside the caller, so the caller regains control once the rest of the
    /// chain has completed or failed.
    pub fn next(&mut self, context: C) -> FilterResult {
        self.execute(context)
    }

    /// Reset the cursor so the next `execute` starts from the first filter
    ///
    /// Registered filters are kept as they are.
    pub fn rewind(&mut self) {
        tracing::trace!(chain = self.label(), from = self.cursor, "rewinding chain");
        self.cursor = 0;
    }

    /// Rewind and run a full pass
    pub fn run(&mut self, context: C) -> FilterResult {
        self.rewind();
        self.execute(context)
    }

    /// Number of registered filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Index of the next filter to run
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of filters not yet run in the current pass
    pub fn remaining(&self) -> usize {
        self.filters.len().saturating_sub(self.cursor)
    }

    /// Whether every filter has been passed
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.filters.len()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

impl<C> Default for Chain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Chain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("cursor", &self.cursor)
            .field("filters", &names)
            .finish()
    }
}
