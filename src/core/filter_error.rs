use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result of a filter execution
pub type FilterResult = Result<(), FilterError>;

/// Failure returned by a filter
///
/// The error is opaque: the chain never inspects, wraps or classifies it.
/// Whatever a filter returns is handed back unchanged to the caller of
/// [`Chain::execute`](crate::Chain::execute), and the original value can be
/// recovered with [`downcast_ref`](Self::downcast_ref) or
/// [`into_inner`](Self::into_inner).
///
/// # Example
///
/// ```
/// use filter_chain::FilterError;
///
/// let err = FilterError::msg("missing authorization header");
/// assert_eq!(err.to_string(), "missing authorization header");
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such user");
/// let err = FilterError::new(io);
/// assert!(err.is::<std::io::Error>());
/// ```
#[derive(Debug, Error)]
#[error("{inner}")]
pub struct FilterError {
    inner: BoxError,
}

impl FilterError {
    /// Wrap any error (or anything convertible into a boxed error)
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: error.into(),
        }
    }

    /// Create an error carrying only a message
    pub fn msg<M: fmt::Display>(message: M) -> Self {
        Self::new(message.to_string())
    }

    /// Whether the wrapped error is of type `E`
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.inner.is::<E>()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Take back the error the filter originally returned
    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

impl From<&str> for FilterError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for FilterError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error, PartialEq)]
    #[error("quota exceeded for {tenant}")]
    struct QuotaExceeded {
        tenant: String,
    }

    #[test]
    fn display_is_the_wrapped_message() {
        let err = FilterError::from("Error!");
        assert_eq!(err.to_string(), "Error!");

        let err = FilterError::msg(format_args!("bad token {}", 42));
        assert_eq!(err.to_string(), "bad token 42");
    }

    #[test]
    fn typed_errors_survive_wrapping() {
        let err = FilterError::new(QuotaExceeded {
            tenant: "acme".to_string(),
        });

        assert_eq!(err.to_string(), "quota exceeded for acme");
        assert!(err.is::<QuotaExceeded>());
        assert!(!err.is::<std::io::Error>());
        assert_eq!(
            err.downcast_ref::<QuotaExceeded>(),
            Some(&QuotaExceeded {
                tenant: "acme".to_string()
            })
        );

        let inner = err.into_inner();
        assert!(inner.downcast::<QuotaExceeded>().is_ok());
    }

    #[test]
    fn string_messages_are_not_typed_errors() {
        let err = FilterError::from(String::from("plain"));
        assert!(err.downcast_ref::<QuotaExceeded>().is_none());
    }
}
