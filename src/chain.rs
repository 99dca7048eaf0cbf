//! Result substitution for fluent chaining.
//!
//! Element commands whose remote result carries no information hand back the
//! element itself, so calls chain:
//!
//! ```ignore
//! element.clear().await?.send_keys("hello").await?.submit().await?;
//! ```
//!
//! [`ChainExt::chain`] is the future form: it maps the success value of an
//! asynchronous result to a fixed handle and leaves errors untouched.
//! [`returning`] is the same stage for completion callbacks, for callers
//! that integrate callback-driven code through [`complete_with`].

// ============================================================================
// Imports
// ============================================================================

use std::future::Future;

use crate::error::Result;

// ============================================================================
// ChainExt
// ============================================================================

/// Replaces the success value of a fallible future.
pub trait ChainExt<T>: Future<Output = Result<T>> + Sized {
    /// Resolves to `Ok(handle)` when `self` succeeds, or to `self`'s error.
    ///
    /// The inner future is polled to completion exactly once. Chaining twice
    /// composes: the outermost handle wins, errors pass through once.
    fn chain<H>(self, handle: H) -> impl Future<Output = Result<H>> {
        async move {
            self.await?;
            Ok(handle)
        }
    }
}

impl<F, T> ChainExt<T> for F where F: Future<Output = Result<T>> {}

// ============================================================================
// Completion Callbacks
// ============================================================================

/// Wraps a completion so that a success result is replaced by `handle`.
///
/// Errors are forwarded unchanged. Wrapping an already wrapped completion
/// composes: the inner completion is called once, with the outer handle
/// replaced by the inner one.
pub fn returning<T, H, C>(handle: H, completion: C) -> impl FnOnce(Result<T>)
where
    C: FnOnce(Result<H>),
{
    move |result: Result<T>| completion(result.map(|_| handle))
}

/// Drives `future` and hands its result to `completion`.
pub async fn complete_with<T, Fut, C>(future: Fut, completion: C)
where
    Fut: Future<Output = Result<T>>,
    C: FnOnce(Result<T>),
{
    completion(future.await);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::Error;

    #[tokio::test]
    async fn test_chain_substitutes_success() {
        let result = async { Ok::<_, Error>(42) }.chain("handle").await;
        assert_eq!(result.expect("ok"), "handle");
    }

    #[tokio::test]
    async fn test_chain_forwards_error() {
        let result = async { Err::<u8, _>(Error::transport("down")) }
            .chain("handle")
            .await;
        assert!(result.unwrap_err().is_transport_error());
    }

    #[tokio::test]
    async fn test_nested_chain_polls_inner_once() {
        let polls = AtomicUsize::new(0);
        let inner = async {
            polls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Error>(())
        };

        let result = inner.chain(1).chain(2).await;
        assert_eq!(result.expect("ok"), 2);
        assert_eq!(polls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_returning_composes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let completion = move |result: Result<&str>| {
            assert_eq!(result.expect("ok"), "inner");
            seen.fetch_add(1, Ordering::SeqCst);
        };

        let wrapped = returning::<u8, _, _>(7, returning::<u8, _, _>("inner", completion));
        wrapped(Ok(0));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_returning_forwards_error() {
        let completion = |result: Result<&str>| {
            assert!(result.unwrap_err().is_stale());
        };
        let wrapped = returning::<(), _, _>("unused", completion);
        wrapped(Err(Error::stale_element(None, "gone")));
    }

    #[tokio::test]
    async fn test_complete_with() {
        let calls = AtomicUsize::new(0);
        complete_with(async { Ok::<_, Error>(5) }, |result| {
            assert_eq!(result.expect("ok"), 5);
            calls.fetch_add(1, Ordering::SeqCst);
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
