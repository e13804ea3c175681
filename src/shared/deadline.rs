use std::{future::Future, time::Duration};

/// Failure of a store call bounded by [`with_deadline`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreCallError<E> {
    #[error("{0}")]
    Store(E),

    #[error("Request timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
}

/// Runs a store call, giving up after `limit`.
pub async fn with_deadline<T, E, F>(limit: Duration, call: F) -> Result<T, StoreCallError<E>>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(StoreCallError::Store(err)),
        Err(_) => Err(StoreCallError::TimedOut(limit)),
    }
}
