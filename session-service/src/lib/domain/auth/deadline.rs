use std::future::Future;
use std::time::Duration;

use crate::domain::auth::errors::AuthError;

/// Run a credential store call, failing with `StoreUnavailable` once `limit` elapses.
///
/// The store future is dropped on timeout, which cancels the in-flight call.
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, AuthError>>,
{
    tokio::time::timeout(limit, call).await.map_err(|_| {
        AuthError::StoreUnavailable(format!(
            "store call timed out after {}ms",
            limit.as_millis()
        ))
    })?
}
