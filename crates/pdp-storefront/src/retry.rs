//! Retry with exponential back-off and jitter for storefront requests.
//!
//! Only transport failures, throttling, and 5xx responses are retried. A
//! well-formed response is never retried, including one whose `product` is
//! `null`.

use std::future::Future;
use std::time::Duration;

use crate::error::StorefrontError;

const MAX_DELAY_MS: u64 = 10_000;

/// Returns `true` for errors worth retrying after a back-off delay.
///
/// **Retriable:**
/// - [`StorefrontError::Http`] timeouts and connection failures.
/// - [`StorefrontError::RateLimited`]: HTTP 429/430 or a `THROTTLED` error.
/// - [`StorefrontError::UnexpectedStatus`] with a 5xx status.
///
/// Everything else (GraphQL errors, decode failures, 4xx) is returned at once.
pub(crate) fn is_retriable(err: &StorefrontError) -> bool {
    match err {
        StorefrontError::Http(e) => e.is_timeout() || e.is_connect(),
        StorefrontError::RateLimited { .. } => true,
        StorefrontError::UnexpectedStatus { status, .. } => (500..600).contains(status),
        StorefrontError::Deserialize { .. }
        | StorefrontError::GraphQl { .. }
        | StorefrontError::MissingData { .. }
        | StorefrontError::InvalidEndpoint { .. } => false,
    }
}

/// Delay before retry number `attempt` (1-based): `base_ms * 2^(attempt-1)`
/// with ±25% jitter, capped at 10 s. A longer `Retry-After` wins.
fn backoff_delay_ms(attempt: u32, base_ms: u64, err: &StorefrontError) -> u64 {
    let exponent = attempt.saturating_sub(1).min(10);
    let ceiling = base_ms.saturating_mul(1 << exponent).min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let jittered = (ceiling as f64 * rand::random_range(0.75..=1.25)) as u64;

    match err {
        StorefrontError::RateLimited {
            retry_after_secs: Some(secs),
        } => jittered.max(secs.saturating_mul(1_000).min(MAX_DELAY_MS)),
        _ => jittered,
    }
}

/// Runs `operation`, retrying transient failures up to `max_retries` times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, StorefrontError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StorefrontError>>,
{
    let mut retries = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if retries < max_retries && is_retriable(&err) => err,
            Err(err) => return Err(err),
        };
        retries += 1;

        let delay_ms = backoff_delay_ms(retries, backoff_base_ms, &err);
        tracing::warn!(
            retry = retries,
            max_retries,
            delay_ms,
            error = %err,
            "transient storefront failure, backing off"
        );
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
