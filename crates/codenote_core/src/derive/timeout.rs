//! Time-bounded execution of model calls.

use crate::derive::error::DerivationError;
use std::future::Future;
use std::time::Duration;

/// Races `fut` against a timer of `budget`.
///
/// The first to finish wins. When the timer wins, `fut` is dropped (which
/// cancels it) and `ModelTimeout` is returned.
pub async fn with_timeout<F, T>(budget: Duration, fut: F) -> Result<T, DerivationError>
where
    F: Future<Output = Result<T, DerivationError>>,
{
    match tokio::time::timeout(budget, fut).await {
        Ok(result) => result,
        Err(_) => Err(DerivationError::ModelTimeout(budget)),
    }
}

#[cfg(test)]
mod tests {
    use super::with_timeout;
    use crate::derive::error::DerivationError;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn returns_inner_result_when_it_finishes_first() {
        let result = with_timeout(Duration::from_secs(1), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<_, DerivationError>("done")
        })
        .await;
        assert_eq!(result, Ok("done"));
    }

    #[tokio::test(start_paused = true)]
    async fn reports_timeout_when_timer_wins() {
        let budget = Duration::from_secs(10);
        let started = tokio::time::Instant::now();
        let result =
            with_timeout(budget, std::future::pending::<Result<(), DerivationError>>()).await;
        assert_eq!(result, Err(DerivationError::ModelTimeout(budget)));
        let elapsed = started.elapsed();
        assert!(elapsed >= budget);
        assert!(elapsed < budget + Duration::from_millis(50));
    }

    #[tokio::test]
    async fn passes_inner_errors_through() {
        let result = with_timeout(Duration::from_secs(1), async {
            Err::<(), _>(DerivationError::ModelUnavailable)
        })
        .await;
        assert_eq!(result, Err(DerivationError::ModelUnavailable));
    }
}
