//! Bounded retry with exponential backoff.
//!
//! Every attempt starts in `Attempting`. A success ends in `Delivered`, a fatal
//! error in `Failed`. A transient error moves to `Retrying` (sleep, then attempt
//! again) unless the budget is spent, which ends in `Exhausted`.

use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

use super::error::LlmError;

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one (default: 10)
    pub max_attempts: u32,
    /// Delay before the second attempt (default: 2s)
    pub base_delay: Duration,
    /// Multiplier applied per attempt (default: 1.5)
    pub growth_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay: Duration::from_secs(2),
            growth_factor: 1.5,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, growth_factor: f64) -> Self {
        Self {
            max_attempts,
            base_delay,
            growth_factor,
        }
    }

    /// Reject growth factors that cannot produce a delay.
    pub fn validate(&self) -> Result<(), LlmError> {
        if !self.growth_factor.is_finite() || self.growth_factor < 0.0 {
            return Err(LlmError::ProviderConfiguration(format!(
                "Retry growth factor must be a finite, non-negative number, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }

    /// Sleep applied after the zero-based `attempt` failed transiently.
    ///
    /// Falls back to `base_delay` when the product is not a representable
    /// duration (invalid factor or overflow).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let secs = self.base_delay.as_secs_f64() * self.growth_factor.powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(self.base_delay)
    }

    /// Run `operation` until it succeeds, fails fatally, or the budget runs out.
    ///
    /// The closure receives the zero-based attempt index and must produce a fresh
    /// future each time, so anything it builds (clients, connections) is scoped to
    /// that attempt.
    pub async fn execute<T, F, Fut>(&self, mut operation: F) -> Result<T, LlmError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, LlmError>>,
    {
        for attempt in 0..self.max_attempts {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() => {
                    if attempt + 1 < self.max_attempts {
                        let delay = self.delay_for(attempt);
                        warn!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Transient provider error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                    } else {
                        warn!(attempt, error = %e, "Transient provider error on final attempt");
                    }
                }
                Err(e) => {
                    error!(attempt, error = %e, "Gemini fatal error");
                    return Err(e);
                }
            }
        }

        Err(LlmError::RetryExhausted {
            max_attempts: self.max_attempts,
        })
    }
}
