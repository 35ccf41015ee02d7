//! Exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;

use crate::config::schema::BackoffConfig;

/// Calculate the delay before retry attempt `attempt` (1-based).
pub fn retry_delay(attempt: u32, config: &BackoffConfig) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = config.base_delay_ms.saturating_mul(exponential_base);
    let capped_delay = delay_ms.min(config.max_delay_ms);

    // Apply jitter (0 to 10% of the delay)
    let jitter_range = capped_delay / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_delay + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_delay_ms: u64, max_delay_ms: u64) -> BackoffConfig {
        BackoffConfig {
            base_delay_ms,
            max_delay_ms,
        }
    }

    #[test]
    fn delays_grow_exponentially() {
        let cfg = config(100, 2000);

        let b1 = retry_delay(1, &cfg);
        assert!(b1.as_millis() >= 100);

        let b2 = retry_delay(2, &cfg);
        assert!(b2.as_millis() >= 200);
    }

    #[test]
    fn delay_is_capped_at_max() {
        let cfg = config(100, 1000);
        let max = retry_delay(10, &cfg);
        assert!(max.as_millis() >= 1000);
        assert!(max.as_millis() <= 1100);
    }

    #[test]
    fn attempt_zero_has_no_delay() {
        assert_eq!(retry_delay(0, &config(100, 1000)), Duration::ZERO);
    }
}
