//! Retry policy with exponential backoff and a per-URL attempt ledger.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use rand::Rng;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Backoff strategy to use.
    pub backoff: BackoffStrategy,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(30),
            backoff: BackoffStrategy::Exponential { factor: 2.0 },
        }
    }
}

impl RetryConfig {
    /// Create a new retry config with the given max retries.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a new retry config with the given initial delay.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Create a new retry config with the given max delay.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Create a new retry config with the given backoff strategy.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// Disable retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }
}

/// Backoff strategy for determining retry delays.
#[derive(Debug, Clone, Copy)]
pub enum BackoffStrategy {
    /// Constant delay between retries.
    Constant,
    /// Linear increase in delay (delay * attempt).
    Linear,
    /// Exponential increase in delay (delay * factor^attempt).
    Exponential { factor: f64 },
    /// Exponential with random jitter to avoid thundering herd.
    ExponentialWithJitter { factor: f64 },
}

impl BackoffStrategy {
    /// Calculate the delay for a given attempt number (0-indexed).
    pub fn delay(&self, attempt: u32, initial_delay: Duration, max_delay: Duration) -> Duration {
        let delay = match self {
            BackoffStrategy::Constant => initial_delay,
            BackoffStrategy::Linear => initial_delay * (attempt + 1),
            BackoffStrategy::Exponential { factor } => {
                let multiplier = factor.powi(attempt as i32);
                Duration::from_secs_f64(initial_delay.as_secs_f64() * multiplier)
            }
            BackoffStrategy::ExponentialWithJitter { factor } => {
                let base_multiplier = factor.powi(attempt as i32);
                let base_delay = initial_delay.as_secs_f64() * base_multiplier;

                // Add jitter: random value between 0 and base_delay
                let mut rng = rand::rng();
                let jitter = rng.random::<f64>() * base_delay;

                Duration::from_secs_f64(base_delay + jitter)
            }
        };

        std::cmp::min(delay, max_delay)
    }
}

/// Per-URL retry counters shared by all clones of a client.
///
/// An entry is created on the first transient failure for a URL and
/// discarded on success or when retries are exhausted, so each URL's
/// backoff state is independent of every other in-flight request.
///
/// The mutex is only held for counter reads and updates, never across an
/// await point.
#[derive(Debug, Default)]
pub struct RetryLedger {
    counters: Mutex<HashMap<String, u32>>,
}

impl RetryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of failed attempts recorded for a URL (0 if none).
    pub fn attempts(&self, url: &str) -> u32 {
        let counters = self.counters.lock().expect("retry ledger poisoned");
        counters.get(url).copied().unwrap_or(0)
    }

    /// Record a failed attempt for a URL and return the new count.
    pub fn record_failure(&self, url: &str) -> u32 {
        let mut counters = self.counters.lock().expect("retry ledger poisoned");
        let count = counters.entry(url.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Drop the counter for a URL, resetting it to 0.
    pub fn reset(&self, url: &str) {
        let mut counters = self.counters.lock().expect("retry ledger poisoned");
        counters.remove(url);
    }

    /// Number of URLs currently tracked.
    pub fn len(&self) -> usize {
        let counters = self.counters.lock().expect("retry ledger poisoned");
        counters.len()
    }

    /// Returns true if no URL has a recorded failure.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.initial_delay, Duration::from_millis(1000));
        assert!(matches!(
            config.backoff,
            BackoffStrategy::Exponential { factor } if (factor - 2.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_default_backoff_delays() {
        // The stock policy waits 1000ms then 2000ms before the two retries.
        let config = RetryConfig::default();
        assert_eq!(
            config
                .backoff
                .delay(0, config.initial_delay, config.max_delay),
            Duration::from_millis(1000)
        );
        assert_eq!(
            config
                .backoff
                .delay(1, config.initial_delay, config.max_delay),
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn test_no_retry() {
        let config = RetryConfig::no_retry();
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_constant_backoff() {
        let delay =
            BackoffStrategy::Constant.delay(0, Duration::from_secs(1), Duration::from_secs(60));
        assert_eq!(delay, Duration::from_secs(1));

        let delay =
            BackoffStrategy::Constant.delay(5, Duration::from_secs(1), Duration::from_secs(60));
        assert_eq!(delay, Duration::from_secs(1));
    }

    #[test]
    fn test_exponential_backoff() {
        let strategy = BackoffStrategy::Exponential { factor: 2.0 };
        let initial = Duration::from_secs(1);
        let max = Duration::from_secs(60);

        assert_eq!(strategy.delay(0, initial, max), Duration::from_secs(1));
        assert_eq!(strategy.delay(1, initial, max), Duration::from_secs(2));
        assert_eq!(strategy.delay(2, initial, max), Duration::from_secs(4));

        // Should cap at max
        assert_eq!(strategy.delay(10, initial, max), Duration::from_secs(60));
    }

    #[test]
    fn test_exponential_with_jitter() {
        let strategy = BackoffStrategy::ExponentialWithJitter { factor: 2.0 };
        let initial = Duration::from_secs(1);
        let max = Duration::from_secs(60);

        // With jitter, delay should be between base and 2*base
        let delay = strategy.delay(0, initial, max);
        assert!(delay >= Duration::from_secs(1));
        assert!(delay <= Duration::from_secs(2));

        let delay = strategy.delay(1, initial, max);
        assert!(delay >= Duration::from_secs(2));
        assert!(delay <= Duration::from_secs(4));
    }

    #[test]
    fn test_ledger_counts_per_url() {
        let ledger = RetryLedger::new();
        assert_eq!(ledger.attempts("http://a/item/list"), 0);

        assert_eq!(ledger.record_failure("http://a/item/list"), 1);
        assert_eq!(ledger.record_failure("http://a/item/list"), 2);
        assert_eq!(ledger.attempts("http://a/item/list"), 2);

        // Other URLs are unaffected
        assert_eq!(ledger.attempts("http://a/jogo/list"), 0);
        assert_eq!(ledger.record_failure("http://a/jogo/list"), 1);
        assert_eq!(ledger.attempts("http://a/item/list"), 2);
    }

    #[test]
    fn test_ledger_reset() {
        let ledger = RetryLedger::new();
        ledger.record_failure("http://a/item/list");
        ledger.record_failure("http://a/item/list");

        ledger.reset("http://a/item/list");
        assert_eq!(ledger.attempts("http://a/item/list"), 0);
        assert!(ledger.is_empty());
    }
}
