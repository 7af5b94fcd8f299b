//! Soft deadline tracking for long-running requests.

use std::time::{Duration, Instant};

/// Tracks elapsed time against an optional soft budget.
///
/// The executor checks [`DeadlineBudget::should_stop`] between units and
/// stops scheduling new work once the remaining budget drops below the
/// reserve. Units already completed are kept, so a request that runs out of
/// time still returns its partial results.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineBudget {
    started: Instant,
    budget: Option<Duration>,
    reserve: Duration,
}

impl DeadlineBudget {
    /// Reserve kept free for aggregation and persistence when a budget is
    /// set.
    pub const DEFAULT_RESERVE: Duration = Duration::from_secs(10);

    /// Start tracking against an optional budget.
    pub fn new(budget: Option<Duration>) -> Self {
        Self::with_reserve(budget, Self::DEFAULT_RESERVE)
    }

    /// Start tracking with an explicit reserve.
    pub fn with_reserve(budget: Option<Duration>, reserve: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
            reserve,
        }
    }

    /// A budget that never stops the executor.
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    /// Whether no further units should be scheduled.
    pub fn should_stop(&self) -> bool {
        match self.budget {
            Some(budget) => self.started.elapsed() + self.reserve >= budget,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_stops() {
        let budget = DeadlineBudget::unlimited();
        assert!(!budget.should_stop());
    }

    #[test]
    fn stops_once_remaining_time_is_inside_the_reserve() {
        let budget =
            DeadlineBudget::with_reserve(Some(Duration::from_secs(5)), Duration::from_secs(5));
        assert!(budget.should_stop());
    }

    #[test]
    fn generous_budget_does_not_stop_immediately() {
        let budget = DeadlineBudget::with_reserve(
            Some(Duration::from_secs(300)),
            Duration::from_secs(10),
        );
        assert!(!budget.should_stop());
    }
}
