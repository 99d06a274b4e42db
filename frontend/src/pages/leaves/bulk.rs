use std::future::Future;

use futures::{stream, StreamExt};

use crate::api::ApiError;

/// Upper bound on concurrent requests for a bulk action.
pub const MAX_IN_FLIGHT: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ItemOutcome<K> {
    pub key: K,
    pub result: Result<(), ApiError>,
}

/// Per-item results of a bulk action, in completion order.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchReport<K> {
    pub outcomes: Vec<ItemOutcome<K>>,
}

impl<K> Default for BatchReport<K> {
    fn default() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }
}

impl<K> BatchReport<K> {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> Vec<(&K, &ApiError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (&o.key, err)))
            .collect()
    }

    /// One-line description of the failures, `None` when everything went through.
    pub fn failure_summary(&self) -> Option<String> {
        let failures = self.failures();
        let (_, first) = failures.first()?;
        let mut summary = format!(
            "{} of {} decisions failed: {}",
            failures.len(),
            self.len(),
            first.error
        );
        if failures.len() > 1 {
            summary.push_str(" (and others)");
        }
        Some(summary)
    }
}

/// Runs `task` for every key with at most `limit` futures in flight and
/// collects every outcome. Failures do not stop the remaining items.
pub async fn run_bounded<K, F, Fut>(keys: Vec<K>, limit: usize, task: F) -> BatchReport<K>
where
    K: Clone,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let outcomes = stream::iter(keys.into_iter().map(|key| {
        let pending = task(key.clone());
        async move {
            ItemOutcome {
                key,
                result: pending.await,
            }
        }
    }))
    .buffer_unordered(limit.max(1))
    .collect::<Vec<_>>()
    .await;
    BatchReport { outcomes }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn never_exceeds_the_in_flight_limit() {
        let active = Rc::new(Cell::new(0usize));
        let peak = Rc::new(Cell::new(0usize));
        let report = run_bounded((0..10).collect(), MAX_IN_FLIGHT, |_key: i64| {
            let active = active.clone();
            let peak = peak.clone();
            async move {
                active.set(active.get() + 1);
                peak.set(peak.get().max(active.get()));
                for _ in 0..3 {
                    tokio::task::yield_now().await;
                }
                active.set(active.get() - 1);
                Ok(())
            }
        })
        .await;
        assert_eq!(report.len(), 10);
        assert_eq!(report.succeeded(), 10);
        assert!(peak.get() <= MAX_IN_FLIGHT);
        assert!(peak.get() > 1);
    }

    #[tokio::test]
    async fn failures_are_collected_without_stopping_the_batch() {
        let report = run_bounded(vec![1, 2, 3, 4], MAX_IN_FLIGHT, |key: i64| async move {
            if key % 2 == 0 {
                Err(ApiError::business(format!("entry {} locked", key)))
            } else {
                Ok(())
            }
        })
        .await;
        assert_eq!(report.len(), 4);
        assert_eq!(report.succeeded(), 2);
        let mut failed: Vec<i64> = report.failures().iter().map(|(k, _)| **k).collect();
        failed.sort();
        assert_eq!(failed, vec![2, 4]);
        let summary = report.failure_summary().unwrap();
        assert!(summary.starts_with("2 of 4 decisions failed"));
    }

    #[tokio::test]
    async fn empty_batch_reports_nothing() {
        let report = run_bounded(Vec::<i64>::new(), MAX_IN_FLIGHT, |_| async { Ok(()) }).await;
        assert!(report.is_empty());
        assert_eq!(report.failure_summary(), None);
    }
}
