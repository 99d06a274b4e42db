use std::{collections::HashMap, fmt, future::Future};

use leptos::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::ApiError,
    state::toast::{use_toasts, BusinessFailureNotifier},
};

/// Identifies a cached query: a scope such as `"leaveList"` plus ordered params.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub scope: &'static str,
    pub params: Vec<String>,
}

impl QueryKey {
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            params: Vec::new(),
        }
    }

    pub fn with(mut self, param: impl ToString) -> Self {
        self.params.push(param.to_string());
        self
    }

    /// True when `self` falls under `prefix`: same scope, params starting with the prefix params.
    pub fn matches(&self, prefix: &QueryKey) -> bool {
        self.scope == prefix.scope && self.params.starts_with(&prefix.params)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scope)?;
        for param in &self.params {
            write!(f, "/{}", param)?;
        }
        Ok(())
    }
}

pub mod keys {
    use super::QueryKey;
    use crate::api::LeaveStatus;
    use chrono::NaiveDate;

    pub fn leave_list(status: LeaveStatus) -> QueryKey {
        QueryKey::new("leaveList").with(status.as_str())
    }

    pub fn leave_detail(id: i64) -> QueryKey {
        QueryKey::new("leaveDetail").with(id)
    }

    pub fn time_allocation() -> QueryKey {
        QueryKey::new("timeAllocation")
    }

    pub fn employees() -> QueryKey {
        QueryKey::new("employees")
    }

    pub fn dashboard() -> QueryKey {
        QueryKey::new("dashboard")
    }

    pub fn dashboard_counts() -> QueryKey {
        dashboard().with("counts")
    }

    pub fn dashboard_leave_chart(year: i32) -> QueryKey {
        dashboard().with("leaveChart").with(year)
    }

    pub fn dashboard_attendance_chart(from: NaiveDate, to: NaiveDate) -> QueryKey {
        dashboard().with("attendanceChart").with(from).with(to)
    }
}

/// Per-prefix invalidation counters. A key's version is the sum of the
/// counters of every prefix it falls under, so it only moves forward.
#[derive(Clone, Copy)]
pub struct QueryCache {
    invalidations: RwSignal<HashMap<QueryKey, u64>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            invalidations: create_rw_signal(HashMap::new()),
        }
    }

    pub fn version(&self, key: &QueryKey) -> u64 {
        self.invalidations.with(|map| {
            map.iter()
                .filter(|(prefix, _)| key.matches(prefix))
                .map(|(_, count)| *count)
                .sum()
        })
    }

    pub fn invalidate(&self, prefix: &QueryKey) {
        log::debug!("invalidating queries under {}", prefix);
        self.invalidations.update(|map| {
            *map.entry(prefix.clone()).or_insert(0) += 1;
        });
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCache {
    match use_context::<QueryCache>() {
        Some(cache) => cache,
        None => {
            let cache = QueryCache::new();
            provide_context(cache);
            cache
        }
    }
}

pub type QueryResource<T> = Resource<(QueryKey, u64), Result<T, ApiError>>;

/// Resource sourced from `(key, version)`: it reloads when the key changes or
/// when something invalidates it. Failed loads are toasted once per load.
pub fn use_query<T, K, F, Fu>(key: K, fetcher: F) -> QueryResource<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(QueryKey) -> Fu + 'static,
    Fu: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = use_query_cache();
    let toasts = use_toasts();
    let notifier = store_value(BusinessFailureNotifier::default());
    let loads = store_value(0_u64);
    let fetcher = store_value(fetcher);

    create_resource(
        move || {
            let key = key();
            let version = cache.version(&key);
            (key, version)
        },
        move |(key, _version)| {
            let generation = loads.with_value(|n| *n) + 1;
            loads.set_value(generation);
            let future = fetcher.with_value(|fetch| fetch(key.clone()));
            async move {
                let result = future.await;
                if let Err(err) = &result {
                    log::warn!("query {} failed: {}", key, err);
                }
                let message = notifier
                    .try_update_value(|n| n.observe(generation, result.as_ref().err()))
                    .flatten();
                if let Some(message) = message {
                    toasts.error(message);
                }
                result
            }
        },
    )
}
