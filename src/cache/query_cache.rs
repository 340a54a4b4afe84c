use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use super::key::{EntityKind, QueryKey};
use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// How long a cached result counts as fresh.
    pub stale_time: Duration,
    /// Automatic retries before a fetch error is surfaced.
    pub retry: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(30),
            retry: 2,
        }
    }
}

impl QueryOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            stale_time: Duration::from_millis(config.stale_time_ms),
            retry: config.retry,
        }
    }
}

/// What an observer sees for a key after one observation.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub data: Option<T>,
    pub error: Option<AppError>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Data came out of the cache rather than a fetch this observation ran.
    pub from_cache: bool,
    /// A stale value was served and a background refresh was started.
    pub is_revalidating: bool,
}

type FetchResult = Result<Value, AppError>;
type ValueFetcher =
    Arc<dyn Fn() -> Pin<Box<dyn Future<Output = FetchResult> + Send>> + Send + Sync>;

struct CachedValue {
    value: Value,
    fetched_at: DateTime<Utc>,
    invalidated: bool,
}

#[derive(Default)]
struct Slot {
    cached: Option<CachedValue>,
    /// Bumped on invalidation. A fetch only stores its result when the
    /// generation it started under is still current, so a slow response
    /// cannot overwrite data fetched after a later invalidation.
    generation: u64,
}

enum Plan {
    ServeFresh(Value, DateTime<Utc>),
    Revalidate(Value, DateTime<Utc>),
    Fetch(Option<(Value, DateTime<Utc>)>),
}

struct CacheShared {
    slots: Mutex<HashMap<QueryKey, Slot>>,
    inflight: Mutex<HashMap<QueryKey, broadcast::Sender<FetchResult>>>,
    defaults: QueryOptions,
}

/// Cheap-to-clone handle; clones share the same cache.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<CacheShared>,
}

impl QueryCache {
    pub fn new(defaults: QueryOptions) -> Self {
        Self {
            inner: Arc::new(CacheShared {
                slots: Mutex::new(HashMap::new()),
                inflight: Mutex::new(HashMap::new()),
                defaults,
            }),
        }
    }

    /// Observes one logical read.
    ///
    /// Fresh cache entry: served as-is, no fetch. Entry past its freshness
    /// window: served immediately while a background refresh runs
    /// (stale-while-revalidate). Missing or invalidated entry: fetched in the
    /// foreground; concurrent observers of the same key attach to the one
    /// in-flight fetch instead of issuing their own. A failed fetch is
    /// retried `retry` times, then surfaced in the snapshot's `error`
    /// alongside whatever stale data is still cached.
    pub async fn observe<T, F, Fut>(
        &self,
        key: QueryKey,
        options: Option<QueryOptions>,
        fetcher: F,
    ) -> Snapshot<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, AppError>> + Send + 'static,
    {
        let opts = options.unwrap_or_else(|| self.inner.defaults.clone());
        let fetch = into_value_fetcher(fetcher);

        let plan = {
            let mut slots = self.inner.slots.lock().unwrap();
            let slot = slots.entry(key.clone()).or_default();
            match &slot.cached {
                Some(c) if !c.invalidated && age_of(c.fetched_at) < opts.stale_time => {
                    Plan::ServeFresh(c.value.clone(), c.fetched_at)
                }
                Some(c) if !c.invalidated => Plan::Revalidate(c.value.clone(), c.fetched_at),
                Some(c) => Plan::Fetch(Some((c.value.clone(), c.fetched_at))),
                None => Plan::Fetch(None),
            }
        };

        match plan {
            Plan::ServeFresh(value, fetched_at) => decoded(value, fetched_at, true, false),
            Plan::Revalidate(value, fetched_at) => {
                debug!(key = %key, "serving stale value, revalidating in background");
                let cache = self.clone();
                let bg_key = key.clone();
                tokio::spawn(async move {
                    let _ = cache.fetch_shared(bg_key, opts, fetch).await;
                });
                decoded(value, fetched_at, true, true)
            }
            Plan::Fetch(prior) => match self.fetch_shared(key, opts, fetch).await {
                Ok(value) => decoded(value, Utc::now(), false, false),
                Err(err) => {
                    let from_cache = prior.is_some();
                    let (data, fetched_at) = match prior {
                        Some((value, at)) => (serde_json::from_value(value).ok(), Some(at)),
                        None => (None, None),
                    };
                    Snapshot {
                        data,
                        error: Some(err),
                        fetched_at,
                        from_cache,
                        is_revalidating: false,
                    }
                }
            },
        }
    }

    /// Marks every cached entry under `prefix` invalidated. The next observe
    /// of each key re-fetches in the foreground even inside the freshness
    /// window; in-flight results for invalidated keys are discarded.
    pub fn invalidate(&self, prefix: &QueryKey) {
        let mut slots = self.inner.slots.lock().unwrap();
        let mut hits = 0;
        for (key, slot) in slots.iter_mut() {
            if key.starts_with(prefix) {
                slot.generation += 1;
                if let Some(cached) = &mut slot.cached {
                    cached.invalidated = true;
                }
                hits += 1;
            }
        }
        debug!(prefix = %prefix, hits, "invalidated cache entries");
    }

    /// Invalidates every key family the given entity kind feeds.
    pub fn invalidate_entity(&self, kind: EntityKind) {
        for prefix in kind.dependent_prefixes() {
            self.invalidate(&QueryKey::new(prefix));
        }
    }

    /// Runs a write and, on success, invalidates everything derived from the
    /// mutated entity kind. A failed mutation leaves the cache untouched, so
    /// observers keep seeing stale-but-valid data next to the error.
    pub async fn mutate<T, F, Fut>(&self, kind: EntityKind, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let result = f().await;
        if result.is_ok() {
            self.invalidate_entity(kind);
        }
        result
    }

    /// Every observer, including the one that triggered the fetch, awaits the
    /// broadcast; the fetch itself runs in a detached task. Dropping an
    /// observer mid-flight therefore detaches it without cancelling the fetch
    /// or leaving the in-flight entry behind.
    async fn fetch_shared(
        &self,
        key: QueryKey,
        opts: QueryOptions,
        fetch: ValueFetcher,
    ) -> FetchResult {
        let (mut rx, is_leader) = {
            let mut inflight = self.inner.inflight.lock().unwrap();
            match inflight.get(&key) {
                Some(tx) => (tx.subscribe(), false),
                None => {
                    let (tx, rx) = broadcast::channel(1);
                    inflight.insert(key.clone(), tx);
                    (rx, true)
                }
            }
        };

        if is_leader {
            let cache = self.clone();
            let task_key = key.clone();
            tokio::spawn(async move {
                let started_generation = {
                    let mut slots = cache.inner.slots.lock().unwrap();
                    slots.entry(task_key.clone()).or_default().generation
                };

                let result = cache.run_with_retry(&task_key, &opts, &fetch).await;

                if let Ok(value) = &result {
                    let mut slots = cache.inner.slots.lock().unwrap();
                    let slot = slots.entry(task_key.clone()).or_default();
                    if slot.generation == started_generation {
                        slot.cached = Some(CachedValue {
                            value: value.clone(),
                            fetched_at: Utc::now(),
                            invalidated: false,
                        });
                    } else {
                        debug!(key = %task_key, "discarding result, key invalidated mid-flight");
                    }
                }

                let tx = cache.inner.inflight.lock().unwrap().remove(&task_key);
                if let Some(tx) = tx {
                    // No receivers is fine; every observer may have detached.
                    let _ = tx.send(result);
                }
            });
        } else {
            debug!(key = %key, "attaching to in-flight fetch");
        }

        match rx.recv().await {
            Ok(result) => result,
            // Fetch task finished and dropped the channel before this
            // observer subscribed; whatever it cached is the answer.
            Err(_) => self.cached_value(&key).ok_or_else(|| {
                AppError::Internal("shared fetch terminated without a result".to_string())
            }),
        }
    }

    async fn run_with_retry(
        &self,
        key: &QueryKey,
        opts: &QueryOptions,
        fetch: &ValueFetcher,
    ) -> FetchResult {
        let mut attempt: u32 = 0;
        loop {
            match fetch().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < opts.retry => {
                    attempt += 1;
                    debug!(key = %key, attempt, "fetch failed, retrying: {}", err);
                }
                Err(err) => {
                    warn!(key = %key, "fetch failed after {} attempts: {}", attempt + 1, err);
                    return Err(err);
                }
            }
        }
    }

    fn cached_value(&self, key: &QueryKey) -> Option<Value> {
        let slots = self.inner.slots.lock().unwrap();
        slots
            .get(key)
            .and_then(|slot| slot.cached.as_ref())
            .map(|cached| cached.value.clone())
    }
}

fn into_value_fetcher<T, F, Fut>(fetcher: F) -> ValueFetcher
where
    T: Serialize,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, AppError>> + Send + 'static,
{
    Arc::new(move || {
        let fut = fetcher();
        Box::pin(async move {
            let value = fut.await?;
            serde_json::to_value(value)
                .map_err(|e| AppError::Internal(format!("cache encode: {}", e)))
        })
    })
}

fn decoded<T: DeserializeOwned>(
    value: Value,
    fetched_at: DateTime<Utc>,
    from_cache: bool,
    is_revalidating: bool,
) -> Snapshot<T> {
    match serde_json::from_value(value) {
        Ok(data) => Snapshot {
            data: Some(data),
            error: None,
            fetched_at: Some(fetched_at),
            from_cache,
            is_revalidating,
        },
        Err(e) => Snapshot {
            data: None,
            error: Some(AppError::Internal(format!("cache decode: {}", e))),
            fetched_at: Some(fetched_at),
            from_cache,
            is_revalidating,
        },
    }
}

fn age_of(fetched_at: DateTime<Utc>) -> Duration {
    (Utc::now() - fetched_at).to_std().unwrap_or(Duration::ZERO)
}
