//! Query cache keyed by tuple-style query keys.
//!
//! Each query result is stored under a [`QueryKey`] such as
//! `["tenants", 1, 10, ""]`. Mutations invalidate by prefix: invalidating
//! `["tenants"]` drops every key whose first segment is `"tenants"`, so the
//! next read of any tenant list goes back to the server.
//!
//! Values are stored as `serde_json::Value` so one cache can hold every
//! resource type. Entries are shared process-wide with last-writer-wins
//! semantics; there is no merging.
//!
//! Invalidation also bumps a generation counter. A fetch that started before
//! an invalidation of one of its prefixes is not written back, so a slow read
//! racing a mutation cannot resurrect pre-mutation data.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use moka::future::Cache;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

/// One segment of a query key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Str(String),
    Int(i64),
    Null,
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for KeyPart {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for KeyPart {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for KeyPart {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for KeyPart {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Identifier under which a query result is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<KeyPart>);

impl QueryKey {
    /// Start a key with its resource name.
    #[must_use]
    pub fn new(resource: &str) -> Self {
        Self(vec![KeyPart::from(resource)])
    }

    /// Append a segment.
    #[must_use]
    pub fn with(mut self, part: impl Into<KeyPart>) -> Self {
        self.0.push(part.into());
        self
    }

    #[must_use]
    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }

    /// Whether `prefix` matches the leading segments of this key.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{part}")?;
        }
        f.write_str("]")
    }
}

/// Process-wide store of query results.
///
/// Clones share the same underlying cache.
#[derive(Clone)]
pub struct QueryCache {
    cache: Cache<QueryKey, serde_json::Value>,
    generations: Arc<Generations>,
}

/// Generation at which each prefix was last invalidated.
#[derive(Default)]
struct Generations {
    current: AtomicU64,
    invalidated: Mutex<HashMap<QueryKey, u64>>,
}

impl Generations {
    fn bump(&self, prefix: &QueryKey) {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.invalidated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prefix.clone(), generation);
    }

    /// Whether any prefix of `key` was invalidated after `since`.
    fn invalidated_since(&self, key: &QueryKey, since: u64) -> bool {
        self.invalidated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|(prefix, generation)| *generation > since && key.starts_with(prefix))
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl QueryCache {
    /// Create a cache holding at most `max_capacity` results for `ttl` each.
    #[must_use]
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .support_invalidation_closures()
            .build();

        Self {
            cache,
            generations: Arc::default(),
        }
    }

    /// Current invalidation generation. Capture before fetching and pass to
    /// [`Self::insert_since`].
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generations.current.load(Ordering::SeqCst)
    }

    /// Read a fresh cached result.
    ///
    /// Returns `None` on a miss, after invalidation, or if the cached value
    /// no longer decodes as `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self.cache.get(key).await?;
        match serde_json::from_value(value) {
            Ok(decoded) => {
                debug!(key = %key, "Cache hit");
                Some(decoded)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Cached value has unexpected shape");
                self.cache.invalidate(key).await;
                None
            }
        }
    }

    /// Store a result under `key`, replacing any previous value.
    pub async fn insert<T: Serialize>(&self, key: QueryKey, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => self.cache.insert(key, json).await,
            Err(e) => warn!(key = %key, error = %e, "Result not cacheable"),
        }
    }

    /// Store a result fetched at `generation` unless one of its prefixes was
    /// invalidated since. Returns whether the result was kept.
    pub async fn insert_since<T: Serialize>(
        &self,
        key: QueryKey,
        value: &T,
        generation: u64,
    ) -> bool {
        if self.generations.invalidated_since(&key, generation) {
            debug!(key = %key, "Result went stale while in flight");
            return false;
        }

        self.insert(key.clone(), value).await;

        // An invalidation may have landed between the check and the write.
        if self.generations.invalidated_since(&key, generation) {
            self.cache.invalidate(&key).await;
            return false;
        }
        true
    }

    /// Whether a fresh result is cached under exactly `key`.
    #[must_use]
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.cache.contains_key(key)
    }

    /// Mark every key starting with `prefix` stale.
    pub fn invalidate_prefix(&self, prefix: &QueryKey) {
        self.generations.bump(prefix);
        let owned = prefix.clone();
        match self
            .cache
            .invalidate_entries_if(move |key, _| key.starts_with(&owned))
        {
            Ok(_) => debug!(prefix = %prefix, "Invalidated queries"),
            Err(e) => warn!(prefix = %prefix, error = %e, "Failed to invalidate queries"),
        }
    }
}
