//! Client-side query cache for the mock API.
//!
//! Reads go through [`QueryCache::observe`], which deduplicates concurrent
//! fetches per key, serves stale values while revalidating in the
//! background, and retries failed fetches. Writes go through
//! [`QueryCache::mutate`], which invalidates every key family depending on
//! the mutated entity; [`QueryCache::invalidate`] remains available for
//! manual, prefix-based invalidation.

pub mod key;
pub mod mutation;
pub mod query_cache;

pub use key::{EntityKind, QueryKey};
pub use mutation::{Mutation, MutationStatus};
pub use query_cache::{QueryCache, QueryOptions, Snapshot};
