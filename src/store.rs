use hashbrown::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, trace};

use crate::digest::digest;
use crate::error::StoreError;
use crate::exemplars::Exemplar;
use crate::labels::Labels;
use crate::Result;

/// The storage contract the scrape pipeline consumes.
///
/// All methods take `&self`: implementations are expected to be shared
/// between concurrent scrape loops and synchronize internally.
pub trait ExemplarStorage {
    /// Record `exemplar` for the series `labels` at `timestamp`.
    fn add(&self, labels: &Labels, timestamp: i64, exemplar: Exemplar) -> Result<()>;

    /// Retrieve the exemplar recorded for exactly (`labels`, `timestamp`).
    /// `Ok(None)` is the normal miss outcome, not an error.
    fn get(&self, labels: &Labels, timestamp: i64) -> Result<Option<Exemplar>>;

    /// Range queries are a permanent capability gap in this store; always
    /// returns [`StoreError::NotImplemented`]. Callers must not retry.
    fn query(&self, labels: &Labels, start: i64, end: i64) -> Result<Vec<Exemplar>>;

    /// Release any held resources. Part of the generic storage lifecycle;
    /// the in-memory store holds none.
    fn close(&self) -> Result<()>;
}

/// One record in a digest bucket. The original labels and timestamp ride
/// along with the payload so colliding entries can be told apart at lookup.
#[derive(Clone, Debug)]
struct IndexedExemplar {
    labels: Labels,
    timestamp: i64,
    exemplar: Exemplar,
}

/// In-memory exemplar index.
///
/// Entries are bucketed under [`digest`]`(labels, timestamp)`; a bucket
/// holds every record whose key hashed to that digest, in insertion order,
/// and lookups disambiguate by scanning it. One `RwLock` guards the whole
/// map: lookups share it, appends take it exclusively. Records are never
/// mutated or removed once appended; nothing ages out entries yet, so the
/// map grows for the life of the process.
//
// TODO: age out old entries; len()/is_empty() exist so an embedding
// pipeline can watch growth until then.
#[derive(Debug, Default)]
pub struct ExemplarStore {
    buckets: RwLock<HashMap<u64, Vec<IndexedExemplar>>>,
}

impl ExemplarStore {
    /// Construct an empty store, ready for concurrent use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.read_buckets().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.read_buckets().is_empty()
    }

    fn read_buckets(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<u64, Vec<IndexedExemplar>>> {
        // Buckets are append-only, so a writer that panicked mid-call cannot
        // have left a half-mutated record visible; recover the guard.
        self.buckets.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExemplarStorage for ExemplarStore {
    fn add(&self, labels: &Labels, timestamp: i64, exemplar: Exemplar) -> Result<()> {
        let record = IndexedExemplar {
            labels: labels.clone(),
            timestamp,
            exemplar,
        };
        let key = digest(labels, timestamp);

        let mut buckets = self
            .buckets
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        buckets.entry(key).or_default().push(record);

        Ok(())
    }

    fn get(&self, labels: &Labels, timestamp: i64) -> Result<Option<Exemplar>> {
        let key = digest(labels, timestamp);

        let buckets = self.read_buckets();
        let Some(bucket) = buckets.get(&key) else {
            return Ok(None);
        };

        // Fast path: an uncontended bucket is returned without re-checking
        // the record's timestamp or labels against the query. A query that
        // merely hashes to this bucket gets its sole record. Kept for
        // compatibility with the original store; see `labels_compatible`
        // for the companion caveat.
        if let [record] = bucket.as_slice() {
            return Ok(Some(record.exemplar.clone()));
        }

        trace!(
            digest = key,
            candidates = bucket.len(),
            "scanning colliding exemplar bucket"
        );
        for record in bucket {
            if record.timestamp == timestamp && labels_compatible(&record.labels, labels) {
                return Ok(Some(record.exemplar.clone()));
            }
        }
        Ok(None)
    }

    fn query(&self, labels: &Labels, start: i64, end: i64) -> Result<Vec<Exemplar>> {
        debug!(%labels, start, end, "rejecting exemplar range query");
        Err(StoreError::not_implemented("exemplar range query"))
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Collision check between a stored record's labels and a query's labels.
///
/// Deliberately NOT an equality comparison, for compatibility with the
/// original store: after a fail-fast length check, it only verifies that
/// every query label NAME occurs among the record's names. Values are never
/// compared and the check is asymmetric. For well-formed inputs reaching
/// this point the digests already matched, which makes the weaker check
/// moot; for duplicate-name or otherwise ambiguous inputs it can declare a
/// false match. A likely upstream defect, preserved as observable behavior
/// rather than silently corrected.
fn labels_compatible(record: &Labels, query: &Labels) -> bool {
    if record.len() != query.len() {
        return false;
    }

    let by_name: HashMap<&str, &str> = record
        .iter()
        .map(|l| (l.name.as_str(), l.value.as_str()))
        .collect();

    query.iter().all(|l| by_name.contains_key(l.name.as_str()))
}
