//! An in-memory index of exemplars keyed by a digest of a metric series'
//! label set and the sample timestamp.
//!
//! The scrape pipeline calls [`ExemplarStore::add`] with the series labels,
//! the sample timestamp and the exemplar observed alongside the sample, and
//! later retrieves the exemplar for an exact (labels, timestamp) pair with
//! [`ExemplarStore::get`]. Hash collisions are resolved by scanning the
//! colliding bucket and comparing candidates against the query.

pub mod digest;
pub mod error;
pub mod exemplars;
pub mod labels;
pub mod store;

pub use digest::digest;
pub use error::StoreError;
pub use exemplars::Exemplar;
pub use labels::{Label, Labels};
pub use store::{ExemplarStorage, ExemplarStore};

type Result<T> = std::result::Result<T, crate::error::StoreError>;

/// Separator inserted between label names and values in the digest input.
/// Assumed to never occur inside a label name or value; no escaping is done.
pub(crate) const SEP: u8 = 0xFF;
