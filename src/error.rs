use thiserror::Error;

/// Errors returned by the exemplar store.
///
/// `add` and `close` cannot currently fail and `get` reports a missing entry
/// as `Ok(None)` rather than an error; the error channel exists so the
/// storage contract can grow validation and capacity failures without
/// breaking callers.
#[derive(PartialEq, Eq, Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// The operation is a permanent capability gap, not a transient failure.
    /// Callers must not retry.
    #[error("{op} is not implemented")]
    NotImplemented { op: &'static str },
}

impl StoreError {
    pub fn not_implemented(op: &'static str) -> Self {
        StoreError::NotImplemented { op }
    }
}
