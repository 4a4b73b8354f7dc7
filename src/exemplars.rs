use serde::{Deserialize, Serialize};

use crate::labels::Labels;

/// An auxiliary sample attached to one observation of a metric series,
/// typically carrying a `trace_id` label that links the observation to a
/// trace.
///
/// The index stores and returns this payload verbatim. Nothing in it is
/// interpreted or validated here; in particular `timestamp` is the
/// exemplar's own optional timestamp from the exposition format, distinct
/// from the scrape timestamp the index is keyed by.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Exemplar {
    /// Labels of the exemplar itself, e.g. `trace_id`.
    pub labels: Labels,
    /// The observed value.
    pub value: f64,
    /// Timestamp from the exposition, if one was present.
    pub timestamp: Option<i64>,
}

impl Exemplar {
    /// Shorthand for the common single-trace-label exemplar.
    pub fn from_trace_id<T: Into<String>>(trace_id: T) -> Self {
        Exemplar {
            labels: Labels::from_pairs([("trace_id", trace_id.into())]),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let ex = Exemplar {
            labels: Labels::from_pairs([("trace_id", "123bca45dce")]),
            value: 0.67,
            timestamp: Some(1_600_000_000_000),
        };

        let json = serde_json::to_string(&ex).unwrap();
        let back: Exemplar = serde_json::from_str(&json).unwrap();
        assert_eq!(ex, back);
    }

    #[test]
    fn test_from_trace_id() {
        let ex = Exemplar::from_trace_id("abc");

        assert_eq!(1, ex.labels.len());
        assert_eq!("trace_id", ex.labels[0].name);
        assert_eq!("abc", ex.labels[0].value);
        assert_eq!(None, ex.timestamp, "no exposition timestamp by default");
    }
}
