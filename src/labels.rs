use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// A single name/value pair identifying one dimension of a metric series.
#[derive(Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Debug)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Label {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered sequence of labels identifying a metric series.
///
/// The caller's ordering is preserved and feeds directly into the digest
/// byte encoding; the sequence is never sorted here. Name uniqueness is the
/// responsibility of the surrounding pipeline and is not enforced.
///
/// Most series carry a handful of labels, so the backing storage is inline
/// for up to four pairs.
#[derive(Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Debug, Default)]
pub struct Labels(SmallVec<[Label; 4]>);

impl Labels {
    /// An empty label set. Legal as an index key: it hashes to the digest of
    /// the bare timestamp bytes.
    pub fn new() -> Self {
        Labels(SmallVec::new())
    }

    /// Build a label set from (name, value) pairs, keeping the given order.
    pub fn from_pairs<N, V, I>(pairs: I) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (N, V)>,
    {
        Labels(
            pairs
                .into_iter()
                .map(|(n, v)| Label::new(n, v))
                .collect(),
        )
    }

    pub fn push(&mut self, label: Label) {
        self.0.push(label);
    }
}

impl Deref for Labels {
    type Target = [Label];

    fn deref(&self) -> &[Label] {
        &self.0
    }
}

impl FromIterator<Label> for Labels {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Labels(iter.into_iter().collect())
    }
}

impl IntoIterator for Labels {
    type Item = Label;
    type IntoIter = smallvec::IntoIter<[Label; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=\"{}\"", label.name, label.value)?;
        }
        write!(f, "}}")
    }
}
