//! Index-aligned indicator series.

use serde::{Deserialize, Serialize};

/// Indicator output aligned by index with its input.
///
/// Positions before an indicator's lookback is satisfied are `None`
/// ("undefined"). Serializes as a JSON array with `null` in those slots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Option<f64>>);

impl Series {
    /// A series of `len` undefined positions.
    pub fn undefined(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Place `inner` at `offset` inside a series of length `len`.
    ///
    /// Leading positions are padded with `None`, as is any tail `inner`
    /// does not reach. Values past `len` are dropped.
    pub fn right_aligned(len: usize, offset: usize, inner: Series) -> Self {
        let mut values = vec![None; offset.min(len)];
        values.extend(inner.0.into_iter().take(len - values.len()));
        values.resize(len, None);
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`; `None` when out of range or undefined.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Latest value, if defined.
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied().flatten()
    }

    /// The last two values as `(previous, current)` when both are defined.
    pub fn last_two(&self) -> Option<(f64, f64)> {
        match self.0.as_slice() {
            [.., Some(prev), Some(curr)] => Some((*prev, *curr)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.0
    }

    /// Index of the first defined position.
    pub fn first_defined(&self) -> Option<usize> {
        self.0.iter().position(Option::is_some)
    }

    /// Number of defined positions.
    pub fn defined_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    /// The defined run that follows the leading undefined span.
    ///
    /// Returns the offset where the run starts and its values. The run stops
    /// at the next undefined position, if any.
    pub fn defined_suffix(&self) -> (usize, Vec<f64>) {
        let start = self.first_defined().unwrap_or(self.0.len());
        let values = self.0[start..].iter().map_while(|v| *v).collect();
        (start, values)
    }

    /// Element-wise `self - other`; undefined wherever either side is.
    pub fn sub(&self, other: &Series) -> Series {
        let len = self.len().max(other.len());
        (0..len)
            .map(|i| match (self.get(i), other.get(i)) {
                (Some(a), Some(b)) => Some(a - b),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }
}

impl FromIterator<Option<f64>> for Series {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_propagates_undefined() {
        let a = Series::from(vec![None, Some(3.0), Some(5.0)]);
        let b = Series::from(vec![Some(1.0), None, Some(2.0)]);
        let diff = a.sub(&b);
        assert_eq!(diff.as_slice(), &[None, None, Some(3.0)]);
    }

    #[test]
    fn test_defined_suffix_skips_leading_gap() {
        let s = Series::from(vec![None, None, Some(1.0), Some(2.0)]);
        assert_eq!(s.defined_suffix(), (2, vec![1.0, 2.0]));
    }

    #[test]
    fn test_defined_suffix_all_undefined() {
        let s = Series::undefined(3);
        assert_eq!(s.defined_suffix(), (3, vec![]));
    }

    #[test]
    fn test_right_aligned_pads_front() {
        let inner = Series::from(vec![None, Some(7.0)]);
        let s = Series::right_aligned(5, 3, inner);
        assert_eq!(s.as_slice(), &[None, None, None, None, Some(7.0)]);
    }

    #[test]
    fn test_right_aligned_pads_short_tail() {
        let inner = Series::from(vec![Some(1.0)]);
        let s = Series::right_aligned(4, 1, inner);
        assert_eq!(s.as_slice(), &[None, Some(1.0), None, None]);
    }

    #[test]
    fn test_last_two() {
        let s = Series::from(vec![None, Some(-1.0), Some(2.0)]);
        assert_eq!(s.last_two(), Some((-1.0, 2.0)));

        let s = Series::from(vec![None, Some(2.0)]);
        assert_eq!(s.last_two(), None);
    }

    #[test]
    fn test_serializes_undefined_as_null() {
        let s = Series::from(vec![None, Some(1.5)]);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[null,1.5]");
    }
}
