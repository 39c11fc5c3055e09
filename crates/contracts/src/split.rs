//! SplitRatio and TrainTestSplit - partition boundary model
//!
//! The boundary index is `floor(len * ratio)`. Floor truncation is part of
//! the contract: a 1-entry corpus at ratio 0.8 puts the entry in testing.

use crate::{Entry, SplitError};

/// Fraction of the corpus assigned to the training subset.
///
/// Invariant: strictly inside the open interval (0, 1). NaN and infinities
/// are rejected by the comparisons in [`SplitRatio::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatio(f64);

impl SplitRatio {
    /// Validate and wrap a raw ratio.
    ///
    /// # Errors
    /// Returns [`SplitError::InvalidRatio`] unless `0 < value < 1`.
    pub fn new(value: f64) -> Result<Self, SplitError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(SplitError::InvalidRatio { value })
        }
    }

    /// The raw fraction.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Boundary index for a corpus of `corpus_len` entries: `floor(len * ratio)`.
    ///
    /// Everything before the boundary is training, everything at or after it
    /// is testing.
    pub fn boundary(self, corpus_len: usize) -> usize {
        (corpus_len as f64 * self.0).floor() as usize
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self(0.8)
    }
}

/// The two disjoint output sequences of one partition run.
///
/// Their concatenation (in either order) is a permutation of the input
/// corpus; each sequence keeps the internal order the shuffle produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainTestSplit {
    /// Entries assigned to the training subset.
    pub training: Vec<Entry>,
    /// Entries assigned to the testing subset.
    pub testing: Vec<Entry>,
}

impl TrainTestSplit {
    /// Total number of entries across both subsets.
    pub fn total_len(&self) -> usize {
        self.training.len() + self.testing.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_accepts_open_interval() {
        assert!(SplitRatio::new(0.8).is_ok());
        assert!(SplitRatio::new(0.001).is_ok());
        assert!(SplitRatio::new(0.999).is_ok());
    }

    #[test]
    fn test_ratio_rejects_bounds_and_degenerates() {
        for bad in [0.0, 1.0, -0.2, 1.5, f64::NAN, f64::INFINITY] {
            let result = SplitRatio::new(bad);
            assert!(result.is_err(), "accepted {bad}");
            assert!(matches!(
                result.unwrap_err(),
                SplitError::InvalidRatio { .. }
            ));
        }
    }

    #[test]
    fn test_boundary_uses_floor_truncation() {
        let ratio = SplitRatio::new(0.8).unwrap();
        assert_eq!(ratio.boundary(5), 4);
        assert_eq!(ratio.boundary(1), 0);
        assert_eq!(ratio.boundary(0), 0);

        // 3 * 0.67 = 2.01 -> 2, where rounding up would give 2 as well but
        // 3 * 0.5 = 1.5 -> 1 separates floor from round-half-up
        let ratio = SplitRatio::new(0.67).unwrap();
        assert_eq!(ratio.boundary(3), 2);
        let ratio = SplitRatio::new(0.5).unwrap();
        assert_eq!(ratio.boundary(3), 1);
    }

    #[test]
    fn test_default_ratio() {
        assert_eq!(SplitRatio::default().value(), 0.8);
    }

    #[test]
    fn test_split_total_len() {
        let split = TrainTestSplit {
            training: vec!["a".into(), "b".into()],
            testing: vec!["c".into()],
        };
        assert_eq!(split.total_len(), 3);
    }
}
