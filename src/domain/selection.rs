// ============================================================================
// Selection Range
// Caret and selection endpoints within a masked string
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A caret or selection as char offsets into the masked string.
///
/// The range is always normalized such that `start <= end`. A collapsed
/// caret has `start == end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionRange {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalizing so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed caret at `pos`.
    #[inline]
    pub fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` if the selection is a bare caret.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of chars covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Alias of [`is_collapsed`](Self::is_collapsed).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Shift both ends right by `delta`.
    #[inline]
    pub fn shifted(self, delta: usize) -> Self {
        Self {
            start: self.start.saturating_add(delta),
            end: self.end.saturating_add(delta),
        }
    }

    /// Saturate both ends into `[min, max]`.
    ///
    /// If `min > max` the bounds collapse onto `max`.
    #[inline]
    pub fn clamped(self, min: usize, max: usize) -> Self {
        let min = min.min(max);
        Self::new(self.start.clamp(min, max), self.end.clamp(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn selection_range_collapsed() {
        let caret = SelectionRange::collapsed(3);
        assert!(caret.is_collapsed());
        assert!(caret.is_empty());
        assert!(!SelectionRange::new(3, 5).is_collapsed());
    }

    #[test]
    fn selection_range_shifted() {
        assert_eq!(SelectionRange::new(2, 4).shifted(1), SelectionRange::new(3, 5));
        assert_eq!(
            SelectionRange::collapsed(usize::MAX).shifted(1),
            SelectionRange::collapsed(usize::MAX)
        );
    }

    #[test]
    fn selection_range_clamped() {
        assert_eq!(SelectionRange::new(0, 50).clamped(1, 6), SelectionRange::new(1, 6));
        assert_eq!(SelectionRange::new(3, 4).clamped(1, 6), SelectionRange::new(3, 4));
        // inverted bounds collapse onto the upper bound
        assert_eq!(SelectionRange::new(0, 9).clamped(5, 2), SelectionRange::collapsed(2));
    }
}
