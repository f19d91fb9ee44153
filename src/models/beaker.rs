//! A single beaker: a bounded stack of liquid units.

use super::ColorId;

/// A beaker holding liquid units in a bounded stack.
///
/// Units are stored bottom to top; only filled slots are stored, so empty
/// space is always above the topmost unit and the occupied count can never
/// exceed `capacity` without going through [`Beaker::push`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beaker {
    units: Vec<ColorId>,
    capacity: usize,
}

impl Beaker {
    /// Creates an empty beaker with the given capacity.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            units: Vec::new(),
            capacity,
        }
    }

    /// Creates a beaker from bottom-to-top units and a capacity.
    ///
    /// Returns `None` if the units do not fit.
    #[must_use]
    pub fn from_units(units: Vec<ColorId>, capacity: usize) -> Option<Self> {
        if units.len() > capacity {
            return None;
        }
        Some(Self { units, capacity })
    }

    /// Maximum number of units this beaker can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of filled slots.
    #[must_use]
    pub fn fill(&self) -> usize {
        self.units.len()
    }

    /// Number of empty slots remaining.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity - self.units.len()
    }

    /// True when no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// True when every slot is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.units.len() == self.capacity
    }

    /// The units bottom to top.
    #[must_use]
    pub fn units(&self) -> &[ColorId] {
        &self.units
    }

    /// The topmost unit's color, if any.
    #[must_use]
    pub fn top(&self) -> Option<ColorId> {
        self.units.last().copied()
    }

    /// Length of the contiguous same-colored run at the top.
    #[must_use]
    pub fn top_run(&self) -> usize {
        let Some(top) = self.top() else {
            return 0;
        };
        self.units.iter().rev().take_while(|&&c| c == top).count()
    }

    /// Pushes one unit onto the top, with no color-matching rule.
    ///
    /// Returns `false` (and changes nothing) when the beaker is full.
    pub fn push(&mut self, color: ColorId) -> bool {
        if self.is_full() {
            return false;
        }
        self.units.push(color);
        true
    }

    /// Removes and returns the topmost unit.
    pub fn pop(&mut self) -> Option<ColorId> {
        self.units.pop()
    }

    /// How many units a pour from `self` into `other` would move.
    ///
    /// Zero when the top colors differ (and `other` is non-empty) or when
    /// `other` has no free space; otherwise the top run length capped by
    /// the destination's free space.
    #[must_use]
    pub fn pourable_into(&self, other: &Self) -> usize {
        if !other.is_empty() && self.top() != other.top() {
            return 0;
        }
        self.top_run().min(other.free_space())
    }

    /// Pours the top same-colored run into `other`.
    ///
    /// Moves `min(top run, free space)` units; returns whether anything
    /// moved. A rejected pour leaves both beakers untouched.
    pub fn pour_into(&mut self, other: &mut Self) -> bool {
        let amount = self.pourable_into(other);
        if amount == 0 {
            return false;
        }
        for _ in 0..amount {
            if let Some(unit) = self.pop() {
                other.push(unit);
            }
        }
        true
    }

    /// How many units a pour-back from `self` into `other` could move.
    ///
    /// Pour-back peels units off the top one at a time with no color rule
    /// on the destination. It never takes more than the top run, and when
    /// that run is not the whole fill it leaves one unit of the run behind.
    #[must_use]
    pub fn pour_back_limit(&self, other: &Self) -> usize {
        let mut run = self.top_run();
        if run != self.fill() {
            run -= 1;
        }
        run.min(other.free_space())
    }

    /// Pours up to `amount` units back into `other`, ignoring color match.
    ///
    /// Returns whether anything moved.
    pub fn pour_back_into(&mut self, other: &mut Self, amount: usize) -> bool {
        let amount = self.pour_back_limit(other).min(amount);
        if amount == 0 {
            return false;
        }
        for _ in 0..amount {
            if let Some(unit) = self.pop() {
                other.push(unit);
            }
        }
        true
    }

    /// Grows the capacity by one slot.
    pub fn expand(&mut self) {
        self.capacity += 1;
    }

    /// Shrinks the capacity by one slot.
    ///
    /// Rejected (no-op, returns `false`) when capacity already equals the
    /// fill count — a beaker can never hold more units than its capacity —
    /// or when only one slot remains. The one-slot floor keeps every
    /// beaker representable in the text format.
    pub fn shrink(&mut self) -> bool {
        if self.capacity == self.units.len() || self.capacity <= 1 {
            return false;
        }
        self.capacity -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beaker(labels: &[&str], capacity: usize) -> Beaker {
        let units = labels
            .iter()
            .map(|l| ColorId::from_label(l).unwrap())
            .collect();
        Beaker::from_units(units, capacity).unwrap()
    }

    #[test]
    fn test_push_respects_capacity() {
        let mut b = Beaker::new(2);
        assert!(b.push(ColorId(0)));
        assert!(b.push(ColorId(1)));
        assert!(!b.push(ColorId(2)));
        assert_eq!(b.fill(), 2);
    }

    #[test]
    fn test_from_units_rejects_overflow() {
        assert!(Beaker::from_units(vec![ColorId(0); 3], 2).is_none());
    }

    #[test]
    fn test_top_run() {
        assert_eq!(beaker(&["A", "A", "B"], 4).top_run(), 1);
        assert_eq!(beaker(&["B", "A", "A"], 4).top_run(), 2);
        assert_eq!(beaker(&["A", "A", "A"], 3).top_run(), 3);
        assert_eq!(Beaker::new(3).top_run(), 0);
    }

    #[test]
    fn test_pour_moves_top_run_into_empty() {
        let mut src = beaker(&["B", "A", "A"], 4);
        let mut dst = Beaker::new(4);
        assert!(src.pour_into(&mut dst));
        assert_eq!(src, beaker(&["B"], 4));
        assert_eq!(dst, beaker(&["A", "A"], 4));
    }

    #[test]
    fn test_pour_limited_by_free_space() {
        let mut src = beaker(&["A", "A", "A"], 3);
        let mut dst = beaker(&["A"], 2);
        assert!(src.pour_into(&mut dst));
        assert_eq!(src.fill(), 2);
        assert!(dst.is_full());
    }

    #[test]
    fn test_pour_rejected_on_color_mismatch() {
        let mut src = beaker(&["A"], 2);
        let mut dst = beaker(&["B"], 2);
        assert!(!src.pour_into(&mut dst));
        assert_eq!(src, beaker(&["A"], 2));
        assert_eq!(dst, beaker(&["B"], 2));
    }

    #[test]
    fn test_pour_rejected_into_full() {
        let mut src = beaker(&["A"], 2);
        let mut dst = beaker(&["A", "A"], 2);
        assert!(!src.pour_into(&mut dst));
        assert_eq!(src.fill(), 1);
    }

    #[test]
    fn test_pour_from_empty_is_noop() {
        let mut src = Beaker::new(2);
        let mut dst = Beaker::new(2);
        assert!(!src.pour_into(&mut dst));
    }

    #[test]
    fn test_pour_back_leaves_one_behind() {
        // Run of two "A" on top of a "B": pour-back may move at most one.
        let mut src = beaker(&["B", "A", "A"], 4);
        let mut dst = beaker(&["C"], 4);
        assert_eq!(src.pour_back_limit(&dst), 1);
        assert!(src.pour_back_into(&mut dst, 5));
        assert_eq!(src, beaker(&["B", "A"], 4));
        assert_eq!(dst, beaker(&["C", "A"], 4));
    }

    #[test]
    fn test_pour_back_can_empty_uniform_beaker() {
        let mut src = beaker(&["A", "A"], 2);
        let mut dst = Beaker::new(4);
        assert_eq!(src.pour_back_limit(&dst), 2);
        assert!(src.pour_back_into(&mut dst, 2));
        assert!(src.is_empty());
    }

    #[test]
    fn test_pour_back_ignores_color_match() {
        let mut src = beaker(&["A", "A"], 2);
        let mut dst = beaker(&["B"], 2);
        assert!(src.pour_back_into(&mut dst, 1));
        assert_eq!(dst, beaker(&["B", "A"], 2));
    }

    #[test]
    fn test_shrink_guard_at_fill() {
        let mut b = beaker(&["A", "B", "C"], 3);
        assert!(!b.shrink());
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_shrink_and_expand() {
        let mut b = beaker(&["A"], 3);
        assert!(b.shrink());
        assert!(b.shrink());
        assert!(!b.shrink()); // capacity == fill now
        assert_eq!(b.capacity(), 1);
        b.expand();
        assert_eq!(b.capacity(), 2);
    }

    #[test]
    fn test_empty_beaker_keeps_one_slot() {
        let mut b = Beaker::new(2);
        assert!(b.shrink());
        assert!(!b.shrink());
        assert_eq!(b.capacity(), 1);
    }
}
