//! The board: an ordered sequence of beakers and its mutations.

use super::{Beaker, ColorId};

/// An ordered sequence of beakers.
///
/// Order matters for insertion position and serialization row order;
/// beakers are otherwise independent. Every mutation is total: an invalid
/// request (out-of-range index, violated capacity or color rule) is
/// rejected with no state change, signalled by the `bool` return.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    beakers: Vec<Beaker>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            beakers: Vec::new(),
        }
    }

    /// Creates a board of `count` empty beakers of the same capacity.
    #[must_use]
    pub fn with_beakers(count: usize, capacity: usize) -> Self {
        Self {
            beakers: vec![Beaker::new(capacity); count],
        }
    }

    /// Creates a board from existing beakers.
    #[must_use]
    pub fn from_beakers(beakers: Vec<Beaker>) -> Self {
        Self { beakers }
    }

    /// The beakers in board order.
    #[must_use]
    pub fn beakers(&self) -> &[Beaker] {
        &self.beakers
    }

    /// The beaker at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Beaker> {
        self.beakers.get(index)
    }

    /// Number of beakers on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beakers.len()
    }

    /// True when the board has no beakers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beakers.is_empty()
    }

    /// Whether a pour from `src` to `dst` would move at least one unit.
    #[must_use]
    pub fn can_pour(&self, src: usize, dst: usize) -> bool {
        if src == dst {
            return false;
        }
        match (self.beakers.get(src), self.beakers.get(dst)) {
            (Some(a), Some(b)) => a.pourable_into(b) > 0,
            _ => false,
        }
    }

    /// Pours the top same-colored run from `src` onto `dst`.
    ///
    /// See [`Beaker::pour_into`] for the movement rule. Rejected pours
    /// (bad indices, src == dst, mismatched colors, full destination)
    /// change nothing and return `false`.
    pub fn pour(&mut self, src: usize, dst: usize) -> bool {
        let Some((from, to)) = self.pair_mut(src, dst) else {
            return false;
        };
        from.pour_into(to)
    }

    /// Whether a pour-back from `src` to `dst` would move at least one unit.
    #[must_use]
    pub fn can_pour_back(&self, src: usize, dst: usize) -> bool {
        if src == dst {
            return false;
        }
        match (self.beakers.get(src), self.beakers.get(dst)) {
            (Some(a), Some(b)) => a.pour_back_limit(b) > 0,
            _ => false,
        }
    }

    /// Pours up to `amount` units from `src` back into `dst`, no color rule.
    pub fn pour_back(&mut self, src: usize, dst: usize, amount: usize) -> bool {
        let Some((from, to)) = self.pair_mut(src, dst) else {
            return false;
        };
        from.pour_back_into(to, amount)
    }

    /// Adds one unit of `color` onto the beaker at `index`.
    ///
    /// This bypasses the pour-matching rule and may leave mixed colors on
    /// top; sortedness is the player's goal, not a structural constraint.
    /// Rejected when the beaker is full or the index is out of range.
    pub fn add_unit(&mut self, index: usize, color: ColorId) -> bool {
        self.beakers
            .get_mut(index)
            .is_some_and(|beaker| beaker.push(color))
    }

    /// Removes the topmost unit from the beaker at `index`.
    pub fn remove_top(&mut self, index: usize) -> bool {
        self.beakers
            .get_mut(index)
            .is_some_and(|beaker| beaker.pop().is_some())
    }

    /// Inserts a new empty beaker of `capacity` at position `at`.
    ///
    /// `at` past the end appends. Subsequent beakers shift right.
    pub fn insert_beaker(&mut self, at: usize, capacity: usize) {
        let at = at.min(self.beakers.len());
        self.beakers.insert(at, Beaker::new(capacity));
    }

    /// Removes the beaker at `index` regardless of its contents.
    ///
    /// Removing the last beaker is permitted and yields an empty board.
    pub fn remove_beaker(&mut self, index: usize) -> bool {
        if index >= self.beakers.len() {
            return false;
        }
        self.beakers.remove(index);
        true
    }

    /// Grows (`delta > 0`) or shrinks (`delta < 0`) a beaker's capacity by
    /// one slot. Shrinking below the current fill count is rejected.
    pub fn resize_beaker(&mut self, index: usize, delta: isize) -> bool {
        let Some(beaker) = self.beakers.get_mut(index) else {
            return false;
        };
        match delta.signum() {
            1 => {
                beaker.expand();
                true
            }
            -1 => beaker.shrink(),
            _ => false,
        }
    }

    /// Splits out mutable references to two distinct beakers.
    fn pair_mut(&mut self, src: usize, dst: usize) -> Option<(&mut Beaker, &mut Beaker)> {
        if src == dst || src >= self.beakers.len() || dst >= self.beakers.len() {
            return None;
        }
        if src < dst {
            let (left, right) = self.beakers.split_at_mut(dst);
            Some((&mut left[src], &mut right[0]))
        } else {
            let (left, right) = self.beakers.split_at_mut(src);
            Some((&mut right[0], &mut left[dst]))
        }
    }
}
