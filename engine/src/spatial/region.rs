use std::iter::FusedIterator;

use crate::spatial::{CellVector, Integral};

/// An axis-aligned box of cells with inclusive bounds on both ends.
///
/// A `Region` is a description, not a collection: [`Region::iter`] walks the cells lazily and can
/// be called any number of times, always yielding the same sequence. The first axis is the
/// outermost loop and the last axis the innermost, so in two dimensions
/// `(0,0), (0,1), (1,0), (1,1)` is the order for the box `(0,0)..=(1,1)`.
///
/// If `low` exceeds `high` on any axis the region is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region<I, const N: usize> {
    low: CellVector<I, N>,
    high: CellVector<I, N>,
}

impl<I: Integral, const N: usize> Region<I, N> {
    /// Construct the region spanning `low..=high` on every axis.
    #[inline]
    pub const fn new(low: CellVector<I, N>, high: CellVector<I, N>) -> Self {
        Self { low, high }
    }

    /// The inclusive lower corner.
    #[inline]
    pub fn low(&self) -> CellVector<I, N> {
        self.low
    }

    /// The inclusive upper corner.
    #[inline]
    pub fn high(&self) -> CellVector<I, N> {
        self.high
    }

    /// True if the region contains no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.low.all_with(&self.high, |low, high| low <= high)
    }

    /// True if `cell` lies inside the region.
    #[inline]
    pub fn contains(&self, cell: &CellVector<I, N>) -> bool {
        self.low.all_with(cell, |low, c| low <= c) && cell.all_with(&self.high, |c, high| c <= high)
    }

    /// The number of cells in the region, or `None` if it does not fit in a `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        self.low.iter().zip(self.high.iter()).try_fold(1usize, |count, (&low, &high)| {
            let span = high.checked_sub(low)?.checked_add(I::ONE)?.to_usize()?;
            count.checked_mul(span)
        })
    }

    /// Walk every cell of the region in axis order.
    #[inline]
    pub fn iter(&self) -> Cells<I, N> {
        Cells {
            low: self.low,
            high: self.high,
            next: (!self.is_empty()).then_some(self.low),
        }
    }
}

impl<I: Integral, const N: usize> IntoIterator for Region<I, N> {
    type Item = CellVector<I, N>;
    type IntoIter = Cells<I, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<I: Integral, const N: usize> IntoIterator for &Region<I, N> {
    type Item = CellVector<I, N>;
    type IntoIter = Cells<I, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`Region`].
///
/// Works like an odometer: the last axis advances fastest and rolls over into the axis before it.
#[derive(Debug, Clone)]
pub struct Cells<I, const N: usize> {
    low: CellVector<I, N>,
    high: CellVector<I, N>,
    next: Option<CellVector<I, N>>,
}

impl<I: Integral, const N: usize> Iterator for Cells<I, N> {
    type Item = CellVector<I, N>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut following = current;
        let mut axis = N;
        self.next = loop {
            if axis == 0 {
                break None;
            }
            axis -= 1;
            if following[axis] < self.high[axis] {
                following[axis] = following[axis] + I::ONE;
                break Some(following);
            }
            following[axis] = self.low[axis];
        };

        Some(current)
    }
}

impl<I: Integral, const N: usize> FusedIterator for Cells<I, N> {}
