use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

/// A fixed-dimension coordinate vector.
///
/// The same type serves world-space positions and cell sizes (with a [`Real`](super::Real)
/// scalar) as well as cell coordinates and field sizes (with an [`Integral`](super::Integral)
/// scalar). Arithmetic is pointwise and iteration walks the axes in order, first axis first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<T, const N: usize>([T; N]);

/// A two dimensional vector.
pub type Vec2<T> = Vector<T, 2>;

/// A three dimensional vector.
pub type Vec3<T> = Vector<T, 3>;

impl<T, const N: usize> Vector<T, N> {
    /// The number of axes.
    pub const DIM: usize = N;

    /// Construct a vector from its axis components.
    #[inline]
    pub const fn new(axes: [T; N]) -> Self {
        Self(axes)
    }

    /// Borrow the axis components.
    #[inline]
    pub const fn axes(&self) -> &[T; N] {
        &self.0
    }

    /// Take the axis components.
    #[inline]
    pub fn into_axes(self) -> [T; N] {
        self.0
    }

    /// Iterate the axis components in axis order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Apply `f` to every axis.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// A vector with every axis set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Combine two vectors axis by axis.
    #[inline]
    pub fn zip_with<U: Copy, V>(
        self,
        other: Vector<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector(std::array::from_fn(|axis| f(self.0[axis], other.0[axis])))
    }

    /// True if `pred` holds on every axis pair.
    #[inline]
    pub fn all_with<U: Copy>(
        &self,
        other: &Vector<U, N>,
        mut pred: impl FnMut(T, U) -> bool,
    ) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(&a, &b)| pred(a, b))
    }
}

impl<T: Copy + Ord, const N: usize> Vector<T, N> {
    /// Pointwise minimum.
    #[inline]
    pub fn min_axes(self, other: Self) -> Self {
        self.zip_with(other, Ord::min)
    }

    /// Pointwise maximum.
    #[inline]
    pub fn max_axes(self, other: Self) -> Self {
        self.zip_with(other, Ord::max)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(axes: [T; N]) -> Self {
        Self(axes)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, axis: usize) -> &T {
        &self.0[axis]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut T {
        &mut self.0[axis]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Implement a pointwise binary operator.
macro_rules! pointwise {
    ($op:ident, $method:ident) => {
        impl<T: Copy + $op<Output = T>, const N: usize> $op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, $op::$method)
            }
        }
    };
}

pointwise!(Add, add);
pointwise!(Sub, sub);
pointwise!(Mul, mul);
pointwise!(Div, div);

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, value) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}
