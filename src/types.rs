/* ************************************************************************ **
** This file is part of raymath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                         **
**     http://www.apache.org/licenses/LICENSE-2.0                          **
**     http://opensource.org/licenses/MIT                                  **
** ************************************************************************ */

use std::fmt;
use std::ops::{Deref, DerefMut};

use failure::Backtrace;
#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------

/// A 2-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct V2<X = f64>(pub [X; 2]);

/// A 3-dimensional vector with operations for linear algebra.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct V3<X = f64>(pub [X; 3]);

// ---------------------------------------------------------------------------

/// A dense matrix with 2 rows and fixed width, stored as row vectors.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct M2<V>(pub [V; 2]);

/// A dense matrix with 3 rows and fixed width, stored as row vectors.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct M3<V>(pub [V; 3]);

/// A square dense 2x2 matrix.
pub type M22<X = f64> = M2<V2<X>>;
/// A square dense 3x3 matrix.
pub type M33<X = f64> = M3<V3<X>>;

// ---------------------------------------------------------------------------

/// A vector of fixed dimension `N` with operations for linear algebra.
///
/// This type exists for dimensions beyond what `V2`/`V3` cover;
/// by convention it is used for `N >= 4`, though nothing enforces that.
/// The dimension is part of the type, so vectors of different lengths
/// cannot be mixed in a single operation.
//
// (no serde here: serde's array impls do not cover `[X; N]` generically)
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VecN<X, const N: usize>(pub [X; N]);

/// A dense matrix with `R` rows of arbitrary fixed width, stored as
/// row vectors.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MatN<V, const R: usize>(pub [V; R]);

/// A dense matrix of `R` rows by `C` columns, row-major.
pub type MatMN<X, const R: usize, const C: usize> = MatN<VecN<X, C>, R>;

// ---------------------------------------------------------------------------

/// Names one axis of a 3-dimensional vector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

// ---------------------------------------------------------------------------

/// The number of elements offered to a vector constructor did not match
/// the dimension of the vector type.
#[derive(Debug, Fail)]
#[fail(display = "dimension mismatch: expected {} components, got {}", expected, actual)]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
    backtrace: Backtrace,
}

impl DimensionMismatch {
    pub(crate) fn new(expected: usize, actual: usize) -> Self {
        DimensionMismatch { expected, actual, backtrace: Backtrace::new() }
    }
}

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

macro_rules! impl_array_like {
    ($( $Cn:ident [$T:ident; $n:tt], )*) => {$(
        impl<$T> Deref for $Cn<$T> {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<$T> DerefMut for $Cn<$T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a, $T> IntoIterator for &'a $Cn<$T> {
            type Item = &'a $T;
            type IntoIter = Iter<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, $T> IntoIterator for &'a mut $Cn<$T> {
            type Item = &'a mut $T;
            type IntoIter = IterMut<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // Debug is forwarded without a surrounding "V3(...)", so that the
        // output doubles as a plain array literal in test failures.
        impl<$T: fmt::Debug> fmt::Debug for $Cn<$T> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    )*}
}

impl_array_like! {
    V2 [X; 2],
    V3 [X; 3],
    M2 [V; 2],
    M3 [V; 3],
}

impl<X, const N: usize> Deref for VecN<X, N> {
    type Target = [X; N];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const N: usize> DerefMut for VecN<X, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<'a, X, const N: usize> IntoIterator for &'a VecN<X, N> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, X, const N: usize> IntoIterator for &'a mut VecN<X, N> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<X: fmt::Debug, const N: usize> fmt::Debug for VecN<X, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<V, const R: usize> Deref for MatN<V, R> {
    type Target = [V; R];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<V, const R: usize> DerefMut for MatN<V, R> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

impl<'a, V, const R: usize> IntoIterator for &'a MatN<V, R> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, V, const R: usize> IntoIterator for &'a mut MatN<V, R> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<V: fmt::Debug, const R: usize> fmt::Debug for MatN<V, R> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_the_backing_array() {
        assert_eq!(format!("{:?}", V2([1.0, 2.0])), "[1.0, 2.0]");
        assert_eq!(
            format!("{:?}", M2([V2([1, 0]), V2([0, 1])])),
            "[[1, 0], [0, 1]]",
        );
        assert_eq!(format!("{:?}", VecN([1, 2, 3, 4, 5])), "[1, 2, 3, 4, 5]");
    }

    #[test]
    fn dimension_mismatch_message() {
        let e = DimensionMismatch::new(5, 4);
        assert_eq!(
            format!("{}", e),
            "dimension mismatch: expected 5 components, got 4",
        );
    }

    #[cfg(feature = "serde-support")]
    #[test]
    fn serde_round_trip() {
        let v = V3([1.0, -2.5, 0.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,-2.5,0.0]");
        assert_eq!(serde_json::from_str::<V3>(&json).unwrap(), v);

        let m = M2([V2([1.0, 2.0]), V2([3.0, 4.0])]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<M22>(&json).unwrap(), m);
    }
}
