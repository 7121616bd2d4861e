/* ************************************************************************ **
** This file is part of raymath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                         **
**     http://www.apache.org/licenses/LICENSE-2.0                          **
**     http://opensource.org/licenses/MIT                                  **
** ************************************************************************ */

//! Methods on the matrix types.
//!
//! Matrices are containers of row vectors. Both multiplication orders are
//! supported (`&m * v` with a column vector, `v * &m` with a row vector);
//! the rotation helpers in `vee` use the column form.

use num_traits::{One, Zero};

use crate::traits::internal::{PrimitiveFloat, PrimitiveSemiring};
use crate::traits::{Field, Semiring};
use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices.
///
/// The shape of the matrix is inferred solely from how it is used. There
/// is also a static method form of this for easily supplying a type hint
/// (e.g. `M33::from_fn`).
#[inline(always)]
pub fn from_fn<M: FromFn<F>, B, F>(f: F) -> M
where F: FnMut(usize, usize) -> B,
{ FromFn::from_fn(f) }

/// Construct a matrix from a 2D array (of rows).
///
/// The signature is such that type inference works in the forward
/// direction, deciding the output matrix shape from the input array.
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// Construct an identity matrix (using type inference).
///
/// This is also available as a static method on the square matrix types.
#[inline(always)]
pub fn eye<M: One + IsMatrix>() -> M
{ One::one() }

/// Construct a zero matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn zero<M: Zero + IsMatrix>() -> M
{ Zero::zero() }

// -------------------------- END PUBLIC API ---------------------------------

/// Implementation detail of free functions that defer to external traits.
///
/// Its purpose is to prevent those functions from producing non-matrix
/// types.
pub trait IsMatrix: Sized { }

/// Implementation detail of the free function `mat::from_fn`.
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}

/// Implementation detail of the free function `mat::from_array`.
pub trait IntoMatrix: Sized {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

// ---------------------------------------------------------------------------
// The fixed square matrices.

macro_rules! impl_square_fixed {
    ($( {$Mn:ident $Vn:ident $n:tt} )*) => {$(
        impl<X> IsMatrix for $Mn<$Vn<X>> { }

        impl<X, F> FromFn<F> for $Mn<$Vn<X>>
        where F: FnMut(usize, usize) -> X,
        {
            #[inline]
            fn from_fn(mut f: F) -> Self
            { $Mn(std::array::from_fn(|r| $Vn(std::array::from_fn(|c| f(r, c))))) }
        }

        impl<X> IntoMatrix for [[X; $n]; $n] {
            type Matrix = $Mn<$Vn<X>>;

            #[inline(always)]
            fn into_matrix(self) -> Self::Matrix
            { $Mn(self.map($Vn)) }
        }

        impl<X: Semiring> Zero for $Mn<$Vn<X>>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { from_fn(|_, _| X::zero()) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(|row| row.iter().all(Zero::is_zero)) }
        }

        impl<X: Semiring> One for $Mn<$Vn<X>>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn one() -> Self
            { from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

            #[inline]
            fn is_one(&self) -> bool
            {
                self.iter().enumerate().all(|(r, row)| {
                    row.iter().enumerate().all(|(c, x)| match r == c {
                        true => x.is_one(),
                        false => x.is_zero(),
                    })
                })
            }
        }

        impl<X> $Mn<$Vn<X>> {
            /// Construct the identity matrix.
            ///
            /// This is also available as the free function `mat::eye`;
            /// this static method just provides an easy way to supply a
            /// type hint.
            #[inline(always)]
            pub fn eye() -> Self
            where Self: One,
            { One::one() }

            /// Construct the zero matrix.
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Construct a matrix from a function on indices.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { FromFn::from_fn(f) }

            /// The row vectors, in reading order.
            #[inline(always)]
            pub fn rows(&self) -> [$Vn<X>; $n]
            where X: Copy,
            { self.0 }

            /// The column vectors, in reading order.
            #[inline(always)]
            pub fn cols(&self) -> [$Vn<X>; $n]
            where X: Copy,
            { self.t().0 }

            /// Matrix transpose.
            #[inline]
            pub fn t(&self) -> Self
            where X: Copy,
            { Self::from_fn(|r, c| self[c][r]) }

            /// Cast into a plain array of arrays.
            #[inline(always)]
            pub fn into_array(self) -> [[X; $n]; $n]
            { self.0.map(|row| row.0) }

            /// Map each scalar element of the matrix.
            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Mn<$Vn<B>>
            where F: FnMut(X) -> B,
            { $Mn(self.0.map(|row| row.map(&mut f))) }
        }
    )*}
}

impl_square_fixed! {
    {M2 V2 2}
    {M3 V3 3}
}

// ---------------------------------------------------------------------------
// Rotation matrices. The vector `rotate_*` methods build one of these and
// multiply.

impl<X: Field> M22<X>
where X: PrimitiveFloat,
{
    /// The matrix of a counterclockwise rotation by `theta` radians.
    ///
    /// A clockwise rotation is `rotation(-theta)`.
    pub fn rotation(theta: X) -> Self {
        let (sin, cos) = (X::sin(theta), X::cos(theta));
        from_array([
            [cos, -sin],
            [sin,  cos],
        ])
    }
}

impl<X: Field> M33<X>
where X: PrimitiveFloat,
{
    /// The matrix of a rotation about the x axis by `theta` radians.
    pub fn rotation_x(theta: X) -> Self {
        let (sin, cos) = (X::sin(theta), X::cos(theta));
        from_array([
            [X::one(), X::zero(), X::zero()],
            [X::zero(), cos, -sin],
            [X::zero(), sin,  cos],
        ])
    }

    /// The matrix of a rotation about the y axis by `theta` radians.
    pub fn rotation_y(theta: X) -> Self {
        let (sin, cos) = (X::sin(theta), X::cos(theta));
        from_array([
            [cos, X::zero(), sin],
            [X::zero(), X::one(), X::zero()],
            [-sin, X::zero(), cos],
        ])
    }

    /// The matrix of a rotation about the z axis by `theta` radians.
    pub fn rotation_z(theta: X) -> Self {
        let (sin, cos) = (X::sin(theta), X::cos(theta));
        from_array([
            [cos, -sin, X::zero()],
            [sin,  cos, X::zero()],
            [X::zero(), X::zero(), X::one()],
        ])
    }
}

// ---------------------------------------------------------------------------
// The generic fixed-shape matrix.

impl<X: Semiring, const R: usize, const C: usize> Zero for MatMN<X, R, C>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { MatMN::from_fn(|_, _| X::zero()) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(|row| row.iter().all(Zero::is_zero)) }
}

impl<X, const R: usize, const C: usize> MatMN<X, R, C> {
    /// Construct the zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    where Self: Zero,
    { Zero::zero() }

    /// Construct a matrix from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { MatN(std::array::from_fn(|r| VecN::from_fn(|c| f(r, c)))) }

    /// Construct from an array of rows, copied element-wise.
    ///
    /// The shape is part of the array's type, so a misshapen source
    /// cannot be expressed at all, let alone misbehave.
    #[inline(always)]
    pub fn from_array(rows: [[X; C]; R]) -> Self
    { MatN(rows.map(VecN)) }

    /// The row vectors, in reading order.
    #[inline(always)]
    pub fn rows(&self) -> [VecN<X, C>; R]
    where X: Copy,
    { self.0 }

    /// Cast into a plain array of arrays.
    #[inline(always)]
    pub fn into_array(self) -> [[X; C]; R]
    { self.0.map(|row| row.0) }

    /// Map each scalar element of the matrix.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> MatMN<B, R, C>
    where F: FnMut(X) -> B,
    { MatN(self.0.map(|row| row.map(&mut f))) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_eye() {
        assert_eq!(from_array([[0, 0], [0, 0]]), M22::zero());
        assert_eq!(from_array([[1, 0], [0, 1]]), M22::eye());
        assert_eq!(from_array([[0, 0, 0], [0, 0, 0], [0, 0, 0]]), M33::zero());
        assert_eq!(from_array([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), M33::eye());
        assert!(from_array([[0, 0], [0, 0]]).is_zero());
        assert!(!from_array([[0, 1], [0, 0]]).is_zero());
        assert!(from_array([[1, 0], [0, 1]]).is_one());
        assert!(!from_array([[2, 0], [0, 1]]).is_one());
        assert!(!from_array([[1, -1], [0, 1]]).is_one());
    }

    #[test]
    fn free_constructors() {
        assert_eq!(eye::<M33<f64>>(), M33::eye());
        assert_eq!(zero::<M22<f64>>(), M22::zero());

        let m: M22<usize> = from_fn(|r, c| 2 * r + c);
        assert_eq!(m, from_array([[0, 1], [2, 3]]));
    }

    #[test]
    fn mult_identity() {
        for _ in 0..10 {
            let m = M22::from_fn(|_, _| rand::random::<f64>());
            assert_eq!(&m * &M22::eye(), m);
            assert_eq!(&M22::eye() * &m, m);

            let m = M33::from_fn(|_, _| rand::random::<f64>());
            assert_eq!(&m * &M33::eye(), m);
            assert_eq!(&M33::eye() * &m, m);
        }
    }

    #[test]
    fn mult_2x2() {
        let a = from_array([[1.0, 3.0], [-4.0, 2.0]]);
        let b = from_array([[7.0, -3.0], [-1.0, 5.0]]);
        assert_eq!(&a * &b, from_array([[4.0, 12.0], [-30.0, 22.0]]));
    }

    #[test]
    fn rows_and_cols() {
        let m: M22<i32> = from_array([[1, 2], [3, 4]]);
        assert_eq!(m.rows(), [V2([1, 2]), V2([3, 4])]);
        assert_eq!(m.cols(), [V2([1, 3]), V2([2, 4])]);

        let m: M33<i32> = from_array([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.cols(), [V3([1, 4, 7]), V3([2, 5, 8]), V3([3, 6, 9])]);
    }

    #[test]
    fn transpose_is_involutive() {
        let m: M33<i32> = from_array([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.t().t(), m);
    }

    #[test]
    fn rotation_entries() {
        let theta = 0.3;
        let rot = M22::rotation(theta);
        assert_eq!(rot[0][0], theta.cos());
        assert_eq!(rot[0][1], -theta.sin());
        assert_eq!(rot[1][0], theta.sin());
        assert_eq!(rot[1][1], theta.cos());

        let rot = M33::rotation_z(theta);
        assert_eq!(rot[0][0], theta.cos());
        assert_eq!(rot[0][1], -theta.sin());
        assert_eq!(rot[2][2], 1.0);
    }

    #[test]
    fn generic_construction() {
        let m = MatMN::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.into_array(), [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.rows()[1], VecN([4.0, 5.0, 6.0]));
        assert_eq!(m[0][2], 3.0);

        assert_eq!(
            MatMN::<f64, 2, 3>::zero().into_array(),
            [[0.0; 3]; 2],
        );
    }

    #[test]
    fn map_scales_entries() {
        let m: M22<f64> = from_array([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.map(|x| 2.0 * x), from_array([[2.0, 4.0], [6.0, 8.0]]));
    }
}
