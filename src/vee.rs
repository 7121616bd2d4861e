/* ************************************************************************ **
** This file is part of raymath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                         **
**     http://www.apache.org/licenses/LICENSE-2.0                          **
**     http://opensource.org/licenses/MIT                                  **
** ************************************************************************ */

//! Methods on the vector types.
//!
//! The small fixed sizes `V2`/`V3` come first, followed by the generic
//! `VecN`. Operator impls (`+`, `*`, matrix products...) live in `ops`.

use std::convert::TryFrom;

use num_traits::Zero;

use crate::traits::internal::{PrimitiveFloat, PrimitiveRing, PrimitiveSemiring};
use crate::traits::{Field, Ring, Semiring};
use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Inner product of vectors.
///
/// This is just `dot` as a free function, because everyone loves symmetry.
#[inline(always)]
pub fn dot<V>(a: &V, b: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(a, b) }

/// Element type of the vector.
pub type ScalarT<V> = <V as IsV>::Scalar;

/// Trait that provides associated types for the vector types.
pub trait IsV {
    type Scalar;
}

/// Implementation detail of the inherent method `dot`.
///
/// Without this, the free function `dot` could not be generic over
/// vectors of different dimension.
pub trait Dot: IsV {
    fn dot(&self, b: &Self) -> ScalarT<Self>;
}

// ---------------------------------------------------------------------------
// Methods shared by the fixed-size vector types.

macro_rules! impl_v_common {
    ($( {$Vn:ident $n:tt} )*) => {$(
        impl<X> IsV for $Vn<X>
        { type Scalar = X; }

        impl<X: Semiring> Dot for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn dot(&self, other: &$Vn<X>) -> ScalarT<Self>
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }
        }

        impl<X: Semiring> Zero for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }

        impl<X: Semiring> std::iter::Sum for $Vn<X>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item = $Vn<X>>>(iter: I) -> Self
            { iter.fold($Vn::zero(), |a, b| a + b) }
        }

        impl<'a, X: Semiring> std::iter::Sum<&'a $Vn<X>> for $Vn<X>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item = &'a $Vn<X>>>(iter: I) -> Self
            { iter.fold($Vn::zero(), |a, b| a + b) }
        }

        unsafe impl<X> slice_of_array::IsSliceomorphic for $Vn<X> {
            type Element = X;
            const LEN: usize = $n;
        }

        impl<X> $Vn<X> {
            /// Get a zero vector.
            ///
            /// This is also available through `num_traits::Zero`; this
            /// static method just provides an easy way to supply a type
            /// hint.
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Construct a fixed-size vector from a function on indices.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { $Vn(std::array::from_fn(f)) }

            /// Get the inner product of two vectors.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> ScalarT<Self>
            where Self: Dot,
            { Dot::dot(self, other) }

            /// Get the vector's squared magnitude.
            #[inline(always)]
            pub fn sqnorm(&self) -> ScalarT<Self>
            where Self: Dot,
            { Dot::dot(self, self) }

            /// Get the vector's magnitude.
            #[inline(always)]
            pub fn norm(&self) -> ScalarT<Self>
            where Self: Dot, ScalarT<Self>: PrimitiveFloat,
            { self.sqnorm().sqrt() }

            /// Normalize the vector.
            ///
            /// The zero vector has no direction and is returned unchanged
            /// rather than dividing by zero.
            #[inline]
            pub fn unit(&self) -> Self
            where X: Field + PrimitiveFloat,
            {
                if self.is_zero() {
                    return *self;
                }
                self / self.norm()
            }

            /// Apply a function to each element.
            #[inline]
            pub fn map<B, F>(self, f: F) -> $Vn<B>
            where F: FnMut(X) -> B,
            { $Vn(self.0.map(f)) }
        }
    )*}
}

impl_v_common! {
    {V2 2}
    {V3 3}
}

// ---------------------------------------------------------------------------
// V2 specializations.

impl<X> V2<X> {
    /// Exchange the two components.
    #[inline]
    pub fn swap(self) -> Self {
        let V2([x, y]) = self;
        V2([y, x])
    }
}

impl<X: Semiring> V2<X>
where X: PrimitiveSemiring,
{
    /// Upgrade to a 3-dimensional vector. The new z component is zero.
    #[inline]
    pub fn extend(self) -> V3<X> {
        let V2([x, y]) = self;
        V3([x, y, X::zero()])
    }
}

impl<X: Ring> V2<X>
where X: PrimitiveRing,
{
    /// The 2-dimensional cross product: the signed area of the
    /// parallelogram spanned by the two vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> X
    { self[0] * other[1] - self[1] * other[0] }
}

impl<X: Field> V2<X>
where X: PrimitiveFloat,
{
    /// Get the angle (in radians) between this vector and another.
    ///
    /// Computed as the arc cosine of the inner product of the unit
    /// vectors; when rounding pushes that product outside `[-1, 1]`,
    /// the result is NaN.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> X
    { X::acos(V2::dot(&self.unit(), &other.unit())) }

    /// Rotate counterclockwise by `theta` radians.
    #[inline]
    pub fn rotate_ccw(&self, theta: X) -> Self
    { &M22::rotation(theta) * self }

    /// Rotate clockwise by `theta` radians.
    #[inline]
    pub fn rotate_cw(&self, theta: X) -> Self
    { &M22::rotation(-theta) * self }
}

// ---------------------------------------------------------------------------
// V3 specializations.

impl<X> V3<X> {
    /// Cyclically roll the components one place leftward:
    /// `(x, y, z) -> (y, z, x)`.
    #[inline]
    pub fn roll_left(self) -> Self {
        let V3([x, y, z]) = self;
        V3([y, z, x])
    }

    /// Cyclically roll the components one place rightward:
    /// `(x, y, z) -> (z, x, y)`.
    #[inline]
    pub fn roll_right(self) -> Self {
        let V3([x, y, z]) = self;
        V3([z, x, y])
    }

    /// Downgrade to a 2-dimensional vector by dropping the component on
    /// the named axis.
    #[inline]
    pub fn without(self, axis: Axis) -> V2<X> {
        let V3([x, y, z]) = self;
        match axis {
            Axis::X => V2([y, z]),
            Axis::Y => V2([x, z]),
            Axis::Z => V2([x, y]),
        }
    }
}

impl<X: Ring> V3<X>
where X: PrimitiveRing,
{
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

impl<X: Field> V3<X>
where X: PrimitiveFloat,
{
    /// Get the angle (in radians) between this vector and another.
    ///
    /// The inner product is divided by the product of the magnitudes,
    /// with no clamping and no zero check; a zero-length input or
    /// unlucky rounding near parallel vectors yields NaN.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> X
    { X::acos(V3::dot(self, other) / (self.norm() * other.norm())) }

    /// Rotate about the x axis by `theta` radians.
    #[inline]
    pub fn rotate_x(&self, theta: X) -> Self
    { &M33::rotation_x(theta) * self }

    /// Rotate about the y axis by `theta` radians.
    #[inline]
    pub fn rotate_y(&self, theta: X) -> Self
    { &M33::rotation_y(theta) * self }

    /// Rotate about the z axis by `theta` radians.
    #[inline]
    pub fn rotate_z(&self, theta: X) -> Self
    { &M33::rotation_z(theta) * self }
}

// ---------------------------------------------------------------------------
// The generic fixed-dimension vector.

impl<X, const N: usize> IsV for VecN<X, N>
{ type Scalar = X; }

impl<X: Semiring, const N: usize> Dot for VecN<X, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn dot(&self, other: &Self) -> ScalarT<Self>
    { self.iter().zip(other).map(|(&a, &b)| a * b).sum() }
}

impl<X: Semiring, const N: usize> Zero for VecN<X, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { VecN([X::zero(); N]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(Zero::is_zero) }
}

impl<X: Semiring, const N: usize> std::iter::Sum for VecN<X, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item = VecN<X, N>>>(iter: I) -> Self
    { iter.fold(VecN::zero(), |a, b| a + b) }
}

impl<'a, X: Semiring, const N: usize> std::iter::Sum<&'a VecN<X, N>> for VecN<X, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item = &'a VecN<X, N>>>(iter: I) -> Self
    { iter.fold(VecN::zero(), |a, b| a + b) }
}

unsafe impl<X, const N: usize> slice_of_array::IsSliceomorphic for VecN<X, N> {
    type Element = X;
    const LEN: usize = N;
}

impl<X, const N: usize> VecN<X, N> {
    /// Get a zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    where Self: Zero,
    { Zero::zero() }

    /// Construct a fixed-size vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { VecN(std::array::from_fn(f)) }

    /// Construct from a slice of exactly `N` components.
    ///
    /// A slice of any other length is reported as an error; elements are
    /// copied in order, never truncated or zero-padded.
    pub fn try_from_slice(xs: &[X]) -> Result<Self, DimensionMismatch>
    where X: Copy,
    {
        if xs.len() != N {
            return Err(DimensionMismatch::new(N, xs.len()));
        }
        Ok(VecN::from_fn(|i| xs[i]))
    }

    /// Get the inner product of two vectors.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> ScalarT<Self>
    where Self: Dot,
    { Dot::dot(self, other) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> ScalarT<Self>
    where Self: Dot,
    { Dot::dot(self, self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> ScalarT<Self>
    where Self: Dot, ScalarT<Self>: PrimitiveFloat,
    { self.sqnorm().sqrt() }

    /// Normalize the vector.
    ///
    /// The zero vector has no direction and is returned unchanged rather
    /// than dividing by zero.
    #[inline]
    pub fn unit(&self) -> Self
    where X: Field + PrimitiveFloat,
    {
        if self.is_zero() {
            return *self;
        }
        self / self.norm()
    }

    /// Get the angle (in radians) between this vector and another.
    ///
    /// Same contract as `V3::angle_to`: the division by the magnitude
    /// product is unguarded, so degenerate inputs yield NaN.
    #[inline]
    pub fn angle_to(&self, other: &Self) -> X
    where X: Field + PrimitiveFloat,
    { X::acos(VecN::dot(self, other) / (self.norm() * other.norm())) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, f: F) -> VecN<B, N>
    where F: FnMut(X) -> B,
    { VecN(self.0.map(f)) }

    /// Upgrade to a vector of dimension `N + 1`. The new trailing
    /// component is zero.
    ///
    /// The target dimension is verified when the call is monomorphized;
    /// anything other than `N + 1` refuses to compile.
    #[inline]
    pub fn extend<const M: usize>(self) -> VecN<X, M>
    where X: Semiring + PrimitiveSemiring,
    {
        const { assert!(M == N + 1) }
        VecN::from_fn(|i| if i < N { self[i] } else { X::zero() })
    }
}

impl<'a, X: Copy, const N: usize> TryFrom<&'a [X]> for VecN<X, N> {
    type Error = DimensionMismatch;

    #[inline]
    fn try_from(xs: &'a [X]) -> Result<Self, Self::Error>
    { VecN::try_from_slice(xs) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn add() {
        assert_eq!(V2([5.0, 3.0]) + V2([2.0, 1.0]), V2([7.0, 4.0]));
    }

    #[test]
    fn cross_2d() {
        assert_eq!(V2([5.0, 1.0]).cross(&V2([2.0, 3.0])), 13.0);
    }

    #[test]
    fn cross_3d_anticommutes() {
        for _ in 0..10 {
            let a = V3(rand::random::<[f64; 3]>());
            let b = V3(rand::random::<[f64; 3]>());
            assert_close!(abs=1e-12, a.cross(&b).0, (-b.cross(&a)).0);
        }
    }

    #[test]
    fn dot_commutes() {
        for _ in 0..10 {
            let a = V3(rand::random::<[f64; 3]>());
            let b = V3(rand::random::<[f64; 3]>());
            assert_close!(dot(&a, &b), dot(&b, &a));

            let a = VecN(rand::random::<[f64; 7]>());
            let b = VecN(rand::random::<[f64; 7]>());
            assert_close!(dot(&a, &b), dot(&b, &a));
        }
    }

    #[test]
    fn scale_by_zero() {
        for _ in 0..10 {
            let v = V3(rand::random::<[f64; 3]>());
            assert_eq!(v * 0.0, V3::zero());

            let v = VecN(rand::random::<[f64; 5]>());
            assert_eq!(v * 0.0, VecN::zero());
        }
    }

    #[test]
    fn unit_has_unit_norm() {
        for _ in 0..10 {
            let v = V2(rand::random::<[f64; 2]>()) + V2([1.0, 1.0]);
            assert_close!(1.0, v.unit().norm());

            let v = V3(rand::random::<[f64; 3]>()) + V3([1.0, 1.0, 1.0]);
            assert_close!(1.0, v.unit().norm());

            let v = VecN(rand::random::<[f64; 6]>()) + VecN([1.0; 6]);
            assert_close!(1.0, v.unit().norm());
        }
    }

    #[test]
    fn unit_of_zero_is_zero() {
        assert_eq!(V2::<f64>::zero().unit(), V2::zero());
        assert_eq!(V3::<f64>::zero().unit(), V3::zero());
        assert_eq!(VecN::<f64, 8>::zero().unit(), VecN::zero());
    }

    #[test]
    fn angle() {
        let a: V3 = V3([0.5, 0.0, 0.0]);
        let b: V3 = V3([8.0, 0.0, -8.0]);
        assert_close!(45.0, a.angle_to(&b).to_degrees());

        assert_close!(FRAC_PI_2, V2([3.0, 0.0]).angle_to(&V2([0.0, 0.25])));
        assert_close!(
            FRAC_PI_2,
            VecN([1.0, 0.0, 0.0, 0.0]).angle_to(&VecN([0.0, 2.0, 0.0, 0.0])),
        );
    }

    #[test]
    fn angle_of_degenerate_input_is_nan() {
        // deliberately unguarded; see the angle_to docs
        assert!(V3::<f64>::zero().angle_to(&V3([1.0, 0.0, 0.0])).is_nan());
        assert!(V3::<f64>::zero().angle_to(&V3::zero()).is_nan());
        assert!(VecN::<f64, _>::zero().angle_to(&VecN([1.0, 0.0, 0.0, 0.0, 0.0])).is_nan());
    }

    #[test]
    fn swap() {
        assert_eq!(V2([1.0, 2.0]).swap(), V2([2.0, 1.0]));
        assert_eq!(V2([1.0, 2.0]).swap().swap(), V2([1.0, 2.0]));
    }

    #[test]
    fn roll_round_trips() {
        let v = V3([1.0, 2.0, 3.0]);
        assert_eq!(v.roll_left(), V3([2.0, 3.0, 1.0]));
        assert_eq!(v.roll_right(), V3([3.0, 1.0, 2.0]));
        assert_eq!(v.roll_left().roll_right(), v);
        assert_eq!(v.roll_left().roll_left().roll_left(), v);
    }

    #[test]
    fn extend_and_without() {
        let v = V2([1.0, 2.0]);
        assert_eq!(v.extend(), V3([1.0, 2.0, 0.0]));
        assert_eq!(v.extend().without(Axis::Z), v);

        let v = V3([1.0, 2.0, 3.0]);
        assert_eq!(v.without(Axis::X), V2([2.0, 3.0]));
        assert_eq!(v.without(Axis::Y), V2([1.0, 3.0]));
        assert_eq!(v.without(Axis::Z), V2([1.0, 2.0]));
    }

    #[test]
    fn rotate_2d() {
        let v = V2([1.0, 0.0]);
        assert_close!(abs=1e-12, v.rotate_ccw(FRAC_PI_2).0, [0.0, 1.0]);
        assert_close!(abs=1e-12, v.rotate_cw(FRAC_PI_2).0, [0.0, -1.0]);

        for _ in 0..10 {
            let v = V2(rand::random::<[f64; 2]>());
            let theta = rand::random::<f64>() * 6.0;
            assert_close!(abs=1e-12, v.rotate_ccw(theta).rotate_cw(theta).0, v.0);
        }
    }

    #[test]
    fn rotate_3d() {
        let x = V3([1.0, 0.0, 0.0]);
        let y = V3([0.0, 1.0, 0.0]);
        let z = V3([0.0, 0.0, 1.0]);
        assert_close!(abs=1e-12, x.rotate_z(FRAC_PI_2).0, y.0);
        assert_close!(abs=1e-12, y.rotate_x(FRAC_PI_2).0, z.0);
        assert_close!(abs=1e-12, z.rotate_y(FRAC_PI_2).0, x.0);

        for _ in 0..10 {
            let v = V3(rand::random::<[f64; 3]>());
            let theta = rand::random::<f64>() * 6.0;
            assert_close!(abs=1e-12, v.rotate_x(theta).rotate_x(-theta).0, v.0);
            assert_close!(abs=1e-12, v.rotate_y(theta).rotate_y(-theta).0, v.0);
            assert_close!(abs=1e-12, v.rotate_z(theta).rotate_z(-theta).0, v.0);
        }
    }

    #[test]
    fn vecn_add() {
        let a = VecN([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a + a, VecN([2.0, 4.0, 6.0, 8.0, 10.0]));
    }

    #[test]
    fn vecn_try_from_slice() {
        let v = VecN::<f64, 5>::try_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(v, VecN([1.0, 2.0, 3.0, 4.0, 5.0]));

        let e = VecN::<f64, 5>::try_from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!((e.expected, e.actual), (5, 4));

        let e = VecN::<f64, 5>::try_from_slice(&[0.0; 6]).unwrap_err();
        assert_eq!((e.expected, e.actual), (5, 6));

        use std::convert::TryFrom;
        assert!(VecN::<f64, 4>::try_from(&[1.0, 2.0, 3.0, 4.0][..]).is_ok());
    }

    #[test]
    fn vecn_extend() {
        let v = VecN([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.extend::<5>(), VecN([1.0, 2.0, 3.0, 4.0, 0.0]));
    }
}
