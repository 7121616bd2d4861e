
// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
//
//       Generic bounds like that tend to influence the design of the
//       rest of the library towards something impossible to implement.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::internal::{PrimitiveFloat, PrimitiveRing, PrimitiveSemiring};
use crate::traits::{Field, Ring, Semiring};
use crate::types::*;

// ---------------------------------------------------------------------------
// vector-vector and vector-scalar ops
//
// One expansion per vector type; `VecN` threads its dimension through as a
// const parameter and otherwise gets the same impls as the fixed sizes.

macro_rules! impl_v_ops {
    ($( $Vn:ty, [$($gen:tt)*], $X:ident; )*) => {$(
        // vector + vector
        impl<$($gen)*> Add for $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline]
            fn add(self, other: Self) -> Self::Output
            { <$Vn>::from_fn(|k| self[k] + other[k]) }
        }

        impl<'b, $($gen)*> Add<&'b $Vn> for $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline(always)]
            fn add(self, other: &'b $Vn) -> Self::Output
            { self + *other }
        }

        impl<'a, $($gen)*> Add<$Vn> for &'a $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline(always)]
            fn add(self, other: $Vn) -> Self::Output
            { *self + other }
        }

        impl<'a, 'b, $($gen)*> Add<&'b $Vn> for &'a $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline(always)]
            fn add(self, other: &'b $Vn) -> Self::Output
            { *self + *other }
        }

        // vector - vector
        impl<$($gen)*> Sub for $Vn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Vn;

            #[inline]
            fn sub(self, other: Self) -> Self::Output
            { <$Vn>::from_fn(|k| self[k] - other[k]) }
        }

        impl<'b, $($gen)*> Sub<&'b $Vn> for $Vn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Vn;

            #[inline(always)]
            fn sub(self, other: &'b $Vn) -> Self::Output
            { self - *other }
        }

        impl<'a, $($gen)*> Sub<$Vn> for &'a $Vn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Vn;

            #[inline(always)]
            fn sub(self, other: $Vn) -> Self::Output
            { *self - other }
        }

        impl<'a, 'b, $($gen)*> Sub<&'b $Vn> for &'a $Vn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Vn;

            #[inline(always)]
            fn sub(self, other: &'b $Vn) -> Self::Output
            { *self - *other }
        }

        // -vector
        impl<$($gen)*> Neg for $Vn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Vn;

            #[inline]
            fn neg(self) -> Self::Output
            { <$Vn>::from_fn(|k| -self[k]) }
        }

        impl<'a, $($gen)*> Neg for &'a $Vn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Vn;

            #[inline(always)]
            fn neg(self) -> Self::Output
            { -*self }
        }

        // vector * scalar
        impl<$($gen)*> Mul<$X> for $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline]
            fn mul(self, scalar: $X) -> Self::Output
            { <$Vn>::from_fn(|k| self[k] * scalar) }
        }

        impl<'a, $($gen)*> Mul<$X> for &'a $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, scalar: $X) -> Self::Output
            { *self * scalar }
        }

        // vector / scalar
        impl<$($gen)*> Div<$X> for $Vn
        where $X: Field + PrimitiveFloat,
        {
            type Output = $Vn;

            #[inline]
            fn div(self, scalar: $X) -> Self::Output
            { <$Vn>::from_fn(|k| self[k] / scalar) }
        }

        impl<'a, $($gen)*> Div<$X> for &'a $Vn
        where $X: Field + PrimitiveFloat,
        {
            type Output = $Vn;

            #[inline(always)]
            fn div(self, scalar: $X) -> Self::Output
            { *self / scalar }
        }
    )*}
}

impl_v_ops! {
    V2<X>, [X], X;
    V3<X>, [X], X;
    VecN<X, N>, [X, const N: usize], X;
}

// scalar * vector
//
// NOTE: the orphan rules prevent impl-ing these ops "for X" generically,
//       so there is a separate impl for each scalar type.
macro_rules! impl_scalar_mul {
    ($($X:ty)*) => {$(
        impl Mul<V2<$X>> for $X {
            type Output = V2<$X>;

            #[inline(always)]
            fn mul(self, vector: V2<$X>) -> Self::Output
            { vector * self }
        }

        impl<'a> Mul<&'a V2<$X>> for $X {
            type Output = V2<$X>;

            #[inline(always)]
            fn mul(self, vector: &'a V2<$X>) -> Self::Output
            { vector * self }
        }

        impl Mul<V3<$X>> for $X {
            type Output = V3<$X>;

            #[inline(always)]
            fn mul(self, vector: V3<$X>) -> Self::Output
            { vector * self }
        }

        impl<'a> Mul<&'a V3<$X>> for $X {
            type Output = V3<$X>;

            #[inline(always)]
            fn mul(self, vector: &'a V3<$X>) -> Self::Output
            { vector * self }
        }

        impl<const N: usize> Mul<VecN<$X, N>> for $X {
            type Output = VecN<$X, N>;

            #[inline(always)]
            fn mul(self, vector: VecN<$X, N>) -> Self::Output
            { vector * self }
        }

        impl<'a, const N: usize> Mul<&'a VecN<$X, N>> for $X {
            type Output = VecN<$X, N>;

            #[inline(always)]
            fn mul(self, vector: &'a VecN<$X, N>) -> Self::Output
            { vector * self }
        }
    )*}
}

impl_scalar_mul!{ u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64 }

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops, matrix * scalar

macro_rules! impl_m_ops {
    ($( $Mn:ty, [$($gen:tt)*], $X:ident; )*) => {$(
        // matrix + matrix
        impl<$($gen)*> Add for $Mn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mn;

            #[inline]
            fn add(self, other: Self) -> Self::Output
            { <$Mn>::from_fn(|r, c| self[r][c] + other[r][c]) }
        }

        impl<'a, 'b, $($gen)*> Add<&'b $Mn> for &'a $Mn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mn;

            #[inline(always)]
            fn add(self, other: &'b $Mn) -> Self::Output
            { *self + *other }
        }

        // matrix - matrix
        impl<$($gen)*> Sub for $Mn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Mn;

            #[inline]
            fn sub(self, other: Self) -> Self::Output
            { <$Mn>::from_fn(|r, c| self[r][c] - other[r][c]) }
        }

        impl<'a, 'b, $($gen)*> Sub<&'b $Mn> for &'a $Mn
        where $X: Ring + PrimitiveRing,
        {
            type Output = $Mn;

            #[inline(always)]
            fn sub(self, other: &'b $Mn) -> Self::Output
            { *self - *other }
        }

        // matrix * scalar
        impl<$($gen)*> Mul<$X> for $Mn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mn;

            #[inline]
            fn mul(self, scalar: $X) -> Self::Output
            { <$Mn>::from_fn(|r, c| self[r][c] * scalar) }
        }

        impl<'a, $($gen)*> Mul<$X> for &'a $Mn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mn;

            #[inline(always)]
            fn mul(self, scalar: $X) -> Self::Output
            { *self * scalar }
        }
    )*}
}

impl_m_ops! {
    M22<X>, [X], X;
    M33<X>, [X], X;
    MatMN<X, R, C>, [X, const R: usize, const C: usize], X;
}

// ---------------------------------------------------------------------------
// matrix * vector, vector * matrix (fixed square sizes)

macro_rules! impl_m_v_mul {
    ($( $Mnn:ty, $Vn:ty, $n:tt, [$($gen:tt)*], $X:ident; )*) => {$(
        // matrix * column vector
        impl<'m, $($gen)*> Mul<$Vn> for &'m $Mnn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline]
            fn mul(self, vector: $Vn) -> Self::Output
            { <$Vn>::from_fn(|r| (0..$n).map(|i| self[r][i] * vector[i]).sum()) }
        }

        impl<'m, 'v, $($gen)*> Mul<&'v $Vn> for &'m $Mnn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, vector: &'v $Vn) -> Self::Output
            { self * *vector }
        }

        // row vector * matrix
        impl<'m, $($gen)*> Mul<&'m $Mnn> for $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline]
            fn mul(self, matrix: &'m $Mnn) -> Self::Output
            { <$Vn>::from_fn(|c| (0..$n).map(|i| self[i] * matrix[i][c]).sum()) }
        }

        impl<'m, 'v, $($gen)*> Mul<&'m $Mnn> for &'v $Vn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Vn;

            #[inline(always)]
            fn mul(self, matrix: &'m $Mnn) -> Self::Output
            { *self * matrix }
        }
    )*}
}

impl_m_v_mul! {
    M22<X>, V2<X>, 2, [X], X;
    M33<X>, V3<X>, 3, [X], X;
}

// matrix * vector, vector * matrix (generic shapes; the row/column counts
// are const parameters, so a length mismatch refuses to compile)

impl<'m, X: Semiring, const R: usize, const C: usize> Mul<VecN<X, C>> for &'m MatMN<X, R, C>
where X: PrimitiveSemiring,
{
    type Output = VecN<X, R>;

    #[inline]
    fn mul(self, vector: VecN<X, C>) -> Self::Output
    { VecN::from_fn(|r| (0..C).map(|i| self[r][i] * vector[i]).sum()) }
}

impl<'m, 'v, X: Semiring, const R: usize, const C: usize> Mul<&'v VecN<X, C>> for &'m MatMN<X, R, C>
where X: PrimitiveSemiring,
{
    type Output = VecN<X, R>;

    #[inline(always)]
    fn mul(self, vector: &'v VecN<X, C>) -> Self::Output
    { self * *vector }
}

impl<'m, X: Semiring, const R: usize, const C: usize> Mul<&'m MatMN<X, R, C>> for VecN<X, R>
where X: PrimitiveSemiring,
{
    type Output = VecN<X, C>;

    #[inline]
    fn mul(self, matrix: &'m MatMN<X, R, C>) -> Self::Output
    { VecN::from_fn(|c| (0..R).map(|i| self[i] * matrix[i][c]).sum()) }
}

impl<'m, 'v, X: Semiring, const R: usize, const C: usize> Mul<&'m MatMN<X, R, C>> for &'v VecN<X, R>
where X: PrimitiveSemiring,
{
    type Output = VecN<X, C>;

    #[inline(always)]
    fn mul(self, matrix: &'m MatMN<X, R, C>) -> Self::Output
    { *self * matrix }
}

// ---------------------------------------------------------------------------
// matrix * matrix

macro_rules! impl_m_m_mul {
    ($( $Mnn:ty, $n:tt, [$($gen:tt)*], $X:ident; )*) => {$(
        impl<'a, 'b, $($gen)*> Mul<&'b $Mnn> for &'a $Mnn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mnn;

            #[inline]
            fn mul(self, other: &'b $Mnn) -> Self::Output
            { <$Mnn>::from_fn(|r, c| (0..$n).map(|i| self[r][i] * other[i][c]).sum()) }
        }

        // by-value forms; num_traits::One wants `Mul` on owned values
        impl<$($gen)*> Mul for $Mnn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mnn;

            #[inline(always)]
            fn mul(self, other: $Mnn) -> Self::Output
            { &self * &other }
        }

        impl<'b, $($gen)*> Mul<&'b $Mnn> for $Mnn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mnn;

            #[inline(always)]
            fn mul(self, other: &'b $Mnn) -> Self::Output
            { &self * other }
        }

        impl<'a, $($gen)*> Mul<$Mnn> for &'a $Mnn
        where $X: Semiring + PrimitiveSemiring,
        {
            type Output = $Mnn;

            #[inline(always)]
            fn mul(self, other: $Mnn) -> Self::Output
            { self * &other }
        }
    )*}
}

impl_m_m_mul! {
    M22<X>, 2, [X], X;
    M33<X>, 3, [X], X;
}

// generic: (R x K) * (K x C) -> (R x C); the shared inner dimension is a
// single const parameter, so mismatched operands refuse to compile

impl<'a, 'b, X: Semiring, const R: usize, const K: usize, const C: usize>
    Mul<&'b MatMN<X, K, C>> for &'a MatMN<X, R, K>
where X: PrimitiveSemiring,
{
    type Output = MatMN<X, R, C>;

    #[inline]
    fn mul(self, other: &'b MatMN<X, K, C>) -> Self::Output
    { MatMN::from_fn(|r, c| (0..K).map(|i| self[r][i] * other[i][c]).sum()) }
}

impl<X: Semiring, const R: usize, const K: usize, const C: usize>
    Mul<MatMN<X, K, C>> for MatMN<X, R, K>
where X: PrimitiveSemiring,
{
    type Output = MatMN<X, R, C>;

    #[inline(always)]
    fn mul(self, other: MatMN<X, K, C>) -> Self::Output
    { &self * &other }
}

// ---------------------------------------------------------------------------
// Display applies the format to each element, between brackets.

macro_rules! impl_display {
    ($( $Cn:ty, [$($gen:tt)*], $E:ident; )*) => {$(
        impl<$($gen)*> fmt::Display for $Cn
        where $E: fmt::Display,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                let mut iter = self.iter();
                if let Some(first) = iter.next() {
                    fmt::Display::fmt(first, f)?;
                    for x in iter {
                        write!(f, ", ")?;
                        fmt::Display::fmt(x, f)?;
                    }
                }
                write!(f, "]")
            }
        }
    )*}
}

impl_display! {
    V2<X>, [X], X;
    V3<X>, [X], X;
    M2<V>, [V], V;
    M3<V>, [V], V;
    VecN<X, N>, [X, const N: usize], X;
    MatN<V, R>, [V, const R: usize], V;
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;

    #[test]
    fn mat_mat() {
        let eye2: M22<i32> = mat::from_array([[1, 0], [0, 1]]);
        let a = mat::from_array([[1, 2], [3, 4]]);

        assert_eq!(&eye2 * &a, a);
        assert_eq!(&a * &eye2, a);
        assert_eq!(a * eye2, a);

        let b = mat::from_array([[1, 1], [0, -1]]);
        assert_eq!(&a * &b, mat::from_array([[1, -1], [3, -1]]));
    }

    #[test]
    fn mat_mat_generic() {
        let a = MatMN::from_array([[1.0, 2.0]]);
        let b = MatMN::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!((&a * &b).into_array(), [[9.0, 12.0, 15.0]]);
        assert_eq!((a * b).into_array(), [[9.0, 12.0, 15.0]]);
    }

    #[test]
    fn mat_vec() {
        let m: M22<i32> = mat::from_array([[1, 2], [3, 4]]);
        assert_eq!(&m * V2([1, 1]), V2([3, 7]));
        assert_eq!(&m * &V2([1, 1]), V2([3, 7]));
        assert_eq!(V2([1, 1]) * &m, V2([4, 6]));
    }

    #[test]
    fn mat_vec_generic() {
        let m = MatMN::from_array([[1.0, -1.0, 2.0], [0.0, -3.0, 1.0]]);
        let v = VecN([2.0, 1.0, 0.0]);
        assert_eq!(&m * &v, VecN([1.0, -3.0]));
        assert_eq!(&m * v, VecN([1.0, -3.0]));

        // row-vector form sums over the other index
        assert_eq!(VecN([1.0, 1.0]) * &m, VecN([1.0, -4.0, 3.0]));
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(V3([1.0, 2.0, 3.0]) * 2.0, V3([2.0, 4.0, 6.0]));
        assert_eq!(2.0 * V3([1.0, 2.0, 3.0]), V3([2.0, 4.0, 6.0]));
        assert_eq!(2.0 * &V2([1.0, 2.0]), V2([2.0, 4.0]));
        assert_eq!(V2([2.0, 4.0]) / 2.0, V2([1.0, 2.0]));
        assert_eq!(VecN([1.0, 2.0, 3.0, 4.0]) * 0.5, VecN([0.5, 1.0, 1.5, 2.0]));
        assert_eq!(3 * VecN([1, 2, 3, 4]), VecN([3, 6, 9, 12]));

        let m: M22<f64> = mat::from_array([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(&m * 2.0, mat::from_array([[2.0, 4.0], [6.0, 8.0]]));
    }

    #[test]
    fn sub_and_neg() {
        assert_eq!(V2([3.0, 4.0]) - V2([1.0, 1.0]), V2([2.0, 3.0]));
        assert_eq!(-V3([1.0, -2.0, 3.0]), V3([-1.0, 2.0, -3.0]));
        assert_eq!(
            VecN([5.0, 5.0, 5.0, 5.0]) - VecN([1.0, 2.0, 3.0, 4.0]),
            VecN([4.0, 3.0, 2.0, 1.0]),
        );

        let a: M22<i32> = mat::from_array([[1, 2], [3, 4]]);
        let b = mat::from_array([[1, 1], [1, 1]]);
        assert_eq!(&a - &b, mat::from_array([[0, 1], [2, 3]]));
        assert_eq!(&a + &b, mat::from_array([[2, 3], [4, 5]]));
    }

    #[test]
    fn vector_sum() {
        let vs = [V2([1.0, 2.0]), V2([3.0, 4.0]), V2([5.0, 6.0])];
        assert_eq!(vs.iter().sum::<V2>(), V2([9.0, 12.0]));
        assert_eq!(vs.iter().cloned().sum::<V2>(), V2([9.0, 12.0]));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", V3([1.0, 2.5, 3.0])), "[1, 2.5, 3]");
        assert_eq!(format!("{}", mat::from_array([[1, 0], [0, 1]])), "[[1, 0], [0, 1]]");
        assert_eq!(format!("{}", VecN([1.0, 2.0, 3.0, 4.5])), "[1, 2, 3, 4.5]");
    }
}
