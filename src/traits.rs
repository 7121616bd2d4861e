/* ************************************************************************ **
** This file is part of raymath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                         **
**     http://www.apache.org/licenses/LICENSE-2.0                          **
**     http://opensource.org/licenses/MIT                                  **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    /// Trait for scalars with addition and multiplication.
    ///
    /// Plenty of exotic semirings exist ((min, plus) and friends), but
    /// don't get excited; you get primitive floats and integers. That's
    /// all this API is willing to commit to at the moment. This trait is
    /// sealed to avoid accidental commitments.
    pub trait Semiring: Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring: Semiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction,
    /// and division.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It's currently just primitive, real floating point types.
    pub trait Field: Ring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

macro_rules! impl_semiring {
    ($($T:ty)*) => {$(
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    )*}
}

macro_rules! impl_ring {
    ($($T:ty)*) => {$(
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    )*}
}

macro_rules! impl_field {
    ($($T:ty)*) => {$(
        impl Field for $T { }
        impl field::Sealed for $T { }
    )*}
}

impl_semiring!{ u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64 }
impl_ring!{ i8 i16 i32 i64 isize f32 f64 }
impl_field!{ f32 f64 }

/// Internal-use operation traits for generic implementations.
///
/// These keep the `where` clauses in the rest of the crate down to
/// "`X` is a primitive scalar of such-and-such strength" instead of a
/// laundry list of `std::ops` bounds.
pub(crate) mod internal {
    use std::iter::{Product, Sum};
    use std::ops::{Add, Div, Mul, Neg, Sub};

    use num_traits::{One, Zero};

    pub trait PrimitiveSemiring
        : Sized + Copy + Default
        + PartialEq + PartialOrd
        + Add<Output = Self> + Mul<Output = Self>
        + Zero + One
        + Sum + Product
    { }

    impl<T> PrimitiveSemiring for T
    where T: Sized + Copy + Default
        + PartialEq + PartialOrd
        + Add<Output = T> + Mul<Output = T>
        + Zero + One
        + Sum + Product
    { }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + Sub<Output = Self> + Neg<Output = Self>
    { }

    impl<T> PrimitiveRing for T
    where T: PrimitiveSemiring + Sub<Output = T> + Neg<Output = T>
    { }

    pub trait PrimitiveFloat
        : PrimitiveRing
        + Div<Output = Self>
    {
        fn sqrt(self) -> Self;
        fn acos(self) -> Self;
        fn sin(self) -> Self;
        fn cos(self) -> Self;
    }

    macro_rules! impl_primitive_float {
        ($($T:ty)*) => {$(
            impl PrimitiveFloat for $T {
                #[inline(always)] fn sqrt(self) -> $T { self.sqrt() }
                #[inline(always)] fn acos(self) -> $T { self.acos() }
                #[inline(always)] fn sin(self) -> $T { self.sin() }
                #[inline(always)] fn cos(self) -> $T { self.cos() }
            }
        )*}
    }

    impl_primitive_float!{ f32 f64 }
}
