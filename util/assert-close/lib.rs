/* ************************************************************************ **
** This file is part of raymath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                         **
**     http://www.apache.org/licenses/LICENSE-2.0                          **
**     http://opensource.org/licenses/MIT                                  **
** ************************************************************************ */

#[macro_use]
extern crate failure;

use std::fmt;

/// Default relative tolerance used when an assertion supplies none.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// Assert that two floating point values (or aggregates thereof) are equal
/// to within tolerance.
///
/// Accepts optional leading `abs=` and/or `rel=` tolerance arguments:
///
/// ```rust,ignore
/// assert_close!(a, b);
/// assert_close!(abs=1e-12, a, b);
/// assert_close!(rel=1e-6, abs=1e-12, a, b);
/// ```
///
/// When neither tolerance is given, a relative tolerance of
/// `DEFAULT_REL_TOL` is used with zero absolute tolerance.
#[macro_export]
macro_rules! assert_close {
    (abs=$abs:expr, rel=$rel:expr, $a:expr, $b:expr $(,)?) => {
        $crate::assert_close_inner(&$a, &$b, $crate::Tolerances { abs: $abs, rel: $rel })
    };
    (rel=$rel:expr, abs=$abs:expr, $a:expr, $b:expr $(,)?) => {
        $crate::assert_close_inner(&$a, &$b, $crate::Tolerances { abs: $abs, rel: $rel })
    };
    (abs=$abs:expr, $a:expr, $b:expr $(,)?) => {
        $crate::assert_close_inner(&$a, &$b, $crate::Tolerances { abs: $abs, rel: 0.0 })
    };
    (rel=$rel:expr, $a:expr, $b:expr $(,)?) => {
        $crate::assert_close_inner(&$a, &$b, $crate::Tolerances { abs: 0.0, rel: $rel })
    };
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_close_inner(&$a, &$b, $crate::Tolerances::default())
    };
}

/// `assert_close!`, but only in builds with debug assertions.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            assert_close!{$($t)*}
        }
    }};
}

/// Tolerances for a closeness check. A pair of values passes when it is
/// within *either* the absolute or the relative tolerance.
#[derive(Debug, Copy, Clone)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances { abs: 0.0, rel: DEFAULT_REL_TOL }
    }
}

/// The leaf pair of values that failed a closeness check.
#[derive(Debug, Fail)]
pub struct NotCloseError {
    pub left: f64,
    pub right: f64,
    pub tol: Tolerances,
}

impl fmt::Display for NotCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "values not close (abs={}, rel={}):\n  left: {:?}\n right: {:?}",
            self.tol.abs, self.tol.rel, self.left, self.right,
        )
    }
}

// Comparison in the spirit of Python's math.isclose, except that the
// absolute and relative tolerances both default to the caller's choice.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(abs >= 0.0);
    assert!(rel >= 0.0);

    // infinities of equal sign (and exact equality)
    if a == b {
        return true;
    }
    // infinities of opposite sign; sidestep infinite relative tolerance
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    // general values; NaN anywhere fails
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

/// Elementwise closeness over scalars and aggregates of scalars.
pub trait CheckClose {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotCloseError> {
        if is_close(*self, *other, tol) {
            Ok(())
        } else {
            Err(NotCloseError { left: *self, right: *other, tol })
        }
    }
}

impl CheckClose for f32 {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotCloseError> {
        (f64::from(*self)).check_close(&f64::from(*other), tol)
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotCloseError> {
        T::check_close(self, other, tol)
    }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotCloseError> {
        assert_eq!(self.len(), other.len(), "length mismatch in assert_close!");
        self.iter()
            .zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotCloseError> {
        self[..].check_close(&other[..], tol)
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotCloseError> {
        self[..].check_close(&other[..], tol)
    }
}

#[doc(hidden)]
pub fn assert_close_inner<T>(a: &T, b: &T, tol: Tolerances)
where T: CheckClose + fmt::Debug + ?Sized,
{
    if let Err(e) = a.check_close(b, tol) {
        panic!(
            "assertion failed: values not nearly equal\n  left: {:?}\n right: {:?}\n{}",
            a, b, e,
        );
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn macro_forms_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0,);
    }

    #[test]
    fn aggregates() {
        assert_close!([1.0, 2.0], [1.0, 2.0]);
        assert_close!(abs=1e-8, vec![[1.0; 3]; 4], vec![[1.0; 3]; 4]);
        assert_close!(&[1.0, 2.0][..], &[1.0, 2.0][..]);
    }

    #[test]
    fn infinities() {
        assert_close!(::std::f64::INFINITY, ::std::f64::INFINITY);
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic]
    fn nan_is_never_close() {
        assert_close!(::std::f64::NAN, ::std::f64::NAN);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
