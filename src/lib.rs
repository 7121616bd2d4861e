/* ************************************************************************ **
** This file is part of raymath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                      **
**                                                                         **
**     http://www.apache.org/licenses/LICENSE-2.0                          **
**     http://opensource.org/licenses/MIT                                  **
** ************************************************************************ */

//! Small fixed-size vector and matrix types for a rendering core.
//!
//! `V2`/`V3` and the square `M22`/`M33` get dedicated impls (cross
//! products, swizzles, rotations); `VecN` and `MatMN` carry their
//! dimensions as const parameters for everything bigger. Every type is an
//! immutable value: each operation returns a new value and nothing is
//! mutated in place.

#[macro_use]
extern crate failure;

#[cfg(test)]
#[macro_use]
extern crate raymath_assert_close;

pub mod mat;
mod ops;
mod traits;
mod types;
pub mod vee;

//---------------------------
// public reexports; API

pub use crate::types::{Axis, DimensionMismatch};
pub use crate::types::{M2, M22, M3, M33, MatMN, MatN, V2, V3, VecN};

pub use crate::traits::{Field, Ring, Semiring};

pub use crate::vee::{dot, Dot, IsV, ScalarT};
