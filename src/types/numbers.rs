// Copyright (c) 2024 Mike Tsao

//! Numeric types used throughout the system.

/// [ParameterType] is the floating-point type used for duration values and
/// the arithmetic on them. The `f32` cargo feature selects single
/// precision. All the standard note-duration fractions (1, 1/2, 1/4, 1/8,
/// 1/16) are exactly representable in either precision.
#[cfg(feature = "f32")]
pub type ParameterType = f32;
/// [ParameterType] is the floating-point type used for duration values and
/// the arithmetic on them. This is the double-precision default; the `f32`
/// cargo feature selects single precision instead. All the standard
/// note-duration fractions (1, 1/2, 1/4, 1/8, 1/16) are exactly
/// representable in either precision.
#[cfg(not(feature = "f32"))]
pub type ParameterType = f64;
