// Copyright (c) 2024 Mike Tsao

//! Handles musical note durations.

use crate::prelude::*;
use anyhow::{anyhow, Error};
use core::{
    fmt::{self, Display},
    ops::{Div, Mul},
};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, FromRepr, IntoStaticStr};
use synonym::Synonym;

/// [NoteValue] enumerates the standard note shapes. Each one's discriminant
/// is its reciprocal: a quarter note is 1/4 of a whole note, so
/// `Quarter = 4`. Successive shapes halve; the set is fixed at build time.
#[derive(
    Clone, Copy, Debug, Default, EnumIter, FromRepr, IntoStaticStr, PartialEq, Eq, Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum NoteValue {
    /// semibreve
    Whole = 1,
    /// minim
    Half = 2,
    /// crotchet
    #[default]
    Quarter = 4,
    /// quaver
    Eighth = 8,
    /// semiquaver
    Sixteenth = 16,
}
#[allow(missing_docs)]
impl NoteValue {
    /// The fraction of a whole note's time value that this shape occupies.
    pub fn fraction(self) -> DurationFraction {
        DurationFraction(1.0 / self.denominator() as ParameterType)
    }

    pub const fn denominator(self) -> usize {
        self as usize
    }

    pub fn from_denominator(denominator: usize) -> anyhow::Result<Self, Error> {
        if let Some(value) = NoteValue::from_repr(denominator) {
            Ok(value)
        } else {
            Err(anyhow!(
                "denominator {} does not name a standard note value",
                denominator
            ))
        }
    }

    /// The dotted version of this shape's duration.
    pub fn dotted(self) -> DurationFraction {
        self.fraction().dotted()
    }

    /// The next shorter standard shape, or None below a sixteenth note.
    pub fn halved(self) -> Option<Self> {
        Self::from_repr(self.denominator() * 2)
    }

    /// The next longer standard shape, or None above a whole note.
    pub fn doubled(self) -> Option<Self> {
        Self::from_repr(self.denominator() / 2)
    }
}

/// [DurationFraction] is a dimensionless duration expressed as a fraction
/// of a whole note's time value. The standard shapes land on 1, 1/2, 1/4,
/// 1/8, and 1/16, but any positive value is meaningful; a dotted quarter is
/// 3/8. All of the standard fractions and their dotted versions are exactly
/// representable in binary floating point, so arithmetic on them is exact.
#[derive(
    Synonym, Serialize, Deserialize, Clone, Copy, Debug, Derivative, PartialEq, PartialOrd,
)]
#[derivative(Default)]
#[synonym(skip(Default))]
#[serde(rename_all = "kebab-case")]
pub struct DurationFraction(#[derivative(Default(value = "1.0"))] pub ParameterType);
impl Display for DurationFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:0.4} whole", self.0))
    }
}
#[allow(missing_docs)]
impl DurationFraction {
    pub const WHOLE: DurationFraction = DurationFraction(1.0);
    pub const HALF: DurationFraction = DurationFraction(0.5);
    pub const QUARTER: DurationFraction = DurationFraction(0.25);
    pub const EIGHTH: DurationFraction = DurationFraction(0.125);
    pub const SIXTEENTH: DurationFraction = DurationFraction(0.0625);

    /// A dot extends a note by half the note's own value.
    const DOT_FACTOR: ParameterType = 1.5;

    /// Returns the dotted version of this duration. Applying the dot again
    /// multiplies by 1.5 again; this is not the notation-style double dot,
    /// which adds only a quarter of the base.
    pub fn dotted(&self) -> Self {
        Self(self.0 * Self::DOT_FACTOR)
    }
}
impl Mul<ParameterType> for DurationFraction {
    type Output = Self;

    fn mul(self, rhs: ParameterType) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl Div<ParameterType> for DurationFraction {
    type Output = Self;

    fn div(self, rhs: ParameterType) -> Self::Output {
        Self(self.0 / rhs)
    }
}
impl Div<usize> for DurationFraction {
    type Output = Self;

    fn div(self, rhs: usize) -> Self::Output {
        Self(self.0 / rhs as ParameterType)
    }
}
impl From<NoteValue> for DurationFraction {
    fn from(value: NoteValue) -> Self {
        value.fraction()
    }
}
