// Copyright (c) 2024 Mike Tsao

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs, unused_imports, unused_variables)]

//! Tactus provides the vocabulary of musical note durations — whole through
//! sixteenth notes, plus the dotted transform — as typed values for digital
//! audio applications.
//!
//! Everything in this crate is an immutable `Copy` value. There is no state
//! to set up and nothing to tear down; any number of threads can read these
//! values without coordination.
//!
//! * Use [NoteValue] when you're working with the closed set of standard
//!   note shapes (a quarter note is a quarter note).
//! * Use [DurationFraction] when you're doing arithmetic on durations,
//!   including durations that don't correspond to any standard shape (a
//!   dotted quarter, for example, is 3/8 of a whole note).

/// A collection of imports that are useful to users of this crate. `use
/// tactus::prelude::*;` for easier onboarding.
pub mod prelude {
    pub use super::types::prelude::*;
}

pub use types::{DurationFraction, NoteValue};

pub mod types;
