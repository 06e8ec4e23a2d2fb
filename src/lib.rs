//! The Bitints crate is a library of arbitrary-width binary integers that are
//! built directly on top of sequences of bits.
//!
//! No native integer type is used to hold a value. Instead, an [`Integer`] is
//! an immutable run of [`Bit`]s, stored least-significant first, and all of the
//! arithmetic (equality, addition, and left shift) is defined bit by bit. This
//! makes the crate useful for modelling and teaching binary and two's
//! complement arithmetic at any width.
//!
//! # Layers
//!
//!   - [`BitString`] is the base: an owned, fixed-length, immutable sequence of
//!     bits which can be iterated any number of times.
//!   - [`Integer`] wraps a [`BitString`] and gives it arithmetic meaning. It
//!     comes in two variants, [`BinaryInt`] and [`TwosComplimentInt`], which
//!     share one implementation and differ only in their intended
//!     interpretation.
//!
//! # Example
//!
//! ```
//! use bitints::{BinaryInt, ONE, ZERO};
//!
//! //	Bits are given least-significant first
//! let a = BinaryInt::new([ZERO, ZERO, ONE, ONE, ZERO]);
//! let b = BinaryInt::new([ZERO, ONE,  ZERO, ONE, ZERO]);
//!
//! assert_eq!((&a + &b).to_string(), "10110");
//! assert_eq!(a, BinaryInt::new([ZERO, ZERO, ONE, ONE]));
//! ```
//!



//		Global configuration													

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules																	

mod bits;
mod bitstring;
mod errors;
mod int;



//		Packages																

pub use bits::{Bit, ONE, ZERO};
pub use bitstring::{BitString, Bits};
pub use errors::{ArithmeticError, ConversionError};
pub use int::{BinaryInt, CountIter, Integer, TwosComplimentInt};


