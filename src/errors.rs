//! Contains error types used throughout the library.



//		Modules																	

#[cfg(test)]
#[path = "tests/errors.rs"]
mod tests;



//		Packages																

use thiserror::Error as ThisError;



//		Enums																	

//		ArithmeticError															
/// Represents all possible errors that can occur when combining integers.
/// 
/// Operations whose operands are required to share a variant check this at
/// runtime when the variants are not fixed by the types involved. The check
/// happens before any work is done, so no partial result is ever produced.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// The operands are different variants, e.g. a binary integer and a two's
	/// complement integer.
	#[error("Operands must be of the same type: left operand is {lhs}, right operand is {rhs}")]
	VariantMismatch {
		/// The variant name of the left-hand operand.
		lhs: &'static str,
		
		/// The variant name of the right-hand operand.
		rhs: &'static str,
	},
}

//		ConversionError															
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value contains a character that is not a binary digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
}


