//! Contains error types used throughout the library.



//		Packages

use crate::{Int, Width};
use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError
/// Represents failures of the arithmetic operations themselves.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// A division or remainder operation received a zero divisor.
	#[error("Division By Zero")]
	DivisionByZero,

	/// A factorial was requested for a negative value.
	#[error("Factorial Of Negative Number")]
	NegativeFactorial,

	/// A fixed-width operation produced a result that is not representable in
	/// the result width. The payload is the truncated two's-complement result
	/// the kernel had already constructed when the overflow was detected.
	#[error("Overflow Detected [{0}]")]
	Overflow(Int),
}

//		ParseError
/// Represents all possible failures when constructing a value from text.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ParseError {
	/// The input was empty, or contained only a sign.
	#[error("Cannot parse integer from empty string")]
	Empty,

	/// The input contained a character outside the decimal grammar.
	#[error("Invalid digit found in string: {0:?}")]
	InvalidDigit(char),

	/// The decoded magnitude did not fit the requested fixed width.
	#[error(transparent)]
	Arithmetic(#[from] ArithmeticError),
}

//		WidthError
/// Represents violations of the width-mixing rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum WidthError {
	/// A value was asked to convert to a width narrower than its own. Only
	/// widening conversions are permitted.
	#[error("Cannot narrow from {from} to {to}")]
	WouldNarrow {
		/// The width of the value being converted.
		from: Width,

		/// The narrower width that was requested.
		to:   Width,
	},
}

//		CommandError
/// Represents all possible failures when executing a terminal command.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum CommandError {
	/// The command line did not match any recognised command shape.
	#[error("Invalid Command Format")]
	InvalidFormat,

	/// A `$k` placeholder referred to a bank slot that is not yet filled.
	#[error("Out Of Bank Range")]
	OutOfBankRange,

	/// A numeric literal in the command failed to decode.
	#[error(transparent)]
	Parse(#[from] ParseError),

	/// The operation itself failed.
	#[error(transparent)]
	Arithmetic(#[from] ArithmeticError),
}
