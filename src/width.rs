//! Width policy for multi-precision integers.



//		Modules

#[cfg(test)]
#[path = "tests/width.rs"]
mod tests;



//		Packages

use core::fmt::{Display, Formatter, self};



//		Enums

//		Width
/// The width policy of an [`Int`](crate::Int).
///
/// A width is either a fixed number of 8-bit words, in which case every value
/// carrying it stores exactly that many words and arithmetic detects overflow,
/// or unlimited, in which case storage grows and shrinks with the value and
/// arithmetic never overflows.
///
/// Fixed widths must be at least [`Width::MIN`] words. Constructors of
/// [`Int`](crate::Int) panic when handed a narrower fixed width.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Width {
	/// A fixed width of the given number of 8-bit words.
	Fixed(usize),

	/// An unlimited width: storage length follows the value.
	Unlimited,
}

//󰭅		Width
impl Width {
	//		Public constants
	/// Minimal number of words any value may store.
	pub const MIN: usize = 4;

	//		Public methods

	//		combine
	/// Combines two widths into the width of an operation result.
	///
	/// The result of any binary operation is as wide as the wider operand,
	/// with [`Unlimited`](Width::Unlimited) absorbing every fixed width.
	///
	/// # Parameters
	///
	/// * `other` - The width of the other operand.
	///
	#[must_use]
	pub fn combine(self, other: Self) -> Self {
		match (self, other) {
			(Self::Fixed(lhs), Self::Fixed(rhs)) => Self::Fixed(lhs.max(rhs)),
			_                                    => Self::Unlimited,
		}
	}

	//		fits_within
	/// Checks whether a value of this width may be assigned into the other.
	///
	/// Assignment is permitted only from a narrower or equal width into a
	/// wider one: every fixed width fits within a wider fixed width and
	/// within [`Unlimited`](Width::Unlimited), while an unlimited value fits
	/// only within another unlimited one.
	///
	/// # Parameters
	///
	/// * `other` - The width of the assignment target.
	///
	#[must_use]
	pub fn fits_within(self, other: Self) -> bool {
		match (self, other) {
			(Self::Fixed(lhs), Self::Fixed(rhs)) => lhs <= rhs,
			(Self::Fixed(_),   Self::Unlimited)  => true,
			(Self::Unlimited,  Self::Fixed(_))   => false,
			(Self::Unlimited,  Self::Unlimited)  => true,
		}
	}

	//		is_fixed
	/// Checks whether this width is fixed.
	#[must_use]
	pub const fn is_fixed(self) -> bool {
		matches!(self, Self::Fixed(_))
	}

	//		is_unlimited
	/// Checks whether this width is unlimited.
	#[must_use]
	pub const fn is_unlimited(self) -> bool {
		matches!(self, Self::Unlimited)
	}

	//		Crate methods

	//		initial_words
	/// The number of words a fresh zero value of this width stores.
	pub(crate) const fn initial_words(self) -> usize {
		match self {
			Self::Fixed(words) => words,
			Self::Unlimited    => Self::MIN,
		}
	}

	//		is_valid
	/// Whether the width satisfies the minimal-width rule.
	pub(crate) const fn is_valid(self) -> bool {
		match self {
			Self::Fixed(words) => words >= Self::MIN,
			Self::Unlimited    => true,
		}
	}
}

//󰭅		Display
impl Display for Width {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match *self {
			Self::Fixed(words) => write!(f, "{words}B"),
			Self::Unlimited    => write!(f, "Unlimited"),
		}
	}
}
