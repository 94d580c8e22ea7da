//! Multi-precision signed integer type.

//	These lint checks are unnecessary in this module because:
//	  1. The word vector is sized on construction and every index derives from
//	     that size, so all indexing is fundamentally safe.
//	  2. Using .get() would add runtime checks and make the code more verbose
//	     with .unwrap()s for conditions the type maintains as invariants.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices always derive from the stored length"
)]

//	This lint check is unnecessary in this module because the arithmetic here
//	is the point: the kernels operate on bit strings with wrapping semantics by
//	definition, and overflow is detected explicitly from sign relationships.
#![allow(clippy::arithmetic_side_effects, reason = "Wrapping is part of the arithmetic model")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::errors::{ArithmeticError, ParseError, WidthError};
use crate::width::Width;
use core::{
	fmt::{Debug, Display, Formatter, self},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};



//		Constants

/// Number of bits in one storage word.
const WORD_BITS: usize = 8;



//		Structs

//		AddFlags
/// Condition flags reported by the addition kernel.
#[derive(Clone, Copy, Debug, Default)]
struct AddFlags {
	/// The signed result is not representable in the (fixed) result width.
	overflow: bool,

	/// The addition produced a carry out of the most-significant bit.
	carry:    bool,
}

//		Int
/// A multi-precision signed integer.
///
/// The value is a two's-complement bit string stored as a sequence of 8-bit
/// words in little-endian order, both across words and within each word: bit 0
/// of word 0 is the least-significant bit, and bit 7 of the last word is the
/// sign bit. The accompanying [`Width`] tag decides how the storage behaves:
///
///   - [`Width::Fixed(n)`](Width::Fixed) stores exactly `n` words, and every
///     operation whose mathematical result does not fit reports
///     [`ArithmeticError::Overflow`] carrying the truncated result.
///   - [`Width::Unlimited`] stores however many words the value needs (at
///     least [`Width::MIN`]), growing on addition and shrinking after
///     multiplication, and never overflows.
///
/// # Width mixing
///
/// Binary operations accept operands of any two widths. The result carries
/// the wider of the two widths, with [`Width::Unlimited`] absorbing every
/// fixed width, and the narrower operand is sign-extended to the common
/// length before the kernels run. Assignment in the other direction is
/// restricted: a value may only be assigned (or compound-assigned) into a
/// value of equal or wider width, and [`widen()`](Int::widen) is the only
/// conversion between widths.
///
/// # Arithmetic
///
/// The infix operators emulate the standard library integer types: they panic
/// on overflow and on division by zero. The `try_` methods report the same
/// conditions as typed errors instead, carrying the truncated result where
/// one exists, and are what embedding code is expected to call.
///
/// # Serialization
///
/// The textual form is minimal decimal: `0` for zero, otherwise an optional
/// `-` followed by digits with no leading zero. [`Display`], [`FromStr`], and
/// the serde implementations all speak this form; the width tag is not part
/// of it, so deserialized values are always [`Width::Unlimited`].
///
#[derive(Clone)]
pub struct Int {
	/// The width policy this value was constructed under.
	width: Width,

	/// The two's-complement bit string, least-significant word first.
	words: Vec<u8>,
}

//󰭅		Int
impl Int {
	//		Constructors

	//		zero
	/// Creates a zero value of the given width.
	///
	/// # Parameters
	///
	/// * `width` - The width policy of the new value.
	///
	/// # Panics
	///
	/// Panics if the width is fixed and narrower than [`Width::MIN`] words.
	///
	#[must_use]
	pub fn zero(width: Width) -> Self {
		assert!(width.is_valid(), "Width must be at least {} words", Width::MIN);
		Self { width, words: vec![0x00; width.initial_words()] }
	}

	//		one
	/// Creates the value one of the given width.
	///
	/// # Parameters
	///
	/// * `width` - The width policy of the new value.
	///
	/// # Panics
	///
	/// Panics if the width is fixed and narrower than [`Width::MIN`] words.
	///
	#[must_use]
	pub fn one(width: Width) -> Self {
		Self::from_word(width, 1)
	}

	//		from_decimal
	/// Creates a value of the given width from a decimal string.
	///
	/// The accepted grammar is an optional leading `+` or `-` followed by one
	/// or more ASCII decimal digits. The value is accumulated through the same
	/// overflow-checked multiply and add kernels as ordinary arithmetic, so a
	/// magnitude that does not fit a fixed width is reported as an overflow
	/// carrying the truncated accumulator. The magnitude must be representable
	/// before the sign is applied.
	///
	/// # Parameters
	///
	/// * `text`  - The decimal string to decode.
	/// * `width` - The width policy of the new value.
	///
	/// # Errors
	///
	/// Returns an error if the input is empty or contains a character outside
	/// the grammar, or if the magnitude overflows a fixed width.
	///
	/// # Panics
	///
	/// Panics if the width is fixed and narrower than [`Width::MIN`] words.
	///
	pub fn from_decimal(text: &str, width: Width) -> Result<Self, ParseError> {
		let mut result     = Self::zero(width);
		let mut overflow   = false;
		let mut negative   = false;
		let mut seen_digit = false;

		for (i, c) in text.chars().enumerate() {
			if i == 0 && matches!(c, '+' | '-') {
				negative = c == '-';
				continue;
			}

			let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit(c))?;

			//	Shift the accumulator one decimal place before the next digit
			if seen_digit {
				let (shifted, shift_overflow) = Self::mul_raw(&result, &Self::ten(width));
				result   = shifted;
				overflow = overflow || shift_overflow;
			}

			#[expect(clippy::cast_possible_truncation, reason = "Digit is at most 9")]
			let (summed, flags) = Self::add_raw(&result, &Self::from_word(width, digit as u8));
			result     = summed;
			overflow   = overflow || flags.overflow;
			seen_digit = true;
		}

		if !seen_digit {
			return Err(ParseError::Empty);
		}
		if overflow {
			return Err(ArithmeticError::Overflow(result).into());
		}

		Ok(if negative { result.complement() } else { result })
	}

	//		Public methods

	//		as_words
	/// Represents the internal value as a slice of little-endian words.
	#[must_use]
	pub fn as_words(&self) -> &[u8] {
		&self.words
	}

	//		width
	/// The width policy this value carries.
	#[must_use]
	pub const fn width(&self) -> Width {
		self.width
	}

	//		is_negative
	/// Checks whether the sign bit is set.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.words[self.words.len() - 1] & 0x80 != 0
	}

	//		is_zero
	/// Checks whether every bit is clear.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.words.iter().all(|&word| word == 0)
	}

	//		widen
	/// Converts this value to an equal or wider width.
	///
	/// The word sequence is sign-extended to the new width's storage length.
	/// Narrowing is not permitted in either direction: a fixed width never
	/// accepts a wider fixed width, and [`Width::Unlimited`] converts only to
	/// itself.
	///
	/// # Parameters
	///
	/// * `width` - The width policy of the converted value.
	///
	/// # Errors
	///
	/// Returns an error if the requested width is narrower than this value's.
	///
	pub fn widen(&self, width: Width) -> Result<Self, WidthError> {
		if !self.width.fits_within(width) {
			return Err(WidthError::WouldNarrow { from: self.width, to: width });
		}
		Ok(self.normalized(width, self.actual_width().max(width.initial_words())))
	}

	//		try_add
	/// Checked addition.
	///
	/// Computes `self + rhs` at the combined result width.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	/// # Errors
	///
	/// Returns an overflow error carrying the truncated result if the sum is
	/// not representable in a fixed result width.
	///
	pub fn try_add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		let (result, flags) = Self::add_raw(self, rhs);
		if flags.overflow {
			return Err(ArithmeticError::Overflow(result));
		}
		Ok(result)
	}

	//		try_sub
	/// Checked subtraction.
	///
	/// Computes `self - rhs` as `self + (-rhs)`, with overflow detection
	/// inherited from the addition kernel.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	/// # Errors
	///
	/// Returns an overflow error carrying the truncated result if the
	/// difference is not representable in a fixed result width.
	///
	pub fn try_sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		self.try_add(&rhs.complement())
	}

	//		try_mul
	/// Checked multiplication.
	///
	/// Computes `self * rhs` at the combined result width. An unlimited
	/// result is shrunk to the smallest storage that still carries the sign.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	/// # Errors
	///
	/// Returns an overflow error carrying the truncated result if the product
	/// is not representable in a fixed result width.
	///
	pub fn try_mul(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		let (result, overflow) = Self::mul_raw(self, rhs);
		if overflow {
			return Err(ArithmeticError::Overflow(result));
		}
		Ok(result)
	}

	//		try_div
	/// Checked division, truncating the quotient toward zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Errors
	///
	/// Returns an error if `rhs` is zero.
	///
	pub fn try_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		Self::div_mod_raw(self, rhs).map(|(quotient, _)| quotient)
	}

	//		try_rem
	/// Checked remainder.
	///
	/// The remainder is computed on the absolute values of the operands and
	/// is therefore never negative; only the quotient picks up a sign when
	/// the operand signs disagree. Consequently `q * rhs + r == self` is
	/// guaranteed only when both operands are non-negative; for signed
	/// operands the identity holds up to the sign of `r`.
	///
	/// # Parameters
	///
	/// * `rhs` - The divisor.
	///
	/// # Errors
	///
	/// Returns an error if `rhs` is zero.
	///
	pub fn try_rem(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
		Self::div_mod_raw(self, rhs).map(|(_, remainder)| remainder)
	}

	//		factorial
	/// Computes the factorial of this value.
	///
	/// Zero and one both produce one. Overflow is latched across the whole
	/// iteration for fixed widths, so the reported truncated result is the
	/// final product rather than the first overflowing intermediate.
	///
	/// # Errors
	///
	/// Returns an error if the value is negative, or if any multiplication
	/// overflowed a fixed width.
	///
	pub fn factorial(&self) -> Result<Self, ArithmeticError> {
		if self.is_negative() {
			return Err(ArithmeticError::NegativeFactorial);
		}

		let one = Self::one(self.width);
		if self.is_zero() || *self == one {
			return Ok(one);
		}

		let mut overflow   = false;
		let mut result     = self.clone();
		let mut multiplier = Self::from_word(self.width, 2);

		while multiplier != *self {
			let (product, product_overflow) = Self::mul_raw(&result, &multiplier);
			result   = product;
			overflow = overflow || product_overflow;

			//	The multiplier stays below self, so this add cannot overflow
			multiplier = Self::add_raw(&multiplier, &one).0;
		}

		if overflow {
			return Err(ArithmeticError::Overflow(result));
		}
		Ok(result)
	}

	//		try_increment
	/// Checked prefix increment: adds one and rebinds this value.
	///
	/// On error the value is left unchanged.
	///
	/// # Errors
	///
	/// Returns an overflow error carrying the truncated result if the
	/// incremented value is not representable in a fixed width.
	///
	pub fn try_increment(&mut self) -> Result<(), ArithmeticError> {
		*self = self.try_add(&Self::one(self.width))?;
		Ok(())
	}

	//		try_decrement
	/// Checked prefix decrement: subtracts one and rebinds this value.
	///
	/// On error the value is left unchanged.
	///
	/// # Errors
	///
	/// Returns an overflow error carrying the truncated result if the
	/// decremented value is not representable in a fixed width.
	///
	pub fn try_decrement(&mut self) -> Result<(), ArithmeticError> {
		*self = self.try_sub(&Self::one(self.width))?;
		Ok(())
	}

	//		Private methods

	//		from_word
	/// A value of the given width with a single low word set.
	fn from_word(width: Width, word: u8) -> Self {
		let mut result = Self::zero(width);
		result.words[0] = word;
		result
	}

	//		ten
	fn ten(width: Width) -> Self {
		Self::from_word(width, 10)
	}

	//		zero_sized
	/// A zero value with an explicit storage length.
	fn zero_sized(width: Width, actual: usize) -> Self {
		Self { width, words: vec![0x00; actual] }
	}

	//		actual_width
	/// The current storage length in words.
	fn actual_width(&self) -> usize {
		self.words.len()
	}

	//		bits_cnt
	/// The current storage length in bits.
	fn bits_cnt(&self) -> usize {
		self.words.len() * WORD_BITS
	}

	//		bit
	/// Gets the bit at the given position, where 0 is the least significant.
	fn bit(&self, pos: usize) -> bool {
		self.words[pos / WORD_BITS] & (1 << (pos % WORD_BITS)) != 0
	}

	//		set_bit
	/// Sets or clears the bit at the given position.
	fn set_bit(&mut self, pos: usize, value: bool) {
		if value {
			self.words[pos / WORD_BITS] |= 1 << (pos % WORD_BITS);
		} else {
			self.words[pos / WORD_BITS] &= !(1 << (pos % WORD_BITS));
		}
	}

	//		msb_idx
	/// The highest set bit position, or 0 if no bit is set.
	fn msb_idx(&self) -> usize {
		(0..self.bits_cnt()).rev().find(|&pos| self.bit(pos)).unwrap_or(0)
	}

	//		normalized
	/// Sign-extends this value to the requested storage length, under the
	/// requested result width.
	///
	/// Normalization only ever grows: a storage length at or below the
	/// current one leaves the words untouched and merely retags the width.
	///
	fn normalized(&self, width: Width, actual: usize) -> Self {
		let mut words = self.words.clone();
		if words.len() < actual {
			let fill = if self.is_negative() { 0xFF } else { 0x00 };
			words.resize(actual, fill);
		}
		Self { width, words }
	}

	//		inverse
	/// The bitwise inverse, at the same width and storage length.
	fn inverse(&self) -> Self {
		Self {
			width: self.width,
			words: self.words.iter().map(|&word| !word).collect(),
		}
	}

	//		complement
	/// The two's-complement negation: bitwise inverse plus one.
	fn complement(&self) -> Self {
		Self::add_raw(&self.inverse(), &Self::one(self.width)).0
	}

	//		positive
	/// The sign-aware positive projection: the value itself if non-negative,
	/// otherwise its two's-complement negation.
	fn positive(&self) -> Self {
		if self.is_negative() {
			self.complement()
		} else {
			self.clone()
		}
	}

	//		shifted_left
	/// A pure bitstring shift toward the most-significant end, truncating
	/// high bits and zero-filling at the bottom. Storage length is unchanged;
	/// growth during multiplication is the caller's responsibility.
	fn shifted_left(&self, shift: usize) -> Self {
		let len        = self.words.len();
		let word_shift = shift / WORD_BITS;
		let bit_shift  = shift % WORD_BITS;
		let mut words  = vec![0x00; len];

		for i in word_shift..len {
			let low  = self.words[i - word_shift] << bit_shift;
			let high = if bit_shift > 0 && i > word_shift {
				self.words[i - word_shift - 1] >> (WORD_BITS - bit_shift)
			} else {
				0x00
			};
			words[i] = low | high;
		}

		Self { width: self.width, words }
	}

	//		shifted_right
	/// A logical (zero-fill) shift toward the least-significant end. Only
	/// ever applied to non-negative working values inside multiplication and
	/// division; zero-fill is not arithmetically correct for negatives.
	fn shifted_right(&self, shift: usize) -> Self {
		let len        = self.words.len();
		let word_shift = shift / WORD_BITS;
		let bit_shift  = shift % WORD_BITS;
		let mut words  = vec![0x00; len];

		if word_shift < len {
			for i in 0..len - word_shift {
				let low  = self.words[i + word_shift] >> bit_shift;
				let high = if bit_shift > 0 && i + word_shift + 1 < len {
					self.words[i + word_shift + 1] << (WORD_BITS - bit_shift)
				} else {
					0x00
				};
				words[i] = low | high;
			}
		}

		Self { width: self.width, words }
	}

	//		shrink
	/// Drops redundant high words until the storage is the smallest length,
	/// at least [`Width::MIN`], that still represents the value and its sign.
	fn shrink(&mut self) {
		let mut keep = self.words.len();
		while keep > Width::MIN {
			let last = self.words[keep - 1];
			let sign = self.words[keep - 2] & 0x80 != 0;
			if (last == 0x00 && !sign) || (last == 0xFF && sign) {
				keep -= 1;
			} else {
				break;
			}
		}
		self.words.truncate(keep);
	}

	//		Kernels

	//		add_raw
	/// Ripple-carry addition over the common storage length.
	///
	/// Both operands are sign-extended to the wider storage length under the
	/// combined result width, and the words are added least-significant first
	/// with carry propagation. An unlimited result that overflowed its
	/// current storage grows by one sign word; a fixed result reports signed
	/// overflow through the returned flags and is handed back truncated.
	///
	fn add_raw(lhs: &Self, rhs: &Self) -> (Self, AddFlags) {
		let width  = lhs.width.combine(rhs.width);
		let actual = lhs.actual_width().max(rhs.actual_width());
		let left   = lhs.normalized(width, actual);
		let right  = rhs.normalized(width, actual);

		let mut result = Self::zero_sized(width, actual);
		let mut carry  = false;
		for i in 0..actual {
			let (sum1, carry1) = left.words[i].overflowing_add(right.words[i]);
			let (sum2, carry2) = sum1.overflowing_add(u8::from(carry));
			result.words[i]    = sum2;
			carry              = carry1 || carry2;
		}

		let mut flags = AddFlags::default();
		if width.is_unlimited() {
			//	Two non-negatives wrapping negative (or two negatives wrapping
			//	non-negative) means the true value needs one more sign word
			if !left.is_negative() && !right.is_negative() && result.is_negative() {
				result.words.push(0x00);
			} else if left.is_negative() && right.is_negative() && !result.is_negative() {
				result.words.push(0xFF);
			}
		} else if left.is_negative() == right.is_negative() && result.is_negative() != left.is_negative() {
			flags.overflow = true;
		}
		flags.carry = carry;

		(result, flags)
	}

	//		mul_raw
	/// Shift-and-add multiplication on absolute values.
	///
	/// The working operands are the positive projections of the inputs. For
	/// an unlimited result the working storage is doubled up front so that
	/// intermediate carries cannot wrap, and the result is shrunk afterwards;
	/// for a fixed result, a latched carry out of any partial addition or a
	/// set sign bit on the accumulated magnitude marks overflow. The returned
	/// bool is the overflow flag.
	///
	fn mul_raw(lhs: &Self, rhs: &Self) -> (Self, bool) {
		let width            = lhs.width.combine(rhs.width);
		let actual           = lhs.actual_width().max(rhs.actual_width());
		let result_is_nonneg = lhs.is_negative() == rhs.is_negative();

		let mut left  = lhs.positive().normalized(width, actual);
		let mut right = rhs.positive().normalized(width, actual);

		let mut result = Self::zero(width);
		if width.is_unlimited() {
			let extended = 2 * actual;
			left  = left.normalized(width, extended);
			right = right.normalized(width, extended);
		}

		let mut carry = false;
		let right_msb = right.msb_idx();
		for _ in 0..=right_msb {
			if right.bit(0) {
				let (sum, flags) = Self::add_raw(&result, &left);
				result = sum;
				carry  = carry || flags.carry;
			}
			left  = left.shifted_left(1);
			right = right.shifted_right(1);
		}

		//	Both working operands were non-negative, so a set sign bit means
		//	the magnitude exceeded the fixed width
		let overflow = width.is_fixed() && (carry || result.is_negative());

		if width.is_unlimited() {
			result.shrink();
		}

		if result_is_nonneg {
			(result, overflow)
		} else {
			(result.complement(), overflow)
		}
	}

	//		div_mod_raw
	/// Restoring long division on absolute values.
	///
	/// Walks the numerator bits from most to least significant, shifting each
	/// into the remainder and subtracting the denominator whenever it fits.
	/// The quotient is negated when the operand signs disagree; the remainder
	/// is returned as computed on the absolute values.
	///
	fn div_mod_raw(lhs: &Self, rhs: &Self) -> Result<(Self, Self), ArithmeticError> {
		if rhs.is_zero() {
			return Err(ArithmeticError::DivisionByZero);
		}

		let width = lhs.width.combine(rhs.width);
		if lhs.is_zero() {
			return Ok((Self::zero(width), Self::zero(width)));
		}

		let actual           = lhs.actual_width().max(rhs.actual_width());
		let result_is_nonneg = lhs.is_negative() == rhs.is_negative();

		let numerator           = lhs.positive().normalized(width, actual);
		let denominator         = rhs.positive().normalized(width, actual);
		let negated_denominator = denominator.complement();

		let mut quotient  = Self::zero_sized(width, actual);
		let mut remainder = Self::zero_sized(width, actual);

		let numerator_msb = numerator.msb_idx();
		for idx in (0..=numerator_msb).rev() {
			remainder = remainder.shifted_left(1);
			remainder.set_bit(0, numerator.bit(idx));

			let (difference, _) = Self::add_raw(&remainder, &negated_denominator);
			if !difference.is_negative() {
				remainder = difference;
				quotient.set_bit(idx, true);
			}
		}

		if result_is_nonneg {
			Ok((quotient, remainder))
		} else {
			Ok((quotient.complement(), remainder))
		}
	}
}

//󰭅		Add
impl Add for Int {
	type Output = Self;

	//		add
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		self.try_add(&rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		Add: &Int + &Int
impl Add for &Int {
	type Output = Int;

	//		add
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn add(self, rhs: Self) -> Self::Output {
		self.try_add(rhs).expect("Attempt to add overflowed")
	}
}

//󰭅		AddAssign
impl AddAssign for Int {
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		assert!(rhs.width.fits_within(self.width), "Attempt to assign a wider value to a narrower one");
		*self = &*self + &rhs;
	}
}

//󰭅		Debug
impl Debug for Int {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - Int(width, value)
		write!(f, "Int({}, {})", self.width, self)?;

		//	For alternate formatting (#), show the word vector
		if f.alternate() {
			write!(f, " [")?;
			for (i, word) in self.words.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{word:02x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Default
impl Default for Int {
	//		default
	fn default() -> Self {
		Self::zero(Width::Unlimited)
	}
}

//󰭅		Deserialize
impl<'de> Deserialize<'de> for Int {
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(IntVisitor)
		} else {
			//	For binary formats, expect the decimal string form
			deserializer.deserialize_str(IntVisitor)
		}
	}
}

//󰭅		Display
impl Display for Int {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Handle zero case
		if self.is_zero() {
			return write!(f, "0");
		}

		let mut remaining = self.clone();
		let mut negative  = false;
		if remaining.is_negative() {
			remaining = remaining.complement();
			negative  = true;
		}

		//	Convert to decimal digits by repeated division by ten
		let ten        = Self::ten(self.width);
		let mut digits = Vec::new();
		while !remaining.is_zero() {
			let (quotient, rem) = Self::div_mod_raw(&remaining, &ten).map_err(|_| fmt::Error)?;
			digits.push(match char::from_digit(u32::from(rem.words[0]), 10) {
				Some(digit) => digit,
				None        => return Err(fmt::Error),
			});
			remaining = quotient;
		}

		if negative {
			write!(f, "-")?;
		}

		//	Write digits in reverse order
		for digit in digits.iter().rev() {
			write!(f, "{digit}")?;
		}

		Ok(())
	}
}

//󰭅		Div
impl Div for Int {
	type Output = Self;

	//		div
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.try_div(&rhs).expect("Attempt to divide overflowed")
	}
}

//󰭅		Div: &Int / &Int
impl Div for &Int {
	type Output = Int;

	//		div
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.try_div(rhs).expect("Attempt to divide overflowed")
	}
}

//󰭅		DivAssign
impl DivAssign for Int {
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		assert!(rhs.width.fits_within(self.width), "Attempt to assign a wider value to a narrower one");
		*self = &*self / &rhs;
	}
}

//󰭅		Eq
impl Eq for Int {}

//󰭅		From: i8 -> Int
impl From<i8> for Int {
	//		from
	fn from(v: i8) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: i16 -> Int
impl From<i16> for Int {
	//		from
	fn from(v: i16) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: i32 -> Int
impl From<i32> for Int {
	//		from
	fn from(v: i32) -> Self {
		Self::from(i64::from(v))
	}
}

//󰭅		From: i64 -> Int
impl From<i64> for Int {
	//		from
	fn from(v: i64) -> Self {
		let mut result = Self { width: Width::Unlimited, words: v.to_le_bytes().to_vec() };
		result.shrink();
		result
	}
}

//󰭅		From: u8 -> Int
impl From<u8> for Int {
	//		from
	fn from(v: u8) -> Self {
		Self::from(u64::from(v))
	}
}

//󰭅		From: u16 -> Int
impl From<u16> for Int {
	//		from
	fn from(v: u16) -> Self {
		Self::from(u64::from(v))
	}
}

//󰭅		From: u32 -> Int
impl From<u32> for Int {
	//		from
	fn from(v: u32) -> Self {
		Self::from(u64::from(v))
	}
}

//󰭅		From: u64 -> Int
impl From<u64> for Int {
	//		from
	fn from(v: u64) -> Self {
		//	An extra zero word keeps the top of the u64 range non-negative
		let mut words = v.to_le_bytes().to_vec();
		words.push(0x00);
		let mut result = Self { width: Width::Unlimited, words };
		result.shrink();
		result
	}
}

//󰭅		FromStr
impl FromStr for Int {
	type Err = ParseError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_decimal(s, Width::Unlimited)
	}
}

//󰭅		Mul
impl Mul for Int {
	type Output = Self;

	//		mul
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.try_mul(&rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		Mul: &Int * &Int
impl Mul for &Int {
	type Output = Int;

	//		mul
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn mul(self, rhs: Self) -> Self::Output {
		self.try_mul(rhs).expect("Attempt to multiply overflowed")
	}
}

//󰭅		MulAssign
impl MulAssign for Int {
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		assert!(rhs.width.fits_within(self.width), "Attempt to assign a wider value to a narrower one");
		*self = &*self * &rhs;
	}
}

//󰭅		Neg
impl Neg for Int {
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		self.complement()
	}
}

//󰭅		Neg: -&Int
impl Neg for &Int {
	type Output = Int;

	//		neg
	fn neg(self) -> Self::Output {
		self.complement()
	}
}

//󰭅		PartialEq
impl PartialEq for Int {
	//		eq
	fn eq(&self, other: &Self) -> bool {
		//	Different signs can never be equal, whatever the widths
		if self.is_negative() != other.is_negative() {
			return false;
		}

		let width  = self.width.combine(other.width);
		let actual = self.actual_width().max(other.actual_width());
		self.normalized(width, actual).words == other.normalized(width, actual).words
	}
}

//󰭅		Rem
impl Rem for Int {
	type Output = Self;

	//		rem
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate the remainder with a divisor of zero");
		self.try_rem(&rhs).expect("Attempt to calculate the remainder overflowed")
	}
}

//󰭅		Rem: &Int % &Int
impl Rem for &Int {
	type Output = Int;

	//		rem
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Self) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate the remainder with a divisor of zero");
		self.try_rem(rhs).expect("Attempt to calculate the remainder overflowed")
	}
}

//󰭅		RemAssign
impl RemAssign for Int {
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		assert!(rhs.width.fits_within(self.width), "Attempt to assign a wider value to a narrower one");
		*self = &*self % &rhs;
	}
}

//󰭅		Serialize
impl Serialize for Int {
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(self)
	}
}

//󰭅		Sub
impl Sub for Int {
	type Output = Self;

	//		sub
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.try_sub(&rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		Sub: &Int - &Int
impl Sub for &Int {
	type Output = Int;

	//		sub
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: Self) -> Self::Output {
		self.try_sub(rhs).expect("Attempt to subtract overflowed")
	}
}

//󰭅		SubAssign
impl SubAssign for Int {
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		assert!(rhs.width.fits_within(self.width), "Attempt to assign a wider value to a narrower one");
		*self = &*self - &rhs;
	}
}

//		IntVisitor
/// Serde visitor accepting the decimal string form and native integers.
struct IntVisitor;

//󰭅		Visitor
impl Visitor<'_> for IntVisitor {
	type Value = Int;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str("a decimal integer string or an integer")
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse::<Int>().map_err(E::custom)
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Int::from(v))
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Int::from(v))
	}
}
