//! Scripted tour of the integer library.
//!
//! Exercises the public surface end to end at both a fixed and the unlimited
//! width: construction from text, the five operators, factorial, widening,
//! and the error reporting, writing a readable transcript as it goes.



//		Packages

use crate::errors::ArithmeticError;
use crate::{Int, Width};
use std::io::{Write, self};



//		Functions

//		run
/// Prints the library showcase.
///
/// # Parameters
///
/// * `output` - The sink for the transcript.
///
/// # Errors
///
/// Returns an error only if writing fails.
///
pub fn run<W: Write>(mut output: W) -> io::Result<()> {
	let fixed     = Width::Fixed(4);
	let unlimited = Width::Unlimited;

	writeln!(output, "mpint Library Showcase")?;
	writeln!(output, "======================")?;

	writeln!(output)?;
	writeln!(output, "Binary operations at {fixed} precision:")?;
	demo_binary(&mut output, "-123456", "678", fixed)?;

	writeln!(output)?;
	writeln!(output, "Binary operations at {unlimited} precision:")?;
	demo_binary(&mut output, "-123456789123456789123456789123456789", "987654321987654321987654321", unlimited)?;

	writeln!(output)?;
	writeln!(output, "Factorials:")?;
	demo_factorial(&mut output, "12", fixed)?;
	demo_factorial(&mut output, "13", fixed)?;
	demo_factorial(&mut output, "40", unlimited)?;

	writeln!(output)?;
	writeln!(output, "Overflow at {fixed} precision:")?;
	match Int::from_decimal("2147483648", fixed) {
		Ok(value) => writeln!(output, "  2147483648 = {value}")?,
		Err(err)  => writeln!(output, "  2147483648 -> [ERROR] {err}")?,
	}

	writeln!(output)?;
	writeln!(output, "Widening from {fixed} to {unlimited}:")?;
	demo_widening(&mut output, "-1234567890", fixed)?;

	writeln!(output)?;
	writeln!(output, "Division by zero:")?;
	let one = Int::one(unlimited);
	match one.try_div(&Int::zero(unlimited)) {
		Ok(value) => writeln!(output, "  1 / 0 = {value}")?,
		Err(err)  => writeln!(output, "  1 / 0 -> [ERROR] {err}")?,
	}

	Ok(())
}

//		demo_binary
/// Prints the five binary operations for one pair of literals.
fn demo_binary<W: Write>(output: &mut W, lhs: &str, rhs: &str, width: Width) -> io::Result<()> {
	let Ok(left)  = Int::from_decimal(lhs, width) else {
		return writeln!(output, "  {lhs} does not fit {width}");
	};
	let Ok(right) = Int::from_decimal(rhs, width) else {
		return writeln!(output, "  {rhs} does not fit {width}");
	};

	for (symbol, result) in [
		("+", left.try_add(&right)),
		("-", left.try_sub(&right)),
		("*", left.try_mul(&right)),
		("/", left.try_div(&right)),
		("%", left.try_rem(&right)),
	] {
		report(output, &format!("{left} {symbol} {right}"), &result)?;
	}
	Ok(())
}

//		demo_factorial
/// Prints one factorial, successful or not.
fn demo_factorial<W: Write>(output: &mut W, text: &str, width: Width) -> io::Result<()> {
	let Ok(value) = Int::from_decimal(text, width) else {
		return writeln!(output, "  {text} does not fit {width}");
	};
	report(output, &format!("{value}! at {width}"), &value.factorial())
}

//		demo_widening
/// Squares a value at its own width and again after widening to unlimited.
fn demo_widening<W: Write>(output: &mut W, text: &str, width: Width) -> io::Result<()> {
	let Ok(value) = Int::from_decimal(text, width) else {
		return writeln!(output, "  {text} does not fit {width}");
	};

	report(output, &format!("{value} squared at {width}"), &value.try_mul(&value))?;
	match value.widen(Width::Unlimited) {
		Ok(widened) => report(
			output,
			&format!("{widened} squared at {}", Width::Unlimited),
			&widened.try_mul(&widened),
		),
		Err(err)    => writeln!(output, "  widening failed: {err}"),
	}
}

//		report
/// Prints one `expression = result` or `expression -> [ERROR]` line.
fn report<W: Write>(output: &mut W, expression: &str, result: &Result<Int, ArithmeticError>) -> io::Result<()> {
	match *result {
		Ok(ref value) => writeln!(output, "  {expression} = {value}"),
		Err(ref err)  => writeln!(output, "  {expression} -> [ERROR] {err}"),
	}
}
