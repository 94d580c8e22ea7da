//! Interactive calculator terminal.
//!
//! A line-oriented read-eval-print loop over any input/output pair. Commands
//! are either `bank`, a factorial such as `12!`, or a binary operation such
//! as `12 * -34`, with operands given as decimal literals or `$k` references
//! into the bank of the five most recent results.



//		Modules

#[cfg(test)]
#[path = "tests/term.rs"]
mod tests;



//		Packages

use crate::errors::{ArithmeticError, CommandError};
use crate::{Int, Width};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;
use std::io::{BufRead, Write, self};
use tracing::debug;



//		Constants

/// Number of results the terminal retains; `$1` is the most recent.
pub const BANK_SIZE: usize = 5;

/// Pattern for a factorial command: a bank slot or a decimal literal,
/// followed by `!`.
static FACTORIAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
	#[expect(clippy::expect_used, reason = "Hard-coded pattern")]
	let pattern = Regex::new(r"^(?:(\$[1-5])|(0|-?[1-9][0-9]*))!$").expect("Factorial pattern is valid");
	pattern
});

/// Pattern for a binary operation: two operands around one of the five
/// operators, with optional whitespace.
static BINARY_OP_PATTERN: Lazy<Regex> = Lazy::new(|| {
	#[expect(clippy::expect_used, reason = "Hard-coded pattern")]
	let pattern = Regex::new(r"^((\$[1-5])|(0|-?[1-9][0-9]*))\s*([+\-*/%])\s*((\$[1-5])|(0|-?[1-9][0-9]*))$")
		.expect("Binary operation pattern is valid");
	pattern
});



//		Enums

//		Operand
/// A number position in a command: a bank slot or a decimal literal.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Operand {
	/// A `$k` reference into the result bank, 1-based.
	Slot(usize),

	/// A decimal literal, decoded at evaluation time at the terminal width.
	Literal(String),
}

//󰭅		Operand
impl Operand {
	//		parse
	fn parse(sym: &str) -> Self {
		sym.strip_prefix('$').map_or_else(
			|| Self::Literal(sym.to_owned()),
			|digits| Self::Slot(digits.parse().unwrap_or_default()),
		)
	}
}

//		BinOp
/// One of the five binary operators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum BinOp {
	/// Addition.
	Add,

	/// Subtraction.
	Sub,

	/// Multiplication.
	Mul,

	/// Division.
	Div,

	/// Remainder.
	Rem,
}

//󰭅		BinOp
impl BinOp {
	//		from_symbol
	fn from_symbol(symbol: &str) -> Result<Self, CommandError> {
		match symbol {
			"+" => Ok(Self::Add),
			"-" => Ok(Self::Sub),
			"*" => Ok(Self::Mul),
			"/" => Ok(Self::Div),
			"%" => Ok(Self::Rem),
			_   => Err(CommandError::InvalidFormat),
		}
	}

	//		apply
	fn apply(self, lhs: &Int, rhs: &Int) -> Result<Int, ArithmeticError> {
		match self {
			Self::Add => lhs.try_add(rhs),
			Self::Sub => lhs.try_sub(rhs),
			Self::Mul => lhs.try_mul(rhs),
			Self::Div => lhs.try_div(rhs),
			Self::Rem => lhs.try_rem(rhs),
		}
	}
}

//		Command
/// A parsed terminal command.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
	/// List the filled bank slots.
	Bank,

	/// Compute the factorial of the operand.
	Factorial(Operand),

	/// Apply a binary operator to two operands.
	Binary(Operand, BinOp, Operand),
}

//󰭅		Command
impl Command {
	//		parse
	fn parse(cmd: &str) -> Result<Self, CommandError> {
		if cmd == "bank" {
			return Ok(Self::Bank);
		}

		if cmd.contains('!') {
			let captures = FACTORIAL_PATTERN.captures(cmd).ok_or(CommandError::InvalidFormat)?;
			let sym      = captures.get(1).or_else(|| captures.get(2)).ok_or(CommandError::InvalidFormat)?;
			return Ok(Self::Factorial(Operand::parse(sym.as_str())));
		}

		let captures = BINARY_OP_PATTERN.captures(cmd).ok_or(CommandError::InvalidFormat)?;
		let lhs      = captures.get(1).ok_or(CommandError::InvalidFormat)?;
		let op       = captures.get(4).ok_or(CommandError::InvalidFormat)?;
		let rhs      = captures.get(5).ok_or(CommandError::InvalidFormat)?;
		Ok(Self::Binary(
			Operand::parse(lhs.as_str()),
			BinOp::from_symbol(op.as_str())?,
			Operand::parse(rhs.as_str()),
		))
	}
}



//		Structs

//		Terminal
/// The interactive calculator session.
///
/// Every number in one session shares the session's [`Width`]; results are
/// pushed into a bank of the [`BANK_SIZE`] most recent values, addressable
/// as `$1` (newest) through `$5` (oldest). Errors are printed in the form
/// `[ERROR] <message>` and never end the session; `exit` or end of input
/// does.
#[derive(Debug)]
pub struct Terminal<W: Write> {
	/// Where results, errors, and prompts are written.
	output: W,

	/// The width every number in this session is constructed at.
	width:  Width,

	/// The most recent results, newest first.
	bank:   VecDeque<Int>,
}

//󰭅		Terminal
impl<W: Write> Terminal<W> {
	//		Public methods

	//		run
	/// Runs a calculator session to the end of input.
	///
	/// Reads commands line by line, evaluating each and printing either the
	/// newest bank entry as `$1 = <value>` or an `[ERROR]` line, followed by
	/// a fresh `> ` prompt. An empty line reprompts, and a line reading
	/// exactly `exit` ends the session.
	///
	/// # Parameters
	///
	/// * `input`  - The command source.
	/// * `output` - The sink for prompts, results, and errors.
	/// * `width`  - The width every number in the session is constructed at.
	///
	/// # Errors
	///
	/// Returns an error only if reading or writing fails; evaluation errors
	/// are printed and the session continues.
	///
	pub fn run<R: BufRead>(input: R, output: W, width: Width) -> io::Result<()> {
		let mut terminal = Self { output, width, bank: VecDeque::with_capacity(BANK_SIZE) };

		terminal.prompt()?;
		for line in input.lines() {
			let line = line?;
			if line.is_empty() {
				terminal.prompt()?;
				continue;
			}
			if line == "exit" {
				break;
			}
			terminal.dispatch(line.trim())?;
			terminal.prompt()?;
		}
		Ok(())
	}

	//		Private methods

	//		dispatch
	/// Evaluates one command and writes its output or error.
	fn dispatch(&mut self, command: &str) -> io::Result<()> {
		debug!(command, "Dispatching terminal command");
		match self.apply(command) {
			Ok(lines) => {
				for line in &lines {
					writeln!(self.output, "{line}")?;
				}
			}
			Err(err) => writeln!(self.output, "[ERROR] {err}")?,
		}
		Ok(())
	}

	//		apply
	/// Parses and evaluates one command, returning the lines to print.
	fn apply(&mut self, command: &str) -> Result<Vec<String>, CommandError> {
		match Command::parse(command)? {
			Command::Bank => Ok(self.bank
				.iter()
				.enumerate()
				.map(|(i, value)| format!("${} = {value}", i + 1))
				.collect()
			),
			Command::Factorial(operand) => {
				let result = self.resolve(&operand)?.factorial()?;
				Ok(vec![self.save(result)])
			}
			Command::Binary(lhs, op, rhs) => {
				let result = op.apply(&self.resolve(&lhs)?, &self.resolve(&rhs)?)?;
				Ok(vec![self.save(result)])
			}
		}
	}

	//		resolve
	/// Materialises an operand: looks up a bank slot or decodes a literal.
	fn resolve(&self, operand: &Operand) -> Result<Int, CommandError> {
		match *operand {
			Operand::Slot(slot)        => slot
				.checked_sub(1)
				.and_then(|idx| self.bank.get(idx))
				.cloned()
				.ok_or(CommandError::OutOfBankRange),
			Operand::Literal(ref text) => Ok(Int::from_decimal(text, self.width)?),
		}
	}

	//		save
	/// Pushes a result into the bank, dropping the oldest entry if full, and
	/// returns the `$1 = <value>` line for it.
	fn save(&mut self, result: Int) -> String {
		let line = format!("$1 = {result}");
		self.bank.push_front(result);
		self.bank.truncate(BANK_SIZE);
		debug!(bank_len = self.bank.len(), "Saved result to bank");
		line
	}

	//		prompt
	/// Writes and flushes the prompt.
	fn prompt(&mut self) -> io::Result<()> {
		write!(self.output, "> ")?;
		self.output.flush()
	}
}
