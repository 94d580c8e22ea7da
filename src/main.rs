//! Command-line entry point for the mpcalc calculator.



//		Packages

use clap::Parser;
use mpint::{Width, showcase, term::Terminal};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;



//		Structs

//		Args
/// The mpcalc command-line interface.
#[derive(Debug, Parser)]
#[command(name = "mpcalc", about = "Multi-precision integer calculator", version)]
struct Args {
	/// Mode: 1: Terminal [Unlimited Precision], 2: Terminal [32B Precision],
	/// 3: Library Showcase
	#[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
	mode: u8,
}



//		Functions

//		main
fn main() -> io::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(io::stderr)
		.init();

	let args = Args::parse();
	debug!(mode = args.mode, "Starting mpcalc");

	let stdin  = io::stdin();
	let stdout = io::stdout();
	match args.mode {
		1 => Terminal::run(stdin.lock(), stdout.lock(), Width::Unlimited),
		2 => Terminal::run(stdin.lock(), stdout.lock(), Width::Fixed(32)),
		_ => showcase::run(stdout.lock()),
	}
}
