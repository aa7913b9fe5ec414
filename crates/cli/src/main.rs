//! `lootbox`: drives the headless storefront from the command line.

mod cli;
mod commands;
mod script;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let mut out = std::io::stdout().lock();
	commands::execute(&cli, &mut out)
}

/// Logs go to stderr so command output stays pipeable. `LOOTBOX_LOG` takes
/// an `EnvFilter` directive and overrides `--verbose`.
fn init_tracing(verbose: bool) {
	let fallback = if verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_env("LOOTBOX_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
