use std::path::PathBuf;

use clap::{Parser, Subcommand};


#[derive(Parser, Debug)]
#[command(name = "lootbox")]
#[command(about = "Headless LootBox PC storefront")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Storefront markup (TOML); the bundled catalog when omitted
	#[arg(long, value_name = "PATH", global = true)]
	pub markup: Option<PathBuf>,

	/// JSON file holding browser storage
	#[arg(long, value_name = "PATH", global = true)]
	pub storage: Option<PathBuf>,

	/// Runtime options (TOML)
	#[arg(long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// URL fragment the page opens at (e.g., #components)
	#[arg(long, short = 'f', global = true)]
	pub fragment: Option<String>,

	/// Behave as if the user prefers reduced motion
	#[arg(long, global = true)]
	pub reduced_motion: bool,

	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Load the page and print what it shows
	Show,
	/// Inspect or edit the stored cart
	Cart {
		/// Cart subcommand action.
		#[command(subcommand)]
		action: CartAction,
	},
	/// Run a session script and print the final page state
	Run {
		/// Script file, one event per line
		script: PathBuf,
		/// Print the state as JSON
		#[arg(long)]
		json: bool,
	},
	/// Print the info overlay of a product
	Specs {
		/// Product name as shown on its card
		product: String,
	},
}

/// Cart subcommands.
#[derive(Subcommand, Debug)]
pub enum CartAction {
	/// List cart lines
	List,
	/// Add one unit of a catalog product
	Add {
		/// Product name as shown on its card
		product: String,
	},
	/// Remove a line
	Remove { name: String },
	/// Set the quantity of a line (clamped to at least 1)
	Set {
		name: String,
		#[arg(allow_negative_numbers = true)]
		quantity: i64,
	},
	/// Empty the cart
	Clear,
	/// Print the cart total
	Total,
}

impl Cli {
	pub fn storage_path(&self) -> PathBuf {
		self.storage.clone().unwrap_or_else(default_storage_path)
	}
}

/// `<data dir>/lootbox/storage.json`, falling back to the cache or temp dir.
pub fn default_storage_path() -> PathBuf {
	dirs::data_dir()
		.or_else(dirs::cache_dir)
		.unwrap_or_else(std::env::temp_dir)
		.join("lootbox")
		.join("storage.json")
}
