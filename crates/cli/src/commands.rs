use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use lootbox_cart::{Cart, format_price};
use lootbox_document::Markup;
use lootbox_storage::{FileStorage, Storage};
use lootbox_storefront::specs::OverlayContent;
use lootbox_storefront::{Options, Storefront, capture_product, find_card};
use tracing::{debug, info};

use crate::cli::{CartAction, Cli, Command};
use crate::script::Script;


/// Runs the selected subcommand, writing its report to `out`.
pub fn execute(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
	let markup = load_markup(cli.markup.as_deref())?;
	let options = load_options(cli)?;
	let storage_path = cli.storage_path();
	debug!(storage = %storage_path.display(), "cli.start");

	match &cli.command {
		Command::Show => {
			let shop = Storefront::new(markup.build(options.viewport), open_storage(&storage_path)?, options)?;
			write!(out, "{}", shop.state())?;
		}
		Command::Cart { action } => {
			let storage = open_storage(&storage_path)?;
			let mut cart = Cart::load_with_key(storage, options.storage_key.clone());
			cart_command(action, &mut cart, &markup, &options, out)?;
		}
		Command::Run { script, json } => {
			let source = fs::read_to_string(script)
				.with_context(|| format!("failed to read script '{}'", script.display()))?;
			let script: Script = source.parse()?;
			let mut shop = Storefront::new(markup.build(options.viewport), open_storage(&storage_path)?, options)?;
			script.run(&mut shop)?;
			info!(steps = script.len(), now_ms = shop.now().as_millis() as u64, "script.done");
			let state = shop.state();
			if *json {
				writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
			} else {
				write!(out, "{state}")?;
			}
		}
		Command::Specs { product } => specs(product, &markup, &options, out)?,
	}
	Ok(())
}

fn load_markup(path: Option<&Path>) -> anyhow::Result<Markup> {
	Ok(match path {
		Some(path) => Markup::load(path)?,
		None => Markup::bundled()?,
	})
}

/// Options file first, then command-line overrides.
fn load_options(cli: &Cli) -> anyhow::Result<Options> {
	let mut options = match &cli.config {
		Some(path) => {
			let source = fs::read_to_string(path)
				.with_context(|| format!("failed to read config '{}'", path.display()))?;
			Options::from_toml_str(&source).with_context(|| format!("in config '{}'", path.display()))?
		}
		None => Options::default(),
	};
	if let Some(fragment) = &cli.fragment {
		options.fragment = Some(fragment.clone());
	}
	if cli.reduced_motion {
		options.reduced_motion = true;
	}
	Ok(options)
}

fn open_storage(path: &Path) -> anyhow::Result<FileStorage> {
	FileStorage::open(path).with_context(|| format!("failed to open storage '{}'", path.display()))
}

fn cart_command<S: Storage>(
	action: &CartAction,
	cart: &mut Cart<S>,
	markup: &Markup,
	options: &Options,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	match action {
		CartAction::List => {}
		CartAction::Add { product } => {
			let doc = markup.build(options.viewport);
			let Some(item) = find_card(&doc, product).and_then(|card| capture_product(&doc, card)) else {
				bail!("no product card titled '{product}'");
			};
			let notification = cart.add_item(item)?;
			writeln!(out, "{}", notification.message)?;
		}
		CartAction::Remove { name } => cart.remove_item(name)?,
		CartAction::Set { name, quantity } => cart.update_quantity(name, *quantity)?,
		CartAction::Clear => cart.clear()?,
		CartAction::Total => {
			writeln!(out, "{}", format_price(cart.checked_total()?))?;
			return Ok(());
		}
	}
	list(cart, out)
}

fn list<S: Storage>(cart: &Cart<S>, out: &mut impl Write) -> anyhow::Result<()> {
	if cart.is_empty() {
		writeln!(out, "cart is empty")?;
		return Ok(());
	}
	for item in cart.items() {
		writeln!(
			out,
			"{} x{} @ {} = {}",
			item.name,
			item.quantity,
			item.price,
			format_price(item.line_total())
		)?;
	}
	writeln!(out, "{} item(s), total {}", cart.item_count(), format_price(cart.total()))?;
	Ok(())
}

fn specs(product: &str, markup: &Markup, options: &Options, out: &mut impl Write) -> anyhow::Result<()> {
	let doc = markup.build(options.viewport);
	let description = find_card(&doc, product)
		.and_then(|card| doc.descendant_with_class(card, "text-gray-400"))
		.map(|node| doc.text(node).to_owned())
		.unwrap_or_default();
	let Some(overlay) = OverlayContent::for_product(product, &description) else {
		bail!("no details for '{product}'");
	};
	writeln!(out, "{}", overlay.aria_label)?;
	writeln!(out, "{}", overlay.heading)?;
	for line in &overlay.lines {
		writeln!(out, "  - {line}")?;
	}
	Ok(())
}
