//! Interactive shopping session.
//!
//! Reads one command per line. The listing query lives in the session, so a
//! search stays active while the cart changes, the same way the page keeps
//! its filters between clicks. Store errors are reported and the session
//! carries on.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use shopfront_core::{ProductId, SortDirection};
use shopfront_storefront::{CartMirror, StoreError, Storefront, parse_category};

use super::CliError;
use crate::render;

#[derive(Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Show the current listing
    Products,
    /// Set the search text (empty clears it)
    Search {
        #[arg(allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Select a category ("All Products" or nothing shows everything)
    Category {
        #[arg(allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Set the price order (`asc` or `desc`)
    Sort { direction: SortDirection },
    /// Flip the price order
    ToggleSort,
    /// List product categories
    Categories,
    /// Show the cart
    Cart,
    /// Add a product to the cart
    Add { id: String },
    /// Add one unit of a product already in the cart
    Increase { id: String },
    /// Remove one unit of a product in the cart
    Decrease { id: String },
    /// Empty the cart
    Clear,
    /// Place the order
    Checkout,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Run commands from `input` until it ends or `quit` is read.
///
/// # Errors
///
/// Returns `CliError::Io` if reading or writing fails, or `CliError::Store`
/// if the cart cannot be persisted.
pub fn run<M: CartMirror>(
    store: &mut Storefront<M>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    render::listing(out, &store.listing())?;

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(out, "{}", err.render())?;
                continue;
            }
        };

        if matches!(command, ShellCommand::Quit) {
            break;
        }

        match execute(store, command, &line, out) {
            Ok(()) => {}
            Err(CliError::Store(
                err @ (StoreError::UnknownProduct(_)
                | StoreError::EmptyCart
                | StoreError::AmountOverflow),
            )) => {
                tracing::debug!(error = %err, "Shell command rejected");
                writeln!(out, "{err}")?;
            }
            Err(err) => return Err(err),
        }
    }

    out.flush()?;
    Ok(())
}

/// Text after the command word, spacing inside it kept as typed.
fn argument_text<'a>(line: &'a str, words: &[String]) -> &'a str {
    if words.is_empty() {
        return "";
    }
    line.trim_start()
        .split_once(char::is_whitespace)
        .map_or("", |(_, rest)| rest.trim())
}

fn execute<M: CartMirror>(
    store: &mut Storefront<M>,
    command: ShellCommand,
    line: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        ShellCommand::Products => render::listing(out, &store.listing())?,
        ShellCommand::Search { text } => {
            let search = argument_text(line, &text).to_owned();
            render::listing(out, &store.set_search(search))?;
        }
        ShellCommand::Category { name } => {
            let category = parse_category(argument_text(line, &name));
            render::listing(out, &store.select_category(category))?;
        }
        ShellCommand::Sort { direction } => render::listing(out, &store.set_sort(direction))?,
        ShellCommand::ToggleSort => render::listing(out, &store.toggle_sort())?,
        ShellCommand::Categories => render::categories(out, &store.categories())?,
        ShellCommand::Cart => render::cart(out, &store.cart_summary())?,
        ShellCommand::Add { id } => super::cart::add(store, &ProductId::new(id), out)?,
        ShellCommand::Increase { id } => super::cart::increase(store, &ProductId::new(id), out)?,
        ShellCommand::Decrease { id } => super::cart::decrease(store, &ProductId::new(id), out)?,
        ShellCommand::Clear => super::cart::clear(store, out)?,
        ShellCommand::Checkout => super::cart::checkout(store, out)?,
        ShellCommand::Quit => {}
    }
    Ok(())
}
