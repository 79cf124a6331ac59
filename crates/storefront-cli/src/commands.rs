//! Command parsing
//!
//! Translates one line of user input into either an action for the store or a
//! request to show one of the derived views.

use std::str::FromStr;

use storefront::actions::{CartAction, GlobalAction, SelectionAction, WishListAction};
use storefront::domain_models::{Product, ProductCategory, ProductId};
use storefront::{Action, AppState};
use thiserror::Error;

/// What the session should do with a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed an action into the store
    Dispatch(Action),
    ListProducts,
    ListCategories,
    ShowCart,
    ShowWishList,
    /// Ask for confirmation, then settle the cart
    Checkout,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a product id")]
    InvalidProductId(String),

    #[error("No product {0} in the catalog")]
    UnknownProduct(ProductId),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

/// One-line summaries shown by `help`
pub const HELP: &[(&str, &str)] = &[
    ("list", "List products of the current category"),
    ("categories", "List all categories"),
    ("category <name>", "Select a category"),
    ("next / prev", "Cycle through categories"),
    ("expand <id>", "Show or hide product details"),
    ("add <id>", "Add one unit to the cart"),
    ("remove <id>", "Remove one unit from the cart"),
    ("cart", "Show the cart"),
    ("wish <id>", "Add a product to the wish list"),
    ("unwish <id>", "Remove a product from the wish list"),
    ("move <id>", "Move a product from the wish list to the cart"),
    ("wishlist", "Show the wish list"),
    ("checkout", "Pay for everything in the cart"),
    ("theme [dark|light]", "Switch or toggle the theme"),
    ("reset", "Empty cart and wish list"),
    ("help", "Show this help"),
    ("quit", "Leave the store"),
];

/// Parse a line of input. Empty lines yield `Ok(None)`.
pub fn parse_command(line: &str, state: &AppState) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let command = match name.to_lowercase().as_str() {
        "list" | "ls" => Command::ListProducts,
        "categories" => Command::ListCategories,
        "category" | "cat" => {
            let name = argument.ok_or(CommandError::MissingArgument("category name"))?;
            let category = ProductCategory::from_str(name)
                .map_err(|_| CommandError::UnknownCategory(name.to_string()))?;
            Command::Dispatch(SelectionAction::SelectCategory(category).into())
        }
        "next" => Command::Dispatch(SelectionAction::SelectNextCategory.into()),
        "prev" => Command::Dispatch(SelectionAction::SelectPreviousCategory.into()),
        "expand" => {
            let id = parse_id(argument)?;
            Command::Dispatch(SelectionAction::ToggleExpanded(id).into())
        }
        "add" => {
            let product = lookup(state, parse_id(argument)?)?;
            Command::Dispatch(CartAction::Add(product).into())
        }
        "remove" | "rm" => Command::Dispatch(CartAction::Remove(parse_id(argument)?).into()),
        "cart" => Command::ShowCart,
        "wish" => {
            let product = lookup(state, parse_id(argument)?)?;
            Command::Dispatch(WishListAction::Add(product).into())
        }
        "unwish" => Command::Dispatch(WishListAction::Remove(parse_id(argument)?).into()),
        "move" => {
            let product = lookup(state, parse_id(argument)?)?;
            Command::Dispatch(WishListAction::MoveToCart(product).into())
        }
        "wishlist" => Command::ShowWishList,
        "checkout" => Command::Checkout,
        "theme" => match argument {
            Some("dark") => Command::Dispatch(SelectionAction::SetDarkMode(true).into()),
            Some("light") => Command::Dispatch(SelectionAction::SetDarkMode(false).into()),
            _ => Command::Dispatch(SelectionAction::ToggleDarkMode.into()),
        },
        "reset" => Command::Dispatch(GlobalAction::Reset.into()),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(argument: Option<&str>) -> Result<ProductId, CommandError> {
    let raw = argument.ok_or(CommandError::MissingArgument("product id"))?;
    raw.trim_start_matches('#')
        .parse::<i64>()
        .map(ProductId::new)
        .map_err(|_| CommandError::InvalidProductId(raw.to_string()))
}

fn lookup(state: &AppState, id: ProductId) -> Result<Product, CommandError> {
    state
        .catalog
        .find(id)
        .cloned()
        .ok_or(CommandError::UnknownProduct(id))
}
