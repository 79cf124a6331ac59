//! Interactive session
//!
//! Reads commands line by line, feeds them into the store and prints the
//! derived views. Cart and wish list changes are announced through a store
//! subscription rather than by polling the state.

use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use storefront::actions::CartAction;
use storefront::{Action, Store};

use crate::commands::{parse_command, Command};
use crate::format::format_price;
use crate::views;

pub struct Session {
    store: Store,
    currency_symbol: String,
    notifications: Arc<Mutex<Vec<String>>>,
}

impl Session {
    pub fn new(mut store: Store, currency_symbol: impl Into<String>) -> Self {
        let currency_symbol = currency_symbol.into();
        let notifications = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&notifications);
        let symbol = currency_symbol.clone();
        store.subscribe(move |state, action| {
            if matches!(action, Action::Cart(_) | Action::WishList(_)) {
                if let Ok(mut pending) = sink.lock() {
                    pending.push(views::status_line(state, &symbol));
                }
            }
        });

        Self {
            store,
            currency_symbol,
            notifications,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        writeln!(output, "Welcome to the storefront. Type 'help' for commands.")?;
        write!(output, "{}", views::render_products(self.store.state(), &self.currency_symbol))?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match parse_command(&line, self.store.state()) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    log::debug!("Rejected input '{}': {}", line.trim(), e);
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            if !self.execute(command, input, output)? {
                break;
            }
            self.flush_notifications(output)?;
        }

        Ok(())
    }

    /// Execute one command. Returns false when the session should end.
    fn execute(
        &mut self,
        command: Command,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<bool> {
        let symbol = self.currency_symbol.as_str();
        match command {
            Command::Dispatch(action) => {
                let lists_products = matches!(action, Action::Selection(_));
                self.store.dispatch(action);
                if lists_products {
                    write!(output, "{}", views::render_products(self.store.state(), symbol))?;
                }
            }
            Command::ListProducts => {
                write!(output, "{}", views::render_products(self.store.state(), symbol))?
            }
            Command::ListCategories => write!(output, "{}", views::render_categories(self.store.state()))?,
            Command::ShowCart => write!(output, "{}", views::render_cart(self.store.state(), symbol))?,
            Command::ShowWishList => {
                write!(output, "{}", views::render_wish_list(self.store.state(), symbol))?
            }
            Command::Checkout => self.checkout(input, output)?,
            Command::Help => write!(output, "{}", views::render_help())?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Settle the cart after explicit confirmation
    fn checkout(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        let cart = &self.store.state().cart;
        if cart.is_empty() {
            writeln!(output, "Your cart is empty")?;
            return Ok(());
        }

        write!(
            output,
            "Please confirm buying these {} items for a total amount of {} [y/N] ",
            cart.item_count(),
            format_price(cart.total(), &self.currency_symbol)
        )?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            self.store.dispatch(CartAction::Checkout);
            writeln!(output, "Payment confirmed. Shipment will be made to the default address.")?;
        } else {
            log::info!("Checkout cancelled");
            writeln!(output, "Checkout cancelled")?;
        }
        Ok(())
    }

    fn flush_notifications(&mut self, output: &mut impl Write) -> Result<()> {
        let pending: Vec<String> = match self.notifications.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(_) => Vec::new(),
        };
        // Several actions per command (e.g. move) only need the latest status
        if let Some(status) = pending.last() {
            writeln!(output, "{}", status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront::demo_data::fill_products;
    use storefront::domain_models::ProductId;

    fn run(script: &str) -> (Session, String) {
        let mut store = Store::default();
        fill_products(&mut store).unwrap();
        let mut session = Session::new(store, "€");

        let mut input = script.as_bytes();
        let mut output = Vec::new();
        session.run(&mut input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_and_confirmed_checkout() {
        let (session, output) = run("add 0\nadd 0\nadd 1\ncheckout\ny\nquit\n");

        assert!(output.contains("[cart: 3 items, € 5.57 | wish list: 0]"));
        assert!(output.contains("Please confirm buying these 3 items for a total amount of € 5.57"));
        assert!(output.contains("[cart: 0 items, € 0.00 | wish list: 0]"));
        assert!(session.store().state().cart.is_empty());
    }

    #[test]
    fn test_cancelled_checkout_keeps_cart() {
        let (session, output) = run("add 3\ncheckout\nn\n");

        assert!(output.contains("Checkout cancelled"));
        assert_eq!(
            session.store().state().cart.quantity_of(ProductId::new(3)),
            1
        );
    }

    #[test]
    fn test_move_from_wish_list() {
        let (session, output) = run("wish 446\nmove 446\n");

        assert!(output.contains("[cart: 1 items, € 0.86 | wish list: 0]"));
        let state = session.store().state();
        assert!(state.wish_list.is_empty());
        assert_eq!(state.cart.quantity_of(ProductId::new(446)), 1);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (session, output) = run("add 999\nfly\ncategory living\n");

        assert!(output.contains("No product #999 in the catalog"));
        assert!(output.contains("Unknown command 'fly'"));
        assert!(output.contains("== Living =="));
        assert!(session.store().state().cart.is_empty());
    }
}
