//! Plain-text views derived from the store state

use std::fmt::Write;

use storefront::domain_models::ProductCategory;
use storefront::AppState;

use crate::commands::HELP;
use crate::format::format_price;

/// Products of the current category; the expanded one shows its details
pub fn render_products(state: &AppState, symbol: &str) -> String {
    let selection = &state.selection;
    let mut out = format!("== {} ==\n", selection.current_category);

    let products = state.visible_products();
    if products.is_empty() {
        out.push_str("  (no products)\n");
    }

    for product in products {
        let marker = if state.wish_list.contains(product.id()) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{marker} {:>5}  {:<56} {:>14}",
            product.id().to_string(),
            product.name(),
            format_price(product.price().amount(), symbol)
        );

        if selection.expanded_item.is_expanded(product.id()) {
            let _ = writeln!(out, "         {}", product.description());
            let in_cart = state.cart.quantity_of(product.id());
            if in_cart > 0 {
                let _ = writeln!(out, "         {} in cart", in_cart);
            }
        }
    }
    out
}

pub fn render_categories(state: &AppState) -> String {
    let mut out = String::new();
    for category in ProductCategory::all() {
        let marker = if category == state.selection.current_category {
            ">"
        } else {
            " "
        };
        let count = state.catalog.products_by_category(category).len();
        let _ = writeln!(out, "{marker} {:<16} ({count})", category.label());
    }
    out
}

pub fn render_cart(state: &AppState, symbol: &str) -> String {
    let cart = &state.cart;
    if cart.is_empty() {
        return "Your cart is empty\n".to_string();
    }

    let mut out = String::new();
    for line in cart.lines() {
        let _ = writeln!(
            out,
            "{:>3} x {:<56} {:>14}",
            line.quantity(),
            line.product().name(),
            format_price(line.subtotal(), symbol)
        );
    }
    let _ = writeln!(
        out,
        "{} items, total {}",
        cart.item_count(),
        format_price(cart.total(), symbol)
    );
    out
}

pub fn render_wish_list(state: &AppState, symbol: &str) -> String {
    if state.wish_list.is_empty() {
        return "Your wish list is empty\n".to_string();
    }

    let mut out = String::new();
    for product in state.wish_list.iter() {
        let _ = writeln!(
            out,
            "  {:>5}  {:<56} {:>14}",
            product.id().to_string(),
            product.name(),
            format_price(product.price().amount(), symbol)
        );
    }
    out
}

/// One-line summary printed whenever cart or wish list change
pub fn status_line(state: &AppState, symbol: &str) -> String {
    format!(
        "[cart: {} items, {} | wish list: {}]",
        state.cart.item_count(),
        format_price(state.cart.total(), symbol),
        state.wish_list.len()
    )
}

pub fn render_help() -> String {
    let mut out = String::new();
    for (usage, summary) in HELP {
        let _ = writeln!(out, "  {:<20} {}", usage, summary);
    }
    out
}
