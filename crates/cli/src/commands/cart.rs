//! Interactive cart session.
//!
//! # Usage
//!
//! ```bash
//! pm-cli shop
//! > add 7        # fetch product 7 from the catalog, add one to the cart
//! > add 9 3      # add three units of product 9
//! > inc 7
//! > dec 9
//! > show
//! > done
//! ```
//!
//! `add` fetches the product from the catalog first; the cart caches the
//! title/price/image it saw at add time. A badge line is printed after
//! every cart change via the store's subscription interface.

use std::io::{BufRead, Write as _};

use pocketmart_client::AppState;
use pocketmart_core::cart::CartLine;
use pocketmart_core::types::{ProductId, format_amount};

use super::CommandError;

/// Run the interactive cart loop until `done`/EOF.
pub async fn shop(state: &AppState) -> Result<(), CommandError> {
    let cart = state.cart().clone();

    // Badge: re-renders on every cart change, like the tab badge readers
    let _badge = cart.subscribe(|lines| {
        let count: u32 = lines.iter().map(|l| l.quantity).sum();
        println!("  [cart: {count} item(s)]");
    });

    println!("Interactive cart - commands: add <id> [qty], inc <id>, dec <id>, show, done");

    let stdin = std::io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let mut parts = input.split_whitespace();
        match parts.next() {
            None => {}
            Some("add") => match parse_add(parts.next(), parts.next()) {
                Some((id, quantity)) => add(state, id, quantity).await,
                None => println!("usage: add <id> [qty]"),
            },
            Some("inc") => match parse_id(parts.next()) {
                Some(id) => state.cart().increase(id),
                None => println!("usage: inc <id>"),
            },
            Some("dec") => match parse_id(parts.next()) {
                Some(id) => state.cart().decrease(id),
                None => println!("usage: dec <id>"),
            },
            Some("show") => show(state),
            Some("done" | "quit" | "exit") => break,
            Some(other) => println!("unknown command: {other}"),
        }
    }

    show(state);
    Ok(())
}

/// Fetch `id` from the catalog and add it to the cart.
///
/// A failed fetch is reported and leaves the cart untouched - the cart
/// itself has no failure modes.
async fn add(state: &AppState, id: ProductId, quantity: u32) {
    match state.catalog().get_product(id).await {
        Ok(product) => {
            state
                .cart()
                .add_with_quantity(product.to_cart_product(), quantity);
        }
        Err(e) => println!("could not add product {id}: {e}"),
    }
}

fn show(state: &AppState) {
    let lines = state.cart().lines();
    if lines.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for line in &lines {
        print_line(line);
    }
    println!(
        "Items: {}  Total: ${}",
        state.cart().total_count(),
        state.cart().total_price_display()
    );
}

fn print_line(line: &CartLine) {
    println!(
        "{:>5}  {}  ${} x{} = ${}",
        line.product_id,
        line.title,
        format_amount(line.price),
        line.quantity,
        format_amount(line.subtotal())
    );
}

fn parse_id(arg: Option<&str>) -> Option<ProductId> {
    arg?.parse().ok()
}

fn parse_add(id: Option<&str>, quantity: Option<&str>) -> Option<(ProductId, u32)> {
    let id = parse_id(id)?;
    let quantity = match quantity {
        Some(raw) => raw.parse().ok()?,
        None => 1,
    };
    Some((id, quantity))
}
