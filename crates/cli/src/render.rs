//! Plain-text rendering of storefront state.

use std::io::{self, Write};

use shopfront_storefront::filter::ALL_PRODUCTS;
use shopfront_storefront::{CartSummary, CheckoutConfirmation, Listing};

/// Write the product listing, or "No items found" when it is empty.
pub fn listing(out: &mut impl Write, listing: &Listing<'_>) -> io::Result<()> {
    writeln!(out, "Product Listing")?;
    writeln!(
        out,
        "Search: \"{}\" | Category: {} | Sort: {}",
        listing.query.search,
        listing.query.category.as_deref().unwrap_or(ALL_PRODUCTS),
        listing.query.sort
    )?;

    if listing.is_empty() {
        return writeln!(out, "No items found");
    }

    for product in &listing.products {
        writeln!(
            out,
            "[{}] {} ({}) - {}",
            product.id, product.product_name, product.category, product.unit_price
        )?;
        writeln!(out, "    {}", product.description)?;
    }
    Ok(())
}

pub fn categories(out: &mut impl Write, categories: &[&str]) -> io::Result<()> {
    writeln!(out, "{ALL_PRODUCTS}")?;
    for category in categories {
        writeln!(out, "{category}")?;
    }
    Ok(())
}

/// Write cart lines and totals.
pub fn cart(out: &mut impl Write, summary: &CartSummary<'_>) -> io::Result<()> {
    writeln!(out, "My Cart")?;

    if summary.is_empty() {
        writeln!(out, "Your cart is empty.")?;
    }
    for line in summary.lines {
        writeln!(
            out,
            "[{}] {} {} x {}",
            line.id, line.product_name, line.unit_price, line.quantity
        )?;
    }

    writeln!(out, "Total Items: {}", summary.total_items)?;
    writeln!(out, "Total Amount: {}", summary.display_total())
}

pub fn confirmation(out: &mut impl Write, confirmation: &CheckoutConfirmation) -> io::Result<()> {
    writeln!(out, "Thank you for your purchase!")?;
    writeln!(
        out,
        "Your order has been placed. You will receive an email confirmation shortly."
    )?;
    writeln!(out, "Order: {}", confirmation.order_ref)?;
    writeln!(
        out,
        "Placed: {}",
        confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(
        out,
        "Items: {} | Total: {}",
        confirmation.total_items,
        confirmation.display_total()
    )
}
