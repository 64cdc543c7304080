//! Shopping cart and its persisted store.
//!
//! [`Cart`] is the plain in-memory value. [`CartStore`] pairs it with a
//! [`CartMirror`] and keeps the two in agreement: every mutation is applied
//! to a copy, written to the mirror, and only then committed.
//!
//! # Example
//!
//! ```rust
//! use shopfront_storefront::cart::CartStore;
//! use shopfront_storefront::catalog::Catalog;
//! use shopfront_storefront::mirror::MemoryMirror;
//!
//! let catalog = Catalog::bundled()?;
//! let product = &catalog.products()[0];
//!
//! let mut store = CartStore::restore(MemoryMirror::new());
//! store.add_to_cart(product)?;
//! let summary = store.increase_quantity(&product.id)?;
//! assert_eq!(summary.total_items, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shopfront_core::{CartLine, Product, ProductId, format_amount};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::mirror::{CartMirror, MirrorError};

/// The cart: one line per product, in the order products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from persisted lines.
    ///
    /// # Errors
    ///
    /// Returns the first repeated product id if lines are not unique.
    pub fn from_lines(lines: Vec<CartLine>) -> std::result::Result<Self, ProductId> {
        let mut cart = Self::new();
        for line in lines {
            if cart.line(&line.id).is_some() {
                return Err(line.id);
            }
            cart.lines.push(line);
        }
        Ok(cart)
    }

    /// Add `product` with quantity 1. A product already in the cart is left alone.
    ///
    /// Returns whether a line was created.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.line(&product.id).is_some() {
            return false;
        }
        self.lines.push(CartLine::from_product(product));
        true
    }

    /// Add one unit to the line for `id`. Returns whether the line exists.
    pub fn increase(&mut self, id: &ProductId) -> bool {
        match self.line_mut(id) {
            Some(line) => {
                line.increment();
                true
            }
            None => false,
        }
    }

    /// Remove one unit from the line for `id` if its quantity is above zero.
    ///
    /// The line stays in the cart at quantity zero. Returns whether anything changed.
    pub fn decrease(&mut self, id: &ProductId) -> bool {
        self.line_mut(id).is_some_and(CartLine::decrement)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.id == id)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` over all lines, unrounded.
    ///
    /// Returns `None` if the total does not fit in a `Decimal`.
    #[must_use]
    pub fn total_amount(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.line_total()?))
    }
}

/// Derived cart state returned by every cart command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary<'a> {
    pub lines: &'a [CartLine],
    pub total_items: u64,
    pub total_amount: Decimal,
}

impl<'a> CartSummary<'a> {
    fn of(cart: &'a Cart, total_amount: Decimal) -> Self {
        Self {
            lines: cart.lines(),
            total_items: cart.total_items(),
            total_amount,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total amount formatted for display, e.g. `$4.00`.
    #[must_use]
    pub fn display_total(&self) -> String {
        format_amount(self.total_amount)
    }
}

/// One-shot notice produced by a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfirmation {
    /// Reference shown to the shopper.
    pub order_ref: Uuid,
    pub placed_at: DateTime<Utc>,
    pub total_items: u64,
    pub total_amount: Decimal,
}

impl CheckoutConfirmation {
    /// Total amount formatted for display.
    #[must_use]
    pub fn display_total(&self) -> String {
        format_amount(self.total_amount)
    }
}

/// A cart mirrored to durable storage after every mutation.
#[derive(Debug)]
pub struct CartStore<M> {
    cart: Cart,
    /// Checked total of `cart`, kept in step by `commit`.
    total_amount: Decimal,
    mirror: M,
}

impl<M: CartMirror> CartStore<M> {
    /// Open a store, seeding the cart from `mirror`.
    ///
    /// An empty slot gives an empty cart. Unreadable or malformed contents
    /// are logged and discarded; the corrupt slot is erased so the next
    /// start is clean.
    #[instrument(skip(mirror))]
    pub fn restore(mut mirror: M) -> Self {
        let contents = match mirror.read() {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(error = %e, "Cart storage unreadable, starting with an empty cart");
                None
            }
        };

        let Some(contents) = contents else {
            tracing::debug!("No stored cart");
            return Self::empty(mirror);
        };

        match decode(&contents) {
            Ok((cart, total_amount)) => {
                tracing::info!(
                    lines = cart.lines().len(),
                    total_items = cart.total_items(),
                    "Restored cart"
                );
                Self {
                    cart,
                    total_amount,
                    mirror,
                }
            }
            Err(reason) => {
                tracing::warn!(%reason, "Discarding corrupt stored cart");
                if let Err(e) = mirror.erase() {
                    tracing::warn!(error = %e, "Failed to erase corrupt stored cart");
                }
                Self::empty(mirror)
            }
        }
    }

    const fn empty(mirror: M) -> Self {
        Self {
            cart: Cart::new(),
            total_amount: Decimal::ZERO,
            mirror,
        }
    }

    /// Add `product` to the cart with quantity 1.
    ///
    /// A product already in the cart is not merged or bumped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Mirror` if the cart cannot be persisted.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product) -> Result<CartSummary<'_>> {
        let mut next = self.cart.clone();
        if !next.add(product) {
            tracing::debug!("Product already in cart");
        }
        self.commit(next)
    }

    /// Add one unit of `id`. Unknown ids leave the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Mirror` if the cart cannot be persisted.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub fn increase_quantity(&mut self, id: &ProductId) -> Result<CartSummary<'_>> {
        let mut next = self.cart.clone();
        if !next.increase(id) {
            tracing::debug!("No cart line to increase");
        }
        self.commit(next)
    }

    /// Remove one unit of `id`, never going below zero.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Mirror` if the cart cannot be persisted.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub fn decrease_quantity(&mut self, id: &ProductId) -> Result<CartSummary<'_>> {
        let mut next = self.cart.clone();
        if !next.decrease(id) {
            tracing::debug!("Cart line absent or already at zero");
        }
        self.commit(next)
    }

    /// Empty the cart and erase the mirror.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Mirror` if the mirror cannot be erased.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) -> Result<CartSummary<'_>> {
        self.commit(Cart::new())
    }

    /// Place the order: empty the cart, erase the mirror, and return a confirmation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyCart` if there is nothing to check out (the
    /// mirror is still erased), or `StoreError::Mirror` if it cannot be erased.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Result<CheckoutConfirmation> {
        if self.cart.is_empty() {
            self.mirror.erase()?;
            return Err(StoreError::EmptyCart);
        }

        let confirmation = CheckoutConfirmation {
            order_ref: Uuid::new_v4(),
            placed_at: Utc::now(),
            total_items: self.cart.total_items(),
            total_amount: self.total_amount,
        };
        self.commit(Cart::new())?;

        tracing::info!(
            order_ref = %confirmation.order_ref,
            total_items = confirmation.total_items,
            total_amount = %confirmation.total_amount,
            "Checkout complete"
        );
        Ok(confirmation)
    }

    #[must_use]
    pub fn summary(&self) -> CartSummary<'_> {
        CartSummary::of(&self.cart, self.total_amount)
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// The backing mirror.
    #[must_use]
    pub const fn mirror(&self) -> &M {
        &self.mirror
    }

    /// Persist `next` in full, then make it the current cart.
    ///
    /// A cart whose total overflows is rejected before anything is written.
    fn commit(&mut self, next: Cart) -> Result<CartSummary<'_>> {
        let total_amount = next.total_amount().ok_or(StoreError::AmountOverflow)?;
        if next.is_empty() {
            self.mirror.erase()?;
        } else {
            let encoded = serde_json::to_string(next.lines()).map_err(MirrorError::from)?;
            self.mirror.write(&encoded)?;
        }
        self.cart = next;
        self.total_amount = total_amount;
        Ok(self.summary())
    }
}

/// Parse mirror contents into a cart and its total, describing why they are
/// unusable on failure.
fn decode(contents: &str) -> std::result::Result<(Cart, Decimal), String> {
    let lines: Vec<CartLine> = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    let cart =
        Cart::from_lines(lines).map_err(|id| format!("duplicate cart line for product {id}"))?;
    let total = cart
        .total_amount()
        .ok_or_else(|| "cart total overflows".to_string())?;
    Ok((cart, total))
}
