//! Cart commands.
//!
//! Each command changes the cart through the session and prints the cart
//! returned by that change.

use std::io::Write;

use shopfront_core::ProductId;
use shopfront_storefront::{CartMirror, Storefront};

use super::CliError;
use crate::render;

/// Add a catalog product. Adding a product already in the cart changes nothing.
pub fn add<M: CartMirror>(
    store: &mut Storefront<M>,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let summary = store.add_to_cart(id)?;
    render::cart(out, &summary)?;
    Ok(())
}

pub fn increase<M: CartMirror>(
    store: &mut Storefront<M>,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let summary = store.increase_quantity(id)?;
    render::cart(out, &summary)?;
    Ok(())
}

pub fn decrease<M: CartMirror>(
    store: &mut Storefront<M>,
    id: &ProductId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let summary = store.decrease_quantity(id)?;
    render::cart(out, &summary)?;
    Ok(())
}

pub fn clear<M: CartMirror>(store: &mut Storefront<M>, out: &mut impl Write) -> Result<(), CliError> {
    let summary = store.clear_cart()?;
    render::cart(out, &summary)?;
    Ok(())
}

/// Place the order and show the confirmation once.
pub fn checkout<M: CartMirror>(
    store: &mut Storefront<M>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    store.checkout()?;
    if let Some(confirmation) = store.take_confirmation() {
        render::confirmation(out, &confirmation)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_storefront::{Catalog, MemoryMirror, StoreError};

    use super::*;

    fn session() -> (Storefront<MemoryMirror>, MemoryMirror) {
        let mirror = MemoryMirror::new();
        let store = Storefront::open(Catalog::bundled().unwrap(), mirror.clone());
        (store, mirror)
    }

    #[test]
    fn test_add_prints_cart() {
        let (mut store, mirror) = session();
        let mut out = Vec::new();
        add(&mut store, &ProductId::new("5"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cotton T-Shirt"));
        assert!(text.contains("Total Items: 1"));
        assert!(mirror.contents().is_some());
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let (mut store, _) = session();
        let err = add(&mut store, &ProductId::new("nope"), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Store(StoreError::UnknownProduct(_))));
    }

    #[test]
    fn test_checkout_prints_confirmation_and_clears() {
        let (mut store, mirror) = session();
        add(&mut store, &ProductId::new("5"), &mut Vec::new()).unwrap();

        let mut out = Vec::new();
        checkout(&mut store, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Thank you for your purchase!"));
        assert_eq!(mirror.contents(), None);
        assert_eq!(store.take_confirmation(), None);
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let (mut store, _) = session();
        let err = checkout(&mut store, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Store(StoreError::EmptyCart)));
    }
}
