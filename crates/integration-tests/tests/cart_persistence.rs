//! Integration tests for the file-backed cart.
//!
//! Each test opens sessions against a scratch directory, the way separate
//! runs of the app would share one storage slot.

#![allow(clippy::unwrap_used)]

use std::fs;

use rust_decimal::Decimal;
use serde_json::Value;
use shopfront_core::ProductId;
use shopfront_integration_tests::{config_in, open_session};
use shopfront_storefront::{Catalog, StoreError, Storefront};
use tempfile::TempDir;

// =============================================================================
// Restart Round-Trip
// =============================================================================

#[test]
fn test_cart_survives_restart() {
    let dir = TempDir::new().unwrap();
    let bananas = ProductId::new("1");
    let coffee = ProductId::new("2");

    {
        let mut store = open_session(dir.path());
        store.add_to_cart(&bananas).unwrap();
        store.add_to_cart(&coffee).unwrap();
        store.increase_quantity(&coffee).unwrap();
    }

    let store = open_session(dir.path());
    let summary = store.cart_summary();
    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.lines[0].id, bananas);
    assert_eq!(summary.lines[1].quantity, 2);
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.display_total(), "$28.47");
}

#[test]
fn test_slot_holds_json_array_of_lines() {
    let dir = TempDir::new().unwrap();
    let mut store = open_session(dir.path());
    store.add_to_cart(&ProductId::new("5")).unwrap();
    store.increase_quantity(&ProductId::new("5")).unwrap();

    let path = config_in(dir.path()).cart_slot_path();
    let stored: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let lines = stored.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"], "5");
    assert_eq!(lines[0]["productName"], "Cotton T-Shirt");
    assert_eq!(lines[0]["quantity"], 2);
}

#[test]
fn test_numeric_prices_in_slot_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = config_in(dir.path()).cart_slot_path();
    fs::write(
        &path,
        r#"[{"id":"1","productName":"Apple","description":"","category":"groceries","unitPrice":2,"imageUrl":"","quantity":3}]"#,
    )
    .unwrap();

    let store = open_session(dir.path());
    assert_eq!(store.cart_summary().total_items, 3);
    assert_eq!(store.cart_summary().total_amount, Decimal::from(6));
}

// =============================================================================
// Corrupt Slot Recovery
// =============================================================================

#[test]
fn test_corrupt_slot_starts_empty_and_is_erased() {
    let dir = TempDir::new().unwrap();
    let path = config_in(dir.path()).cart_slot_path();
    fs::write(&path, "{not json").unwrap();

    let store = open_session(dir.path());
    assert!(store.cart_summary().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_duplicate_ids_in_slot_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = config_in(dir.path()).cart_slot_path();
    let line = r#"{"id":"1","productName":"Apple","description":"","category":"groceries","unitPrice":"2","imageUrl":"","quantity":1}"#;
    fs::write(&path, format!("[{line},{line}]")).unwrap();

    let store = open_session(dir.path());
    assert!(store.cart_summary().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_recovered_session_persists_again() {
    let dir = TempDir::new().unwrap();
    let path = config_in(dir.path()).cart_slot_path();
    fs::write(&path, "garbage").unwrap();

    let mut store = open_session(dir.path());
    store.add_to_cart(&ProductId::new("3")).unwrap();
    drop(store);

    assert_eq!(open_session(dir.path()).cart_summary().total_items, 1);
}

// =============================================================================
// Clear and Checkout
// =============================================================================

#[test]
fn test_clear_removes_slot() {
    let dir = TempDir::new().unwrap();
    let path = config_in(dir.path()).cart_slot_path();

    let mut store = open_session(dir.path());
    store.add_to_cart(&ProductId::new("1")).unwrap();
    assert!(path.exists());

    store.clear_cart().unwrap();
    assert!(!path.exists());
    assert!(open_session(dir.path()).cart_summary().is_empty());
}

#[test]
fn test_decrease_to_zero_keeps_line() {
    let dir = TempDir::new().unwrap();
    let bananas = ProductId::new("1");

    let mut store = open_session(dir.path());
    store.add_to_cart(&bananas).unwrap();
    store.decrease_quantity(&bananas).unwrap();
    let summary = store.decrease_quantity(&bananas).unwrap();
    assert_eq!(summary.lines[0].quantity, 0);
    drop(store);

    let summary = open_session(dir.path()).cart_summary().lines.to_vec();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].quantity, 0);
}

#[test]
fn test_checkout_empties_cart_across_restart() {
    let dir = TempDir::new().unwrap();
    let path = config_in(dir.path()).cart_slot_path();

    let mut store = open_session(dir.path());
    store.add_to_cart(&ProductId::new("11")).unwrap();
    let confirmation = store.checkout().unwrap();
    assert_eq!(confirmation.total_items, 1);
    assert_eq!(confirmation.display_total(), "$199.00");
    assert!(!path.exists());

    let mut reopened = open_session(dir.path());
    assert!(reopened.cart_summary().is_empty());
    assert!(matches!(reopened.checkout(), Err(StoreError::EmptyCart)));
}

#[test]
fn test_checkout_on_empty_cart_erases_leftover_slot() {
    let dir = TempDir::new().unwrap();
    let path = config_in(dir.path()).cart_slot_path();
    fs::write(&path, "[]").unwrap();

    let mut store = open_session(dir.path());
    assert!(matches!(store.checkout(), Err(StoreError::EmptyCart)));
    assert!(!path.exists());
    assert_eq!(store.take_confirmation(), None);
}

// =============================================================================
// Amount Overflow
// =============================================================================

const HUGE_CATALOG: &str = r#"[{"id":"1","productName":"Everything","description":"","category":"misc","unitPrice":"79228162514264337593543950335","imageUrl":""}]"#;

#[test]
fn test_overflowing_cart_is_never_persisted() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let id = ProductId::new("1");

    let mut store = Storefront::open(Catalog::from_json(HUGE_CATALOG).unwrap(), config.mirror());
    store.add_to_cart(&id).unwrap();
    let stored = fs::read_to_string(config.cart_slot_path()).unwrap();

    let err = store.increase_quantity(&id).unwrap_err();
    assert!(matches!(err, StoreError::AmountOverflow));
    assert_eq!(fs::read_to_string(config.cart_slot_path()).unwrap(), stored);
    drop(store);

    let reopened = Storefront::open(Catalog::from_json(HUGE_CATALOG).unwrap(), config.mirror());
    let summary = reopened.cart_summary();
    assert_eq!(summary.total_items, 1);
    assert_eq!(summary.total_amount, Decimal::MAX);
}
