//! Integration tests for the product listing over the bundled catalog.

#![allow(clippy::unwrap_used)]

use shopfront_core::{Product, ProductId, SortDirection};
use shopfront_integration_tests::open_session;
use shopfront_storefront::{Catalog, ProductQuery, filter_products, parse_category};
use tempfile::TempDir;

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn test_bundled_catalog_shape() {
    let catalog = Catalog::bundled().unwrap();
    assert_eq!(catalog.len(), 18);
    assert_eq!(
        catalog.categories(),
        vec![
            "groceries",
            "cloths",
            "automotive",
            "gadgets",
            "furniture",
            "toys",
            "lifestyle"
        ]
    );
}

#[test]
fn test_default_listing_is_cheapest_first() {
    let dir = TempDir::new().unwrap();
    let store = open_session(dir.path());
    let listing = store.listing();

    assert_eq!(listing.len(), 18);
    assert_eq!(listing.products[0].product_name, "Organic Bananas");
    assert!(
        listing
            .products
            .windows(2)
            .all(|w| w[0].unit_price <= w[1].unit_price)
    );
}

#[test]
fn test_equal_prices_keep_catalog_order_both_ways() {
    let catalog = Catalog::bundled().unwrap();
    let tied = |products: Vec<&Product>| -> Vec<String> {
        products
            .into_iter()
            .filter(|p| p.id.as_str() == "7" || p.id.as_str() == "12")
            .map(|p| p.id.to_string())
            .collect()
    };

    let ascending = filter_products(catalog.products(), &ProductQuery::default());
    let descending = filter_products(
        catalog.products(),
        &ProductQuery::default().with_sort(SortDirection::Descending),
    );

    assert_eq!(tied(ascending), vec!["7", "12"]);
    assert_eq!(tied(descending), vec!["7", "12"]);
}

#[test]
fn test_category_and_sort() {
    let catalog = Catalog::bundled().unwrap();
    let query = ProductQuery::default().with_category(parse_category("gadgets"));

    let ascending = filter_products(catalog.products(), &query);
    assert_eq!(ids(&ascending), vec!["12", "10", "11"]);

    let descending = filter_products(catalog.products(), &query.with_sort(SortDirection::Descending));
    assert_eq!(ids(&descending), vec!["11", "10", "12"]);
}

#[test]
fn test_search_is_case_insensitive_and_combines_with_category() {
    let dir = TempDir::new().unwrap();
    let mut store = open_session(dir.path());

    let listing = store.set_search("COFFEE");
    assert_eq!(ids(&listing.products), vec!["2", "13"]);

    let listing = store.select_category(parse_category("furniture"));
    assert_eq!(ids(&listing.products), vec!["13"]);

    assert!(store.select_category(parse_category("toys")).is_empty());
    assert_eq!(store.select_category(parse_category("All Products")).len(), 2);
}

#[test]
fn test_unknown_category_yields_empty_listing() {
    let catalog = Catalog::bundled().unwrap();
    let query = ProductQuery::default().with_category(parse_category("books"));
    assert!(filter_products(catalog.products(), &query).is_empty());
}

#[test]
fn test_cart_changes_do_not_reset_listing() {
    let dir = TempDir::new().unwrap();
    let mut store = open_session(dir.path());
    store.set_search("mat");
    store.toggle_sort();

    store.add_to_cart(&ProductId::new("17")).unwrap();

    assert_eq!(store.query().search, "mat");
    assert!(store.query().sort.is_descending());
    assert_eq!(ids(&store.listing().products), vec!["17"]);
}
