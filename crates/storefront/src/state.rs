//! Session state for one shopper.
//!
//! `Storefront` owns everything a page needs: the catalog, the current
//! listing query and its derived view, the persisted cart, and any pending
//! checkout confirmation. It is passed around by `&mut`, never shared
//! globally. Every command returns the state it changed, so front-ends
//! re-render from return values instead of watching for changes.

use shopfront_core::{Product, ProductId, SortDirection};
use tracing::instrument;

use crate::cart::{CartStore, CartSummary, CheckoutConfirmation};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result, StoreError};
use crate::filter::{ProductQuery, matching_indices};
use crate::mirror::{CartMirror, FileMirror};

/// The current product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<'a> {
    /// Matching products in display order.
    pub products: Vec<&'a Product>,
    /// The query that produced them.
    pub query: &'a ProductQuery,
}

impl Listing<'_> {
    /// `true` when nothing matches ("No items found").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// A shopper's session.
#[derive(Debug)]
pub struct Storefront<M> {
    catalog: Catalog,
    query: ProductQuery,
    /// Catalog positions of the current listing.
    visible: Vec<usize>,
    cart: CartStore<M>,
    confirmation: Option<CheckoutConfirmation>,
}

impl Storefront<FileMirror> {
    /// Open a session from configuration: configured catalog, file-backed cart.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the catalog cannot be loaded.
    pub fn from_config(config: &StorefrontConfig) -> std::result::Result<Self, AppError> {
        let catalog = config.load_catalog()?;
        Ok(Self::open(catalog, config.mirror()))
    }
}

impl<M: CartMirror> Storefront<M> {
    /// Start a session. The cart is restored from `mirror` (or empty), and the
    /// listing shows the whole catalog, cheapest first.
    pub fn open(catalog: Catalog, mirror: M) -> Self {
        let query = ProductQuery::default();
        let visible = matching_indices(catalog.products(), &query);
        let cart = CartStore::restore(mirror);

        tracing::debug!(
            products = catalog.len(),
            cart_lines = cart.cart().lines().len(),
            "Storefront session opened"
        );

        Self {
            catalog,
            query,
            visible,
            cart,
            confirmation: None,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn query(&self) -> &ProductQuery {
        &self.query
    }

    /// Category names offered for filtering.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.catalog.categories()
    }

    #[must_use]
    pub fn listing(&self) -> Listing<'_> {
        let products = self.catalog.products();
        Listing {
            products: self.visible.iter().filter_map(|&i| products.get(i)).collect(),
            query: &self.query,
        }
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) -> Listing<'_> {
        let query = ProductQuery {
            search: text.into(),
            ..self.query.clone()
        };
        self.apply_query(query)
    }

    /// Select a category, or `None` for all products.
    pub fn select_category(&mut self, category: Option<String>) -> Listing<'_> {
        let query = self.query.clone().with_category(category);
        self.apply_query(query)
    }

    pub fn set_sort(&mut self, sort: SortDirection) -> Listing<'_> {
        let query = self.query.clone().with_sort(sort);
        self.apply_query(query)
    }

    /// Flip between cheapest-first and most-expensive-first.
    pub fn toggle_sort(&mut self) -> Listing<'_> {
        let sort = self.query.sort.toggle();
        self.set_sort(sort)
    }

    /// Replace the whole query at once.
    pub fn apply_query(&mut self, query: ProductQuery) -> Listing<'_> {
        if query != self.query {
            self.visible = matching_indices(self.catalog.products(), &query);
            tracing::debug!(
                search = %query.search,
                category = ?query.category,
                sort = ?query.sort,
                matches = self.visible.len(),
                "Listing recomputed"
            );
            self.query = query;
        }
        self.listing()
    }

    #[must_use]
    pub fn cart_summary(&self) -> CartSummary<'_> {
        self.cart.summary()
    }

    /// The underlying cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<M> {
        &self.cart
    }

    /// Add the catalog product `id` to the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownProduct` if `id` is not in the catalog, or
    /// `StoreError::Mirror` if the cart cannot be persisted.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<CartSummary<'_>> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| StoreError::UnknownProduct(id.clone()))?;
        self.cart.add_to_cart(product)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Mirror` if the cart cannot be persisted.
    pub fn increase_quantity(&mut self, id: &ProductId) -> Result<CartSummary<'_>> {
        self.cart.increase_quantity(id)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Mirror` if the cart cannot be persisted.
    pub fn decrease_quantity(&mut self, id: &ProductId) -> Result<CartSummary<'_>> {
        self.cart.decrease_quantity(id)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Mirror` if the mirror cannot be erased.
    pub fn clear_cart(&mut self) -> Result<CartSummary<'_>> {
        self.cart.clear_cart()
    }

    /// Check out the cart and hold the confirmation for [`Self::take_confirmation`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyCart` for an empty cart, or
    /// `StoreError::Mirror` if the mirror cannot be erased.
    pub fn checkout(&mut self) -> Result<CheckoutConfirmation> {
        let confirmation = self.cart.checkout()?;
        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    /// Take the pending checkout confirmation. Returns it at most once.
    pub fn take_confirmation(&mut self) -> Option<CheckoutConfirmation> {
        self.confirmation.take()
    }
}
