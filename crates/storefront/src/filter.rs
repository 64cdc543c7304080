//! Product listing filter and sort.
//!
//! A pure projection of the catalog: nothing here mutates products, and the
//! same inputs always produce the same listing.

use shopfront_core::{Product, SortDirection};

/// Label of the pseudo-category that disables category filtering.
pub const ALL_PRODUCTS: &str = "All Products";

/// Inputs to the listing filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against product names.
    pub search: String,
    /// Exact category to keep, or `None` for every category.
    pub category: Option<String>,
    pub sort: SortDirection,
}

impl ProductQuery {
    /// Query with a search string and defaults for everything else.
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortDirection) -> Self {
        self.sort = sort;
        self
    }
}

/// Interpret a category selection.
///
/// Blank input and `"All Products"` (any case) select every category.
#[must_use]
pub fn parse_category(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_PRODUCTS) {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Select and order the products matching `query`.
///
/// A product is kept when its name contains `query.search` (ignoring case)
/// and, if a category is selected, its category equals it. The result is
/// ordered by unit price in the requested direction; products with equal
/// prices keep their catalog order.
#[must_use]
pub fn filter_products<'a>(catalog: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    matching_indices(catalog, query)
        .into_iter()
        .filter_map(|i| catalog.get(i))
        .collect()
}

/// Same selection and order as [`filter_products`], as positions in `catalog`.
#[must_use]
pub fn matching_indices(catalog: &[Product], query: &ProductQuery) -> Vec<usize> {
    let needle = query.search.to_lowercase();

    let mut matched: Vec<(usize, &Product)> = catalog
        .iter()
        .enumerate()
        .filter(|(_, p)| p.name_contains_lowercase(&needle))
        .filter(|(_, p)| query.category.as_deref().is_none_or(|c| p.in_category(c)))
        .collect();

    // `sort_by` is stable, so ties keep catalog order in both directions.
    match query.sort {
        SortDirection::Ascending => {
            matched.sort_by(|(_, a), (_, b)| a.unit_price.cmp(&b.unit_price));
        }
        SortDirection::Descending => {
            matched.sort_by(|(_, a), (_, b)| b.unit_price.cmp(&a.unit_price));
        }
    }

    matched.into_iter().map(|(i, _)| i).collect()
}
