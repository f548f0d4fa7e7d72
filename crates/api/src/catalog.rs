//! Product catalog derivation.
//!
//! A pure, deterministic transform of the full product list into the view
//! the gallery renders: `(products, filter, page) -> (pageItems, pageCount)`.
//! No I/O happens here; the list is fetched once and derived in memory.

use std::str::FromStr;

use serde::Deserialize;

use crate::models::Product;

/// Number of products per gallery page.
pub const PAGE_SIZE: usize = 9;

/// Gallery view filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductFilter {
    /// All products.
    #[default]
    Recent,
    /// Products awaiting curation.
    Pending,
    /// Curated products.
    Approved,
}

impl ProductFilter {
    /// Whether a product belongs in this view.
    #[must_use]
    pub const fn matches(self, product: &Product) -> bool {
        match self {
            Self::Recent => true,
            Self::Pending => !product.approved,
            Self::Approved => product.approved,
        }
    }
}

/// Error for an unrecognized filter name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown filter {0:?} (expected recent, pending, or approved)")]
pub struct UnknownFilter(String);

impl FromStr for ProductFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(Self::Recent),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            other => Err(UnknownFilter(other.to_owned())),
        }
    }
}

/// One derived gallery page.
#[derive(Debug)]
pub struct CatalogPage {
    /// The products on this page, newest first.
    pub items: Vec<Product>,
    /// The page actually shown, after clamping.
    pub page: usize,
    /// Total page count for the filtered list; at least 1.
    pub page_count: usize,
}

/// Derive one gallery page from the full product list.
///
/// The filtered list is re-sorted newest-first even though storage returns
/// it that way already; the storage order is not assumed. The requested page
/// clamps to `[1, page_count]`, so out-of-range navigation lands on the
/// first or last page rather than an empty one.
#[must_use]
pub fn page(products: Vec<Product>, filter: ProductFilter, requested_page: usize) -> CatalogPage {
    let mut filtered: Vec<Product> = products
        .into_iter()
        .filter(|p| filter.matches(p))
        .collect();

    // Stable sort: ties on created_at keep their incoming order.
    filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let page_count = filtered.len().div_ceil(PAGE_SIZE).max(1);
    let page = requested_page.clamp(1, page_count);

    let items = filtered
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    CatalogPage {
        items,
        page,
        page_count,
    }
}
