//! Filter engine: derives the visible subset of the catalog.

use crate::product::Product;

/// Current search/filter input state.
///
/// A transient value rebuilt from the inputs between renders. `None` on a
/// dropdown field is the "any" sentinel; an empty or whitespace-only search
/// matches everything. All active criteria combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
}

impl FilterCriteria {
    /// Apply the criteria to a product list.
    ///
    /// Pure and order-preserving: the result is a subset of `products` in
    /// the original catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Whether a single product satisfies every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && matches_selected(self.brand.as_deref(), product.brand.as_deref())
            && matches_selected(self.category.as_deref(), product.category.as_deref())
            && matches_selected(self.city.as_deref(), product.city.as_deref())
    }

    /// Case-insensitive substring match against title, description, brand,
    /// model and the OEM code; any one field matching is enough.
    fn matches_search(&self, product: &Product) -> bool {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            Some(product.title.as_str()),
            Some(product.description.as_str()),
            product.brand.as_deref(),
            product.model.as_deref(),
            product.oem.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

fn matches_selected(selected: Option<&str>, value: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(want) => value == Some(want),
    }
}
