//! View-model of the product list.
//!
//! Every user action is a pure transition on [`ProductCatalog`]. Actions that
//! must reach the server return a [`SyncCommand`]; the caller executes it and
//! hands the result back through [`ProductCatalog::reconcile`].

use super::aggregate::{
    derive_categories, next_product_id, Product, ProductColumn, ProductDraft, ProductId,
};
use crate::shared::list_query::{query, FilterSet, FilterValue, SortSpec};
use crate::shared::sync::SyncError;

/// Product taken out of the list by a delete, kept to undo a failed request
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedProduct {
    pub index: usize,
    pub product: Product,
}

/// Request the catalog wants sent to the products endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum SyncCommand {
    Fetch,
    Create(Product),
    Delete {
        id: ProductId,
        removed: Option<RemovedProduct>,
    },
}

/// Completed [`SyncCommand`]
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Fetched(Result<Vec<Product>, SyncError>),
    Created {
        product: Product,
        result: Result<(), SyncError>,
    },
    Deleted {
        id: ProductId,
        removed: Option<RemovedProduct>,
        result: Result<(), SyncError>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    filters: FilterSet<ProductColumn>,
    sort: SortSpec<ProductColumn>,
    draft: ProductDraft,
    last_error: Option<SyncError>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filters(&self) -> &FilterSet<ProductColumn> {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec<ProductColumn> {
        self.sort
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&SyncError> {
        self.last_error.as_ref()
    }

    /// Rows to render: filtered, then sorted
    pub fn visible_rows(&self) -> Vec<Product> {
        query(&self.products, &self.filters, &self.sort)
    }

    pub fn categories(&self) -> Vec<String> {
        derive_categories(&self.products)
    }

    pub fn next_id(&self) -> Option<ProductId> {
        next_product_id(&self.products)
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    pub fn set_filter(&mut self, column: ProductColumn, value: FilterValue) {
        self.filters.set(column, value);
    }

    pub fn toggle_sort(&mut self, column: ProductColumn) {
        self.sort = self.sort.toggled(column);
    }

    pub fn set_draft_text(&mut self, column: ProductColumn, value: String) {
        self.draft.set_text(column, value);
    }

    pub fn toggle_draft_stocked(&mut self) {
        self.draft.toggle_stocked();
    }

    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Turn the draft into a product with the next free id, append it and
    /// reset the form. An empty draft is ignored, and so is any draft once
    /// no id is left above the largest one.
    pub fn submit_draft(&mut self) -> Option<SyncCommand> {
        if self.draft.is_empty() {
            return None;
        }
        let id = self.next_id()?;
        let product = self.draft.to_product(id);
        self.add_product(product.clone());
        self.draft = ProductDraft::default();
        Some(SyncCommand::Create(product))
    }

    /// Remove the product locally if present. The delete request is issued
    /// either way.
    pub fn remove_product(&mut self, id: ProductId) -> SyncCommand {
        let removed = match self.products.iter().position(|p| p.id == id) {
            Some(index) => Some(RemovedProduct {
                index,
                product: self.products.remove(index),
            }),
            None => None,
        };
        SyncCommand::Delete { id, removed }
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Apply the result of a request
    pub fn reconcile(&mut self, outcome: SyncOutcome) {
        let result = match outcome {
            SyncOutcome::Fetched(result) => result.map(|products| self.replace_products(products)),
            SyncOutcome::Created { product, result } => {
                if result.is_err() {
                    if let Some(index) = self.products.iter().position(|p| *p == product) {
                        self.products.remove(index);
                    }
                }
                result
            }
            SyncOutcome::Deleted {
                id,
                removed,
                result,
            } => {
                if result.is_err() {
                    if let Some(removed) = removed {
                        // a fetch may have brought it back in the meantime
                        if !self.products.iter().any(|p| p.id == id) {
                            let index = removed.index.min(self.products.len());
                            self.products.insert(index, removed.product);
                        }
                    }
                }
                result
            }
        };
        self.last_error = result.err();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::NO_FILTER;

    fn sample() -> ProductCatalog {
        ProductCatalog::with_products(vec![
            Product::new(1, "Apple", "Fruit", "2", true),
            Product::new(2, "Bread", "Bakery", "3", false),
        ])
    }

    fn ids(rows: &[Product]) -> Vec<ProductId> {
        rows.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_sort_is_id_ascending() {
        let catalog = ProductCatalog::with_products(vec![
            Product::new(10, "b", "x", "1", true),
            Product::new(9, "a", "x", "1", true),
            Product::new(2, "c", "x", "1", true),
        ]);
        assert_eq!(ids(&catalog.visible_rows()), vec![2, 9, 10]);
    }

    #[test]
    fn test_filter_then_sort_example() {
        let mut catalog = sample();
        catalog.set_filter(ProductColumn::Stocked, true.into());
        assert_eq!(ids(&catalog.visible_rows()), vec![1]);

        catalog.toggle_sort(ProductColumn::Name);
        catalog.toggle_sort(ProductColumn::Name);
        assert!(!catalog.sort().is_ascending());
        assert_eq!(ids(&catalog.visible_rows()), vec![1]);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let mut catalog = sample();
        catalog.toggle_sort(ProductColumn::Name);
        assert_eq!(ids(&catalog.visible_rows()), vec![1, 2]);
        catalog.toggle_sort(ProductColumn::Name);
        assert_eq!(ids(&catalog.visible_rows()), vec![2, 1]);
        catalog.toggle_sort(ProductColumn::Name);
        assert!(catalog.sort().is_ascending());
    }

    #[test]
    fn test_category_filter_with_placeholder() {
        let mut catalog = sample();
        catalog.set_filter(ProductColumn::Category, "bak".into());
        assert_eq!(ids(&catalog.visible_rows()), vec![2]);
        catalog.set_filter(ProductColumn::Category, NO_FILTER.into());
        assert_eq!(ids(&catalog.visible_rows()), vec![1, 2]);
    }

    #[test]
    fn test_submit_empty_draft_is_noop() {
        let mut catalog = sample();
        assert_eq!(catalog.submit_draft(), None);
        assert_eq!(catalog.products().len(), 2);
    }

    #[test]
    fn test_submit_draft_appends_and_resets() {
        let mut catalog = sample();
        catalog.set_draft_text(ProductColumn::Name, "Milk".into());
        catalog.set_draft_text(ProductColumn::Category, "Dairy".into());
        catalog.set_draft_text(ProductColumn::Price, "1".into());
        catalog.toggle_draft_stocked();

        let command = catalog.submit_draft();
        let expected = Product::new(3, "Milk", "Dairy", "1", true);
        assert_eq!(command, Some(SyncCommand::Create(expected.clone())));
        assert_eq!(catalog.products().last(), Some(&expected));
        assert_eq!(catalog.draft(), &ProductDraft::default());
        assert_eq!(catalog.categories(), vec![NO_FILTER, "Fruit", "Bakery", "Dairy"]);
    }

    #[test]
    fn test_submit_draft_without_free_id_keeps_draft() {
        let mut catalog = ProductCatalog::with_products(vec![Product::new(
            ProductId::MAX,
            "Apple",
            "Fruit",
            "2",
            true,
        )]);
        catalog.set_draft_text(ProductColumn::Name, "Milk".into());

        assert_eq!(catalog.submit_draft(), None);
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.draft().name, "Milk");
    }

    #[test]
    fn test_remove_missing_product_still_issues_delete() {
        let mut catalog = sample();
        let command = catalog.remove_product(42);
        assert_eq!(
            command,
            SyncCommand::Delete {
                id: 42,
                removed: None
            }
        );
        assert_eq!(catalog, sample());
    }

    #[test]
    fn test_remove_product() {
        let mut catalog = sample();
        let command = catalog.remove_product(1);
        assert_eq!(
            command,
            SyncCommand::Delete {
                id: 1,
                removed: Some(RemovedProduct {
                    index: 0,
                    product: Product::new(1, "Apple", "Fruit", "2", true),
                }),
            }
        );
        assert_eq!(ids(catalog.products()), vec![2]);
    }

    #[test]
    fn test_reconcile_fetch() {
        let mut catalog = ProductCatalog::new();
        catalog.reconcile(SyncOutcome::Fetched(Err(SyncError::Network("offline".into()))));
        assert!(catalog.last_error().is_some());

        catalog.reconcile(SyncOutcome::Fetched(Ok(sample().products().to_vec())));
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.last_error(), None);
    }

    #[test]
    fn test_reconcile_failed_create_drops_optimistic_row() {
        let mut catalog = sample();
        catalog.set_draft_text(ProductColumn::Name, "Milk".into());
        let Some(SyncCommand::Create(product)) = catalog.submit_draft() else {
            panic!("expected create command");
        };
        assert_eq!(catalog.products().len(), 3);

        catalog.reconcile(SyncOutcome::Created {
            product,
            result: Err(SyncError::Server { status: 500 }),
        });
        assert_eq!(ids(catalog.products()), vec![1, 2]);
        assert_eq!(catalog.last_error(), Some(&SyncError::Server { status: 500 }));
    }

    #[test]
    fn test_reconcile_failed_delete_restores_row() {
        let mut catalog = sample();
        let SyncCommand::Delete { id, removed } = catalog.remove_product(1) else {
            panic!("expected delete command");
        };
        catalog.reconcile(SyncOutcome::Deleted {
            id,
            removed,
            result: Err(SyncError::Network("timeout".into())),
        });
        assert_eq!(ids(catalog.products()), vec![1, 2]);
        assert!(catalog.last_error().is_some());

        catalog.dismiss_error();
        assert_eq!(catalog.last_error(), None);
    }

    #[test]
    fn test_reconcile_successful_delete_keeps_row_removed() {
        let mut catalog = sample();
        let SyncCommand::Delete { id, removed } = catalog.remove_product(2) else {
            panic!("expected delete command");
        };
        catalog.reconcile(SyncOutcome::Deleted {
            id,
            removed,
            result: Ok(()),
        });
        assert_eq!(ids(catalog.products()), vec![1]);
    }
}
