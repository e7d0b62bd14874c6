use super::model;
use crate::shared::list_utils::{filter_input_text, is_selected_option};
use contracts::domain::a001_product::aggregate::{Product, ProductColumn, ProductId};
use contracts::domain::a001_product::catalog::{ProductCatalog, SyncCommand};
use contracts::shared::list_query::{FilterValue, SortSpec};
use leptos::prelude::*;
use std::time::Duration;

/// Delay before the initial load after mount
const INITIAL_FETCH_DELAY: Duration = Duration::from_millis(100);

/// ViewModel for the product list
#[derive(Clone, Copy)]
pub struct ProductListViewModel {
    pub catalog: RwSignal<ProductCatalog>,
    /// Visible rows, recomputed whenever products, filters or sort change
    pub rows: Memo<Vec<Product>>,
    /// Options of the category filter
    pub categories: Memo<Vec<String>>,
}

impl ProductListViewModel {
    pub fn new() -> Self {
        let catalog = RwSignal::new(ProductCatalog::new());
        let rows = Memo::new(move |_| catalog.with(|c| c.visible_rows()));
        let categories = Memo::new(move |_| catalog.with(|c| c.categories()));
        Self {
            catalog,
            rows,
            categories,
        }
    }

    pub fn sort(&self) -> SortSpec<ProductColumn> {
        self.catalog.with(|c| c.sort())
    }

    pub fn error(&self) -> Option<String> {
        self.catalog
            .with(|c| c.last_error().map(|e| e.to_string()))
    }

    pub fn filter_text(&self, column: ProductColumn) -> String {
        self.catalog
            .with(|c| filter_input_text(c.filters().get(column)))
    }

    /// Option of a select filter matching the column's filter value
    pub fn is_filter_selected(&self, column: ProductColumn, option: &str) -> bool {
        self.catalog
            .with(|c| is_selected_option(c.filters().get(column), option))
    }

    pub fn draft_text(&self, column: ProductColumn) -> String {
        self.catalog.with(|c| {
            let draft = c.draft();
            match column {
                ProductColumn::Name => draft.name.clone(),
                ProductColumn::Category => draft.category.clone(),
                ProductColumn::Price => draft.price.clone(),
                ProductColumn::Id | ProductColumn::Stocked => String::new(),
            }
        })
    }

    pub fn draft_stocked(&self) -> bool {
        self.catalog.with(|c| c.draft().stocked)
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn handle_sort(&self, column: ProductColumn) {
        self.catalog.update(|c| c.toggle_sort(column));
    }

    pub fn handle_search(&self, column: ProductColumn, value: FilterValue) {
        self.catalog.update(|c| c.set_filter(column, value));
    }

    pub fn set_draft_text(&self, column: ProductColumn, value: String) {
        self.catalog.update(|c| c.set_draft_text(column, value));
    }

    pub fn toggle_draft_stocked(&self) {
        self.catalog.update(|c| c.toggle_draft_stocked());
    }

    pub fn dismiss_error(&self) {
        self.catalog.update(|c| c.dismiss_error());
    }

    /// Add the drafted product locally and post it
    pub fn submit(&self) {
        let mut command = None;
        self.catalog.update(|c| command = c.submit_draft());
        match command {
            Some(command) => self.dispatch(command),
            None if self.catalog.with_untracked(|c| c.draft().is_empty()) => {
                log::debug!("Empty product form ignored")
            }
            None => log::warn!("No product id left above the largest one, product not added"),
        }
    }

    /// Remove the product locally and delete it on the server
    pub fn delete(&self, id: ProductId) {
        let mut command = None;
        self.catalog.update(|c| command = Some(c.remove_product(id)));
        if let Some(command) = command {
            self.dispatch(command);
        }
    }

    pub fn load(&self) {
        self.dispatch(SyncCommand::Fetch);
    }

    /// Load products shortly after mount; the timer is cleared if the
    /// component is disposed first
    pub fn schedule_initial_fetch(&self) {
        let vm = *self;
        match set_timeout_with_handle(move || vm.load(), INITIAL_FETCH_DELAY) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::error!("Failed to schedule initial fetch: {:?}", e);
                vm.load();
            }
        }
    }

    /// Send the request without blocking rendering, then reconcile
    fn dispatch(&self, command: SyncCommand) {
        let catalog = self.catalog;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::execute(command).await;
            log::debug!("Sync finished: {:?}", outcome);
            if catalog
                .try_update(|c| {
                    c.reconcile(outcome);
                    if let Some(e) = c.last_error() {
                        log::warn!("Product sync failed: {}", e);
                    }
                })
                .is_none()
            {
                log::debug!("Product list disposed before sync completed");
            }
        });
    }
}

impl Default for ProductListViewModel {
    fn default() -> Self {
        Self::new()
    }
}
