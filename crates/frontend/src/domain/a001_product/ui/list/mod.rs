//! Product list UI module
//!
//! MVVM split:
//! - model.rs: requests to the products endpoint
//! - view_model.rs: signals, memoized rows and commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::ProductList;
pub use view_model::ProductListViewModel;
