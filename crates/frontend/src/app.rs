use crate::domain::a001_product::ui::list::ProductList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container">
            <ProductList />
        </main>
    }
}
