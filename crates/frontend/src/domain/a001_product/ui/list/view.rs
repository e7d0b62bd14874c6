use super::view_model::ProductListViewModel;
use crate::shared::list_utils::get_sort_indicator;
use contracts::domain::a001_product::aggregate::{Product, ProductColumn};
use contracts::shared::list_query::{FilterValue, ListRow};
use leptos::prelude::*;

/// Draft fields entered as text, in form order
const DRAFT_TEXT_FIELDS: [ProductColumn; 3] = [
    ProductColumn::Name,
    ProductColumn::Category,
    ProductColumn::Price,
];

fn cell_text(product: &Product, column: ProductColumn) -> String {
    product
        .field(column)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

fn header_cell(vm: ProductListViewModel, column: ProductColumn) -> impl IntoView {
    view! {
        <th>
            <span>{column.label()}</span>
            <button on:click=move |_| vm.handle_sort(column)>
                {move || get_sort_indicator(&vm.sort(), column)}
            </button>
        </th>
    }
}

fn filter_cell(vm: ProductListViewModel, column: ProductColumn) -> AnyView {
    match column {
        ProductColumn::Stocked => view! {
            <th>
                <input
                    type="checkbox"
                    on:change=move |ev| {
                        vm.handle_search(column, FilterValue::Flag(event_target_checked(&ev)));
                    }
                />
            </th>
        }
        .into_any(),
        ProductColumn::Category => view! {
            <th>
                <select on:change=move |ev| {
                    vm.handle_search(column, FilterValue::Text(event_target_value(&ev)));
                }>
                    {move || {
                        vm.categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                let option = category.clone();
                                let value = category.clone();
                                view! {
                                    <option
                                        value=value
                                        prop:selected=move || vm.is_filter_selected(column, &option)
                                    >
                                        {category}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </th>
        }
        .into_any(),
        _ => view! {
            <th>
                <input
                    type="search"
                    placeholder=format!("Search {}", column.label())
                    prop:value=move || vm.filter_text(column)
                    on:input=move |ev| {
                        vm.handle_search(column, FilterValue::Text(event_target_value(&ev)));
                    }
                />
            </th>
        }
        .into_any(),
    }
}

fn product_row(vm: ProductListViewModel, product: Product) -> impl IntoView {
    let id = product.id;
    let cells = ProductColumn::DISPLAYED
        .into_iter()
        .map(|column| match column {
            ProductColumn::Stocked => view! {
                <td>
                    <input type="checkbox" prop:checked=product.is_stocked() disabled=true />
                </td>
            }
            .into_any(),
            _ => view! { <td>{cell_text(&product, column)}</td> }.into_any(),
        })
        .collect_view();

    view! {
        <tr>
            {cells}
            <td>
                <button on:click=move |_| vm.delete(id)>"Delete"</button>
            </td>
        </tr>
    }
}

fn draft_form(vm: ProductListViewModel) -> impl IntoView {
    view! {
        <form on:submit=move |ev| {
            ev.prevent_default();
            vm.submit();
        }>
            <div>
                {DRAFT_TEXT_FIELDS
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div>
                                <input
                                    type="text"
                                    placeholder=column.label()
                                    name=column.accessor()
                                    prop:value=move || vm.draft_text(column)
                                    on:input=move |ev| vm.set_draft_text(column, event_target_value(&ev))
                                />
                            </div>
                        }
                    })
                    .collect_view()}
                <div>
                    <input
                        type="checkbox"
                        name="stocked"
                        prop:checked=move || vm.draft_stocked()
                        on:change=move |_| vm.toggle_draft_stocked()
                    />
                </div>
                <div>
                    <input type="submit" class="btn btn-success" />
                </div>
            </div>
        </form>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let vm = ProductListViewModel::new();
    vm.schedule_initial_fetch();

    view! {
        <div class="product-list">
            {move || {
                vm.error()
                    .map(|err| {
                        view! {
                            <div class="alert alert-danger" role="alert">
                                {err}
                                <button class="btn-close" on:click=move |_| vm.dismiss_error()>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
            <table>
                <thead>
                    <tr>
                        {ProductColumn::DISPLAYED
                            .into_iter()
                            .map(|column| header_cell(vm, column))
                            .collect_view()}
                    </tr>
                    <tr>
                        {ProductColumn::DISPLAYED
                            .into_iter()
                            .map(|column| filter_cell(vm, column))
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        vm.rows
                            .get()
                            .into_iter()
                            .map(|product| product_row(vm, product))
                            .collect_view()
                    }}
                </tbody>
            </table>
            <br />
            "Add new product"
            {draft_form(vm)}
        </div>
    }
}
