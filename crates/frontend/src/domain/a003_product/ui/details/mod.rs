use contracts::domain::a001_category::Category;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a003_product::Product;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::crud::controller::PageController;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api;

/// Product form. Loads the Categories and Suppliers collections once on
/// open so the reference fields are picked from selects rather than typed
/// as raw ids.
#[component]
pub fn ProductDetails(ctrl: PageController<Product>) -> impl IntoView {
    let form = ctrl.form;
    let submit_ctrl = ctrl.clone();
    let cancel_ctrl = ctrl;

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (suppliers, set_suppliers) = signal(Vec::<Supplier>::new());

    let api = use_api();
    {
        let api = api.clone();
        spawn_local(async move {
            match api.fetch_collection::<Category>(Category::collection_name()).await {
                Ok(list) => set_categories.set(list),
                Err(err) => log::error!("failed to load categories: {}", err),
            }
        });
    }
    spawn_local(async move {
        match api.fetch_collection::<Supplier>(Supplier::collection_name()).await {
            Ok(list) => set_suppliers.set(list),
            Err(err) => log::error!("failed to load suppliers: {}", err),
        }
    });

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if form.with(|f| f.is_edit()) { "Edit product" } else { "New product" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.draft.name.clone())
                        on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                        placeholder="Product name"
                    />
                    {move || form.with(|f| f.error("name")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.with(|f| f.draft.description.clone())
                        on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
                        placeholder="Short description"
                    />
                    {move || form.with(|f| f.error("description")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="price">"Price"</label>
                    <input
                        type="number"
                        id="price"
                        step="0.01"
                        prop:value=move || form.with(|f| f.draft.price.to_string())
                        on:input=move |ev| form.update(|f| {
                            f.draft.price = event_target_value(&ev).parse().unwrap_or(0.0)
                        })
                    />
                </div>

                <div class="form-group">
                    <label for="discount">"Discount"</label>
                    <input
                        type="number"
                        id="discount"
                        step="0.01"
                        prop:value=move || form.with(|f| f.draft.discount.to_string())
                        on:input=move |ev| form.update(|f| {
                            f.draft.discount = event_target_value(&ev).parse().unwrap_or(0.0)
                        })
                    />
                </div>

                <div class="form-group">
                    <label for="stock">"Stock"</label>
                    <input
                        type="number"
                        id="stock"
                        prop:value=move || form.with(|f| f.draft.stock.to_string())
                        on:input=move |ev| form.update(|f| {
                            f.draft.stock = event_target_value(&ev).parse().unwrap_or(0)
                        })
                    />
                </div>

                <div class="form-group">
                    <label for="categoriesId">"Category"</label>
                    <select
                        id="categoriesId"
                        prop:value=move || form.with(|f| f.draft.categories_id.to_string())
                        on:change=move |ev| form.update(|f| {
                            f.draft.categories_id = event_target_value(&ev).parse().unwrap_or(0)
                        })
                    >
                        <option value="0">"Select category"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|category| view! {
                                    <option value=category.id.to_string()>{category.name}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label for="supplierId">"Supplier"</label>
                    <select
                        id="supplierId"
                        prop:value=move || form.with(|f| f.draft.supplier_id.to_string())
                        on:change=move |ev| form.update(|f| {
                            f.draft.supplier_id = event_target_value(&ev).parse().unwrap_or(0)
                        })
                    >
                        <option value="0">"Select supplier"</option>
                        {move || {
                            suppliers
                                .get()
                                .into_iter()
                                .map(|supplier| view! {
                                    <option value=supplier.id.to_string()>{supplier.name}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=move |_| submit_ctrl.submit()>
                    {icon("save")}
                    {move || if form.with(|f| f.is_edit()) { "Save" } else { "Create" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| cancel_ctrl.close_form()>
                    {icon("cancel")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
