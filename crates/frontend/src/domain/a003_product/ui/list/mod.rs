use contracts::domain::a003_product::Product;
use contracts::domain::common::Entity;
use leptos::prelude::*;

use super::details::ProductDetails;
use crate::shared::crud::controller::PageController;
use crate::shared::crud::table::{Column, EntityTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::truncate;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_api;

#[component]
pub fn ProductPage() -> impl IntoView {
    let ctrl = PageController::<Product>::new(use_api(), use_toasts());
    ctrl.load();

    let columns = vec![
        Column {
            label: "Name",
            cell: |product: &Product| product.name.clone(),
        },
        Column {
            label: "Price",
            cell: |product: &Product| product.price.to_string(),
        },
        Column {
            label: "Discount",
            cell: |product: &Product| product.discount.to_string(),
        },
        Column {
            label: "Stock",
            cell: |product: &Product| product.stock.to_string(),
        },
        Column {
            label: "Description",
            cell: |product: &Product| truncate(&product.description, 60),
        },
        Column {
            label: "Category",
            // prefer the denormalized snapshot; fall back to the raw id
            cell: |product: &Product| {
                product
                    .categories
                    .as_ref()
                    .map(|category| category.name.clone())
                    .unwrap_or_else(|| product.categories_id.to_string())
            },
        },
        Column {
            label: "Supplier",
            cell: |product: &Product| {
                product
                    .supplier
                    .as_ref()
                    .map(|supplier| supplier.name.clone())
                    .unwrap_or_else(|| product.supplier_id.to_string())
            },
        },
    ];

    let create_ctrl = ctrl.clone();
    let refresh_ctrl = ctrl.clone();
    let form_ctrl = ctrl.clone();
    let form_open = ctrl.form_open;

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Product::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| create_ctrl.open_create()>
                        {icon("plus")}
                        "New product"
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh_ctrl.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || form_open.get()>
                <ProductDetails ctrl=form_ctrl.clone() />
            </Show>

            <EntityTable ctrl=ctrl columns=columns />
        </div>
    }
}
