use contracts::domain::a006_order::Order;
use contracts::domain::common::Entity;
use leptos::prelude::*;

use super::details::OrderDetailsForm;
use crate::shared::crud::controller::PageController;
use crate::shared::crud::table::{Column, EntityTable};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{dash_if_empty, truncate};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_api;

#[component]
pub fn OrderPage() -> impl IntoView {
    let ctrl = PageController::<Order>::new(use_api(), use_toasts());
    ctrl.load();

    let columns = vec![
        Column {
            label: "Created",
            cell: |order: &Order| format_date(&order.created_date),
        },
        Column {
            label: "Shipped",
            cell: |order: &Order| {
                order
                    .shipped_date
                    .as_deref()
                    .map(format_date)
                    .map(|d| dash_if_empty(&d))
                    .unwrap_or_else(|| "—".to_string())
            },
        },
        Column {
            label: "Status",
            cell: |order: &Order| dash_if_empty(&order.status),
        },
        Column {
            label: "Description",
            cell: |order: &Order| truncate(&order.description, 60),
        },
        Column {
            label: "Ship to",
            cell: |order: &Order| dash_if_empty(&order.shipping_address),
        },
        Column {
            label: "City",
            cell: |order: &Order| dash_if_empty(&order.shipping_city),
        },
        Column {
            label: "Lines",
            cell: |order: &Order| order.order_details.len().to_string(),
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
                    <h1 class="header__title">{Order::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| create_ctrl.open_create()>
                        {icon("plus")}
                        "New order"
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh_ctrl.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || form_open.get()>
                <OrderDetailsForm ctrl=form_ctrl.clone() />
            </Show>

            <EntityTable ctrl=ctrl columns=columns />
        </div>
    }
}
