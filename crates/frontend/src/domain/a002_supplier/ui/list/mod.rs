use contracts::domain::a002_supplier::Supplier;
use contracts::domain::common::Entity;
use leptos::prelude::*;

use super::details::SupplierDetails;
use crate::shared::crud::controller::PageController;
use crate::shared::crud::table::{Column, EntityTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::dash_if_empty;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_api;

#[component]
pub fn SupplierPage() -> impl IntoView {
    let ctrl = PageController::<Supplier>::new(use_api(), use_toasts());
    ctrl.load();

    let columns = vec![
        Column {
            label: "Name",
            cell: |supplier: &Supplier| supplier.name.clone(),
        },
        Column {
            label: "E-mail",
            cell: |supplier: &Supplier| supplier.email.clone(),
        },
        Column {
            label: "Address",
            cell: |supplier: &Supplier| dash_if_empty(&supplier.address),
        },
        Column {
            label: "Phone",
            cell: |supplier: &Supplier| dash_if_empty(&supplier.phone_number),
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
                    <h1 class="header__title">{Supplier::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| create_ctrl.open_create()>
                        {icon("plus")}
                        "New supplier"
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh_ctrl.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || form_open.get()>
                <SupplierDetails ctrl=form_ctrl.clone() />
            </Show>

            <EntityTable ctrl=ctrl columns=columns />
        </div>
    }
}
