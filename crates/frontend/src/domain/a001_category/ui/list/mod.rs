use contracts::domain::a001_category::Category;
use contracts::domain::common::Entity;
use leptos::prelude::*;

use super::details::CategoryDetails;
use super::lookup::CategoryLookup;
use crate::shared::crud::controller::PageController;
use crate::shared::crud::table::{Column, EntityTable};
use crate::shared::icons::icon;
use crate::shared::list_utils::truncate;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_api;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let ctrl = PageController::<Category>::new(use_api(), use_toasts());
    ctrl.load();

    let columns = vec![
        Column {
            label: "Name",
            cell: |category: &Category| category.name.clone(),
        },
        Column {
            label: "Description",
            cell: |category: &Category| truncate(&category.description, 100),
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
                    <h1 class="header__title">{Category::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| create_ctrl.open_create()>
                        {icon("plus")}
                        "New category"
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh_ctrl.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || form_open.get()>
                <CategoryDetails ctrl=form_ctrl.clone() />
            </Show>

            <CategoryLookup />

            <EntityTable ctrl=ctrl columns=columns />
        </div>
    }
}
