use contracts::domain::a004_employee::Employee;
use contracts::domain::common::Entity;
use leptos::prelude::*;

use super::details::EmployeeDetails;
use crate::shared::crud::controller::PageController;
use crate::shared::crud::table::{Column, EntityTable};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::dash_if_empty;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_api;

#[component]
pub fn EmployeePage() -> impl IntoView {
    let ctrl = PageController::<Employee>::new(use_api(), use_toasts());
    ctrl.load();

    let columns = vec![
        Column {
            label: "First name",
            cell: |employee: &Employee| employee.first_name.clone(),
        },
        Column {
            label: "Last name",
            cell: |employee: &Employee| employee.last_name.clone(),
        },
        Column {
            label: "E-mail",
            cell: |employee: &Employee| employee.email.clone(),
        },
        Column {
            label: "Address",
            cell: |employee: &Employee| dash_if_empty(&employee.address),
        },
        Column {
            label: "Phone",
            cell: |employee: &Employee| dash_if_empty(&employee.phone_number),
        },
        Column {
            label: "Birthday",
            cell: |employee: &Employee| format_date(&employee.birthday),
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
                    <h1 class="header__title">{Employee::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| create_ctrl.open_create()>
                        {icon("plus")}
                        "New employee"
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh_ctrl.load()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || form_open.get()>
                <EmployeeDetails ctrl=form_ctrl.clone() />
            </Show>

            <EntityTable ctrl=ctrl columns=columns />
        </div>
    }
}
