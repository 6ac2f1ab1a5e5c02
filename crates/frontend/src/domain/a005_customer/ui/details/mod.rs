use contracts::domain::a005_customer::Customer;
use leptos::prelude::*;

use crate::shared::crud::controller::PageController;
use crate::shared::date_utils::iso_date_part;
use crate::shared::icons::icon;

#[component]
pub fn CustomerDetails(ctrl: PageController<Customer>) -> impl IntoView {
    let form = ctrl.form;
    let submit_ctrl = ctrl.clone();
    let cancel_ctrl = ctrl;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if form.with(|f| f.is_edit()) { "Edit customer" } else { "New customer" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="firstName">"First name"</label>
                    <input
                        type="text"
                        id="firstName"
                        prop:value=move || form.with(|f| f.draft.first_name.clone())
                        on:input=move |ev| form.update(|f| f.draft.first_name = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("firstName")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="lastName">"Last name"</label>
                    <input
                        type="text"
                        id="lastName"
                        prop:value=move || form.with(|f| f.draft.last_name.clone())
                        on:input=move |ev| form.update(|f| f.draft.last_name = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("lastName")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="email">"E-mail"</label>
                    <input
                        type="text"
                        id="email"
                        prop:value=move || form.with(|f| f.draft.email.clone())
                        on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                        placeholder="name@mail.example"
                    />
                    {move || form.with(|f| f.error("email")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="address">"Address"</label>
                    <input
                        type="text"
                        id="address"
                        prop:value=move || form.with(|f| f.draft.address.clone())
                        on:input=move |ev| form.update(|f| f.draft.address = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("address")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="phoneNumber">"Phone number"</label>
                    <input
                        type="text"
                        id="phoneNumber"
                        prop:value=move || form.with(|f| f.draft.phone_number.clone())
                        on:input=move |ev| form.update(|f| f.draft.phone_number = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("phoneNumber")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="birthday">"Birthday"</label>
                    <input
                        type="date"
                        id="birthday"
                        prop:value=move || form.with(|f| iso_date_part(&f.draft.birthday).to_string())
                        on:input=move |ev| form.update(|f| f.draft.birthday = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("birthday")).map(|m| view! { <span class="form-error">{m}</span> })}
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
