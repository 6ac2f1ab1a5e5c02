use contracts::domain::a001_category::Category;
use leptos::prelude::*;

use crate::shared::crud::controller::PageController;
use crate::shared::icons::icon;

#[component]
pub fn CategoryDetails(ctrl: PageController<Category>) -> impl IntoView {
    let form = ctrl.form;
    let submit_ctrl = ctrl.clone();
    let cancel_ctrl = ctrl;

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{move || if form.with(|f| f.is_edit()) { "Edit category" } else { "New category" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.draft.name.clone())
                        on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                        placeholder="Category name"
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
                        placeholder="Optional description"
                    />
                    {move || form.with(|f| f.error("description")).map(|m| view! { <span class="form-error">{m}</span> })}
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
