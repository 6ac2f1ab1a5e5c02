use contracts::domain::a006_order::{Order, OrderDetail};
use leptos::prelude::*;

use crate::shared::crud::controller::PageController;
use crate::shared::crud::form::FormState;
use crate::shared::date_utils::iso_date_part;
use crate::shared::icons::icon;

/// Order form with an editable list of line items.
///
/// The line list re-renders only when a row is added or removed; edits
/// inside a row go through reactive value bindings so the focused input
/// is not rebuilt mid-typing.
#[component]
pub fn OrderDetailsForm(ctrl: PageController<Order>) -> impl IntoView {
    let form = ctrl.form;
    let submit_ctrl = ctrl.clone();
    let cancel_ctrl = ctrl;

    let line_count = Memo::new(move |_| form.with(|f| f.draft.order_details.len()));

    let add_line = move |_| {
        form.update(|f| f.draft.order_details.push(OrderDetail::default()));
    };

    view! {
        <div class="details-container details-container--wide">
            <div class="details-header">
                <h3>{move || if form.with(|f| f.is_edit()) { "Edit order" } else { "New order" }}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="createdDate">"Created date"</label>
                    <input
                        type="date"
                        id="createdDate"
                        prop:value=move || form.with(|f| iso_date_part(&f.draft.created_date).to_string())
                        on:input=move |ev| form.update(|f| f.draft.created_date = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("createdDate")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="shippedDate">"Shipped date"</label>
                    <input
                        type="date"
                        id="shippedDate"
                        prop:value=move || form.with(|f| iso_date_part(&f.draft.shipped_date).to_string())
                        on:input=move |ev| form.update(|f| f.draft.shipped_date = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("shippedDate")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="status">"Status"</label>
                    <input
                        type="text"
                        id="status"
                        prop:value=move || form.with(|f| f.draft.status.clone())
                        on:input=move |ev| form.update(|f| f.draft.status = event_target_value(&ev))
                        placeholder="e.g. pending"
                    />
                    {move || form.with(|f| f.error("status")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.with(|f| f.draft.description.clone())
                        on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("description")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="shippingAddress">"Shipping address"</label>
                    <input
                        type="text"
                        id="shippingAddress"
                        prop:value=move || form.with(|f| f.draft.shipping_address.clone())
                        on:input=move |ev| form.update(|f| f.draft.shipping_address = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("shippingAddress")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="shippingCity">"Shipping city"</label>
                    <input
                        type="text"
                        id="shippingCity"
                        prop:value=move || form.with(|f| f.draft.shipping_city.clone())
                        on:input=move |ev| form.update(|f| f.draft.shipping_city = event_target_value(&ev))
                    />
                    {move || form.with(|f| f.error("shippingCity")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="paymentType">"Payment type"</label>
                    <input
                        type="text"
                        id="paymentType"
                        prop:value=move || form.with(|f| f.draft.payment_type.clone())
                        on:input=move |ev| form.update(|f| f.draft.payment_type = event_target_value(&ev))
                        placeholder="cash, card..."
                    />
                    {move || form.with(|f| f.error("paymentType")).map(|m| view! { <span class="form-error">{m}</span> })}
                </div>

                <div class="form-group">
                    <label for="customerId">"Customer id"</label>
                    <input
                        type="number"
                        id="customerId"
                        prop:value=move || form.with(|f| f.draft.customer_id.to_string())
                        on:input=move |ev| form.update(|f| {
                            f.draft.customer_id = event_target_value(&ev).parse().unwrap_or(0)
                        })
                    />
                </div>

                <div class="form-group">
                    <label for="employeeId">"Employee id"</label>
                    <input
                        type="number"
                        id="employeeId"
                        prop:value=move || form.with(|f| f.draft.employee_id.to_string())
                        on:input=move |ev| form.update(|f| {
                            f.draft.employee_id = event_target_value(&ev).parse().unwrap_or(0)
                        })
                    />
                </div>

                <div class="form-group form-group--lines">
                    <label>"Order lines"</label>
                    {move || form.with(|f| f.error("orderDetails")).map(|m| view! { <span class="form-error">{m}</span> })}

                    <div class="order-lines">
                        {move || {
                            (0..line_count.get())
                                .map(|index| view! { <OrderLineEditor form=form index=index /> })
                                .collect_view()
                        }}
                    </div>

                    <button type="button" class="button button--secondary" on:click=add_line>
                        {icon("plus")}
                        "Add line"
                    </button>
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

/// One editable line. Reads and writes the draft's line at `index`; the
/// index is stable for the lifetime of the rendered row because the row
/// list is re-collected whenever a line is added or removed.
#[component]
fn OrderLineEditor(form: RwSignal<FormState<Order>>, index: usize) -> impl IntoView {
    let line = move |f: &FormState<Order>| {
        f.draft.order_details.get(index).cloned().unwrap_or_default()
    };

    view! {
        <div class="order-line">
            <div class="order-line__field">
                <label>"Order id"</label>
                <input
                    type="number"
                    prop:value=move || form.with(|f| line(f).order_id.to_string())
                    on:input=move |ev| form.update(|f| {
                        if let Some(l) = f.draft.order_details.get_mut(index) {
                            l.order_id = event_target_value(&ev).parse().unwrap_or(0);
                        }
                    })
                />
            </div>

            <div class="order-line__field">
                <label>"Product id"</label>
                <input
                    type="number"
                    prop:value=move || form.with(|f| line(f).product_id.to_string())
                    on:input=move |ev| form.update(|f| {
                        if let Some(l) = f.draft.order_details.get_mut(index) {
                            l.product_id = event_target_value(&ev).parse().unwrap_or(0);
                        }
                    })
                />
            </div>

            <div class="order-line__field">
                <label>"Quantity"</label>
                <input
                    type="number"
                    prop:value=move || form.with(|f| line(f).quantity.to_string())
                    on:input=move |ev| form.update(|f| {
                        if let Some(l) = f.draft.order_details.get_mut(index) {
                            l.quantity = event_target_value(&ev).parse().unwrap_or(0);
                        }
                    })
                />
            </div>

            <div class="order-line__field">
                <label>"Price"</label>
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || form.with(|f| line(f).price.to_string())
                    on:input=move |ev| form.update(|f| {
                        if let Some(l) = f.draft.order_details.get_mut(index) {
                            l.price = event_target_value(&ev).parse().unwrap_or(0.0);
                        }
                    })
                />
            </div>

            <div class="order-line__field">
                <label>"Discount"</label>
                <input
                    type="number"
                    step="0.01"
                    prop:value=move || form.with(|f| line(f).discount.to_string())
                    on:input=move |ev| form.update(|f| {
                        if let Some(l) = f.draft.order_details.get_mut(index) {
                            l.discount = event_target_value(&ev).parse().unwrap_or(0.0);
                        }
                    })
                />
            </div>

            <button
                type="button"
                class="button button--danger order-line__remove"
                on:click=move |_| form.update(|f| {
                    if index < f.draft.order_details.len() {
                        f.draft.order_details.remove(index);
                    }
                })
            >
                {icon("trash")}
            </button>
        </div>
    }
}
