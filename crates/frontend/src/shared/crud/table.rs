use contracts::domain::common::Entity;
use leptos::prelude::*;

use super::controller::PageController;
use crate::shared::icons::icon;

/// One table column: header label plus a cell projection.
pub struct Column<E> {
    pub label: &'static str,
    pub cell: fn(&E) -> String,
}

impl<E> Clone for Column<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Column<E> {}

/// Collection rendered as rows in array order.
///
/// The first column is the 1-based row position: a display artifact that
/// shifts as rows come and go, not a stable key. Rows re-collect from the
/// array on every change, so an edit can never leave a stale row behind.
#[component]
pub fn EntityTable<E>(ctrl: PageController<E>, columns: Vec<Column<E>>) -> impl IntoView
where
    E: Entity,
{
    let body_columns = columns.clone();

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell table__header-cell--number">"#"</th>
                        {columns
                            .iter()
                            .map(|column| view! { <th class="table__header-cell">{column.label}</th> })
                            .collect_view()}
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        ctrl.items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, record)| {
                                let edit_ctrl = ctrl.clone();
                                let delete_ctrl = ctrl.clone();
                                let edit_record = record.clone();
                                let id = record.id();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--number">{index + 1}</td>
                                        {body_columns
                                            .iter()
                                            .map(|column| {
                                                view! { <td class="table__cell">{(column.cell)(&record)}</td> }
                                            })
                                            .collect_view()}
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| edit_ctrl.open_edit(&edit_record)
                                            >
                                                {icon("edit")}
                                                "Edit"
                                            </button>
                                            <button
                                                class="button button--danger"
                                                on:click=move |_| delete_ctrl.delete(id)
                                            >
                                                {icon("trash")}
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
