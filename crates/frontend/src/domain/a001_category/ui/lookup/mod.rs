use contracts::domain::a001_category::Category;
use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::use_api;

/// Find-one panel: fetches a single category by its identifier and shows
/// the result inline, or the server's miss message.
#[component]
pub fn CategoryLookup() -> impl IntoView {
    let api = use_api();
    let (query, set_query) = signal(String::new());
    let (found, set_found) = signal(Option::<Category>::None);
    let (miss, set_miss) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Ok(id) = query.with(|q| q.trim().parse::<EntityId>()) else {
            set_found.set(None);
            set_miss.set(Some("Enter a numeric id".to_string()));
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            match api.fetch_one::<Category>(Category::collection_name(), id).await {
                Ok(category) => {
                    set_found.set(Some(category));
                    set_miss.set(None);
                }
                Err(err) => {
                    set_found.set(None);
                    set_miss.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <form class="lookup" on:submit=on_submit>
            <label for="category-lookup">"Find by id"</label>
            <input
                type="text"
                id="category-lookup"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
                placeholder="Category id"
            />
            <button type="submit" class="button button--secondary">
                {icon("search")}
                "Find"
            </button>

            {move || miss.get().map(|m| view! { <span class="lookup__miss">{m}</span> })}
            {move || {
                found.get().map(|category| view! {
                    <div class="lookup__result">
                        <span class="lookup__result-id">{format!("#{}", category.id)}</span>
                        <span class="lookup__result-name">{category.name}</span>
                        <span class="lookup__result-description">{category.description}</span>
                    </div>
                })
            }}
        </form>
    }
}
