use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();

    let user_label = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.display_name())
                .unwrap_or_else(|| "Signed in".to_string())
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">"Online Shop Admin"</div>

            <div class="top-header__user">
                <span class="top-header__user-name">{user_label}</span>
                <button class="button button--secondary" on:click=move |_| logout(auth)>
                    {icon("log-out")}
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
