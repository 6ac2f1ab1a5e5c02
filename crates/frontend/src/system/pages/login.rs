use contracts::shared::validation::FieldErrors;
use contracts::system::auth::validate_login;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (server_error, set_server_error) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        let field_errors = validate_login(&username_val, &password_val);
        if !field_errors.is_empty() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::new());
        set_server_error.set(None);
        set_is_loading.set(true);

        spawn_local(async move {
            match login(auth, username_val, password_val).await {
                Ok(()) => {
                    // auth state flips and the shell takes over
                    set_is_loading.set(false);
                }
                Err(message) => {
                    set_server_error.set(Some(message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Online Shop"</h1>
                <h2>"Back office sign in"</h2>

                <Show when=move || server_error.get().is_some()>
                    <div class="error-message">
                        {move || server_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="name@company.example"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || {
                            errors
                                .with(|e| e.get("username").map(str::to_string))
                                .map(|m| view! { <span class="form-error">{m}</span> })
                        }}
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        {move || {
                            errors
                                .with(|e| e.get("password").map(str::to_string))
                                .map(|m| view! { <span class="form-error">{m}</span> })
                        }}
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
