use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_client::{ApiClient, ApiSession};

/// Session plus who is signed in. `session` is the single source of truth
/// for "is the user authenticated"; the bypass login holds a tokenless one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<ApiSession>,
    pub user: Option<UserInfo>,
}

/// Auth context provider component.
///
/// Restores a persisted session from storage on startup; the token is not
/// validated against the server, requests simply start failing if it has
/// expired.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(AuthState::default());

    if let Some(token) = storage::get_access_token() {
        state.set(AuthState {
            session: Some(ApiSession::with_token(token)),
            user: None,
        });
    }

    provide_context(state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Client bound to the current session. Call from components rendered
/// behind the auth gate.
pub fn use_api() -> ApiClient {
    let session = use_auth()
        .with_untracked(|state| state.session.clone())
        .unwrap_or_default();
    ApiClient::new(session)
}

/// Perform login. The bypass pair short-circuits entirely client-side;
/// otherwise the server is asked and the returned token persisted.
pub async fn login(
    auth: RwSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    if username == api::BYPASS_USERNAME && password == api::BYPASS_PASSWORD {
        auth.set(AuthState {
            session: Some(ApiSession::anonymous()),
            user: None,
        });
        return Ok(());
    }

    match api::login(username, password).await {
        Ok(response) if response.logged_in_user.is_some() => {
            storage::save_access_token(&response.access_token);
            auth.set(AuthState {
                session: Some(ApiSession::with_token(response.access_token)),
                user: response.logged_in_user,
            });
            Ok(())
        }
        Ok(_) => Err("Login failed".to_string()),
        Err(err) => Err(err.user_message()),
    }
}

/// Clear the persisted token and drop the session.
pub fn logout(auth: RwSignal<AuthState>) {
    storage::clear_access_token();
    auth.set(AuthState::default());
}
