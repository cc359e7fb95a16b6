use contracts::system::auth::AuthorizedUser;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<AuthorizedUser>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage on mount.
    if let (Some(token), Some(user)) = (storage::get_token(), storage::get_user()) {
        set_auth_state.set(AuthState {
            token: Some(token),
            user: Some(user),
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login and persist the session
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let user = api::login(email, password).await?;

    storage::save_token(&user.token);
    storage::save_user(&user);

    set_auth_state.set(AuthState {
        token: Some(user.token.clone()),
        user: Some(user),
    });

    Ok(())
}

/// Helper: Perform logout and drop the stored session
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
