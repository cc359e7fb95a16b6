use contracts::system::auth::AuthorizedUser;
use web_sys::window;

const TOKEN_KEY: &str = "merdeka-admin-token";
const USER_KEY: &str = "merdeka-admin-user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the session token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get the session token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Save the logged-in user to localStorage
pub fn save_user(user: &AuthorizedUser) {
    if let (Some(storage), Ok(json)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_KEY, &json);
    }
}

/// Get the logged-in user from localStorage
pub fn get_user() -> Option<AuthorizedUser> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the whole stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
