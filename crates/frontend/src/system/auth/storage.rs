use contracts::domain::common::RecordId;
use web_sys::window;

const TOKEN_KEY: &str = "auth_token";
const PENDING_USER_KEY: &str = "pending_user_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save the bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get the bearer token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// The user waiting for a one-time code lives only as long as the browser tab.
pub fn save_pending_user_id(user_id: RecordId) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(PENDING_USER_KEY, &user_id.to_string());
    }
}

pub fn get_pending_user_id() -> Option<RecordId> {
    get_session_storage()?
        .get_item(PENDING_USER_KEY)
        .ok()??
        .parse()
        .ok()
}

pub fn clear_pending_user_id() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(PENDING_USER_KEY);
    }
}

/// Forget everything about the session
pub fn clear_session() {
    clear_token();
    clear_pending_user_id();
}
