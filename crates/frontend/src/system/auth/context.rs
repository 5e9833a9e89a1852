use contracts::domain::common::RecordId;
use contracts::system::auth::AuthUser;
use contracts::system::permissions::can_access;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<AuthUser>,
    /// Set between a login that asked for a code and its verification.
    pub pending_user_id: Option<RecordId>,
    /// The stored token has been validated (or there was none).
    pub checked: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(AuthUser::is_admin).unwrap_or(false)
    }

    pub fn can_access(&self, key: Option<&str>) -> bool {
        can_access(self.user.as_ref(), key)
    }

    fn signed_out() -> Self {
        Self {
            checked: true,
            ..Self::default()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let token = storage::get_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        checked: token.is_none(),
        access_token: token,
        user: None,
        pending_user_id: storage::get_pending_user_id(),
    });

    // Validate a stored token once on mount
    Effect::new(move |_| {
        if auth_state.with_untracked(|s| s.access_token.is_some() && !s.checked) {
            spawn_local(async move {
                refresh_user(set_auth_state).await;
            });
        }
    });

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

/// Reload the session user; an invalid session signs out.
pub async fn refresh_user(set_auth_state: WriteSignal<AuthState>) {
    match api::get_current_user().await {
        Ok(user) => {
            log::debug!("session user {} loaded", user.id);
            set_auth_state.update(|s| {
                s.access_token = storage::get_token();
                s.user = Some(user);
                s.checked = true;
            });
        }
        Err(e) => {
            log::warn!("session check failed: {}", e);
            storage::clear_session();
            set_auth_state.set(AuthState::signed_out());
        }
    }
}

/// Store a freshly issued token and load its user.
pub async fn complete_login(set_auth_state: WriteSignal<AuthState>, token: String) {
    storage::save_token(&token);
    storage::clear_pending_user_id();
    set_auth_state.set(AuthState {
        access_token: Some(token),
        ..AuthState::default()
    });
    refresh_user(set_auth_state).await;
}

/// Credentials were accepted, a code was emailed to the user.
pub fn begin_verification(set_auth_state: WriteSignal<AuthState>, user_id: RecordId) {
    storage::save_pending_user_id(user_id);
    set_auth_state.update(|s| s.pending_user_id = Some(user_id));
}

pub fn cancel_verification(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_pending_user_id();
    set_auth_state.update(|s| s.pending_user_id = None);
}

/// Helper: Perform logout. Server errors are ignored.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("logout request failed: {}", e);
    }
    storage::clear_session();
    set_auth_state.set(AuthState::signed_out());
}
