use contracts::system::auth::{Role, UserClaims};
use leptos::prelude::*;

use super::{api, session, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserClaims>,
}

impl AuthState {
    /// State for a token; an expired one yields the signed-out state
    pub fn from_token(token: Option<String>, now_ts: i64) -> Self {
        match token.filter(|t| session::is_live(t, now_ts)) {
            Some(token) => Self {
                user: session::decode_claims(&token),
                token: Some(token),
            },
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // restore the session from localStorage
    let restored = AuthState::from_token(storage::get_token(), chrono::Utc::now().timestamp());
    if restored.token.is_none() {
        storage::clear_token();
    }
    let (auth_state, set_auth_state) = signal(restored);

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

/// Role of the signed-in user, if any
pub fn current_role() -> Option<Role> {
    let (auth_state, _) = use_auth();
    auth_state.with_untracked(AuthState::role)
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(email.clone(), password).await?;

    storage::save_token(&response.token);
    let state = AuthState::from_token(Some(response.token), chrono::Utc::now().timestamp());
    if !state.is_authenticated() {
        storage::clear_token();
        return Err("Login failed: the issued token has already expired".to_string());
    }
    log::info!(
        "Signed in as {} ({})",
        email,
        state.role().map(|r| r.as_str()).unwrap_or("no role")
    );
    set_auth_state.set(state);

    Ok(())
}

/// Sign out if the stored token expired mid-session.
///
/// Returns false when the session is gone, so the caller skips its request.
pub fn ensure_session(set_auth_state: WriteSignal<AuthState>) -> bool {
    if session::stored_token_expired() {
        log::info!("Session expired");
        do_logout(set_auth_state);
        return false;
    }
    true
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn token_with(payload: &str) -> String {
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn state_from_live_token_has_role() {
        let token = token_with(r#"{"id":"1","name":"Ann","role":"manager","exp":2000}"#);
        let state = AuthState::from_token(Some(token), 1000);
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::Manager));
    }

    #[test]
    fn expired_token_signs_out() {
        let token = token_with(r#"{"id":"1","role":"manager","exp":10}"#);
        assert_eq!(AuthState::from_token(Some(token), 1000), AuthState::default());
    }

    #[test]
    fn opaque_token_has_no_role() {
        let state = AuthState::from_token(Some("opaque".into()), 1000);
        assert!(state.is_authenticated());
        assert_eq!(state.role(), None);
    }
}
