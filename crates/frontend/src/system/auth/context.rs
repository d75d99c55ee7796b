use contracts::system::auth::AuthSession;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::gateway::{use_gateway, GatewayHandle};

/// Session state shared through context. `restoring` stays true until
/// the persisted session has been validated (or rejected), so guards
/// and `can_edit` fail closed in the meantime.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub restoring: bool,
    pub session: Option<AuthSession>,
    pub roles: Vec<Role>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            restoring: true,
            session: None,
            roles: Vec::new(),
        }
    }
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self {
            restoring: false,
            session: None,
            roles: Vec::new(),
        }
    }

    pub fn logged_in(session: AuthSession, roles: Vec<Role>) -> Self {
        Self {
            restoring: false,
            session: Some(session),
            roles,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref()?.user.email.as_deref()
    }
}

/// Restores the persisted session on boot and provides the auth state
/// to the whole tree.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(AuthState::default());
    provide_context(state);

    let gateway = use_gateway();
    spawn_local(async move {
        let restored = restore_session(&gateway).await;
        let _ = state.try_set(restored);
    });

    children()
}

async fn restore_session(gateway: &GatewayHandle) -> AuthState {
    let Some(access_token) = storage::get_access_token() else {
        return AuthState::logged_out();
    };

    match api::get_user(&access_token).await {
        Ok(user) => {
            let roles = load_roles(gateway, user.id).await;
            let session = AuthSession {
                access_token,
                refresh_token: storage::get_refresh_token().unwrap_or_default(),
                user,
            };
            AuthState::logged_in(session, roles)
        }
        Err(err) => {
            log::warn!("stored session rejected: {err}");
            // Stale access token; try the refresh token once, then give up.
            if let Some(refresh_token) = storage::get_refresh_token() {
                if let Ok(session) = api::refresh(&refresh_token).await {
                    storage::save_access_token(&session.access_token);
                    storage::save_refresh_token(&session.refresh_token);
                    let roles = load_roles(gateway, session.user.id).await;
                    return AuthState::logged_in(session, roles);
                }
            }
            storage::clear_tokens();
            AuthState::logged_out()
        }
    }
}

async fn load_roles(gateway: &GatewayHandle, user_id: uuid::Uuid) -> Vec<Role> {
    match api::fetch_roles(gateway.0.as_ref(), user_id).await {
        Ok(roles) => roles,
        Err(err) => {
            // No roles means no mutation affordances anywhere.
            log::warn!("role lookup failed: {err}");
            Vec::new()
        }
    }
}

pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Password login: authenticate, persist tokens, resolve roles, then
/// publish the new state.
pub async fn do_login(
    state: RwSignal<AuthState>,
    gateway: GatewayHandle,
    email: String,
    password: String,
) -> Result<(), String> {
    let session = api::sign_in(email, password).await?;
    storage::save_access_token(&session.access_token);
    storage::save_refresh_token(&session.refresh_token);
    let roles = load_roles(&gateway, session.user.id).await;
    state.set(AuthState::logged_in(session, roles));
    Ok(())
}

/// Logout: revoke gateway-side, clear persisted tokens and derived
/// role state.
pub fn do_logout(state: RwSignal<AuthState>) {
    let token = state.get_untracked().session.map(|s| s.access_token);
    spawn_local(async move {
        if let Some(token) = token {
            if let Err(err) = api::sign_out(&token).await {
                log::warn!("sign-out call failed: {err}");
            }
        }
        storage::clear_tokens();
        let _ = state.try_set(AuthState::logged_out());
    });
}
