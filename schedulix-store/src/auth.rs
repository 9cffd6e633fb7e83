//! Auth session slice.
//!
//! State machine over idle → pending → authenticated/error. Every
//! transition into an authenticated state synchronizes durable storage,
//! every transition to idle clears it; the dispatch path in
//! [`Store`](crate::Store) owns that side effect so the reducer here
//! stays pure.

use anyhow::Result;
use schedulix_client::resources::auth::{self, LoginRequest, RegisterRequest};
use schedulix_core::models::{Identity, Tenant};
use schedulix_core::SchedulixError;
use tracing::warn;

use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Idle,
    Pending,
    Authenticated,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub token: Option<String>,
    pub user: Option<Identity>,
    pub tenant: Option<Tenant>,
    pub error: Option<String>,
}

impl AuthState {
    pub fn idle() -> Self {
        Self {
            phase: AuthPhase::Idle,
            token: None,
            user: None,
            tenant: None,
            error: None,
        }
    }

    pub fn authenticated(token: String, user: Identity) -> Self {
        let tenant = user.tenant.clone();
        Self {
            phase: AuthPhase::Authenticated,
            token: Some(token),
            user: Some(user),
            tenant,
            error: None,
        }
    }

    /// Authenticated iff a token is installed. The phase may lag (a
    /// failed re-login leaves phase at `Error` with the old token still
    /// valid); the token is the source of truth.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role names of the current identity; empty when signed out.
    pub fn roles(&self) -> &[String] {
        self.user.as_ref().map(|u| u.roles.as_slice()).unwrap_or(&[])
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone)]
pub enum AuthAction {
    /// Login or register dispatched.
    Started,
    /// Login or register succeeded.
    SignedIn { token: String, user: Identity },
    /// Login or register failed. A previously authenticated session is
    /// retained; a failed re-login is not a logout.
    Failed { message: String },
    /// The "current identity" endpoint returned a fresh profile. The
    /// token and authentication flag are untouched.
    IdentityRefreshed { user: Identity },
    /// Token + identity installed directly, outside the async flow.
    CredentialsInstalled { token: String, user: Identity },
    /// Explicit logout or forced teardown.
    SignedOut,
}

pub fn reduce(state: &AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::Started => AuthState {
            phase: AuthPhase::Pending,
            error: None,
            ..state.clone()
        },
        AuthAction::SignedIn { token, user }
        | AuthAction::CredentialsInstalled { token, user } => {
            AuthState::authenticated(token.clone(), user.clone())
        }
        AuthAction::Failed { message } => AuthState {
            phase: AuthPhase::Error,
            error: Some(message.clone()),
            ..state.clone()
        },
        AuthAction::IdentityRefreshed { user } => {
            if state.token.is_none() {
                return state.clone();
            }
            AuthState {
                tenant: user.tenant.clone(),
                user: Some(user.clone()),
                ..state.clone()
            }
        }
        AuthAction::SignedOut => AuthState::idle(),
    }
}

impl Store {
    /// Authenticate with email + password.
    ///
    /// The session state is fully settled (and persisted) before this
    /// returns; the `Err` carries the structured failure for callers
    /// that render field-level validation.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        self.dispatch_auth(AuthAction::Started);

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match auth::login(self.client(), &request).await {
            Ok(session) => {
                self.dispatch_auth(AuthAction::SignedIn {
                    token: session.token,
                    user: session.user,
                });
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Login failed");
                self.dispatch_auth(AuthAction::Failed { message });
                Err(err)
            }
        }
    }

    /// Register a new account; on success the new identity is signed in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.dispatch_auth(AuthAction::Started);

        match auth::register(self.client(), request).await {
            Ok(session) => {
                self.dispatch_auth(AuthAction::SignedIn {
                    token: session.token,
                    user: session.user,
                });
                Ok(())
            }
            Err(err) => {
                let message = SchedulixError::display_message(&err, "Registration failed");
                self.dispatch_auth(AuthAction::Failed { message });
                Err(err)
            }
        }
    }

    /// Re-fetch the identity behind the current token, replacing profile
    /// fields in place. Idempotent; a failure leaves prior state
    /// untouched (a 401 still tears the session down through the
    /// client's unauthorized handler).
    pub async fn refresh_identity(&self) -> Result<()> {
        if !self.auth_state().is_authenticated() {
            return Ok(());
        }

        match auth::me(self.client()).await {
            Ok(user) => {
                self.dispatch_auth(AuthAction::IdentityRefreshed { user });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "identity refresh failed");
                Err(err)
            }
        }
    }

    /// Sign out: best-effort server call, then clear the in-memory and
    /// durable session unconditionally.
    pub async fn logout(&self) {
        if let Err(err) = auth::logout(self.client()).await {
            warn!(error = %err, "server-side logout failed");
        }
        self.dispatch_auth(AuthAction::SignedOut);
    }

    /// Install a token + identity pair without a network round trip
    /// (credential hand-off). Enforces the same invariants as login.
    pub fn set_credentials(&self, token: String, user: Identity) {
        self.dispatch_auth(AuthAction::CredentialsInstalled { token, user });
    }

    pub(crate) fn force_logout(&self) {
        self.dispatch_auth(AuthAction::SignedOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "pat@clinic.test".to_string(),
            first_name: "Pat".to_string(),
            last_name: "Reception".to_string(),
            roles: vec!["Receptionist".to_string()],
            tenant: None,
        }
    }

    #[test]
    fn failed_relogin_keeps_the_old_session() {
        let signed_in = AuthState::authenticated("tok-1".to_string(), identity());
        let pending = reduce(&signed_in, &AuthAction::Started);
        assert_eq!(pending.phase, AuthPhase::Pending);
        assert!(pending.is_authenticated());

        let failed = reduce(
            &pending,
            &AuthAction::Failed {
                message: "Invalid credentials".to_string(),
            },
        );
        assert_eq!(failed.phase, AuthPhase::Error);
        assert!(failed.is_authenticated());
        assert_eq!(failed.token.as_deref(), Some("tok-1"));
        assert_eq!(failed.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn identity_refresh_requires_a_token() {
        let idle = AuthState::idle();
        let after = reduce(&idle, &AuthAction::IdentityRefreshed { user: identity() });
        assert_eq!(after, idle);

        let signed_in = AuthState::authenticated("tok-1".to_string(), identity());
        let mut refreshed = identity();
        refreshed.first_name = "Patricia".to_string();
        let after = reduce(
            &signed_in,
            &AuthAction::IdentityRefreshed { user: refreshed },
        );
        assert_eq!(after.token.as_deref(), Some("tok-1"));
        assert_eq!(after.phase, AuthPhase::Authenticated);
        assert_eq!(after.user.unwrap().first_name, "Patricia");
    }

    #[test]
    fn signing_out_clears_everything() {
        let signed_in = AuthState::authenticated("tok-1".to_string(), identity());
        let after = reduce(&signed_in, &AuthAction::SignedOut);
        assert_eq!(after, AuthState::idle());
    }
}
