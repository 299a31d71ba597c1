//! Login flow
//!
//! The screen state is a plain value. [`reduce`] applies one event to it and
//! [`LoginFlow::submit`] drives a submission against the user store and the
//! session.

use tracing::{error, info, warn};

use crate::error::{AuthError, AuthResult};
use crate::models::{LoginCredentials, User};
use crate::repositories::UserRepository;
use crate::session::SessionManager;
use crate::validation::validate_email;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure(String),
}

/// Everything the login screen renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub status: LoginStatus,
}

impl LoginState {
    pub fn is_loading(&self) -> bool {
        self.status == LoginStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == LoginStatus::Success
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoginStatus::Failure(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submitted,
    /// Result of a submission; the error carries the message to display
    Completed(Result<(), String>),
    /// The screen has navigated away after a success
    SuccessAcknowledged,
}

pub fn reduce(state: LoginState, event: LoginEvent) -> LoginState {
    match event {
        LoginEvent::EmailChanged(email) => LoginState { email, ..state },
        LoginEvent::PasswordChanged(password) => LoginState { password, ..state },
        LoginEvent::Submitted if state.is_loading() => state,
        LoginEvent::Submitted => LoginState {
            status: LoginStatus::Submitting,
            ..state
        },
        LoginEvent::Completed(outcome) if state.is_loading() => LoginState {
            status: match outcome {
                Ok(()) => LoginStatus::Success,
                Err(reason) => LoginStatus::Failure(reason),
            },
            ..state
        },
        LoginEvent::Completed(_) => state,
        LoginEvent::SuccessAcknowledged if state.is_success() => LoginState {
            status: LoginStatus::Idle,
            ..state
        },
        LoginEvent::SuccessAcknowledged => state,
    }
}

/// Checks credentials against the user store and records the session
#[derive(Clone)]
pub struct LoginFlow {
    users: UserRepository,
    session: SessionManager,
}

impl LoginFlow {
    pub fn new(users: UserRepository, session: SessionManager) -> Self {
        Self { users, session }
    }

    /// Authenticate and persist the session on success
    ///
    /// A malformed email fails before the store is queried.
    pub async fn authenticate(&self, credentials: &LoginCredentials) -> AuthResult<User> {
        validate_email(&credentials.email)?;

        let user = self
            .users
            .find_by_credentials(&credentials.email, &credentials.password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        self.session.set_logged_in(&user.email).await?;
        Ok(user)
    }

    /// Run one submission from the current screen state
    ///
    /// Submitting while a previous submission is in flight is a no-op.
    pub async fn submit(&self, state: LoginState) -> LoginState {
        if state.is_loading() {
            return state;
        }

        let state = reduce(state, LoginEvent::Submitted);
        info!("Login attempt for user: {}", state.email);

        let credentials = LoginCredentials {
            email: state.email.clone(),
            password: state.password.clone(),
        };

        let outcome = match self.authenticate(&credentials).await {
            Ok(user) => {
                info!("User {} logged in", user.email);
                Ok(())
            }
            Err(e) if e.is_user_error() => {
                warn!("Login rejected for {}: {}", credentials.email, e);
                Err(e.user_message())
            }
            Err(e) => {
                error!("Login failed for {}: {}", credentials.email, e);
                Err(e.user_message())
            }
        };

        reduce(state, LoginEvent::Completed(outcome))
    }
}
