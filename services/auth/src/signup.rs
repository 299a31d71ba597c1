//! Signup flow

use tracing::{error, info, warn};

use crate::error::{AuthError, AuthResult};
use crate::models::{NewUser, User};
use crate::repositories::UserRepository;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Sign up successful!";

/// Fields of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub status: SignupStatus,
}

impl SignupState {
    pub fn is_loading(&self) -> bool {
        self.status == SignupStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == SignupStatus::Success
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SignupStatus::Failure(reason) => Some(reason),
            _ => None,
        }
    }

    /// Notice to show for a finished submission
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            SignupStatus::Success => Some(SIGNUP_SUCCESS_MESSAGE),
            SignupStatus::Failure(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupEvent {
    Submitted,
    Completed(Result<(), String>),
    /// Outcome has been shown; back to a blank form
    Reset,
}

pub fn reduce(state: SignupState, event: SignupEvent) -> SignupState {
    match event {
        SignupEvent::Submitted if state.is_loading() => state,
        SignupEvent::Submitted => SignupState {
            status: SignupStatus::Submitting,
        },
        SignupEvent::Completed(outcome) if state.is_loading() => SignupState {
            status: match outcome {
                Ok(()) => SignupStatus::Success,
                Err(reason) => SignupStatus::Failure(reason),
            },
        },
        SignupEvent::Completed(_) => state,
        SignupEvent::Reset => SignupState::default(),
    }
}

/// Registers new users
#[derive(Clone)]
pub struct SignupFlow {
    users: UserRepository,
}

impl SignupFlow {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Insert `new_user` unless the email is already taken
    pub async fn register(&self, new_user: &NewUser) -> AuthResult<User> {
        if self.users.exists_by_email(&new_user.email).await? {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        self.users.create(new_user).await
    }

    /// Run one submission of `form`, clearing it once the user is registered
    ///
    /// A password/confirmation mismatch returns `state` untouched without
    /// reporting anything, as does submitting while already in flight.
    pub async fn submit(&self, state: SignupState, form: &mut SignupForm) -> SignupState {
        if !form.passwords_match() || state.is_loading() {
            return state;
        }

        let state = reduce(state, SignupEvent::Submitted);
        info!("Signup attempt for email: {}", form.email);

        let outcome = match self.register(&form.to_new_user()).await {
            Ok(user) => {
                info!("Registered user {}", user.id);
                *form = SignupForm::default();
                Ok(())
            }
            Err(e) if e.is_user_error() => {
                warn!("Signup rejected for {}: {}", form.email, e);
                Err(e.user_message())
            }
            Err(e) => {
                error!("Signup failed for {}: {}", form.email, e);
                Err(e.user_message())
            }
        };

        reduce(state, SignupEvent::Completed(outcome))
    }
}
