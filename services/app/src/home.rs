//! Home screen state

use auth::{AuthResult, SessionFlag, UserRepository};
use storefront::CartState;

const FALLBACK_TITLE: &str = "My App";

/// Initial state of the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScreen {
    pub title: String,
    pub cart: CartState,
}

impl HomeScreen {
    /// Greets the logged-in user by name when one can be found
    pub async fn load(users: &UserRepository, session: Option<&SessionFlag>) -> AuthResult<Self> {
        let email = session.filter(|flag| flag.logged_in).and_then(|flag| flag.email.as_deref());

        let name = match email {
            Some(email) => users.find_by_email(email).await?.map(|user| user.name),
            None => None,
        };

        let title = match name {
            Some(name) if !name.trim().is_empty() => format!("Hello, {}!", name),
            _ => FALLBACK_TITLE.to_string(),
        };

        Ok(Self {
            title,
            cart: CartState::default(),
        })
    }
}
