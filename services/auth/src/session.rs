//! Session management on top of the persistent preference store
//!
//! The session is an explicit context object: construct one per process,
//! [`SessionManager::load`] it at start-up and hand clones to whatever needs
//! to read or change the login state.

use std::sync::Arc;

use common::PreferenceStore;
use tokio::sync::watch;
use tracing::info;

use crate::error::AuthResult;
use crate::models::SessionFlag;

const LOGGED_IN_KEY: &str = "is_logged_in";
const EMAIL_KEY: &str = "user_email";

/// Session manager for the persisted login flag
///
/// Observers see `None` until the first [`load`](Self::load) completes.
#[derive(Clone)]
pub struct SessionManager {
    prefs: PreferenceStore,
    state: Arc<watch::Sender<Option<SessionFlag>>>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(prefs: PreferenceStore) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            prefs,
            state: Arc::new(state),
        }
    }

    /// Read the persisted flag and publish it
    pub async fn load(&self) -> AuthResult<SessionFlag> {
        let logged_in = self.prefs.get(LOGGED_IN_KEY).await?.as_deref() == Some("true");
        let email = if logged_in {
            self.prefs.get(EMAIL_KEY).await?
        } else {
            None
        };

        let flag = SessionFlag { logged_in, email };
        info!("Loaded session, logged in: {}", flag.logged_in);
        self.publish(flag.clone());

        Ok(flag)
    }

    /// Latest published flag, `None` while still loading
    pub fn current(&self) -> Option<SessionFlag> {
        self.state.borrow().clone()
    }

    /// Stream of session changes
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionFlag>> {
        self.state.subscribe()
    }

    /// Persist a successful login
    pub async fn set_logged_in(&self, email: &str) -> AuthResult<()> {
        info!("Creating session for user: {}", email);

        self.prefs
            .set_many(&[(EMAIL_KEY, email), (LOGGED_IN_KEY, "true")])
            .await?;
        self.publish(SessionFlag::logged_in(email));

        Ok(())
    }

    /// Log out and forget the stored email
    pub async fn clear(&self) -> AuthResult<()> {
        info!("Clearing session");

        self.prefs.delete_many(&[LOGGED_IN_KEY, EMAIL_KEY]).await?;
        self.publish(SessionFlag::logged_out());

        Ok(())
    }

    fn publish(&self, flag: SessionFlag) {
        self.state.send_replace(Some(flag));
    }
}
