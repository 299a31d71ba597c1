//! Screen routing decisions

use auth::SessionFlag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Session not read yet; show a progress indicator
    Loading,
    Login,
    Signup,
    Home,
    TextSizeDemo,
}

impl Screen {
    pub fn route(&self) -> &'static str {
        match self {
            Screen::Loading => "loading",
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Home => "home",
            Screen::TextSizeDemo => "text-size-demo",
        }
    }
}

/// First screen to show, from the latest observed session value
pub fn start_destination(session: Option<&SessionFlag>) -> Screen {
    match session {
        None => Screen::Loading,
        Some(flag) if flag.logged_in => Screen::Home,
        Some(_) => Screen::Login,
    }
}

/// User actions and flow outcomes that move between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    SignupRequested,
    LoginRequested,
    SignedUp,
    LoggedIn,
    TextSizeDemoRequested,
    LoggedOut,
}

/// Screen shown after `event` on `current`; events a screen does not offer
/// leave it in place
pub fn navigate(current: Screen, event: NavigationEvent) -> Screen {
    use NavigationEvent::*;

    match (current, event) {
        (_, LoggedOut) => Screen::Login,
        (Screen::Login, SignupRequested) => Screen::Signup,
        (Screen::Login, LoggedIn) => Screen::Home,
        (Screen::Signup, LoginRequested | SignedUp) => Screen::Login,
        (Screen::Home, TextSizeDemoRequested) => Screen::TextSizeDemo,
        (screen, _) => screen,
    }
}
