//! Screens and main-screen tabs

use std::fmt;
use std::str::FromStr;

use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Auth,
    Main,
}

impl Screen {
    /// The screen shown once the splash is over.
    pub fn for_session(state: SessionState) -> Self {
        match state {
            SessionState::LoggedIn => Screen::Main,
            SessionState::LoggedOut => Screen::Auth,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Menu,
    Contacts,
    Profile,
    Cart,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Menu, Tab::Contacts, Tab::Profile, Tab::Cart];

    /// Navigation bar title. The menu tab has none.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Menu => "",
            Tab::Contacts => "Contacts",
            Tab::Profile => "Profile",
            Tab::Cart => "Cart",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Menu => "Menu",
            other => other.title(),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab: {}", s.trim()))
    }
}
