//! Application context handed to every view: theme, session and navbar
//! state. Built once from persisted settings and torn down back into them.

use serde::{Deserialize, Serialize};

/// Viewport width from which the mobile navbar is always closed.
pub const DESKTOP_MIN_WIDTH: u32 = 768;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Signed-in user, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    /// Restores a session from a persisted user name; blank names are
    /// treated as signed out.
    pub fn restore(user: Option<String>) -> Self {
        Self {
            user: user.filter(|name| !name.trim().is_empty()),
        }
    }

    /// Signs in when both credentials are non-empty.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }
        self.user = Some(username.to_string());
        true
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    minimized: bool,
    mobile_open: bool,
}

impl NavbarState {
    pub fn new(minimized: bool) -> Self {
        Self {
            minimized,
            mobile_open: false,
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Reacts to a viewport resize.
    pub fn resize(&mut self, width: u32) {
        if width >= DESKTOP_MIN_WIDTH {
            self.mobile_open = false;
        }
    }
}

/// Settings surviving between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedContext {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub navbar_minimized: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppContext {
    pub theme: ThemeMode,
    pub session: Session,
    pub navbar: NavbarState,
}

impl AppContext {
    pub fn init(persisted: PersistedContext) -> Self {
        Self {
            theme: persisted.theme,
            session: Session::restore(persisted.user),
            navbar: NavbarState::new(persisted.navbar_minimized),
        }
    }

    /// Consumes the context, returning what should be persisted.
    pub fn teardown(self) -> PersistedContext {
        PersistedContext {
            theme: self.theme,
            user: self.session.user,
            navbar_minimized: self.navbar.minimized,
        }
    }
}
