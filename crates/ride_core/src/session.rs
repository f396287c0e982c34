//! Role selection and the logged-in toggle. No authentication happens here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Rider,
    Driver,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Rider => "Rider",
            Role::Driver => "Driver",
        }
    }
}

/// Which top-level screen the app shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    RoleSelection,
    Dashboard(Role),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    role: Option<Role>,
    logged_in: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Picking a role also logs in.
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
        self.logged_in = true;
    }

    pub fn switch_mode(&mut self) {
        self.role = None;
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    /// A logged-in session without a role falls back to role selection.
    pub fn screen(&self) -> Screen {
        match (self.logged_in, self.role) {
            (true, Some(role)) => Screen::Dashboard(role),
            _ => Screen::RoleSelection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_shows_role_selection() {
        assert_eq!(Session::new().screen(), Screen::RoleSelection);
    }

    #[test]
    fn selecting_a_role_opens_its_dashboard() {
        let mut session = Session::new();
        session.select_role(Role::Driver);
        assert!(session.is_logged_in());
        assert_eq!(session.screen(), Screen::Dashboard(Role::Driver));
    }

    #[test]
    fn switch_mode_keeps_login_but_returns_to_selection() {
        let mut session = Session::new();
        session.select_role(Role::Rider);
        session.switch_mode();
        assert!(session.is_logged_in());
        assert_eq!(session.role(), None);
        assert_eq!(session.screen(), Screen::RoleSelection);
    }

    #[test]
    fn logout_returns_to_selection() {
        let mut session = Session::new();
        session.select_role(Role::Rider);
        session.logout();
        assert_eq!(session.screen(), Screen::RoleSelection);
        session.select_role(Role::Driver);
        assert_eq!(session.screen(), Screen::Dashboard(Role::Driver));
    }
}
