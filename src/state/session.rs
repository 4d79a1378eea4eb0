#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Account category persisted alongside the session marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Customer,
    Restaurant,
    Delivery,
    Admin,
    /// Absent or unrecognized stored value.
    #[default]
    Unset,
}

impl Role {
    /// Roles offered on the login form, in display order.
    pub const LOGIN_CHOICES: [Role; 4] = [Role::Admin, Role::Restaurant, Role::Customer, Role::Delivery];

    /// Parse the stored role string. Matching is exact; anything else is `Unset`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("CUSTOMER") => Role::Customer,
            Some("RESTAURANT") => Role::Restaurant,
            Some("DELIVERY") => Role::Delivery,
            Some("ADMIN") => Role::Admin,
            _ => Role::Unset,
        }
    }

    /// Wire/storage spelling of the role, if it has one.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Role::Customer => Some("CUSTOMER"),
            Role::Restaurant => Some("RESTAURANT"),
            Role::Delivery => Some("DELIVERY"),
            Role::Admin => Some("ADMIN"),
            Role::Unset => None,
        }
    }

    /// Human-readable label for the login form.
    pub fn label(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::Restaurant => "Restaurant",
            Role::Delivery => "Rider",
            Role::Admin => "Platform admin",
            Role::Unset => "None",
        }
    }
}

/// Snapshot of the persisted session used by the navigation guard.
///
/// `role` only carries meaning while `has_user` is true; use
/// [`SessionContext::effective_role`] to read it safely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub has_user: bool,
    pub role: Role,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(role: Role) -> Self {
        Self { has_user: true, role }
    }

    /// Build from raw storage values. An empty `current_user` counts as absent.
    pub fn from_raw(current_user: Option<&str>, role: Option<&str>) -> Self {
        Self {
            has_user: current_user.is_some_and(|v| !v.is_empty()),
            role: Role::parse(role),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.has_user
    }

    /// Role of the signed-in user, or `None` without a session.
    pub fn effective_role(&self) -> Option<Role> {
        self.has_user.then_some(self.role)
    }

    /// True when signed in with exactly `role`.
    pub fn is_signed_in_as(&self, role: Role) -> bool {
        self.effective_role() == Some(role)
    }
}
