//! Actor roles that can sign in to the admin panel

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account type that is authenticating
///
/// The role decides which login endpoint is called and which storage slot
/// receives the issued token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Admin,
    Doctor,
}

impl Role {
    /// Every role, in display order
    pub const ALL: [Self; 2] = [Self::Admin, Self::Doctor];

    /// Browser storage key holding this role's token
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Admin => "aToken",
            Self::Doctor => "dToken",
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Doctor => "Doctor",
        }
    }

    /// The other role
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Admin => Self::Doctor,
            Self::Doctor => Self::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_distinct_per_role() {
        assert_eq!(Role::Admin.storage_key(), "aToken");
        assert_eq!(Role::Doctor.storage_key(), "dToken");
    }

    #[test]
    fn toggle_flips_between_roles() {
        assert_eq!(Role::Admin.toggle(), Role::Doctor);
        assert_eq!(Role::Doctor.toggle().toggle(), Role::Doctor);
        assert_eq!(Role::default(), Role::Admin);
    }
}
