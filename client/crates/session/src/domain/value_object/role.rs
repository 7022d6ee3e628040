use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Owner,
    Admin,
}

impl Role {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Customer => "customer",
            Owner => "owner",
            Admin => "admin",
        }
    }

    /// Owners list their own villas; admins manage everyone's
    #[inline]
    pub const fn can_manage_villas(&self) -> bool {
        matches!(self, Role::Owner | Role::Admin)
    }

    #[inline]
    pub const fn can_book(&self) -> bool {
        matches!(self, Role::Customer)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Parse a role code, ignoring ASCII case
    pub fn from_code(code: &str) -> Result<Self, SessionError> {
        use Role::*;
        let code = code.trim();
        if code.eq_ignore_ascii_case("customer") {
            Ok(Customer)
        } else if code.eq_ignore_ascii_case("owner") {
            Ok(Owner)
        } else if code.eq_ignore_ascii_case("admin") {
            Ok(Admin)
        } else {
            Err(SessionError::InvalidRole(code.to_string()))
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_code(s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("customer").unwrap(), Role::Customer);
        assert_eq!(Role::from_code("owner").unwrap(), Role::Owner);
        assert_eq!(Role::from_code("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_code(" ADMIN ").unwrap(), Role::Admin);
    }

    #[test]
    fn test_role_from_code_rejects_unknown() {
        assert!(matches!(
            Role::from_code("guest"),
            Err(SessionError::InvalidRole(code)) if code == "guest"
        ));
        assert!(Role::from_code("").is_err());
    }

    #[test]
    fn test_role_display_roundtrips_through_from_str() {
        for role in [Role::Customer, Role::Owner, Role::Admin] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        let role: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, Role::Customer);
    }

    #[test]
    fn test_role_checks() {
        assert!(!Role::Customer.can_manage_villas());
        assert!(Role::Owner.can_manage_villas());
        assert!(Role::Admin.can_manage_villas());
        assert!(Role::Customer.can_book());
        assert!(!Role::Owner.can_book());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Owner.is_admin());
    }
}
