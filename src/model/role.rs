use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Staff,
    Manager,
    HrAdmin,
}

impl Role {
    /// Manager and HR admin may approve or reject leave requests.
    /// Only the backend enforces this; callers use it to hide controls.
    pub fn can_decide_leaves(&self) -> bool {
        matches!(self, Role::Manager | Role::HrAdmin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_wire_names() {
        assert_eq!(Role::from_str("staff").unwrap(), Role::Staff);
        assert_eq!(Role::from_str("hr_admin").unwrap(), Role::HrAdmin);
        assert_eq!(Role::from_str("MANAGER").unwrap(), Role::Manager);
        assert!(Role::from_str("ceo").is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::HrAdmin).unwrap();
        assert_eq!(json, "\"hr_admin\"");
        assert_eq!(Role::HrAdmin.to_string(), "hr_admin");
    }

    #[test]
    fn only_managers_decide() {
        assert!(!Role::Staff.can_decide_leaves());
        assert!(Role::Manager.can_decide_leaves());
        assert!(Role::HrAdmin.can_decide_leaves());
    }
}
