//! Capabilities
//!
//! Defines the fixed set of named permission bits that gate admin features.
//! Capabilities are what panels and pages query before rendering an action.

use serde::{Deserialize, Serialize};

/// A named permission bit gating an admin feature.
///
/// The set of capabilities is fixed; roles are granted subsets of it via
/// [`crate::PermissionSet::for_role`]. Capabilities never exist in a
/// partial or time-varying state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Create and edit platform users.
    ManageUsers,

    /// Read and change system settings.
    ManageSettings,

    /// Create and maintain compliance rules.
    ManageCompliance,

    /// Open, update, and resolve incidents (includes support operations
    /// such as account freezes and suspicious-activity reports).
    ManageIncidents,

    /// Read the audit log.
    ViewAuditLogs,

    /// Enable or disable platform maintenance mode.
    ToggleMaintenance,

    /// Grant admin levels to other users.
    CreateAdmins,

    /// Permanently delete user accounts.
    DeleteUsers,
}

impl Capability {
    /// Get the string representation of the capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageUsers => "manage_users",
            Capability::ManageSettings => "manage_settings",
            Capability::ManageCompliance => "manage_compliance",
            Capability::ManageIncidents => "manage_incidents",
            Capability::ViewAuditLogs => "view_audit_logs",
            Capability::ToggleMaintenance => "toggle_maintenance",
            Capability::CreateAdmins => "create_admins",
            Capability::DeleteUsers => "delete_users",
        }
    }

    /// Parse a capability from its string representation.
    ///
    /// Accepts the `can_`-prefixed form used by older stored permission
    /// blobs (`"can_manage_users"`) as an alias.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Capability)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use vault_rbac::Capability;
    ///
    /// assert_eq!(Capability::parse("manage_users"), Some(Capability::ManageUsers));
    /// assert_eq!(Capability::parse("can_manage_users"), Some(Capability::ManageUsers));
    /// assert_eq!(Capability::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let name = s.to_lowercase();
        let name = name.strip_prefix("can_").unwrap_or(&name);
        match name {
            "manage_users" => Some(Capability::ManageUsers),
            "manage_settings" => Some(Capability::ManageSettings),
            "manage_compliance" => Some(Capability::ManageCompliance),
            "manage_incidents" => Some(Capability::ManageIncidents),
            "view_audit_logs" => Some(Capability::ViewAuditLogs),
            "toggle_maintenance" => Some(Capability::ToggleMaintenance),
            "create_admins" => Some(Capability::CreateAdmins),
            "delete_users" => Some(Capability::DeleteUsers),
            _ => None,
        }
    }

    /// Get all capabilities.
    pub fn all() -> Vec<Self> {
        vec![
            Capability::ManageUsers,
            Capability::ManageSettings,
            Capability::ManageCompliance,
            Capability::ManageIncidents,
            Capability::ViewAuditLogs,
            Capability::ToggleMaintenance,
            Capability::CreateAdmins,
            Capability::DeleteUsers,
        ]
    }

    /// Check if this capability allows destructive operations.
    ///
    /// # Returns
    ///
    /// `true` if exercising the capability can permanently remove data
    pub fn is_destructive(&self) -> bool {
        matches!(self, Capability::DeleteUsers)
    }

    /// Check if this capability is read-only.
    ///
    /// # Returns
    ///
    /// `true` if the capability grants only viewing access
    pub fn is_read_only(&self) -> bool {
        matches!(self, Capability::ViewAuditLogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_parsing() {
        assert_eq!(Capability::parse("manage_users"), Some(Capability::ManageUsers));
        assert_eq!(
            Capability::parse("toggle_maintenance"),
            Some(Capability::ToggleMaintenance)
        );
        assert_eq!(Capability::parse("delete_users"), Some(Capability::DeleteUsers));
        assert_eq!(Capability::parse("invalid"), None);
        assert_eq!(Capability::parse(""), None);
    }

    #[test]
    fn test_capability_can_prefix_alias() {
        assert_eq!(Capability::parse("can_manage_users"), Some(Capability::ManageUsers));
        assert_eq!(
            Capability::parse("can_view_audit_logs"),
            Some(Capability::ViewAuditLogs)
        );
        // The prefix alone is not a capability
        assert_eq!(Capability::parse("can_"), None);
    }

    #[test]
    fn test_capability_round_trip() {
        for cap in Capability::all() {
            assert_eq!(Capability::parse(cap.as_str()), Some(cap));
        }
    }

    #[test]
    fn test_all_capabilities_count() {
        assert_eq!(Capability::all().len(), 8);
    }

    #[test]
    fn test_classification() {
        assert!(Capability::DeleteUsers.is_destructive());
        assert!(!Capability::ManageUsers.is_destructive());
        assert!(Capability::ViewAuditLogs.is_read_only());
        assert!(!Capability::ManageIncidents.is_read_only());
    }
}
