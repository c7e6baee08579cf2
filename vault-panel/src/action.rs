//! Panel actions
//!
//! The buttons and forms of the admin dashboard. Each action belongs to a
//! section and names the capability required to enable it, so a single
//! panel implementation can serve every privilege tier.

use serde::{Deserialize, Serialize};
use vault_rbac::Capability;

use crate::section::PanelSection;

/// An operation a session can trigger from the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PanelAction {
    /// Create a platform user.
    CreateUser,
    /// Edit an existing user.
    EditUser,
    /// Permanently delete a user account.
    DeleteUser,
    /// Grant an admin level to a user.
    CreateAdmin,
    /// Change system settings.
    UpdateSettings,
    /// Enable or disable maintenance mode.
    ToggleMaintenance,
    /// Create a compliance rule.
    CreateComplianceRule,
    /// Open an incident.
    CreateIncident,
    /// Resolve or update an incident.
    ResolveIncident,
    /// Freeze a user account.
    FreezeAccount,
    /// Trigger a password reset for a user.
    ResetPassword,
    /// File a suspicious-activity report.
    ReportSuspiciousActivity,
}

impl PanelAction {
    /// The capability required to enable this action.
    ///
    /// Support operations require `manage_incidents`, the capability held
    /// by the moderator tier.
    pub fn required_capability(&self) -> Capability {
        match self {
            PanelAction::CreateUser | PanelAction::EditUser => Capability::ManageUsers,
            PanelAction::DeleteUser => Capability::DeleteUsers,
            PanelAction::CreateAdmin => Capability::CreateAdmins,
            PanelAction::UpdateSettings => Capability::ManageSettings,
            PanelAction::ToggleMaintenance => Capability::ToggleMaintenance,
            PanelAction::CreateComplianceRule => Capability::ManageCompliance,
            PanelAction::CreateIncident
            | PanelAction::ResolveIncident
            | PanelAction::FreezeAccount
            | PanelAction::ResetPassword
            | PanelAction::ReportSuspiciousActivity => Capability::ManageIncidents,
        }
    }

    /// The dashboard section this action is rendered in.
    pub fn section(&self) -> PanelSection {
        match self {
            PanelAction::CreateUser
            | PanelAction::EditUser
            | PanelAction::DeleteUser
            | PanelAction::CreateAdmin => PanelSection::Users,
            PanelAction::UpdateSettings | PanelAction::ToggleMaintenance => PanelSection::System,
            PanelAction::CreateComplianceRule => PanelSection::Compliance,
            PanelAction::CreateIncident | PanelAction::ResolveIncident => PanelSection::Incidents,
            PanelAction::FreezeAccount
            | PanelAction::ResetPassword
            | PanelAction::ReportSuspiciousActivity => PanelSection::Support,
        }
    }

    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelAction::CreateUser => "create_user",
            PanelAction::EditUser => "edit_user",
            PanelAction::DeleteUser => "delete_user",
            PanelAction::CreateAdmin => "create_admin",
            PanelAction::UpdateSettings => "update_settings",
            PanelAction::ToggleMaintenance => "toggle_maintenance",
            PanelAction::CreateComplianceRule => "create_compliance_rule",
            PanelAction::CreateIncident => "create_incident",
            PanelAction::ResolveIncident => "resolve_incident",
            PanelAction::FreezeAccount => "freeze_account",
            PanelAction::ResetPassword => "reset_password",
            PanelAction::ReportSuspiciousActivity => "report_suspicious_activity",
        }
    }

    /// Check if this action permanently removes data.
    pub fn is_destructive(&self) -> bool {
        self.required_capability().is_destructive()
    }

    /// Get all actions in display order.
    pub fn all() -> Vec<Self> {
        vec![
            PanelAction::CreateUser,
            PanelAction::EditUser,
            PanelAction::DeleteUser,
            PanelAction::CreateAdmin,
            PanelAction::UpdateSettings,
            PanelAction::ToggleMaintenance,
            PanelAction::CreateComplianceRule,
            PanelAction::CreateIncident,
            PanelAction::ResolveIncident,
            PanelAction::FreezeAccount,
            PanelAction::ResetPassword,
            PanelAction::ReportSuspiciousActivity,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_actions_live_in_visible_sections() {
        // A role that may perform an action must also see the tab the
        // action is rendered in, otherwise the button is unreachable.
        for role in vault_rbac::Role::all() {
            let perms = vault_rbac::PermissionSet::for_role(role);
            for action in PanelAction::all() {
                if !perms.allows(action.required_capability()) {
                    continue;
                }
                let visible = match action.section().required_capability() {
                    Some(cap) => perms.allows(cap),
                    None => true,
                };
                assert!(
                    visible,
                    "{} enabled for {} but its tab is hidden",
                    action.as_str(),
                    role.as_str()
                );
            }
        }
    }

    #[test]
    fn test_super_admin_only_actions() {
        for action in [
            PanelAction::DeleteUser,
            PanelAction::CreateAdmin,
            PanelAction::UpdateSettings,
            PanelAction::ToggleMaintenance,
        ] {
            let cap = action.required_capability();
            assert!(
                !vault_rbac::PermissionSet::for_role(vault_rbac::Role::Admin).allows(cap),
                "{} should be super-admin only",
                action.as_str()
            );
        }
    }

    #[test]
    fn test_support_actions_need_incident_capability() {
        for action in [
            PanelAction::FreezeAccount,
            PanelAction::ResetPassword,
            PanelAction::ReportSuspiciousActivity,
        ] {
            assert_eq!(action.required_capability(), Capability::ManageIncidents);
            assert_eq!(action.section(), PanelSection::Support);
        }
    }

    #[test]
    fn test_destructive_classification() {
        assert!(PanelAction::DeleteUser.is_destructive());
        assert!(!PanelAction::CreateUser.is_destructive());
        assert!(!PanelAction::FreezeAccount.is_destructive());
    }
}
