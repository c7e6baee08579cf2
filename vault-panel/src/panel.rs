//! Panel layout derivation
//!
//! One parametrized dashboard layout, derived from a permission set.
//! A moderator, an admin, and a super admin all render the same panel
//! component; only the derived section and action lists differ.

use serde::{Deserialize, Serialize};
use vault_rbac::{PermissionSet, Role};

use crate::action::PanelAction;
use crate::section::PanelSection;

/// The admin dashboard layout for one session.
///
/// Pure derivation from a permission set; holds no state beyond the set
/// it was built from and never changes after construction.
///
/// # Example
///
/// ```
/// use vault_panel::{AdminPanel, PanelAction, PanelSection};
/// use vault_rbac::Role;
///
/// let panel = AdminPanel::for_role(Role::Admin);
/// assert!(panel.is_section_visible(PanelSection::Users));
/// assert!(panel.is_action_enabled(PanelAction::CreateUser));
///
/// // Deleting users stays super-admin only
/// assert!(!panel.is_action_enabled(PanelAction::DeleteUser));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminPanel {
    /// The permissions the layout is derived from.
    permissions: PermissionSet,
}

impl AdminPanel {
    /// Derive the panel for a role.
    pub fn for_role(role: Role) -> Self {
        Self::from_permissions(PermissionSet::for_role(role))
    }

    /// Derive the panel directly from a permission set.
    pub fn from_permissions(permissions: PermissionSet) -> Self {
        Self { permissions }
    }

    /// The permission set this layout was derived from.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Check whether a section is shown.
    ///
    /// Ungated sections are always shown.
    pub fn is_section_visible(&self, section: PanelSection) -> bool {
        match section.required_capability() {
            Some(cap) => self.permissions.allows(cap),
            None => true,
        }
    }

    /// Check whether an action is enabled.
    pub fn is_action_enabled(&self, action: PanelAction) -> bool {
        self.permissions.allows(action.required_capability())
    }

    /// The visible sections, in display order.
    pub fn sections(&self) -> Vec<PanelSection> {
        PanelSection::all()
            .into_iter()
            .filter(|s| self.is_section_visible(*s))
            .collect()
    }

    /// The enabled actions, in display order.
    pub fn actions(&self) -> Vec<PanelAction> {
        PanelAction::all()
            .into_iter()
            .filter(|a| self.is_action_enabled(*a))
            .collect()
    }

    /// The enabled actions within one section.
    pub fn actions_for_section(&self, section: PanelSection) -> Vec<PanelAction> {
        self.actions()
            .into_iter()
            .filter(|a| a.section() == section)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vault_rbac::Capability;

    #[test]
    fn test_plain_user_sees_only_overview() {
        let panel = AdminPanel::for_role(Role::User);
        assert_eq!(panel.sections(), vec![PanelSection::Overview]);
        assert!(panel.actions().is_empty());
    }

    #[test]
    fn test_moderator_panel() {
        let panel = AdminPanel::for_role(Role::Moderator);

        assert_eq!(
            panel.sections(),
            vec![
                PanelSection::Overview,
                PanelSection::Incidents,
                PanelSection::Support,
            ]
        );
        assert!(panel.is_action_enabled(PanelAction::FreezeAccount));
        assert!(panel.is_action_enabled(PanelAction::ReportSuspiciousActivity));
        assert!(!panel.is_action_enabled(PanelAction::CreateUser));
        assert!(!panel.is_section_visible(PanelSection::AuditLog));
    }

    #[test]
    fn test_admin_panel() {
        let panel = AdminPanel::for_role(Role::Admin);

        assert_eq!(
            panel.sections(),
            vec![
                PanelSection::Overview,
                PanelSection::Users,
                PanelSection::Compliance,
                PanelSection::Incidents,
                PanelSection::AuditLog,
                PanelSection::Support,
            ]
        );

        // Users tab is visible but its privileged buttons stay disabled
        assert!(panel.is_action_enabled(PanelAction::CreateUser));
        assert!(panel.is_action_enabled(PanelAction::EditUser));
        assert!(!panel.is_action_enabled(PanelAction::DeleteUser));
        assert!(!panel.is_action_enabled(PanelAction::CreateAdmin));
        assert!(!panel.is_section_visible(PanelSection::System));
    }

    #[test]
    fn test_super_admin_panel_is_complete() {
        let panel = AdminPanel::for_role(Role::SuperAdmin);
        assert_eq!(panel.sections(), PanelSection::all());
        assert_eq!(panel.actions(), PanelAction::all());
    }

    #[test]
    fn test_actions_for_section() {
        let panel = AdminPanel::for_role(Role::SuperAdmin);
        assert_eq!(
            panel.actions_for_section(PanelSection::System),
            vec![PanelAction::UpdateSettings, PanelAction::ToggleMaintenance]
        );

        let moderator = AdminPanel::for_role(Role::Moderator);
        assert!(moderator.actions_for_section(PanelSection::Users).is_empty());
    }

    #[test]
    fn test_custom_permission_set() {
        // A bespoke grant (audit-only reviewer) still derives a coherent panel
        let perms: PermissionSet = [Capability::ViewAuditLogs].into_iter().collect();
        let panel = AdminPanel::from_permissions(perms);

        assert_eq!(
            panel.sections(),
            vec![PanelSection::Overview, PanelSection::AuditLog]
        );
        assert!(panel.actions().is_empty());
    }

    #[test]
    fn test_panel_serializes() {
        let panel = AdminPanel::for_role(Role::Moderator);
        let json = serde_json::to_string(&panel).unwrap();
        let back: AdminPanel = serde_json::from_str(&json).unwrap();
        assert_eq!(panel, back);
    }
}
