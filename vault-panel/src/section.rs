//! Dashboard sections
//!
//! The tabs of the admin dashboard. Each section names the capability a
//! session must hold for the tab to be shown.

use serde::{Deserialize, Serialize};
use vault_rbac::Capability;

/// A tab of the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PanelSection {
    /// System overview and headline metrics (shown to every session).
    Overview,
    /// User management (listing, creation, editing).
    Users,
    /// System settings and maintenance mode.
    System,
    /// Compliance rule management.
    Compliance,
    /// Incident listing and resolution.
    Incidents,
    /// Audit log viewer.
    AuditLog,
    /// Support operations (account freezes, password resets,
    /// suspicious-activity reports).
    Support,
}

impl PanelSection {
    /// The capability required to see this section.
    ///
    /// # Returns
    ///
    /// `None` for [`PanelSection::Overview`], which has no gate of its own
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            PanelSection::Overview => None,
            PanelSection::Users => Some(Capability::ManageUsers),
            PanelSection::System => Some(Capability::ManageSettings),
            PanelSection::Compliance => Some(Capability::ManageCompliance),
            PanelSection::Incidents => Some(Capability::ManageIncidents),
            PanelSection::AuditLog => Some(Capability::ViewAuditLogs),
            PanelSection::Support => Some(Capability::ManageIncidents),
        }
    }

    /// Get the string representation of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelSection::Overview => "overview",
            PanelSection::Users => "users",
            PanelSection::System => "system",
            PanelSection::Compliance => "compliance",
            PanelSection::Incidents => "incidents",
            PanelSection::AuditLog => "audit_log",
            PanelSection::Support => "support",
        }
    }

    /// Parse a section from its string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "overview" => Some(PanelSection::Overview),
            "users" => Some(PanelSection::Users),
            "system" => Some(PanelSection::System),
            "compliance" => Some(PanelSection::Compliance),
            "incidents" => Some(PanelSection::Incidents),
            "audit_log" | "audit" => Some(PanelSection::AuditLog),
            "support" => Some(PanelSection::Support),
            _ => None,
        }
    }

    /// Get a human-readable title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            PanelSection::Overview => "Overview",
            PanelSection::Users => "User Management",
            PanelSection::System => "System Settings",
            PanelSection::Compliance => "Compliance",
            PanelSection::Incidents => "Incidents",
            PanelSection::AuditLog => "Audit Log",
            PanelSection::Support => "Support",
        }
    }

    /// Get all sections in display order.
    pub fn all() -> Vec<Self> {
        vec![
            PanelSection::Overview,
            PanelSection::Users,
            PanelSection::System,
            PanelSection::Compliance,
            PanelSection::Incidents,
            PanelSection::AuditLog,
            PanelSection::Support,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_round_trip() {
        for section in PanelSection::all() {
            assert_eq!(PanelSection::parse(section.as_str()), Some(section));
        }
        assert_eq!(PanelSection::parse("invalid"), None);
    }

    #[test]
    fn test_audit_alias() {
        assert_eq!(PanelSection::parse("audit"), Some(PanelSection::AuditLog));
    }

    #[test]
    fn test_only_overview_is_ungated() {
        for section in PanelSection::all() {
            match section {
                PanelSection::Overview => assert!(section.required_capability().is_none()),
                _ => assert!(section.required_capability().is_some()),
            }
        }
    }

    #[test]
    fn test_support_gated_like_incidents() {
        assert_eq!(
            PanelSection::Support.required_capability(),
            PanelSection::Incidents.required_capability()
        );
    }
}
