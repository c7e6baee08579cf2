//! Permission sets
//!
//! The capabilities granted to a role. A permission set is derived
//! deterministically and exclusively from a [`Role`]; it is never mutated
//! in place by the platform (the mutators below exist for composition in
//! tests and tooling).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::capabilities::Capability;
use crate::roles::Role;

/// The set of capabilities granted to a role or session.
///
/// # Example
///
/// ```
/// use vault_rbac::{Capability, PermissionSet, Role};
///
/// let perms = PermissionSet::for_role(Role::Admin);
/// assert!(perms.allows(Capability::ManageUsers));
/// assert!(!perms.allows(Capability::ToggleMaintenance));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSet {
    /// The granted capabilities.
    grants: HashSet<Capability>,
}

impl PermissionSet {
    /// Create a new empty permission set (nothing allowed).
    pub fn new() -> Self {
        Self {
            grants: HashSet::new(),
        }
    }

    /// The permissions granted to a role.
    ///
    /// This is the static role table; it is a total, pure function over
    /// all roles. Identical roles always yield equal sets.
    ///
    /// | capability          | super_admin | admin | moderator | user |
    /// |---------------------|-------------|-------|-----------|------|
    /// | manage_users        | yes         | yes   | no        | no   |
    /// | manage_settings     | yes         | no    | no        | no   |
    /// | manage_compliance   | yes         | yes   | no        | no   |
    /// | manage_incidents    | yes         | yes   | yes       | no   |
    /// | view_audit_logs     | yes         | yes   | no        | no   |
    /// | toggle_maintenance  | yes         | no    | no        | no   |
    /// | create_admins       | yes         | no    | no        | no   |
    /// | delete_users        | yes         | no    | no        | no   |
    pub fn for_role(role: Role) -> Self {
        let grants: &[Capability] = match role {
            Role::SuperAdmin => &[
                Capability::ManageUsers,
                Capability::ManageSettings,
                Capability::ManageCompliance,
                Capability::ManageIncidents,
                Capability::ViewAuditLogs,
                Capability::ToggleMaintenance,
                Capability::CreateAdmins,
                Capability::DeleteUsers,
            ],
            Role::Admin => &[
                Capability::ManageUsers,
                Capability::ManageCompliance,
                Capability::ManageIncidents,
                Capability::ViewAuditLogs,
            ],
            Role::Moderator => &[Capability::ManageIncidents],
            Role::User => &[],
        };

        Self {
            grants: grants.iter().copied().collect(),
        }
    }

    /// Grant a capability.
    pub fn grant(&mut self, capability: Capability) {
        self.grants.insert(capability);
    }

    /// Revoke a capability.
    ///
    /// # Returns
    ///
    /// `true` if the capability was present, `false` otherwise
    pub fn revoke(&mut self, capability: Capability) -> bool {
        self.grants.remove(&capability)
    }

    /// Check whether a capability is granted.
    pub fn allows(&self, capability: Capability) -> bool {
        self.grants.contains(&capability)
    }

    /// Check whether a capability named by string is granted.
    ///
    /// Unknown capability names are never granted.
    ///
    /// # Example
    ///
    /// ```
    /// use vault_rbac::{PermissionSet, Role};
    ///
    /// let perms = PermissionSet::for_role(Role::SuperAdmin);
    /// assert!(perms.allows_str("manage_users"));
    /// assert!(!perms.allows_str("nonexistent_capability"));
    /// ```
    pub fn allows_str(&self, capability: &str) -> bool {
        match Capability::parse(capability) {
            Some(cap) => self.allows(cap),
            None => false,
        }
    }

    /// Get all granted capabilities.
    pub fn all(&self) -> Vec<Capability> {
        self.grants.iter().copied().collect()
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        for cap in &other.grants {
            self.grants.insert(*cap);
        }
    }

    /// Get the count of granted capabilities.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Check if nothing is granted.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Check if this set grants every capability the other set grants.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.grants.iter().all(|cap| self.allows(*cap))
    }
}

impl FromIterator<Capability> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_grants_everything() {
        let perms = PermissionSet::for_role(Role::SuperAdmin);
        assert_eq!(perms.len(), 8);
        for cap in Capability::all() {
            assert!(perms.allows(cap), "super_admin missing {}", cap.as_str());
        }
    }

    #[test]
    fn test_user_grants_nothing() {
        let perms = PermissionSet::for_role(Role::User);
        assert!(perms.is_empty());
        for cap in Capability::all() {
            assert!(!perms.allows(cap));
        }
    }

    #[test]
    fn test_admin_table_row() {
        let perms = PermissionSet::for_role(Role::Admin);
        assert!(perms.allows(Capability::ManageUsers));
        assert!(perms.allows(Capability::ManageCompliance));
        assert!(perms.allows(Capability::ManageIncidents));
        assert!(perms.allows(Capability::ViewAuditLogs));
        assert!(!perms.allows(Capability::ManageSettings));
        assert!(!perms.allows(Capability::ToggleMaintenance));
        assert!(!perms.allows(Capability::CreateAdmins));
        assert!(!perms.allows(Capability::DeleteUsers));
    }

    #[test]
    fn test_moderator_table_row() {
        let perms = PermissionSet::for_role(Role::Moderator);
        assert!(perms.allows(Capability::ManageIncidents));
        assert!(!perms.allows(Capability::ManageSettings));
        assert_eq!(perms.len(), 1);
    }

    #[test]
    fn test_for_role_is_deterministic() {
        for role in Role::all() {
            assert_eq!(PermissionSet::for_role(role), PermissionSet::for_role(role));
        }
    }

    #[test]
    fn test_hierarchy_is_strict_superset_chain() {
        let user = PermissionSet::for_role(Role::User);
        let moderator = PermissionSet::for_role(Role::Moderator);
        let admin = PermissionSet::for_role(Role::Admin);
        let super_admin = PermissionSet::for_role(Role::SuperAdmin);

        assert!(moderator.contains_all(&user) && moderator.len() > user.len());
        assert!(admin.contains_all(&moderator) && admin.len() > moderator.len());
        assert!(super_admin.contains_all(&admin) && super_admin.len() > admin.len());
    }

    #[test]
    fn test_unknown_capability_name_is_denied() {
        for role in Role::all() {
            let perms = PermissionSet::for_role(role);
            assert!(!perms.allows_str("nonexistent_capability"));
        }
    }

    #[test]
    fn test_grant_revoke_merge() {
        let mut perms = PermissionSet::new();
        perms.grant(Capability::ManageIncidents);
        assert!(perms.allows(Capability::ManageIncidents));

        assert!(perms.revoke(Capability::ManageIncidents));
        assert!(!perms.revoke(Capability::ManageIncidents));
        assert!(perms.is_empty());

        let mut merged = PermissionSet::for_role(Role::Moderator);
        merged.merge(&PermissionSet::for_role(Role::Admin));
        assert_eq!(merged, PermissionSet::for_role(Role::Admin));
    }

    #[test]
    fn test_from_iterator() {
        let perms: PermissionSet =
            [Capability::ManageUsers, Capability::ViewAuditLogs].into_iter().collect();
        assert_eq!(perms.len(), 2);
        assert!(perms.allows(Capability::ViewAuditLogs));
    }
}
