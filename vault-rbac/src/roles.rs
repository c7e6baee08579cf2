//! Privilege tiers
//!
//! This module defines the coarse-grained role labels a session can hold.
//! Exactly one role is active per session; everything a role may do is
//! derived from it through [`crate::PermissionSet::for_role`].

use serde::{Deserialize, Serialize};

/// Privilege tier of a platform session.
///
/// Roles are hierarchical, with each role granted a strict superset of the
/// capabilities of the role below it. The hierarchy is:
/// User < Moderator < Admin < SuperAdmin
///
/// # Permission Model
///
/// - **User**: No admin capabilities
/// - **Moderator**: Incident handling and support operations
/// - **Admin**: Day-to-day operations (users, compliance, incidents, audit)
/// - **SuperAdmin**: Full system access including settings, maintenance
///   mode, admin creation, and user deletion
///
/// # Examples
///
/// ```
/// use vault_rbac::Role;
///
/// let role = Role::Moderator;
/// assert!(role.is_elevated());
/// assert!(role < Role::Admin);
///
/// assert_eq!(Role::parse("super_admin"), Some(Role::SuperAdmin));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular platform user (no admin capabilities)
    User = 0,

    /// Support staff handling incidents
    Moderator = 1,

    /// Manager-level administrator for day-to-day operations
    Admin = 2,

    /// Full system access
    SuperAdmin = 3,
}

impl Role {
    /// Check if this role carries any admin capabilities at all.
    ///
    /// # Returns
    ///
    /// `true` for Moderator, Admin, and SuperAdmin
    pub fn is_elevated(&self) -> bool {
        *self >= Role::Moderator
    }

    /// Check if this role has manager-level admin privileges.
    ///
    /// # Returns
    ///
    /// `true` for Admin and SuperAdmin
    pub fn is_admin(&self) -> bool {
        *self >= Role::Admin
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_rbac::Role;
    ///
    /// assert_eq!(Role::parse("admin"), Some(Role::Admin));
    /// assert_eq!(Role::parse("SUPER_ADMIN"), Some(Role::SuperAdmin));
    /// assert_eq!(Role::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Self::User),
            "moderator" => Some(Self::Moderator),
            "admin" => Some(Self::Admin),
            "super_admin" | "superadmin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Returns
    ///
    /// Lowercase snake_case string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Get a human-readable display name for the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_rbac::Role;
    ///
    /// assert_eq!(Role::SuperAdmin.display_name(), "Super Admin");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Moderator => "Moderator",
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }

    /// Get all roles, least privileged first.
    pub fn all() -> Vec<Self> {
        vec![Self::User, Self::Moderator, Self::Admin, Self::SuperAdmin]
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}
