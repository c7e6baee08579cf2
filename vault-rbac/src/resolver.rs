//! Role resolution
//!
//! Translates a session identity into a [`Role`] and answers capability
//! point queries. Resolution is a static lookup: two well-known identities
//! map to elevated roles and everything else degrades to [`Role::User`],
//! the least-privileged answer.

use crate::capabilities::Capability;
use crate::identity::IdentityProvider;
use crate::permissions::PermissionSet;
use crate::roles::Role;

/// Identity granted the super admin role.
///
/// The identity literals below are a stand-in for a verified credential
/// carrying a signed role claim. Anything not matching them resolves to
/// [`Role::User`].
pub const SUPER_ADMIN_IDENTITY: &str = "admin@xcryptovault.com";

/// Identity granted the manager-level admin role.
pub const ADMIN_IDENTITY: &str = "sudo.de@xcryptovault.com";

/// Maps identities to roles and roles to permissions.
///
/// All operations are pure, stateless lookups: no caching, no transitions,
/// no failure modes. Unknown inputs of any kind degrade to the
/// least-privileged, all-false answer rather than erroring.
///
/// # Example
///
/// ```
/// use vault_rbac::{Role, RoleResolver};
///
/// assert_eq!(RoleResolver::resolve_role("admin@xcryptovault.com"), Role::SuperAdmin);
/// assert_eq!(RoleResolver::resolve_role("random@user.com"), Role::User);
/// ```
pub struct RoleResolver;

impl RoleResolver {
    /// Resolve an identity to its role.
    ///
    /// # Arguments
    ///
    /// * `identity` - The session identity (an email string)
    ///
    /// # Returns
    ///
    /// The role for the identity; unresolvable identities silently map to
    /// [`Role::User`]
    pub fn resolve_role(identity: &str) -> Role {
        match identity {
            SUPER_ADMIN_IDENTITY => Role::SuperAdmin,
            ADMIN_IDENTITY => Role::Admin,
            _ => Role::User,
        }
    }

    /// Resolve the current role through an identity provider.
    ///
    /// An absent identity resolves to [`Role::User`], the same as an
    /// unrecognized one.
    ///
    /// # Example
    ///
    /// ```
    /// use vault_rbac::{MemoryIdentityStore, Role, RoleResolver};
    ///
    /// let store = MemoryIdentityStore::new();
    /// assert_eq!(RoleResolver::resolve(&store), Role::User);
    ///
    /// store.sign_in("sudo.de@xcryptovault.com");
    /// assert_eq!(RoleResolver::resolve(&store), Role::Admin);
    /// ```
    pub fn resolve<P: IdentityProvider>(provider: &P) -> Role {
        match provider.identity() {
            Some(identity) => Self::resolve_role(&identity),
            None => Role::default(),
        }
    }

    /// Get the permission set for a role.
    ///
    /// Delegates to the static role table; see
    /// [`PermissionSet::for_role`].
    pub fn permissions_for(role: Role) -> PermissionSet {
        PermissionSet::for_role(role)
    }

    /// Check whether a role grants a capability named by string.
    ///
    /// Unknown capability names return `false`; this never panics.
    ///
    /// # Arguments
    ///
    /// * `role` - The role to query
    /// * `capability` - The capability name (e.g. `"manage_users"`)
    pub fn can_access(role: Role, capability: &str) -> bool {
        match Capability::parse(capability) {
            Some(cap) => Self::permissions_for(role).allows(cap),
            None => false,
        }
    }
}
