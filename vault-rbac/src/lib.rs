//! # Vault RBAC (Role-Based Access Control)
//!
//! This crate provides the permission model for the XCryptoVault platform,
//! shared by the web dashboard, the admin console, and support tooling.
//!
//! ## Overview
//!
//! The vault-rbac crate handles:
//! - **Roles**: The privilege tiers a session can hold
//! - **Capabilities**: Named permission bits gating admin features
//! - **Permission Sets**: The capabilities granted to each role
//! - **Resolution**: Mapping a session identity to a role and its permissions
//!
//! ## Architecture
//!
//! ```text
//! Identity (email) ──resolve_role──▶ Role ──permissions_for──▶ PermissionSet
//!                                                                  │
//!                                               can_access ◀───────┘
//! ```
//!
//! Every function in this crate is total and side-effect-free: unknown
//! identities resolve to the least-privileged role, unknown capability
//! names answer `false`, and nothing here panics or blocks.
//!
//! ## Usage
//!
//! ```rust
//! use vault_rbac::{Capability, Role, RoleResolver};
//!
//! let role = RoleResolver::resolve_role("admin@xcryptovault.com");
//! assert_eq!(role, Role::SuperAdmin);
//!
//! let permissions = RoleResolver::permissions_for(role);
//! assert!(permissions.allows(Capability::ManageUsers));
//!
//! // Point queries by capability name
//! assert!(RoleResolver::can_access(role, "toggle_maintenance"));
//! assert!(!RoleResolver::can_access(Role::User, "toggle_maintenance"));
//! ```
//!
//! ## Identity
//!
//! The session identity (currently a plaintext email held for the lifetime
//! of the session) is consumed through the [`IdentityProvider`] trait so the
//! resolver stays a pure function over an explicit input rather than reading
//! ambient storage. [`MemoryIdentityStore`] is the in-process implementation.
//!
//! ## Integration
//!
//! - `vault-panel` derives the admin panel layout from a role's permissions
//! - `vault-admin` performs the API calls those panels trigger

pub mod capabilities;
pub mod identity;
pub mod permissions;
pub mod resolver;
pub mod roles;

// Re-export main types for convenience
pub use capabilities::Capability;
pub use identity::{IdentityProvider, MemoryIdentityStore};
pub use permissions::PermissionSet;
pub use resolver::RoleResolver;
pub use roles::Role;
