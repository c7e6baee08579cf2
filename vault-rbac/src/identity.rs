//! Session identity
//!
//! The platform identifies a session by a plaintext email held in ambient
//! storage for the lifetime of the session. This module abstracts that
//! storage behind [`IdentityProvider`] so role resolution stays a pure
//! function over an explicit input.

use std::sync::RwLock;

/// Source of the current session identity.
///
/// Implementations return the identity string when a session is active and
/// `None` otherwise. Providers are read-only from the resolver's point of
/// view; the resolver never persists what it reads.
pub trait IdentityProvider {
    /// The current session identity, if any.
    fn identity(&self) -> Option<String>;
}

/// In-process identity store with session-duration lifetime.
///
/// Holds the signed-in identity until [`sign_out`](Self::sign_out) clears
/// it. Nothing is persisted across process restarts.
///
/// # Example
///
/// ```
/// use vault_rbac::{IdentityProvider, MemoryIdentityStore};
///
/// let store = MemoryIdentityStore::new();
/// assert!(store.identity().is_none());
///
/// store.sign_in("user@example.com");
/// assert_eq!(store.identity().as_deref(), Some("user@example.com"));
///
/// store.sign_out();
/// assert!(store.identity().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    slot: RwLock<Option<String>>,
}

impl MemoryIdentityStore {
    /// Create an empty store (no active session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signed-in identity, replacing any previous one.
    pub fn sign_in(&self, identity: impl Into<String>) {
        *self.slot.write().expect("identity store lock poisoned") = Some(identity.into());
    }

    /// Clear the stored identity.
    pub fn sign_out(&self) {
        *self.slot.write().expect("identity store lock poisoned") = None;
    }
}

impl IdentityProvider for MemoryIdentityStore {
    fn identity(&self) -> Option<String> {
        self.slot.read().expect("identity store lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_identity() {
        let store = MemoryIdentityStore::new();
        assert_eq!(store.identity(), None);
    }

    #[test]
    fn test_sign_in_replaces_identity() {
        let store = MemoryIdentityStore::new();
        store.sign_in("first@example.com");
        store.sign_in("second@example.com");
        assert_eq!(store.identity().as_deref(), Some("second@example.com"));
    }

    #[test]
    fn test_sign_out_clears_identity() {
        let store = MemoryIdentityStore::new();
        store.sign_in("user@example.com");
        store.sign_out();
        assert_eq!(store.identity(), None);
    }
}
