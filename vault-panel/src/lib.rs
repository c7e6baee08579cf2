//! # Vault Panel
//!
//! Capability-driven admin panel model for the XCryptoVault platform.
//!
//! ## Overview
//!
//! The admin console renders one dashboard whose sections and actions vary
//! by privilege tier. Instead of one hand-written panel per role, this
//! crate derives a single parametrized layout from a role's permission
//! set:
//!
//! - **Sections**: the dashboard tabs a session may open
//! - **Actions**: the buttons and forms enabled within those tabs
//! - **AdminPanel**: the derived layout, answering visibility queries
//!
//! ## Architecture
//!
//! ```text
//! Role ──permissions_for──▶ PermissionSet ──▶ AdminPanel
//!                                               ├─ sections()
//!                                               └─ actions()
//! ```
//!
//! Every section and action names the [`Capability`](vault_rbac::Capability)
//! it requires; the panel is a pure derivation with no state of its own.
//!
//! ## Usage
//!
//! ```rust
//! use vault_panel::{AdminPanel, PanelAction, PanelSection};
//! use vault_rbac::Role;
//!
//! let panel = AdminPanel::for_role(Role::Moderator);
//!
//! assert!(panel.is_section_visible(PanelSection::Incidents));
//! assert!(panel.is_action_enabled(PanelAction::FreezeAccount));
//! assert!(!panel.is_section_visible(PanelSection::System));
//! ```

pub mod action;
pub mod panel;
pub mod section;

// Re-export main types for convenience
pub use action::PanelAction;
pub use panel::AdminPanel;
pub use section::PanelSection;
