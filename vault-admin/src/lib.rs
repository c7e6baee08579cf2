//! # Vault Admin
//!
//! HTTP client for the XCryptoVault admin backend, used by the admin
//! console and support tooling.
//!
//! ## Overview
//!
//! The vault-admin crate covers the full admin API surface:
//!
//! - **System**: status, settings, maintenance mode
//! - **Users**: listing, creation, updates, deletion
//! - **Incidents**: listing, creation, resolution
//! - **Compliance**: rule listing and creation
//! - **Audit**: audit log retrieval
//! - **Support**: account freezes, password resets, suspicious-activity
//!   reports
//!
//! Which of these a session may actually trigger is decided by
//! `vault-rbac` / `vault-panel`; this crate only performs the calls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vault_admin::{AdminClient, AdminConfig};
//!
//! # async fn run() -> Result<(), vault_admin::AdminError> {
//! let config = AdminConfig::from_env();
//! let client = AdminClient::from_config(&config);
//!
//! let status = client.system_status().await?;
//! println!("maintenance: {}", status.maintenance_mode);
//!
//! for user in client.list_users().await? {
//!     println!("{} ({})", user.email, user.admin_level.as_str());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod types;

// Re-export main types for convenience
pub use client::{AdminClient, AdminError};
pub use config::{AdminConfig, ConfigError, ServiceEndpoint};
pub use types::*;
