//! Admin backend client.
//!
//! HTTP client for the XCryptoVault admin API. Covers system status and
//! maintenance, user CRUD, incidents, compliance rules, settings, audit
//! logs, and the moderator support operations.

use reqwest::{Client, Method};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::config::{AdminConfig, ServiceEndpoint};
use crate::types::*;

/// Admin client errors.
#[derive(Debug, Error)]
pub enum AdminError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// User not found.
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// Incident not found.
    #[error("Incident not found: {0}")]
    IncidentNotFound(i64),

    /// Authentication failed.
    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Admin backend client.
///
/// Provides methods for every operation of the admin API. The client does
/// not enforce permissions; gate calls with `vault-rbac` before making
/// them.
#[derive(Clone)]
pub struct AdminClient {
    /// HTTP client instance.
    client: Client,

    /// Backend endpoint configuration.
    endpoint: ServiceEndpoint,
}

impl AdminClient {
    /// Create a new admin client.
    pub fn new(endpoint: ServiceEndpoint, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, endpoint }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    // ------------------------------------------------------------------
    // System
    // ------------------------------------------------------------------

    /// Get headline system metrics.
    #[instrument(skip(self))]
    pub async fn system_status(&self) -> Result<SystemStatus, AdminError> {
        debug!("Fetching system status");

        let response = self.request(Method::GET, "/admin/system/status").send().await?;
        let envelope: SystemStatusResponse = self.handle_response(response).await?;
        Ok(envelope.system_status)
    }

    /// Enable or disable maintenance mode.
    ///
    /// # Arguments
    ///
    /// * `enabled` - Whether maintenance mode should be on
    /// * `message` - Message shown to users; a default is used when `None`
    #[instrument(skip(self))]
    pub async fn set_maintenance_mode(
        &self,
        enabled: bool,
        message: Option<&str>,
    ) -> Result<AdminAck, AdminError> {
        debug!("Setting maintenance mode to {}", enabled);

        let params = MaintenanceParams {
            maintenance_mode: enabled,
            message: message.unwrap_or("System maintenance in progress").to_string(),
        };
        let response = self
            .request(Method::POST, "/admin/system/maintenance")
            .json(&params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the system settings bag.
    #[instrument(skip(self))]
    pub async fn system_settings(&self) -> Result<serde_json::Value, AdminError> {
        debug!("Fetching system settings");

        let response = self.request(Method::GET, "/admin/settings").send().await?;
        let envelope: SettingsResponse = self.handle_response(response).await?;
        Ok(envelope.settings)
    }

    /// Replace the system settings bag.
    #[instrument(skip(self, settings))]
    pub async fn update_system_settings(
        &self,
        settings: serde_json::Value,
    ) -> Result<AdminAck, AdminError> {
        debug!("Updating system settings");

        let response = self
            .request(Method::PUT, "/admin/settings")
            .json(&settings)
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// List all platform users.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<AdminUser>, AdminError> {
        debug!("Fetching user list");

        let response = self.request(Method::GET, "/admin/users").send().await?;
        let envelope: UsersResponse = self.handle_response(response).await?;
        Ok(envelope.users)
    }

    /// Create a platform user.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn create_user(&self, params: CreateUserParams) -> Result<AdminAck, AdminError> {
        debug!("Creating user {}", params.email);

        let response = self
            .request(Method::POST, "/admin/users")
            .json(&params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a platform user.
    #[instrument(skip(self, params), fields(user_id = %user_id))]
    pub async fn update_user(
        &self,
        user_id: i64,
        params: UpdateUserParams,
    ) -> Result<AdminAck, AdminError> {
        debug!("Updating user {}", user_id);

        let response = self
            .request(Method::PUT, &format!("/admin/users/{}", user_id))
            .json(&params)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AdminError::UserNotFound(user_id));
        }

        self.handle_response(response).await
    }

    /// Permanently delete a platform user.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn delete_user(&self, user_id: i64) -> Result<AdminAck, AdminError> {
        debug!("Deleting user {}", user_id);

        let response = self
            .request(Method::DELETE, &format!("/admin/users/{}", user_id))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AdminError::UserNotFound(user_id));
        }

        self.handle_response(response).await
    }

    // ------------------------------------------------------------------
    // Incidents
    // ------------------------------------------------------------------

    /// List all incidents.
    #[instrument(skip(self))]
    pub async fn list_incidents(&self) -> Result<Vec<Incident>, AdminError> {
        debug!("Fetching incidents");

        let response = self.request(Method::GET, "/admin/incidents").send().await?;
        let envelope: IncidentsResponse = self.handle_response(response).await?;
        Ok(envelope.incidents)
    }

    /// Open an incident.
    #[instrument(skip(self, params), fields(incident_type = %params.incident_type))]
    pub async fn create_incident(
        &self,
        params: CreateIncidentParams,
    ) -> Result<AdminAck, AdminError> {
        debug!("Opening {} incident", params.incident_type);

        let response = self
            .request(Method::POST, "/admin/incidents")
            .json(&params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Resolve or update an incident.
    #[instrument(skip(self, params), fields(incident_id = %incident_id))]
    pub async fn resolve_incident(
        &self,
        incident_id: i64,
        params: ResolveIncidentParams,
    ) -> Result<AdminAck, AdminError> {
        debug!("Resolving incident {}", incident_id);

        let response = self
            .request(Method::PUT, &format!("/admin/incidents/{}", incident_id))
            .json(&params)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AdminError::IncidentNotFound(incident_id));
        }

        self.handle_response(response).await
    }

    // ------------------------------------------------------------------
    // Compliance
    // ------------------------------------------------------------------

    /// List all compliance rules.
    #[instrument(skip(self))]
    pub async fn list_compliance_rules(&self) -> Result<Vec<ComplianceRule>, AdminError> {
        debug!("Fetching compliance rules");

        let response = self.request(Method::GET, "/admin/compliance").send().await?;
        let envelope: ComplianceRulesResponse = self.handle_response(response).await?;
        Ok(envelope.rules)
    }

    /// Create a compliance rule.
    #[instrument(skip(self, params), fields(rule_name = %params.rule_name))]
    pub async fn create_compliance_rule(
        &self,
        params: CreateComplianceRuleParams,
    ) -> Result<AdminAck, AdminError> {
        debug!("Creating compliance rule {}", params.rule_name);

        let response = self
            .request(Method::POST, "/admin/compliance")
            .json(&params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ------------------------------------------------------------------
    // Audit
    // ------------------------------------------------------------------

    /// Retrieve the audit log.
    #[instrument(skip(self))]
    pub async fn audit_logs(&self) -> Result<Vec<AuditLog>, AdminError> {
        debug!("Fetching audit logs");

        let response = self.request(Method::GET, "/admin/audit").send().await?;
        let envelope: AuditLogsResponse = self.handle_response(response).await?;
        Ok(envelope.logs)
    }

    // ------------------------------------------------------------------
    // Support operations
    // ------------------------------------------------------------------

    /// Freeze a user account.
    #[instrument(skip(self, reason), fields(user_id = %user_id))]
    pub async fn freeze_account(
        &self,
        user_id: i64,
        reason: impl Into<String>,
    ) -> Result<AdminAck, AdminError> {
        debug!("Freezing account {}", user_id);

        let params = FreezeAccountParams { reason: reason.into() };
        let response = self
            .request(Method::POST, &format!("/admin/users/{}/freeze", user_id))
            .json(&params)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AdminError::UserNotFound(user_id));
        }

        self.handle_response(response).await
    }

    /// Trigger a password reset for a user.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn reset_user_password(&self, user_id: i64) -> Result<AdminAck, AdminError> {
        debug!("Resetting password for user {}", user_id);

        let response = self
            .request(Method::POST, &format!("/admin/users/{}/reset-password", user_id))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AdminError::UserNotFound(user_id));
        }

        self.handle_response(response).await
    }

    /// File a suspicious-activity report.
    ///
    /// Reports are recorded as incidents of type `suspicious_activity`
    /// with the report severity and a prefixed description.
    #[instrument(skip(self, params), fields(user_id = %params.user_id))]
    pub async fn report_suspicious_activity(
        &self,
        params: SuspiciousActivityParams,
    ) -> Result<AdminAck, AdminError> {
        self.create_incident(CreateIncidentParams {
            incident_type: "suspicious_activity".to_string(),
            severity: params.severity,
            description: format!("Suspicious activity reported: {}", params.description),
        })
        .await
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Build a request for a path, attaching the API key when configured.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.request(method, self.endpoint.url(path));
        if let Some(ref api_key) = self.endpoint.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }
        request
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<T, AdminError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            error!("Admin API authentication failed");
            return Err(AdminError::AuthenticationFailed);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Admin API error ({}): {}", status.as_u16(), message);
            return Err(AdminError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AdminError::InvalidResponse(e.to_string()))
    }
}
