//! Admin API types.
//!
//! Request parameters, model types, and the envelope responses returned by
//! the admin backend. Timestamps are RFC 3339; identifiers are the
//! backend's integer row ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vault_rbac::Role;

/// A platform user as seen by the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// User id.
    pub id: i64,

    /// Email address.
    pub email: String,

    /// Display name.
    pub name: String,

    /// Admin privilege tier ("user" when the account has none).
    #[serde(default)]
    pub admin_level: Role,

    /// Stored permission blob for the account, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<serde_json::Value>,

    /// Whether the account is active.
    #[serde(default)]
    pub is_active: bool,

    /// Account creation time.
    pub created_at: DateTime<Utc>,

    /// Last login time, if the user has ever logged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

/// Headline system metrics for the overview tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    /// Overall status ("operational", "degraded", ...).
    pub status: String,

    /// Human-readable uptime.
    pub uptime: String,

    /// Database connectivity status.
    pub database: String,

    /// Total registered users.
    pub total_users: i64,

    /// Currently active users.
    pub active_users: i64,

    /// Signups in the last 24 hours.
    pub new_users_24h: i64,

    /// Incidents not yet resolved.
    pub open_incidents: i64,

    /// Whether maintenance mode is on.
    pub maintenance_mode: bool,
}

/// An operational or security incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    /// Incident id.
    pub id: i64,

    /// Incident category (e.g. "suspicious_activity", "outage").
    pub incident_type: String,

    /// Severity ("low", "medium", "high", "critical").
    pub severity: String,

    /// Free-form description.
    pub description: String,

    /// Lifecycle status ("open", "investigating", "resolved").
    pub status: String,

    /// When the incident was opened.
    pub created_at: DateTime<Utc>,

    /// When the incident was resolved, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

/// A compliance rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRule {
    /// Rule id.
    pub id: i64,

    /// Rule name.
    pub rule_name: String,

    /// Rule category (e.g. "transaction_limit", "kyc").
    pub rule_type: String,

    /// Rule configuration (schemaless, interpreted by the backend).
    pub rule_config: serde_json::Value,

    /// Whether the rule is enforced.
    #[serde(default)]
    pub is_active: bool,

    /// When the rule was created.
    pub created_at: DateTime<Utc>,
}

/// One audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    /// Entry id.
    pub id: i64,

    /// Email of the acting user.
    pub user_email: String,

    /// Action performed.
    pub action: String,

    /// Type of the affected resource.
    pub resource_type: String,

    /// Id of the affected resource.
    pub resource_id: String,

    /// Additional structured details.
    #[serde(default)]
    pub details: serde_json::Value,

    /// Source IP address.
    pub ip_address: String,

    /// When the action happened.
    pub created_at: DateTime<Utc>,
}

/// Parameters for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserParams {
    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Initial password.
    pub password: String,

    /// Admin privilege tier to grant (omit for a regular user).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_level: Option<Role>,

    /// Stored permission blob (omit to derive from the tier).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<serde_json::Value>,
}

/// Parameters for updating a user.
///
/// Only the present fields are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserParams {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New admin privilege tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_level: Option<Role>,

    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Parameters for toggling maintenance mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceParams {
    /// Whether maintenance mode should be on.
    pub maintenance_mode: bool,

    /// Message shown to users while maintenance is on.
    pub message: String,
}

/// Parameters for opening an incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIncidentParams {
    /// Incident category.
    pub incident_type: String,

    /// Severity ("low", "medium", "high", "critical").
    pub severity: String,

    /// Free-form description.
    pub description: String,
}

/// Parameters for resolving or updating an incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveIncidentParams {
    /// New lifecycle status.
    pub status: String,

    /// Notes recorded with the resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_notes: Option<String>,
}

/// Parameters for creating a compliance rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComplianceRuleParams {
    /// Rule name.
    pub rule_name: String,

    /// Rule category.
    pub rule_type: String,

    /// Rule configuration.
    pub rule_config: serde_json::Value,

    /// Whether the rule is enforced immediately (backend default: true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Parameters for a suspicious-activity report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspiciousActivityParams {
    /// Id of the user the report concerns.
    pub user_id: String,

    /// Kind of activity observed (e.g. "suspicious_login").
    pub activity_type: String,

    /// Description of what was observed.
    pub description: String,

    /// Severity ("low", "medium", "high", "critical").
    pub severity: String,
}

/// Parameters for freezing an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezeAccountParams {
    /// Reason recorded with the freeze.
    pub reason: String,
}

/// Generic acknowledgment returned by mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAck {
    /// Whether the operation succeeded.
    pub success: bool,

    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Id of the created or affected row, when the endpoint reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

// Envelope responses. The backend wraps every collection in a named field
// and omits the field entirely when the collection is empty.

/// Envelope for `GET /admin/system/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatusResponse {
    /// The system status.
    pub system_status: SystemStatus,
}

/// Envelope for `GET /admin/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    /// The users.
    #[serde(default)]
    pub users: Vec<AdminUser>,
}

/// Envelope for `GET /admin/incidents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentsResponse {
    /// The incidents.
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

/// Envelope for `GET /admin/compliance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceRulesResponse {
    /// The compliance rules.
    #[serde(default)]
    pub rules: Vec<ComplianceRule>,
}

/// Envelope for `GET /admin/settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    /// The settings (schemaless key/value bag).
    #[serde(default)]
    pub settings: serde_json::Value,
}

/// Envelope for `GET /admin/audit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogsResponse {
    /// The audit log entries.
    #[serde(default)]
    pub logs: Vec<AuditLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_user_defaults() {
        // admin_level and is_active may be absent for plain users
        let user: AdminUser = serde_json::from_str(
            r#"{
                "id": 7,
                "email": "random@user.com",
                "name": "Random User",
                "created_at": "2026-01-10T09:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(user.admin_level, Role::User);
        assert!(!user.is_active);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_admin_level_wire_names() {
        let user: AdminUser = serde_json::from_str(
            r#"{
                "id": 1,
                "email": "admin@xcryptovault.com",
                "name": "Root",
                "admin_level": "super_admin",
                "is_active": true,
                "created_at": "2025-11-02T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.admin_level, Role::SuperAdmin);
    }

    #[test]
    fn test_create_user_params_omit_optionals() {
        let params = CreateUserParams {
            name: "New User".to_string(),
            email: "new@user.com".to_string(),
            password: "secret".to_string(),
            admin_level: None,
            permissions: None,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("admin_level").is_none());
        assert!(json.get("permissions").is_none());
    }

    #[test]
    fn test_empty_envelope_defaults() {
        let users: UsersResponse = serde_json::from_str("{}").unwrap();
        assert!(users.users.is_empty());

        let incidents: IncidentsResponse = serde_json::from_str("{}").unwrap();
        assert!(incidents.incidents.is_empty());
    }

    #[test]
    fn test_incident_round_trip() {
        let incident = Incident {
            id: 42,
            incident_type: "suspicious_activity".to_string(),
            severity: "high".to_string(),
            description: "Multiple failed withdrawals".to_string(),
            status: "open".to_string(),
            created_at: "2026-02-01T12:00:00Z".parse().unwrap(),
            resolved_at: None,
        };
        let json = serde_json::to_string(&incident).unwrap();
        assert!(!json.contains("resolved_at"));

        let back: Incident = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 42);
        assert_eq!(back.status, "open");
    }
}
