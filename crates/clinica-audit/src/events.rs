use serde::Serialize;
use tracing::info;

/// A structured audit event for a clinical action, such as saving a
/// calculation to a patient's log.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    /// Patient the action concerns.
    pub person_id: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        person_id: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            person_id: person_id.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.person_id = %self.person_id,
            audit.details = %details,
            "audit event"
        );
    }
}
