use serde::Serialize;
use tracing::info;

pub mod action {
    pub const COMPUTED: &str = "assessment.computed";
    pub const STORED: &str = "assessment.stored";
    pub const DELETED: &str = "assessment.deleted";
}

pub const RESOURCE_ASSESSMENT: &str = "assessment";

/// A structured audit event for an engine or store action.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    /// Shorthand for an event on an assessment snapshot.
    pub fn assessment(action: &str, assessment_id: impl ToString, actor: impl Into<String>) -> Self {
        Self::new(action, RESOURCE_ASSESSMENT, assessment_id.to_string(), actor)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
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
            audit.actor = %self.actor,
            audit.details = %details,
            "audit event"
        );
    }
}
