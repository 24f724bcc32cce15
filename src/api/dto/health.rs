//! Health check DTOs for API responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "version": "0.1.0",
    "timestamp": "2026-01-01T12:00:00Z",
    "checks": {
        "database": {
            "status": "healthy",
            "message": "Connected",
            "response_time_ms": 5
        }
    }
}))]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Timestamp of the health check (RFC 3339)
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
    /// Detailed checks keyed by component name
    pub checks: BTreeMap<String, ComponentHealth>,
}

/// Health status enumeration, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Worst status among the component checks; healthy when there are none.
    pub fn overall<'a>(checks: impl IntoIterator<Item = &'a ComponentHealth>) -> Self {
        checks
            .into_iter()
            .map(|check| check.status)
            .max()
            .unwrap_or(HealthStatus::Healthy)
    }
}

/// Individual component health information.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    /// Optional message with details
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(status: HealthStatus) -> ComponentHealth {
        ComponentHealth {
            status,
            message: None,
            response_time_ms: Some(1),
        }
    }

    #[test]
    fn test_health_status_serialization() {
        let json = serde_json::to_string(&HealthStatus::Degraded).unwrap();
        assert_eq!(json, "\"degraded\"");
    }

    #[test]
    fn test_overall_status_is_worst_component() {
        let checks = [check(HealthStatus::Healthy), check(HealthStatus::Unhealthy)];
        assert_eq!(HealthStatus::overall(&checks), HealthStatus::Unhealthy);

        let checks = [check(HealthStatus::Degraded), check(HealthStatus::Healthy)];
        assert_eq!(HealthStatus::overall(&checks), HealthStatus::Degraded);

        assert_eq!(HealthStatus::overall(&[]), HealthStatus::Healthy);
    }
}
