//! Response DTOs for the user API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::HashMap;

use serde::Serialize;

/// A user rendered as `{id, ...fields}`.
///
/// The hash fields are flattened next to the id, so the body contains exactly
/// the fields that are stored (or, for updates, the fields that were supplied).
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    /// The user id (taken from the request path or body, not the hash)
    pub id: String,
    /// Stored hash fields, flattened into the object
    #[serde(flatten)]
    pub fields: HashMap<String, String>,
}

impl UserPayload {
    /// Creates a payload from an id and its hash fields.
    pub fn new(id: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Creates a payload from an id and field/value pairs.
    pub fn from_pairs(id: impl Into<String>, pairs: &[(String, String)]) -> Self {
        Self::new(id, pairs.iter().cloned().collect())
    }
}

/// Response body for user creation (POST /users)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Success message
    pub message: String,
    /// The user as created
    pub user: UserPayload,
}

impl CreatedResponse {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let fields = HashMap::from([
            ("name".to_string(), name.into()),
            ("email".to_string(), email.into()),
        ]);
        Self {
            message: "User created".to_string(),
            user: UserPayload::new(id, fields),
        }
    }
}

/// Response body for user update (PUT /users/:id)
///
/// Only echoes the fields that were actually supplied, not the full record.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    /// Success message
    pub message: String,
    /// The id plus the updated fields
    pub user: UserPayload,
}

impl UpdatedResponse {
    pub fn new(id: impl Into<String>, updated_fields: &[(String, String)]) -> Self {
        Self {
            message: "User updated".to_string(),
            user: UserPayload::from_pairs(id, updated_fields),
        }
    }
}

/// Response body for user deletion (DELETE /users/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    /// Success message
    pub message: String,
}

impl DeletedResponse {
    pub fn new(id: &str) -> Self {
        Self {
            message: format!("User with id {} deleted", id),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, always "UP" while the process serves
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

/// Response body for the welcome endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    /// Welcome message
    pub message: String,
    /// Environment label from configuration
    pub environment: String,
    /// Backend connection state ("connected" or "disabled")
    pub redis_status: String,
}

impl WelcomeResponse {
    pub fn new(environment: impl Into<String>, redis_status: impl Into<String>) -> Self {
        Self {
            message: "Welcome to UserAPI".to_string(),
            environment: environment.into(),
            redis_status: redis_status.into(),
        }
    }
}
