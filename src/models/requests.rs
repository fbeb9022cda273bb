//! Request DTOs for the user API
//!
//! Defines the structure of incoming HTTP request bodies.
//!
//! Fields deserialize as raw JSON values so the loose presence check can be
//! applied: empty strings, numeric zero and `false` all count as missing,
//! matching the service's historical behavior. No field-format validation
//! (e.g. email shape) is performed.

use serde::Deserialize;
use serde_json::Value;

/// Loose presence check on a JSON field.
///
/// Returns the field stringified when it is present and truthy, `None`
/// otherwise. Missing, `null`, `""`, `0` (including `0.0` and `-0`) and
/// `false` count as missing; other values are kept and rendered the way
/// string interpolation would render them.
fn present(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(v @ (Value::Array(_) | Value::Object(_))) => Some(v.to_string()),
        _ => None,
    }
}

/// Request body for user creation (POST /users)
///
/// All three fields are required and must be truthy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl CreateUserRequest {
    pub fn id(&self) -> Option<String> {
        present(&self.id)
    }

    pub fn name(&self) -> Option<String> {
        present(&self.name)
    }

    pub fn email(&self) -> Option<String> {
        present(&self.email)
    }
}

/// Request body for user update (PUT /users/:id)
///
/// Both fields are optional, but at least one must be truthy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl UpdateUserRequest {
    /// Field/value pairs for the fields that were actually supplied,
    /// in `name`, `email` order.
    pub fn supplied_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();
        if let Some(name) = present(&self.name) {
            fields.push(("name".to_string(), name));
        }
        if let Some(email) = present(&self.email) {
            fields.push(("email".to_string(), email));
        }
        fields
    }
}
